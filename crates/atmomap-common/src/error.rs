//! Error types for resource resolution.

use thiserror::Error;

/// Result type alias using ViewerError.
pub type ViewerResult<T> = Result<T, ViewerError>;

/// Failure classification for a single resource read.
///
/// None of these are fatal: they are caught at the render-pipeline boundary
/// and turned into a cleared display plus a status line. The next user
/// action re-attempts resolution.
#[derive(Debug, Error)]
pub enum ViewerError {
    /// Resource absent. Expected whenever data generation lags behind the
    /// selected date, or the day simply has no data.
    #[error("resource not found: {0}")]
    NotFound(String),

    /// Resource present but violates the expected shape. A producer bug.
    #[error("malformed data in {resource}: {message}")]
    MalformedData { resource: String, message: String },

    /// Transport-level failure. Displayed the same as NotFound.
    #[error("network failure fetching {resource}: {message}")]
    NetworkFailure { resource: String, message: String },
}

impl ViewerError {
    /// Whether the failure reads as "no data yet" rather than a producer
    /// bug. NetworkFailure and NotFound are indistinguishable for display.
    pub fn displays_as_missing(&self) -> bool {
        matches!(
            self,
            ViewerError::NotFound(_) | ViewerError::NetworkFailure { .. }
        )
    }

    /// The resource path the failure refers to.
    pub fn resource(&self) -> &str {
        match self {
            ViewerError::NotFound(resource) => resource,
            ViewerError::MalformedData { resource, .. } => resource,
            ViewerError::NetworkFailure { resource, .. } => resource,
        }
    }
}
