//! Resource resolution for the static JSON data hierarchy.
//!
//! The producer publishes four read-only resources:
//! - `latest.json`: pointer to the most recent date with data
//! - `{date}/{kind}/index.json`: per-day/kind metadata and timestamps
//! - `{date}/{kind}/{HHMM}.json`: the measurement grid for one timestamp
//! - `{date}/manifest.json`: per-date table of contents with run history
//!
//! Every read goes to the network. The producer updates files out of band,
//! so intermediate caches must never mask staleness.

mod http;

pub use http::HttpResolver;

use async_trait::async_trait;

use atmomap_common::{DatePointer, Day, DayManifest, GridSnapshot, Kind, LayerIndex, ViewerResult};

/// Fetch operations over the resource hierarchy.
///
/// One request per call, no retry. The caller decides whether to try
/// again; in practice the next user action re-attempts resolution.
#[async_trait]
pub trait ResourceFetcher: Send + Sync {
    /// Resolve the latest-date pointer.
    ///
    /// Fails with `NotFound` when the pointer is absent or malformed; the
    /// distinction carries no information for this one resource.
    async fn fetch_latest_date(&self) -> ViewerResult<DatePointer>;

    /// Resolve the index for one (date, kind) pair.
    ///
    /// An index with an empty time list is a successful result.
    async fn fetch_layer_index(&self, date: Day, kind: Kind) -> ViewerResult<LayerIndex>;

    /// Resolve the grid snapshot for one timestamp.
    ///
    /// An empty cell list is a successful result.
    async fn fetch_grid_snapshot(
        &self,
        date: Day,
        kind: Kind,
        hhmm: &str,
    ) -> ViewerResult<GridSnapshot>;

    /// Resolve the per-date manifest. Absence is normal for older dates.
    async fn fetch_day_manifest(&self, date: Day) -> ViewerResult<DayManifest>;
}
