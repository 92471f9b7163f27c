//! HTTP-backed resolver over reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use atmomap_common::{
    DatePointer, Day, DayManifest, GridSnapshot, Kind, LayerIndex, ViewerError, ViewerResult,
};

use crate::ResourceFetcher;

/// Resolver that reads the hierarchy over HTTP GET.
pub struct HttpResolver {
    client: Client,
    base_url: String,
}

impl HttpResolver {
    /// Create a resolver rooted at `base_url` (with or without a trailing
    /// slash).
    pub fn new(base_url: impl Into<String>) -> ViewerResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| ViewerError::NetworkFailure {
                resource: "http client".to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// GET one JSON resource, bypassing intermediate caches, and decode it.
    #[instrument(skip(self))]
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ViewerResult<T> {
        let url = self.url(path);
        debug!(url = %url, "Fetching resource");

        let response = self
            .client
            .get(&url)
            .header(header::CACHE_CONTROL, "no-cache")
            .header(header::PRAGMA, "no-cache")
            .send()
            .await
            .map_err(|e| ViewerError::NetworkFailure {
                resource: path.to_string(),
                message: e.to_string(),
            })?;

        match response.status() {
            s if s.is_success() => {}
            StatusCode::NOT_FOUND => return Err(ViewerError::NotFound(path.to_string())),
            s => return Err(ViewerError::NotFound(format!("{} (HTTP {})", path, s))),
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ViewerError::NetworkFailure {
                resource: path.to_string(),
                message: e.to_string(),
            })?;

        serde_json::from_slice(&body).map_err(|e| ViewerError::MalformedData {
            resource: path.to_string(),
            message: e.to_string(),
        })
    }
}

fn index_path(date: Day, kind: Kind) -> String {
    format!("{}/{}/index.json", date.folder(), kind.as_path())
}

fn snapshot_path(date: Day, kind: Kind, hhmm: &str) -> String {
    format!("{}/{}/{}.json", date.folder(), kind.as_path(), hhmm)
}

fn manifest_path(date: Day) -> String {
    format!("{}/manifest.json", date.folder())
}

#[async_trait]
impl ResourceFetcher for HttpResolver {
    async fn fetch_latest_date(&self) -> ViewerResult<DatePointer> {
        // A malformed pointer is as useless as a missing one.
        self.get_json::<DatePointer>("latest.json")
            .await
            .map_err(|e| match e {
                ViewerError::MalformedData { resource, .. } => ViewerError::NotFound(resource),
                other => other,
            })
    }

    async fn fetch_layer_index(&self, date: Day, kind: Kind) -> ViewerResult<LayerIndex> {
        self.get_json(&index_path(date, kind)).await
    }

    async fn fetch_grid_snapshot(
        &self,
        date: Day,
        kind: Kind,
        hhmm: &str,
    ) -> ViewerResult<GridSnapshot> {
        self.get_json(&snapshot_path(date, kind, hhmm)).await
    }

    async fn fetch_day_manifest(&self, date: Day) -> ViewerResult<DayManifest> {
        self.get_json(&manifest_path(date)).await
    }
}
