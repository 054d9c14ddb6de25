//! Retrieval of zone boundaries from a remote provider.
//!
//! The fetch is a single bounded GET. Any failure, whether transport, status
//! or payload shape, comes back as a [`BoundaryError`] so the caller can
//! treat the zone as unavailable and keep tracking the others.

use crate::config::FetchConfig;
use crate::errors::BoundaryError;
use crate::geojson::parse_zone;
use crate::Zone;
use log::{debug, trace, warn};

#[derive(Debug, Clone)]
pub struct BoundaryClient {
    client: reqwest::Client,
    config: FetchConfig,
}

impl BoundaryClient {
    pub fn new(config: FetchConfig) -> Result<Self, BoundaryError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| BoundaryError::Http(e.to_string()))?;
        Ok(BoundaryClient { client, config })
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Fetch and validate the boundary identified by `source_id`.
    pub async fn fetch_zone(&self, source_id: &str) -> Result<Zone, BoundaryError> {
        let url = self.config.url_for(source_id);
        trace!("Fetching boundary {} through {}", source_id, url);

        let result = self.fetch_body(&url).await.and_then(|body| {
            trace!("body is {} bytes", body.len());
            parse_zone(&body, source_id, self.config.kind)
        });
        match &result {
            Ok(zone) => debug!(
                "boundary {} loaded as {:?}, {} polygons",
                source_id,
                zone.name,
                zone.polygons.len()
            ),
            Err(e) => warn!("boundary {} unavailable: {}", source_id, e),
        }
        result
    }

    async fn fetch_body(&self, url: &str) -> Result<String, BoundaryError> {
        let resp = self
            .client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| BoundaryError::Http(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(BoundaryError::Status(status.as_u16()));
        }
        resp.text()
            .await
            .map_err(|e| BoundaryError::Http(e.to_string()))
    }
}
