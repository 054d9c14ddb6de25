//! Settings a host application loads from its own configuration.
//!
//! Both structs deserialize with every field optional, falling back to
//! [`Default`].

use crate::{Severity, ZoneKind};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Marine Regions WFS query for a single EEZ by MRGID.
pub const DEF_ENDPOINT: &str = "https://geo.vliz.be/geoserver/MarineRegions/wfs?service=WFS&version=1.0.0&request=GetFeature&typeNames=MarineRegions:eez&outputFormat=application/json&cql_filter=mrgid={id}";

/// Default request timeout, in seconds.
pub const DEF_TIMEOUT: u64 = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// URL template; `{id}` is replaced by the source id.
    pub endpoint: String,
    pub timeout_secs: u64,
    pub user_agent: String,
    /// Kind assigned to zones built from this provider.
    pub kind: ZoneKind,
}

impl Default for FetchConfig {
    fn default() -> Self {
        FetchConfig {
            endpoint: DEF_ENDPOINT.to_string(),
            timeout_secs: DEF_TIMEOUT,
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            kind: ZoneKind::Eez,
        }
    }
}

impl FetchConfig {
    pub fn url_for(&self, source_id: &str) -> String {
        self.endpoint.replace("{id}", source_id)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    pub severity: Severity,
}
