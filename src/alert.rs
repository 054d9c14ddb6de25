use crate::{Location, ZoneKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl Default for Severity {
    fn default() -> Self {
        Severity::Warning
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Critical => "critical",
        };
        f.write_str(name)
    }
}

/// Which way the vessel moved relative to the zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrossingDirection {
    Entered,
    Exited,
}

impl CrossingDirection {
    pub fn from_containment(now_inside: bool) -> Self {
        if now_inside {
            CrossingDirection::Entered
        } else {
            CrossingDirection::Exited
        }
    }
}

/// A containment change for one zone. Created once and never modified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorderCrossingAlert {
    pub timestamp: DateTime<Utc>,
    pub location: Location,
    pub border_name: String,
    pub border_type: ZoneKind,
    pub severity: Severity,
    pub message: String,
    pub direction: CrossingDirection,
}
