use crate::{BoundaryPolygon, Rectangle};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneKind {
    Eez,
    Territorial,
    International,
}

impl Default for ZoneKind {
    fn default() -> Self {
        ZoneKind::Eez
    }
}

impl ZoneKind {
    /// Fixed notice shown when a vessel's containment in a zone of this kind changes.
    pub fn crossing_message(&self) -> &'static str {
        match self {
            ZoneKind::Eez => "Entered Exclusive Economic Zone. Fishing regulations may apply.",
            ZoneKind::Territorial => "Entered territorial waters. Special permits may be required.",
            ZoneKind::International => {
                "Entered international waters. International fishing laws apply."
            }
        }
    }
}

impl fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ZoneKind::Eez => "EEZ",
            ZoneKind::Territorial => "territorial",
            ZoneKind::International => "international",
        };
        f.write_str(name)
    }
}

/// Descriptive attributes supplied by the boundary provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub territory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sovereign: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_km2: Option<f64>,
}

/// A named maritime zone. The zone is the union of its polygons.
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    pub name: String,
    pub kind: ZoneKind,
    pub polygons: Vec<BoundaryPolygon>,
    pub properties: Option<ZoneProperties>,
}

impl Zone {
    pub fn new(name: impl Into<String>, kind: ZoneKind, polygons: Vec<BoundaryPolygon>) -> Self {
        Zone {
            name: name.into(),
            kind,
            polygons,
            properties: None,
        }
    }

    pub fn with_properties(mut self, properties: ZoneProperties) -> Self {
        self.properties = Some(properties);
        self
    }

    pub fn envelope(&self) -> Rectangle {
        self.polygons.iter().fold(Rectangle::new_empty(), |mut s, p| {
            s.expand(p.envelope());
            s
        })
    }
}
