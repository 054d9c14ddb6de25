//! GeoJSON boundary ingestion.
//!
//! Providers send `[longitude, latitude]` positions inside a
//! `FeatureCollection`. Each polygon's exterior ring becomes one
//! [`BoundaryPolygon`] of the resulting [`Zone`]; interior rings are dropped,
//! since under union semantics a hole would otherwise count as inside.

use crate::errors::BoundaryError;
use crate::{BoundaryPolygon, Location, Zone, ZoneKind, ZoneProperties};
use log::{debug, trace};
use serde::Deserialize;
use serde_json::Value;

type Position = Vec<f64>;
type Ring = Vec<Position>;

#[derive(Deserialize)]
struct RawCollection {
    #[serde(rename = "type")]
    kind: Option<String>,
    features: Option<Vec<Value>>,
}

#[derive(Deserialize)]
struct RawFeature {
    geometry: Option<RawGeometry>,
    #[serde(default)]
    properties: Option<RawProperties>,
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum RawGeometry {
    Polygon { coordinates: Vec<Ring> },
    MultiPolygon { coordinates: Vec<Vec<Ring>> },
}

/// Marine Regions attribute names.
#[derive(Deserialize, Default)]
struct RawProperties {
    #[serde(default)]
    territory1: Option<String>,
    #[serde(default)]
    sovereign1: Option<String>,
    #[serde(default)]
    area_km2: Option<f64>,
}

impl From<RawProperties> for ZoneProperties {
    fn from(raw: RawProperties) -> Self {
        ZoneProperties {
            territory: raw.territory1,
            sovereign: raw.sovereign1,
            area_km2: raw.area_km2,
        }
    }
}

/// Swap `[lng, lat]` pairs into a latitude-first polygon.
pub fn normalize(raw: &[[f64; 2]]) -> BoundaryPolygon {
    BoundaryPolygon::new(
        raw.iter()
            .map(|&[lng, lat]| Location::new(lat, lng))
            .collect(),
    )
}

/// Validate a FeatureCollection body and build a zone from it.
///
/// The zone is named after the first feature's territory, or `source_id`
/// when the provider gives none.
pub fn parse_zone(body: &str, source_id: &str, kind: ZoneKind) -> Result<Zone, BoundaryError> {
    let collection: RawCollection =
        serde_json::from_str(body).map_err(|e| BoundaryError::Decode(e.to_string()))?;

    match collection.kind.as_deref() {
        Some("FeatureCollection") => {}
        other => {
            return Err(BoundaryError::NotAFeatureCollection(
                other.unwrap_or_default().to_string(),
            ))
        }
    }
    let features = collection.features.ok_or(BoundaryError::MissingFeatures)?;
    if features.is_empty() {
        return Err(BoundaryError::EmptyFeatures);
    }

    let mut polygons = Vec::new();
    let mut properties: Option<ZoneProperties> = None;
    for (index, value) in features.into_iter().enumerate() {
        let feature: RawFeature =
            serde_json::from_value(value).map_err(|e| malformed(index, e.to_string()))?;
        let geometry = feature
            .geometry
            .ok_or_else(|| malformed(index, "feature has no geometry".to_string()))?;
        let shells = match geometry {
            RawGeometry::Polygon { coordinates } => vec![coordinates],
            RawGeometry::MultiPolygon { coordinates } => coordinates,
        };
        for rings in shells {
            let shell = rings
                .first()
                .ok_or_else(|| malformed(index, "polygon has no rings".to_string()))?;
            polygons.push(normalize(&ring_pairs(index, shell)?));
        }
        if properties.is_none() {
            properties = feature.properties.map(ZoneProperties::from);
        }
        trace!("feature {} accepted, {} polygons so far", index, polygons.len());
    }

    let name = properties
        .as_ref()
        .and_then(|p| p.territory.clone())
        .unwrap_or_else(|| source_id.to_string());
    debug!("zone {:?} ({}) built from {} polygons", name, kind, polygons.len());

    let zone = Zone::new(name, kind, polygons);
    Ok(match properties {
        Some(p) => zone.with_properties(p),
        None => zone,
    })
}

fn ring_pairs(feature: usize, ring: &[Position]) -> Result<Vec<[f64; 2]>, BoundaryError> {
    ring.iter()
        .map(|position| match position.as_slice() {
            [lng, lat, ..] => Ok([*lng, *lat]),
            _ => Err(malformed(
                feature,
                format!("position has {} values, need 2", position.len()),
            )),
        })
        .collect()
}

fn malformed(feature: usize, reason: String) -> BoundaryError {
    BoundaryError::MalformedGeometry { feature, reason }
}
