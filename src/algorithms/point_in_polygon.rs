use crate::utils::crosses_ray;
use crate::{BoundaryPolygon, Location};

/// Even-odd ray casting. Degenerate rings contain nothing; points exactly on
/// an edge may land on either side.
///
/// Longitude is treated as a planar axis. A ring that crosses the ±180°
/// meridian (Fiji, eastern Russia) is read as spanning the long way round
/// the globe, so it must be split at the meridian before it is loaded.
pub fn contains(point: Location, polygon: &BoundaryPolygon) -> bool {
    if polygon.is_degenerate() || !polygon.envelope().contains(point) {
        return false;
    }

    let mut inside = false;
    for (start, end) in polygon.edges() {
        if crosses_ray(point, start, end) {
            inside = !inside;
        }
    }
    inside
}

/// Union containment: inside if any polygon contains the point.
pub fn contains_any(point: Location, polygons: &[BoundaryPolygon]) -> bool {
    polygons.iter().any(|polygon| contains(point, polygon))
}
