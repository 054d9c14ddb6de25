use super::point_in_polygon::contains_any;
use crate::utils::distance;
use crate::{BoundaryPolygon, Location, Zone};

/// Distance in kilometers from `point` to the nearest vertex of `polygon`.
///
/// This is a nearest-vertex approximation, not the closest point on an edge:
/// long straight edges read further away than they are. Empty polygons are
/// infinitely far.
pub fn distance_to_boundary(point: Location, polygon: &BoundaryPolygon) -> f64 {
    polygon
        .vertices()
        .iter()
        .map(|&vertex| distance(point, vertex))
        .fold(f64::INFINITY, f64::min)
}

/// Nearest-vertex distance to any of the zone's polygons.
pub fn distance_to_zone(point: Location, zone: &Zone) -> f64 {
    zone.polygons
        .iter()
        .map(|polygon| distance_to_boundary(point, polygon))
        .fold(f64::INFINITY, f64::min)
}

/// The zone whose boundary is nearest to `point`, with that distance.
/// Zones without vertices are skipped.
pub fn nearest_zone<'a>(point: Location, zones: &'a [Zone]) -> Option<(&'a Zone, f64)> {
    zones
        .iter()
        .map(|zone| (zone, distance_to_zone(point, zone)))
        .filter(|(_, d)| d.is_finite())
        .fold(None, |best, (zone, d)| match best {
            Some((_, best_d)) if best_d <= d => best,
            _ => Some((zone, d)),
        })
}

/// True when `point` lies in none of the supplied zones.
///
/// This only means "outside every zone we know about". It is not a
/// determination under maritime law, and an empty zone list always answers
/// true.
pub fn is_in_international_waters(point: Location, zones: &[Zone]) -> bool {
    !zones
        .iter()
        .filter(|zone| zone.envelope().contains(point))
        .any(|zone| contains_any(point, &zone.polygons))
}
