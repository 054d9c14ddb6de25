use crate::Location;

/// Mean Earth radius used by the Haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two locations, in kilometers.
pub fn distance(a: Location, b: Location) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lng = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (delta_lng / 2.).sin().powi(2);
    // Rounding can push h a hair above 1 for antipodal points.
    let c = 2. * h.min(1.).sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Whether the eastward ray from `point` crosses the edge `start`-`end`.
///
/// The edge is half-open in latitude, so a ray through a shared vertex is
/// counted once.
pub fn crosses_ray(point: Location, start: Location, end: Location) -> bool {
    if (start.latitude > point.latitude) == (end.latitude > point.latitude) {
        return false;
    }
    let t = (point.latitude - start.latitude) / (end.latitude - start.latitude);
    let crossing_lng = start.longitude + t * (end.longitude - start.longitude);
    point.longitude < crossing_lng
}
