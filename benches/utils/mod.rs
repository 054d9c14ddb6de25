use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

use eez_fence::{BoundaryPolygon, Location, Rectangle, Zone, ZoneKind};

//// Utility functions

/// A ragged, star-shaped ring around `center`, like a digitized coastline
/// buffer. Radii are in degrees.
pub(crate) fn make_ragged_polygon(
    center: Location,
    radius: f64,
    n: usize,
    seed: u64,
) -> BoundaryPolygon {
    let mut rng = SmallRng::seed_from_u64(seed);
    let vertices = (0..n)
        .map(|i| {
            let angle = 2. * PI * (i as f64) / (n as f64);
            let r = radius * rng.gen_range(0.7, 1.0);
            Location::new(
                center.latitude + r * angle.sin(),
                center.longitude + r * angle.cos(),
            )
        })
        .collect();
    BoundaryPolygon::new(vertices)
}

pub(crate) fn make_zones(count: usize, vertices: usize, seed: u64) -> Vec<Zone> {
    (0..count)
        .map(|i| {
            let center = Location::new(-10. + 4. * i as f64, 60. + 4. * i as f64);
            Zone::new(
                format!("zone-{}", i),
                ZoneKind::Eez,
                vec![make_ragged_polygon(center, 3., vertices, seed + i as u64)],
            )
        })
        .collect()
}

pub(crate) fn get_random_points(rect: Rectangle, n: usize, seed: u64) -> Vec<Location> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::new();
    for _i in 0..n {
        results.push(Location::new(
            rng.gen_range(rect.lat_min, rect.lat_max),
            rng.gen_range(rect.lng_min, rect.lng_max),
        ));
    }

    results
}

/// A straight track from `start` to `end` sampled at `n` fixes.
pub(crate) fn make_track(start: Location, end: Location, n: usize) -> Vec<Location> {
    (0..n)
        .map(|i| {
            let t = i as f64 / (n - 1).max(1) as f64;
            Location::new(
                start.latitude + t * (end.latitude - start.latitude),
                start.longitude + t * (end.longitude - start.longitude),
            )
        })
        .collect()
}
