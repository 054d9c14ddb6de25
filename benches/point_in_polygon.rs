mod utils;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use eez_fence::algorithms::{contains, distance_to_boundary};
use eez_fence::Location;
use utils::{get_random_points, make_ragged_polygon};

pub fn point_in_polygon_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_in_polygon_ragged");

    for size in [64, 1024, 16384].iter() {
        let poly = make_ragged_polygon(Location::new(8., 78.), 3., *size, 342);
        let query_points = get_random_points(poly.envelope(), 1000, 342);
        group.bench_with_input(BenchmarkId::new("contains", size), &poly, |b, poly| {
            b.iter(|| {
                for &point in &query_points {
                    black_box(contains(point, poly));
                }
            })
        });
        group.bench_with_input(
            BenchmarkId::new("distance_to_boundary", size),
            &poly,
            |b, poly| {
                b.iter(|| {
                    for &point in &query_points[..100] {
                        black_box(distance_to_boundary(point, poly));
                    }
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, point_in_polygon_benchmark);

criterion_main!(benches);
