use criterion::{Criterion, criterion_group, criterion_main};
use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};

use polydec::decomp::DecompRing;
use polydec::geometry::Point;

criterion_main!(benches);
criterion_group!(benches, decimate_restore_bench, full_scan_bench);

const N_VERTICES: usize = 1000;

/// Star-shaped polygon with jittered radii, guaranteed free of self-intersections
fn radial_polygon(n: usize, rng: &mut SmallRng) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let angle = 2.0 * std::f64::consts::PI * (i as f64) / (n as f64);
            let radius = rng.random_range(500.0..1000.0);
            Point(
                (radius * angle.cos()).round() as i32,
                (radius * angle.sin()).round() as i32,
            )
        })
        .collect()
}

fn decimate_restore_bench(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut ring = DecompRing::new(radial_polygon(N_VERTICES, &mut rng)).unwrap();

    c.bench_function("decimate_to_half_and_restore", |b| {
        b.iter(|| {
            ring.set_to_size(50).unwrap();
            ring.set_to_size(100).unwrap();
        })
    });
}

fn full_scan_bench(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(0);
    let ring = DecompRing::new(radial_polygon(N_VERTICES, &mut rng)).unwrap();

    c.bench_function("polygon_extraction", |b| b.iter(|| ring.to_polygon()));
}
