//! Criterion benchmarks for grid geometry and growth primitives.
//!
//! Benchmarks:
//!   - Moore / Von Neumann radius queries at the centre and a corner
//!   - one synchronous growth step on a seeded 100x100 grid
//!   - road-access layer on a fully grown 100x100 grid
//!
//! Run with: cargo bench -p citygen --bench grid_bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use citygen::config::{GrowthParams, SeedingParams};
use citygen::geometry::GridGeometry;
use citygen::growth::{add_roads, grow_step, mark_junctions, patch_empty_cells, simulate};
use citygen::layers::compute_road_access;
use citygen::seeding::place_seeds;
use citygen::{CityGrid, SimRng};

// ---------------------------------------------------------------------------
// Benchmark: neighbourhood queries
// ---------------------------------------------------------------------------

fn bench_radius_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_radius_queries");
    group.sample_size(500);

    let geo = GridGeometry::new(100);

    group.bench_function("moore_r3_center", |b| {
        b.iter(|| black_box(geo.moore_within_radius(black_box(50), black_box(50), 3)));
    });

    group.bench_function("moore_r3_corner", |b| {
        b.iter(|| black_box(geo.moore_within_radius(black_box(0), black_box(0), 3)));
    });

    group.bench_function("von_neumann_r3_center", |b| {
        b.iter(|| black_box(geo.von_neumann_within_radius(black_box(50), black_box(50), 3)));
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Benchmark: growth and road access
// ---------------------------------------------------------------------------

fn seeded_grid(size: usize) -> (CityGrid, SimRng) {
    let mut grid = CityGrid::new(size);
    let mut rng = SimRng::from_seed_u64(42);
    place_seeds(&mut grid, &mut rng, &SeedingParams::default());
    (grid, rng)
}

fn bench_growth(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_growth");
    group.sample_size(50);

    let (grid, _) = seeded_grid(100);
    let params = GrowthParams::default();
    group.bench_function("grow_step_100", |b| {
        let mut rng = SimRng::from_seed_u64(1);
        b.iter(|| black_box(grow_step(black_box(&grid), &mut rng, &params)));
    });

    let (mut grown, mut rng) = seeded_grid(100);
    simulate(&mut grown, &mut rng, &params);
    add_roads(&mut grown);
    patch_empty_cells(&mut grown);
    mark_junctions(&mut grown);
    group.bench_function("road_access_100", |b| {
        b.iter(|| black_box(compute_road_access(black_box(&grown), 5)));
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Register groups
// ---------------------------------------------------------------------------

criterion_group!(benches, bench_radius_queries, bench_growth);
criterion_main!(benches);
