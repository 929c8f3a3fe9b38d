use criterion::{criterion_group, criterion_main, Criterion, black_box};

use pinscreen::voxel::{HashedColumn, PinScreen, VoxelGrid};
use pinscreen::{Extents, VoxelGrid3};

use glam::DVec3;

/// Deterministic spiral scan around the grid centre, with some points
/// landing outside the extents
fn scan(count: usize) -> Vec<DVec3> {
    (0..count)
        .map(|i| {
            let t = i as f64 * 0.01;
            DVec3::new(
                50.0 + t.cos() * (t * 0.7),
                50.0 + t.sin() * (t * 0.7),
                (t * 3.0).sin() * 5.0,
            )
        })
        .collect()
}

fn extents() -> Extents<DVec3> {
    Extents::new(DVec3::new(0.0, 0.0, -10.0), DVec3::new(100.0, 100.0, 10.0))
        .expect("valid extents")
}

fn bench_touch_ordered(c: &mut Criterion) {
    let points = scan(10_000);

    c.bench_function("touch_at_ordered_10k", |b| {
        b.iter(|| {
            let mut grid: VoxelGrid3<u32> =
                VoxelGrid::new(extents(), DVec3::splat(0.2), true).expect("valid grid");
            for p in &points {
                if let Some(count) = grid.touch_at(black_box(*p)) {
                    *count += 1;
                }
            }
            black_box(grid.len())
        });
    });
}

fn bench_touch_hashed(c: &mut Criterion) {
    let points = scan(10_000);

    c.bench_function("touch_at_hashed_10k", |b| {
        b.iter(|| {
            let mut grid: VoxelGrid<u32, DVec3, PinScreen<u32, HashedColumn<u32>>> =
                VoxelGrid::new(extents(), DVec3::splat(0.2), true).expect("valid grid");
            for p in &points {
                if let Some(count) = grid.touch_at(black_box(*p)) {
                    *count += 1;
                }
            }
            black_box(grid.len())
        });
    });
}

fn bench_index_of(c: &mut Criterion) {
    let points = scan(10_000);
    let grid: VoxelGrid3<u32> = VoxelGrid::new(extents(), DVec3::splat(0.2), false).expect("valid grid");

    c.bench_function("index_of_10k", |b| {
        b.iter(|| {
            for p in &points {
                black_box(grid.index_of(black_box(*p)));
            }
        });
    });
}

fn bench_neighbourhood(c: &mut Criterion) {
    let points = scan(10_000);
    let mut grid: VoxelGrid3<u32> = VoxelGrid::new(extents(), DVec3::splat(0.2), false).expect("valid grid");
    for p in &points {
        grid.touch_at(*p);
    }
    let centres: Vec<_> = points.iter().step_by(100).map(|p| grid.index_of(*p)).collect();

    c.bench_function("neighbourhood_100", |b| {
        b.iter(|| {
            let mut total = 0;
            for centre in &centres {
                total += grid.neighbourhood(black_box(*centre)).count();
            }
            black_box(total)
        });
    });
}

criterion_group!(
    benches,
    bench_touch_ordered,
    bench_touch_hashed,
    bench_index_of,
    bench_neighbourhood,
);
criterion_main!(benches);
