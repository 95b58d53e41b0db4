//! Benchmarks for the CPU simulation step.
//!
//! Run with: `cargo bench`

use bounce3d::physics::resolve_pairs;
use bounce3d::{SimConfig, Simulation};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

/// A simulation holding the seed body plus `batches` spawn batches, after
/// one tick so the spawns have been applied.
fn populated(batches: u32) -> Simulation {
    let mut sim = Simulation::new(SimConfig::default().with_rng_seed(42)).unwrap();
    for _ in 0..batches {
        sim.request_spawn();
    }
    sim.tick();
    sim
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    for batches in [1u32, 5, 10] {
        let bodies = populated(batches).body_count();
        group.bench_with_input(BenchmarkId::from_parameter(bodies), &batches, |b, &batches| {
            b.iter_batched(
                || populated(batches),
                |mut sim| black_box(sim.tick()),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_resolve_pairs(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_pairs");

    for batches in [1u32, 5, 10] {
        let sim = populated(batches);
        let bodies = sim.bodies().to_vec();
        group.bench_with_input(BenchmarkId::from_parameter(bodies.len()), &bodies, |b, bodies| {
            b.iter_batched(
                || bodies.clone(),
                |mut bodies| black_box(resolve_pairs(&mut bodies)),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_spawn_flush(c: &mut Criterion) {
    c.bench_function("spawn_flush_100", |b| {
        b.iter_batched(
            || {
                let mut sim = populated(0);
                sim.request_spawn();
                sim
            },
            |mut sim| black_box(sim.flush_spawns()),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_tick, bench_resolve_pairs, bench_spawn_flush);
criterion_main!(benches);
