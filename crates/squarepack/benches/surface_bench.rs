//! Criterion benchmarks for placement on a packing surface.
//! Focus sizes: n in {0, 10, 50, 200} already-placed squares.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use squarepack::api::{run_episode, ActionBounds, PackingSurface, RandomAgent, Square, TrainCfg};

fn filled_surface(n: usize, seed: u64) -> PackingSurface {
    let mut env = PackingSurface::new();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut attempts = 0;
    while env.len() < n && attempts < 100 * n.max(1) {
        let x = rng.gen_range(-20.0..20.0);
        let y = rng.gen_range(-20.0..20.0);
        let a = rng.gen_range(0.0..std::f64::consts::FRAC_PI_2);
        let _ = env.place_square(x, y, a);
        attempts += 1;
    }
    env
}

fn bench_surface(c: &mut Criterion) {
    let mut group = c.benchmark_group("surface");
    for &n in &[0usize, 10, 50, 200] {
        let env = filled_surface(n, 17);
        group.bench_with_input(BenchmarkId::new("can_place", n), &env, |b, env| {
            let mut rng = StdRng::seed_from_u64(5);
            b.iter(|| {
                let sq = Square::new(
                    rng.gen_range(-20.0..20.0),
                    rng.gen_range(-20.0..20.0),
                    rng.gen_range(0.0..1.5),
                )
                .unwrap();
                env.can_place(&sq)
            })
        });
        group.bench_with_input(BenchmarkId::new("bounding_square", n), &env, |b, env| {
            b.iter(|| env.minimal_bounding_square())
        });
    }
    group.finish();
}

fn bench_episode(c: &mut Criterion) {
    let cfg = TrainCfg {
        episodes: 1,
        squares: 30,
        max_attempts: 10_000,
    };
    c.bench_function("episode_random_30", |b| {
        b.iter_batched(
            || {
                (
                    PackingSurface::new(),
                    RandomAgent::new(ActionBounds::default(), 9).unwrap(),
                )
            },
            |(mut env, mut agent)| {
                run_episode(&mut env, &mut agent, &cfg, 0).unwrap()
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_surface, bench_episode);
criterion_main!(benches);
