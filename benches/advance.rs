//! Benchmarks for the generation step.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::{SeedableRng, rngs::StdRng};

use toroidal_life::compute::{Board, advance, diff};

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");

    for size in [16, 64, 256] {
        let board = Board::random_with(size, &mut StdRng::seed_from_u64(42));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", size, size)),
            &board,
            |b, board| {
                b.iter(|| advance(black_box(board)));
            },
        );
    }

    group.finish();
}

fn bench_diff(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff");

    for size in [16, 256] {
        let old = Board::random_with(size, &mut StdRng::seed_from_u64(1));
        let new = advance(&old).board;

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", size, size)),
            &(new, old),
            |b, (new, old)| {
                b.iter(|| diff(black_box(new), black_box(old)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_advance, bench_diff);
criterion_main!(benches);
