//! Sequence adaptor benchmark: lazy views vs std slice/iterator adaptors
//!
//! - Input: INPUT_LEN random bytes from a fixed seed
//! - Each case sums every element reached through the adaptor

use std::time::Duration;

use aoc_solvers::Sequence;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const INPUT_LEN: usize = 100_000;
const SEED: u64 = 2024;
const WINDOW: usize = 4;
const STEP: usize = 3;

fn seq_criterion() -> Criterion {
    Criterion::default()
        .sample_size(30)
        .measurement_time(Duration::from_secs(5))
}

fn random_input() -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(SEED);
    (0..INPUT_LEN).map(|_| rng.r#gen::<u8>()).collect()
}

fn sum_windows<W: Iterator<Item = u8>>(windows: impl Iterator<Item = W>) -> u64 {
    windows.map(|w| w.map(u64::from).sum::<u64>()).sum()
}

fn bench_chunk(c: &mut Criterion) {
    let input = random_input();
    let mut group = c.benchmark_group("chunk_100k");

    group.bench_function("view", |b| {
        b.iter(|| black_box(sum_windows(input.iter().copied().chunk(WINDOW).into_iter())))
    });
    group.bench_function("slice_chunks", |b| {
        b.iter(|| black_box(sum_windows(input.chunks(WINDOW).map(|w| w.iter().copied()))))
    });

    group.finish();
}

fn bench_slide(c: &mut Criterion) {
    let input = random_input();
    let mut group = c.benchmark_group("slide_100k");

    group.bench_function("view", |b| {
        b.iter(|| black_box(sum_windows(input.iter().copied().slide(WINDOW).into_iter())))
    });
    group.bench_function("slice_windows", |b| {
        b.iter(|| black_box(sum_windows(input.windows(WINDOW).map(|w| w.iter().copied()))))
    });

    group.finish();
}

fn bench_stride(c: &mut Criterion) {
    let input = random_input();
    let mut group = c.benchmark_group("stride_100k");

    group.bench_function("view", |b| {
        b.iter(|| {
            black_box(
                input
                    .iter()
                    .copied()
                    .stride(STEP)
                    .into_iter()
                    .map(u64::from)
                    .sum::<u64>(),
            )
        })
    });
    group.bench_function("step_by", |b| {
        b.iter(|| black_box(input.iter().copied().step_by(STEP).map(u64::from).sum::<u64>()))
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = seq_criterion();
    targets = bench_chunk, bench_slide, bench_stride,
}

criterion_main!(benches);
