//! Edit benchmark: Measure typing, splitting and joining on large documents.
//!
//! Row insert/remove shift the rows below, so these scale with document size.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sten::{Command, EditEngine};

fn document(rows: usize, width: usize) -> Vec<Vec<u8>> {
    (0..rows)
        .map(|i| (0..width).map(|j| b'a' + ((i + j) % 26) as u8).collect())
        .collect()
}

fn type_line(c: &mut Criterion) {
    c.bench_function("type_80_chars", |b| {
        b.iter(|| {
            let mut engine = EditEngine::new(80, 24).unwrap();
            for i in 0..80u8 {
                engine.insert_char(b'a' + i % 26).unwrap();
            }
            black_box(engine.cursor())
        });
    });
}

fn insert_mid_line(c: &mut Criterion) {
    let lines = document(1, 4096);
    c.bench_function("insert_mid_4k_line", |b| {
        let mut engine = EditEngine::load(&lines, 80, 24).unwrap();
        for _ in 0..2048 {
            engine.move_right();
        }
        b.iter(|| {
            engine.insert_char(b'x').unwrap();
            engine.backspace().unwrap();
        });
    });
}

fn split_and_join(c: &mut Criterion) {
    let mut group = c.benchmark_group("enter_backspace");

    for rows in [1_000, 10_000, 100_000] {
        let lines = document(rows, 40);
        group.bench_with_input(BenchmarkId::new("top_of_document", rows), &lines, |b, lines| {
            let mut engine = EditEngine::load(lines, 80, 24).unwrap();
            for _ in 0..20 {
                engine.move_right();
            }
            b.iter(|| {
                engine.apply(Command::Enter).unwrap();
                engine.apply(Command::Backspace).unwrap();
            });
        });
    }

    group.finish();
}

fn scroll_through(c: &mut Criterion) {
    let lines = document(10_000, 40);
    c.bench_function("move_down_10k_rows", |b| {
        b.iter(|| {
            let mut engine = EditEngine::load(&lines, 80, 24).unwrap();
            for _ in 0..10_000 {
                engine.move_down();
            }
            black_box(engine.viewport())
        });
    });
}

criterion_group!(benches, type_line, insert_mid_line, split_and_join, scroll_through);
criterion_main!(benches);
