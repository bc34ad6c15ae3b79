//! Benchmark for incremental change application.
//!
//! Measures typing-style single-character inserts and a workspace-edit
//! sized batch against documents of increasing length.
//!
//! Run with: cargo bench --bench apply_changes

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ropey::Rope;
use std::hint::black_box;
use vfsync::text::apply_changes;
use vfsync::{EditOperation, Position, Range};

/// Create a document with `lines` lines of mixed-width text.
fn create_document(lines: usize) -> String {
    let mut doc = String::new();
    for i in 0..lines {
        match i % 3 {
            0 => doc.push_str(&format!("let value{i} = compute {i} -- ascii\n")),
            1 => doc.push_str(&format!("  comment {i}: あいうえお\n")),
            _ => doc.push_str(&format!("  emoji {i}: 😀 done\n")),
        }
    }
    doc
}

fn insert_at(line: u32, character: u32, text: &str) -> EditOperation {
    let position = Position::new(line, character);
    EditOperation::ranged(Range::new(position, position), text)
}

fn bench_typing(c: &mut Criterion) {
    let mut group = c.benchmark_group("typing");
    for lines in [100, 1_000, 10_000] {
        let rope = Rope::from_str(&create_document(lines));
        let middle = (lines / 2) as u32;
        let change = [insert_at(middle, 4, "x")];

        group.bench_with_input(BenchmarkId::from_parameter(lines), &rope, |b, rope| {
            b.iter(|| apply_changes(black_box(rope), black_box(&change)))
        });
    }
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_of_50");
    for lines in [1_000, 10_000] {
        let rope = Rope::from_str(&create_document(lines));
        let step = (lines / 50) as u32;
        // Bottom-up, as workspace edits are replayed
        let changes: Vec<EditOperation> = (0..50u32)
            .rev()
            .map(|i| insert_at(i * step, 0, "-- "))
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(lines), &rope, |b, rope| {
            b.iter(|| apply_changes(black_box(rope), black_box(&changes)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_typing, bench_batch);
criterion_main!(benches);
