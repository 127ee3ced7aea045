//! Performance benchmarks for line building and segmentation
//!
//! Run with: cargo bench --bench paragraphs

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use quotepara_core::{build_lines, paragraphs_of, LineBuilder};
use std::hint::black_box;

/// Generate a quoted exchange with roughly `count` raw lines
fn generate_lines(count: usize) -> Vec<String> {
    let block = [
        "> LENNOX",
        "> > Sent he to Macduff?",
        "",
        "> LORD",
        "> > He did: and with an absolute 'Sir, not I,'",
        "The cloudy messenger turns me his back,",
        "",
        "",
        "Plain reply",
    ];

    block
        .iter()
        .cycle()
        .take(count)
        .map(|line| line.to_string())
        .collect()
}

fn bench_build_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_lines");

    for count in [100, 10_000, 1_000_000] {
        let raw = generate_lines(count);

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("build", count), &raw, |b, raw| {
            b.iter(|| build_lines(black_box(raw)));
        });
    }

    group.finish();
}

fn bench_paragraphs(c: &mut Criterion) {
    let mut group = c.benchmark_group("paragraphs");

    for count in [100, 10_000, 1_000_000] {
        let entry = LineBuilder::new().build(generate_lines(count));

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("segment", count), &entry, |b, entry| {
            b.iter(|| paragraphs_of(black_box(entry.lines())));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build_lines, bench_paragraphs);
criterion_main!(benches);
