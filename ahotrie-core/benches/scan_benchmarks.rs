//! Performance benchmarks for automaton construction and scanning
//!
//! Run with: cargo bench --bench scan_benchmarks

use ahotrie_core::{build, remove_overlaps, scan_raw, Trie};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

const KEYWORDS: &[&str] = &[
    "respiratory tract infections",
    "urinary tract infections",
    "urinary",
    "intra-abdominal infections",
    "infections",
    "tract",
    "fever",
    "antibiotic",
    "sepsis",
    "pneumonia",
];

/// Generate test text of specified size
fn generate_text(size: usize) -> String {
    let base = "Patients with lower respiratory tract infections, urinary tract \
                infections, or intra-abdominal infections received an antibiotic. ";
    let mut text = base.repeat(size / base.len() + 1);
    text.truncate(size);
    text
}

/// Generate `count` distinct synthetic keywords
fn generate_keywords(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("term{i:05}")).collect()
}

/// Benchmark building automata of growing size
fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    for count in [100, 1_000, 10_000] {
        let keywords = generate_keywords(count);

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("build", count), &keywords, |b, keywords| {
            b.iter(|| build(black_box(keywords.iter()), false));
        });
    }

    group.finish();
}

/// Benchmark the raw scan over different text sizes
fn bench_text_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_sizes");

    let automaton = build(KEYWORDS.iter(), true);

    for size in [1024, 10_240, 102_400, 1_024_000] {
        let text = generate_text(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("scan_raw", size), &text, |b, text| {
            b.iter(|| scan_raw(&automaton, black_box(text)));
        });
    }

    group.finish();
}

/// Benchmark the post-processing stages on top of the scan
fn bench_options(c: &mut Criterion) {
    let mut group = c.benchmark_group("options");

    let text = generate_text(102_400);
    group.throughput(Throughput::Bytes(text.len() as u64));

    let plain = Trie::builder()
        .ignore_case()
        .add_keywords(KEYWORDS.iter().copied())
        .build();
    let whole_words = Trie::builder()
        .ignore_case()
        .only_whole_words()
        .add_keywords(KEYWORDS.iter().copied())
        .build();
    let resolved = Trie::builder()
        .ignore_case()
        .only_whole_words()
        .ignore_overlaps()
        .add_keywords(KEYWORDS.iter().copied())
        .build();

    for (name, trie) in [
        ("plain", &plain),
        ("whole_words", &whole_words),
        ("whole_words_no_overlaps", &resolved),
    ] {
        group.bench_with_input(BenchmarkId::new("parse_text", name), &text, |b, text| {
            b.iter(|| trie.parse_text(black_box(text)));
        });
    }

    group.finish();
}

/// Benchmark overlap removal on dense candidate sets
fn bench_overlap_removal(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlap_removal");

    let automaton = build(["a", "aa", "aaa", "aaaa"], false);

    for size in [1_000, 10_000, 100_000] {
        let emits = scan_raw(&automaton, &"a".repeat(size));

        group.throughput(Throughput::Elements(emits.len() as u64));
        group.bench_with_input(BenchmarkId::new("remove_overlaps", size), &emits, |b, emits| {
            b.iter(|| remove_overlaps(black_box(emits.clone())));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_construction,
    bench_text_sizes,
    bench_options,
    bench_overlap_removal
);
criterion_main!(benches);
