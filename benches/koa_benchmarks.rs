//! Koa Radix Trie Benchmarks
//!
//! Criterion benchmarks for the insert, lookup, and completion paths.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, SamplingMode, Throughput,
};
use std::time::Duration;

use koa_trie::KoaTrie;

/// Deterministic word generator with heavy prefix sharing, so splits and
/// compressed edges actually occur at every size.
fn word_set(n: usize) -> Vec<String> {
    const STEMS: &[&str] = &["ab", "app", "car", "cat", "inter", "moon", "super", "world"];
    const TAILS: &[&str] = &["", "s", "er", "ing", "tion", "ly", "man", "view"];

    (0..n)
        .map(|i| {
            let stem = STEMS[i % STEMS.len()];
            let tail = TAILS[(i / STEMS.len()) % TAILS.len()];
            format!("{}{}{}", stem, tail, i / (STEMS.len() * TAILS.len()))
        })
        .collect()
}

/// Benchmark the Koa Radix Trie
fn bench_koa_trie(c: &mut Criterion) {
    let mut group = c.benchmark_group("koa_trie");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));
    group.sample_size(100);

    // Bulk insertion at different word-set sizes
    for size in [100, 1000, 10_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("insert", size), size, |b, &size| {
            let words = word_set(size);
            b.iter(|| {
                let mut trie = KoaTrie::new();
                for word in &words {
                    trie.insert(black_box(word));
                }
            });
        });
    }

    // Exact lookup over a populated trie
    for size in [100, 1000, 10_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("find", size), size, |b, &size| {
            let words = word_set(size);
            let mut trie = KoaTrie::new();
            for word in &words {
                trie.insert(word);
            }
            b.iter(|| {
                for word in &words {
                    black_box(trie.find(black_box(word), false));
                }
            });
        });
    }

    // Completion fan-out from the shared stems
    for size in [100, 1000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::new("complete", size), size, |b, &size| {
            let words = word_set(size);
            let mut trie = KoaTrie::new();
            for word in &words {
                trie.insert(word);
            }
            b.iter(|| {
                black_box(trie.complete(black_box("super")));
                black_box(trie.complete(black_box("ca")));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_koa_trie);
criterion_main!(benches);
