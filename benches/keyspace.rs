//! benches/keyspace.rs
//! Key enumeration throughput, literal and derived
use cipherprobe_rs::keyspace::{Charset, KeySpace};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

fn keyspace_benches(c: &mut Criterion) {
    let charset = Charset::parse("a-z0-9").unwrap();
    let wordlist: Vec<String> = ["password", "letmein", "hunter2"]
        .iter()
        .map(|w| w.to_string())
        .collect();

    let mut group = c.benchmark_group("keyspace");

    for max_len in [1usize, 2, 3] {
        group.throughput(Throughput::Elements(charset.keyspace_size(max_len) as u64));
        group.bench_with_input(BenchmarkId::new("literal", max_len), &max_len, |b, &max_len| {
            b.iter(|| KeySpace::new(&wordlist, &charset, max_len, false).count());
        });
        group.bench_with_input(BenchmarkId::new("derived", max_len), &max_len, |b, &max_len| {
            b.iter(|| black_box(KeySpace::new(&wordlist, &charset, max_len, true).count()));
        });
    }

    group.finish();
}

criterion_group!(benches, keyspace_benches);
criterion_main!(benches);
