//! benches/kdf.rs
//! Hash-truncation derivation cost per passphrase
use cipherprobe_rs::kdf::{derive_keys, derive_passphrase_keys};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn kdf_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("KDF");

    for len in [4usize, 16, 64] {
        let secret = vec![0x42u8; len];
        group.bench_with_input(BenchmarkId::new("derive_keys", len), &secret, |b, secret| {
            b.iter(|| black_box(derive_keys(black_box(secret))));
        });
    }

    group.bench_function("derive_passphrase_keys", |b| {
        b.iter(|| black_box(derive_passphrase_keys(black_box("benchmark-password")).unwrap()));
    });

    group.finish();
}

criterion_group!(benches, kdf_benches);
criterion_main!(benches);
