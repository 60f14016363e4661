//! benches/trial.rs
//! One keyed attempt per cipher and mode, plus a full token search
use base64::Engine as _;
use cipherprobe_rs::cipher::{encrypt, Capabilities, CipherKind, CipherTrial, Mode};
use cipherprobe_rs::SearchBuilder;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn key_for(kind: CipherKind) -> Vec<u8> {
    match kind {
        CipherKind::Aes | CipherKind::Twofish | CipherKind::Cast => vec![0x11; 16],
        CipherKind::Blowfish | CipherKind::Rc2 => vec![0x11; 8],
    }
}

fn trial_benches(c: &mut Criterion) {
    let trial = CipherTrial::default();
    let plaintext = [b'p'; 40];

    let mut group = c.benchmark_group("trial");
    for kind in Capabilities::compiled().kinds().iter().copied() {
        let key = key_for(kind);
        for mode in Mode::ALL {
            let sealed = encrypt(&plaintext, kind, mode, &key).unwrap();
            let id = BenchmarkId::new(kind.name(), mode.name());
            group.bench_with_input(id, &sealed, |b, sealed| {
                b.iter(|| black_box(trial.attempt(black_box(sealed), kind, mode, &key)));
            });
        }
    }
    group.finish();

    let sealed = encrypt(b"the password is abc", CipherKind::Aes, Mode::Ecb, &[b'z'; 16]).unwrap();
    let token = base64::engine::general_purpose::STANDARD.encode(sealed);
    let search = SearchBuilder::new()
        .with_charset("a-z")
        .with_max_key_len(2)
        .build()
        .unwrap();
    c.bench_function("search_token_az2", |b| {
        b.iter(|| black_box(search.run(black_box(&[token.as_str()]))));
    });
}

criterion_group!(benches, trial_benches);
criterion_main!(benches);
