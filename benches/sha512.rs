use sha512sum::hash::{sha512, sha512_stream};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_sha512(c: &mut Criterion) {
    c.bench_function("sha512 128 bytes", |b| {
        b.iter(|| sha512(black_box(&[0u8; 128])))
    });

    let data = vec![0xA5u8; 64 * 1024];
    c.bench_function("sha512_stream 64 KiB", |b| {
        b.iter(|| sha512_stream(black_box(data.as_slice())))
    });
}

criterion_group!(benches, bench_sha512);
criterion_main!(benches);
