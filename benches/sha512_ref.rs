use criterion::{Criterion, criterion_group, criterion_main};
use sha2::{Digest, Sha512};
use std::hint::black_box;

pub fn bench_sha2_crate(c: &mut Criterion) {
    c.bench_function("sha2::Sha512 128 bytes", |b| {
        b.iter(|| {
            let mut hasher = Sha512::new();
            hasher.update(black_box(&[0u8; 128]));
            let _ = hasher.finalize();
        })
    });

    let data = vec![0xA5u8; 64 * 1024];
    c.bench_function("sha2::Sha512 64 KiB", |b| {
        b.iter(|| Sha512::digest(black_box(data.as_slice())))
    });
}

criterion_group!(benches, bench_sha2_crate);
criterion_main!(benches);
