//! Encrypt/decrypt throughput across payload sizes.
//!
//! Run with: `cargo bench --bench timing`
//!
//! Includes the failure paths so their timing can be compared with a
//! successful open.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use keyed_envelope::{decrypt, encrypt, EncryptedData, MemoryKeyManager, OsRandom};

/// Payload sizes to benchmark.
const PAYLOAD_SIZES: &[usize] = &[64, 1024, 65_536, 1_048_576];

fn bench_encrypt(c: &mut Criterion) {
    let mut group = c.benchmark_group("encrypt");
    let manager = MemoryKeyManager::new();

    for &size in PAYLOAD_SIZES {
        let plaintext = vec![0x42u8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &plaintext, |b, pt| {
            b.iter(|| encrypt(black_box(b"bench"), black_box(pt), &manager, &OsRandom).unwrap());
        });
    }

    group.finish();
}

fn bench_decrypt(c: &mut Criterion) {
    let mut group = c.benchmark_group("decrypt");
    let manager = MemoryKeyManager::new();

    for &size in PAYLOAD_SIZES {
        let ct = encrypt(b"bench", &vec![0x42u8; size], &manager, &OsRandom).unwrap();
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &ct, |b, ct| {
            b.iter(|| decrypt(black_box(ct), &manager).unwrap());
        });
    }

    group.finish();
}

fn bench_failures(c: &mut Criterion) {
    let mut group = c.benchmark_group("decrypt_failure");
    let manager = MemoryKeyManager::new();

    let ct = encrypt(b"bench", &[0x42u8; 1024], &manager, &OsRandom).unwrap();

    let mut tampered = ct.data().to_vec();
    let last = tampered.len() - 1;
    tampered[last] ^= 0x01;
    let tampered = EncryptedData::new(ct.key_id(), tampered);

    let short = EncryptedData::new(ct.key_id(), b"short".to_vec());

    group.bench_function("valid", |b| {
        b.iter(|| black_box(decrypt(black_box(&ct), &manager).ok()));
    });
    group.bench_function("tampered", |b| {
        b.iter(|| black_box(decrypt(black_box(&tampered), &manager).err()));
    });
    group.bench_function("short", |b| {
        b.iter(|| black_box(decrypt(black_box(&short), &manager).err()));
    });

    group.finish();
}

criterion_group!(benches, bench_encrypt, bench_decrypt, bench_failures);
criterion_main!(benches);
