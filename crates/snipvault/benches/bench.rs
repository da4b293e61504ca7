use chrono::{TimeDelta, TimeZone, Utc};
use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use snipvault::{RawSnippetId, ThreadRandom};

// Number of ids processed per benchmark iteration.
const TOTAL_IDS: usize = 4096;

fn fixed_id() -> RawSnippetId {
    let dt = Utc.with_ymd_and_hms(2024, 6, 15, 12, 34, 56).unwrap()
        + TimeDelta::milliseconds(789);
    RawSnippetId::from_datetime(dt)
}

fn bench_encode(c: &mut Criterion) {
    let id = fixed_id();
    let mut group = c.benchmark_group("encode");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));
    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        b.iter(|| {
            for _ in 0..TOTAL_IDS {
                black_box(id.encode_with(&ThreadRandom));
            }
        });
    });
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let public = fixed_id().encode();
    let encoded = public.as_str();
    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));
    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        b.iter(|| {
            for _ in 0..TOTAL_IDS {
                black_box(RawSnippetId::decode(black_box(encoded)).unwrap());
            }
        });
    });
    group.finish();
}

fn bench_blob_path(c: &mut Criterion) {
    let id = fixed_id();
    let mut group = c.benchmark_group("blob_path");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));
    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        b.iter(|| {
            for _ in 0..TOTAL_IDS {
                black_box(id.blob_path());
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_blob_path);
criterion_main!(benches);
