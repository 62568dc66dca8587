//! Criterion micro-benchmarks for push, insert, sort, and find.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use spanvec::{ScalarOrd, SpanVec};
use spanvec_bench::{ascending_u32s, scrambled_u32s};

fn bench_push(c: &mut Criterion) {
    c.bench_function("push_10k_amortized", |b| {
        b.iter(|| {
            let mut vec = SpanVec::with_capacity_of::<u32>(0).unwrap();
            for i in 0..10_000u32 {
                vec.push_value(black_box(i)).unwrap();
            }
            vec
        });
    });

    c.bench_function("push_10k_prereserved", |b| {
        b.iter(|| {
            let mut vec = SpanVec::with_capacity_of::<u32>(10_000).unwrap();
            for i in 0..10_000u32 {
                vec.push_value(black_box(i)).unwrap();
            }
            vec
        });
    });
}

fn bench_insert_front(c: &mut Criterion) {
    c.bench_function("insert_front_1k", |b| {
        b.iter(|| {
            let mut vec = SpanVec::with_capacity_of::<u32>(1_000).unwrap();
            for i in 0..1_000u32 {
                vec.insert_value(0, black_box(i)).unwrap();
            }
            vec
        });
    });
}

fn bench_sort(c: &mut Criterion) {
    let cmp = ScalarOrd::<u32>::new();

    c.bench_function("sort_10k_scrambled", |b| {
        b.iter_batched(
            || scrambled_u32s(10_000, 42),
            |mut vec| {
                vec.sort_by(&cmp);
                vec
            },
            criterion::BatchSize::SmallInput,
        );
    });

    c.bench_function("sort_10k_presorted", |b| {
        b.iter_batched(
            || ascending_u32s(10_000),
            |mut vec| {
                vec.sort_by(&cmp);
                vec
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

fn bench_find(c: &mut Criterion) {
    let cmp = ScalarOrd::<u32>::new();
    let vec = ascending_u32s(10_000);
    let missing = 20_000u32.to_ne_bytes();

    c.bench_function("find_10k_worst_case", |b| {
        b.iter(|| vec.find_by(black_box(&missing), &cmp));
    });
}

criterion_group!(benches, bench_push, bench_insert_front, bench_sort, bench_find);
criterion_main!(benches);
