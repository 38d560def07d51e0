use criterion::{black_box, criterion_group, criterion_main, Criterion};
use veccom::*;

const N: usize = 1000;
const SEED: &[u8] = b"This is Leo's Favourite Seed";

fn messages(prefix: &str) -> Vec<Vec<u8>> {
    (0..N)
        .map(|i| format!("{} {}", prefix, i).into_bytes())
        .collect()
}

fn bench_setup(c: &mut Criterion) {
    let mut group = c.benchmark_group("setup");
    group.sample_size(10);
    group.bench_function("paramgen_n1000", |b| {
        b.iter(|| {
            let params = paramgen(black_box(SEED), black_box(N)).unwrap();
            black_box(params);
        });
    });
    group.finish();
}

fn bench_commit_and_prove(c: &mut Criterion) {
    let (pp, _) = paramgen(SEED, N).unwrap();
    let values = messages("this is old message number");

    c.bench_function("commit_n1000", |b| {
        b.iter(|| {
            let com = Commitment::new(black_box(&pp), black_box(&values)).unwrap();
            black_box(com);
        });
    });

    c.bench_function("prove_n1000", |b| {
        let mut i = 0;
        b.iter(|| {
            let proof = Proof::new(black_box(&pp), black_box(&values), i).unwrap();
            i = (i + 1) % N;
            black_box(proof);
        });
    });

    let mut group = c.benchmark_group("prove_all");
    group.sample_size(10);
    group.bench_function("prove_all_n1000", |b| {
        b.iter(|| {
            let proofs = prove_all(black_box(&pp), black_box(&values)).unwrap();
            black_box(proofs);
        });
    });
    group.finish();
}

fn bench_verify(c: &mut Criterion) {
    let (pp, vp) = paramgen(SEED, N).unwrap();
    let values = messages("this is old message number");
    let com = Commitment::new(&pp, &values).unwrap();
    let proofs = prove_all(&pp, &values).unwrap();

    c.bench_function("verify_n1000", |b| {
        let mut i = 0;
        b.iter(|| {
            let ok = proofs[i].verify(black_box(&vp), black_box(&com), &values[i]).unwrap();
            i = (i + 1) % N;
            black_box(ok);
        });
    });
}

fn bench_updates(c: &mut Criterion) {
    let (pp, _) = paramgen(SEED, N).unwrap();
    let old = messages("this is old message number");
    let new = messages("this is new message number");
    let com = Commitment::new(&pp, &old).unwrap();
    let proof = Proof::new(&pp, &old, 0).unwrap();

    c.bench_function("commit_update_n1000", |b| {
        let mut k = 0;
        b.iter(|| {
            let updated = com.update(black_box(&pp), k, &old[k], &new[k]).unwrap();
            k = (k + 1) % N;
            black_box(updated);
        });
    });

    c.bench_function("proof_update_n1000", |b| {
        let mut k = 1;
        b.iter(|| {
            let updated = proof.update(black_box(&pp), k, &old[k], &new[k]).unwrap();
            k = k % (N - 1) + 1;
            black_box(updated);
        });
    });
}

criterion_group!(
    benches,
    bench_setup,
    bench_commit_and_prove,
    bench_verify,
    bench_updates
);
criterion_main!(benches);
