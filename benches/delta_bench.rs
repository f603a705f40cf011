use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

fn gen_data(size: usize, seed: u64) -> Vec<u8> {
    let mut s = seed;
    let mut out = Vec::with_capacity(size);
    for _ in 0..size {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        out.push((s >> 33) as u8);
    }
    out
}

fn mutate(base: &[u8], stride: usize) -> Vec<u8> {
    let mut out = base.to_vec();
    for i in (0..out.len()).step_by(stride.max(1)) {
        out[i] = out[i].wrapping_add(1);
    }
    out
}

fn bench_create(c: &mut Criterion) {
    let mut group = c.benchmark_group("create");
    for size in [64 * 1024, 1024 * 1024] {
        let source = gen_data(size, 123);
        let target = mutate(&source, 4096);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| fosdelta::create(black_box(&source), black_box(&target)));
        });
    }
    group.finish();
}

fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply");
    for size in [64 * 1024, 1024 * 1024] {
        let source = gen_data(size, 123);
        let target = mutate(&source, 4096);
        let delta = fosdelta::create(&source, &target);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| fosdelta::apply(black_box(&source), black_box(&delta), true).unwrap());
        });
    }
    group.finish();
}

fn bench_create_dissimilar(c: &mut Criterion) {
    // Unrelated inputs: the matcher probes every position and finds nothing.
    let mut group = c.benchmark_group("create_dissimilar");
    let size = 256 * 1024;
    let source = gen_data(size, 7);
    let target = gen_data(size, 8);
    group.throughput(Throughput::Bytes(size as u64));
    group.bench_function("256k", |b| {
        b.iter(|| fosdelta::create(black_box(&source), black_box(&target)));
    });
    group.finish();
}

criterion_group!(benches, bench_create, bench_apply, bench_create_dissimilar);
criterion_main!(benches);
