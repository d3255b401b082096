#[macro_use]
extern crate criterion;

use criterion::{BenchmarkId, Criterion};
use idmix::Idmix;

const BATCH: usize = 100;

fn new(c: &mut Criterion) {
  let mut group = c.benchmark_group("Idmix");
  group.bench_function("new", |b| {
    b.iter(|| Idmix::new(b"bench salt").unwrap());
  });
}

fn encode(c: &mut Criterion) {
  let mut group = c.benchmark_group("Idmix");
  let mix = Idmix::new(b"bench salt").unwrap();
  let numbers: Vec<u64> = (0..BATCH).map(|_| fastrand::u64(..)).collect();

  group.bench_function("encode_one", |b| {
    b.iter(|| mix.encode_one(numbers[0]).unwrap());
  });
  group.bench_with_input(BenchmarkId::new("encode", BATCH), &numbers, |b, n| {
    b.iter(|| mix.encode(n).unwrap());
  });
}

fn decode(c: &mut Criterion) {
  let mut group = c.benchmark_group("Idmix");
  let mix = Idmix::new(b"bench salt").unwrap();
  let numbers: Vec<u64> = (0..BATCH).map(|_| fastrand::u64(..)).collect();
  let one = mix.encode_one(numbers[0]).unwrap();
  let batch = mix.encode(&numbers).unwrap();

  group.bench_function("decode_one", |b| {
    b.iter(|| mix.decode(&one).unwrap());
  });
  group.bench_with_input(BenchmarkId::new("decode", BATCH), &batch, |b, id| {
    b.iter(|| mix.decode(id).unwrap());
  });
}

criterion_group!(idmix, new, encode, decode);
criterion_main!(idmix);
