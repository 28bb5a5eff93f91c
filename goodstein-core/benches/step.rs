use criterion::{black_box, criterion_group, criterion_main, Criterion};
use goodstein_core::{cantor_normal_form, goodstein, goodstein_step, Nat};

fn bench_cantor(c: &mut Criterion) {
  let n = Nat::from(5u32).pow(3125) + 2u32;
  c.bench_function("cantor_normal_form 5^3125+2", |b| {
    b.iter(|| cantor_normal_form(black_box(&n), 5).unwrap())
  });
}

fn bench_step(c: &mut Criterion) {
  let n = Nat::from(4u32).pow(256) + 3u32;
  c.bench_function("goodstein_step 4^256+3", |b| {
    b.iter(|| goodstein_step(black_box(&n), 4).unwrap())
  });
  c.bench_function("goodstein 4 x 200", |b| {
    b.iter(|| goodstein(black_box(&Nat::from(4u32)), 200).unwrap())
  });
}

criterion_group!(benches, bench_cantor, bench_step);
criterion_main!(benches);
