use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mazecore::{generate, generate_many, solve, Algorithm};

const SIZE: i32 = 101;

pub fn generators(c: &mut Criterion) {
    for algorithm in Algorithm::ALL {
        c.bench_function(&format!("generate_{}", algorithm.name().replace(' ', "_")), |b| {
            b.iter(|| generate(black_box(SIZE), algorithm, Some(42)).unwrap())
        });
    }
}

pub fn batch(c: &mut Criterion) {
    c.bench_function("generate_many_dfs", |b| {
        b.iter(|| generate_many(black_box(SIZE), Algorithm::DepthFirst, Some(42), 16).unwrap())
    });
}

pub fn solver(c: &mut Criterion) {
    let grid = generate(SIZE, Algorithm::Automata, Some(42)).unwrap();
    c.bench_function("solve_automata", |b| b.iter(|| solve(black_box(&grid))));
}

criterion_group! {name = benches; config = Criterion::default().sample_size(10); targets = generators, batch, solver}
criterion_main!(benches);
