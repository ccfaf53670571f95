//! Lexer benchmarks.
//!
//! Run with: `cargo bench --package iron-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use iron_lex::Lexer;

fn token_count(source: &str) -> usize {
    Lexer::new(source).unwrap().tokenize().unwrap().len()
}

fn bench_lexer_function(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "fn add: (a: int, b: int) => (r: int) { ret a + b; }";
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("single_function", |b| {
        b.iter(|| token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_scaling");

    for count in [10usize, 100, 1000] {
        let source = "fn f: () => () { x: int { 1 }; ret x + 2 * (3 - 4) / 5; }\n".repeat(count);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_function(format!("functions_{count}"), |b| {
            b.iter(|| token_count(black_box(&source)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_lexer_function, bench_lexer_scaling);
criterion_main!(benches);
