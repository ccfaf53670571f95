//! Parser benchmarks.
//!
//! Run with: `cargo bench --package iron-par`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use iron_lex::Lexer;
use iron_par::Parser;

fn parse_source(source: &str) {
    let tokens = Lexer::new(source).unwrap().tokenize().unwrap();
    Parser::new(tokens).parse().unwrap();
}

fn bench_parser_minimal_function(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser");

    let source = "fn main { ret ; }";
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("minimal_main", |b| {
        b.iter(|| parse_source(black_box(source)))
    });

    let source = "fn add : () => (r: i32) { ret 1 + 2 * (3 - 4) / 5 ; }";
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("arithmetic_return", |b| {
        b.iter(|| parse_source(black_box(source)))
    });

    group.finish();
}

fn bench_parser_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_scaling");

    for count in [10usize, 100, 1000] {
        let source = "fn f : () => (x: i32) { x: i32 { 1 } ; ret x + 2 * (3 - 4) / 5 ; }\n"
            .repeat(count);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_function(format!("functions_{count}"), |b| {
            b.iter(|| parse_source(black_box(&source)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parser_minimal_function, bench_parser_scaling);
criterion_main!(benches);
