//! Combined benchmarks for lexer, parser and printer performance
//!
//! This benchmark suite measures the performance of the complete syntax
//! pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use jdoc_syntax::{lex, parse, print_document};

// Sample JSON documents for benchmarking
const SIMPLE_DOC: &str = r#"{"key": "value", "count": 3}"#;

const NESTED_DOC: &str = r#"
{
  "id": 42,
  "name": "benchmark",
  "ratio": 0.125,
  "tags": ["one", "two", "three"],
  "nested": {
    "enabled": true,
    "limits": {"low": -10, "high": 100},
    "samples": [1.5, 2.5, 3.5]
  },
  "empty": {},
  "none": null
}
"#;

fn wide_doc() -> String {
    let mut out = String::from("{");
    for i in 0..200 {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&format!(r#""field-{i}": {i}"#));
    }
    out.push('}');
    out
}

fn bench_lexer_simple(c: &mut Criterion) {
    c.bench_function("lexer_simple_doc", |b| {
        b.iter(|| black_box(lex(black_box(SIMPLE_DOC)).unwrap()))
    });
}

fn bench_lexer_nested(c: &mut Criterion) {
    c.bench_function("lexer_nested_doc", |b| {
        b.iter(|| black_box(lex(black_box(NESTED_DOC)).unwrap()))
    });
}

fn bench_parser_simple(c: &mut Criterion) {
    c.bench_function("parser_simple_doc", |b| {
        b.iter(|| black_box(parse(black_box(SIMPLE_DOC)).unwrap()))
    });
}

fn bench_parser_nested(c: &mut Criterion) {
    c.bench_function("parser_nested_doc", |b| {
        b.iter(|| black_box(parse(black_box(NESTED_DOC)).unwrap()))
    });
}

fn bench_parser_wide(c: &mut Criterion) {
    let source = wide_doc();
    c.bench_function("parser_wide_doc", |b| {
        b.iter(|| black_box(parse(black_box(&source)).unwrap()))
    });
}

fn bench_printer_nested(c: &mut Criterion) {
    let doc = parse(NESTED_DOC).unwrap();
    c.bench_function("printer_nested_doc", |b| {
        b.iter(|| black_box(print_document(black_box(&doc))))
    });
}

fn bench_printer_pretty(c: &mut Criterion) {
    let mut doc = parse(NESTED_DOC).unwrap();
    let root = doc.root().unwrap();
    doc.set_pretty(root, true);
    c.bench_function("printer_pretty_doc", |b| {
        b.iter(|| black_box(print_document(black_box(&doc))))
    });
}

fn bench_full_pipeline(c: &mut Criterion) {
    c.bench_function("full_pipeline_nested", |b| {
        b.iter(|| {
            let doc = parse(black_box(NESTED_DOC)).unwrap();
            black_box(print_document(&doc))
        })
    });
}

criterion_group!(lexer_benches, bench_lexer_simple, bench_lexer_nested);

criterion_group!(
    parser_benches,
    bench_parser_simple,
    bench_parser_nested,
    bench_parser_wide
);

criterion_group!(
    printer_benches,
    bench_printer_nested,
    bench_printer_pretty,
    bench_full_pipeline
);

criterion_main!(lexer_benches, parser_benches, printer_benches);
