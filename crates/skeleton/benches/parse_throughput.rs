//! Benchmarks for record parsing and feature-blob decoding
//!
//! Run with: cargo bench --package skeleton

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use skeleton::parser::{decode_features, parse_record};

/// A representative line with a 30-token feature blob.
fn sample_line() -> String {
    let blob: Vec<String> = (0..30)
        .map(|i| format!("{}\u{2}{}\u{3}0.5", 200 + i, i))
        .collect();
    format!("12345,0,1,67890,54321,{}", blob.join("\u{1}"))
}

fn bench_parse_record(c: &mut Criterion) {
    let line = sample_line();

    c.bench_function("parse_record", |b| {
        b.iter(|| {
            let record = parse_record(black_box(&line));
            black_box(record)
        })
    });
}

fn bench_decode_features(c: &mut Criterion) {
    let line = sample_line();
    let record = parse_record(&line).expect("sample line must parse");

    c.bench_function("decode_features", |b| {
        b.iter(|| {
            let features = decode_features(black_box(record.feature_blob));
            black_box(features)
        })
    });
}

criterion_group!(benches, bench_parse_record, bench_decode_features);
criterion_main!(benches);
