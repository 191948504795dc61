#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kmlwrite::test_utils::*;

fn build_document(points: usize) -> KmlDocument {
    let mut doc = KmlDocument::new("Benchmark", "Generated points");
    doc.register_folder(Folder::new("Points").render()).unwrap();
    for i in 0..points {
        #[allow(clippy::as_conversions)]
        let offset = (i % 1000) as f64 / 1000.0;
        let point = Point::new(50.0 + offset, -1.0 - offset)
            .name(format!("point-{}", i))
            .timestamp("2020-01-31T00:00:00Z");
        doc.merge_into_folder(point.render(), "Points").unwrap();
    }
    doc
}

// Benchmark document assembly
fn bench_assembly(c: &mut Criterion) {
    let mut group = c.benchmark_group("Assembly");

    for points in [100usize, 1_000, 10_000] {
        group.bench_with_input(
            BenchmarkId::new("build", points),
            &points,
            |b, &points| {
                b.iter(|| build_document(black_box(points)));
            },
        );
    }

    group.finish();
}

// Benchmark serialization
fn bench_writer(c: &mut Criterion) {
    let mut group = c.benchmark_group("Writer");

    for points in [100usize, 1_000, 10_000] {
        let doc = build_document(points);
        group.bench_with_input(BenchmarkId::new("render", points), &doc, |b, doc| {
            let writer = KmlWriter::new();
            b.iter(|| writer.render_document(black_box(doc), Declaration::Utf8));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_assembly, bench_writer);
criterion_main!(benches);
