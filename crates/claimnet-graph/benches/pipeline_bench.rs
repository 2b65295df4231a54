use criterion::{criterion_group, criterion_main, Criterion};

use claimnet_core::config::{DuplicatePolicy, RenderConfig};
use claimnet_core::models::{EdgeRow, Label};
use claimnet_graph::graph;
use claimnet_graph::resolver;
use claimnet_graph::visual::VisualDeriver;

/// ~5K rows over 1K entities, alternating labels, with forward and back edges.
fn build_5k_row_table() -> Vec<EdgeRow> {
    let n = 1000;
    let mut rows = Vec::with_capacity(5 * n);
    for i in 0..n {
        for j in 1..=5 {
            let label = if (i + j) % 2 == 0 {
                Label::SUPPORTS
            } else {
                Label::REFUTES
            };
            let target = (i + j * 7) % n;
            rows.push(EdgeRow::new(
                format!("e{i}"),
                format!("e{target}"),
                label,
                (j as f64) * 0.5,
            ));
        }
    }
    assert_eq!(rows.len(), 5 * n);
    rows
}

fn priority() -> Vec<String> {
    vec![Label::SUPPORTS.to_string(), Label::REFUTES.to_string()]
}

fn bench_build_and_resolve(c: &mut Criterion) {
    let rows = build_5k_row_table();

    c.bench_function("build_and_resolve_5k_rows", |b| {
        b.iter(|| {
            let set = graph::build(&rows, DuplicatePolicy::Overwrite);
            resolver::resolve(&set, &priority())
        });
    });
}

fn bench_derive(c: &mut Criterion) {
    let rows = build_5k_row_table();
    let set = graph::build(&rows, DuplicatePolicy::Overwrite);
    let assignment = resolver::resolve(&set, &priority());
    let deriver = VisualDeriver::new(RenderConfig::default()).unwrap();

    c.bench_function("derive_5k_rows", |b| {
        b.iter(|| deriver.derive(&set, &assignment, 1.5).unwrap());
    });
}

criterion_group!(benches, bench_build_and_resolve, bench_derive);
criterion_main!(benches);
