//! Benchmarks for grammar parsing and linting.

use std::fs;
use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pcfg::{lint_document, read_str};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name)).unwrap()
}

/// A generated grammar with `forms` forms of `cases` cases each.
fn synthetic_grammar(forms: usize, cases: usize) -> String {
    let mut source = String::from("!name: Synthetic\n!root: f0\n\n");
    for f in 0..forms {
        source.push_str(&format!("f{}:\n", f));
        for c in 0..cases {
            if f + 1 < forms && c == 0 {
                source.push_str(&format!("  2 [word $f{} \"x\"]\n", f + 1));
            } else {
                source.push_str(&format!("  {}.5 literal value # case\n", c + 1));
            }
        }
        source.push('\n');
    }
    source
}

// -- Parsing benchmarks --

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    let names = load_fixture("names.pcfg");
    let small = "!root: a\na: [hello $b]\nb:\n  x\n  y\n";
    let large = synthetic_grammar(200, 20);

    group.bench_function("read_small", |b| {
        b.iter(|| read_str(black_box(small)).unwrap())
    });

    group.bench_function("read_fixture", |b| {
        b.iter(|| read_str(black_box(&names)).unwrap())
    });

    group.bench_function("read_large", |b| {
        b.iter(|| read_str(black_box(&large)).unwrap())
    });

    group.finish();
}

// -- Lint benchmarks --

fn bench_linting(c: &mut Criterion) {
    let mut group = c.benchmark_group("linting");

    let large = read_str(&synthetic_grammar(200, 20)).unwrap();

    group.bench_function("lint_large", |b| {
        b.iter(|| lint_document(black_box(&large)))
    });

    group.bench_function("to_source_large", |b| {
        b.iter(|| black_box(&large).to_source())
    });

    group.finish();
}

criterion_group!(benches, bench_parsing, bench_linting);
criterion_main!(benches);
