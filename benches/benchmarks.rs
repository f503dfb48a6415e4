//! Performance benchmarks for hollow

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use hollow::{Finding, Reporter, scan};
use std::fs;
use std::io;
use std::path::PathBuf;
use tempfile::TempDir;

/// Lay out `dirs` directories of `files_per_dir` files each; every third file is empty.
fn create_test_tree(dirs: usize, files_per_dir: usize) -> TempDir {
    let dir = TempDir::new().unwrap();

    for d in 0..dirs {
        let sub = dir.path().join(format!("dir_{}", d));
        fs::create_dir_all(&sub).unwrap();
        for f in 0..files_per_dir {
            let content = if f % 3 == 0 { "" } else { "some bytes" };
            fs::write(sub.join(format!("file_{}.txt", f)), content).unwrap();
        }
    }

    for f in 0..files_per_dir {
        fs::write(dir.path().join(format!("top_{}.txt", f)), "").unwrap();
    }

    dir
}

fn bench_scan(c: &mut Criterion) {
    let small = create_test_tree(10, 10);
    let large = create_test_tree(50, 100);

    let mut group = c.benchmark_group("scan");

    group.bench_function("flat_small", |b| {
        b.iter(|| scan(black_box(small.path()), false).count())
    });

    group.bench_function("recursive_small", |b| {
        b.iter(|| scan(black_box(small.path()), true).count())
    });

    group.bench_function("flat_large", |b| {
        b.iter(|| scan(black_box(large.path()), false).count())
    });

    group.bench_function("recursive_large", |b| {
        b.iter(|| scan(black_box(large.path()), true).count())
    });

    group.finish();
}

fn bench_report(c: &mut Criterion) {
    let paths: Vec<PathBuf> = (0..1000)
        .map(|i| PathBuf::from(format!("/tmp/bench/dir_{}/file_{}.txt", i % 10, i)))
        .collect();

    c.bench_function("report_1000_empty_files", |b| {
        b.iter(|| {
            let mut reporter = Reporter::new(io::sink());
            let findings = paths.iter().cloned().map(Finding::EmptyFile);
            reporter.report_all(black_box(findings)).unwrap()
        })
    });
}

criterion_group!(benches, bench_scan, bench_report);
criterion_main!(benches);
