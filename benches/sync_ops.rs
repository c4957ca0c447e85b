//! Benchmarks for marker merging and plan resolution.
//!
//! These benchmarks measure the performance of the managed-block merge,
//! which runs once per instruction file on every `init`, and of plan
//! resolution over the full provider registry.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use spectr::config::Config;
use spectr::marker;
use spectr::merge;
use spectr::providers::{base_initializers, Registry};
use spectr::resolve::resolve;

/// A managed file with `lines` lines of user prose on either side of the
/// block.
fn managed_file(lines: usize) -> String {
    let mut text = String::new();
    for i in 0..lines {
        text.push_str(&format!("User prose line {} outside the block.\n", i));
    }
    text.push_str("\n<!-- spectr:start -->\nstale managed body\n<!-- spectr:end -->\n\n");
    for i in 0..lines {
        text.push_str(&format!("Trailing user note {}.\n", i));
    }
    text
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");

    group.bench_function("create", |b| {
        b.iter(|| merge::merge("CLAUDE.md", None, black_box("fresh body")))
    });

    let plain = "# Notes\n\nNo managed block here yet.\n".repeat(20);
    group.bench_function("append", |b| {
        b.iter(|| merge::merge("CLAUDE.md", Some(black_box(&plain)), "fresh body"))
    });

    for lines in [10, 200, 2000] {
        let existing = managed_file(lines);
        group.bench_with_input(
            BenchmarkId::new("splice", lines),
            &existing,
            |b, existing| b.iter(|| merge::merge("CLAUDE.md", Some(black_box(existing)), "new body")),
        );
    }

    group.finish();
}

fn bench_locate(c: &mut Criterion) {
    let mut group = c.benchmark_group("locate");

    for lines in [10, 200, 2000] {
        let buffer = managed_file(lines);
        group.bench_with_input(BenchmarkId::new("open", lines), &buffer, |b, buffer| {
            b.iter(|| marker::locate(black_box(buffer)))
        });
    }

    let plain = "Nothing managed about this file.\n".repeat(500);
    group.bench_function("absent", |b| {
        b.iter(|| marker::locate(black_box(&plain)))
    });

    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let config = Config::default();
    let registry = Registry::builtin();

    c.bench_function("resolve_full_registry", |b| {
        b.iter(|| {
            let mut units = base_initializers(&config);
            for provider in registry.all() {
                units.extend(provider.initializers(&config));
            }
            resolve(black_box(units))
        })
    });
}

criterion_group!(benches, bench_merge, bench_locate, bench_resolve);
criterion_main!(benches);
