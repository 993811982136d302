//! Criterion benchmarks for the filter and render paths.
//!
//! Every keystroke that survives the debounce runs one full filter and one
//! full render, so both should stay well under a frame for catalogs of a few
//! thousand entries.

use std::hint::black_box;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use elecdex::catalog::{Item, ItemLinks};
use elecdex::render::{self, ResultsArea, html};
use elecdex::search::search;

const CATEGORIES: [&str; 5] = ["Components", "Microcontrollers", "Protocols", "Topics", "Tools"];

fn synthetic_items(count: usize) -> Vec<Item> {
    (0..count)
        .map(|i| Item {
            name: format!("Part {i}"),
            category: CATEGORIES[i % CATEGORIES.len()].to_string(),
            description: format!("Reference entry {i} covering voltage, current and timing"),
            keywords: vec![format!("kw{}", i % 50), "serial".to_string()],
            icon: None,
            links: ItemLinks {
                documentation: Some(format!("https://example.com/docs/{i}")),
                datasheet: (i % 2 == 0).then(|| format!("https://example.com/ds/{i}.pdf")),
                tutorial: None,
            },
        })
        .collect()
}

// =============================================================================
// Filter Benchmarks
// =============================================================================

fn filter_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");

    for size in [100, 1_000, 5_000] {
        let items = synthetic_items(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("default_view", size), &items, |b, items| {
            b.iter(|| search(black_box(items), black_box("")))
        });
        group.bench_with_input(BenchmarkId::new("selective", size), &items, |b, items| {
            b.iter(|| search(black_box(items), black_box("kw7")))
        });
        group.bench_with_input(BenchmarkId::new("miss", size), &items, |b, items| {
            b.iter(|| search(black_box(items), black_box("stm32")))
        });
    }

    group.finish();
}

// =============================================================================
// Render Benchmarks
// =============================================================================

fn render_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for size in [10, 100, 1_000] {
        let items = synthetic_items(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("build_view", size), &items, |b, items| {
            b.iter(|| render::build_view(black_box(items)))
        });

        let area = ResultsArea::Results {
            view: render::build_view(&items),
        };
        group.bench_with_input(BenchmarkId::new("html_fragment", size), &area, |b, area| {
            b.iter(|| html::fragment(black_box(area)).into_string())
        });
    }

    group.finish();
}

criterion_group!(benches, filter_benchmarks, render_benchmarks);
criterion_main!(benches);
