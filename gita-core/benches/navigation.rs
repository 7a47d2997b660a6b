//! Navigation benchmarks

use criterion::{criterion_group, criterion_main, Criterion};
use gita_core::{Catalog, Chapter, ReaderController, Verse};
use std::sync::Arc;

fn large_catalog() -> Arc<Catalog> {
    let chapters = (1..=18)
        .map(|c| {
            let verses = (1..=78)
                .map(|v| Verse::new("स", "sa", format!("{c}.{v}")).with_commentary("yogananda", "y"))
                .collect();
            Chapter::new(c, format!("Chapter {c}")).with_verses(verses)
        })
        .collect();
    Arc::new(Catalog::new("gita", "Bench", chapters).expect("valid catalog"))
}

fn navigation_benchmark(c: &mut Criterion) {
    let catalog = large_catalog();

    c.bench_function("walk_chapter", |b| {
        b.iter(|| {
            let mut reader = ReaderController::mount(catalog.clone(), Some("18"), Some("1"));
            while reader.next().map(|s| s.moved()).unwrap_or(false) {}
            std::hint::black_box(reader.location().map(str::len))
        })
    });

    c.bench_function("set_from_route", |b| {
        let mut reader = ReaderController::mount(catalog.clone(), None, None);
        b.iter(|| std::hint::black_box(reader.set_from_route(Some("9"), Some("40")).is_ok()))
    });
}

criterion_group!(benches, navigation_benchmark);
criterion_main!(benches);
