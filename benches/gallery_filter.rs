// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use midway_mews::catalog;
use midway_mews::domain::catalog::{filter, GalleryFilter};
use std::hint::black_box;

fn gallery_filter_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_filter");

    let items = catalog::gallery_items();
    let all = GalleryFilter::All;
    let braiding = GalleryFilter::Tag("Braiding".to_string());

    group.bench_function("visible_items_all", |b| {
        b.iter(|| {
            let _ = black_box(filter::visible_items(black_box(items), &all));
        });
    });

    group.bench_function("visible_items_tag", |b| {
        b.iter(|| {
            let _ = black_box(filter::visible_items(black_box(items), &braiding));
        });
    });

    group.bench_function("tag_options", |b| {
        b.iter(|| {
            let _ = black_box(filter::tag_options(black_box(items)));
        });
    });

    group.finish();
}

criterion_group!(benches, gallery_filter_benchmark);
criterion_main!(benches);
