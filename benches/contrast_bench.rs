// Benchmark for the contrast search and palette recomputation
// Measures the work done on every color change

use chroma_picker::models::color::Color;
use chroma_picker::services::picker::PickerPalette;
use chroma_picker::utils::color_math::{contrast_ratio, search_contrast};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_contrast_ratio(c: &mut Criterion) {
    c.bench_function("contrast_ratio", |b| {
        b.iter(|| contrast_ratio(black_box(Color::rgb(0x12, 0x34, 0x56)), black_box(Color::WHITE)))
    });
}

fn bench_search_contrast(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_contrast");

    let cases = [
        ("already_legible", Color::BLACK, Color::WHITE),
        ("mid_gray_on_white", Color::GRAY, Color::WHITE),
        ("saturated_on_dark", Color::rgb(0x20, 0x00, 0xC0), Color::rgb(0x10, 0x10, 0x20)),
        ("self_contrast", Color::rgb(0xFF, 0x80, 0x00), Color::rgb(0xFF, 0x80, 0x00)),
    ];

    for (name, fg, bg) in cases {
        group.bench_with_input(BenchmarkId::from_parameter(name), &(fg, bg), |b, &(fg, bg)| {
            b.iter(|| search_contrast(black_box(fg), black_box(bg), 4.5))
        });
    }

    group.finish();
}

fn bench_palette(c: &mut Criterion) {
    c.bench_function("palette_for_translucent_color", |b| {
        b.iter(|| PickerPalette::for_color(black_box(Color::argb(0x80, 0xFF, 0x80, 0x00))))
    });
}

criterion_group!(benches, bench_contrast_ratio, bench_search_contrast, bench_palette);
criterion_main!(benches);
