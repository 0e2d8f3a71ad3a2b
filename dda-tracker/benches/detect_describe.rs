use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dda_describe::{BriefConfig, NccConfig};
use dda_fast::FastConfig;
use dda_tracker::{fast_brief, fast_ncc, DetectDescribeConfig, DetectDescribePoint, Image};
use image::{GrayImage, Luma};

/// Checkerboard of 8x8 cells with a mild gradient
fn create_benchmark_image(width: u32, height: u32) -> Image {
    GrayImage::from_fn(width, height, |x, y| {
        let cell = ((x / 8) + (y / 8)) % 2;
        let base = if cell == 0 { 60 } else { 190 };
        Luma([base + ((x + y) % 16) as u8])
    })
}

fn bench_adapters(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect_describe");

    for &(w, h) in &[(320u32, 240u32), (640, 480)] {
        let img = create_benchmark_image(w, h);
        let size = format!("{}x{}", w, h);

        let mut brief = fast_brief(
            FastConfig::ultra_fast_preset(),
            BriefConfig::default(),
            DetectDescribeConfig::default(),
        )
        .unwrap();
        group.bench_with_input(BenchmarkId::new("fast_brief", &size), &img, |b, img| {
            b.iter(|| black_box(brief.detect_features(black_box(img)).unwrap().0.len()))
        });

        let mut ncc = fast_ncc(
            FastConfig::ultra_fast_preset(),
            NccConfig::default(),
            DetectDescribeConfig::default(),
        )
        .unwrap();
        group.bench_with_input(BenchmarkId::new("fast_ncc", &size), &img, |b, img| {
            b.iter(|| black_box(ncc.detect_features(black_box(img)).unwrap().0.len()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_adapters);
criterion_main!(benches);
