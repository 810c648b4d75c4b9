//! Transform benchmarks
//!
//! Scanline-sized and page-sized sweeps through the two per-pixel-array
//! primitives, plus the raw transfer functions, to keep an eye on the
//! LUT hot path.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use itulab_core::math::gamma::{srgb_gamma_decode, srgb_gamma_encode};
use itulab_core::{LabParams, lab_to_srgb, srgb_to_lab};

/// Generate deterministic RGB test data
fn generate_rgb8_data(pixels: usize) -> Vec<u8> {
    (0..pixels * 3).map(|i| ((i * 37) % 256) as u8).collect()
}

fn bench_srgb_to_lab(c: &mut Criterion) {
    let mut group = c.benchmark_group("srgb_to_lab");
    let params = LabParams::default();

    // One fax scanline (1728 pels) and one small page worth of pixels
    for &pixels in &[1728usize, 1728 * 64] {
        let src = generate_rgb8_data(pixels);
        let mut dst = vec![0u8; src.len()];

        group.throughput(Throughput::Bytes(src.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(pixels), &pixels, |b, _| {
            b.iter(|| srgb_to_lab(black_box(&params), black_box(&src), &mut dst))
        });
    }

    group.finish();
}

fn bench_lab_to_srgb(c: &mut Criterion) {
    let mut group = c.benchmark_group("lab_to_srgb");
    let params = LabParams::default();

    for &pixels in &[1728usize, 1728 * 64] {
        let src = generate_rgb8_data(pixels);
        let mut dst = vec![0u8; src.len()];

        group.throughput(Throughput::Bytes(src.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(pixels), &pixels, |b, _| {
            b.iter(|| lab_to_srgb(black_box(&params), black_box(&src), &mut dst))
        });
    }

    group.finish();
}

fn bench_transfer_functions(c: &mut Criterion) {
    let mut group = c.benchmark_group("transfer_functions");

    let values: Vec<f32> = (0..4096).map(|i| i as f32 / 4096.0).collect();

    group.bench_function("srgb_gamma_decode", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for &v in &values {
                acc += srgb_gamma_decode(black_box(v));
            }
            acc
        })
    });

    group.bench_function("srgb_gamma_encode", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for &v in &values {
                acc += srgb_gamma_encode(black_box(v));
            }
            acc
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_srgb_to_lab,
    bench_lab_to_srgb,
    bench_transfer_functions
);
criterion_main!(benches);
