//! Formulary benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Convolution scalability (thumbnail to full-HD frames) for every kernel
//! - Rounding mode cost
//! - PID simulation horizon and gain sweeps
//!
//! For row-parallel convolution, use `cargo bench --features parallel`.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use formulary::prelude::*;
use formulary_bench::{gain_sweep, noise_image, photo_image};
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

fn mode_name() -> &'static str {
    if cfg!(feature = "parallel") {
        "parallel"
    } else {
        "serial"
    }
}

// ============================================================================
// Convolution Benchmarks
// ============================================================================

fn bench_convolution_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("convolution_{}", mode_name()));
    group.sample_size(50);

    for (width, height) in [(160, 120), (640, 480), (1920, 1080)] {
        let pixels = (width * height) as u64;
        group.throughput(Throughput::Elements(pixels));

        let img = photo_image(width, height, 42);
        group.bench_with_input(
            BenchmarkId::new("box_blur", pixels),
            &img,
            |b, img| b.iter(|| apply_convolution(black_box(img), BoxBlur)),
        );
    }
    group.finish();
}

fn bench_kernels(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("kernels_{}", mode_name()));
    group.sample_size(100);

    let img = photo_image(640, 480, 42);
    for kernel in Kernel::ALL {
        group.bench_with_input(BenchmarkId::new("640x480", kernel.name()), &kernel, |b, &k| {
            b.iter(|| apply_convolution(black_box(&img), k))
        });
    }
    group.finish();
}

fn bench_rounding(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("rounding_{}", mode_name()));
    group.sample_size(100);

    let img = noise_image(640, 480, 7);
    for rounding in [ChannelRounding::Nearest, ChannelRounding::Truncate] {
        let mut session = ConvolutionSession::with_rounding(rounding);
        session.load(img.clone());
        group.bench_function(format!("{rounding:?}"), |b| {
            b.iter(|| session.apply(black_box(Sharpen)).unwrap())
        });
    }
    group.finish();
}

// ============================================================================
// PID Benchmarks
// ============================================================================

fn bench_pid_horizon(c: &mut Criterion) {
    let mut group = c.benchmark_group("pid_horizon");
    group.sample_size(100);

    for steps in [600, 6_000, 60_000] {
        group.throughput(Throughput::Elements(steps as u64));
        group.bench_with_input(BenchmarkId::new("simulate", steps), &steps, |b, &steps| {
            b.iter(|| {
                Pid::new()
                    .kp(2.0)
                    .ki(0.5)
                    .kd(1.0)
                    .steps(steps)
                    .build()
                    .unwrap()
                    .run()
            })
        });
    }
    group.finish();
}

fn bench_pid_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("pid_sweep");
    group.sample_size(50);

    let gains = gain_sweep(100, 42);
    group.throughput(Throughput::Elements(gains.len() as u64));
    group.bench_function("slider_drag", |b| {
        b.iter(|| {
            for &(kp, ki, kd) in &gains {
                black_box(simulate_pid(kp, ki, kd, 1.0, 600).unwrap());
            }
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_convolution_scalability,
    bench_kernels,
    bench_rounding,
    bench_pid_horizon,
    bench_pid_sweep,
);

criterion_main!(benches);
