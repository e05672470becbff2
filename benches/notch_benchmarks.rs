
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use notch_core::filter::{
    apply_filter, design_notch, evaluate_response, linear_grid, FilterMode, FilterSpec,
};
use notch_core::signal::Signal;
use std::f64::consts::PI;

const SIGNAL_LENGTHS: &[usize] = &[1_000, 10_000, 100_000];
const GRID_SIZES: &[usize] = &[128, 512, 2048];

fn two_tone_signal(len: usize) -> Signal {
    let samples = (0..len)
        .map(|i| {
            let t = i as f64 / 1000.0;
            (2.0 * PI * 15.0 * t).sin() + (2.0 * PI * 50.0 * t).sin()
        })
        .collect();
    Signal::new(samples, 1000.0)
}

fn benchmark_design(c: &mut Criterion) {
    let spec = FilterSpec::new(50.0, 20.0, 1000.0);
    c.bench_function("design_notch", |b| {
        b.iter(|| design_notch(black_box(spec)).unwrap())
    });
}

fn benchmark_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_filter");
    let coeffs = design_notch(FilterSpec::new(50.0, 20.0, 1000.0)).unwrap();

    for &len in SIGNAL_LENGTHS {
        let signal = two_tone_signal(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("causal", len), &signal, |b, input| {
            b.iter(|| apply_filter(&coeffs, black_box(input), FilterMode::Causal).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("zero_phase", len), &signal, |b, input| {
            b.iter(|| apply_filter(&coeffs, black_box(input), FilterMode::ZeroPhase).unwrap());
        });
    }

    group.finish();
}

fn benchmark_response(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate_response");
    let coeffs = design_notch(FilterSpec::new(50.0, 20.0, 1000.0)).unwrap();

    for &points in GRID_SIZES {
        let grid = linear_grid(1000.0, points);
        group.throughput(Throughput::Elements(points as u64));
        group.bench_with_input(BenchmarkId::from_parameter(points), &grid, |b, grid| {
            b.iter(|| evaluate_response(&coeffs, black_box(grid), 1000.0).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_design,
    benchmark_apply,
    benchmark_response
);
criterion_main!(benches);
