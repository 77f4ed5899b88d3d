use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use exophase::batch::OutputChannel;
use exophase::constants::{AngleUnit, DEFAULT_INTERP_RESOLUTION};
use exophase::phase_curve::PhaseCurve;

/// Uniform random in [0, 2π)
#[inline]
fn rand_angle(rng: &mut StdRng) -> f64 {
    let two_pi = std::f64::consts::TAU;
    rng.random::<f64>() * two_pi
}

/// Orbit with only the eccentricity mattering for the solver (angles neutral).
#[inline]
fn make_orbit(eccentricity: f64) -> PhaseCurve {
    PhaseCurve::new(eccentricity, 0.0, 0.0, 0.0, AngleUnit::Radians).unwrap()
}

/// Typical regime: fixed-point strategy, e ∈ [0.0, 0.7]
fn bench_typical(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
    let samples = 10_000usize;

    c.bench_function("solve_eccentric_anomaly/fixed_point_e<=0.7", |b| {
        b.iter_batched(
            || {
                // Pre-generate inputs to avoid RNG cost in the timed section
                (0..samples)
                    .map(|_| {
                        let orbit = make_orbit(rng.random_range(0.0..=0.7));
                        (orbit, rand_angle(&mut rng))
                    })
                    .collect::<Vec<_>>()
            },
            |cases| {
                // Benchmark only the solver calls
                for (orbit, mean_anomaly) in cases {
                    let ecc_anomaly = orbit.eccentric_anomaly(black_box(mean_anomaly)).unwrap();
                    black_box(ecc_anomaly);
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// High-eccentricity regime on the bracketed strategy: e ∈ [0.7, 0.99]
fn bench_high_e_bracketed(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xBADF00D);
    let samples = 1_000usize;

    c.bench_function("solve_eccentric_anomaly/bracketed_e_0.7..0.99", |b| {
        b.iter_batched(
            || {
                (0..samples)
                    .map(|_| {
                        let orbit = make_orbit(rng.random_range(0.7..0.99));
                        (orbit, rand_angle(&mut rng))
                    })
                    .collect::<Vec<_>>()
            },
            |cases| {
                for (orbit, mean_anomaly) in cases {
                    let ecc_anomaly = orbit
                        .eccentric_anomaly_bracketed(
                            black_box(mean_anomaly),
                            DEFAULT_INTERP_RESOLUTION,
                        )
                        .unwrap();
                    black_box(ecc_anomaly);
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// Near-circular regime: e ≈ 1e-12
fn bench_near_circular(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xFEEDFACE);
    let samples = 10_000usize;
    let orbit = make_orbit(1e-12);

    c.bench_function("solve_eccentric_anomaly/near_circular_e=1e-12", |b| {
        b.iter_batched(
            || (0..samples).map(|_| rand_angle(&mut rng)).collect::<Vec<_>>(),
            |anomalies| {
                for mean_anomaly in anomalies {
                    let ecc_anomaly = orbit.eccentric_anomaly(black_box(mean_anomaly)).unwrap();
                    black_box(ecc_anomaly);
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// Full pipeline over a 10k-anomaly batch, sequential vs rayon
fn bench_batch_pipeline(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xCAFEBABE);
    let orbit = make_orbit(0.3);
    let anomalies: Vec<f64> = (0..10_000).map(|_| rand_angle(&mut rng)).collect();
    let channels = [OutputChannel::PhaseAngle, OutputChannel::TimeFraction];

    c.bench_function("phase_curve/batch_10k_sequential", |b| {
        b.iter(|| {
            let output = orbit
                .evaluate_batch(black_box(&anomalies), black_box(&channels))
                .unwrap();
            black_box(output);
        })
    });

    c.bench_function("phase_curve/batch_10k_parallel", |b| {
        b.iter(|| {
            let output = orbit
                .evaluate_batch_parallel(black_box(&anomalies), black_box(&channels))
                .unwrap();
            black_box(output);
        })
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_typical, bench_high_e_bracketed, bench_near_circular, bench_batch_pipeline
);
criterion_main!(benches);
