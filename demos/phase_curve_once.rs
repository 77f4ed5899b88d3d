use std::env;

use exophase::batch::OutputChannel;
use exophase::constants::{AngleUnit, AstronomicalUnit, JupiterRadius, Parsec, DPI};
use exophase::exophase_errors::ExophaseError;
use exophase::observables::{angular_separation, flux_ratio, lambert_phase, orbital_distance};
use exophase::phase_curve::{PhaseCurve, PhaseSample};

/// Observing geometry of the star-planet system, fixed over a sweep.
struct SystemGeometry {
    semi_major_axis: AstronomicalUnit,
    system_distance: Parsec,
    geometric_albedo: f64,
    planet_radius: JupiterRadius,
}

/// Turn one pipeline sample into the measured pair (separation, flux ratio).
///
/// Arguments
/// -----------------
/// * `orbit`: The orbital-element set the sample was drawn from.
/// * `sample`: One output of [`PhaseCurve::evaluate`].
/// * `geometry`: Semi-major axis, distance, albedo, and planet radius.
///
/// Return
/// ----------
/// * `(separation_arcsec, flux_ratio)` for that orbital position.
fn observables_at(
    orbit: &PhaseCurve,
    sample: &PhaseSample,
    geometry: &SystemGeometry,
) -> (f64, f64) {
    let distance = orbital_distance(
        sample.true_anomaly,
        geometry.semi_major_axis,
        orbit.eccentricity(),
        AngleUnit::Radians,
    );
    let separation = angular_separation(
        distance,
        sample.true_anomaly,
        orbit.periapsis_argument(),
        orbit.inclination(),
        geometry.system_distance,
        AngleUnit::Radians,
    );
    let phase_value = lambert_phase(sample.phase_angle, AngleUnit::Radians);
    let ratio = flux_ratio(
        phase_value,
        distance,
        geometry.geometric_albedo,
        geometry.planet_radius,
        1.0,
    );
    (separation, ratio)
}

/// Minimal driver: sweep one orbit of a hot giant and print the phase curve.
/// Usage:
///   phase_curve_once [N_SAMPLES]
fn main() -> Result<(), ExophaseError> {
    let samples = env::args()
        .nth(1)
        .and_then(|raw| raw.parse::<usize>().ok())
        .unwrap_or(16);

    // HD 189733 b-like giant: 0.031 AU around a K dwarf at 19.8 pc.
    let orbit = PhaseCurve::new(0.027, 85.7, 90.0, 0.0, AngleUnit::Degrees)?;
    let geometry = SystemGeometry {
        semi_major_axis: 0.031,
        system_distance: 19.8,
        geometric_albedo: 0.4,
        planet_radius: 1.13,
    };

    println!("{orbit}");
    println!("     M/2π       t/P    α [deg]   sep [µas]      Fp/F*");
    for k in 0..=samples {
        let mean_anomaly = k as f64 * DPI / samples as f64;
        let sample = orbit.evaluate(mean_anomaly)?;
        let (separation, ratio) = observables_at(&orbit, &sample, &geometry);

        println!(
            "{:9.4} {:9.4} {:10.3} {:11.3} {:12.3e}",
            mean_anomaly / DPI,
            sample.time_fraction,
            sample.phase_angle.to_degrees(),
            separation * 1e6,
            ratio
        );
    }

    // Same sweep through the parallel batch API.
    let anomalies = (0..=samples)
        .map(|k| k as f64 * DPI / samples as f64)
        .collect::<Vec<_>>();
    let alphas = orbit
        .evaluate_batch_parallel(&anomalies, &[OutputChannel::PhaseAngle])?
        .into_single()
        .expect("single channel requested");
    let alpha_min = alphas.iter().cloned().fold(f64::INFINITY, f64::min);
    println!(
        "\nclosest approach to full phase: α = {:.3} deg",
        alpha_min.to_degrees()
    );

    Ok(())
}
