//! # Observational quantities of a phase curve
//!
//! Free functions turning pipeline outputs into what an instrument measures:
//! star–planet distance, on-sky angular separation, planet-to-star flux
//! ratio, and the analytic Lambert phase function. All four are pure,
//! infallible helpers over the anomaly pipeline of
//! [`crate::phase_curve`]; angle-accepting ones take an explicit
//! [`AngleUnit`] selector.

use crate::constants::{
    AngleUnit, ArcSec, AstronomicalUnit, JupiterRadius, Parsec, Radian, AURJUP,
};

/// Instantaneous star–planet distance on the orbit, in AU.
///
/// Conic equation `r = a(1 - e²)/(1 + e·cos ν)`: `a(1 - e)` at periapsis,
/// `a(1 + e)` at apoapsis, constant `a` for a circular orbit.
///
/// Arguments
/// -----------------
/// * `true_anomaly`: True anomaly `ν`, in `unit`.
/// * `semi_major_axis`: Semi-major axis `a` (AU).
/// * `eccentricity`: Orbital eccentricity `e`.
/// * `unit`: Unit of `true_anomaly`.
///
/// Return
/// ----------
/// * The orbital distance `r` (AU).
pub fn orbital_distance(
    true_anomaly: f64,
    semi_major_axis: AstronomicalUnit,
    eccentricity: f64,
    unit: AngleUnit,
) -> AstronomicalUnit {
    let nu = unit.in_radians(true_anomaly);
    semi_major_axis * (1.0 - eccentricity * eccentricity) / (1.0 + eccentricity * nu.cos())
}

/// On-sky angular separation between star and planet, in arcsec.
///
/// Projects the orbital distance with `f = ν + ω`:
/// `sep = r·√(cos²f + sin²f·cos²i) / D`. With `r` in AU and `D` in parsec
/// the small-angle quotient is already arcsec. All three angles are
/// interpreted in `unit`.
///
/// Arguments
/// -----------------
/// * `orbital_distance`: Star–planet distance `r` (AU), see [`orbital_distance`].
/// * `true_anomaly`: True anomaly `ν`, in `unit`.
/// * `periapsis_argument`: Argument of periastron `ω`, in `unit`.
/// * `inclination`: Orbital inclination `i`, in `unit`.
/// * `system_distance`: Observer–system distance `D` (pc).
/// * `unit`: Unit of the angular arguments.
///
/// Return
/// ----------
/// * The projected separation (arcsec).
pub fn angular_separation(
    orbital_distance: AstronomicalUnit,
    true_anomaly: f64,
    periapsis_argument: f64,
    inclination: f64,
    system_distance: Parsec,
    unit: AngleUnit,
) -> ArcSec {
    let f_angle = unit.in_radians(true_anomaly) + unit.in_radians(periapsis_argument);
    let incl = unit.in_radians(inclination);
    let x = f_angle.cos();
    let y = f_angle.sin() * incl.cos();
    orbital_distance * (x * x + y * y).sqrt() / system_distance
}

/// Planet-to-star flux ratio in reflected light.
///
/// `F_p/F_* = A_g·(R_p/r)²·φ·scale`, with the orbital distance converted
/// from AU to Jupiter radii ([`AURJUP`]) so the radius quotient is
/// dimensionless.
///
/// Arguments
/// -----------------
/// * `phase_value`: Phase-function value `φ ∈ [0, 1]`, e.g. from [`lambert_phase`].
/// * `distance`: Star–planet distance `r` (AU).
/// * `geometric_albedo`: Geometric albedo `A_g`.
/// * `planet_radius`: Planet radius `R_p` (Jupiter radii).
/// * `scale`: Extra multiplicative factor (1.0 for none).
///
/// Return
/// ----------
/// * The dimensionless flux ratio.
pub fn flux_ratio(
    phase_value: f64,
    distance: AstronomicalUnit,
    geometric_albedo: f64,
    planet_radius: JupiterRadius,
    scale: f64,
) -> f64 {
    let distance_rjup = distance * AURJUP;
    let radius_quotient = planet_radius / distance_rjup;
    geometric_albedo * radius_quotient * radius_quotient * phase_value * scale
}

/// Analytic Lambert phase function of a diffusely scattering sphere.
///
/// `φ(α) = (sin α + (π - α)·cos α)/π`: 1 at full phase (`α = 0`), `1/π` at
/// quadrature, 0 at `α = π`.
pub fn lambert_phase(alpha: f64, unit: AngleUnit) -> f64 {
    let alpha_rad: Radian = unit.in_radians(alpha);
    (alpha_rad.sin() + (std::f64::consts::PI - alpha_rad) * alpha_rad.cos()) / std::f64::consts::PI
}

#[cfg(test)]
mod observables_test {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_orbital_distance_apsides() {
        assert_relative_eq!(
            orbital_distance(0.0, 1.0, 0.5, AngleUnit::Radians),
            0.5,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            orbital_distance(PI, 1.0, 0.5, AngleUnit::Radians),
            1.5,
            epsilon = 1e-12
        );
        // circular orbit keeps r = a everywhere
        assert_relative_eq!(
            orbital_distance(2.3, 1.0, 0.0, AngleUnit::Radians),
            1.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_orbital_distance_degree_input() {
        assert_relative_eq!(
            orbital_distance(90.0, 2.0, 0.3, AngleUnit::Degrees),
            orbital_distance(PI / 2.0, 2.0, 0.3, AngleUnit::Radians),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_angular_separation_face_on_orbit() {
        // i = 0: the projection factor is 1 whatever the in-plane angle
        for nu in [0.0, 0.7, 2.0, 4.5] {
            assert_relative_eq!(
                angular_separation(1.0, nu, 0.3, 0.0, 10.0, AngleUnit::Radians),
                0.1,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_angular_separation_edge_on_conjunction() {
        // edge-on with f = π/2 puts the planet along the line of sight
        let sep = angular_separation(1.0, PI / 2.0, 0.0, PI / 2.0, 10.0, AngleUnit::Radians);
        assert_relative_eq!(sep, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_angular_separation_converts_all_angles() {
        let from_deg = angular_separation(0.5, 30.0, 60.0, 45.0, 5.0, AngleUnit::Degrees);
        let from_rad = angular_separation(
            0.5,
            30.0_f64.to_radians(),
            60.0_f64.to_radians(),
            45.0_f64.to_radians(),
            5.0,
            AngleUnit::Radians,
        );
        assert_relative_eq!(from_deg, from_rad, epsilon = 1e-12);
    }

    #[test]
    fn test_flux_ratio_scaling_laws() {
        let reference = flux_ratio(1.0, 0.05, 0.5, 1.0, 1.0);
        assert!(reference > 0.0);
        // quadratic in planet radius, inverse-square in distance, linear in the rest
        assert_relative_eq!(flux_ratio(1.0, 0.05, 0.5, 2.0, 1.0), 4.0 * reference);
        assert_relative_eq!(
            flux_ratio(1.0, 0.1, 0.5, 1.0, 1.0),
            reference / 4.0,
            epsilon = 1e-15
        );
        assert_relative_eq!(flux_ratio(0.5, 0.05, 0.5, 1.0, 2.0), reference);
    }

    #[test]
    fn test_flux_ratio_reference_value() {
        // Ag = 0.5, Rp = 1 R_Jup at 0.05 AU, full phase
        let expected = 0.5 * (1.0 / (0.05 * AURJUP)).powi(2);
        assert_relative_eq!(flux_ratio(1.0, 0.05, 0.5, 1.0, 1.0), expected, epsilon = 1e-18);
    }

    #[test]
    fn test_lambert_phase_landmarks() {
        assert_relative_eq!(lambert_phase(0.0, AngleUnit::Radians), 1.0, epsilon = 1e-12);
        assert_relative_eq!(
            lambert_phase(PI / 2.0, AngleUnit::Radians),
            1.0 / PI,
            epsilon = 1e-12
        );
        assert_relative_eq!(lambert_phase(PI, AngleUnit::Radians), 0.0, epsilon = 1e-12);
        assert_relative_eq!(
            lambert_phase(90.0, AngleUnit::Degrees),
            1.0 / PI,
            epsilon = 1e-12
        );
    }
}
