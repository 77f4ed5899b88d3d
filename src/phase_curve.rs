//! # Phase-curve orbital elements and the anomaly pipeline
//!
//! This module defines the [`PhaseCurve`](crate::phase_curve::PhaseCurve) struct, the immutable
//! orbital-element set from which every observational quantity of a reflected-light phase curve
//! is derived.
//!
//! ## The pipeline
//!
//! Data flows one direction, one mean anomaly at a time:
//!
//! 1. **Mean anomaly `M`** → **eccentric anomaly `E`** by solving Kepler's transcendental
//!    equation `E - e·sin(E) = M` ([`eccentric_anomaly`](PhaseCurve::eccentric_anomaly),
//!    [`eccentric_anomaly_bracketed`](PhaseCurve::eccentric_anomaly_bracketed)).
//! 2. **`E`** → **true anomaly `ν`** through the standard elliptic relation with quadrant
//!    correction ([`true_anomaly`](PhaseCurve::true_anomaly)).
//! 3. **`ν`** → **normalized time `t/P`** and **phase angle `α`**
//!    ([`time_fraction`](PhaseCurve::time_fraction), [`phase_angle`](PhaseCurve::phase_angle)).
//!
//! [`evaluate`](PhaseCurve::evaluate) runs the whole chain and returns the four quantities as a
//! [`PhaseSample`]; the batch API in [`crate::batch`] maps it over mean-anomaly arrays.
//!
//! ## Solver strategies
//!
//! Two interchangeable strategies solve Kepler's equation:
//!
//! - **Fixed point**: iterate `E ← M + e·sin(E)`; fast for small-to-moderate eccentricity but
//!   its convergence rate degrades as `e → 1`, so the iteration carries a hard cap and reports
//!   [`KeplerNotConverged`](crate::exophase_errors::ExophaseError::KeplerNotConverged) instead
//!   of spinning.
//! - **Bracketed**: tabulate the residual on a uniform grid over `[0, 2π]` and run Brent's
//!   method on the piecewise-linear interpolant; a fixed evaluation budget that stays robust at
//!   high eccentricity.
//!
//! ## Units
//!
//! - Eccentricity: unitless, `[0, 1)` (bound, non-parabolic orbits).
//! - Element angles: accepted in degrees or radians per [`AngleUnit`], stored in radians.
//! - Anomalies: radians throughout the pipeline, any real value (the equation is 2π-periodic
//!   and `E` follows the branch of `M`).
//!
//! ## Example
//!
//! ```rust
//! use exophase::constants::AngleUnit;
//! use exophase::phase_curve::PhaseCurve;
//!
//! // Eccentric giant on a near-edge-on orbit, elements in degrees
//! let orbit = PhaseCurve::new(0.3, 85.0, 90.0, 0.0, AngleUnit::Degrees)?;
//!
//! let sample = orbit.evaluate(1.0)?;
//! assert!(sample.time_fraction > 0.0 && sample.time_fraction < 0.5);
//! assert!(sample.phase_angle >= 0.0 && sample.phase_angle <= std::f64::consts::PI);
//! # Ok::<(), exophase::exophase_errors::ExophaseError>(())
//! ```
//!
//! ## See also
//!
//! * [`crate::batch`] – Channel selection and (parallel) array evaluation.
//! * [`crate::observables`] – Orbital distance, angular separation, flux ratio, Lambert phase.

use std::f64::consts::PI;
use std::fmt;

use crate::constants::{AngleUnit, Radian, ANOMALY_EDGE_TOL, DPI};
use crate::exophase_errors::ExophaseError;
use crate::kepler::{clamped_acos, principal_angle, solve_fixed_point, solve_interp_bracketed};

/// Orbital-element set of a phase curve (immutable, two-body).
///
/// Units
/// -----
/// * `eccentricity`: unitless, `[0, 1)`.
/// * `inclination`: radians (i).
/// * `periapsis_argument`: radians (ω), wrapped to `[0, 2π)`.
/// * `ascending_node_longitude`: radians (Ω), wrapped to `[0, 2π)`.
///
/// Notes
/// -----
/// The element set is created once per orbit and reused across many
/// mean-anomaly evaluations; every derivation is a pure function of
/// `(elements, M)` with no caching or interior mutation, which is what makes
/// the batch API trivially data-parallel.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseCurve {
    eccentricity: f64,
    inclination: Radian,
    periapsis_argument: Radian,
    ascending_node_longitude: Radian,
}

/// Derived quantities of the anomaly pipeline for one mean anomaly.
///
/// Produced by [`PhaseCurve::evaluate`]; never cached. The angular fields are
/// radians, `time_fraction` is the dimensionless `t/P ∈ [0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseSample {
    /// Eccentric anomaly `E`, on the same 2π branch as the input `M`.
    pub eccentric_anomaly: Radian,
    /// True anomaly `ν ∈ [0, 2π)`, consistent with `M mod 2π`.
    pub true_anomaly: Radian,
    /// Fraction of the orbital period elapsed since periapsis, `[0, 1)`.
    pub time_fraction: f64,
    /// Star–planet–observer phase angle `α ∈ [0, π]`.
    pub phase_angle: Radian,
}

impl PhaseCurve {
    /// Construct a validated orbital-element set.
    ///
    /// Angular elements are normalized to radians immediately (per `unit`);
    /// ω and Ω are additionally wrapped to `[0, 2π)`. The eccentricity is
    /// checked once here and never re-validated downstream.
    ///
    /// Arguments
    /// -----------------
    /// * `eccentricity`: Orbital eccentricity `e ∈ [0, 1)`.
    /// * `inclination`: Orbital inclination `i`.
    /// * `periapsis_argument`: Argument of periastron `ω`.
    /// * `ascending_node_longitude`: Longitude of the ascending node `Ω`.
    /// * `unit`: Unit of the three angular arguments.
    ///
    /// Return
    /// ----------
    /// * A new [`PhaseCurve`], or
    ///   [`EccentricityOutOfRange`](ExophaseError::EccentricityOutOfRange) for
    ///   an unbound or parabolic `e`.
    pub fn new(
        eccentricity: f64,
        inclination: f64,
        periapsis_argument: f64,
        ascending_node_longitude: f64,
        unit: AngleUnit,
    ) -> Result<Self, ExophaseError> {
        if !(0.0..1.0).contains(&eccentricity) {
            return Err(ExophaseError::EccentricityOutOfRange(eccentricity));
        }
        Ok(PhaseCurve {
            eccentricity,
            inclination: unit.in_radians(inclination),
            periapsis_argument: principal_angle(unit.in_radians(periapsis_argument)),
            ascending_node_longitude: principal_angle(unit.in_radians(ascending_node_longitude)),
        })
    }

    /// Orbital eccentricity `e`.
    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    /// Orbital inclination `i` (radians).
    pub fn inclination(&self) -> Radian {
        self.inclination
    }

    /// Argument of periastron `ω` (radians, `[0, 2π)`).
    pub fn periapsis_argument(&self) -> Radian {
        self.periapsis_argument
    }

    /// Longitude of the ascending node `Ω` (radians, `[0, 2π)`).
    pub fn ascending_node_longitude(&self) -> Radian {
        self.ascending_node_longitude
    }

    /// Solve Kepler's equation for the eccentric anomaly (fixed-point strategy).
    ///
    /// Iterates `E ← M + e·sin(E)` from `E₀ = M` until the relative change
    /// falls below the crate tolerance. Mean anomalies within
    /// [`ANOMALY_EDGE_TOL`](crate::constants::ANOMALY_EDGE_TOL) of a multiple
    /// of π are returned as `E = M` directly; there the fixed point is exact
    /// and iterating on it is numerically unstable.
    ///
    /// Arguments
    /// -----------------
    /// * `mean_anomaly`: Mean anomaly `M` (radians, any real value).
    ///
    /// Return
    /// ----------
    /// * The eccentric anomaly `E` on the same branch as `M`, or
    ///   [`KeplerNotConverged`](ExophaseError::KeplerNotConverged) once the
    ///   iteration budget is exhausted (near-unity eccentricities close to the
    ///   periapsis shoulder; switch to
    ///   [`eccentric_anomaly_bracketed`](PhaseCurve::eccentric_anomaly_bracketed)
    ///   there).
    pub fn eccentric_anomaly(&self, mean_anomaly: Radian) -> Result<Radian, ExophaseError> {
        solve_fixed_point(self.eccentricity, mean_anomaly)
    }

    /// Solve Kepler's equation for the eccentric anomaly (bracketed strategy).
    ///
    /// Tabulates the residual `M + e·sin(E) - E` on a uniform
    /// `resolution`-point grid over `[0, 2π]` and locates the root of the
    /// piecewise-linear interpolant with Brent's method. The evaluation budget
    /// is fixed by `resolution`, making this the preferred path for large
    /// eccentricities or adversarial anomalies where the fixed point crawls.
    /// The table is rebuilt on every call; see
    /// [`DEFAULT_INTERP_RESOLUTION`](crate::constants::DEFAULT_INTERP_RESOLUTION)
    /// for the stock grid size.
    ///
    /// Arguments
    /// -----------------
    /// * `mean_anomaly`: Mean anomaly `M` (radians, any real value).
    /// * `resolution`: Number of grid points (≥ 2); root accuracy improves
    ///   quadratically with it.
    ///
    /// Return
    /// ----------
    /// * The eccentric anomaly `E` on the same branch as `M`, or an
    ///   [`ExophaseError`] (degenerate grid, bracket failure, Brent
    ///   non-convergence).
    pub fn eccentric_anomaly_bracketed(
        &self,
        mean_anomaly: Radian,
        resolution: usize,
    ) -> Result<Radian, ExophaseError> {
        solve_interp_bracketed(self.eccentricity, mean_anomaly, resolution)
    }

    /// True anomaly `ν` from a solved eccentric anomaly.
    ///
    /// `ν = arccos((cos E - e)/(1 - e·cos E))`, flipped to `2π - ν` when
    /// `M mod 2π ≥ π` so the full orbit is recovered from the `[0, π]` range
    /// of `arccos` and `ν` stays 2π-periodic in `M`.
    pub fn true_anomaly(
        &self,
        mean_anomaly: Radian,
        ecc_anomaly: Radian,
    ) -> Result<Radian, ExophaseError> {
        let cos_ea = ecc_anomaly.cos();
        let nu = clamped_acos((cos_ea - self.eccentricity) / (1.0 - self.eccentricity * cos_ea))?;
        if principal_angle(mean_anomaly) >= PI {
            Ok(DPI - nu)
        } else {
            Ok(nu)
        }
    }

    /// Fraction of the orbital period elapsed since periapsis, `t/P ∈ [0, 1)`.
    ///
    /// Uses the eccentric-anomaly time relation expressed through `ν`; the
    /// first term changes branch on the second half of the orbit
    /// (`M mod 2π > π`, guarded around `M = π` itself) and the result is
    /// folded into `[0, 1)`. Monotonically non-decreasing in `M` over one
    /// period, with `t/P = 0` at periapsis; mean anomalies within a few ulps
    /// of the full period wrap back to `0`.
    pub fn time_fraction(&self, mean_anomaly: Radian, true_anomaly: Radian) -> f64 {
        let ecc = self.eccentricity;

        let mut term_1 =
            ((true_anomaly / 2.0).tan() * (1.0 - ecc).sqrt()).atan2((1.0 + ecc).sqrt());
        let m_principal = principal_angle(mean_anomaly);
        if m_principal > PI && (m_principal - PI).abs() > ANOMALY_EDGE_TOL {
            term_1 += PI;
        }

        let term_2 = ecc * true_anomaly.sin() * (1.0 - ecc * ecc).sqrt()
            / (1.0 + ecc * true_anomaly.cos());

        // ν collapses onto an exact multiple of π when cos E rounds to ±1;
        // the fold keeps those edge samples inside one period.
        ((2.0 * term_1 - term_2) / DPI).rem_euclid(1.0)
    }

    /// Star–planet–observer phase angle `α ∈ [0, π]`.
    ///
    /// With `f = ν + ω` in the orbital plane,
    /// `cos α = sin f·sin i·sin Ω - cos Ω·cos f`; the arc cosine argument is
    /// clamped within the crate tolerance and reported as
    /// [`ArccosOutOfDomain`](ExophaseError::ArccosOutOfDomain) beyond it.
    pub fn phase_angle(&self, true_anomaly: Radian) -> Result<Radian, ExophaseError> {
        let f_angle = true_anomaly + self.periapsis_argument;
        let cos_alpha = f_angle.sin() * self.inclination.sin() * self.ascending_node_longitude.sin()
            - self.ascending_node_longitude.cos() * f_angle.cos();
        clamped_acos(cos_alpha)
    }

    /// Run the full anomaly pipeline for one mean anomaly.
    ///
    /// Solves the eccentric anomaly with the fixed-point strategy, then
    /// derives the true anomaly, time fraction, and phase angle. This is the
    /// per-element worker behind the batch API.
    ///
    /// Arguments
    /// -----------------
    /// * `mean_anomaly`: Mean anomaly `M` (radians, any real value).
    ///
    /// Return
    /// ----------
    /// * A [`PhaseSample`] with all four derived quantities, or the first
    ///   [`ExophaseError`] encountered along the chain.
    pub fn evaluate(&self, mean_anomaly: Radian) -> Result<PhaseSample, ExophaseError> {
        let ecc_anomaly = self.eccentric_anomaly(mean_anomaly)?;
        let true_anomaly = self.true_anomaly(mean_anomaly, ecc_anomaly)?;
        Ok(PhaseSample {
            eccentric_anomaly: ecc_anomaly,
            true_anomaly,
            time_fraction: self.time_fraction(mean_anomaly, true_anomaly),
            phase_angle: self.phase_angle(true_anomaly)?,
        })
    }
}

impl fmt::Display for PhaseCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rad_to_deg = 180.0 / PI;
        writeln!(f, "Phase-curve orbital elements")?;
        writeln!(f, "-------------------------------------------")?;
        writeln!(f, "  e   (eccentricity)          = {:.6}", self.eccentricity)?;
        writeln!(
            f,
            "  i   (inclination)           = {:.6} rad ({:.6}°)",
            self.inclination,
            self.inclination * rad_to_deg
        )?;
        writeln!(
            f,
            "  Ω   (longitude of node)     = {:.6} rad ({:.6}°)",
            self.ascending_node_longitude,
            self.ascending_node_longitude * rad_to_deg
        )?;
        writeln!(
            f,
            "  ω   (argument of periapsis) = {:.6} rad ({:.6}°)",
            self.periapsis_argument,
            self.periapsis_argument * rad_to_deg
        )
    }
}
