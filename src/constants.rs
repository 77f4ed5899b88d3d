//! # Constants and type definitions for exophase
//!
//! This module centralizes the **numerical tolerances**, **conversion factors**, and **common
//! type definitions** used throughout the `exophase` library.
//!
//! ## Overview
//!
//! - Angular conversion factors (degrees ↔ radians)
//! - Solver budgets and tolerances for the Kepler-equation strategies
//! - Core unit type aliases used across the crate
//! - The [`AngleUnit`] selector threaded through every angle-accepting boundary function
//!
//! These definitions are used by all main modules, including the anomaly pipeline, batch
//! evaluation, and the observable-quantity formulas.

// -------------------------------------------------------------------------------------------------
// Angular constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Astronomical Unit expressed in Jupiter radii, used to rescale orbital distances
/// before forming the planet/star flux ratio
pub const AURJUP: f64 = 2092.51204;

// -------------------------------------------------------------------------------------------------
// Solver budgets and tolerances
// -------------------------------------------------------------------------------------------------

/// Hard iteration ceiling of the fixed-point Kepler solve; exceeding it raises
/// [`KeplerNotConverged`](crate::exophase_errors::ExophaseError::KeplerNotConverged)
pub const KEPLER_MAX_ITER: usize = 100;

/// Relative change `|ΔE / E_prev|` under which the fixed-point iteration stops
pub const KEPLER_REL_TOL: f64 = 1e-10;

/// Threshold on `M mod π` under which the eccentric anomaly is returned as `E = M`
/// directly, where the fixed point is exact and the bracket degenerates
pub const ANOMALY_EDGE_TOL: f64 = 1e-8;

/// Largest excursion of an `arccos` argument outside `[-1, 1]` that is clamped
/// rather than reported as a domain error
pub const ACOS_DOMAIN_TOL: f64 = 1e-9;

/// Default number of grid points tabulated on `[0, 2π]` by the bracketed
/// Kepler-equation strategy
pub const DEFAULT_INTERP_RESOLUTION: usize = 1000;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in radians
pub type Radian = f64;
/// Angle in degrees
pub type Degree = f64;
/// Angle in arcseconds
pub type ArcSec = f64;
/// Distance in Astronomical Units
pub type AstronomicalUnit = f64;
/// Distance in parsecs
pub type Parsec = f64;
/// Length in Jupiter radii
pub type JupiterRadius = f64;

// -------------------------------------------------------------------------------------------------
// Angle unit selection
// -------------------------------------------------------------------------------------------------

/// Unit of the angular arguments handed to a boundary function.
///
/// Every public function that accepts angles takes one of these explicitly and
/// normalizes its inputs to radians on entry; no function reads an implicit
/// global unit state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleUnit {
    /// Angular inputs are in degrees and converted with [`RADEG`] on entry.
    Degrees,
    /// Angular inputs are already in radians and passed through unchanged.
    Radians,
}

impl AngleUnit {
    /// Normalize an angular value expressed in this unit to radians.
    pub fn in_radians(self, value: f64) -> Radian {
        match self {
            AngleUnit::Degrees => value * RADEG,
            AngleUnit::Radians => value,
        }
    }
}

#[cfg(test)]
mod constants_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_angle_unit_normalization() {
        assert_relative_eq!(
            AngleUnit::Degrees.in_radians(180.0),
            std::f64::consts::PI,
            epsilon = 1e-15
        );
        assert_eq!(AngleUnit::Degrees.in_radians(0.0), 0.0);
        assert_eq!(AngleUnit::Radians.in_radians(1.25), 1.25);
    }

    #[test]
    fn test_au_in_jupiter_radii() {
        assert_eq!(1.0 * AURJUP, 2092.51204);
    }
}
