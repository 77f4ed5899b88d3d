use roots::{find_root_brent, SimpleConvergency};
use std::f64::consts::PI;

use crate::constants::{
    Radian, ACOS_DOMAIN_TOL, ANOMALY_EDGE_TOL, DPI, KEPLER_MAX_ITER, KEPLER_REL_TOL,
};
use crate::exophase_errors::ExophaseError;

/// Principal value of an angle in radians, in [0, 2π).
pub(crate) fn principal_angle(a: f64) -> f64 {
    a.rem_euclid(DPI)
}

/// Arc cosine with a tolerant domain guard.
///
/// Arguments out of `[-1, 1]` by at most [`ACOS_DOMAIN_TOL`] are clamped;
/// larger excursions indicate a genuine geometry error and are reported.
pub(crate) fn clamped_acos(value: f64) -> Result<Radian, ExophaseError> {
    if value.abs() > 1.0 + ACOS_DOMAIN_TOL {
        return Err(ExophaseError::ArccosOutOfDomain(value));
    }
    Ok(value.clamp(-1.0, 1.0).acos())
}

/// Fixed-point solve of Kepler's equation `E - e·sin(E) = M`.
///
/// Iterates `E ← M + e·sin(E)` from `E₀ = M` until the relative change drops
/// below [`KEPLER_REL_TOL`], capped at [`KEPLER_MAX_ITER`] iterations. When
/// `M mod π` is closer than [`ANOMALY_EDGE_TOL`] to zero the fixed point is
/// exact and `E = M` is returned without iterating.
pub(crate) fn solve_fixed_point(
    eccentricity: f64,
    mean_anomaly: f64,
) -> Result<Radian, ExophaseError> {
    if mean_anomaly.rem_euclid(PI) < ANOMALY_EDGE_TOL {
        return Ok(mean_anomaly);
    }

    let mut ecc_anomaly = mean_anomaly;
    for _ in 0..KEPLER_MAX_ITER {
        let previous = ecc_anomaly;
        ecc_anomaly = mean_anomaly + eccentricity * ecc_anomaly.sin();
        if ((ecc_anomaly - previous) / previous).abs() < KEPLER_REL_TOL {
            return Ok(ecc_anomaly);
        }
    }

    Err(ExophaseError::KeplerNotConverged {
        eccentricity,
        mean_anomaly,
        max_iter: KEPLER_MAX_ITER,
    })
}

/// Bracketed solve of Kepler's equation on a tabulated residual.
///
/// Samples `f(E) = M + e·sin(E) - E` on a uniform `resolution`-point grid over
/// `[0, 2π]`, then runs Brent's method on the piecewise-linear interpolant.
/// The solve works on the principal value of `M`; the 2πk branch offset is
/// restored on the returned root so that `E` stays on the same branch as `M`,
/// like the fixed-point strategy. Fixed evaluation budget, insensitive to the
/// eccentricity-driven slowdown of the fixed-point path.
pub(crate) fn solve_interp_bracketed(
    eccentricity: f64,
    mean_anomaly: f64,
    resolution: usize,
) -> Result<Radian, ExophaseError> {
    if resolution < 2 {
        return Err(ExophaseError::InterpGridTooSmall(resolution));
    }
    if mean_anomaly.rem_euclid(PI) < ANOMALY_EDGE_TOL {
        return Ok(mean_anomaly);
    }

    let m_principal = principal_angle(mean_anomaly);
    let branch_offset = mean_anomaly - m_principal;

    let step = DPI / (resolution - 1) as f64;
    let table: Vec<f64> = (0..resolution)
        .map(|k| {
            let ecc_anomaly = k as f64 * step;
            m_principal + eccentricity * ecc_anomaly.sin() - ecc_anomaly
        })
        .collect();

    // Piecewise-linear interpolant of the tabulated residual.
    let residual = |ecc_anomaly: f64| -> f64 {
        let pos = (ecc_anomaly / step).clamp(0.0, (resolution - 1) as f64);
        let idx = (pos as usize).min(resolution - 2);
        let frac = pos - idx as f64;
        table[idx] + (table[idx + 1] - table[idx]) * frac
    };

    // f(0) = M > 0 and f(2π) = M - 2π < 0 for any principal M, so the sign
    // change is guaranteed; a bracket failure here is surfaced, not swallowed.
    let mut tol = SimpleConvergency {
        eps: f64::EPSILON * 1e2,
        max_iter: 80,
    };
    let root = find_root_brent(0.0, DPI, &residual, &mut tol)?;

    Ok(root + branch_offset)
}
