pub mod batch;
pub mod constants;
pub mod exophase_errors;
mod kepler;
pub mod observables;
pub mod phase_curve;
