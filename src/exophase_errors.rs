use thiserror::Error;

/// Error taxonomy of the anomaly pipeline and its consumers.
///
/// Every fallible operation of the crate surfaces one of these variants to the
/// caller; nothing is caught and retried internally except the bounded
/// fixed-point iteration itself.
#[derive(Error, Debug, PartialEq)]
pub enum ExophaseError {
    #[error("Eccentricity must lie in [0, 1) for a bound orbit, got {0}")]
    EccentricityOutOfRange(f64),

    #[error(
        "Kepler fixed-point iteration did not converge within {max_iter} iterations \
         (ecc = {eccentricity}, mean anomaly = {mean_anomaly} rad)"
    )]
    KeplerNotConverged {
        eccentricity: f64,
        mean_anomaly: f64,
        max_iter: usize,
    },

    #[error("Arccos argument {0} lies outside [-1, 1] beyond numerical tolerance")]
    ArccosOutOfDomain(f64),

    #[error("Interpolation grid needs at least two points, got {0}")]
    InterpGridTooSmall(usize),

    #[error("Batch evaluation requires at least one output channel")]
    EmptyChannelSelection,

    #[error("ROOTS finding error: {0}")]
    RootFindingError(#[from] roots::SearchError),
}
