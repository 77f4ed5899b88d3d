use approx::assert_relative_eq;
use exophase::constants::AngleUnit;
use exophase::phase_curve::{PhaseCurve, PhaseSample};

/// Eccentric giant on an inclined orbit, all elements in radians.
pub fn eccentric_giant() -> PhaseCurve {
    PhaseCurve::new(0.3, 1.2, 0.8, 0.4, AngleUnit::Radians).unwrap()
}

/// Edge-on circular orbit with periastron at the ascending node.
pub fn edge_on_circular() -> PhaseCurve {
    PhaseCurve::new(0.0, 90.0, 0.0, 0.0, AngleUnit::Degrees).unwrap()
}

pub fn assert_sample_close(actual: &PhaseSample, expected: &PhaseSample, epsilon: f64) {
    assert_relative_eq!(
        actual.eccentric_anomaly,
        expected.eccentric_anomaly,
        epsilon = epsilon
    );
    assert_relative_eq!(actual.true_anomaly, expected.true_anomaly, epsilon = epsilon);
    assert_relative_eq!(
        actual.time_fraction,
        expected.time_fraction,
        epsilon = epsilon
    );
    assert_relative_eq!(actual.phase_angle, expected.phase_angle, epsilon = epsilon);
}
