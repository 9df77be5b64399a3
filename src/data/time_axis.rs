//! Sampled time axis for the transient simulation.

use crate::error::{Result, SimError};

/// Upper bound on the number of samples a single simulation may request.
pub const MAX_SAMPLES: usize = 10_000_000;

/// Build `0, step, 2*step, ...` strictly below `t_final`.
///
/// Sample `i` is `i * step`, so rounding does not accumulate along the axis.
/// The length is `ceil(t_final / step)`.
///
/// Fails with [`SimError::InvalidParameter`] when either value is not a
/// positive finite number, when `t_final == step`, or when the axis would
/// exceed [`MAX_SAMPLES`].
pub fn build_time_series(t_final: f64, step: f64) -> Result<Vec<f64>> {
    if !t_final.is_finite() || !step.is_finite() {
        return Err(SimError::InvalidParameter(
            "final time and time step must be finite".to_string(),
        ));
    }
    if t_final <= 0.0 || step <= 0.0 || t_final == step {
        return Err(SimError::InvalidParameter(
            "time values must be greater than zero and must differ from each other".to_string(),
        ));
    }
    let count = (t_final / step).ceil();
    if count > MAX_SAMPLES as f64 {
        return Err(SimError::InvalidParameter(format!(
            "{t_final} s with a step of {step} s needs {count} samples (limit {MAX_SAMPLES})"
        )));
    }
    let axis: Vec<f64> = (0..count as usize)
        .map(|i| i as f64 * step)
        .take_while(|&t| t < t_final)
        .collect();
    Ok(axis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractional_step_keeps_last_sample_below_final() {
        let axis = build_time_series(1.0, 0.1).unwrap();
        assert_eq!(axis.len(), 10);
        assert!(axis.iter().all(|&t| t < 1.0));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        assert!(build_time_series(f64::INFINITY, 1.0).is_err());
        assert!(build_time_series(5.0, f64::NAN).is_err());
    }

    #[test]
    fn oversized_axis_is_rejected() {
        assert!(matches!(
            build_time_series(1.0, 1e-9),
            Err(SimError::InvalidParameter(_))
        ));
    }
}
