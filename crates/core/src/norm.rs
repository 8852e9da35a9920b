/// Scaled distance between two estimates of the same state.
///
/// Adaptive solvers compute two solutions of different order over one step
/// and accept the step when the distance between them, scaled by the
/// tolerances, is at most one.
pub trait ErrorNorm {
    /// Returns the scaled RMS distance between `self` and `other`.
    ///
    /// Each component difference is divided by
    /// `abs_tol + rel_tol * max(|reference_i|, |self_i|)`, where `reference`
    /// is the state at the start of the step.
    fn error_norm(&self, other: &Self, reference: &Self, abs_tol: f64, rel_tol: f64) -> f64;
}

/// Computes [`ErrorNorm::error_norm`] for states backed by `f64` components.
///
/// Returns `0.0` for empty slices. Non-finite components yield a non-finite
/// norm, which solvers must handle explicitly.
///
/// # Panics
///
/// Panics if the slices differ in length.
#[must_use]
pub fn rms_error_norm(
    estimate: &[f64],
    other: &[f64],
    reference: &[f64],
    abs_tol: f64,
    rel_tol: f64,
) -> f64 {
    assert_eq!(estimate.len(), other.len(), "state lengths must match");
    assert_eq!(estimate.len(), reference.len(), "state lengths must match");

    if estimate.is_empty() {
        return 0.0;
    }

    let sum: f64 = estimate
        .iter()
        .zip(other)
        .zip(reference)
        .map(|((&y, &z), &y0)| {
            let scale = abs_tol + rel_tol * y.abs().max(y0.abs());
            ((y - z) / scale).powi(2)
        })
        .sum();

    #[allow(clippy::cast_precision_loss)]
    let n = estimate.len() as f64;

    (sum / n).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn identical_estimates_have_zero_error() {
        let y = [1.0, -2.0, 3.0];

        assert_relative_eq!(rms_error_norm(&y, &y, &y, 1e-6, 1e-6), 0.0);
    }

    #[test]
    fn error_is_scaled_by_tolerances() {
        // Both components differ by exactly one tolerance unit.
        let reference = [0.0, 10.0];
        let estimate = [0.0, 10.0];
        let other = [1e-3, 10.0 + 1e-3 * (1.0 + 10.0)];

        let norm = rms_error_norm(&estimate, &other, &reference, 1e-3, 1e-3);

        assert_relative_eq!(norm, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn non_finite_components_propagate() {
        let reference = [0.0];
        let estimate = [f64::NAN];
        let other = [0.0];

        assert!(rms_error_norm(&estimate, &other, &reference, 1e-6, 1e-6).is_nan());
    }

    #[test]
    fn empty_state_has_zero_error() {
        assert_relative_eq!(rms_error_norm(&[], &[], &[], 1e-6, 1e-6), 0.0);
    }
}
