/// A trait for types that can be stepped using their derivative.
///
/// Implementing this trait enables generic ODE solvers to work with the type by
/// stepping it via `derivative * delta`, where the derivative is with respect
/// to `Delta`. While typically used for time integration, `Delta` can represent
/// any independent variable.
///
/// Multi-stage methods build their updates by chaining steps, so `step` must
/// be affine in the derivative: stepping by `d1` over `h1` and then by `d2`
/// over `h2` must equal `self + d1 * h1 + d2 * h2`. The plain
/// `state + derivative * delta` implementation satisfies this.
pub trait StepIntegrable<Delta> {
    /// The derivative of the type with respect to `Delta`.
    type Derivative;

    /// Returns the value after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}

/// Type alias for the derivative of a `StepIntegrable` type.
///
/// This is a convenience for accessing the [`StepIntegrable::Derivative`]
/// associated type without writing out the fully qualified syntax.
pub type DerivativeOf<T, Delta> = <T as StepIntegrable<Delta>>::Derivative;

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    /// One transcript/product pair.
    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Pair {
        mrna: f64,
        protein: f64,
    }

    #[derive(Debug, Clone, Copy)]
    struct PairRate {
        d_mrna: f64,
        d_protein: f64,
    }

    impl StepIntegrable<f64> for Pair {
        type Derivative = PairRate;

        fn step(&self, rate: PairRate, dt: f64) -> Self {
            Pair {
                mrna: self.mrna + rate.d_mrna * dt,
                protein: self.protein + rate.d_protein * dt,
            }
        }
    }

    #[test]
    fn step_applies_rate_over_delta() {
        let pair = Pair {
            mrna: 20.0,
            protein: 0.0,
        };
        let rate = PairRate {
            d_mrna: -20.0,
            d_protein: 4.0,
        };

        let next = pair.step(rate, 0.5);

        assert_eq!(
            next,
            Pair {
                mrna: 10.0,
                protein: 2.0
            }
        );
    }

    #[test]
    fn chained_steps_sum_their_increments() {
        let pair = Pair {
            mrna: 1.0,
            protein: 2.0,
        };
        let r1 = PairRate {
            d_mrna: 3.0,
            d_protein: -1.0,
        };
        let r2 = PairRate {
            d_mrna: -2.0,
            d_protein: 5.0,
        };

        let chained = pair.step(r1, 0.1).step(r2, 0.3);

        assert_relative_eq!(chained.mrna, 1.0 + 3.0 * 0.1 - 2.0 * 0.3);
        assert_relative_eq!(chained.protein, 2.0 - 1.0 * 0.1 + 5.0 * 0.3);
    }
}
