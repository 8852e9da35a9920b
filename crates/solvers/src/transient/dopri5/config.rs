use thiserror::Error;

/// Default absolute tolerance for the local error estimate.
pub const DEFAULT_ABS_TOL: f64 = 1e-6;

/// Default relative tolerance for the local error estimate.
pub const DEFAULT_REL_TOL: f64 = 1e-6;

/// Default limit on attempted steps (accepted plus rejected).
pub const DEFAULT_MAX_STEPS: usize = 100_000;

/// Configuration for the Dormand–Prince solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    interval: f64,
    abs_tol: f64,
    rel_tol: f64,
    max_steps: usize,
}

/// Errors that can occur when validating a Dormand–Prince solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("interval must be finite and positive")]
    Interval,

    #[error("abs_tol must be finite and non-negative")]
    AbsTol,

    #[error("rel_tol must be finite and non-negative")]
    RelTol,

    #[error("abs_tol and rel_tol cannot both be zero")]
    ZeroTolerance,
}

impl Config {
    /// Creates a new config with validated sampling interval and tolerances.
    ///
    /// The interval sets both the cadence at which the trajectory is reported
    /// and the size of the first trial step.
    ///
    /// # Errors
    ///
    /// Returns an error if the interval is not finite and positive, if either
    /// tolerance is negative or non-finite, or if both tolerances are zero.
    pub fn new(
        interval: f64,
        abs_tol: f64,
        rel_tol: f64,
        max_steps: usize,
    ) -> Result<Self, ConfigError> {
        if !interval.is_finite() || interval <= 0.0 {
            return Err(ConfigError::Interval);
        }
        if !abs_tol.is_finite() || abs_tol < 0.0 {
            return Err(ConfigError::AbsTol);
        }
        if !rel_tol.is_finite() || rel_tol < 0.0 {
            return Err(ConfigError::RelTol);
        }
        if abs_tol == 0.0 && rel_tol == 0.0 {
            return Err(ConfigError::ZeroTolerance);
        }

        Ok(Self {
            interval,
            abs_tol,
            rel_tol,
            max_steps,
        })
    }

    /// Creates a config with the given interval and default tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if the interval is not finite and positive.
    pub fn with_interval(interval: f64) -> Result<Self, ConfigError> {
        Self::new(interval, DEFAULT_ABS_TOL, DEFAULT_REL_TOL, DEFAULT_MAX_STEPS)
    }

    /// Returns the sampling interval.
    #[must_use]
    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// Returns the absolute tolerance.
    #[must_use]
    pub fn abs_tol(&self) -> f64 {
        self.abs_tol
    }

    /// Returns the relative tolerance.
    #[must_use]
    pub fn rel_tol(&self) -> f64 {
        self.rel_tol
    }

    /// Returns the maximum number of attempted steps.
    #[must_use]
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }
}
