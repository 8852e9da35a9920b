//! Model constants from Elowitz & Leibler (2000).

/// Maximal transcription rate of an unrepressed promoter.
pub const ALPHA: f64 = 216.4;

/// Leaky transcription rate of a fully repressed promoter.
pub const ALPHA0: f64 = 0.2164;

/// Hill coefficient of repression.
pub const HILL: f64 = 2.0;

/// Ratio of protein decay rate to mRNA decay rate.
pub const BETA: f64 = 0.2;

/// Kinetic parameters shared by the three genes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub alpha: f64,
    pub alpha0: f64,
    pub hill: f64,
    pub beta: f64,
}

impl Parameters {
    /// The published oscillating parameter set.
    pub const ELOWITZ: Parameters = Parameters {
        alpha: ALPHA,
        alpha0: ALPHA0,
        hill: HILL,
        beta: BETA,
    };
}

impl Default for Parameters {
    fn default() -> Self {
        Self::ELOWITZ
    }
}
