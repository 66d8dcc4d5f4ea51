//! Sample statistics for the stopping rule.
//!
//! - [`moments`]: Welford running mean and variance
//! - [`interval`]: confidence-interval estimators for the mean
//! - [`rounding`]: decimal rounding used by the convergence test

pub mod interval;
pub mod moments;
pub mod rounding;

pub use interval::{
    validate_confidence_level, ConfidenceInterval, EstimatorKind, IntervalEstimator,
    NormalInterval, StudentTInterval, MIN_SAMPLE,
};
pub use moments::RunningMoments;
pub use rounding::round_half_even;
