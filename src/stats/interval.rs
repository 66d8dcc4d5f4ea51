//! Confidence intervals for the mean walk length.
//!
//! Estimators treat the sample as i.i.d. and return
//! `mean ± q * standard_error`, where `q` is the two-sided quantile of the
//! reference distribution at the requested confidence level. The interval
//! is always recomputed from the whole sample.

use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal, StudentsT};

use crate::engine::walk::StepCount;
use crate::error::{ForageError, ForageResult};
use crate::stats::moments::RunningMoments;

/// Smallest sample with a defined variance.
pub const MIN_SAMPLE: usize = 2;

/// Closed interval `[low, high]` with `low <= high`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    /// Lower bound.
    pub low: f64,
    /// Upper bound.
    pub high: f64,
}

impl ConfidenceInterval {
    /// Degenerate `[0, 0]` interval used before the first estimate.
    pub const SENTINEL: Self = Self { low: 0.0, high: 0.0 };

    /// Interval centred on `mean` with the given half-width.
    #[must_use]
    pub fn around(mean: f64, half_width: f64) -> Self {
        let half_width = half_width.abs();
        Self {
            low: mean - half_width,
            high: mean + half_width,
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.high - self.low
    }
}

impl Default for ConfidenceInterval {
    fn default() -> Self {
        Self::SENTINEL
    }
}

/// Check that a confidence level lies strictly between 0 and 1.
///
/// # Errors
///
/// Returns [`ForageError::InvalidConfidenceLevel`] otherwise (NaN included).
pub fn validate_confidence_level(level: f64) -> ForageResult<()> {
    if level > 0.0 && level < 1.0 {
        Ok(())
    } else {
        Err(ForageError::InvalidConfidenceLevel { level })
    }
}

/// Estimator of a confidence interval for the mean of a sample.
pub trait IntervalEstimator {
    /// Short name for reports and logs.
    fn name(&self) -> &'static str;

    /// Sample size below which this estimator should not be consulted.
    fn warmup(&self) -> usize;

    /// Interval for the mean of `sample` at `confidence_level`.
    ///
    /// # Errors
    ///
    /// Returns [`ForageError::InsufficientSample`] for fewer than
    /// [`MIN_SAMPLE`] values and [`ForageError::InvalidConfidenceLevel`] for
    /// a level outside (0, 1).
    fn estimate(
        &self,
        sample: &[StepCount],
        confidence_level: f64,
    ) -> ForageResult<ConfidenceInterval>;
}

impl<E: IntervalEstimator + ?Sized> IntervalEstimator for &E {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn warmup(&self) -> usize {
        (**self).warmup()
    }

    fn estimate(
        &self,
        sample: &[StepCount],
        confidence_level: f64,
    ) -> ForageResult<ConfidenceInterval> {
        (**self).estimate(sample, confidence_level)
    }
}

fn sample_moments(sample: &[StepCount], confidence_level: f64) -> ForageResult<RunningMoments> {
    if sample.len() < MIN_SAMPLE {
        return Err(ForageError::InsufficientSample {
            size: sample.len(),
            required: MIN_SAMPLE,
        });
    }
    validate_confidence_level(confidence_level)?;

    let mut moments = RunningMoments::new();
    for &steps in sample {
        moments.push(steps as f64);
    }
    Ok(moments)
}

/// Upper quantile leaving `(1 - level) / 2` in each tail.
fn two_sided_quantile<D: ContinuousCDF<f64, f64>>(dist: &D, level: f64) -> f64 {
    dist.inverse_cdf((1.0 + level) / 2.0)
}

/// Normal-approximation interval.
///
/// Relies on the central limit theorem, so it is only trusted from 30
/// observations on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalInterval;

impl NormalInterval {
    /// Sample size from which the normal approximation is trusted.
    pub const WARMUP: usize = 30;
}

impl IntervalEstimator for NormalInterval {
    fn name(&self) -> &'static str {
        "normal"
    }

    fn warmup(&self) -> usize {
        Self::WARMUP
    }

    fn estimate(
        &self,
        sample: &[StepCount],
        confidence_level: f64,
    ) -> ForageResult<ConfidenceInterval> {
        let moments = sample_moments(sample, confidence_level)?;
        let normal = Normal::new(0.0, 1.0)
            .map_err(|e| ForageError::statistics(format!("standard normal: {e}")))?;
        let z = two_sided_quantile(&normal, confidence_level);
        Ok(ConfidenceInterval::around(
            moments.mean(),
            z * moments.std_error(),
        ))
    }
}

/// Student-t interval with `n - 1` degrees of freedom.
///
/// Exact for normally distributed data at any size, so it can be consulted
/// from the smallest sample with a variance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StudentTInterval;

impl IntervalEstimator for StudentTInterval {
    fn name(&self) -> &'static str {
        "student-t"
    }

    fn warmup(&self) -> usize {
        MIN_SAMPLE
    }

    fn estimate(
        &self,
        sample: &[StepCount],
        confidence_level: f64,
    ) -> ForageResult<ConfidenceInterval> {
        let moments = sample_moments(sample, confidence_level)?;
        let freedom = (moments.count() - 1) as f64;
        let t = StudentsT::new(0.0, 1.0, freedom)
            .map_err(|e| ForageError::statistics(format!("student-t({freedom}): {e}")))?;
        let q = two_sided_quantile(&t, confidence_level);
        Ok(ConfidenceInterval::around(
            moments.mean(),
            q * moments.std_error(),
        ))
    }
}

/// Estimator selectable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EstimatorKind {
    /// [`NormalInterval`].
    #[default]
    Normal,
    /// [`StudentTInterval`].
    StudentT,
}

impl EstimatorKind {
    /// Parse a command-line name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "normal" | "z" => Some(Self::Normal),
            "student-t" | "student_t" | "t" => Some(Self::StudentT),
            _ => None,
        }
    }
}

impl IntervalEstimator for EstimatorKind {
    fn name(&self) -> &'static str {
        match self {
            Self::Normal => NormalInterval.name(),
            Self::StudentT => StudentTInterval.name(),
        }
    }

    fn warmup(&self) -> usize {
        match self {
            Self::Normal => NormalInterval.warmup(),
            Self::StudentT => StudentTInterval.warmup(),
        }
    }

    fn estimate(
        &self,
        sample: &[StepCount],
        confidence_level: f64,
    ) -> ForageResult<ConfidenceInterval> {
        match self {
            Self::Normal => NormalInterval.estimate(sample, confidence_level),
            Self::StudentT => StudentTInterval.estimate(sample, confidence_level),
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_low_not_above_high(
            sample in prop::collection::vec(0u64..5_000, 2..300),
            level in 0.01f64..0.9999,
        ) {
            let ci = NormalInterval.estimate(&sample, level);
            prop_assert!(ci.is_ok());
            if let Ok(ci) = ci {
                prop_assert!(ci.low <= ci.high);
                prop_assert!(ci.low.is_finite() && ci.high.is_finite());
            }
        }

        #[test]
        fn prop_permutation_invariant(
            mut sample in prop::collection::vec(0u64..5_000, 2..100),
            level in 0.5f64..0.999,
        ) {
            let a = NormalInterval.estimate(&sample, level);
            sample.reverse();
            let b = NormalInterval.estimate(&sample, level);
            prop_assert!(a.is_ok() && b.is_ok());
            if let (Ok(a), Ok(b)) = (a, b) {
                prop_assert!((a.low - b.low).abs() < 1e-6);
                prop_assert!((a.high - b.high).abs() < 1e-6);
            }
        }
    }
}
