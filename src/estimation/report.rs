//! Outcome of an estimation run.

use serde::{Deserialize, Serialize};

use crate::error::{ForageError, ForageResult};
use crate::stats::interval::ConfidenceInterval;

/// Result of a converged estimation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimationReport {
    /// Mean steps to food, rounded to `digits` decimal places.
    pub estimate: f64,
    /// Final confidence interval (unrounded).
    pub interval: ConfidenceInterval,
    /// Confidence level of the interval.
    pub confidence_level: f64,
    /// Decimal places the bounds agreed on.
    pub digits: u32,
    /// Walks simulated.
    pub simulations: u64,
    /// Mean of the full sample.
    pub sample_mean: f64,
    /// Standard deviation of the full sample.
    pub sample_std_dev: f64,
    /// Interval estimator used.
    pub estimator: String,
    /// Master seed of the run.
    pub seed: u64,
}

impl EstimationReport {
    /// Confidence level as a percentage.
    #[must_use]
    pub fn confidence_percent(&self) -> f64 {
        self.confidence_level * 100.0
    }

    /// Estimate formatted with exactly `digits` decimal places.
    #[must_use]
    pub fn formatted_estimate(&self) -> String {
        format!("{:.*}", self.digits as usize, self.estimate)
    }

    /// Serialize to pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_json(&self) -> ForageResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ForageError::serialization(e.to_string()))
    }
}
