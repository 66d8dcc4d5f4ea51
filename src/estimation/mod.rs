//! Sequential estimation of the mean steps to food.
//!
//! The controller runs walks one at a time and folds each step count into
//! the sample. Once the sample exceeds the warm-up size it recomputes the
//! confidence interval after every walk, and stops as soon as both bounds
//! round to the same value at the requested number of decimal places.
//!
//! ```text
//! while runs <= warmup || round(low, d) != round(high, d):
//!     runs += 1
//!     sample.push(walk())
//!     if runs > warmup:
//!         (low, high) = interval(sample, level)
//! report round(low, d)
//! ```

pub mod report;

pub use report::EstimationReport;

use crate::config::ForageConfig;
use crate::engine::rng::SimRng;
use crate::engine::walk::{StepCount, WalkSampler, WalkSimulator};
use crate::error::{ForageError, ForageResult};
use crate::stats::interval::{validate_confidence_level, ConfidenceInterval, IntervalEstimator};
use crate::stats::moments::RunningMoments;
use crate::stats::rounding::round_half_even;

/// Knobs on top of the reference stopping rule. All default to off.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StoppingRule {
    /// Warm-up override; `None` uses the estimator's own warm-up.
    pub warmup: Option<usize>,
    /// Give up with [`ForageError::NonConvergence`] after this many walks.
    pub max_simulations: Option<u64>,
    /// Also require `high - low <= max_width` to stop.
    pub max_width: Option<f64>,
}

impl StoppingRule {
    /// Check the rule's knobs.
    ///
    /// # Errors
    ///
    /// Returns [`ForageError::Config`] if `max_width` is not a positive
    /// finite number; such a cap could never be met.
    pub fn check(&self) -> ForageResult<()> {
        match self.max_width {
            Some(width) if !(width.is_finite() && width > 0.0) => Err(ForageError::config(
                format!("max_width must be a positive number, got {width}"),
            )),
            _ => Ok(()),
        }
    }
}

/// Counters of one estimation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoppingState {
    /// Walks simulated so far.
    pub simulations_run: u64,
    /// Latest interval; the sentinel until warm-up is over.
    pub interval: ConfidenceInterval,
}

impl StoppingState {
    /// Fresh state: no walks, sentinel interval.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            simulations_run: 0,
            interval: ConfidenceInterval::SENTINEL,
        }
    }

    /// Whether sampling may stop.
    #[must_use]
    pub fn is_converged(&self, warmup: usize, digits: u32, max_width: Option<f64>) -> bool {
        if self.simulations_run <= warmup as u64 {
            return false;
        }
        let low = round_half_even(self.interval.low, digits);
        let high = round_half_even(self.interval.high, digits);
        #[allow(clippy::float_cmp)]
        let agree = low == high;
        agree && max_width.map_or(true, |w| self.interval.width() <= w)
    }
}

impl Default for StoppingState {
    fn default() -> Self {
        Self::new()
    }
}

/// Controller of the sequential stopping rule.
#[derive(Debug)]
pub struct SequentialEstimator<S, E> {
    sampler: S,
    estimator: E,
    rng: SimRng,
    rule: StoppingRule,
}

impl<S, E> SequentialEstimator<S, E>
where
    S: WalkSampler,
    E: IntervalEstimator,
{
    /// Create a controller drawing walks from `sampler`.
    #[must_use]
    pub fn new(sampler: S, estimator: E, rng: SimRng) -> Self {
        Self {
            sampler,
            estimator,
            rng,
            rule: StoppingRule::default(),
        }
    }

    /// Replace the stopping rule.
    #[must_use]
    pub fn with_rule(mut self, rule: StoppingRule) -> Self {
        self.rule = rule;
        self
    }

    /// Sample size that must be exceeded before intervals are computed.
    #[must_use]
    pub fn warmup(&self) -> usize {
        self.rule.warmup.unwrap_or_else(|| self.estimator.warmup())
    }

    /// Stopping rule in force.
    #[must_use]
    pub const fn rule(&self) -> &StoppingRule {
        &self.rule
    }

    /// Estimate the mean steps to food.
    ///
    /// # Errors
    ///
    /// - [`ForageError::InvalidConfidenceLevel`] if `confidence_level` is not
    ///   in (0, 1), [`ForageError::InvalidDigits`] if `digits < 0` and
    ///   [`ForageError::Config`] for an unusable `max_width`, all before any
    ///   walk is simulated
    /// - [`ForageError::NonConvergence`] if the simulation budget runs out
    /// - any error raised by the sampler or the estimator
    pub fn estimate(&mut self, confidence_level: f64, digits: i32) -> ForageResult<EstimationReport> {
        validate_confidence_level(confidence_level)?;
        let digits = u32::try_from(digits).map_err(|_| ForageError::InvalidDigits { digits })?;
        self.rule.check()?;

        let warmup = self.warmup();
        let mut state = StoppingState::new();
        let mut sample: Vec<StepCount> = Vec::new();
        let mut moments = RunningMoments::new();

        tracing::debug!(
            estimator = self.estimator.name(),
            warmup,
            confidence_level,
            digits,
            seed = self.rng.master_seed(),
            "starting estimation"
        );

        while !state.is_converged(warmup, digits, self.rule.max_width) {
            if let Some(limit) = self.rule.max_simulations {
                if state.simulations_run >= limit {
                    tracing::warn!(
                        simulations = state.simulations_run,
                        low = state.interval.low,
                        high = state.interval.high,
                        "simulation budget exhausted"
                    );
                    return Err(ForageError::NonConvergence {
                        simulations: state.simulations_run,
                        low: state.interval.low,
                        high: state.interval.high,
                    });
                }
            }

            state.simulations_run += 1;
            let steps = self.sampler.sample(&mut self.rng)?;
            sample.push(steps);
            moments.push(steps as f64);

            if state.simulations_run > warmup as u64 {
                state.interval = self.estimator.estimate(&sample, confidence_level)?;
                tracing::trace!(
                    simulations = state.simulations_run,
                    low = state.interval.low,
                    high = state.interval.high,
                    "interval recomputed"
                );
            }
        }

        let estimate = round_half_even(state.interval.low, digits);
        tracing::info!(
            simulations = state.simulations_run,
            estimate,
            low = state.interval.low,
            high = state.interval.high,
            "estimation converged"
        );

        Ok(EstimationReport {
            estimate,
            interval: state.interval,
            confidence_level,
            digits,
            simulations: state.simulations_run,
            sample_mean: moments.mean(),
            sample_std_dev: moments.std_dev(),
            estimator: self.estimator.name().to_string(),
            seed: self.rng.master_seed(),
        })
    }
}

/// Run a full estimation as described by `config`.
///
/// # Errors
///
/// Returns error if the configuration is invalid or the run fails.
pub fn run(config: &ForageConfig) -> ForageResult<EstimationReport> {
    config.check()?;

    let mut simulator = WalkSimulator::new(config.step_policy(), config.food_region())?;
    if let Some(max_steps) = config.limits.max_steps_per_walk {
        simulator = simulator.with_max_steps(max_steps);
    }

    let rng = SimRng::new(config.reproducibility.seed);
    SequentialEstimator::new(simulator, config.estimation.estimator, rng)
        .with_rule(config.stopping_rule())
        .estimate(config.estimation.confidence_level, config.estimation.digits)
}
