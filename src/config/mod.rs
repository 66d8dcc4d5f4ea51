//! Configuration system with YAML schema and validation.
//!
//! Mistake-proofing happens in three layers:
//! - Type-safe configuration structs with `deny_unknown_fields`
//! - Declarative range checks via `validator`
//! - Semantic validation (confidence level, food region geometry)

use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::domains::food::{BoundaryPredicate, EllipseFood};
use crate::domains::step::AxisStep;
use crate::engine::state::Position;
use crate::error::{ForageError, ForageResult};
use crate::estimation::StoppingRule;
use crate::stats::interval::{validate_confidence_level, EstimatorKind};

/// Largest step length and ellipse extent accepted, in lattice units.
pub const MAX_EXTENT: i64 = 1 << 52;

/// Top-level estimation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ForageConfig {
    /// Schema version for forward compatibility.
    #[validate(length(min = 1))]
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Reproducibility settings.
    #[validate(nested)]
    #[serde(default)]
    pub reproducibility: ReproducibilityConfig,

    /// Confidence level, precision and stopping rule.
    #[validate(nested)]
    #[serde(default)]
    pub estimation: EstimationConfig,

    /// Step policy parameters.
    #[validate(nested)]
    #[serde(default)]
    pub walk: WalkConfig,

    /// Food region geometry.
    #[serde(default)]
    pub food: FoodConfig,

    /// Safety ceilings.
    #[validate(nested)]
    #[serde(default)]
    pub limits: LimitsConfig,
}

fn default_schema_version() -> String {
    "1.0".to_string()
}

impl ForageConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - YAML parsing fails
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> ForageResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> ForageResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.check()?;
        Ok(config)
    }

    /// Serialize to YAML.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_yaml(&self) -> ForageResult<String> {
        serde_yaml::to_string(self).map_err(|e| ForageError::serialization(e.to_string()))
    }

    /// Create a builder for configuration.
    #[must_use]
    pub fn builder() -> ForageConfigBuilder {
        ForageConfigBuilder::default()
    }

    /// Run declarative and semantic validation.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn check(&self) -> ForageResult<()> {
        self.validate()?;
        self.validate_semantic()
    }

    /// Validate semantic constraints beyond schema.
    fn validate_semantic(&self) -> ForageResult<()> {
        validate_confidence_level(self.estimation.confidence_level)?;

        if self.estimation.digits < 0 {
            return Err(ForageError::InvalidDigits {
                digits: self.estimation.digits,
            });
        }

        self.stopping_rule().check()?;

        let (a, b) = self.food.semi_axes;
        if !(a.is_finite() && b.is_finite() && a > 0.0 && b > 0.0) {
            return Err(ForageError::config(format!(
                "Food semi-axes must be positive, got ({a}, {b})"
            )));
        }
        let (cx, cy) = self.food.center;
        if !(cx.is_finite() && cy.is_finite()) {
            return Err(ForageError::config("Food centre must be finite"));
        }

        // Positions before food stay within the ellipse's bounding box, one
        // step beyond it at most, so both bounds keep walks inside i64.
        if self.walk.step_length > MAX_EXTENT {
            return Err(ForageError::config(format!(
                "step_length must be at most {MAX_EXTENT}, got {}",
                self.walk.step_length
            )));
        }
        let limit = MAX_EXTENT as f64;
        if cx.abs() + a > limit || cy.abs() + b > limit {
            return Err(ForageError::config(format!(
                "Food ellipse must lie within {MAX_EXTENT} units of the anthill"
            )));
        }

        if self.food_region().is_satisfied(Position::ORIGIN) {
            return Err(ForageError::OriginInsideFood {
                x: Position::ORIGIN.x,
                y: Position::ORIGIN.y,
            });
        }

        Ok(())
    }

    /// Food region described by this configuration.
    #[must_use]
    pub const fn food_region(&self) -> EllipseFood {
        EllipseFood::new(self.food.center, self.food.semi_axes)
    }

    /// Step policy described by this configuration.
    #[must_use]
    pub const fn step_policy(&self) -> AxisStep {
        AxisStep::new(self.walk.step_length)
    }

    /// Stopping rule described by this configuration.
    #[must_use]
    pub const fn stopping_rule(&self) -> StoppingRule {
        StoppingRule {
            warmup: self.estimation.warmup,
            max_simulations: self.limits.max_simulations,
            max_width: self.estimation.max_width,
        }
    }
}

impl Default for ForageConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            reproducibility: ReproducibilityConfig::default(),
            estimation: EstimationConfig::default(),
            walk: WalkConfig::default(),
            food: FoodConfig::default(),
            limits: LimitsConfig::default(),
        }
    }
}

/// Configuration builder for programmatic construction.
#[derive(Debug, Default)]
pub struct ForageConfigBuilder {
    config: ForageConfig,
}

impl ForageConfigBuilder {
    /// Start from an existing configuration.
    #[must_use]
    pub const fn from_config(config: ForageConfig) -> Self {
        Self { config }
    }

    /// Set the random seed.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.reproducibility.seed = seed;
        self
    }

    /// Set the confidence level.
    #[must_use]
    pub fn confidence_level(mut self, level: f64) -> Self {
        self.config.estimation.confidence_level = level;
        self
    }

    /// Set the rounding precision.
    #[must_use]
    pub fn digits(mut self, digits: i32) -> Self {
        self.config.estimation.digits = digits;
        self
    }

    /// Select the interval estimator.
    #[must_use]
    pub fn estimator(mut self, estimator: EstimatorKind) -> Self {
        self.config.estimation.estimator = estimator;
        self
    }

    /// Override the estimator's warm-up sample size.
    #[must_use]
    pub fn warmup(mut self, warmup: usize) -> Self {
        self.config.estimation.warmup = Some(warmup);
        self
    }

    /// Additionally require the interval to be at most this wide.
    #[must_use]
    pub fn max_width(mut self, width: f64) -> Self {
        self.config.estimation.max_width = Some(width);
        self
    }

    /// Set the step length.
    #[must_use]
    pub fn step_length(mut self, length: i64) -> Self {
        self.config.walk.step_length = length;
        self
    }

    /// Set the food ellipse.
    #[must_use]
    pub fn food(mut self, center: (f64, f64), semi_axes: (f64, f64)) -> Self {
        self.config.food = FoodConfig { center, semi_axes };
        self
    }

    /// Abandon walks longer than this.
    #[must_use]
    pub fn max_steps_per_walk(mut self, max_steps: u64) -> Self {
        self.config.limits.max_steps_per_walk = Some(max_steps);
        self
    }

    /// Give up after this many simulations.
    #[must_use]
    pub fn max_simulations(mut self, max_simulations: u64) -> Self {
        self.config.limits.max_simulations = Some(max_simulations);
        self
    }

    /// Build the configuration without validating it.
    #[must_use]
    pub fn build(self) -> ForageConfig {
        self.config
    }

    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn build_checked(self) -> ForageResult<ForageConfig> {
        self.config.check()?;
        Ok(self.config)
    }
}

/// Reproducibility settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ReproducibilityConfig {
    /// Master seed for all RNG.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

const fn default_seed() -> u64 {
    42
}

impl Default for ReproducibilityConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
        }
    }
}

/// Estimation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct EstimationConfig {
    /// Confidence level in (0, 1).
    #[serde(default = "default_confidence_level")]
    pub confidence_level: f64,
    /// Decimal places both interval bounds must agree on.
    #[serde(default)]
    pub digits: i32,
    /// Interval estimator.
    #[serde(default)]
    pub estimator: EstimatorKind,
    /// Override of the estimator's warm-up sample size.
    #[validate(range(min = 2))]
    #[serde(default)]
    pub warmup: Option<usize>,
    /// Optional cap on the interval width.
    #[serde(default)]
    pub max_width: Option<f64>,
}

const fn default_confidence_level() -> f64 {
    0.999
}

impl Default for EstimationConfig {
    fn default() -> Self {
        Self {
            confidence_level: default_confidence_level(),
            digits: 0,
            estimator: EstimatorKind::Normal,
            warmup: None,
            max_width: None,
        }
    }
}

/// Step policy settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct WalkConfig {
    /// Length of one axis step.
    #[validate(range(min = 1))]
    #[serde(default = "default_step_length")]
    pub step_length: i64,
}

const fn default_step_length() -> i64 {
    AxisStep::DEFAULT_LENGTH
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            step_length: default_step_length(),
        }
    }
}

/// Food ellipse settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FoodConfig {
    /// Ellipse centre `[cx, cy]`.
    #[serde(default = "default_center")]
    pub center: (f64, f64),
    /// Semi-axes `[a, b]`.
    #[serde(default = "default_semi_axes")]
    pub semi_axes: (f64, f64),
}

fn default_center() -> (f64, f64) {
    EllipseFood::default().center
}

fn default_semi_axes() -> (f64, f64) {
    EllipseFood::default().semi_axes
}

impl Default for FoodConfig {
    fn default() -> Self {
        Self {
            center: default_center(),
            semi_axes: default_semi_axes(),
        }
    }
}

/// Safety ceilings; absent means unbounded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct LimitsConfig {
    /// Step ceiling for a single walk.
    #[validate(range(min = 1))]
    #[serde(default)]
    pub max_steps_per_walk: Option<u64>,
    /// Simulation ceiling for a whole run.
    #[validate(range(min = 1))]
    #[serde(default)]
    pub max_simulations: Option<u64>,
}
