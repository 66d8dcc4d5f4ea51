//! # forage
//!
//! Monte Carlo estimate of how long a random-walking ant takes to find food.
//!
//! An ant leaves its anthill at the origin and moves one axis-aligned step
//! per second, chosen uniformly at random, until it stands on food: every
//! point on or outside an ellipse around the anthill. Walks are simulated
//! one at a time until a confidence interval for the mean walk length is
//! narrow enough that both bounds round to the same value.
//!
//! - Deterministic: every run is reproducible from its master seed
//! - Pluggable step policies, food regions and interval estimators
//! - Sequential stopping with optional simulation and step budgets
//!
//! ## Example
//!
//! ```rust
//! use forage::prelude::*;
//!
//! let simulator = WalkSimulator::new(AxisStep::default(), EllipseFood::default())?;
//! let mut controller =
//!     SequentialEstimator::new(simulator, NormalInterval, SimRng::new(42));
//!
//! let report = controller.estimate(0.95, 0)?;
//! assert!(report.estimate > 0.0);
//! # Ok::<(), forage::ForageError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::suboptimal_flops,
    clippy::missing_const_for_fn,
)]

pub mod cli;
pub mod config;
pub mod domains;
pub mod engine;
pub mod error;
pub mod estimation;
pub mod logging;
pub mod stats;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{ForageConfig, ForageConfigBuilder};
    pub use crate::domains::food::{BoundaryFn, BoundaryPredicate, EllipseFood, HalfPlaneFood};
    pub use crate::domains::step::{AxisStep, StepFn, StepPolicy};
    pub use crate::engine::rng::SimRng;
    pub use crate::engine::state::Position;
    pub use crate::engine::walk::{StepCount, WalkSampler, WalkSimulator};
    pub use crate::error::{ForageError, ForageResult};
    pub use crate::estimation::{EstimationReport, SequentialEstimator, StoppingRule};
    pub use crate::stats::interval::{
        ConfidenceInterval, EstimatorKind, IntervalEstimator, NormalInterval, StudentTInterval,
    };
}

/// Re-export for public API
pub use error::{ForageError, ForageResult};
