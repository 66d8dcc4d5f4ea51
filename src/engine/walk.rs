//! Walk simulation.
//!
//! A walk starts at the anthill and applies a [`StepPolicy`] until the
//! [`BoundaryPredicate`] holds. Its outcome is the number of steps taken.

use crate::domains::food::BoundaryPredicate;
use crate::domains::step::StepPolicy;
use crate::engine::rng::SimRng;
use crate::engine::state::Position;
use crate::error::{ForageError, ForageResult};

/// Number of steps a walk needed to first reach food.
pub type StepCount = u64;

/// Source of independent walk outcomes.
///
/// The sequential estimator only needs step counts, so anything that can
/// produce them (a simulator, a replayed trace, a test stub) can drive it.
pub trait WalkSampler {
    /// Produce the step count of one walk.
    ///
    /// # Errors
    ///
    /// Returns an error if the walk cannot be completed.
    fn sample(&mut self, rng: &mut SimRng) -> ForageResult<StepCount>;
}

impl<S: WalkSampler + ?Sized> WalkSampler for &mut S {
    fn sample(&mut self, rng: &mut SimRng) -> ForageResult<StepCount> {
        (**self).sample(rng)
    }
}

/// Simulates walks from the origin until the food predicate is satisfied.
#[derive(Debug, Clone)]
pub struct WalkSimulator<P, B> {
    policy: P,
    food: B,
    max_steps: Option<u64>,
}

impl<P, B> WalkSimulator<P, B>
where
    P: StepPolicy,
    B: BoundaryPredicate,
{
    /// Create a simulator.
    ///
    /// # Errors
    ///
    /// Returns [`ForageError::OriginInsideFood`] if the food predicate is
    /// already satisfied at the origin.
    pub fn new(policy: P, food: B) -> ForageResult<Self> {
        if food.is_satisfied(Position::ORIGIN) {
            return Err(ForageError::OriginInsideFood {
                x: Position::ORIGIN.x,
                y: Position::ORIGIN.y,
            });
        }
        Ok(Self {
            policy,
            food,
            max_steps: None,
        })
    }

    /// Abandon walks that have not found food after `max_steps` steps.
    #[must_use]
    pub const fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    /// Configured step ceiling, if any.
    #[must_use]
    pub const fn max_steps(&self) -> Option<u64> {
        self.max_steps
    }

    /// Run one walk and return its step count.
    ///
    /// # Errors
    ///
    /// Returns [`ForageError::NonTermination`] if a step ceiling is set and
    /// the walk reaches it without finding food.
    pub fn run(&self, rng: &mut SimRng) -> ForageResult<StepCount> {
        let mut position = Position::ORIGIN;
        let mut steps: StepCount = 0;

        while !self.food.is_satisfied(position) {
            if let Some(ceiling) = self.max_steps {
                if steps >= ceiling {
                    return Err(ForageError::NonTermination { steps, ceiling });
                }
            }
            steps += 1;
            position = self.policy.next(position, rng);
        }

        Ok(steps)
    }
}

impl<P, B> WalkSampler for WalkSimulator<P, B>
where
    P: StepPolicy,
    B: BoundaryPredicate,
{
    fn sample(&mut self, rng: &mut SimRng) -> ForageResult<StepCount> {
        self.run(rng)
    }
}
