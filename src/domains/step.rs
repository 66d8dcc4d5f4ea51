//! Step policies: how the ant moves from one lattice point to the next.
//!
//! A policy is a pure function of the current position and the random
//! source. It carries no walk state of its own, always returns a position
//! and runs in O(1).

use crate::engine::rng::SimRng;
use crate::engine::state::Position;

/// Rule generating the next position of a walk.
pub trait StepPolicy {
    /// Produce the position after one step from `position`.
    fn next(&self, position: Position, rng: &mut SimRng) -> Position;
}

impl<P: StepPolicy + ?Sized> StepPolicy for &P {
    fn next(&self, position: Position, rng: &mut SimRng) -> Position {
        (**self).next(position, rng)
    }
}

impl<P: StepPolicy + ?Sized> StepPolicy for Box<P> {
    fn next(&self, position: Position, rng: &mut SimRng) -> Position {
        (**self).next(position, rng)
    }
}

/// Uniform step along one of the four axis directions.
///
/// Each of `+x`, `-x`, `+y`, `-y` is chosen with probability 1/4 and moves
/// the ant by `length` units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisStep {
    length: i64,
}

impl AxisStep {
    /// Step length of the reference ant (10 cm per step).
    pub const DEFAULT_LENGTH: i64 = 10;

    /// Create an axis step policy with the given step length.
    #[must_use]
    pub const fn new(length: i64) -> Self {
        Self { length }
    }

    /// Step length.
    #[must_use]
    pub const fn length(&self) -> i64 {
        self.length
    }

    /// The four candidate moves, in draw order.
    #[must_use]
    pub const fn moves(&self) -> [(i64, i64); 4] {
        let m = self.length;
        [(m, 0), (-m, 0), (0, m), (0, -m)]
    }
}

impl Default for AxisStep {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LENGTH)
    }
}

impl StepPolicy for AxisStep {
    fn next(&self, position: Position, rng: &mut SimRng) -> Position {
        let (dx, dy) = self.moves()[rng.gen_index(4)];
        position.offset(dx, dy)
    }
}

/// Closure adapter turning any function into a [`StepPolicy`].
///
/// # Example
///
/// ```rust
/// use forage::domains::step::{StepFn, StepPolicy};
/// use forage::engine::{Position, SimRng};
///
/// // Always walk east.
/// let east = StepFn::new(|p: Position, _rng: &mut SimRng| p.offset(10, 0));
/// let mut rng = SimRng::new(0);
/// assert_eq!(east.next(Position::ORIGIN, &mut rng), Position::new(10, 0));
/// ```
#[derive(Clone)]
pub struct StepFn<F>
where
    F: Fn(Position, &mut SimRng) -> Position,
{
    f: F,
}

impl<F> StepFn<F>
where
    F: Fn(Position, &mut SimRng) -> Position,
{
    /// Wrap a step function.
    pub const fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> std::fmt::Debug for StepFn<F>
where
    F: Fn(Position, &mut SimRng) -> Position,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepFn").finish_non_exhaustive()
    }
}

impl<F> StepPolicy for StepFn<F>
where
    F: Fn(Position, &mut SimRng) -> Position,
{
    #[inline]
    fn next(&self, position: Position, rng: &mut SimRng) -> Position {
        (self.f)(position, rng)
    }
}
