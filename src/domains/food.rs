//! Food regions: the boundary predicates that end a walk.
//!
//! A predicate answers "has the ant found food at this position?". It must
//! be pure, total over all lattice positions, and false at the anthill.

use serde::{Deserialize, Serialize};

use crate::engine::state::Position;

/// Membership test for the food region.
pub trait BoundaryPredicate {
    /// Whether `position` is in the food region.
    fn is_satisfied(&self, position: Position) -> bool;
}

impl<B: BoundaryPredicate + ?Sized> BoundaryPredicate for &B {
    fn is_satisfied(&self, position: Position) -> bool {
        (**self).is_satisfied(position)
    }
}

impl<B: BoundaryPredicate + ?Sized> BoundaryPredicate for Box<B> {
    fn is_satisfied(&self, position: Position) -> bool {
        (**self).is_satisfied(position)
    }
}

/// Food everywhere outside an axis-aligned ellipse around the anthill.
///
/// Satisfied when `((x - cx) / a)^2 + ((y - cy) / b)^2 >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EllipseFood {
    /// Ellipse centre `(cx, cy)`.
    pub center: (f64, f64),
    /// Semi-axes `(a, b)` along x and y.
    pub semi_axes: (f64, f64),
}

impl EllipseFood {
    /// Create an ellipse boundary.
    #[must_use]
    pub const fn new(center: (f64, f64), semi_axes: (f64, f64)) -> Self {
        Self { center, semi_axes }
    }

    /// Normalised squared radius of `position`; 1.0 on the ellipse itself.
    #[must_use]
    pub fn level(&self, position: Position) -> f64 {
        let u = (position.x as f64 - self.center.0) / self.semi_axes.0;
        let v = (position.y as f64 - self.center.1) / self.semi_axes.1;
        u * u + v * v
    }
}

impl Default for EllipseFood {
    /// The reference field: centre (2.5, 2.5), semi-axes 30 x 40.
    fn default() -> Self {
        Self::new((2.5, 2.5), (30.0, 40.0))
    }
}

impl BoundaryPredicate for EllipseFood {
    fn is_satisfied(&self, position: Position) -> bool {
        self.level(position) >= 1.0
    }
}

/// Food on and beyond a vertical line: satisfied when `x >= threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HalfPlaneFood {
    /// Smallest x coordinate that counts as food.
    pub threshold: i64,
}

impl HalfPlaneFood {
    /// Create a half-plane boundary.
    #[must_use]
    pub const fn new(threshold: i64) -> Self {
        Self { threshold }
    }
}

impl BoundaryPredicate for HalfPlaneFood {
    fn is_satisfied(&self, position: Position) -> bool {
        position.x >= self.threshold
    }
}

/// Closure adapter turning any function into a [`BoundaryPredicate`].
#[derive(Clone)]
pub struct BoundaryFn<F>
where
    F: Fn(Position) -> bool,
{
    f: F,
}

impl<F> BoundaryFn<F>
where
    F: Fn(Position) -> bool,
{
    /// Wrap a predicate function.
    pub const fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> std::fmt::Debug for BoundaryFn<F>
where
    F: Fn(Position) -> bool,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundaryFn").finish_non_exhaustive()
    }
}

impl<F> BoundaryPredicate for BoundaryFn<F>
where
    F: Fn(Position) -> bool,
{
    #[inline]
    fn is_satisfied(&self, position: Position) -> bool {
        (self.f)(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ellipse_not_satisfied_at_origin() {
        assert!(!EllipseFood::default().is_satisfied(Position::ORIGIN));
    }

    #[test]
    fn test_default_ellipse_boundary_points() {
        let food = EllipseFood::default();
        // Along x the ellipse spans (-27.5, 32.5).
        assert!(!food.is_satisfied(Position::new(30, 0)));
        assert!(food.is_satisfied(Position::new(40, 0)));
        assert!(!food.is_satisfied(Position::new(-20, 0)));
        assert!(food.is_satisfied(Position::new(-30, 0)));
        // Along y it spans (-37.5, 42.5).
        assert!(!food.is_satisfied(Position::new(0, 40)));
        assert!(food.is_satisfied(Position::new(0, 50)));
        assert!(food.is_satisfied(Position::new(0, -40)));
    }

    #[test]
    fn test_ellipse_on_boundary_counts_as_food() {
        let food = EllipseFood::new((0.0, 0.0), (10.0, 20.0));
        assert!((food.level(Position::new(10, 0)) - 1.0).abs() < f64::EPSILON);
        assert!(food.is_satisfied(Position::new(10, 0)));
        assert!(food.is_satisfied(Position::new(0, -20)));
        assert!(!food.is_satisfied(Position::new(9, 0)));
    }

    #[test]
    fn test_half_plane() {
        let food = HalfPlaneFood::new(20);
        assert!(!food.is_satisfied(Position::ORIGIN));
        assert!(!food.is_satisfied(Position::new(19, 1000)));
        assert!(food.is_satisfied(Position::new(20, -5)));
    }

    #[test]
    fn test_boundary_fn_and_boxed() {
        let circle = BoundaryFn::new(|p: Position| p.x * p.x + p.y * p.y >= 100);
        assert!(!circle.is_satisfied(Position::new(6, 7)));
        assert!(circle.is_satisfied(Position::new(6, 8)));

        let boxed: Box<dyn BoundaryPredicate> = Box::new(HalfPlaneFood::new(1));
        assert!(boxed.is_satisfied(Position::new(1, 0)));
        assert!(format!("{circle:?}").contains("BoundaryFn"));
    }
}
