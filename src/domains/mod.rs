//! Pluggable walk policies.
//!
//! - Step: how the ant moves from one lattice point to the next
//! - Food: the boundary predicate that ends a walk

pub mod food;
pub mod step;

pub use food::{BoundaryFn, BoundaryPredicate, EllipseFood, HalfPlaneFood};
pub use step::{AxisStep, StepFn, StepPolicy};
