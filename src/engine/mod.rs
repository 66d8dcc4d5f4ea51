//! Core walk engine.
//!
//! - Deterministic RNG (PCG from a master seed)
//! - Lattice positions
//! - Walk simulation to the food boundary

pub mod rng;
pub mod state;
pub mod walk;

pub use rng::SimRng;
pub use state::Position;
pub use walk::{StepCount, WalkSampler, WalkSimulator};
