//! Walk state.
//!
//! A walk's only state is the agent's lattice position. Positions are plain
//! `Copy` values: stepping produces a new position and never mutates one in
//! place.

use serde::{Deserialize, Serialize};

/// Lattice position in arbitrary spatial units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    /// X coordinate.
    pub x: i64,
    /// Y coordinate.
    pub y: i64,
}

impl Position {
    /// The anthill every walk starts from.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Create a new position.
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Position shifted by `(dx, dy)`, clamped to the `i64` lattice.
    #[must_use]
    pub const fn offset(self, dx: i64, dy: i64) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
