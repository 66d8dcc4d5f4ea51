//! Streaming moments.

use serde::{Deserialize, Serialize};

/// Online mean/variance accumulator (Welford).
///
/// Tracks mean and unbiased sample variance without summing squares, so
/// large samples of large step counts do not lose precision to
/// cancellation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RunningMoments {
    n: u64,
    mean: f64,
    m2: f64,
}

impl RunningMoments {
    /// Empty accumulator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            n: 0,
            mean: 0.0,
            m2: 0.0,
        }
    }

    /// Accumulate every value of a slice.
    #[must_use]
    pub fn from_slice(values: &[f64]) -> Self {
        let mut moments = Self::new();
        for &x in values {
            moments.push(x);
        }
        moments
    }

    #[inline]
    pub fn push(&mut self, x: f64) {
        self.n += 1;
        let delta = x - self.mean;
        self.mean += delta / self.n as f64;
        self.m2 += delta * (x - self.mean);
    }

    #[inline]
    #[must_use]
    pub const fn count(&self) -> u64 {
        self.n
    }

    #[inline]
    #[must_use]
    pub const fn mean(&self) -> f64 {
        self.mean
    }

    /// Unbiased sample variance; 0 if n < 2.
    #[inline]
    #[must_use]
    pub fn variance(&self) -> f64 {
        if self.n > 1 {
            // Rounding can leave m2 a hair below zero for constant input.
            (self.m2 / (self.n - 1) as f64).max(0.0)
        } else {
            0.0
        }
    }

    #[inline]
    #[must_use]
    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Standard error of the mean; 0 if n < 2.
    #[must_use]
    pub fn std_error(&self) -> f64 {
        if self.n > 1 {
            (self.variance() / self.n as f64).sqrt()
        } else {
            0.0
        }
    }
}
