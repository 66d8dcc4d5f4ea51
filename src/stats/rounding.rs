//! Decimal rounding for the convergence test.

/// Round `value` to `digits` decimal places, ties to even.
///
/// Digit counts whose scale factor exceeds f64 precision leave the value
/// unchanged; so do non-finite values.
///
/// # Example
///
/// ```rust
/// use forage::stats::round_half_even;
///
/// assert_eq!(round_half_even(2.5, 0), 2.0);
/// assert_eq!(round_half_even(3.5, 0), 4.0);
/// assert_eq!(round_half_even(1.236, 2), 1.24);
/// ```
#[must_use]
pub fn round_half_even(value: f64, digits: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let Ok(exp) = i32::try_from(digits) else {
        return value;
    };
    let scale = 10f64.powi(exp);
    let scaled = value * scale;
    if !scale.is_finite() || !scaled.is_finite() || scaled.abs() >= 2f64.powi(52) {
        return value;
    }
    scaled.round_ties_even() / scale
}
