//! Magnitude-dependent precision normalization.
//!
//! Raw floating-point comparison is unreliable for nearly-equal price values
//! (derived averages carry rounding noise), so comparisons are done on values
//! rounded to a precision chosen by the value's own magnitude: larger values
//! get a coarser tolerance.

/// Number of decimal places considered relevant for a value of this
/// magnitude (4 is pretty much ideal for small dollar amounts).
///
/// The magnitude is the character count of the value rounded to the nearest
/// whole number, so a minus sign counts toward it.
pub fn decimal_places(value: f64) -> i32 {
    let mut rounded = value.round();
    if rounded == 0.0 {
        // collapse -0.0 so it counts as a single character
        rounded = 0.0;
    }
    match format!("{rounded:.0}").len() {
        0 | 1 => 4,
        2 => 3,
        3 => 2,
        4 => 1,
        _ => 0,
    }
}

/// Round `value` to its magnitude-dependent precision.
///
/// Used only for comparisons; normalized values are never stored back into a
/// series. Rounding is half-away-from-zero.
pub fn normalize(value: f64) -> f64 {
    let factor = 10f64.powi(decimal_places(value));
    (value * factor).round() / factor
}
