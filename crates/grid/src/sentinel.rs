//! The "no data" sentinel convention.

/// Value written into every missing cell.
pub const FILL_VALUE: f64 = -1.0e30;

/// Any value at or beyond this magnitude is treated as missing.
const FILL_MAGNITUDE: f64 = 1.0e30;

/// Returns `true` if `value` is NaN or at/beyond the sentinel magnitude.
///
/// The magnitude test (rather than equality) also catches sentinels that
/// went through an `f32` round trip.
pub fn is_fill(value: f64) -> bool {
    value.is_nan() || value.abs() >= FILL_MAGNITUDE
}

/// Replace sentinel values with NaN, leaving valid values untouched.
pub fn fill_to_nan(value: f64) -> f64 {
    if is_fill(value) { f64::NAN } else { value }
}
