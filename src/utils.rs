/// Coefficient/exponent pair that terminates textual input.
pub const SENTINEL: (i32, i32) = (-1, -1);

/// Map a signed exponent onto a coefficient buffer index.
///
/// Negative exponents have no storage slot and map to `None`.
pub const fn exponent_index(exponent: i32) -> Option<usize> {
    if exponent < 0 {
        None
    } else {
        Some(exponent as usize)
    }
}

/// Clamp a signed exponent to a buffer index, sending negatives to 0.
///
/// This is the constructor policy; accessors use [`exponent_index`] instead.
pub const fn clamp_exponent(exponent: i32) -> usize {
    match exponent_index(exponent) {
        Some(index) => index,
        None => 0,
    }
}

/// Check whether a coefficient/exponent pair is the input terminator.
#[inline]
pub const fn is_sentinel(coefficient: i32, exponent: i32) -> bool {
    coefficient == SENTINEL.0 && exponent == SENTINEL.1
}
