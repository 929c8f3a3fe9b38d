//! Floating-point tolerant ordering
//!
//! Every ordering comparison in the crate goes through [`less`], so a value
//! sitting on a boundary classifies the same way in bounds checks, extents
//! validation and hull operations.

/// Tolerance used by [`approx_eq`]; relative above magnitude 1, absolute below.
pub const EPSILON: f64 = 1e-12;

/// True if `a` and `b` are equal within [`EPSILON`]
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    if a == b {
        return true;
    }
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= EPSILON * scale
}

/// Strict less-than that treats approximately equal values as not less
#[inline]
pub fn less(a: f64, b: f64) -> bool {
    a < b && !approx_eq(a, b)
}

/// Tolerant component-wise minimum
#[inline]
pub fn min(a: f64, b: f64) -> f64 {
    if less(b, a) { b } else { a }
}

/// Tolerant component-wise maximum
#[inline]
pub fn max(a: f64, b: f64) -> f64 {
    if less(a, b) { b } else { a }
}
