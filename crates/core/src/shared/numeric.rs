//! NaN-aware helpers.
//!
//! NaN is the "unavailable" sentinel throughout the crate, so it must
//! survive arithmetic rather than be swallowed by `f64::max`/`f64::min`.

use std::cmp::Ordering;

/// Maximum that returns NaN when either operand is NaN.
pub fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

/// Minimum that returns NaN when either operand is NaN.
pub fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

/// Equality that treats two NaNs as the same value.
pub fn same_value(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

/// Descending order with NaN placed after every number.
pub fn cmp_desc_nan_last(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}

/// Ascending order of optional keys with `None` placed last.
pub fn cmp_asc_none_last<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// `numerator / denominator`, NaN for `0 / 0`.
pub fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 && numerator == 0.0 {
        f64::NAN
    } else {
        numerator / denominator
    }
}
