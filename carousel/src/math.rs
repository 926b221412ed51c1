//! Float rounding that also works without `std`.

pub(crate) fn floor(x: f64) -> f64 {
    let t = x as i64 as f64;
    if t > x { t - 1.0 } else { t }
}

pub(crate) fn ceil(x: f64) -> f64 {
    let t = x as i64 as f64;
    if t < x { t + 1.0 } else { t }
}

/// Converts a non-negative float index to `usize`, rounding down. Negative and NaN map to 0.
pub(crate) fn floor_index(x: f64) -> usize {
    if x.is_nan() || x <= 0.0 {
        return 0;
    }
    floor(x) as usize
}

pub(crate) fn ceil_index(x: f64) -> usize {
    if x.is_nan() || x <= 0.0 {
        return 0;
    }
    ceil(x) as usize
}

pub(crate) fn abs(x: f64) -> f64 {
    if x < 0.0 { -x } else { x }
}

/// `items_to_show` as a slot count: values below 1 (and NaN) count as one slot.
pub(crate) fn slots(items_to_show: f64) -> f64 {
    items_to_show.max(1.0)
}
