use rand::Rng;

/// Euclidean distance between `(x1, y1)` and `(x2, y2)`.
pub fn dist(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    (x1 - x2).hypot(y1 - y2)
}

/// Degrees to radians.
pub fn rad(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Linearly remap `value` from `[low1, high1]` into `[low2, high2]`.
///
/// A degenerate input range (`low1 == high1`) maps to the middle of the output range.
pub fn map_range(value: f64, low1: f64, high1: f64, low2: f64, high2: f64) -> f64 {
    let span = high1 - low1;
    if span == 0.0 {
        return (low2 + high2) / 2.0;
    }
    low2 + ((high2 - low2) * (value - low1)) / span
}

/// Fold `number` into `(.., range]` by repeated subtraction, giving up after `max_iter`
/// subtractions and returning `fallback` instead.
pub fn value_to_max_range(mut number: f64, range: f64, max_iter: usize, fallback: f64) -> f64 {
    let mut iter = 0usize;
    while number > range {
        number -= range;
        iter += 1;
        if iter >= max_iter {
            return fallback;
        }
    }
    number
}

/// Uniform integer in `[ceil(min), floor(max)]`, returned as `f64`.
///
/// An empty interval yields `ceil(min)`.
pub fn random_int<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    let lo = min.ceil() as i64;
    let hi = max.floor() as i64;
    if lo >= hi {
        return lo as f64;
    }
    rng.random_range(lo..=hi) as f64
}

/// Fair coin flip.
pub fn coin<R: Rng>(rng: &mut R) -> bool {
    rng.random_bool(0.5)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
