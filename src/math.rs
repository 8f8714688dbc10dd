use crate::Position;
use core::cmp::Ordering;

/// The number of whole unit steps between two coordinates, truncated toward zero.
///
/// Non-finite deltas yield zero steps.
#[inline(always)]
pub fn steps(a: f64, b: f64) -> usize {
    (a - b).abs() as usize
}

/// The interpolation factor of step `i` out of `steps`, or `0.0` when there is nothing to step across.
#[inline(always)]
pub fn fraction(i: usize, steps: usize) -> f64 {
    if steps == 0 {
        0.0
    } else {
        i as f64 / steps as f64
    }
}

/// The orientation of the turn `a -> b -> c`: the sign of the cross product of `b - a` and `c - a`.
///
/// The result is exact for every pair of `usize` coordinates. It is `Equal` if and only if the three points are
/// collinear (or coincident), which for integer points is equivalent to the failure of the strict triangle inequality
/// on their pairwise distances.
pub fn orientation(a: Position, b: Position, c: Position) -> Ordering {
    let delta = |p: usize, q: usize| p as i128 - q as i128;
    let lhs = wide_mul(delta(b.x, a.x), delta(c.y, a.y));
    let rhs = wide_mul(delta(b.y, a.y), delta(c.x, a.x));
    match (lhs, rhs) {
        ((false, l), (false, r)) => l.cmp(&r),
        ((true, l), (true, r)) => r.cmp(&l),
        ((false, _), (true, _)) => Ordering::Greater,
        ((true, _), (false, _)) => Ordering::Less,
    }
}

/// Multiply two coordinate deltas into a sign and a magnitude. Deltas of `usize` coordinates are below `2^64` in
/// magnitude, so the product always fits in a `u128`.
fn wide_mul(p: i128, q: i128) -> (bool, u128) {
    let magnitude = p.unsigned_abs() * q.unsigned_abs();
    ((p < 0) != (q < 0) && magnitude != 0, magnitude)
}

/// The Euclidean distance between two pixel positions.
#[inline]
pub fn distance(a: Position, b: Position) -> f64 {
    a.to_vec2().distance(b.to_vec2())
}
