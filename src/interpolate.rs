use crate::{Error, Result};
use vek::{Rgb, Vec2};

/// A trait used to enable types to be interpolated throughout the rasterization process
pub trait Interpolate: Sized {
    /// Linearly scale two items of this type and sum them
    fn lerp2(a: Self, b: Self, x: f64, y: f64) -> Self;

    /// Blend from `a` to `b` by `t` without checking that `t` lies in `[0, 1]`.
    ///
    /// The blend is weighted (`a * (1 - t) + b * t`) so that `t = 0` reproduces `a` and `t = 1` reproduces `b`
    /// exactly.
    #[inline(always)]
    fn lerp_unchecked(a: Self, b: Self, t: f64) -> Self {
        Self::lerp2(a, b, 1.0 - t, t)
    }
}

// Default impls for certain types
macro_rules! impl_interpolate_for {
    ($t:ty) => {
        impl Interpolate for $t {
            #[inline(always)]
            fn lerp2(a: Self, b: Self, x: f64, y: f64) -> Self {
                a * x + b * y
            }
        }
    };
}
impl_interpolate_for!(f64);
impl_interpolate_for!(Vec2<f64>);
impl_interpolate_for!(Rgb<f64>);

/// Linearly blend every field of `a` and `b` by `t`.
///
/// Fails with [`Error::InterpolationFactor`] if `t` is outside of `[0, 1]` (or is `NaN`).
pub fn interpolate<T: Interpolate>(a: T, b: T, t: f64) -> Result<T> {
    if (0.0..=1.0).contains(&t) {
        Ok(T::lerp_unchecked(a, b, t))
    } else {
        Err(Error::InterpolationFactor { t })
    }
}
