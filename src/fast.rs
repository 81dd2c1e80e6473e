//! Sine and cosine through the kernel dispatch table.
//!
//! These functions call whichever kernels [`Optimizer::initialize`] installed,
//! or the portable fallbacks if it has not been called.
//!
//! [`Optimizer::initialize`]: crate::Optimizer::initialize

use trigon_base::hint::unlikely;
use trigon_base::num::{Float, Promote};
use trigon_simd::{kernels, KernelElem};

use crate::trig::deg_to_rad;

/// Approximate `sin(x)` using the installed trig kernel.
///
/// Infinite arguments return a signaling NaN.
pub fn sin_fast<X: Promote>(x: X) -> X::Float
where
    X::Float: KernelElem,
{
    sin_fast_impl(x.promote())
}

/// Approximate `cos(x)` using the installed trig kernel.
pub fn cos_fast<X: Promote>(x: X) -> X::Float
where
    X::Float: KernelElem,
{
    cos_fast_impl(x.promote())
}

/// Approximate `(sin(x), cos(x))` in one call.
pub fn sin_cos<X: Promote>(x: X) -> (X::Float, X::Float)
where
    X::Float: KernelElem,
{
    let x = x.promote();
    if unlikely(x.is_infinite()) {
        let nan = X::Float::signaling_nan();
        return (nan, nan);
    }
    (X::Float::trig_kernels(kernels()).sin_cos)(x)
}

pub fn sin_fast_deg<X: Promote>(degrees: X) -> X::Float
where
    X::Float: KernelElem,
{
    sin_fast_impl(deg_to_rad(degrees.promote()))
}

pub fn cos_fast_deg<X: Promote>(degrees: X) -> X::Float
where
    X::Float: KernelElem,
{
    cos_fast_impl(deg_to_rad(degrees.promote()))
}

fn sin_fast_impl<T: KernelElem>(x: T) -> T {
    if unlikely(x.is_infinite()) {
        return T::signaling_nan();
    }
    (T::trig_kernels(kernels()).sin)(x)
}

fn cos_fast_impl<T: KernelElem>(x: T) -> T {
    if unlikely(x.is_infinite()) {
        return T::signaling_nan();
    }
    (T::trig_kernels(kernels()).cos)(x)
}

#[cfg(test)]
mod tests {
    use trigon_base::consts::HALF_PI;
    use trigon_base::num::Float;

    use super::{cos_fast, cos_fast_deg, sin_cos, sin_fast, sin_fast_deg};

    #[test]
    fn test_fast_functions() {
        assert_eq!(cos_fast(0.0f64), 1.);
        assert!((sin_fast(HALF_PI) - 1.).abs() < 1e-6);
        assert!((sin_fast(HALF_PI as f32) - 1.).abs() < 1e-6);
        assert!((sin_fast_deg(30i32) - 0.5).abs() < 1e-9);
        assert!((cos_fast_deg(60.0f32) - 0.5).abs() < 1e-6);

        let (s, c) = sin_cos(0.0f32);
        assert!(s.abs() < 1e-7 && (c - 1.).abs() < 1e-7);
        let (s, c) = sin_cos(2.5f64);
        assert!((s - 2.5f64.sin()).abs() < 1e-14);
        assert!((c - 2.5f64.cos()).abs() < 1e-14);
    }

    #[test]
    fn test_infinite_arguments() {
        assert!(sin_fast(f64::INFINITY).is_signaling_nan());
        assert!(cos_fast(f32::NEG_INFINITY).is_signaling_nan());
        let (s, c) = sin_cos(f64::INFINITY);
        assert!(s.is_signaling_nan() && c.is_signaling_nan());
        assert!(sin_fast_deg(f64::NEG_INFINITY).is_signaling_nan());
        assert!(cos_fast_deg(f32::INFINITY).is_signaling_nan());
    }

    #[test]
    fn test_huge_arguments() {
        for x in [f64::MAX, -f64::MAX, 1.6e308, 1e20] {
            let (s, c) = sin_cos(x);
            let bound = 1. + 1e-12;
            assert!(sin_fast(x).abs() <= bound && cos_fast(x).abs() <= bound);
            assert!(s.abs() <= bound && c.abs() <= bound, "sin_cos({}) = {:?}", x, (s, c));
        }
        assert!(sin_fast(f32::MAX).abs() <= 1. + 1e-6);
    }
}
