//! Quadrant and octant folding.
//!
//! After [`reduce`](crate::reduce::reduce) an argument is known only up to the
//! number of whole quarter (or eighth) periods removed from it. The types here
//! turn that count back into the function value, given approximations that
//! are only valid on the canonical interval.
//!
//! The folds take the magnitude of the reduced argument. Applying the sign of
//! the original argument is left to the caller, since sine and tangent are odd
//! and cosine is even.

use crate::consts::HALF_PI;
use crate::num::Float;
use crate::reduce::reduce;

/// Index of the quarter period an argument was reduced from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Quadrant(u8);

impl Quadrant {
    /// Return the quadrant of a reduction quotient, `|index| mod 4`.
    #[inline]
    pub fn from_index(index: i64) -> Quadrant {
        Quadrant((index.unsigned_abs() & 3) as u8)
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// Reconstruct `sin(x)` where `r` is the magnitude of `x` reduced by a
    /// half-period of π/2.
    #[inline]
    pub fn sin<T: Float>(self, r: T, sin: impl Fn(T) -> T, cos: impl Fn(T) -> T) -> T {
        match self.0 {
            0 => sin(r),
            1 => cos(r),
            2 => -sin(r),
            3 => -cos(r),
            _ => unreachable!("invalid range"),
        }
    }

    /// Reconstruct `cos(x)` where `r` is the magnitude of `x` reduced by π/2.
    #[inline]
    pub fn cos<T: Float>(self, r: T, sin: impl Fn(T) -> T, cos: impl Fn(T) -> T) -> T {
        match self.0 {
            0 => cos(r),
            1 => -sin(r),
            2 => -cos(r),
            3 => sin(r),
            _ => unreachable!("invalid range"),
        }
    }
}

/// Index of the eighth period an argument was reduced from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Octant(u8);

impl Octant {
    /// Return the octant of a reduction quotient, `|index| mod 8`.
    #[inline]
    pub fn from_index(index: i64) -> Octant {
        Octant((index.unsigned_abs() & 7) as u8)
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// Return true for the octants that start on an odd multiple of π/2,
    /// where tangent has its poles.
    #[inline]
    pub fn starts_at_pole(self) -> bool {
        self.0 == 2 || self.0 == 6
    }

    /// Reconstruct `sin(x)` where `r` is the magnitude of `x` reduced by π/4
    /// and `quarter` is π/4.
    ///
    /// `sin` and `cos` need only be valid on `[0, π/4]`. Odd octants mirror
    /// the argument as `quarter - r` to stay inside that interval.
    #[inline]
    pub fn sin<T: Float>(
        self,
        r: T,
        quarter: T,
        sin: impl Fn(T) -> T,
        cos: impl Fn(T) -> T,
    ) -> T {
        match self.0 {
            0 => sin(r),
            1 => cos(quarter - r),
            2 => cos(r),
            3 => sin(quarter - r),
            4 => -sin(r),
            5 => -cos(quarter - r),
            6 => -cos(r),
            7 => -sin(quarter - r),
            _ => unreachable!("invalid range"),
        }
    }

    /// Reconstruct `cos(x)` where `r` is the magnitude of `x` reduced by π/4.
    #[inline]
    pub fn cos<T: Float>(
        self,
        r: T,
        quarter: T,
        sin: impl Fn(T) -> T,
        cos: impl Fn(T) -> T,
    ) -> T {
        match self.0 {
            0 => cos(r),
            1 => sin(quarter - r),
            2 => -sin(r),
            3 => -cos(quarter - r),
            4 => -cos(r),
            5 => -sin(quarter - r),
            6 => sin(r),
            7 => cos(quarter - r),
            _ => unreachable!("invalid range"),
        }
    }

    /// Reconstruct `tan(x)` where `r` is the magnitude of `x` reduced by π/4.
    ///
    /// Tangent has period π, so octants four apart share a formula.
    #[inline]
    pub fn tan<T: Float>(self, r: T, quarter: T, tan: impl Fn(T) -> T) -> T {
        match self.0 {
            0 | 4 => tan(r),
            1 | 5 => T::ONE / tan(quarter - r),
            2 | 6 => -(T::ONE / tan(r)),
            3 | 7 => -tan(quarter - r),
            _ => unreachable!("invalid range"),
        }
    }
}

/// Evaluate `sin(x)` given approximations of sine and cosine which are valid
/// on `[-π/2, π/2]`.
///
/// Arguments inside that interval are passed to `sin` directly. Others are
/// reduced by π/2 and folded by [`Quadrant`].
#[inline(always)]
pub fn sin_by_quadrant<T: Float>(x: T, sin: impl Fn(T) -> T, cos: impl Fn(T) -> T) -> T {
    let mut r = x;
    let reduction = reduce(&mut r, HALF_PI);
    if !reduction.was_reduced {
        return sin(r);
    }
    let y = Quadrant::from_index(reduction.quadrant).sin(r.abs(), sin, cos);
    if x.is_sign_negative() { -y } else { y }
}

/// Evaluate `cos(x)`. See [`sin_by_quadrant`].
#[inline(always)]
pub fn cos_by_quadrant<T: Float>(x: T, sin: impl Fn(T) -> T, cos: impl Fn(T) -> T) -> T {
    let mut r = x;
    let reduction = reduce(&mut r, HALF_PI);
    if !reduction.was_reduced {
        return cos(r);
    }
    Quadrant::from_index(reduction.quadrant).cos(r.abs(), sin, cos)
}

/// Evaluate `(sin(x), cos(x))` given an approximation of both which is valid
/// on `[-π/2, π/2]`.
#[inline(always)]
pub fn sin_cos_by_quadrant<T: Float>(x: T, sin_cos: impl Fn(T) -> (T, T)) -> (T, T) {
    if x == T::ZERO {
        return (x, T::ONE);
    }
    let mut r = x;
    let reduction = reduce(&mut r, HALF_PI);
    if !reduction.was_reduced {
        return sin_cos(r);
    }
    let (s, c) = sin_cos(r.abs());
    let quadrant = Quadrant::from_index(reduction.quadrant);
    let sin = quadrant.sin(T::ZERO, |_| s, |_| c);
    let cos = quadrant.cos(T::ZERO, |_| s, |_| c);
    (if x.is_sign_negative() { -sin } else { sin }, cos)
}

#[cfg(test)]
mod tests {
    use trigon_testing::TestCases;

    use super::{Octant, Quadrant, cos_by_quadrant, sin_by_quadrant, sin_cos_by_quadrant};
    use crate::consts::{HALF_PI, QUARTER_PI};

    #[test]
    fn test_from_index() {
        assert_eq!(Quadrant::from_index(5).index(), 1);
        assert_eq!(Quadrant::from_index(-5).index(), 1);
        assert_eq!(Quadrant::from_index(i64::MIN).index(), 0);
        assert_eq!(Octant::from_index(13).index(), 5);
        assert_eq!(Octant::from_index(-13).index(), 5);
        assert!(Octant::from_index(2).starts_at_pole());
        assert!(Octant::from_index(-6).starts_at_pole());
        assert!(!Octant::from_index(4).starts_at_pole());
    }

    // Folding exact sin/cos must reproduce exact sin/cos on every quadrant
    // and octant.
    #[test]
    fn test_folds_reproduce_exact_functions() {
        #[derive(Debug)]
        struct Case {
            x: f64,
        }

        let cases = (0..64).map(|i| Case {
            x: 0.05 + i as f64 * 0.3,
        });

        cases.test_each(|&Case { x }| {
            let q = (x / HALF_PI).trunc();
            let r = x - q * HALF_PI;
            let quadrant = Quadrant::from_index(q as i64);
            let s = quadrant.sin(r, f64::sin, f64::cos);
            let c = quadrant.cos(r, f64::sin, f64::cos);
            assert!((s - x.sin()).abs() < 1e-12);
            assert!((c - x.cos()).abs() < 1e-12);

            let q = (x / QUARTER_PI).trunc();
            let r = x - q * QUARTER_PI;
            let octant = Octant::from_index(q as i64);
            let s = octant.sin(r, QUARTER_PI, f64::sin, f64::cos);
            let c = octant.cos(r, QUARTER_PI, f64::sin, f64::cos);
            let t = octant.tan(r, QUARTER_PI, f64::tan);
            assert!((s - x.sin()).abs() < 1e-12);
            assert!((c - x.cos()).abs() < 1e-12);
            assert!((t / x.tan() - 1.0).abs() < 1e-9);
        })
    }

    #[test]
    fn test_quadrant_drivers_with_exact_kernels() {
        let mut x = -20.0f64;
        while x < 20.0 {
            let s = sin_by_quadrant(x, f64::sin, f64::cos);
            let c = cos_by_quadrant(x, f64::sin, f64::cos);
            let (s2, c2) = sin_cos_by_quadrant(x, |r| (r.sin(), r.cos()));
            assert!((s - x.sin()).abs() < 1e-12, "sin({})", x);
            assert!((c - x.cos()).abs() < 1e-12, "cos({})", x);
            assert!((s2 - x.sin()).abs() < 1e-12, "sin_cos({})", x);
            assert!((c2 - x.cos()).abs() < 1e-12, "sin_cos({})", x);
            x += 0.173;
        }
    }

    #[test]
    fn test_sin_cos_of_zero() {
        assert_eq!(sin_cos_by_quadrant(0.0f32, |_| (f32::NAN, f32::NAN)), (0.0, 1.0));
        let (s, c) = sin_cos_by_quadrant(-0.0f64, |_| (f64::NAN, f64::NAN));
        assert!(s == 0.0 && s.is_sign_negative());
        assert_eq!(c, 1.0);
    }
}
