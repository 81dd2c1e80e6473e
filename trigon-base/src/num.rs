//! Numeric traits for the floating point types the approximations support.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Floating point type that the approximations can be evaluated in.
///
/// This is implemented for `f32` and `f64`. Coefficients and constants are
/// stored as `f64` and converted with [`Float::from_f64`] at the point of use,
/// so a single generic implementation of each evaluator serves both types.
pub trait Float:
    Copy
    + Debug
    + Default
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Send
    + Sync
    + 'static
{
    const ZERO: Self;
    const ONE: Self;
    const INFINITY: Self;
    const EPSILON: Self;

    /// Accuracy level used by the trig functions when the caller does not
    /// specify one.
    const DEFAULT_ACCURACY: u8;

    /// Bit mask of the quiet flag in a NaN's mantissa.
    const QUIET_NAN_BIT: u64;

    /// Convert from `f64`, rounding to nearest.
    fn from_f64(x: f64) -> Self;

    fn to_f64(self) -> f64;

    fn abs(self) -> Self;

    fn is_nan(self) -> bool;

    fn is_infinite(self) -> bool;

    fn is_sign_negative(self) -> bool;

    fn min(self, other: Self) -> Self;

    /// Return a NaN with the quiet bit clear.
    fn signaling_nan() -> Self;

    /// Return the raw bit pattern, widened to `u64`.
    fn bits(self) -> u64;

    /// Return true if `self` is a NaN whose quiet bit is clear.
    fn is_signaling_nan(self) -> bool {
        self.is_nan() && self.bits() & Self::QUIET_NAN_BIT == 0
    }
}

macro_rules! impl_float {
    ($type:ty, $default_accuracy:expr, $snan_bits:expr, $quiet_bit:expr) => {
        impl Float for $type {
            const ZERO: Self = 0.;
            const ONE: Self = 1.;
            const INFINITY: Self = <$type>::INFINITY;
            const EPSILON: Self = <$type>::EPSILON;
            const DEFAULT_ACCURACY: u8 = $default_accuracy;
            const QUIET_NAN_BIT: u64 = $quiet_bit;

            #[inline]
            fn from_f64(x: f64) -> Self {
                x as $type
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn abs(self) -> Self {
                <$type>::abs(self)
            }

            #[inline]
            fn is_nan(self) -> bool {
                <$type>::is_nan(self)
            }

            #[inline]
            fn is_infinite(self) -> bool {
                <$type>::is_infinite(self)
            }

            #[inline]
            fn is_sign_negative(self) -> bool {
                <$type>::is_sign_negative(self)
            }

            #[inline]
            fn min(self, other: Self) -> Self {
                <$type>::min(self, other)
            }

            #[inline]
            fn signaling_nan() -> Self {
                <$type>::from_bits($snan_bits)
            }

            #[inline]
            fn bits(self) -> u64 {
                self.to_bits() as u64
            }
        }
    };
}

impl_float!(f32, 5, 0x7fa0_0000, 0x0040_0000);
impl_float!(f64, 7, 0x7ff4_0000_0000_0000, 0x0008_0000_0000_0000);

/// Conversion of a trig function argument to the float type it is
/// evaluated in.
///
/// Floats evaluate in their own precision. Integers are promoted to `f64`.
pub trait Promote: Copy {
    type Float: Float;

    fn promote(self) -> Self::Float;
}

impl Promote for f32 {
    type Float = f32;

    #[inline]
    fn promote(self) -> f32 {
        self
    }
}

impl Promote for f64 {
    type Float = f64;

    #[inline]
    fn promote(self) -> f64 {
        self
    }
}

macro_rules! impl_promote_int {
    ($($type:ty),*) => {
        $(
            impl Promote for $type {
                type Float = f64;

                #[inline]
                fn promote(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_promote_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::{Float, Promote};

    #[test]
    fn test_signaling_nan() {
        let x = <f32 as Float>::signaling_nan();
        assert!(x.is_nan());
        assert!(x.is_signaling_nan());
        assert!(!f32::NAN.is_signaling_nan());

        let x = <f64 as Float>::signaling_nan();
        assert!(x.is_nan());
        assert!(x.is_signaling_nan());
        assert!(!f64::NAN.is_signaling_nan());
        assert!(!1.0f64.is_signaling_nan());
    }

    #[test]
    fn test_promote() {
        assert_eq!(3i32.promote(), 3.0f64);
        assert_eq!(200u8.promote(), 200.0f64);
        assert_eq!((-7i64).promote(), -7.0f64);
        assert_eq!(1.5f32.promote(), 1.5f32);
        assert_eq!(2.5f64.promote(), 2.5f64);
    }

    #[test]
    fn test_default_accuracy() {
        assert_eq!(<f32 as Float>::DEFAULT_ACCURACY, 5);
        assert_eq!(<f64 as Float>::DEFAULT_ACCURACY, 7);
    }
}
