//! Inverse trigonometric functions.

use trigon_base::coeffs::{
    ACOS_RATIONAL, ATAN_DEGREE_3, ATAN_DEGREE_3_SWITCH, ATAN_DEGREE_3_TAIL, ATAN_DEGREE_8,
    ATAN_DEGREE_8_SWITCH, ATAN_DEGREE_8_TAIL,
};
use trigon_base::consts::HALF_PI;
use trigon_base::num::{Float, Promote};

use crate::options::Speed;
use crate::poly::horner;

/// Rational approximation of arccosine in `f64`, usable in constant
/// expressions.
pub(crate) const fn acos_rational(x: f64) -> f64 {
    let [a, b, c, d] = ACOS_RATIONAL;
    let x2 = x * x;
    HALF_PI + (a * x + b * x2 * x) / (1. + c * x2 + d * x2 * x2)
}

fn acos_inner<T: Float>(x: T) -> T {
    let [a, b, c, d] = ACOS_RATIONAL.map(T::from_f64);
    let x2 = x * x;
    T::from_f64(HALF_PI) + (a * x + b * x2 * x) / (T::ONE + c * x2 + d * x2 * x2)
}

/// Approximate `acos(x)`.
///
/// `x` must lie in `[-1, 1]`. This is checked in debug builds only. The
/// result is accurate to about 0.01.
pub fn acos<X: Promote>(x: X) -> X::Float {
    let x = x.promote();
    debug_assert!(
        x.abs() <= X::Float::ONE,
        "acos argument {:?} outside [-1, 1]",
        x
    );
    acos_inner(x)
}

/// Approximate `asin(x)`, as `π/2 - acos(x)`.
///
/// `x` must lie in `[-1, 1]`. See [`acos`].
pub fn asin<X: Promote>(x: X) -> X::Float {
    let x = x.promote();
    debug_assert!(
        x.abs() <= X::Float::ONE,
        "asin argument {:?} outside [-1, 1]",
        x
    );
    X::Float::from_f64(HALF_PI) - acos_inner(x)
}

/// Approximate `atan(x)` with [`Speed::Fast`].
pub fn atan<X: Promote>(x: X) -> X::Float {
    atan_with(x, Speed::Fast)
}

/// Approximate `atan(x)`.
///
/// Below a switch point the magnitude of `x` is fed to a polynomial, above
/// it to a linear tail clamped at π/2. The sign is restored afterwards.
pub fn atan_with<X: Promote>(x: X, speed: Speed) -> X::Float {
    let x = x.promote();
    if x == X::Float::ZERO {
        return x;
    }

    let (poly, switch, [slope, intercept]): (&[f64], f64, [f64; 2]) = match speed {
        Speed::Fast => (&ATAN_DEGREE_3[..], ATAN_DEGREE_3_SWITCH, ATAN_DEGREE_3_TAIL),
        Speed::Precise => (&ATAN_DEGREE_8[..], ATAN_DEGREE_8_SWITCH, ATAN_DEGREE_8_TAIL),
    };

    let mag = x.abs();
    let y = if mag > X::Float::from_f64(switch) {
        (X::Float::from_f64(slope) * mag + X::Float::from_f64(intercept))
            .min(X::Float::from_f64(HALF_PI))
    } else {
        horner(poly, mag)
    };

    if x.is_sign_negative() { -y } else { y }
}
