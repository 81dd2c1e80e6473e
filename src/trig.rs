//! Sine, cosine and tangent.

use trigon_base::coeffs::{TAN_DEGREE_2, TAN_DEGREE_4};
use trigon_base::consts::{DEG_TO_RAD, QUARTER_PI, RAD_TO_DEG};
use trigon_base::fold::Octant;
use trigon_base::hint::unlikely;
use trigon_base::num::{Float, Promote};
use trigon_base::reduce::reduce;

use crate::lut::{self, TableFloat};
use crate::options::{Approx, Method, Speed};
use crate::poly;

/// Convert an angle in degrees to radians.
pub fn deg_to_rad<T: Float>(degrees: T) -> T {
    degrees * T::from_f64(DEG_TO_RAD)
}

/// Convert an angle in radians to degrees.
pub fn rad_to_deg<T: Float>(radians: T) -> T {
    radians * T::from_f64(RAD_TO_DEG)
}

/// Approximate `sin(x)` using the default accuracy for the argument type.
///
/// Integer arguments are evaluated as `f64`. Infinite arguments return a
/// signaling NaN.
///
/// ```
/// let y = trigon::sin(std::f64::consts::FRAC_PI_2);
/// assert!((y - 1.0).abs() < 1e-6);
/// ```
pub fn sin<X: Promote>(x: X) -> X::Float
where
    X::Float: TableFloat,
{
    sin_with(x, Approx::new())
}

/// Approximate `cos(x)` using the default accuracy for the argument type.
///
/// See [`sin`].
pub fn cos<X: Promote>(x: X) -> X::Float
where
    X::Float: TableFloat,
{
    cos_with(x, Approx::new())
}

/// Approximate `sin(x)` with the given accuracy and method.
pub fn sin_with<X: Promote>(x: X, opts: Approx) -> X::Float
where
    X::Float: TableFloat,
{
    sin_impl(x.promote(), opts)
}

/// Approximate `cos(x)` with the given accuracy and method.
pub fn cos_with<X: Promote>(x: X, opts: Approx) -> X::Float
where
    X::Float: TableFloat,
{
    cos_impl(x.promote(), opts)
}

/// Approximate the sine of an angle in degrees.
pub fn sin_deg<X: Promote>(degrees: X) -> X::Float
where
    X::Float: TableFloat,
{
    sin_deg_with(degrees, Approx::new())
}

/// Approximate the cosine of an angle in degrees.
pub fn cos_deg<X: Promote>(degrees: X) -> X::Float
where
    X::Float: TableFloat,
{
    cos_deg_with(degrees, Approx::new())
}

pub fn sin_deg_with<X: Promote>(degrees: X, opts: Approx) -> X::Float
where
    X::Float: TableFloat,
{
    sin_impl(deg_to_rad(degrees.promote()), opts)
}

pub fn cos_deg_with<X: Promote>(degrees: X, opts: Approx) -> X::Float
where
    X::Float: TableFloat,
{
    cos_impl(deg_to_rad(degrees.promote()), opts)
}

fn sin_impl<T: TableFloat>(x: T, opts: Approx) -> T {
    if unlikely(x.is_infinite()) {
        return T::signaling_nan();
    }
    let accuracy = opts.accuracy_for::<T>();
    match opts.get_method() {
        Method::Polynomial => poly::sin(x, accuracy),
        Method::Table => lut::sin(x, accuracy),
    }
}

fn cos_impl<T: TableFloat>(x: T, opts: Approx) -> T {
    if unlikely(x.is_infinite()) {
        return T::signaling_nan();
    }
    let accuracy = opts.accuracy_for::<T>();
    match opts.get_method() {
        Method::Polynomial => poly::cos(x, accuracy),
        Method::Table => lut::cos(x, accuracy),
    }
}

/// Approximate `tan(x)` on `[0, π/4]`.
#[inline]
fn tan_inner<T: Float>(x: T, speed: Speed) -> T {
    let u = x * T::from_f64(1. / QUARTER_PI);
    let u2 = u * u;
    match speed {
        Speed::Fast => {
            let [a, b] = TAN_DEGREE_2.map(T::from_f64);
            u * a / (b + u2)
        }
        Speed::Precise => {
            let [a, b, c, d] = TAN_DEGREE_4.map(T::from_f64);
            u * (a + b * u2) / (c + u2 * (d + u2))
        }
    }
}

/// Approximate `tan(x)` with [`Speed::Fast`].
pub fn tan<X: Promote>(x: X) -> X::Float {
    tan_with(x, Speed::Fast)
}

/// Approximate `tan(x)`.
///
/// Arguments which reduce exactly onto an odd multiple of π/2 return
/// positive infinity, whatever their sign. Infinite arguments return a
/// signaling NaN.
pub fn tan_with<X: Promote>(x: X, speed: Speed) -> X::Float {
    tan_impl(x.promote(), speed)
}

/// Approximate the tangent of an angle in degrees.
pub fn tan_deg<X: Promote>(degrees: X) -> X::Float {
    tan_deg_with(degrees, Speed::Fast)
}

pub fn tan_deg_with<X: Promote>(degrees: X, speed: Speed) -> X::Float {
    tan_impl(deg_to_rad(degrees.promote()), speed)
}

fn tan_impl<T: Float>(x: T, speed: Speed) -> T {
    if unlikely(x.is_infinite()) {
        return T::signaling_nan();
    }

    let mut r = x;
    let reduction = reduce(&mut r, QUARTER_PI);
    let r = r.abs();
    let octant = Octant::from_index(reduction.quadrant);
    if r == T::ZERO && octant.starts_at_pole() {
        return T::INFINITY;
    }

    let y = octant.tan(r, T::from_f64(QUARTER_PI), |t| tan_inner(t, speed));
    if x.is_sign_negative() {
        -y
    } else {
        y
    }
}

#[cfg(test)]
mod tests {
    use trigon_base::consts::{HALF_PI, PI, QUARTER_PI};
    use trigon_base::num::Float;
    use trigon_testing::TestCases;

    use super::{
        cos, cos_deg, cos_deg_with, cos_with, deg_to_rad, rad_to_deg, sin, sin_deg, sin_deg_with,
        sin_with, tan, tan_deg, tan_deg_with, tan_with,
    };
    use crate::options::{Accuracy, Approx, Method, Speed};

    #[test]
    fn test_conversions() {
        assert_eq!(deg_to_rad(180.0f64), PI);
        assert_eq!(rad_to_deg(PI), 180.);
        assert!((deg_to_rad(90.0f32) - HALF_PI as f32).abs() < 1e-7);
    }

    #[test]
    fn test_infinite_arguments() {
        #[derive(Debug)]
        struct Case {
            x: f64,
        }

        let cases = [Case { x: f64::INFINITY }, Case {
            x: f64::NEG_INFINITY,
        }];

        cases.test_each(|&Case { x }| {
            assert!(sin(x).is_signaling_nan());
            assert!(cos(x).is_signaling_nan());
            assert!(tan(x).is_signaling_nan());
            assert!(sin_deg(x).is_signaling_nan());
            let table = Approx::new().method(Method::Table);
            assert!(sin_with(x, table).is_signaling_nan());
            assert!(cos_with(x as f32, table).is_signaling_nan());
        });
    }

    #[test]
    fn test_integer_arguments() {
        let y: f64 = sin(1i32);
        assert_eq!(y, sin(1.0f64));
        assert_eq!(cos(0u8), 1.0f64);
        assert_eq!(sin_deg(90i64), sin(HALF_PI));
        assert_eq!(tan(1usize), tan(1.0f64));
    }

    #[test]
    fn test_degrees() {
        assert!((sin_deg(30.0f64) - 0.5).abs() < 1e-9);
        assert!((cos_deg(60.0f32) - 0.5).abs() < 1e-6);
        assert!((tan_deg(45.0f64) - 1.).abs() < 0.01);

        let table = Approx::new().method(Method::Table);
        assert!((sin_deg_with(30i32, table) - 0.5).abs() < 1e-6);
        assert!((cos_deg_with(60.0f32, table) - 0.5).abs() < 1e-6);
        assert!((tan_deg_with(45u8, Speed::Precise) - 1.).abs() < 0.01);
        assert!((tan_deg_with(-45.0f32, Speed::Fast) + 1.).abs() < 0.01);
        assert_eq!(sin_deg(-90.0f64), -sin_deg(90.0f64));
    }

    #[test]
    fn test_huge_arguments() {
        #[derive(Debug)]
        struct Case {
            x: f64,
            method: Method,
        }

        let cases = [f64::MAX, -f64::MAX, 1.6e308, -1.6e308, 1e300, 1e20]
            .into_iter()
            .flat_map(|x| [Method::Polynomial, Method::Table].map(|method| Case { x, method }));

        cases.test_each(|&Case { x, method }| {
            let opts = Approx::new().method(method);
            let s = sin_with(x, opts);
            let c = cos_with(x, opts);
            assert!(s.abs() <= 1. + 1e-6, "sin({}) = {}", x, s);
            assert!(c.abs() <= 1. + 1e-6, "cos({}) = {}", x, c);
            assert!(!tan_with(x, Speed::Fast).is_nan());
            assert!(!tan_with(x, Speed::Precise).is_nan());

            let s = sin_with(f32::MAX, opts);
            assert!(s.abs() <= 1. + 1e-6, "sin(f32::MAX) = {}", s);
        });
    }

    #[test]
    fn test_tan_poles() {
        assert_eq!(tan(HALF_PI), f64::INFINITY);
        assert_eq!(tan(-HALF_PI), f64::INFINITY);
        assert_eq!(tan_with(3. * HALF_PI, Speed::Precise), f64::INFINITY);
        assert!(tan(HALF_PI - 1e-3) > 100.);
    }

    #[test]
    fn test_tan() {
        #[derive(Debug)]
        struct Case {
            x: f64,
            speed: Speed,
        }

        let cases = [0.1, 0.5, QUARTER_PI, 1.2, 2.0, 2.8, -0.7, -4.0, 10.]
            .into_iter()
            .flat_map(|x| {
                [Speed::Fast, Speed::Precise]
                    .into_iter()
                    .map(move |speed| Case { x, speed })
            });

        cases.test_each(|&Case { x, speed }| {
            let y = tan_with(x, speed);
            let expected = x.tan();
            assert!(((y - expected) / expected).abs() < 0.01, "{} vs {}", y, expected);
        });

        assert_eq!(tan(0.0f32), 0.);
        assert!(tan(-0.0f64).is_sign_negative());
    }

    #[test]
    fn test_sin_cos_default_accuracy() {
        let mut x = -10.0f64;
        while x < 10.0 {
            assert!((sin(x) - x.sin()).abs() < 1e-6);
            assert!((cos(x) - x.cos()).abs() < 1e-6);
            assert!((sin(x as f32) - (x as f32).sin()).abs() < 1e-6);
            x += 0.037;
        }

        let opts = Approx::new().accuracy(Accuracy::MIN);
        assert!((sin_with(1.0f64, opts) - 1.0f64.sin()).abs() < 0.1);
    }
}
