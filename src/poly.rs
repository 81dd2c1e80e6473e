//! Polynomial evaluation of sine and cosine.

use trigon_base::coeffs::{COS_POLYNOMIALS, SIN_COS_ACCURACY_MAP, SIN_POLYNOMIALS};
use trigon_base::fold::{cos_by_quadrant, sin_by_quadrant};
use trigon_base::num::Float;

use crate::options::Accuracy;

/// Evaluate a polynomial in `x` with Horner's scheme.
///
/// `coeffs` lists coefficients from the lowest degree term upwards.
#[inline]
pub(crate) fn horner<T: Float>(coeffs: &[f64], x: T) -> T {
    coeffs
        .iter()
        .rev()
        .fold(T::ZERO, |acc, &c| acc * x + T::from_f64(c))
}

/// Sine and cosine polynomials for one accuracy level.
#[derive(Copy, Clone)]
struct SinCosPolys {
    sin: &'static [f64],
    cos: &'static [f64],
}

impl SinCosPolys {
    fn for_accuracy(accuracy: Accuracy) -> SinCosPolys {
        let index = SIN_COS_ACCURACY_MAP[accuracy.level() as usize];
        SinCosPolys {
            sin: SIN_POLYNOMIALS[index],
            cos: COS_POLYNOMIALS[index],
        }
    }

    /// Approximate sine on `[-π/2, π/2]`.
    #[inline]
    fn sin<T: Float>(&self, x: T) -> T {
        if x == T::ZERO {
            return x;
        }
        x * horner(self.sin, x * x)
    }

    /// Approximate cosine on `[-π/2, π/2]`.
    #[inline]
    fn cos<T: Float>(&self, x: T) -> T {
        if x == T::ZERO {
            return T::ONE;
        }
        horner(self.cos, x * x)
    }
}

/// Approximate `sin(x)` for a finite `x`.
pub(crate) fn sin<T: Float>(x: T, accuracy: Accuracy) -> T {
    let polys = SinCosPolys::for_accuracy(accuracy);
    sin_by_quadrant(x, |r| polys.sin(r), |r| polys.cos(r))
}

/// Approximate `cos(x)` for a finite `x`.
pub(crate) fn cos<T: Float>(x: T, accuracy: Accuracy) -> T {
    let polys = SinCosPolys::for_accuracy(accuracy);
    cos_by_quadrant(x, |r| polys.sin(r), |r| polys.cos(r))
}

#[cfg(test)]
mod tests {
    use trigon_base::consts::HALF_PI;

    use super::{cos, horner, sin};
    use crate::options::Accuracy;

    #[test]
    fn test_horner() {
        // 1 - x + 2x²
        assert_eq!(horner(&[1., -1., 2.], 3.0f32), 16.);
        assert_eq!(horner(&[1., -1., 2.], -0.5f64), 2.);
    }

    #[test]
    fn test_exact_values() {
        for accuracy in Accuracy::all() {
            assert_eq!(sin(0.0f64, accuracy), 0.);
            assert_eq!(cos(0.0f64, accuracy), 1.);
            assert_eq!(cos(0.0f32, accuracy), 1.);
            assert!(sin(-0.0f64, accuracy).is_sign_negative());
        }
    }

    #[test]
    fn test_reduced_arguments() {
        let accuracy = Accuracy::MAX;
        for x in [2.0f64, 3.5, -4.0, 7.25, -100.0, 1000.0] {
            assert!((sin(x, accuracy) - x.sin()).abs() < 1e-12, "sin({})", x);
            assert!((cos(x, accuracy) - x.cos()).abs() < 1e-12, "cos({})", x);
        }
        assert!((sin(HALF_PI, accuracy) - 1.).abs() < 1e-14);
    }
}
