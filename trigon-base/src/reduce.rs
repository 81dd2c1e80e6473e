//! Range reduction.

use crate::num::Float;

/// Outcome of [`reduce`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ReductionResult {
    /// Number of whole periods removed from the argument. Has the same sign
    /// as the argument. Only meaningful if `was_reduced` is true.
    pub quadrant: i64,

    /// False if the argument already lay in `[-period, period]` and was left
    /// untouched.
    pub was_reduced: bool,
}

impl ReductionResult {
    const UNREDUCED: ReductionResult = ReductionResult {
        quadrant: 0,
        was_reduced: false,
    };
}

/// Largest quotient reduced by `x - q·period`. Above this the rounding error
/// of `q·period` becomes a noticeable fraction of the period.
const MAX_DIRECT_QUOTIENT: f64 = (1u64 << 31) as f64;

/// Reduce `x` into `[-period, period]`.
///
/// If `|x| > period`, `x` is replaced by `x - q·period` where
/// `q = trunc(x / period)`. The arithmetic happens in `f64` whatever the type
/// of `x`.
///
/// Reduction is a single division rather than an exact multi-word scheme, so
/// precision degrades for arguments in the thousands of radians and beyond.
///
/// For quotients above 2^31 the remainder is instead taken exactly with `%`,
/// and [`ReductionResult::quadrant`] only holds `q` modulo 8, which is all
/// the quadrant and octant folds use. This keeps the result finite and in
/// range for every finite `x`, up to `f64::MAX`.
#[inline]
pub fn reduce<T: Float>(x: &mut T, period: f64) -> ReductionResult {
    let wide = x.to_f64();
    if wide.abs() <= period {
        return ReductionResult::UNREDUCED;
    }
    let quotient = (wide / period).trunc();
    if quotient.abs() <= MAX_DIRECT_QUOTIENT {
        *x = T::from_f64(wide - quotient * period);
        return ReductionResult {
            quadrant: quotient as i64,
            was_reduced: true,
        };
    }

    // `8 * period` is exact, so both remainders are exact and differ by a
    // whole number of periods in `-7..=7`.
    let remainder = wide % period;
    let low_bits = ((wide % (8. * period) - remainder) / period).round();
    *x = T::from_f64(remainder);
    ReductionResult {
        quadrant: low_bits as i64,
        was_reduced: true,
    }
}

#[cfg(test)]
mod tests {
    use trigon_testing::TestCases;

    use super::{ReductionResult, reduce};
    use crate::consts::{HALF_PI, QUARTER_PI};

    #[test]
    fn test_reduce() {
        #[derive(Debug)]
        struct Case {
            x: f64,
            period: f64,
            expected_x: f64,
            expected: ReductionResult,
        }

        let cases = [
            Case {
                x: 1.0,
                period: HALF_PI,
                expected_x: 1.0,
                expected: ReductionResult::UNREDUCED,
            },
            Case {
                x: HALF_PI,
                period: HALF_PI,
                expected_x: HALF_PI,
                expected: ReductionResult::UNREDUCED,
            },
            Case {
                x: 3.0,
                period: HALF_PI,
                expected_x: 3.0 - HALF_PI,
                expected: ReductionResult {
                    quadrant: 1,
                    was_reduced: true,
                },
            },
            Case {
                x: -3.0,
                period: HALF_PI,
                expected_x: -3.0 + HALF_PI,
                expected: ReductionResult {
                    quadrant: -1,
                    was_reduced: true,
                },
            },
            Case {
                x: 10.0,
                period: QUARTER_PI,
                expected_x: 10.0 - 12.0 * QUARTER_PI,
                expected: ReductionResult {
                    quadrant: 12,
                    was_reduced: true,
                },
            },
            Case {
                x: 2.0 * HALF_PI,
                period: QUARTER_PI,
                expected_x: 0.0,
                expected: ReductionResult {
                    quadrant: 4,
                    was_reduced: true,
                },
            },
        ];

        cases.test_each(|case| {
            let mut x = case.x;
            let result = reduce(&mut x, case.period);
            assert_eq!(result, case.expected);
            assert!((x - case.expected_x).abs() < 1e-12, "{} != {}", x, case.expected_x);
        })
    }

    #[test]
    fn test_reduce_f32() {
        let mut x = 7.0f32;
        let result = reduce(&mut x, HALF_PI);
        assert_eq!(result.quadrant, 4);
        assert!((x - (7.0 - 4.0 * HALF_PI) as f32).abs() < 1e-6);
    }

    #[test]
    fn test_reduce_keeps_remainder_in_range() {
        let mut rng = fastrand::Rng::with_seed(1234);
        for _ in 0..1000 {
            let mut x = (rng.f64() - 0.5) * 2000.0;
            let original = x;
            let result = reduce(&mut x, HALF_PI);
            assert!(x.abs() <= HALF_PI);
            if result.was_reduced {
                assert_eq!(result.quadrant.signum() as f64, original.signum());
            }
        }
    }

    #[test]
    fn test_reduce_huge_arguments() {
        #[derive(Debug)]
        struct Case {
            x: f64,
            period: f64,
        }

        let cases = [f64::MAX, -f64::MAX, 1.6e308, -1.6e308, 1e300, 1e20, -1e12]
            .into_iter()
            .flat_map(|x| [HALF_PI, QUARTER_PI].map(|period| Case { x, period }));

        cases.test_each(|&Case { x, period }| {
            let mut r = x;
            let result = reduce(&mut r, period);
            assert!(result.was_reduced);
            assert!(r.is_finite() && r.abs() <= period, "reduced to {}", r);
            assert!((-7..=7).contains(&result.quadrant));
            if result.quadrant != 0 {
                assert_eq!(result.quadrant.signum() as f64, x.signum());
            }
        });

        let mut x = f32::MAX;
        let result = reduce(&mut x, HALF_PI);
        assert!(x.is_finite() && result.was_reduced);
    }

    #[test]
    fn test_reduce_huge_argument_keeps_quadrant() {
        // A whole number of `8 * HALF_PI` periods plus 3, so the quotient
        // modulo 8 is 1.
        let periods = (1u64 << 36) as f64 * HALF_PI;
        for sign in [1., -1.] {
            let mut x = sign * (periods + 3.0);
            let result = reduce(&mut x, HALF_PI);
            assert_eq!(result.quadrant, sign as i64);
            assert!((x - sign * (3.0 - HALF_PI)).abs() < 1e-4, "reduced to {}", x);
        }
    }
}
