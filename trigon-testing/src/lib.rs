//! Internal testing utilities for the trigon crates.
//!
//! - [`TestCases`] runs table-driven tests and reports every failing case.
//! - [`arange`] produces evenly spaced sample points.
//! - [`accuracy`] measures how far an approximation strays from a reference.

use std::fmt::Debug;
use std::panic::RefUnwindSafe;

pub mod accuracy;

/// Utility for creating parametrized (aka. table-driven) tests.
///
/// Create a `Case` struct which implements `Debug`, build a collection of
/// cases and pass the test body to `test_each`. All cases run even if an
/// earlier one panics. If any fail, `test_each` panics with the number of
/// failures and their debug representations.
///
/// ```
/// use trigon_testing::TestCases;
///
/// #[derive(Debug)]
/// struct Case {
///     degrees: f64,
///     radians: f64,
/// }
///
/// let cases = [
///     Case { degrees: 180., radians: std::f64::consts::PI },
///     Case { degrees: -90., radians: -std::f64::consts::FRAC_PI_2 },
/// ];
///
/// cases.test_each(|case| {
///     assert!((case.degrees.to_radians() - case.radians).abs() < 1e-12);
/// });
/// ```
///
/// `test_each` passes each case by reference so that it can still print the
/// case after a panic.
///
/// Cases and anything the test closure captures must be
/// [unwind safe](std::panic::UnwindSafe). Wrap values with interior
/// mutability in [`AssertUnwindSafe`](std::panic::AssertUnwindSafe), or
/// create them inside the closure.
pub trait TestCases {
    /// The data for a single test case.
    type Case;

    /// Call `test` with a reference to each case, catching panics.
    fn test_each(self, test: impl Fn(&Self::Case) + RefUnwindSafe)
    where
        Self::Case: Debug + RefUnwindSafe;
}

fn check_no_failures<F: Debug>(failures: &[F]) {
    assert_eq!(
        failures.len(),
        0,
        "{} test cases failed: {:?}",
        failures.len(),
        failures
    );
}

impl<I: IntoIterator> TestCases for I {
    type Case = I::Item;

    fn test_each(self, test: impl Fn(&I::Item) + RefUnwindSafe)
    where
        Self::Case: Debug + RefUnwindSafe,
    {
        let failures: Vec<_> = self
            .into_iter()
            .filter(|case| std::panic::catch_unwind(|| test(case)).is_err())
            .collect();
        check_no_failures(&failures);
    }
}

/// Iterator over an arithmetic series. See [`arange`].
#[derive(Copy, Clone, Debug)]
pub struct ARange {
    start: f64,
    step: f64,
    index: usize,
    len: usize,
}

/// Return an iterator over `[start, end)` in steps of `step`.
///
/// Points are computed as `start + i * step` rather than by repeated
/// addition, so long ranges do not accumulate rounding error.
pub fn arange(start: f64, end: f64, step: f64) -> ARange {
    assert!(step > 0.0, "step must be positive");
    let len = ((end - start) / step).ceil().max(0.0) as usize;
    ARange {
        start,
        step,
        index: 0,
        len,
    }
}

impl Iterator for ARange {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.index >= self.len {
            return None;
        }
        let value = self.start + self.index as f64 * self.step;
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ARange {}

#[cfg(test)]
mod tests {
    use super::{arange, TestCases};

    #[test]
    fn test_test_cases_success() {
        #[derive(Debug)]
        struct Case {
            x: f64,
        }

        let cases = [Case { x: 1. }, Case { x: 2. }];
        cases.test_each(|case| assert!(case.x > 0.));
    }

    #[test]
    #[should_panic(expected = "2 test cases failed")]
    fn test_test_each_failure() {
        #[derive(Debug)]
        struct Case {
            x: f64,
        }

        let cases = [Case { x: 1. }, Case { x: 2. }, Case { x: 3. }];
        cases.test_each(|case| {
            assert!(case.x > 2.5, "too small");
        })
    }

    #[test]
    fn test_arange() {
        let values: Vec<f64> = arange(-1., 1., 0.5).collect();
        assert_eq!(values, [-1., -0.5, 0., 0.5]);
        assert_eq!(arange(0., 1., 0.001).len(), 1000);
        assert_eq!(arange(1., 0., 0.1).count(), 0);
    }
}
