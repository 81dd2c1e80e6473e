//! Options which select how a function is approximated.

use trigon_base::coeffs::MAX_ACCURACY;
use trigon_base::num::Float;

use crate::errors::AccuracyError;

/// Accuracy level of a sine or cosine approximation.
///
/// Levels run from 0 (fastest, least accurate) to 10. Higher levels select
/// higher degree polynomials, or denser lookup tables. The error never
/// increases with the level.
///
/// `f32` results stop improving around level 5, where the approximation
/// error drops below the type's own rounding error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Accuracy(u8);

impl Accuracy {
    /// The least accurate level.
    pub const MIN: Accuracy = Accuracy(0);

    /// The most accurate level.
    pub const MAX: Accuracy = Accuracy(MAX_ACCURACY);

    /// Create an accuracy level, or return an error if `level` is above
    /// [`Accuracy::MAX`].
    pub fn new(level: u8) -> Result<Accuracy, AccuracyError> {
        if level > MAX_ACCURACY {
            return Err(AccuracyError::LevelTooHigh(level));
        }
        Ok(Accuracy(level))
    }

    /// Return the level used when none is specified for type `T`.
    pub fn default_for<T: Float>() -> Accuracy {
        Accuracy(T::DEFAULT_ACCURACY)
    }

    pub fn level(self) -> u8 {
        self.0
    }

    /// Iterate over all levels, from least to most accurate.
    pub fn all() -> impl Iterator<Item = Accuracy> {
        (0..=MAX_ACCURACY).map(Accuracy)
    }
}

impl TryFrom<u8> for Accuracy {
    type Error = AccuracyError;

    fn try_from(level: u8) -> Result<Accuracy, AccuracyError> {
        Accuracy::new(level)
    }
}

/// Evaluation strategy for sine and cosine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Method {
    /// Evaluate a minimax polynomial on a quarter period.
    #[default]
    Polynomial,

    /// Interpolate in a precomputed table covering an eighth of the period.
    Table,
}

/// Configuration for [`sin_with`](crate::sin_with) and
/// [`cos_with`](crate::cos_with).
///
/// ```
/// use trigon::{sin_with, Accuracy, Approx, Method};
///
/// let opts = Approx::new()
///     .accuracy(Accuracy::new(2).unwrap())
///     .method(Method::Table);
/// let y = sin_with(1.0f64, opts);
/// assert!((y - 1.0f64.sin()).abs() < 0.01);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Approx {
    accuracy: Option<Accuracy>,
    method: Method,
}

impl Approx {
    /// Return options with the default accuracy of the argument type and the
    /// polynomial method.
    pub fn new() -> Approx {
        Approx::default()
    }

    pub fn accuracy(mut self, accuracy: Accuracy) -> Approx {
        self.accuracy = Some(accuracy);
        self
    }

    pub fn method(mut self, method: Method) -> Approx {
        self.method = method;
        self
    }

    /// Return the accuracy to use when evaluating in type `T`.
    pub fn accuracy_for<T: Float>(&self) -> Accuracy {
        self.accuracy.unwrap_or_else(Accuracy::default_for::<T>)
    }

    pub fn get_method(&self) -> Method {
        self.method
    }
}

/// Speed/accuracy trade-off for [`tan_with`](crate::tan_with) and
/// [`atan_with`](crate::atan_with).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Speed {
    /// Low degree approximation.
    #[default]
    Fast,

    /// Higher degree approximation.
    Precise,
}
