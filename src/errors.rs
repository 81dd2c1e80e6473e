//! Error types returned when configuring approximations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use trigon_base::coeffs::MAX_ACCURACY;

/// Error when constructing an [`Accuracy`](crate::Accuracy) from a level
/// outside the supported range.
#[derive(Clone, Debug, PartialEq)]
pub enum AccuracyError {
    /// The level exceeds the highest supported accuracy.
    LevelTooHigh(u8),
}

impl Display for AccuracyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AccuracyError::LevelTooHigh(level) => write!(
                f,
                "accuracy level {} exceeds maximum of {}",
                level, MAX_ACCURACY
            ),
        }
    }
}

impl Error for AccuracyError {}

#[cfg(test)]
mod tests {
    use super::AccuracyError;

    #[test]
    fn test_display() {
        assert_eq!(
            AccuracyError::LevelTooHigh(12).to_string(),
            "accuracy level 12 exceeds maximum of 10"
        );
    }
}
