//! Exact note durations
//!
//! Durations are measured in quarter lengths (one quarter note = 1) and kept
//! as rationals so that repeated splitting and stealing of time stays exact.

use num_rational::Rational32;
use serde::{Deserialize, Serialize};

/// Rational type used for all duration arithmetic
pub type Rational = Rational32;

/// A duration expressed in quarter lengths
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Duration {
    /// Length in quarter notes
    pub quarter_length: Rational,
}

impl Duration {
    /// Create a duration from a quarter length
    pub fn from_quarter_length(quarter_length: Rational) -> Self {
        Self { quarter_length }
    }

    /// Whole note (4 quarters)
    pub fn whole() -> Self {
        Self::from_quarter_length(Rational::from_integer(4))
    }

    /// Half note
    pub fn half() -> Self {
        Self::from_quarter_length(Rational::from_integer(2))
    }

    /// Quarter note
    pub fn quarter() -> Self {
        Self::from_quarter_length(Rational::from_integer(1))
    }

    /// Eighth note
    pub fn eighth() -> Self {
        Self::from_quarter_length(Rational::new(1, 2))
    }

    /// Sixteenth note
    pub fn sixteenth() -> Self {
        Self::from_quarter_length(Rational::new(1, 4))
    }

    /// Thirty-second note
    pub fn thirty_second() -> Self {
        Self::from_quarter_length(Rational::new(1, 8))
    }

    /// Sixty-fourth note
    pub fn sixty_fourth() -> Self {
        Self::from_quarter_length(Rational::new(1, 16))
    }

    /// Whether the duration is zero
    pub fn is_zero(&self) -> bool {
        self.quarter_length == Rational::from_integer(0)
    }
}

impl Default for Duration {
    fn default() -> Self {
        Self::quarter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_values() {
        assert_eq!(Duration::whole().quarter_length, Rational::from_integer(4));
        assert_eq!(Duration::eighth().quarter_length, Rational::new(1, 2));
        assert_eq!(Duration::thirty_second().quarter_length, Rational::new(1, 8));
    }

    #[test]
    fn test_exact_arithmetic() {
        let third = Rational::new(1, 3);
        assert_eq!(third + third + third, Rational::from_integer(1));
    }

    #[test]
    fn test_is_zero() {
        assert!(Duration::from_quarter_length(Rational::from_integer(0)).is_zero());
        assert!(!Duration::sixty_fourth().is_zero());
    }
}
