//! Discrepancy classification
//!
//! Classifies the cash-versus-TEF difference of an audit. The rule is the
//! single source of truth for both the one-shot result alert and the outcome
//! column of the history table, so the two can never disagree.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Symmetric tolerance band, in currency units, that absorbs rounding noise
/// around zero. The boundary values themselves classify as balanced.
pub const TOLERANCE: f64 = 0.005;

/// Outcome of a register audit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Discrepancy {
    /// Counted cash fell short of the electronic total
    Shortage,
    /// Counted cash exceeded the electronic total
    Overage,
    /// Counted cash and electronic total agree within tolerance
    Balanced,
}

impl Discrepancy {
    /// Classify a difference expressed in currency units
    ///
    /// Total over f64: `d < -0.005` is a shortage, `d > 0.005` an overage,
    /// everything else balanced.
    pub fn classify(difference: f64) -> Self {
        if difference < -TOLERANCE {
            Self::Shortage
        } else if difference > TOLERANCE {
            Self::Overage
        } else {
            Self::Balanced
        }
    }

    /// Classify a stored monetary difference
    pub fn of(difference: Money) -> Self {
        Self::classify(difference.to_units_f64())
    }

    /// Short uppercase label for table cells
    pub fn label(&self) -> &'static str {
        match self {
            Self::Shortage => "SHORTAGE",
            Self::Overage => "OVERAGE",
            Self::Balanced => "BALANCED",
        }
    }
}

impl fmt::Display for Discrepancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_partitions() {
        assert_eq!(Discrepancy::classify(-20.0), Discrepancy::Shortage);
        assert_eq!(Discrepancy::classify(-0.01), Discrepancy::Shortage);
        assert_eq!(Discrepancy::classify(0.0), Discrepancy::Balanced);
        assert_eq!(Discrepancy::classify(0.01), Discrepancy::Overage);
        assert_eq!(Discrepancy::classify(35.5), Discrepancy::Overage);
    }

    #[test]
    fn test_boundaries_are_balanced() {
        // Exclusive thresholds: the band edges classify as balanced
        assert_eq!(Discrepancy::classify(-0.005), Discrepancy::Balanced);
        assert_eq!(Discrepancy::classify(0.005), Discrepancy::Balanced);
        assert_eq!(Discrepancy::classify(-0.004), Discrepancy::Balanced);
        assert_eq!(Discrepancy::classify(0.004), Discrepancy::Balanced);
    }

    #[test]
    fn test_of_money() {
        assert_eq!(
            Discrepancy::of(Money::from_cents(-2000)),
            Discrepancy::Shortage
        );
        assert_eq!(Discrepancy::of(Money::from_cents(0)), Discrepancy::Balanced);
        assert_eq!(Discrepancy::of(Money::from_cents(1)), Discrepancy::Overage);
        assert_eq!(Discrepancy::of(Money::from_cents(-1)), Discrepancy::Shortage);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Discrepancy::Shortage.to_string(), "SHORTAGE");
        assert_eq!(Discrepancy::Overage.to_string(), "OVERAGE");
        assert_eq!(Discrepancy::Balanced.to_string(), "BALANCED");
    }
}
