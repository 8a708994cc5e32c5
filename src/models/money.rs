//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Formatting follows the regional convention of the deployment
//! (period for thousands, comma for decimals: "R$ 1.234,56").

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole units and cents
    pub const fn from_units_cents(units: i64, cents: i64) -> Self {
        Self(units * 100 + cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole-unit portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// The amount in currency units as an f64 (e.g. -2000 cents -> -20.0)
    ///
    /// Used where the classification rule is defined over real currency
    /// values rather than integer cents.
    pub fn to_units_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Parse a money amount from a plain decimal string
    ///
    /// Accepts formats: "10.50", "-10.50", "10", "0.05"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        let cents = if s.contains('.') {
            let parts: Vec<&str> = s.split('.').collect();
            if parts.len() != 2 {
                return Err(MoneyParseError::InvalidFormat(s.to_string()));
            }

            let units: i64 = parts[0]
                .parse()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

            // Pad or truncate the fractional part to 2 digits
            let cents_str = parts[1];
            let cents: i64 = match cents_str.len() {
                0 => 0,
                1 => {
                    cents_str
                        .parse::<i64>()
                        .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                        * 10
                }
                _ => cents_str[..2]
                    .parse()
                    .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?,
            };

            units * 100 + cents
        } else {
            // Integer format, assume whole currency units
            s.parse::<i64>()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                * 100
        };

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Parse a money amount written in the regional grouped convention
    ///
    /// Accepts "R$ 1.234,56", "1.234,56", "-R$ 20,00" and plain "1234,56".
    /// Also falls back to the plain decimal format so both styles round-trip.
    pub fn parse_grouped(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped.trim_start())
        } else {
            (false, s)
        };

        // Strip a currency-symbol prefix such as "R$ "
        let s = s
            .trim_start_matches(|c: char| !c.is_ascii_digit() && c != ',' && c != '.')
            .trim();

        if s.is_empty() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let normalized = if s.contains(',') {
            // Grouped convention: '.' groups thousands, ',' separates decimals
            s.replace('.', "").replace(',', ".")
        } else {
            s.to_string()
        };

        let parsed = Self::parse(&normalized)?;
        Ok(if negative { -parsed } else { parsed })
    }

    /// Format in the regional grouped convention with a currency symbol
    ///
    /// `Money::from_cents(123_456).format_grouped("R$")` yields "R$ 1.234,56".
    pub fn format_grouped(&self, symbol: &str) -> String {
        let units = self.units().abs().to_string();

        let mut grouped = String::with_capacity(units.len() + units.len() / 3);
        for (i, ch) in units.chars().enumerate() {
            if i > 0 && (units.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }

        format!(
            "{}{} {},{:02}",
            if self.is_negative() { "-" } else { "" },
            symbol,
            grouped,
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_grouped("R$"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.units(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_from_units_cents() {
        let m = Money::from_units_cents(10, 50);
        assert_eq!(m.cents(), 1050);
    }

    #[test]
    fn test_display_regional() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "R$ 10,50");
        assert_eq!(format!("{}", Money::from_cents(0)), "R$ 0,00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-R$ 10,50");
        assert_eq!(format!("{}", Money::from_cents(5)), "R$ 0,05");
    }

    #[test]
    fn test_format_grouped_thousands() {
        assert_eq!(Money::from_cents(123_456).format_grouped("R$"), "R$ 1.234,56");
        assert_eq!(
            Money::from_cents(123_456_789).format_grouped("R$"),
            "R$ 1.234.567,89"
        );
        assert_eq!(Money::from_cents(-2000).format_grouped("R$"), "-R$ 20,00");
        assert_eq!(Money::from_cents(99).format_grouped("R$"), "R$ 0,99");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_parse_plain() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert!(Money::parse("abc").is_err());
    }

    #[test]
    fn test_parse_grouped() {
        assert_eq!(Money::parse_grouped("R$ 1.234,56").unwrap().cents(), 123_456);
        assert_eq!(Money::parse_grouped("1.234,56").unwrap().cents(), 123_456);
        assert_eq!(Money::parse_grouped("-R$ 20,00").unwrap().cents(), -2000);
        assert_eq!(Money::parse_grouped("1234,56").unwrap().cents(), 123_456);
        assert_eq!(Money::parse_grouped("R$ 0,99").unwrap().cents(), 99);
        // Plain decimal still accepted
        assert_eq!(Money::parse_grouped("100.00").unwrap().cents(), 10_000);
    }

    #[test]
    fn test_grouped_round_trip() {
        for cents in [0, 5, 99, 100, 2000, 123_456, 123_456_789, -2000, -123_456] {
            let m = Money::from_cents(cents);
            let formatted = m.format_grouped("R$");
            assert_eq!(Money::parse_grouped(&formatted).unwrap(), m, "{}", formatted);
        }
    }

    #[test]
    fn test_to_units_f64() {
        assert_eq!(Money::from_cents(-2000).to_units_f64(), -20.0);
        assert_eq!(Money::from_cents(1).to_units_f64(), 0.01);
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
