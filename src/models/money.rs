//! Money type for representing prices and booking amounts
//!
//! Internally stores amounts in minor units (i64) to avoid floating-point
//! precision issues. Provides safe arithmetic operations and formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A monetary amount stored in minor units (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from minor units
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in minor units
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Get the whole-unit portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the fractional portion (0-99)
    pub const fn fraction(&self) -> i64 {
        (self.0 % 100).abs()
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

    /// Multiply by a whole count (e.g. price per seat times participants)
    pub const fn times(&self, count: u32) -> Self {
        Self(self.0 * count as i64)
    }

    /// Take a percentage of this amount, rounding down
    pub const fn percent(&self, pct: u8) -> Self {
        Self(self.0 * pct as i64 / 100)
    }

    /// Subtract `other`, clamping at zero instead of going negative
    pub fn saturating_sub(&self, other: Money) -> Self {
        Self((self.0 - other.0).max(0))
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "1500", "1500.50", "₹1500.50", "$25"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, s) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };

        // Strip a leading currency symbol if present
        let s = s
            .strip_prefix('₹')
            .or_else(|| s.strip_prefix('$'))
            .unwrap_or(s);

        let minor = if let Some((units_str, frac_str)) = s.split_once('.') {
            let units: i64 = units_str
                .parse()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

            // Pad or truncate the fraction to 2 digits
            let frac: i64 = match frac_str.len() {
                0 => 0,
                1 => {
                    frac_str
                        .parse::<i64>()
                        .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                        * 10
                }
                _ => frac_str[..2]
                    .parse()
                    .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?,
            };

            units * 100 + frac
        } else {
            // Integer format - assume whole units
            s.parse::<i64>()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                * 100
        };

        Ok(Self(if negative { -minor } else { minor }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.units().abs(), self.fraction())
        } else {
            format!("{}{}.{:02}", symbol, self.units(), self.fraction())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.units().abs(), self.fraction())
        } else {
            write!(f, "{}.{:02}", self.units(), self.fraction())
        }
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.0 -= rhs.0;
    }
}

/// Errors from parsing a money string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(s) => write!(f, "Invalid money format: '{}'", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minor() {
        let m = Money::from_minor(150050);
        assert_eq!(m.units(), 1500);
        assert_eq!(m.fraction(), 50);
    }

    #[test]
    fn test_parse_formats() {
        assert_eq!(Money::parse("1500").unwrap(), Money::from_minor(150000));
        assert_eq!(Money::parse("1500.50").unwrap(), Money::from_minor(150050));
        assert_eq!(Money::parse("₹1500.5").unwrap(), Money::from_minor(150050));
        assert_eq!(Money::parse("$25").unwrap(), Money::from_minor(2500));
        assert_eq!(Money::parse("-10.25").unwrap(), Money::from_minor(-1025));
        assert!(Money::parse("abc").is_err());
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_minor(1000);
        let b = Money::from_minor(250);
        assert_eq!(a + b, Money::from_minor(1250));
        assert_eq!(a - b, Money::from_minor(750));
        assert_eq!(a.times(3), Money::from_minor(3000));
    }

    #[test]
    fn test_percent() {
        let m = Money::from_minor(10000);
        assert_eq!(m.percent(10), Money::from_minor(1000));
        assert_eq!(m.percent(100), m);
        assert_eq!(m.percent(0), Money::zero());
    }

    #[test]
    fn test_saturating_sub() {
        let a = Money::from_minor(500);
        let b = Money::from_minor(800);
        assert_eq!(a.saturating_sub(b), Money::zero());
        assert_eq!(b.saturating_sub(a), Money::from_minor(300));
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_minor(150050).to_string(), "1500.50");
        assert_eq!(Money::from_minor(-1025).to_string(), "-10.25");
        assert_eq!(
            Money::from_minor(9900).format_with_symbol("₹"),
            "₹99.00"
        );
    }
}
