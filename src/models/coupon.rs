//! Coupon model
//!
//! Admin-managed discount codes applied at booking time.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CouponId;
use super::money::Money;

/// Discount carried by a coupon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "value")]
pub enum Discount {
    /// Percentage off the booking amount (1-100)
    Percent(u8),
    /// Flat amount off, clamped at the booking amount
    Flat(Money),
}

impl fmt::Display for Discount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percent(pct) => write!(f, "{}% off", pct),
            Self::Flat(amount) => write!(f, "{} off", amount),
        }
    }
}

/// Why a coupon cannot be applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CouponRejection {
    Inactive,
    NotYetValid,
    Expired,
    Exhausted,
}

impl fmt::Display for CouponRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inactive => write!(f, "Coupon is inactive"),
            Self::NotYetValid => write!(f, "Coupon is not valid yet"),
            Self::Expired => write!(f, "Coupon has expired"),
            Self::Exhausted => write!(f, "Coupon usage limit reached"),
        }
    }
}

/// An admin-managed discount code
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coupon {
    /// Unique identifier
    pub id: CouponId,

    /// Code entered at booking time (stored uppercase)
    pub code: String,

    /// Discount applied
    pub discount: Discount,

    /// First day the code is valid
    pub valid_from: NaiveDate,

    /// Last day the code is valid
    pub valid_until: NaiveDate,

    /// Maximum redemptions; None means unlimited
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_uses: Option<u32>,

    /// Redemptions so far
    #[serde(default)]
    pub times_used: u32,

    /// Whether the code can currently be applied
    #[serde(default = "default_active")]
    pub active: bool,

    /// When the coupon was created
    pub created_at: DateTime<Utc>,
}

fn default_active() -> bool {
    true
}

impl Coupon {
    /// Create a new active coupon
    pub fn new(
        code: impl Into<String>,
        discount: Discount,
        valid_from: NaiveDate,
        valid_until: NaiveDate,
    ) -> Self {
        Self {
            id: CouponId::new(),
            code: code.into().trim().to_uppercase(),
            discount,
            valid_from,
            valid_until,
            max_uses: None,
            times_used: 0,
            active: true,
            created_at: Utc::now(),
        }
    }

    /// Check whether the coupon can be applied on the given date
    pub fn check(&self, on: NaiveDate) -> Result<(), CouponRejection> {
        if !self.active {
            return Err(CouponRejection::Inactive);
        }
        if on < self.valid_from {
            return Err(CouponRejection::NotYetValid);
        }
        if on > self.valid_until {
            return Err(CouponRejection::Expired);
        }
        if let Some(max) = self.max_uses {
            if self.times_used >= max {
                return Err(CouponRejection::Exhausted);
            }
        }
        Ok(())
    }

    /// Amount after applying this discount; never negative
    pub fn apply(&self, amount: Money) -> Money {
        match self.discount {
            Discount::Percent(pct) => amount.saturating_sub(amount.percent(pct)),
            Discount::Flat(flat) => amount.saturating_sub(flat),
        }
    }

    /// Record one redemption
    pub fn redeem(&mut self) {
        self.times_used += 1;
    }

    /// Deactivate the coupon
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Validate the coupon
    pub fn validate(&self) -> Result<(), CouponValidationError> {
        if self.code.trim().is_empty() {
            return Err(CouponValidationError::EmptyCode);
        }
        if self.valid_until < self.valid_from {
            return Err(CouponValidationError::WindowEndsBeforeStart);
        }
        if let Discount::Percent(pct) = self.discount {
            if pct == 0 || pct > 100 {
                return Err(CouponValidationError::PercentOutOfRange(pct));
            }
        }
        Ok(())
    }
}

impl fmt::Display for Coupon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code, self.discount)
    }
}

/// Validation errors for coupons
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CouponValidationError {
    EmptyCode,
    WindowEndsBeforeStart,
    PercentOutOfRange(u8),
}

impl fmt::Display for CouponValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCode => write!(f, "Coupon code cannot be empty"),
            Self::WindowEndsBeforeStart => {
                write!(f, "Coupon validity window ends before it starts")
            }
            Self::PercentOutOfRange(pct) => {
                write!(f, "Percent discount out of range (1-100): {}", pct)
            }
        }
    }
}

impl std::error::Error for CouponValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_coupon() -> Coupon {
        Coupon::new(
            "monsoon20",
            Discount::Percent(20),
            date(2026, 6, 1),
            date(2026, 9, 30),
        )
    }

    #[test]
    fn test_code_is_uppercased() {
        let coupon = sample_coupon();
        assert_eq!(coupon.code, "MONSOON20");
    }

    #[test]
    fn test_check_window() {
        let coupon = sample_coupon();
        assert!(coupon.check(date(2026, 7, 15)).is_ok());
        assert_eq!(
            coupon.check(date(2026, 5, 31)),
            Err(CouponRejection::NotYetValid)
        );
        assert_eq!(
            coupon.check(date(2026, 10, 1)),
            Err(CouponRejection::Expired)
        );
    }

    #[test]
    fn test_check_exhausted_and_inactive() {
        let mut coupon = sample_coupon();
        coupon.max_uses = Some(1);
        coupon.redeem();
        assert_eq!(
            coupon.check(date(2026, 7, 15)),
            Err(CouponRejection::Exhausted)
        );

        coupon.times_used = 0;
        coupon.deactivate();
        assert_eq!(
            coupon.check(date(2026, 7, 15)),
            Err(CouponRejection::Inactive)
        );
    }

    #[test]
    fn test_apply_percent() {
        let coupon = sample_coupon();
        let amount = Money::from_minor(100_000);
        assert_eq!(coupon.apply(amount), Money::from_minor(80_000));
    }

    #[test]
    fn test_apply_flat_clamps_at_zero() {
        let coupon = Coupon::new(
            "FLAT500",
            Discount::Flat(Money::from_minor(50_000)),
            date(2026, 1, 1),
            date(2026, 12, 31),
        );
        assert_eq!(
            coupon.apply(Money::from_minor(80_000)),
            Money::from_minor(30_000)
        );
        assert_eq!(coupon.apply(Money::from_minor(20_000)), Money::zero());
    }

    #[test]
    fn test_validation() {
        let mut coupon = sample_coupon();
        assert!(coupon.validate().is_ok());

        coupon.discount = Discount::Percent(0);
        assert_eq!(
            coupon.validate(),
            Err(CouponValidationError::PercentOutOfRange(0))
        );

        coupon.discount = Discount::Percent(20);
        coupon.valid_until = date(2026, 1, 1);
        assert_eq!(
            coupon.validate(),
            Err(CouponValidationError::WindowEndsBeforeStart)
        );
    }
}
