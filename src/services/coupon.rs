//! Coupon service
//!
//! Creation, lifecycle, and application of discount codes.

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::{TrailheadError, TrailheadResult};
use crate::models::{Coupon, CouponId, Discount, Money};
use crate::storage::Storage;

/// Service for coupon management
pub struct CouponService<'a> {
    storage: &'a Storage,
}

impl<'a> CouponService<'a> {
    /// Create a new coupon service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new coupon
    pub fn create(
        &self,
        code: &str,
        discount: Discount,
        valid_from: NaiveDate,
        valid_until: NaiveDate,
        max_uses: Option<u32>,
    ) -> TrailheadResult<Coupon> {
        if self.storage.coupons.code_exists(code)? {
            return Err(TrailheadError::Duplicate {
                entity_type: "Coupon",
                identifier: code.trim().to_uppercase(),
            });
        }

        let mut coupon = Coupon::new(code, discount, valid_from, valid_until);
        coupon.max_uses = max_uses;

        coupon
            .validate()
            .map_err(|e| TrailheadError::Validation(e.to_string()))?;

        self.storage.coupons.upsert(coupon.clone())?;
        self.storage.coupons.save()?;

        self.storage.log_create(
            EntityType::Coupon,
            coupon.id.to_string(),
            Some(coupon.code.clone()),
            &coupon,
        )?;

        Ok(coupon)
    }

    /// Get a coupon by ID
    pub fn get(&self, id: CouponId) -> TrailheadResult<Option<Coupon>> {
        self.storage.coupons.get(id)
    }

    /// List all coupons
    pub fn list(&self) -> TrailheadResult<Vec<Coupon>> {
        self.storage.coupons.get_all()
    }

    /// Resolve a code and compute the discounted amount without redeeming
    ///
    /// Rejections (unknown, inactive, outside window, exhausted) map to
    /// distinct Coupon errors.
    pub fn preview(&self, code: &str, amount: Money, on: NaiveDate) -> TrailheadResult<Money> {
        let coupon = self
            .storage
            .coupons
            .get_by_code(code)?
            .ok_or_else(|| TrailheadError::coupon_not_found(code.trim().to_uppercase()))?;

        coupon
            .check(on)
            .map_err(|e| TrailheadError::Coupon(e.to_string()))?;

        Ok(coupon.apply(amount))
    }

    /// Apply a code to an amount and record the redemption
    ///
    /// Returns the discounted amount and the canonical (uppercased) code.
    pub fn redeem(&self, code: &str, amount: Money, on: NaiveDate) -> TrailheadResult<(Money, String)> {
        let mut coupon = self
            .storage
            .coupons
            .get_by_code(code)?
            .ok_or_else(|| TrailheadError::coupon_not_found(code.trim().to_uppercase()))?;

        coupon
            .check(on)
            .map_err(|e| TrailheadError::Coupon(e.to_string()))?;

        let discounted = coupon.apply(amount);
        coupon.redeem();

        let canonical = coupon.code.clone();
        self.storage.coupons.upsert(coupon)?;
        self.storage.coupons.save()?;

        Ok((discounted, canonical))
    }

    /// Deactivate a coupon
    pub fn deactivate(&self, id: CouponId) -> TrailheadResult<Coupon> {
        let before = self
            .storage
            .coupons
            .get(id)?
            .ok_or_else(|| TrailheadError::coupon_not_found(id.to_string()))?;

        let mut coupon = before.clone();
        coupon.deactivate();
        self.storage.coupons.upsert(coupon.clone())?;
        self.storage.coupons.save()?;

        self.storage.log_update(
            EntityType::Coupon,
            coupon.id.to_string(),
            Some(coupon.code.clone()),
            &before,
            &coupon,
        )?;

        Ok(coupon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TrailheadPaths;
    use tempfile::TempDir;

    fn test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrailheadPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_create_rejects_duplicate_code() {
        let (_temp_dir, storage) = test_storage();
        let service = CouponService::new(&storage);

        service
            .create("MONSOON15", Discount::Percent(15), date(2026, 6, 1), date(2026, 9, 30), None)
            .unwrap();

        let err = service
            .create("monsoon15", Discount::Percent(10), date(2026, 6, 1), date(2026, 9, 30), None)
            .unwrap_err();
        assert!(matches!(err, TrailheadError::Duplicate { .. }));
    }

    #[test]
    fn test_preview_does_not_consume_a_use() {
        let (_temp_dir, storage) = test_storage();
        let service = CouponService::new(&storage);

        let coupon = service
            .create("FLAT500", Discount::Flat(Money::from_minor(50_000)), date(2026, 1, 1), date(2026, 12, 31), Some(1))
            .unwrap();

        let amount = Money::from_minor(200_000);
        assert_eq!(
            service.preview("flat500", amount, date(2026, 7, 1)).unwrap(),
            Money::from_minor(150_000)
        );

        let stored = storage.coupons.get(coupon.id).unwrap().unwrap();
        assert_eq!(stored.times_used, 0);
    }

    #[test]
    fn test_redeem_counts_uses_and_exhausts() {
        let (_temp_dir, storage) = test_storage();
        let service = CouponService::new(&storage);

        service
            .create("ONEUSE", Discount::Percent(10), date(2026, 1, 1), date(2026, 12, 31), Some(1))
            .unwrap();

        let amount = Money::from_minor(100_000);
        let (discounted, canonical) = service.redeem("oneuse", amount, date(2026, 7, 1)).unwrap();
        assert_eq!(discounted, Money::from_minor(90_000));
        assert_eq!(canonical, "ONEUSE");

        let err = service.redeem("ONEUSE", amount, date(2026, 7, 2)).unwrap_err();
        assert!(matches!(err, TrailheadError::Coupon(_)));
    }

    #[test]
    fn test_unknown_code_is_not_found() {
        let (_temp_dir, storage) = test_storage();
        let service = CouponService::new(&storage);

        let err = service
            .preview("NOPE", Money::from_minor(100_000), date(2026, 7, 1))
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
