//! Vendor service
//!
//! Business logic for vendor onboarding and the admin verification queue.

use crate::audit::EntityType;
use crate::error::{TrailheadError, TrailheadResult};
use crate::models::{Vendor, VendorId, VerificationStatus};
use crate::storage::Storage;

/// Service for vendor management
pub struct VendorService<'a> {
    storage: &'a Storage,
}

/// A vendor with computed catalog counts
#[derive(Debug, Clone)]
pub struct VendorSummary {
    pub vendor: Vendor,
    /// Total treks owned by the vendor
    pub trek_count: usize,
    /// Treks currently bookable
    pub active_trek_count: usize,
}

impl<'a> VendorService<'a> {
    /// Create a new vendor service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Register a vendor produced by the registration wizard
    ///
    /// The vendor arrives in Pending state and enters the admin
    /// verification queue.
    pub fn register(&self, vendor: Vendor) -> TrailheadResult<Vendor> {
        vendor
            .validate()
            .map_err(|e| TrailheadError::Validation(e.to_string()))?;

        if self.storage.vendors.email_exists(&vendor.email, None)? {
            return Err(TrailheadError::Duplicate {
                entity_type: "Vendor",
                identifier: vendor.email.clone(),
            });
        }

        self.storage.vendors.upsert(vendor.clone())?;
        self.storage.vendors.save()?;

        self.storage.log_create(
            EntityType::Vendor,
            vendor.id.to_string(),
            Some(vendor.company_name.clone()),
            &vendor,
        )?;

        Ok(vendor)
    }

    /// Get a vendor by ID
    pub fn get(&self, id: VendorId) -> TrailheadResult<Option<Vendor>> {
        self.storage.vendors.get(id)
    }

    /// Find a vendor by company name or ID string
    pub fn find(&self, identifier: &str) -> TrailheadResult<Option<Vendor>> {
        if let Some(vendor) = self.storage.vendors.get_by_name(identifier)? {
            return Ok(Some(vendor));
        }

        if let Ok(id) = identifier.parse::<VendorId>() {
            return self.storage.vendors.get(id);
        }

        Ok(None)
    }

    /// List vendors, optionally including archived ones
    pub fn list(&self, include_archived: bool) -> TrailheadResult<Vec<Vendor>> {
        if include_archived {
            self.storage.vendors.get_all()
        } else {
            self.storage.vendors.get_active()
        }
    }

    /// List vendors awaiting verification
    pub fn list_pending(&self) -> TrailheadResult<Vec<Vendor>> {
        self.storage.vendors.get_pending()
    }

    /// Get a vendor with computed catalog counts
    pub fn get_summary(&self, vendor: &Vendor) -> TrailheadResult<VendorSummary> {
        let treks = self.storage.treks.get_by_vendor(vendor.id)?;
        let active_trek_count = treks.iter().filter(|t| t.active).count();

        Ok(VendorSummary {
            vendor: vendor.clone(),
            trek_count: treks.len(),
            active_trek_count,
        })
    }

    /// Approve a pending vendor
    pub fn verify(&self, id: VendorId) -> TrailheadResult<Vendor> {
        let before = self
            .storage
            .vendors
            .get(id)?
            .ok_or_else(|| TrailheadError::vendor_not_found(id.to_string()))?;

        let mut vendor = before.clone();
        vendor.verify();

        self.storage.vendors.upsert(vendor.clone())?;
        self.storage.vendors.save()?;

        self.storage.log_update(
            EntityType::Vendor,
            vendor.id.to_string(),
            Some(vendor.company_name.clone()),
            &before,
            &vendor,
        )?;

        Ok(vendor)
    }

    /// Reject a pending vendor with a reason
    pub fn reject(&self, id: VendorId, reason: &str) -> TrailheadResult<Vendor> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(TrailheadError::Validation(
                "A rejection reason is required".into(),
            ));
        }

        let before = self
            .storage
            .vendors
            .get(id)?
            .ok_or_else(|| TrailheadError::vendor_not_found(id.to_string()))?;

        let mut vendor = before.clone();
        vendor.reject(reason);

        self.storage.vendors.upsert(vendor.clone())?;
        self.storage.vendors.save()?;

        self.storage.log_update(
            EntityType::Vendor,
            vendor.id.to_string(),
            Some(vendor.company_name.clone()),
            &before,
            &vendor,
        )?;

        Ok(vendor)
    }

    /// Archive a vendor and deactivate its treks
    pub fn archive(&self, id: VendorId) -> TrailheadResult<Vendor> {
        let before = self
            .storage
            .vendors
            .get(id)?
            .ok_or_else(|| TrailheadError::vendor_not_found(id.to_string()))?;

        let mut vendor = before.clone();
        vendor.archive();
        self.storage.vendors.upsert(vendor.clone())?;
        self.storage.vendors.save()?;

        // An archived vendor's catalog must stop taking bookings
        for mut trek in self.storage.treks.get_by_vendor(id)? {
            if trek.active {
                trek.deactivate();
                self.storage.treks.upsert(trek)?;
            }
        }
        self.storage.treks.save()?;

        self.storage.log_update(
            EntityType::Vendor,
            vendor.id.to_string(),
            Some(vendor.company_name.clone()),
            &before,
            &vendor,
        )?;

        Ok(vendor)
    }

    /// Whether a vendor is allowed to list treks
    pub fn can_list_treks(&self, vendor: &Vendor) -> bool {
        vendor.verification == VerificationStatus::Verified && !vendor.archived
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TrailheadPaths;
    use crate::models::{Difficulty, Money, Trek};
    use tempfile::TempDir;

    fn test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrailheadPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn sample_vendor() -> Vendor {
        Vendor::new("Summit Trails", "Asha Rawat", "asha@summittrails.in")
    }

    #[test]
    fn test_register_and_verify() {
        let (_temp_dir, storage) = test_storage();
        let service = VendorService::new(&storage);

        let vendor = service.register(sample_vendor()).unwrap();
        assert!(vendor.verification.is_pending());
        assert_eq!(service.list_pending().unwrap().len(), 1);

        let verified = service.verify(vendor.id).unwrap();
        assert!(verified.verification.is_verified());
        assert!(service.list_pending().unwrap().is_empty());
    }

    #[test]
    fn test_register_rejects_duplicate_email() {
        let (_temp_dir, storage) = test_storage();
        let service = VendorService::new(&storage);

        service.register(sample_vendor()).unwrap();

        let mut other = Vendor::new("Other Co", "B", "asha@summittrails.in");
        other.email = "ASHA@summittrails.in".into();
        let err = service.register(other).unwrap_err();
        assert!(matches!(err, TrailheadError::Duplicate { .. }));
    }

    #[test]
    fn test_reject_requires_reason() {
        let (_temp_dir, storage) = test_storage();
        let service = VendorService::new(&storage);

        let vendor = service.register(sample_vendor()).unwrap();
        assert!(service.reject(vendor.id, "  ").is_err());

        let rejected = service.reject(vendor.id, "Documents unreadable").unwrap();
        assert!(matches!(
            rejected.verification,
            VerificationStatus::Rejected(_)
        ));
    }

    #[test]
    fn test_archive_deactivates_treks() {
        let (_temp_dir, storage) = test_storage();
        let service = VendorService::new(&storage);

        let vendor = service.register(sample_vendor()).unwrap();
        let trek = Trek::new(
            vendor.id,
            "Valley of Flowers",
            "Garhwal Himalaya",
            Difficulty::Moderate,
            6,
            Money::from_minor(1_450_000),
        );
        let trek_id = trek.id;
        storage.treks.upsert(trek).unwrap();

        service.archive(vendor.id).unwrap();

        let trek = storage.treks.get(trek_id).unwrap().unwrap();
        assert!(!trek.active);
    }

    #[test]
    fn test_verification_writes_audit_entries() {
        let (_temp_dir, storage) = test_storage();
        let service = VendorService::new(&storage);

        let vendor = service.register(sample_vendor()).unwrap();
        service.verify(vendor.id).unwrap();

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries[1].diff.as_deref().unwrap_or("").contains("verification"));
    }
}
