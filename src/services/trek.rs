//! Trek service
//!
//! Catalog management plus the in-memory filtering used by the catalog
//! views: rows are loaded in full and narrowed by region, difficulty,
//! price ceiling, and free-text query.

use crate::audit::EntityType;
use crate::error::{TrailheadError, TrailheadResult};
use crate::models::{Difficulty, Money, Trek, TrekId, VendorId};
use crate::storage::Storage;

use super::vendor::VendorService;

/// Filter applied in memory over the loaded catalog
#[derive(Debug, Clone, Default)]
pub struct TrekFilter {
    /// Only treks owned by this vendor
    pub vendor_id: Option<VendorId>,
    /// Case-insensitive region match
    pub region: Option<String>,
    /// Exact difficulty grade
    pub difficulty: Option<Difficulty>,
    /// Maximum per-seat price
    pub max_price: Option<Money>,
    /// Case-insensitive substring of the trek name
    pub query: Option<String>,
    /// Include deactivated treks
    pub include_inactive: bool,
}

impl TrekFilter {
    fn matches(&self, trek: &Trek) -> bool {
        if !self.include_inactive && !trek.active {
            return false;
        }
        if let Some(vendor_id) = self.vendor_id {
            if trek.vendor_id != vendor_id {
                return false;
            }
        }
        if let Some(ref region) = self.region {
            if !trek.region.eq_ignore_ascii_case(region) {
                return false;
            }
        }
        if let Some(difficulty) = self.difficulty {
            if trek.difficulty != difficulty {
                return false;
            }
        }
        if let Some(max_price) = self.max_price {
            if trek.price > max_price {
                return false;
            }
        }
        if let Some(ref query) = self.query {
            if !trek.name.to_lowercase().contains(&query.to_lowercase()) {
                return false;
            }
        }
        true
    }
}

/// Input for creating a trek
#[derive(Debug, Clone)]
pub struct CreateTrekInput {
    pub vendor_id: VendorId,
    pub name: String,
    pub region: String,
    pub difficulty: Difficulty,
    pub duration_days: u32,
    pub price: Money,
    pub description: String,
}

/// Service for trek catalog management
pub struct TrekService<'a> {
    storage: &'a Storage,
}

impl<'a> TrekService<'a> {
    /// Create a new trek service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a trek for a verified vendor
    pub fn create(&self, input: CreateTrekInput) -> TrailheadResult<Trek> {
        let vendor = self
            .storage
            .vendors
            .get(input.vendor_id)?
            .ok_or_else(|| TrailheadError::vendor_not_found(input.vendor_id.to_string()))?;

        let vendor_service = VendorService::new(self.storage);
        if !vendor_service.can_list_treks(&vendor) {
            return Err(TrailheadError::Validation(format!(
                "Vendor '{}' is not verified and cannot list treks",
                vendor.company_name
            )));
        }

        let name = input.name.trim();
        if self.storage.treks.name_exists(name, None)? {
            return Err(TrailheadError::Duplicate {
                entity_type: "Trek",
                identifier: name.to_string(),
            });
        }

        let mut trek = Trek::new(
            input.vendor_id,
            name,
            input.region.trim(),
            input.difficulty,
            input.duration_days,
            input.price,
        );
        trek.description = input.description;

        trek.validate()
            .map_err(|e| TrailheadError::Validation(e.to_string()))?;

        self.storage.treks.upsert(trek.clone())?;
        self.storage.treks.save()?;

        self.storage.log_create(
            EntityType::Trek,
            trek.id.to_string(),
            Some(trek.name.clone()),
            &trek,
        )?;

        Ok(trek)
    }

    /// Get a trek by ID
    pub fn get(&self, id: TrekId) -> TrailheadResult<Option<Trek>> {
        self.storage.treks.get(id)
    }

    /// Find a trek by name or ID string
    pub fn find(&self, identifier: &str) -> TrailheadResult<Option<Trek>> {
        if let Some(trek) = self.storage.treks.get_by_name(identifier)? {
            return Ok(Some(trek));
        }

        if let Ok(id) = identifier.parse::<TrekId>() {
            return self.storage.treks.get(id);
        }

        Ok(None)
    }

    /// List treks matching a filter
    pub fn list(&self, filter: &TrekFilter) -> TrailheadResult<Vec<Trek>> {
        let all = self.storage.treks.get_all()?;
        Ok(all.into_iter().filter(|t| filter.matches(t)).collect())
    }

    /// Update mutable trek fields
    pub fn update(
        &self,
        id: TrekId,
        price: Option<Money>,
        description: Option<String>,
    ) -> TrailheadResult<Trek> {
        let before = self
            .storage
            .treks
            .get(id)?
            .ok_or_else(|| TrailheadError::trek_not_found(id.to_string()))?;

        let mut trek = before.clone();
        if let Some(price) = price {
            trek.price = price;
        }
        if let Some(description) = description {
            trek.description = description;
        }
        trek.updated_at = chrono::Utc::now();

        trek.validate()
            .map_err(|e| TrailheadError::Validation(e.to_string()))?;

        self.storage.treks.upsert(trek.clone())?;
        self.storage.treks.save()?;

        self.storage.log_update(
            EntityType::Trek,
            trek.id.to_string(),
            Some(trek.name.clone()),
            &before,
            &trek,
        )?;

        Ok(trek)
    }

    /// Deactivate a trek (existing batches stay, no new bookings)
    pub fn deactivate(&self, id: TrekId) -> TrailheadResult<Trek> {
        let before = self
            .storage
            .treks
            .get(id)?
            .ok_or_else(|| TrailheadError::trek_not_found(id.to_string()))?;

        let mut trek = before.clone();
        trek.deactivate();
        self.storage.treks.upsert(trek.clone())?;
        self.storage.treks.save()?;

        self.storage.log_update(
            EntityType::Trek,
            trek.id.to_string(),
            Some(trek.name.clone()),
            &before,
            &trek,
        )?;

        Ok(trek)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TrailheadPaths;
    use crate::models::Vendor;
    use tempfile::TempDir;

    fn test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrailheadPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn verified_vendor(storage: &Storage) -> Vendor {
        let mut vendor = Vendor::new("Summit Trails", "Asha Rawat", "asha@summittrails.in");
        vendor.verify();
        storage.vendors.upsert(vendor.clone()).unwrap();
        vendor
    }

    fn input(vendor_id: VendorId, name: &str, region: &str, price: i64) -> CreateTrekInput {
        CreateTrekInput {
            vendor_id,
            name: name.into(),
            region: region.into(),
            difficulty: Difficulty::Moderate,
            duration_days: 6,
            price: Money::from_minor(price),
            description: String::new(),
        }
    }

    #[test]
    fn test_create_requires_verified_vendor() {
        let (_temp_dir, storage) = test_storage();
        let service = TrekService::new(&storage);

        let pending = Vendor::new("Pending Co", "B", "b@example.com");
        let pending_id = pending.id;
        storage.vendors.upsert(pending).unwrap();

        let err = service
            .create(input(pending_id, "Valley of Flowers", "Garhwal", 1_450_000))
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_create_and_duplicate_name() {
        let (_temp_dir, storage) = test_storage();
        let service = TrekService::new(&storage);
        let vendor = verified_vendor(&storage);

        service
            .create(input(vendor.id, "Valley of Flowers", "Garhwal", 1_450_000))
            .unwrap();

        let err = service
            .create(input(vendor.id, "valley of flowers", "Garhwal", 1_450_000))
            .unwrap_err();
        assert!(matches!(err, TrailheadError::Duplicate { .. }));
    }

    #[test]
    fn test_filter_by_region_price_and_query() {
        let (_temp_dir, storage) = test_storage();
        let service = TrekService::new(&storage);
        let vendor = verified_vendor(&storage);

        service
            .create(input(vendor.id, "Valley of Flowers", "Garhwal", 1_450_000))
            .unwrap();
        service
            .create(input(vendor.id, "Kedarkantha", "Garhwal", 900_000))
            .unwrap();
        service
            .create(input(vendor.id, "Sandakphu", "Singalila", 1_100_000))
            .unwrap();

        let by_region = service
            .list(&TrekFilter {
                region: Some("garhwal".into()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(by_region.len(), 2);

        let cheap = service
            .list(&TrekFilter {
                max_price: Some(Money::from_minor(1_000_000)),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(cheap.len(), 1);
        assert_eq!(cheap[0].name, "Kedarkantha");

        let by_query = service
            .list(&TrekFilter {
                query: Some("flow".into()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(by_query.len(), 1);
    }

    #[test]
    fn test_filter_excludes_inactive_by_default() {
        let (_temp_dir, storage) = test_storage();
        let service = TrekService::new(&storage);
        let vendor = verified_vendor(&storage);

        let trek = service
            .create(input(vendor.id, "Valley of Flowers", "Garhwal", 1_450_000))
            .unwrap();
        service.deactivate(trek.id).unwrap();

        assert!(service.list(&TrekFilter::default()).unwrap().is_empty());

        let with_inactive = service
            .list(&TrekFilter {
                include_inactive: true,
                ..Default::default()
            })
            .unwrap();
        assert_eq!(with_inactive.len(), 1);
    }
}
