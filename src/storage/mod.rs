//! Storage layer for Trailhead
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. Rows are loaded fully into memory; all filtering and sorting
//! happens in memory.

pub mod announcements;
pub mod banners;
pub mod batches;
pub mod bookings;
pub mod coupons;
pub mod file_io;
pub mod init;
pub mod tickets;
pub mod treks;
pub mod vendors;

pub use announcements::AnnouncementRepository;
pub use banners::BannerRepository;
pub use batches::BatchRepository;
pub use bookings::BookingRepository;
pub use coupons::CouponRepository;
pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;
pub use tickets::TicketRepository;
pub use treks::TrekRepository;
pub use vendors::VendorRepository;

use serde::Serialize;

use crate::audit::{generate_diff, AuditEntry, AuditLogger, EntityType};
use crate::config::paths::TrailheadPaths;
use crate::error::TrailheadError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: TrailheadPaths,
    audit: AuditLogger,
    pub vendors: VendorRepository,
    pub treks: TrekRepository,
    pub batches: BatchRepository,
    pub bookings: BookingRepository,
    pub coupons: CouponRepository,
    pub tickets: TicketRepository,
    pub banners: BannerRepository,
    pub announcements: AnnouncementRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: TrailheadPaths) -> Result<Self, TrailheadError> {
        paths.ensure_directories()?;

        Ok(Self {
            vendors: VendorRepository::new(paths.vendors_file()),
            treks: TrekRepository::new(paths.treks_file()),
            batches: BatchRepository::new(paths.batches_file()),
            bookings: BookingRepository::new(paths.bookings_file()),
            coupons: CouponRepository::new(paths.coupons_file()),
            tickets: TicketRepository::new(paths.tickets_file()),
            banners: BannerRepository::new(paths.banners_file()),
            announcements: AnnouncementRepository::new(paths.announcements_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &TrailheadPaths {
        &self.paths
    }

    /// Access the audit logger directly
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), TrailheadError> {
        self.vendors.load()?;
        self.treks.load()?;
        self.batches.load()?;
        self.bookings.load()?;
        self.coupons.load()?;
        self.tickets.load()?;
        self.banners.load()?;
        self.announcements.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), TrailheadError> {
        self.vendors.save()?;
        self.treks.save()?;
        self.batches.save()?;
        self.bookings.save()?;
        self.coupons.save()?;
        self.tickets.save()?;
        self.banners.save()?;
        self.announcements.save()?;
        Ok(())
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.settings_file().exists()
    }

    /// Record a create operation in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_label: Option<String>,
        entity: &T,
    ) -> Result<(), TrailheadError> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity_label, entity))
    }

    /// Record an update operation with a field-level diff in the audit log
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_label: Option<String>,
        before: &T,
        after: &T,
    ) -> Result<(), TrailheadError> {
        let diff = match (serde_json::to_value(before), serde_json::to_value(after)) {
            (Ok(b), Ok(a)) => generate_diff(&b, &a),
            _ => None,
        };
        self.audit.log(&AuditEntry::update(
            entity_type,
            entity_id,
            entity_label,
            before,
            after,
            diff,
        ))
    }

    /// Record a delete operation in the audit log
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_label: Option<String>,
        entity: &T,
    ) -> Result<(), TrailheadError> {
        self.audit
            .log(&AuditEntry::delete(entity_type, entity_id, entity_label, entity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrailheadPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(temp_dir.path().join("backups").exists());
        assert!(!storage.is_initialized());
    }

    #[test]
    fn test_load_all_on_empty_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrailheadPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();

        storage.load_all().unwrap();
        assert_eq!(storage.vendors.count().unwrap(), 0);
        assert_eq!(storage.bookings.count().unwrap(), 0);
    }
}
