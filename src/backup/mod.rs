//! Backup management
//!
//! Timestamped archives of the data directory with count-based retention,
//! plus restore.

pub mod manager;
pub mod restore;

pub use manager::{BackupInfo, BackupManager};
pub use restore::restore_backup;
