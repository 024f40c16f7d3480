//! Audit logging system for Trailhead
//!
//! Records admin-console mutations (vendor verification, coupon lifecycle,
//! content changes) with before/after values in an append-only JSONL log.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
