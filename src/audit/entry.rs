//! Audit entry data structures
//!
//! Defines the structure of audit log entries including operation types,
//! entity types, and the entry format itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Entity was created
    Create,
    /// Entity was updated
    Update,
    /// Entity was deleted
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// Types of entities that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Vendor,
    Trek,
    Batch,
    Booking,
    Coupon,
    Ticket,
    Banner,
    Announcement,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Vendor => write!(f, "Vendor"),
            EntityType::Trek => write!(f, "Trek"),
            EntityType::Batch => write!(f, "Batch"),
            EntityType::Booking => write!(f, "Booking"),
            EntityType::Coupon => write!(f, "Coupon"),
            EntityType::Ticket => write!(f, "Ticket"),
            EntityType::Banner => write!(f, "Banner"),
            EntityType::Announcement => write!(f, "Announcement"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation happened
    pub timestamp: DateTime<Utc>,

    /// What kind of operation
    pub operation: Operation,

    /// What kind of entity
    pub entity_type: EntityType,

    /// The entity's ID (display form)
    pub entity_id: String,

    /// Human-readable label for the entity (e.g. company name)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_label: Option<String>,

    /// Snapshot of the entity before the operation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// Snapshot of the entity after the operation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Human-readable field-level diff for updates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diff: Option<String>,
}

impl AuditEntry {
    /// Build an entry for a create operation
    pub fn create<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_label: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            entity_type,
            entity_id: entity_id.into(),
            entity_label,
            before: None,
            after: serde_json::to_value(entity).ok(),
            diff: None,
        }
    }

    /// Build an entry for an update operation
    pub fn update<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_label: Option<String>,
        before: &T,
        after: &T,
        diff: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Update,
            entity_type,
            entity_id: entity_id.into(),
            entity_label,
            before: serde_json::to_value(before).ok(),
            after: serde_json::to_value(after).ok(),
            diff,
        }
    }

    /// Build an entry for a delete operation
    pub fn delete<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_label: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            entity_type,
            entity_id: entity_id.into(),
            entity_label,
            before: serde_json::to_value(entity).ok(),
            after: None,
            diff: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_entry() {
        let entry = AuditEntry::create(
            EntityType::Vendor,
            "ven-12345678",
            Some("Summit Trails".into()),
            &json!({"company_name": "Summit Trails"}),
        );
        assert_eq!(entry.operation, Operation::Create);
        assert!(entry.before.is_none());
        assert!(entry.after.is_some());
    }

    #[test]
    fn test_entry_serializes_to_single_line() {
        let entry = AuditEntry::delete(
            EntityType::Coupon,
            "cpn-12345678",
            None,
            &json!({"code": "MONSOON15"}),
        );
        let line = serde_json::to_string(&entry).unwrap();
        assert!(!line.contains('\n'));
    }

    #[test]
    fn test_display() {
        assert_eq!(Operation::Update.to_string(), "UPDATE");
        assert_eq!(EntityType::Announcement.to_string(), "Announcement");
    }
}
