//! Static document slot catalog
//!
//! The Documents step renders a fixed list of labeled upload slots. File
//! capture is not wired up; a slot only records whether it was marked
//! selected and an optional free-text reference.

use crate::models::DocumentRecord;

/// One slot in the document catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentSlot {
    /// Stable key stored on the vendor record
    pub key: &'static str,
    /// Label shown in the form
    pub label: &'static str,
    /// Whether the slot must be marked before submission
    pub required: bool,
}

/// The fixed catalog of document slots, in display order
pub const DOCUMENT_SLOTS: &[DocumentSlot] = &[
    DocumentSlot {
        key: "pan_card",
        label: "PAN Card",
        required: true,
    },
    DocumentSlot {
        key: "company_registration",
        label: "Company Registration Certificate",
        required: true,
    },
    DocumentSlot {
        key: "cancelled_cheque",
        label: "Cancelled Cheque",
        required: true,
    },
    DocumentSlot {
        key: "owner_id_proof",
        label: "Owner ID Proof",
        required: true,
    },
    DocumentSlot {
        key: "gst_certificate",
        label: "GST Certificate",
        required: false,
    },
    DocumentSlot {
        key: "brochure",
        label: "Company Brochure",
        required: false,
    },
];

/// Look up a slot by key
pub fn slot(key: &str) -> Option<&'static DocumentSlot> {
    DOCUMENT_SLOTS.iter().find(|s| s.key == key)
}

/// Keys of all required slots
pub fn required_keys() -> impl Iterator<Item = &'static str> {
    DOCUMENT_SLOTS.iter().filter(|s| s.required).map(|s| s.key)
}

/// An unselected record for every slot in the catalog
pub fn empty_records() -> Vec<DocumentRecord> {
    DOCUMENT_SLOTS
        .iter()
        .map(|s| DocumentRecord {
            slot: s.key.to_string(),
            selected: false,
            reference: None,
        })
        .collect()
}

/// Check that every required slot is marked selected in `records`
///
/// Returns the labels of missing required slots.
pub fn missing_required(records: &[DocumentRecord]) -> Vec<&'static str> {
    DOCUMENT_SLOTS
        .iter()
        .filter(|s| s.required)
        .filter(|s| {
            !records
                .iter()
                .any(|r| r.slot == s.key && r.selected)
        })
        .map(|s| s.label)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_required_and_optional_slots() {
        assert!(DOCUMENT_SLOTS.iter().any(|s| s.required));
        assert!(DOCUMENT_SLOTS.iter().any(|s| !s.required));
        assert_eq!(required_keys().count(), 4);
    }

    #[test]
    fn test_slot_lookup() {
        assert_eq!(slot("pan_card").map(|s| s.label), Some("PAN Card"));
        assert!(slot("passport").is_none());
    }

    #[test]
    fn test_missing_required() {
        let mut records = empty_records();
        assert_eq!(missing_required(&records).len(), 4);

        for record in records.iter_mut() {
            record.selected = true;
        }
        assert!(missing_required(&records).is_empty());
    }
}
