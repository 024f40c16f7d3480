//! Vendor model
//!
//! Represents trek operators registered on the marketplace, including the
//! details collected by the registration wizard and the admin verification
//! state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::VendorId;

/// Admin verification state of a vendor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", tag = "state", content = "reason")]
pub enum VerificationStatus {
    /// Awaiting admin review
    #[default]
    Pending,
    /// Approved to list treks
    Verified,
    /// Rejected with a reason shown to the vendor
    Rejected(String),
}

impl VerificationStatus {
    pub fn is_verified(&self) -> bool {
        matches!(self, Self::Verified)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Verified => write!(f, "Verified"),
            Self::Rejected(_) => write!(f, "Rejected"),
        }
    }
}

/// Settlement bank details collected during registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankDetails {
    pub account_holder: String,
    pub account_number: String,
    pub ifsc_code: String,
    pub bank_name: String,
    pub branch: String,
}

/// Tax registration profile
///
/// Vendors either carry a GST registration (with the four fields revealed by
/// the wizard's tax step) or declare themselves unregistered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum TaxProfile {
    /// GST-registered business
    Registered {
        state_name: String,
        state_code: String,
        gstin: String,
        head_office: String,
    },
    /// Not registered for GST
    Unregistered,
}

/// Legal structure of the vendor's business
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessType {
    SoleProprietorship,
    Partnership,
    PrivateLimited,
    Llp,
}

impl BusinessType {
    /// Parse a business type from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "sole" | "sole_proprietorship" | "proprietorship" => Some(Self::SoleProprietorship),
            "partnership" => Some(Self::Partnership),
            "private" | "private_limited" | "pvt" => Some(Self::PrivateLimited),
            "llp" => Some(Self::Llp),
            _ => None,
        }
    }
}

impl fmt::Display for BusinessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SoleProprietorship => write!(f, "Sole Proprietorship"),
            Self::Partnership => write!(f, "Partnership"),
            Self::PrivateLimited => write!(f, "Private Limited"),
            Self::Llp => write!(f, "LLP"),
        }
    }
}

/// A document slot as recorded on the vendor
///
/// File capture is not implemented; a record only notes whether the slot was
/// marked selected and an optional free-text reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Catalog key of the slot (e.g. "pan_card")
    pub slot: String,
    /// Whether the vendor marked this slot during registration
    pub selected: bool,
    /// Optional reference entered by the vendor (document number, note)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

/// A trek operator registered on the marketplace
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vendor {
    /// Unique identifier
    pub id: VendorId,

    /// Registered company name
    pub company_name: String,

    /// Primary contact person
    pub contact_name: String,

    /// Contact email
    pub email: String,

    /// Contact phone
    pub phone: String,

    /// Street address
    pub address: String,

    /// City
    pub city: String,

    /// Legal structure declared during registration
    pub business_type: Option<BusinessType>,

    /// Settlement bank details
    pub bank: Option<BankDetails>,

    /// Tax registration profile
    pub tax: Option<TaxProfile>,

    /// Document slots recorded during registration
    #[serde(default)]
    pub documents: Vec<DocumentRecord>,

    /// Admin verification state
    #[serde(default)]
    pub verification: VerificationStatus,

    /// Whether this vendor is archived (soft-deleted)
    #[serde(default)]
    pub archived: bool,

    /// When the vendor registered
    pub created_at: DateTime<Utc>,

    /// When the vendor was last modified
    pub updated_at: DateTime<Utc>,
}

impl Vendor {
    /// Create a new pending vendor with contact details only
    pub fn new(
        company_name: impl Into<String>,
        contact_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: VendorId::new(),
            company_name: company_name.into(),
            contact_name: contact_name.into(),
            email: email.into(),
            phone: String::new(),
            address: String::new(),
            city: String::new(),
            business_type: None,
            bank: None,
            tax: None,
            documents: Vec::new(),
            verification: VerificationStatus::Pending,
            archived: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Mark this vendor as verified
    pub fn verify(&mut self) {
        self.verification = VerificationStatus::Verified;
        self.updated_at = Utc::now();
    }

    /// Reject this vendor with a reason
    pub fn reject(&mut self, reason: impl Into<String>) {
        self.verification = VerificationStatus::Rejected(reason.into());
        self.updated_at = Utc::now();
    }

    /// Mark this vendor as archived
    pub fn archive(&mut self) {
        self.archived = true;
        self.updated_at = Utc::now();
    }

    /// Validate the vendor
    pub fn validate(&self) -> Result<(), VendorValidationError> {
        if self.company_name.trim().is_empty() {
            return Err(VendorValidationError::EmptyCompanyName);
        }
        if self.company_name.len() > 120 {
            return Err(VendorValidationError::CompanyNameTooLong(
                self.company_name.len(),
            ));
        }
        if self.email.trim().is_empty() {
            return Err(VendorValidationError::EmptyEmail);
        }
        Ok(())
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.company_name, self.verification)
    }
}

/// Validation errors for vendors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VendorValidationError {
    EmptyCompanyName,
    CompanyNameTooLong(usize),
    EmptyEmail,
}

impl fmt::Display for VendorValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCompanyName => write!(f, "Company name cannot be empty"),
            Self::CompanyNameTooLong(len) => {
                write!(f, "Company name too long ({} chars, max 120)", len)
            }
            Self::EmptyEmail => write!(f, "Contact email cannot be empty"),
        }
    }
}

impl std::error::Error for VendorValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_vendor_is_pending() {
        let vendor = Vendor::new("Summit Trails", "Asha Rawat", "asha@summittrails.in");
        assert_eq!(vendor.verification, VerificationStatus::Pending);
        assert!(!vendor.archived);
        assert!(vendor.bank.is_none());
        assert!(vendor.tax.is_none());
    }

    #[test]
    fn test_verify_and_reject() {
        let mut vendor = Vendor::new("Summit Trails", "Asha Rawat", "asha@summittrails.in");

        vendor.verify();
        assert!(vendor.verification.is_verified());

        vendor.reject("Bank details could not be confirmed");
        assert!(matches!(
            vendor.verification,
            VerificationStatus::Rejected(_)
        ));
    }

    #[test]
    fn test_validation() {
        let mut vendor = Vendor::new("Summit Trails", "Asha Rawat", "asha@summittrails.in");
        assert!(vendor.validate().is_ok());

        vendor.company_name = String::new();
        assert_eq!(
            vendor.validate(),
            Err(VendorValidationError::EmptyCompanyName)
        );

        vendor.company_name = "a".repeat(121);
        assert!(matches!(
            vendor.validate(),
            Err(VendorValidationError::CompanyNameTooLong(_))
        ));
    }

    #[test]
    fn test_business_type_parsing() {
        assert_eq!(
            BusinessType::parse("partnership"),
            Some(BusinessType::Partnership)
        );
        assert_eq!(BusinessType::parse("LLP"), Some(BusinessType::Llp));
        assert_eq!(BusinessType::parse("nonsense"), None);
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut vendor = Vendor::new("Summit Trails", "Asha Rawat", "asha@summittrails.in");
        vendor.tax = Some(TaxProfile::Registered {
            state_name: "Uttarakhand".into(),
            state_code: "05".into(),
            gstin: "05ABCDE1234F1Z5".into(),
            head_office: "Dehradun".into(),
        });

        let json = serde_json::to_string(&vendor).unwrap();
        let deserialized: Vendor = serde_json::from_str(&json).unwrap();
        assert_eq!(vendor.id, deserialized.id);
        assert_eq!(vendor.tax, deserialized.tax);
    }
}
