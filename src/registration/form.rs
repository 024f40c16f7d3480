//! Shared wizard form state and per-step patches
//!
//! The form is one typed struct accumulated across steps. Every collected
//! value is Option-valued so "not yet provided" is representable, and steps
//! never write the form directly: they produce a patch and the controller
//! merges it. The merge contract is merge-not-replace: a field carried by
//! the patch overwrites, a field left None is preserved.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{
    BankDetails, BusinessType, DocumentRecord, TaxProfile, Vendor,
};

use super::documents;
use super::step::RegistrationStep;

/// Labels of the four fields revealed by the "GST registered" choice
pub const TAX_SUBFORM_FIELDS: [&str; 4] = ["State Name", "State Code", "GSTIN", "Head Office"];

/// The mutually-exclusive tax registration choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxChoice {
    /// GST-registered; reveals the four-field sub-form
    Registered,
    /// Not registered; the sub-form stays hidden and unpopulated
    Unregistered,
}

impl fmt::Display for TaxChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Registered => write!(f, "GST registered"),
            Self::Unregistered => write!(f, "Not registered"),
        }
    }
}

/// The shared form state accumulated across all wizard steps
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrationForm {
    // Personal details
    pub company_name: Option<String>,
    pub contact_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,

    // Bank details
    pub account_holder: Option<String>,
    pub account_number: Option<String>,
    pub ifsc_code: Option<String>,
    pub bank_name: Option<String>,
    pub branch: Option<String>,

    // Tax details
    pub tax_choice: Option<TaxChoice>,
    pub state_name: Option<String>,
    pub state_code: Option<String>,
    pub gstin: Option<String>,
    pub head_office: Option<String>,

    // Documents
    pub business_type: Option<BusinessType>,
    #[serde(default)]
    pub documents: Vec<DocumentRecord>,
    #[serde(default)]
    pub consent: bool,
}

/// Patch produced by the Personal Details step
#[derive(Debug, Clone, Default)]
pub struct PersonalPatch {
    pub company_name: Option<String>,
    pub contact_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
}

/// Patch produced by the Bank Details step
#[derive(Debug, Clone, Default)]
pub struct BankPatch {
    pub account_holder: Option<String>,
    pub account_number: Option<String>,
    pub ifsc_code: Option<String>,
    pub bank_name: Option<String>,
    pub branch: Option<String>,
}

/// Patch produced by the Tax Details step
///
/// The sub-form fields are only carried when the Registered choice is
/// active; an Unregistered submission leaves them None so they are never
/// populated on the form.
#[derive(Debug, Clone, Default)]
pub struct TaxPatch {
    pub choice: Option<TaxChoice>,
    pub state_name: Option<String>,
    pub state_code: Option<String>,
    pub gstin: Option<String>,
    pub head_office: Option<String>,
}

/// Patch produced by the Documents step
#[derive(Debug, Clone, Default)]
pub struct DocumentsPatch {
    pub business_type: Option<BusinessType>,
    pub documents: Option<Vec<DocumentRecord>>,
    pub consent: Option<bool>,
}

/// A typed partial update from exactly one step
#[derive(Debug, Clone)]
pub enum StepPatch {
    Personal(PersonalPatch),
    Bank(BankPatch),
    Tax(TaxPatch),
    Documents(DocumentsPatch),
}

/// Required fields missing from a step at submission time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncompleteStep {
    pub step: RegistrationStep,
    pub missing: Vec<&'static str>,
}

impl fmt::Display for IncompleteStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: missing {}",
            self.step.label(),
            self.missing.join(", ")
        )
    }
}

impl std::error::Error for IncompleteStep {}

fn merge_field(target: &mut Option<String>, source: Option<String>) {
    if let Some(value) = source {
        *target = Some(value);
    }
}

fn require(field: &Option<String>, label: &'static str, missing: &mut Vec<&'static str>) {
    if field.as_deref().map(str::trim).unwrap_or("").is_empty() {
        missing.push(label);
    }
}

impl RegistrationForm {
    /// Apply a step's patch with merge-not-replace semantics
    pub fn merge(&mut self, patch: StepPatch) {
        match patch {
            StepPatch::Personal(p) => {
                merge_field(&mut self.company_name, p.company_name);
                merge_field(&mut self.contact_name, p.contact_name);
                merge_field(&mut self.email, p.email);
                merge_field(&mut self.phone, p.phone);
                merge_field(&mut self.address, p.address);
                merge_field(&mut self.city, p.city);
            }
            StepPatch::Bank(p) => {
                merge_field(&mut self.account_holder, p.account_holder);
                merge_field(&mut self.account_number, p.account_number);
                merge_field(&mut self.ifsc_code, p.ifsc_code);
                merge_field(&mut self.bank_name, p.bank_name);
                merge_field(&mut self.branch, p.branch);
            }
            StepPatch::Tax(p) => {
                if let Some(choice) = p.choice {
                    self.tax_choice = Some(choice);
                }
                merge_field(&mut self.state_name, p.state_name);
                merge_field(&mut self.state_code, p.state_code);
                merge_field(&mut self.gstin, p.gstin);
                merge_field(&mut self.head_office, p.head_office);
            }
            StepPatch::Documents(p) => {
                if let Some(business_type) = p.business_type {
                    self.business_type = Some(business_type);
                }
                if let Some(documents) = p.documents {
                    self.documents = documents;
                }
                if let Some(consent) = p.consent {
                    self.consent = consent;
                }
            }
        }
    }

    /// Validate the required fields of one step
    ///
    /// Steps gate their own advance with this; the wizard controller never
    /// validates on its own.
    pub fn validate_step(&self, step: RegistrationStep) -> Result<(), IncompleteStep> {
        let mut missing = Vec::new();

        match step {
            RegistrationStep::PersonalDetails => {
                require(&self.company_name, "Company Name", &mut missing);
                require(&self.contact_name, "Contact Name", &mut missing);
                require(&self.email, "Email", &mut missing);
                require(&self.phone, "Phone", &mut missing);
                require(&self.address, "Address", &mut missing);
                require(&self.city, "City", &mut missing);
            }
            RegistrationStep::BankDetails => {
                require(&self.account_holder, "Account Holder", &mut missing);
                require(&self.account_number, "Account Number", &mut missing);
                require(&self.ifsc_code, "IFSC Code", &mut missing);
                require(&self.bank_name, "Bank Name", &mut missing);
                require(&self.branch, "Branch", &mut missing);
            }
            RegistrationStep::TaxDetails => {
                if self.tax_choice.is_none() {
                    missing.push("Registration Choice");
                }
                if self.tax_choice == Some(TaxChoice::Registered) {
                    require(&self.state_name, "State Name", &mut missing);
                    require(&self.state_code, "State Code", &mut missing);
                    require(&self.gstin, "GSTIN", &mut missing);
                    require(&self.head_office, "Head Office", &mut missing);
                }
            }
            RegistrationStep::Documents => {
                if self.business_type.is_none() {
                    missing.push("Business Type");
                }
                missing.extend(documents::missing_required(&self.documents));
                if !self.consent {
                    missing.push("Consent Acknowledgment");
                }
            }
            RegistrationStep::Success => {}
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(IncompleteStep { step, missing })
        }
    }

    /// Build the pending vendor record from a fully-collected form
    ///
    /// All four collecting steps must validate; the whole form is
    /// serialized into the vendor, so fields written by early steps must
    /// still be present here.
    pub fn build_vendor(&self) -> Result<Vendor, IncompleteStep> {
        for step in [
            RegistrationStep::PersonalDetails,
            RegistrationStep::BankDetails,
            RegistrationStep::TaxDetails,
            RegistrationStep::Documents,
        ] {
            self.validate_step(step)?;
        }

        let field = |value: &Option<String>| value.clone().unwrap_or_default();

        let mut vendor = Vendor::new(
            field(&self.company_name),
            field(&self.contact_name),
            field(&self.email),
        );
        vendor.phone = field(&self.phone);
        vendor.address = field(&self.address);
        vendor.city = field(&self.city);
        vendor.business_type = self.business_type;

        vendor.bank = Some(BankDetails {
            account_holder: field(&self.account_holder),
            account_number: field(&self.account_number),
            ifsc_code: field(&self.ifsc_code),
            bank_name: field(&self.bank_name),
            branch: field(&self.branch),
        });

        vendor.tax = match self.tax_choice {
            Some(TaxChoice::Registered) => Some(TaxProfile::Registered {
                state_name: field(&self.state_name),
                state_code: field(&self.state_code),
                gstin: field(&self.gstin),
                head_office: field(&self.head_office),
            }),
            Some(TaxChoice::Unregistered) => Some(TaxProfile::Unregistered),
            None => None,
        };

        vendor.documents = self.documents.clone();

        Ok(vendor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A personal patch with all six fields filled
    pub(crate) fn full_personal() -> PersonalPatch {
        PersonalPatch {
            company_name: Some("Summit Trails".into()),
            contact_name: Some("Asha Rawat".into()),
            email: Some("asha@summittrails.in".into()),
            phone: Some("98110 12345".into()),
            address: Some("14 Mall Road".into()),
            city: Some("Dehradun".into()),
        }
    }

    #[test]
    fn test_merge_preserves_unset_fields() {
        let mut form = RegistrationForm::default();
        form.merge(StepPatch::Personal(full_personal()));

        // A later patch touching one field leaves the rest in place
        form.merge(StepPatch::Personal(PersonalPatch {
            city: Some("Rishikesh".into()),
            ..Default::default()
        }));

        assert_eq!(form.company_name.as_deref(), Some("Summit Trails"));
        assert_eq!(form.city.as_deref(), Some("Rishikesh"));
    }

    #[test]
    fn test_merge_across_steps_accumulates() {
        let mut form = RegistrationForm::default();
        form.merge(StepPatch::Personal(full_personal()));
        form.merge(StepPatch::Bank(BankPatch {
            bank_name: Some("HDFC".into()),
            ..Default::default()
        }));

        assert_eq!(form.company_name.as_deref(), Some("Summit Trails"));
        assert_eq!(form.bank_name.as_deref(), Some("HDFC"));
    }

    #[test]
    fn test_validate_personal_missing_fields() {
        let form = RegistrationForm::default();
        let err = form
            .validate_step(RegistrationStep::PersonalDetails)
            .unwrap_err();
        assert!(err.missing.contains(&"Company Name"));
        assert_eq!(err.missing.len(), 6);
    }

    #[test]
    fn test_validate_tax_registered_requires_subform() {
        let mut form = RegistrationForm::default();
        form.merge(StepPatch::Tax(TaxPatch {
            choice: Some(TaxChoice::Registered),
            ..Default::default()
        }));

        let err = form.validate_step(RegistrationStep::TaxDetails).unwrap_err();
        assert_eq!(err.missing, TAX_SUBFORM_FIELDS.to_vec());
    }

    #[test]
    fn test_validate_tax_unregistered_needs_no_subform() {
        let mut form = RegistrationForm::default();
        form.merge(StepPatch::Tax(TaxPatch {
            choice: Some(TaxChoice::Unregistered),
            ..Default::default()
        }));

        assert!(form.validate_step(RegistrationStep::TaxDetails).is_ok());
        assert!(form.state_name.is_none());
        assert!(form.state_code.is_none());
        assert!(form.gstin.is_none());
        assert!(form.head_office.is_none());
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let mut form = RegistrationForm::default();
        let mut patch = full_personal();
        patch.company_name = Some("   ".into());
        form.merge(StepPatch::Personal(patch));

        let err = form
            .validate_step(RegistrationStep::PersonalDetails)
            .unwrap_err();
        assert_eq!(err.missing, vec!["Company Name"]);
    }

    #[test]
    fn test_form_serde_round_trip() {
        let mut form = RegistrationForm::default();
        form.merge(StepPatch::Personal(full_personal()));
        form.merge(StepPatch::Tax(TaxPatch {
            choice: Some(TaxChoice::Unregistered),
            ..Default::default()
        }));

        let json = serde_json::to_string(&form).unwrap();
        let restored: RegistrationForm = serde_json::from_str(&json).unwrap();
        assert_eq!(form, restored);
    }
}
