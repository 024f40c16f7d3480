//! Wizard controller
//!
//! Owns the current step and the shared form, and sequences the five steps
//! strictly forward/backward. The controller itself performs no validation:
//! steps validate their own required fields and only then request the
//! advance. Navigation never clears collected fields.

use serde::{Deserialize, Serialize};

use crate::config::paths::TrailheadPaths;
use crate::error::{TrailheadError, TrailheadResult};
use crate::models::Vendor;
use crate::storage::file_io::{read_json, write_json_atomic};

use super::form::{RegistrationForm, StepPatch};
use super::step::RegistrationStep;

/// Serialized checkpoint of an in-progress registration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrationDraft {
    /// 1-based ordinal of the step the wizard was on
    pub step: u8,
    /// The accumulated form
    pub form: RegistrationForm,
}

/// The registration wizard state machine
#[derive(Debug, Clone, Default)]
pub struct RegistrationWizard {
    step: RegistrationStep,
    form: RegistrationForm,
}

impl RegistrationWizard {
    /// Start a fresh wizard on the first step with an empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a wizard from a checkpointed draft
    pub fn from_draft(draft: RegistrationDraft) -> Self {
        Self {
            step: RegistrationStep::from_ordinal(draft.step)
                .unwrap_or(RegistrationStep::PersonalDetails),
            form: draft.form,
        }
    }

    /// The current step
    pub fn step(&self) -> RegistrationStep {
        self.step
    }

    /// Read access to the shared form
    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    /// Merge a step's partial update into the shared form
    ///
    /// Merge-not-replace: fields the patch carries overwrite, everything
    /// else is preserved.
    pub fn apply(&mut self, patch: StepPatch) {
        self.form.merge(patch);
    }

    /// Move forward one step; clamps at the terminal step
    pub fn advance(&mut self) {
        if let Some(next) = self.step.next() {
            self.step = next;
        }
    }

    /// Move back one step; clamps at the first step, clears nothing
    pub fn retreat(&mut self) {
        if let Some(prev) = self.step.prev() {
            self.step = prev;
        }
    }

    /// Merge a patch, validate the current step, and advance on success
    ///
    /// On validation failure the step does not change and the merged fields
    /// stay in the form (so a half-filled step is not lost).
    pub fn submit(&mut self, patch: StepPatch) -> TrailheadResult<()> {
        self.form.merge(patch);
        self.form
            .validate_step(self.step)
            .map_err(|e| TrailheadError::Registration(e.to_string()))?;
        self.advance();
        Ok(())
    }

    /// Build the pending vendor from the completed form
    ///
    /// Only meaningful once the Documents step has been submitted; all
    /// collecting steps are re-validated here.
    pub fn finish(&self) -> TrailheadResult<Vendor> {
        self.form
            .build_vendor()
            .map_err(|e| TrailheadError::Registration(e.to_string()))
    }

    /// Checkpoint the wizard to the registration draft file
    pub fn checkpoint(&self, paths: &TrailheadPaths) -> TrailheadResult<()> {
        paths.ensure_directories()?;
        let draft = RegistrationDraft {
            step: self.step.ordinal(),
            form: self.form.clone(),
        };
        write_json_atomic(paths.registration_draft_file(), &draft)
    }

    /// Load a previously checkpointed draft, if one exists
    pub fn load_draft(paths: &TrailheadPaths) -> TrailheadResult<Option<RegistrationDraft>> {
        let path = paths.registration_draft_file();
        if !path.exists() {
            return Ok(None);
        }
        let draft: RegistrationDraft = read_json(&path)?;
        Ok(Some(draft))
    }

    /// Remove the draft file (after completion or explicit discard)
    pub fn discard_draft(paths: &TrailheadPaths) -> TrailheadResult<()> {
        let path = paths.registration_draft_file();
        if path.exists() {
            std::fs::remove_file(&path)
                .map_err(|e| TrailheadError::Io(format!("Failed to remove draft: {}", e)))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BusinessType;
    use crate::registration::documents;
    use crate::registration::form::{
        BankPatch, DocumentsPatch, PersonalPatch, TaxChoice, TaxPatch,
    };
    use tempfile::TempDir;

    fn personal_patch() -> PersonalPatch {
        PersonalPatch {
            company_name: Some("Summit Trails".into()),
            contact_name: Some("Asha Rawat".into()),
            email: Some("asha@summittrails.in".into()),
            phone: Some("98110 12345".into()),
            address: Some("14 Mall Road".into()),
            city: Some("Dehradun".into()),
        }
    }

    fn bank_patch() -> BankPatch {
        BankPatch {
            account_holder: Some("Summit Trails".into()),
            account_number: Some("50100223344556".into()),
            ifsc_code: Some("HDFC0000123".into()),
            bank_name: Some("HDFC".into()),
            branch: Some("Rajpur Road".into()),
        }
    }

    fn documents_patch() -> DocumentsPatch {
        let mut records = documents::empty_records();
        for record in records.iter_mut() {
            record.selected = true;
        }
        DocumentsPatch {
            business_type: Some(BusinessType::Partnership),
            documents: Some(records),
            consent: Some(true),
        }
    }

    #[test]
    fn test_advance_never_exceeds_terminal_step() {
        let mut wizard = RegistrationWizard::new();
        for _ in 0..20 {
            wizard.advance();
            assert!(wizard.step().ordinal() <= 5);
        }
        assert_eq!(wizard.step(), RegistrationStep::Success);
    }

    #[test]
    fn test_retreat_never_drops_below_first_step() {
        let mut wizard = RegistrationWizard::new();
        for _ in 0..4 {
            wizard.advance();
        }
        assert_eq!(wizard.step(), RegistrationStep::Success);

        for _ in 0..20 {
            wizard.retreat();
            assert!(wizard.step().ordinal() >= 1);
        }
        assert_eq!(wizard.step(), RegistrationStep::PersonalDetails);
    }

    #[test]
    fn test_state_accumulates_across_steps() {
        let mut wizard = RegistrationWizard::new();
        wizard.submit(StepPatch::Personal(personal_patch())).unwrap();
        wizard.submit(StepPatch::Bank(bank_patch())).unwrap();

        // Both steps' fields are present: merge, not replace
        assert_eq!(wizard.form().company_name.as_deref(), Some("Summit Trails"));
        assert_eq!(wizard.form().bank_name.as_deref(), Some("HDFC"));
        assert_eq!(wizard.step(), RegistrationStep::TaxDetails);
    }

    #[test]
    fn test_required_field_gating_blocks_advance() {
        let mut wizard = RegistrationWizard::new();
        let mut patch = personal_patch();
        patch.company_name = None;

        let result = wizard.submit(StepPatch::Personal(patch));
        assert!(result.is_err());
        assert_eq!(wizard.step().ordinal(), 1);
    }

    #[test]
    fn test_registered_choice_reveals_four_fields() {
        let mut wizard = RegistrationWizard::new();
        wizard.submit(StepPatch::Personal(personal_patch())).unwrap();
        wizard.submit(StepPatch::Bank(bank_patch())).unwrap();

        wizard
            .submit(StepPatch::Tax(TaxPatch {
                choice: Some(TaxChoice::Registered),
                state_name: Some("Uttarakhand".into()),
                state_code: Some("05".into()),
                gstin: Some("05ABCDE1234F1Z5".into()),
                head_office: Some("Dehradun".into()),
            }))
            .unwrap();

        let form = wizard.form();
        assert!(form.state_name.is_some());
        assert!(form.state_code.is_some());
        assert!(form.gstin.is_some());
        assert!(form.head_office.is_some());
    }

    #[test]
    fn test_unregistered_choice_leaves_subform_absent() {
        let mut wizard = RegistrationWizard::new();
        wizard.submit(StepPatch::Personal(personal_patch())).unwrap();
        wizard.submit(StepPatch::Bank(bank_patch())).unwrap();
        wizard
            .submit(StepPatch::Tax(TaxPatch {
                choice: Some(TaxChoice::Unregistered),
                ..Default::default()
            }))
            .unwrap();

        let form = wizard.form();
        assert!(form.state_name.is_none());
        assert!(form.state_code.is_none());
        assert!(form.gstin.is_none());
        assert!(form.head_office.is_none());
        assert_eq!(wizard.step(), RegistrationStep::Documents);
    }

    #[test]
    fn test_navigation_round_trip_preserves_state() {
        let mut wizard = RegistrationWizard::new();
        wizard.submit(StepPatch::Personal(personal_patch())).unwrap();

        let before = wizard.form().clone();
        let step_before = wizard.step();

        wizard.advance();
        wizard.retreat();

        assert_eq!(wizard.step(), step_before);
        assert_eq!(wizard.form(), &before);
    }

    #[test]
    fn test_full_run_builds_pending_vendor() {
        let mut wizard = RegistrationWizard::new();
        wizard.submit(StepPatch::Personal(personal_patch())).unwrap();
        wizard.submit(StepPatch::Bank(bank_patch())).unwrap();
        wizard
            .submit(StepPatch::Tax(TaxPatch {
                choice: Some(TaxChoice::Unregistered),
                ..Default::default()
            }))
            .unwrap();
        wizard
            .submit(StepPatch::Documents(documents_patch()))
            .unwrap();

        assert_eq!(wizard.step(), RegistrationStep::Success);

        let vendor = wizard.finish().unwrap();
        assert_eq!(vendor.company_name, "Summit Trails");
        assert!(vendor.bank.is_some());
        assert!(vendor.verification.is_pending());
    }

    #[test]
    fn test_consent_gates_terminal_step() {
        let mut wizard = RegistrationWizard::new();
        wizard.submit(StepPatch::Personal(personal_patch())).unwrap();
        wizard.submit(StepPatch::Bank(bank_patch())).unwrap();
        wizard
            .submit(StepPatch::Tax(TaxPatch {
                choice: Some(TaxChoice::Unregistered),
                ..Default::default()
            }))
            .unwrap();

        let mut patch = documents_patch();
        patch.consent = Some(false);
        assert!(wizard.submit(StepPatch::Documents(patch)).is_err());
        assert_eq!(wizard.step(), RegistrationStep::Documents);
    }

    #[test]
    fn test_checkpoint_and_resume() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrailheadPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut wizard = RegistrationWizard::new();
        wizard.submit(StepPatch::Personal(personal_patch())).unwrap();
        wizard.checkpoint(&paths).unwrap();

        let draft = RegistrationWizard::load_draft(&paths).unwrap().unwrap();
        let resumed = RegistrationWizard::from_draft(draft);
        assert_eq!(resumed.step(), RegistrationStep::BankDetails);
        assert_eq!(
            resumed.form().company_name.as_deref(),
            Some("Summit Trails")
        );

        RegistrationWizard::discard_draft(&paths).unwrap();
        assert!(RegistrationWizard::load_draft(&paths).unwrap().is_none());
    }
}
