//! Line-oriented registration runner
//!
//! Drives the same wizard state machine from plain stdin prompts for
//! `trailhead register`. The TUI view renders the richer version; this
//! path exists for scripted and headless use.

use std::io::{self, Write};

use crate::config::paths::TrailheadPaths;
use crate::error::{TrailheadError, TrailheadResult};
use crate::models::{BusinessType, Vendor};
use crate::services::VendorService;
use crate::storage::Storage;

use super::documents::{self, DOCUMENT_SLOTS};
use super::form::{BankPatch, DocumentsPatch, PersonalPatch, StepPatch, TaxChoice, TaxPatch};
use super::step::RegistrationStep;
use super::wizard::RegistrationWizard;

/// Result of running the prompt-based registration
pub struct RegistrationOutcome {
    /// Whether the registration was submitted
    pub completed: bool,
    /// The registered vendor (if completed)
    pub vendor: Option<Vendor>,
}

/// Run the registration wizard on stdin/stdout
pub fn run(storage: &Storage, paths: &TrailheadPaths) -> TrailheadResult<RegistrationOutcome> {
    println!();
    println!("===========================================");
    println!("  Trailhead Vendor Registration");
    println!("===========================================");
    println!();
    println!("Five steps: personal details, bank details, tax details,");
    println!("documents, done. Progress is saved after every step.");
    println!();

    let mut wizard = match RegistrationWizard::load_draft(paths)? {
        Some(draft) => {
            let resume = prompt_string("A saved draft exists. Resume it? (yes/no) [yes]: ")?;
            if resume.is_empty() || resume.eq_ignore_ascii_case("yes") || resume.eq_ignore_ascii_case("y") {
                RegistrationWizard::from_draft(draft)
            } else {
                RegistrationWizard::discard_draft(paths)?;
                RegistrationWizard::new()
            }
        }
        None => RegistrationWizard::new(),
    };

    while !wizard.step().is_terminal() {
        let step = wizard.step();
        println!();
        println!(
            "--- Step {}/5: {} ---",
            step.ordinal(),
            step.label()
        );

        let patch = match step {
            RegistrationStep::PersonalDetails => collect_personal(wizard.form())?,
            RegistrationStep::BankDetails => collect_bank(wizard.form())?,
            RegistrationStep::TaxDetails => collect_tax()?,
            RegistrationStep::Documents => collect_documents()?,
            RegistrationStep::Success => unreachable!("terminal step is handled by the loop guard"),
        };

        match wizard.submit(patch) {
            Ok(()) => wizard.checkpoint(paths)?,
            Err(e) => {
                println!("  {}", e);
                println!("  Please fill the missing fields.");
            }
        }
    }

    // Terminal step: summary and final submission
    let form = wizard.form();
    println!();
    println!("===========================================");
    println!("  Registration Summary");
    println!("===========================================");
    println!("Company:  {}", form.company_name.as_deref().unwrap_or("-"));
    println!("Contact:  {}", form.contact_name.as_deref().unwrap_or("-"));
    println!("Email:    {}", form.email.as_deref().unwrap_or("-"));
    println!("Bank:     {}", form.bank_name.as_deref().unwrap_or("-"));
    println!(
        "Tax:      {}",
        form.tax_choice
            .map(|c| c.to_string())
            .unwrap_or_else(|| "-".into())
    );
    println!(
        "Documents: {}/{} slots marked",
        form.documents.iter().filter(|d| d.selected).count(),
        DOCUMENT_SLOTS.len()
    );
    println!();

    let confirm = prompt_string("Submit this registration? (yes/no) [yes]: ")?;
    if !confirm.is_empty() && !confirm.eq_ignore_ascii_case("yes") && !confirm.eq_ignore_ascii_case("y") {
        println!("Registration kept as draft; run 'trailhead register' to finish later.");
        wizard.checkpoint(paths)?;
        return Ok(RegistrationOutcome {
            completed: false,
            vendor: None,
        });
    }

    let vendor = wizard.finish()?;
    let service = VendorService::new(storage);
    let vendor = service.register(vendor)?;

    RegistrationWizard::discard_draft(paths)?;

    println!();
    println!("Registration submitted. Your vendor account is pending verification.");
    println!("An administrator will review your details and documents.");
    println!();

    Ok(RegistrationOutcome {
        completed: true,
        vendor: Some(vendor),
    })
}

fn collect_personal(form: &super::form::RegistrationForm) -> TrailheadResult<StepPatch> {
    Ok(StepPatch::Personal(PersonalPatch {
        company_name: prompt_field("Company name", form.company_name.as_deref())?,
        contact_name: prompt_field("Contact name", form.contact_name.as_deref())?,
        email: prompt_field("Email", form.email.as_deref())?,
        phone: prompt_field("Phone", form.phone.as_deref())?,
        address: prompt_field("Address", form.address.as_deref())?,
        city: prompt_field("City", form.city.as_deref())?,
    }))
}

fn collect_bank(form: &super::form::RegistrationForm) -> TrailheadResult<StepPatch> {
    Ok(StepPatch::Bank(BankPatch {
        account_holder: prompt_field("Account holder", form.account_holder.as_deref())?,
        account_number: prompt_field("Account number", form.account_number.as_deref())?,
        ifsc_code: prompt_field("IFSC code", form.ifsc_code.as_deref())?,
        bank_name: prompt_field("Bank name", form.bank_name.as_deref())?,
        branch: prompt_field("Branch", form.branch.as_deref())?,
    }))
}

fn collect_tax() -> TrailheadResult<StepPatch> {
    let answer = prompt_string("GST registered? (yes/no): ")?;
    let registered = answer.eq_ignore_ascii_case("yes") || answer.eq_ignore_ascii_case("y");

    if !registered {
        return Ok(StepPatch::Tax(TaxPatch {
            choice: Some(TaxChoice::Unregistered),
            ..Default::default()
        }));
    }

    Ok(StepPatch::Tax(TaxPatch {
        choice: Some(TaxChoice::Registered),
        state_name: prompt_field("State name", None)?,
        state_code: prompt_field("State code", None)?,
        gstin: prompt_field("GSTIN", None)?,
        head_office: prompt_field("Head office", None)?,
    }))
}

fn collect_documents() -> TrailheadResult<StepPatch> {
    let business_type = loop {
        let answer =
            prompt_string("Business type (sole/partnership/private/llp): ")?;
        match BusinessType::parse(&answer) {
            Some(bt) => break bt,
            None => println!("  Unknown business type '{}'", answer),
        }
    };

    let mut records = documents::empty_records();
    println!("Mark the documents you will provide:");
    for record in records.iter_mut() {
        let slot = documents::slot(&record.slot).map(|s| (s.label, s.required));
        let (label, required) = slot.unwrap_or(("Document", false));
        let suffix = if required { " (required)" } else { " (optional)" };
        let answer = prompt_string(&format!("  {}{} - mark? (yes/no) [yes]: ", label, suffix))?;
        record.selected =
            answer.is_empty() || answer.eq_ignore_ascii_case("yes") || answer.eq_ignore_ascii_case("y");
    }

    let consent_answer =
        prompt_string("I confirm the details provided are accurate (yes/no): ")?;
    let consent =
        consent_answer.eq_ignore_ascii_case("yes") || consent_answer.eq_ignore_ascii_case("y");

    Ok(StepPatch::Documents(DocumentsPatch {
        business_type: Some(business_type),
        documents: Some(records),
        consent: Some(consent),
    }))
}

/// Prompt for a field, keeping the current value when the input is empty
fn prompt_field(label: &str, current: Option<&str>) -> TrailheadResult<Option<String>> {
    let prompt = match current {
        Some(value) if !value.is_empty() => format!("{} [{}]: ", label, value),
        _ => format!("{}: ", label),
    };

    let input = prompt_string(&prompt)?;
    if input.is_empty() {
        Ok(None)
    } else {
        Ok(Some(input))
    }
}

/// Prompt for a string input
fn prompt_string(prompt: &str) -> TrailheadResult<String> {
    print!("{}", prompt);
    io::stdout()
        .flush()
        .map_err(|e| TrailheadError::Io(e.to_string()))?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| TrailheadError::Io(e.to_string()))?;

    Ok(input.trim().to_string())
}
