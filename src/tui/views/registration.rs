//! Registration wizard view
//!
//! Full-screen rendering of the five-step vendor registration wizard. The
//! wizard state machine lives in `crate::registration`; this view rebuilds
//! its per-step inputs from the shared form whenever the step changes, and
//! submits a typed patch when the operator confirms a step.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::config::paths::TrailheadPaths;
use crate::models::BusinessType;
use crate::registration::documents::DOCUMENT_SLOTS;
use crate::registration::{
    BankPatch, DocumentsPatch, PersonalPatch, RegistrationStep, RegistrationWizard, StepPatch,
    TaxChoice, TaxPatch,
};
use crate::services::VendorService;
use crate::tui::app::{ActiveView, App};
use crate::tui::widgets::{Notification, TextInput};

const BUSINESS_TYPES: &[BusinessType] = &[
    BusinessType::SoleProprietorship,
    BusinessType::Partnership,
    BusinessType::PrivateLimited,
    BusinessType::Llp,
];

/// UI state for the registration wizard screen
pub struct RegistrationScreenState {
    /// The wizard state machine
    pub wizard: RegistrationWizard,
    /// Focused field index within the current step
    pub focused: usize,
    /// Text inputs for the current step, rebuilt on step change
    pub inputs: Vec<TextInput>,
    /// Tax step: which registration choice is selected
    pub tax_registered: bool,
    /// Documents step: selected business type
    pub business_type_index: usize,
    /// Documents step: cursor within the slot list
    pub doc_cursor: usize,
    /// Documents step: selection marks per catalog slot
    pub doc_selected: Vec<bool>,
    /// Documents step: consent acknowledgment
    pub consent: bool,
    /// Validation error from the last submit attempt
    pub error_message: Option<String>,
}

impl Default for RegistrationScreenState {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationScreenState {
    /// Create a fresh screen over a fresh wizard
    pub fn new() -> Self {
        let mut state = Self {
            wizard: RegistrationWizard::new(),
            focused: 0,
            inputs: Vec::new(),
            tax_registered: false,
            business_type_index: 0,
            doc_cursor: 0,
            doc_selected: vec![false; DOCUMENT_SLOTS.len()],
            consent: false,
            error_message: None,
        };
        state.sync_step();
        state
    }

    /// Called when the view is entered: resume a checkpointed draft if any
    pub fn enter(&mut self, paths: &TrailheadPaths) {
        if let Ok(Some(draft)) = RegistrationWizard::load_draft(paths) {
            self.wizard = RegistrationWizard::from_draft(draft);
        }
        self.sync_step();
    }

    /// Rebuild the per-step inputs from the shared form
    pub fn sync_step(&mut self) {
        let form = self.wizard.form();
        self.focused = 0;
        self.error_message = None;

        let text = |label: &str, value: &Option<String>| {
            TextInput::new()
                .label(label)
                .content(value.clone().unwrap_or_default())
        };

        match self.wizard.step() {
            RegistrationStep::PersonalDetails => {
                self.inputs = vec![
                    text("Company Name", &form.company_name),
                    text("Contact Name", &form.contact_name),
                    text("Email", &form.email),
                    text("Phone", &form.phone),
                    text("Address", &form.address),
                    text("City", &form.city),
                ];
            }
            RegistrationStep::BankDetails => {
                self.inputs = vec![
                    text("Account Holder", &form.account_holder),
                    text("Account Number", &form.account_number),
                    text("IFSC Code", &form.ifsc_code),
                    text("Bank Name", &form.bank_name),
                    text("Branch", &form.branch),
                ];
            }
            RegistrationStep::TaxDetails => {
                self.tax_registered = form.tax_choice == Some(TaxChoice::Registered);
                self.inputs = vec![
                    text("State Name", &form.state_name),
                    text("State Code", &form.state_code),
                    text("GSTIN", &form.gstin),
                    text("Head Office", &form.head_office),
                ];
            }
            RegistrationStep::Documents => {
                self.business_type_index = form
                    .business_type
                    .and_then(|bt| BUSINESS_TYPES.iter().position(|b| *b == bt))
                    .unwrap_or(0);
                self.doc_selected = DOCUMENT_SLOTS
                    .iter()
                    .map(|slot| {
                        form.documents
                            .iter()
                            .any(|r| r.slot == slot.key && r.selected)
                    })
                    .collect();
                self.consent = form.consent;
                self.doc_cursor = 0;
                self.inputs = Vec::new();
            }
            RegistrationStep::Success => {
                self.inputs = Vec::new();
            }
        }
    }

    /// Build the current step's patch from the UI state
    pub fn build_patch(&self) -> Option<StepPatch> {
        let value = |i: usize| self.inputs.get(i).and_then(|input| input.value_opt());

        match self.wizard.step() {
            RegistrationStep::PersonalDetails => Some(StepPatch::Personal(PersonalPatch {
                company_name: value(0),
                contact_name: value(1),
                email: value(2),
                phone: value(3),
                address: value(4),
                city: value(5),
            })),
            RegistrationStep::BankDetails => Some(StepPatch::Bank(BankPatch {
                account_holder: value(0),
                account_number: value(1),
                ifsc_code: value(2),
                bank_name: value(3),
                branch: value(4),
            })),
            RegistrationStep::TaxDetails => {
                if self.tax_registered {
                    Some(StepPatch::Tax(TaxPatch {
                        choice: Some(TaxChoice::Registered),
                        state_name: value(0),
                        state_code: value(1),
                        gstin: value(2),
                        head_office: value(3),
                    }))
                } else {
                    // The sub-form fields are never carried for the
                    // unregistered choice
                    Some(StepPatch::Tax(TaxPatch {
                        choice: Some(TaxChoice::Unregistered),
                        ..Default::default()
                    }))
                }
            }
            RegistrationStep::Documents => {
                let mut records = crate::registration::documents::empty_records();
                for (record, selected) in records.iter_mut().zip(&self.doc_selected) {
                    record.selected = *selected;
                }
                Some(StepPatch::Documents(DocumentsPatch {
                    business_type: BUSINESS_TYPES.get(self.business_type_index).copied(),
                    documents: Some(records),
                    consent: Some(self.consent),
                }))
            }
            RegistrationStep::Success => None,
        }
    }

    /// Number of focusable fields on the current step
    fn field_count(&self) -> usize {
        match self.wizard.step() {
            RegistrationStep::PersonalDetails | RegistrationStep::BankDetails => self.inputs.len(),
            // Choice row + the four sub-form fields when revealed
            RegistrationStep::TaxDetails => {
                if self.tax_registered {
                    1 + self.inputs.len()
                } else {
                    1
                }
            }
            // Business type row + slot list + consent row
            RegistrationStep::Documents => 3,
            RegistrationStep::Success => 0,
        }
    }

    fn next_field(&mut self) {
        let count = self.field_count();
        if count > 0 {
            self.focused = (self.focused + 1) % count;
        }
    }

    fn prev_field(&mut self) {
        let count = self.field_count();
        if count > 0 {
            self.focused = (self.focused + count - 1) % count;
        }
    }
}

/// Render the registration wizard view
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Progress header
            Constraint::Length(1), // Spacer
            Constraint::Min(8),    // Step body
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
        ])
        .split(area);

    render_progress(frame, app, chunks[0]);

    let state = &app.registration;
    match state.wizard.step() {
        RegistrationStep::PersonalDetails | RegistrationStep::BankDetails => {
            render_inputs(frame, state, chunks[2], 0);
        }
        RegistrationStep::TaxDetails => render_tax(frame, state, chunks[2]),
        RegistrationStep::Documents => render_documents(frame, state, chunks[2]),
        RegistrationStep::Success => render_success(frame, state, chunks[2]),
    }

    if let Some(ref error) = state.error_message {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            ))),
            chunks[3],
        );
    }

    let hints = match state.wizard.step() {
        RegistrationStep::Success => Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(Color::Green)),
            Span::raw(" Submit registration  "),
            Span::styled("[Esc]", Style::default().fg(Color::Red)),
            Span::raw(" Leave"),
        ]),
        _ => Line::from(vec![
            Span::styled("[Tab]", Style::default().fg(Color::White)),
            Span::raw(" Next field  "),
            Span::styled("[Space]", Style::default().fg(Color::White)),
            Span::raw(" Toggle  "),
            Span::styled("[Enter]", Style::default().fg(Color::Green)),
            Span::raw(" Continue  "),
            Span::styled("[Ctrl+B]", Style::default().fg(Color::Yellow)),
            Span::raw(" Back  "),
            Span::styled("[Esc]", Style::default().fg(Color::Red)),
            Span::raw(" Leave"),
        ]),
    };
    frame.render_widget(Paragraph::new(hints), chunks[4]);
}

/// Render the step progress header
fn render_progress(frame: &mut Frame, app: &App, area: Rect) {
    let current = app.registration.wizard.step();
    let mut spans = Vec::new();

    for step in RegistrationStep::ALL {
        let done = step.ordinal() < current.ordinal();
        let style = if step == current {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else if done {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let marker = if done { "✓" } else { step.marker() };
        spans.push(Span::styled(format!("{} {}", marker, step.label()), style));
        if !step.is_terminal() {
            spans.push(Span::styled(" ── ", Style::default().fg(Color::DarkGray)));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render a stack of text inputs starting at field offset `base`
fn render_inputs(frame: &mut Frame, state: &RegistrationScreenState, area: Rect, base: usize) {
    for (i, input) in state.inputs.iter().enumerate() {
        let y = area.y + i as u16;
        if y >= area.y + area.height {
            break;
        }
        let line = Rect::new(area.x, y, area.width, 1);
        input.render(frame, line, state.focused == base + i);
    }
}

/// Render the tax step: choice row plus the conditionally revealed sub-form
fn render_tax(frame: &mut Frame, state: &RegistrationScreenState, area: Rect) {
    let label_style = if state.focused == 0 {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let choice = |selected: bool, label: &str| {
        let mark = if selected { "(•)" } else { "( )" };
        format!("{} {}", mark, label)
    };

    let line = Line::from(vec![
        Span::styled("GST Registration: ", label_style),
        Span::styled(
            choice(state.tax_registered, "Registered"),
            Style::default().fg(Color::White),
        ),
        Span::raw("   "),
        Span::styled(
            choice(!state.tax_registered, "Not registered"),
            Style::default().fg(Color::White),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(line),
        Rect::new(area.x, area.y, area.width, 1),
    );

    if state.tax_registered {
        let sub = Rect::new(
            area.x,
            area.y + 2,
            area.width,
            area.height.saturating_sub(2),
        );
        render_inputs(frame, state, sub, 1);
    }
}

/// Render the documents step: business type, slot catalog, consent
fn render_documents(frame: &mut Frame, state: &RegistrationScreenState, area: Rect) {
    let mut y = area.y;

    // Business type selector
    let bt_style = if state.focused == 0 {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let mut spans = vec![Span::styled("Business Type: ", bt_style)];
    for (i, bt) in BUSINESS_TYPES.iter().enumerate() {
        let style = if i == state.business_type_index {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!(" {} ", bt), style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)),
        Rect::new(area.x, y, area.width, 1),
    );
    y += 2;

    // Slot catalog
    for (i, slot) in DOCUMENT_SLOTS.iter().enumerate() {
        if y >= area.y + area.height {
            break;
        }
        let selected = state.doc_selected.get(i).copied().unwrap_or(false);
        let mark = if selected { "[x]" } else { "[ ]" };
        let required = if slot.required { " (required)" } else { "" };

        let style = if state.focused == 1 && state.doc_cursor == i {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().fg(Color::White)
        };

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("{} {}{}", mark, slot.label, required),
                style,
            ))),
            Rect::new(area.x + 2, y, area.width.saturating_sub(2), 1),
        );
        y += 1;
    }
    y += 1;

    // Consent acknowledgment
    if y < area.y + area.height {
        let consent_mark = if state.consent { "[x]" } else { "[ ]" };
        let style = if state.focused == 2 {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("{} I confirm the details provided are accurate", consent_mark),
                style,
            ))),
            Rect::new(area.x, y, area.width, 1),
        );
    }
}

/// Render the terminal step: a read-only summary plus the exit action
fn render_success(frame: &mut Frame, state: &RegistrationScreenState, area: Rect) {
    let form = state.wizard.form();
    let marked = form.documents.iter().filter(|d| d.selected).count();

    let lines = vec![
        Line::from(Span::styled(
            "All steps complete",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::raw(format!(
            "  Company:   {}",
            form.company_name.as_deref().unwrap_or("-")
        )),
        Line::raw(format!(
            "  Contact:   {} <{}>",
            form.contact_name.as_deref().unwrap_or("-"),
            form.email.as_deref().unwrap_or("-")
        )),
        Line::raw(format!(
            "  Bank:      {}",
            form.bank_name.as_deref().unwrap_or("-")
        )),
        Line::raw(format!(
            "  Tax:       {}",
            form.tax_choice
                .map(|c| c.to_string())
                .unwrap_or_else(|| "-".into())
        )),
        Line::raw(format!(
            "  Documents: {}/{} slots marked",
            marked,
            DOCUMENT_SLOTS.len()
        )),
        Line::raw(""),
        Line::from(Span::styled(
            "Press Enter to submit; the vendor enters the verification queue.",
            Style::default().fg(Color::White),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

/// Handle key input for the registration view
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    // Leave the wizard; progress survives via the last checkpoint
    if key.code == KeyCode::Esc {
        app.switch_view(ActiveView::Treks);
        return true;
    }

    if key.code == KeyCode::Char('b') && key.modifiers.contains(KeyModifiers::CONTROL) {
        // Merge current typing before retreating so nothing is lost
        if let Some(patch) = app.registration.build_patch() {
            app.registration.wizard.apply(patch);
        }
        app.registration.wizard.retreat();
        app.registration.sync_step();
        return true;
    }

    if app.registration.wizard.step() == RegistrationStep::Success {
        if key.code == KeyCode::Enter {
            finish_registration(app);
        }
        return true;
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            if app.registration.wizard.step() == RegistrationStep::Documents
                && app.registration.focused == 1
                && key.code == KeyCode::Down
                && app.registration.doc_cursor + 1 < DOCUMENT_SLOTS.len()
            {
                app.registration.doc_cursor += 1;
            } else {
                app.registration.next_field();
            }
            true
        }

        KeyCode::BackTab | KeyCode::Up => {
            if app.registration.wizard.step() == RegistrationStep::Documents
                && app.registration.focused == 1
                && key.code == KeyCode::Up
                && app.registration.doc_cursor > 0
            {
                app.registration.doc_cursor -= 1;
            } else {
                app.registration.prev_field();
            }
            true
        }

        KeyCode::Enter => {
            submit_step(app);
            true
        }

        KeyCode::Char(' ') => handle_toggle(app),

        KeyCode::Left | KeyCode::Right
            if app.registration.wizard.step() == RegistrationStep::Documents
                && app.registration.focused == 0 =>
        {
            let len = BUSINESS_TYPES.len();
            let idx = &mut app.registration.business_type_index;
            *idx = if key.code == KeyCode::Left {
                (*idx + len - 1) % len
            } else {
                (*idx + 1) % len
            };
            true
        }

        KeyCode::Left | KeyCode::Right
            if app.registration.wizard.step() == RegistrationStep::TaxDetails
                && app.registration.focused == 0 =>
        {
            app.registration.tax_registered = !app.registration.tax_registered;
            true
        }

        _ => handle_text_key(app, key),
    }
}

/// Space toggles the focused choice/checkbox; falls through to text input
fn handle_toggle(app: &mut App) -> bool {
    let state = &mut app.registration;
    match state.wizard.step() {
        RegistrationStep::TaxDetails if state.focused == 0 => {
            state.tax_registered = !state.tax_registered;
            true
        }
        RegistrationStep::Documents => {
            match state.focused {
                1 => {
                    if let Some(selected) = state.doc_selected.get_mut(state.doc_cursor) {
                        *selected = !*selected;
                    }
                }
                2 => state.consent = !state.consent,
                _ => {}
            }
            true
        }
        _ => {
            // A literal space in a text field
            if let Some(input) = focused_input(state) {
                input.insert(' ');
                return true;
            }
            false
        }
    }
}

/// Route an editing key to the focused text input, if any
fn handle_text_key(app: &mut App, key: KeyEvent) -> bool {
    app.registration.error_message = None;
    if let Some(input) = focused_input(&mut app.registration) {
        input.handle_key(key)
    } else {
        false
    }
}

/// The focused text input for the current step, if the focus is on one
fn focused_input(state: &mut RegistrationScreenState) -> Option<&mut TextInput> {
    let index = match state.wizard.step() {
        RegistrationStep::PersonalDetails | RegistrationStep::BankDetails => Some(state.focused),
        RegistrationStep::TaxDetails if state.tax_registered && state.focused >= 1 => {
            Some(state.focused - 1)
        }
        _ => None,
    }?;
    state.inputs.get_mut(index)
}

/// Submit the current step: merge, validate, advance, checkpoint
fn submit_step(app: &mut App) {
    let patch = match app.registration.build_patch() {
        Some(patch) => patch,
        None => return,
    };

    match app.registration.wizard.submit(patch) {
        Ok(()) => {
            if let Err(e) = app.registration.wizard.checkpoint(app.paths) {
                app.notify(Notification::error(e.to_string()));
            }
            app.registration.sync_step();
        }
        Err(e) => {
            app.registration.error_message = Some(e.to_string());
        }
    }
}

/// Terminal action: register the vendor and leave the wizard
fn finish_registration(app: &mut App) {
    let vendor = match app.registration.wizard.finish() {
        Ok(vendor) => vendor,
        Err(e) => {
            app.registration.error_message = Some(e.to_string());
            return;
        }
    };

    let service = VendorService::new(app.storage);
    match service.register(vendor) {
        Ok(vendor) => {
            let _ = RegistrationWizard::discard_draft(app.paths);
            app.registration = RegistrationScreenState::new();
            app.notify(Notification::success(format!(
                "Vendor '{}' registered and pending verification",
                vendor.company_name
            )));
            app.switch_view(ActiveView::Vendors);
        }
        Err(e) => {
            app.registration.error_message = Some(e.to_string());
        }
    }
}
