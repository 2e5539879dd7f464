//! Modal form for creating and editing leads.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::models::{
    Bhk, Financing, Lead, LeadDraft, LeadField, LeadSource, LeadStatus, LeadType, Purpose,
};
use crate::ui::components::dialogs::common::{
    create_dialog_block, create_instructions_paragraph, shortcuts,
};
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crate::validation::{validate_lead, FieldErrors};

use super::common::{
    cycle_id, cycle_option, cycle_required, field_line, id_display, option_label, select_value,
    InputState,
};

/// One draft, one validator, one submit path for both create and edit.
/// `editing_id` decides which endpoint the save job hits.
pub struct LeadForm {
    visible: bool,
    editing_id: Option<String>,
    draft: LeadDraft,
    input: InputState,
    focus: usize,
    errors: FieldErrors<LeadField>,
    submitting: bool,
    /// `(id, name)` choices for the reference fields, captured on open.
    companies: Vec<(String, String)>,
    partners: Vec<(String, String)>,
}

impl Default for LeadForm {
    fn default() -> Self {
        Self::new()
    }
}

impl LeadForm {
    pub fn new() -> Self {
        Self {
            visible: false,
            editing_id: None,
            draft: LeadDraft::default(),
            input: InputState::default(),
            focus: 0,
            errors: FieldErrors::new(),
            submitting: false,
            companies: Vec::new(),
            partners: Vec::new(),
        }
    }

    pub fn open_create(&mut self, companies: Vec<(String, String)>, partners: Vec<(String, String)>) {
        self.reset(LeadDraft::default(), None, companies, partners);
    }

    pub fn open_edit(
        &mut self,
        lead: &Lead,
        companies: Vec<(String, String)>,
        partners: Vec<(String, String)>,
    ) {
        self.reset(LeadDraft::from_lead(lead), Some(lead.id.clone()), companies, partners);
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.submitting = false;
        self.errors.clear();
    }

    /// Called when the save job reports back. Success closes the form;
    /// failure unlocks it with the draft intact for another attempt.
    pub fn finish_submit(&mut self, success: bool) {
        self.submitting = false;
        if success {
            self.close();
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    fn reset(
        &mut self,
        draft: LeadDraft,
        editing_id: Option<String>,
        companies: Vec<(String, String)>,
        partners: Vec<(String, String)>,
    ) {
        self.visible = true;
        self.editing_id = editing_id;
        self.draft = draft;
        self.focus = 0;
        self.errors.clear();
        self.submitting = false;
        self.companies = companies;
        self.partners = partners;
        self.load_input();
    }

    fn text_slot(&mut self, field: LeadField) -> Option<&mut String> {
        match field {
            LeadField::Date => Some(&mut self.draft.date),
            LeadField::FullName => Some(&mut self.draft.full_name),
            LeadField::Phone => Some(&mut self.draft.phone),
            LeadField::Email => Some(&mut self.draft.email),
            LeadField::Budget => Some(&mut self.draft.budget),
            _ => None,
        }
    }

    fn focused_field(&self) -> LeadField {
        LeadField::ALL[self.focus]
    }

    /// Write the input buffer back into the draft before focus moves on.
    fn commit_input(&mut self) {
        let field = self.focused_field();
        let value = self.input.buffer.clone();
        if let Some(slot) = self.text_slot(field) {
            *slot = value;
        }
    }

    fn load_input(&mut self) {
        let field = self.focused_field();
        let value = match self.text_slot(field) {
            Some(slot) => slot.clone(),
            None => String::new(),
        };
        self.input = InputState::with_value(&value);
    }

    fn focus_next(&mut self) {
        self.commit_input();
        self.focus = (self.focus + 1) % LeadField::ALL.len();
        self.load_input();
    }

    fn focus_previous(&mut self) {
        self.commit_input();
        self.focus = (self.focus + LeadField::ALL.len() - 1) % LeadField::ALL.len();
        self.load_input();
    }

    fn cycle_select(&mut self, forward: bool) {
        match self.focused_field() {
            LeadField::LeadType => {
                self.draft.lead_type = cycle_required(self.draft.lead_type, &LeadType::ALL, forward);
            }
            LeadField::Purpose => {
                self.draft.purpose = cycle_option(self.draft.purpose, &Purpose::ALL, forward);
            }
            LeadField::Bhk => {
                self.draft.bhk = cycle_option(self.draft.bhk, &Bhk::ALL, forward);
            }
            LeadField::LeadSource => {
                self.draft.lead_source = cycle_option(self.draft.lead_source, &LeadSource::ALL, forward);
            }
            LeadField::LeadStatus => {
                self.draft.lead_status = cycle_required(self.draft.lead_status, &LeadStatus::ALL, forward);
            }
            LeadField::Financing => {
                self.draft.financing = cycle_option(self.draft.financing, &Financing::ALL, forward);
            }
            LeadField::Company => {
                self.draft.company_id = cycle_id(&self.draft.company_id, &self.companies, forward);
            }
            LeadField::ChannelPartner => {
                self.draft.channel_partner_id =
                    cycle_id(&self.draft.channel_partner_id, &self.partners, forward);
            }
            _ => {}
        }
    }

    fn submit(&mut self) -> Action {
        self.commit_input();
        let errors = validate_lead(&self.draft);
        if errors.is_empty() {
            self.errors.clear();
            self.submitting = true;
            Action::SaveLead {
                id: self.editing_id.clone(),
                draft: self.draft.clone(),
            }
        } else {
            self.errors = errors;
            Action::None
        }
    }

    fn handle_field_key(&mut self, key: KeyEvent) {
        let is_text = matches!(
            self.focused_field(),
            LeadField::Date | LeadField::FullName | LeadField::Phone | LeadField::Email | LeadField::Budget
        );
        if is_text {
            match key.code {
                KeyCode::Char(c) => self.input.insert(c),
                KeyCode::Backspace => self.input.backspace(),
                KeyCode::Delete => self.input.delete(),
                KeyCode::Left => self.input.move_left(),
                KeyCode::Right => self.input.move_right(),
                KeyCode::Home => self.input.move_home(),
                KeyCode::End => self.input.move_end(),
                _ => return,
            }
        } else {
            match key.code {
                KeyCode::Left => self.cycle_select(false),
                KeyCode::Right => self.cycle_select(true),
                _ => return,
            }
        }
        // Editing a field retires its error until the next submit.
        self.errors.remove(&self.focused_field());
    }

    fn field_value(&self, field: LeadField, focused: bool) -> String {
        match field {
            LeadField::LeadType => select_value(self.draft.lead_type.label(), focused),
            LeadField::Date => {
                if focused {
                    self.input.display()
                } else {
                    self.draft.date.clone()
                }
            }
            LeadField::FullName => {
                if focused {
                    self.input.display()
                } else {
                    self.draft.full_name.clone()
                }
            }
            LeadField::Phone => {
                if focused {
                    self.input.display()
                } else {
                    self.draft.phone.clone()
                }
            }
            LeadField::Email => {
                if focused {
                    self.input.display()
                } else {
                    self.draft.email.clone()
                }
            }
            LeadField::Budget => {
                if focused {
                    self.input.display()
                } else {
                    self.draft.budget.clone()
                }
            }
            LeadField::Purpose => {
                select_value(&option_label(self.draft.purpose.map(|v| v.label())), focused)
            }
            LeadField::Bhk => select_value(&option_label(self.draft.bhk.map(|v| v.label())), focused),
            LeadField::LeadSource => {
                select_value(&option_label(self.draft.lead_source.map(|v| v.label())), focused)
            }
            LeadField::LeadStatus => select_value(self.draft.lead_status.label(), focused),
            LeadField::Financing => {
                select_value(&option_label(self.draft.financing.map(|v| v.label())), focused)
            }
            LeadField::Company => {
                select_value(&id_display(&self.draft.company_id, &self.companies), focused)
            }
            LeadField::ChannelPartner => {
                select_value(&id_display(&self.draft.channel_partner_id, &self.partners), focused)
            }
        }
    }
}

impl Component for LeadForm {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.visible {
            return Action::None;
        }
        // Locked while a save is in flight so a second Enter cannot fire
        // another request.
        if self.submitting {
            return Action::None;
        }
        match key.code {
            KeyCode::Esc => Action::CloseForm,
            KeyCode::Enter => self.submit(),
            KeyCode::Tab | KeyCode::Down => {
                self.focus_next();
                Action::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus_previous();
                Action::None
            }
            _ => {
                self.handle_field_key(key);
                Action::None
            }
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if !self.visible {
            return;
        }

        let height = LeadField::ALL.len() as u16 + 4;
        let area = LayoutManager::centered_rect_lines(64, height, rect);
        f.render_widget(Clear, area);

        let title = if self.editing_id.is_some() {
            " Edit Lead "
        } else {
            " New Lead "
        };
        f.render_widget(create_dialog_block(title, Color::Cyan), area);

        let inner = area.inner(Margin {
            horizontal: 2,
            vertical: 1,
        });
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);

        let lines: Vec<Line> = LeadField::ALL
            .iter()
            .enumerate()
            .map(|(i, field)| {
                let focused = i == self.focus && !self.submitting;
                field_line(
                    field.label(),
                    self.field_value(*field, focused),
                    focused,
                    self.errors.get(field).map(String::as_str),
                )
            })
            .collect();
        f.render_widget(Paragraph::new(lines), chunks[0]);

        if self.submitting {
            f.render_widget(
                Paragraph::new("Saving…")
                    .style(Style::default().fg(Color::Yellow))
                    .alignment(Alignment::Center),
                chunks[1],
            );
        } else {
            f.render_widget(
                create_instructions_paragraph(&[
                    shortcuts::ENTER_SAVE,
                    shortcuts::SEPARATOR,
                    shortcuts::TAB_FIELD,
                    shortcuts::SEPARATOR,
                    shortcuts::ARROWS_CHANGE,
                    shortcuts::SEPARATOR,
                    shortcuts::ESC_CANCEL,
                ]),
                chunks[1],
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    fn form_with_options() -> LeadForm {
        let mut form = LeadForm::new();
        form.open_create(
            vec![("c1".into(), "Acme Homes".into())],
            vec![("p1".into(), "Ravi".into())],
        );
        form
    }

    #[test]
    fn submit_with_empty_draft_reports_errors_and_stays_open() {
        let mut form = form_with_options();
        let action = form.handle_key_events(key(KeyCode::Enter));
        assert!(matches!(action, Action::None));
        assert!(form.is_visible());
        assert!(!form.is_submitting());
        assert!(form.errors.contains_key(&LeadField::FullName));
        assert!(form.errors.contains_key(&LeadField::Phone));
        assert!(form.errors.contains_key(&LeadField::Company));
    }

    #[test]
    fn valid_draft_submits_once_and_locks() {
        let mut form = form_with_options();
        form.draft.full_name = "Asha Verma".into();
        form.draft.phone = "9876543210".into();
        form.draft.purpose = Some(Purpose::Buy);
        form.draft.company_id = "c1".into();

        let action = form.handle_key_events(key(KeyCode::Enter));
        assert!(matches!(action, Action::SaveLead { id: None, .. }));
        assert!(form.is_submitting());

        // Second Enter while in flight must not produce another save.
        let action = form.handle_key_events(key(KeyCode::Enter));
        assert!(matches!(action, Action::None));
    }

    #[test]
    fn failed_save_unlocks_with_draft_intact() {
        let mut form = form_with_options();
        form.draft.full_name = "Asha Verma".into();
        form.draft.phone = "9876543210".into();
        form.draft.purpose = Some(Purpose::Buy);
        form.draft.company_id = "c1".into();
        form.handle_key_events(key(KeyCode::Enter));

        form.finish_submit(false);
        assert!(form.is_visible());
        assert!(!form.is_submitting());
        assert_eq!(form.draft.full_name, "Asha Verma");
    }

    #[test]
    fn successful_save_closes_the_form() {
        let mut form = form_with_options();
        form.draft.full_name = "Asha Verma".into();
        form.draft.phone = "9876543210".into();
        form.draft.purpose = Some(Purpose::Buy);
        form.draft.company_id = "c1".into();
        form.handle_key_events(key(KeyCode::Enter));

        form.finish_submit(true);
        assert!(!form.is_visible());
    }

    #[test]
    fn escape_requests_close_without_saving() {
        let mut form = form_with_options();
        form.draft.full_name = "Someone".into();
        let action = form.handle_key_events(key(KeyCode::Esc));
        assert!(matches!(action, Action::CloseForm));
    }

    #[test]
    fn typing_edits_the_focused_text_field() {
        let mut form = form_with_options();
        // Move focus from Lead Type to Date, then to Full Name.
        form.handle_key_events(key(KeyCode::Tab));
        form.handle_key_events(key(KeyCode::Tab));
        for c in "Asha".chars() {
            form.handle_key_events(key(KeyCode::Char(c)));
        }
        // Commit by moving focus away.
        form.handle_key_events(key(KeyCode::Tab));
        assert_eq!(form.draft.full_name, "Asha");
    }

    #[test]
    fn edit_prefills_draft_from_record() {
        use crate::models::EntityRef;

        let lead = Lead {
            id: "l1".into(),
            lead_type: LeadType::MyLead,
            date: Some("2024-03-05T00:00:00.000Z".into()),
            full_name: "Asha Verma".into(),
            phone: "9876543210".into(),
            email: Some("asha@example.com".into()),
            purpose: Some(Purpose::Buy),
            budget: None,
            bhk: None,
            lead_source: None,
            lead_status: LeadStatus::Contacted,
            financing: None,
            company: Some(EntityRef::Id("c1".into())),
            channel_partner: None,
        };
        let mut form = LeadForm::new();
        form.open_edit(&lead, vec![("c1".into(), "Acme Homes".into())], Vec::new());

        assert_eq!(form.draft.full_name, "Asha Verma");
        assert_eq!(form.draft.date, "2024-03-05");
        assert_eq!(form.draft.company_id, "c1");

        // Submitting untouched routes to the update endpoint for the record.
        let action = form.handle_key_events(key(KeyCode::Enter));
        match action {
            Action::SaveLead { id, draft } => {
                assert_eq!(id.as_deref(), Some("l1"));
                assert_eq!(draft, LeadDraft::from_lead(&lead));
            }
            other => panic!("expected SaveLead, got {other:?}"),
        }
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let mut form = form_with_options();
        form.handle_key_events(key(KeyCode::Enter));
        assert!(form.errors.contains_key(&LeadField::FullName));
        assert!(form.errors.contains_key(&LeadField::Phone));

        // Move focus to Full Name and type one character.
        form.handle_key_events(key(KeyCode::Tab));
        form.handle_key_events(key(KeyCode::Tab));
        form.handle_key_events(key(KeyCode::Char('A')));

        assert!(!form.errors.contains_key(&LeadField::FullName));
        assert!(form.errors.contains_key(&LeadField::Phone));
    }

    #[test]
    fn select_fields_cycle_with_arrows() {
        let mut form = form_with_options();
        // Focus starts on Lead Type.
        form.handle_key_events(key(KeyCode::Right));
        assert_eq!(form.draft.lead_type, LeadType::ChannelPartner);
        form.handle_key_events(key(KeyCode::Right));
        assert_eq!(form.draft.lead_type, LeadType::MyLead);
        form.handle_key_events(key(KeyCode::Left));
        assert_eq!(form.draft.lead_type, LeadType::ChannelPartner);
    }
}
