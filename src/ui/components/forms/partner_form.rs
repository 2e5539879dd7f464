//! Modal form for creating and editing channel partners.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::models::{ChannelPartner, PartnerDraft, PartnerField, PartnerType};
use crate::ui::components::dialogs::common::{
    create_dialog_block, create_instructions_paragraph, shortcuts,
};
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crate::validation::{validate_partner, FieldErrors};

use super::common::{cycle_option, field_line, option_label, select_value, InputState};

pub struct PartnerForm {
    visible: bool,
    editing_id: Option<String>,
    draft: PartnerDraft,
    input: InputState,
    focus: usize,
    errors: FieldErrors<PartnerField>,
    submitting: bool,
}

impl Default for PartnerForm {
    fn default() -> Self {
        Self::new()
    }
}

impl PartnerForm {
    pub fn new() -> Self {
        Self {
            visible: false,
            editing_id: None,
            draft: PartnerDraft::default(),
            input: InputState::default(),
            focus: 0,
            errors: FieldErrors::new(),
            submitting: false,
        }
    }

    pub fn open_create(&mut self) {
        self.reset(PartnerDraft::default(), None);
    }

    pub fn open_edit(&mut self, partner: &ChannelPartner) {
        self.reset(PartnerDraft::from_partner(partner), Some(partner.id.clone()));
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.submitting = false;
        self.errors.clear();
    }

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

    fn reset(&mut self, draft: PartnerDraft, editing_id: Option<String>) {
        self.visible = true;
        self.editing_id = editing_id;
        self.draft = draft;
        self.focus = 0;
        self.errors.clear();
        self.submitting = false;
        self.load_input();
    }

    fn text_slot(&mut self, field: PartnerField) -> Option<&mut String> {
        match field {
            PartnerField::FullName => Some(&mut self.draft.full_name),
            PartnerField::Phone => Some(&mut self.draft.phone),
            PartnerField::Email => Some(&mut self.draft.email),
            PartnerField::AgencyName => Some(&mut self.draft.agency_name),
            PartnerField::ReraNumber => Some(&mut self.draft.rera_number),
            PartnerField::Address => Some(&mut self.draft.address),
            PartnerField::PartnerType => None,
        }
    }

    fn focused_field(&self) -> PartnerField {
        PartnerField::ALL[self.focus]
    }

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
        self.focus = (self.focus + 1) % PartnerField::ALL.len();
        self.load_input();
    }

    fn focus_previous(&mut self) {
        self.commit_input();
        self.focus = (self.focus + PartnerField::ALL.len() - 1) % PartnerField::ALL.len();
        self.load_input();
    }

    fn submit(&mut self) -> Action {
        self.commit_input();
        let errors = validate_partner(&self.draft);
        if errors.is_empty() {
            self.errors.clear();
            self.submitting = true;
            Action::SavePartner {
                id: self.editing_id.clone(),
                draft: self.draft.clone(),
            }
        } else {
            self.errors = errors;
            Action::None
        }
    }

    fn handle_field_key(&mut self, key: KeyEvent) {
        if self.focused_field() == PartnerField::PartnerType {
            match key.code {
                KeyCode::Left => {
                    self.draft.partner_type = cycle_option(self.draft.partner_type, &PartnerType::ALL, false);
                }
                KeyCode::Right => {
                    self.draft.partner_type = cycle_option(self.draft.partner_type, &PartnerType::ALL, true);
                }
                _ => return,
            }
        } else {
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
        }
        // Editing a field retires its error until the next submit.
        self.errors.remove(&self.focused_field());
    }

    fn field_value(&self, field: PartnerField, focused: bool) -> String {
        match field {
            PartnerField::PartnerType => select_value(
                &option_label(self.draft.partner_type.map(|v| v.label())),
                focused,
            ),
            _ if focused => self.input.display(),
            PartnerField::FullName => self.draft.full_name.clone(),
            PartnerField::Phone => self.draft.phone.clone(),
            PartnerField::Email => self.draft.email.clone(),
            PartnerField::AgencyName => self.draft.agency_name.clone(),
            PartnerField::ReraNumber => self.draft.rera_number.clone(),
            PartnerField::Address => self.draft.address.clone(),
        }
    }
}

impl Component for PartnerForm {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.visible {
            return Action::None;
        }
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

        let height = PartnerField::ALL.len() as u16 + 4;
        let area = LayoutManager::centered_rect_lines(60, height, rect);
        f.render_widget(Clear, area);

        let title = if self.editing_id.is_some() {
            " Edit Channel Partner "
        } else {
            " New Channel Partner "
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

        let lines: Vec<Line> = PartnerField::ALL
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

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn submit_reports_missing_required_fields() {
        let mut form = PartnerForm::new();
        form.open_create();
        let action = form.handle_key_events(key(KeyCode::Enter));
        assert!(matches!(action, Action::None));
        assert!(form.errors.contains_key(&PartnerField::FullName));
        assert!(form.errors.contains_key(&PartnerField::ReraNumber));
        assert!(form.errors.contains_key(&PartnerField::PartnerType));
    }

    #[test]
    fn partner_type_cycles_through_unset_and_options() {
        let mut form = PartnerForm::new();
        form.open_create();
        // Walk focus to the Partner Type field at the end.
        for _ in 0..PartnerField::ALL.len() - 1 {
            form.handle_key_events(key(KeyCode::Tab));
        }
        assert_eq!(form.draft.partner_type, None);
        form.handle_key_events(key(KeyCode::Right));
        assert_eq!(form.draft.partner_type, Some(PartnerType::Agent));
        form.handle_key_events(key(KeyCode::Left));
        assert_eq!(form.draft.partner_type, None);
    }

    #[test]
    fn valid_draft_submits() {
        let mut form = PartnerForm::new();
        form.open_create();
        form.draft.full_name = "Ravi Kumar".into();
        form.draft.phone = "9123456780".into();
        form.draft.email = "ravi@brokers.in".into();
        form.draft.agency_name = "Kumar Realty".into();
        form.draft.rera_number = "RERA12345".into();
        form.draft.partner_type = Some(PartnerType::Broker);
        // Resync the focused field's buffer with the edited draft.
        form.load_input();

        let action = form.handle_key_events(key(KeyCode::Enter));
        assert!(matches!(action, Action::SavePartner { id: None, .. }));
        assert!(form.is_submitting());
    }
}
