//! Modal form for creating and editing companies.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::models::{Company, CompanyDraft, CompanyField};
use crate::ui::components::dialogs::common::{
    create_dialog_block, create_instructions_paragraph, shortcuts,
};
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crate::validation::{validate_company, FieldErrors};

use super::common::{field_line, InputState};

/// All-text sibling of the lead form. Same draft-and-validator flow, no
/// select fields to cycle.
pub struct CompanyForm {
    visible: bool,
    editing_id: Option<String>,
    draft: CompanyDraft,
    input: InputState,
    focus: usize,
    errors: FieldErrors<CompanyField>,
    submitting: bool,
}

impl Default for CompanyForm {
    fn default() -> Self {
        Self::new()
    }
}

impl CompanyForm {
    pub fn new() -> Self {
        Self {
            visible: false,
            editing_id: None,
            draft: CompanyDraft::default(),
            input: InputState::default(),
            focus: 0,
            errors: FieldErrors::new(),
            submitting: false,
        }
    }

    pub fn open_create(&mut self) {
        self.reset(CompanyDraft::default(), None);
    }

    pub fn open_edit(&mut self, company: &Company) {
        self.reset(CompanyDraft::from_company(company), Some(company.id.clone()));
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

    fn reset(&mut self, draft: CompanyDraft, editing_id: Option<String>) {
        self.visible = true;
        self.editing_id = editing_id;
        self.draft = draft;
        self.focus = 0;
        self.errors.clear();
        self.submitting = false;
        self.load_input();
    }

    fn text_slot(&mut self, field: CompanyField) -> &mut String {
        match field {
            CompanyField::Name => &mut self.draft.name,
            CompanyField::Phone => &mut self.draft.phone,
            CompanyField::Email => &mut self.draft.email,
            CompanyField::Address => &mut self.draft.address,
            CompanyField::Website => &mut self.draft.website,
            CompanyField::Description => &mut self.draft.description,
        }
    }

    fn focused_field(&self) -> CompanyField {
        CompanyField::ALL[self.focus]
    }

    fn commit_input(&mut self) {
        let field = self.focused_field();
        let value = self.input.buffer.clone();
        *self.text_slot(field) = value;
    }

    fn load_input(&mut self) {
        let field = self.focused_field();
        let value = self.text_slot(field).clone();
        self.input = InputState::with_value(&value);
    }

    fn focus_next(&mut self) {
        self.commit_input();
        self.focus = (self.focus + 1) % CompanyField::ALL.len();
        self.load_input();
    }

    fn focus_previous(&mut self) {
        self.commit_input();
        self.focus = (self.focus + CompanyField::ALL.len() - 1) % CompanyField::ALL.len();
        self.load_input();
    }

    fn submit(&mut self) -> Action {
        self.commit_input();
        let errors = validate_company(&self.draft);
        if errors.is_empty() {
            self.errors.clear();
            self.submitting = true;
            Action::SaveCompany {
                id: self.editing_id.clone(),
                draft: self.draft.clone(),
            }
        } else {
            self.errors = errors;
            Action::None
        }
    }

    fn handle_field_key(&mut self, key: KeyEvent) {
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
        // Editing a field retires its error until the next submit.
        self.errors.remove(&self.focused_field());
    }

    fn field_value(&self, field: CompanyField, focused: bool) -> String {
        if focused {
            return self.input.display();
        }
        match field {
            CompanyField::Name => self.draft.name.clone(),
            CompanyField::Phone => self.draft.phone.clone(),
            CompanyField::Email => self.draft.email.clone(),
            CompanyField::Address => self.draft.address.clone(),
            CompanyField::Website => self.draft.website.clone(),
            CompanyField::Description => self.draft.description.clone(),
        }
    }
}

impl Component for CompanyForm {
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

        let height = CompanyField::ALL.len() as u16 + 4;
        let area = LayoutManager::centered_rect_lines(60, height, rect);
        f.render_widget(Clear, area);

        let title = if self.editing_id.is_some() {
            " Edit Company "
        } else {
            " New Company "
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

        let lines: Vec<Line> = CompanyField::ALL
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
    fn submit_requires_name_phone_and_email() {
        let mut form = CompanyForm::new();
        form.open_create();
        let action = form.handle_key_events(key(KeyCode::Enter));
        assert!(matches!(action, Action::None));
        assert!(form.errors.contains_key(&CompanyField::Name));
        assert!(form.errors.contains_key(&CompanyField::Phone));
        assert!(form.errors.contains_key(&CompanyField::Email));
    }

    #[test]
    fn typing_flows_into_the_focused_field() {
        let mut form = CompanyForm::new();
        form.open_create();
        for c in "Acme Homes".chars() {
            form.handle_key_events(key(KeyCode::Char(c)));
        }
        form.handle_key_events(key(KeyCode::Tab));
        assert_eq!(form.draft.name, "Acme Homes");
    }

    #[test]
    fn valid_draft_emits_save_with_record_identity() {
        let company = Company {
            id: "c9".into(),
            name: "Acme Homes".into(),
            phone: "9876543210".into(),
            email: Some("hello@acme.com".into()),
            address: None,
            website: None,
            description: None,
        };
        let mut form = CompanyForm::new();
        form.open_edit(&company);

        let action = form.handle_key_events(key(KeyCode::Enter));
        match action {
            Action::SaveCompany { id, draft } => {
                assert_eq!(id.as_deref(), Some("c9"));
                assert_eq!(draft, CompanyDraft::from_company(&company));
            }
            other => panic!("expected SaveCompany, got {other:?}"),
        }
        assert!(form.is_submitting());
    }
}
