//! Modal dialog host.
//!
//! One component owns whichever dialog is open: the delete confirmation,
//! the help panel or the activity log. Record forms are separate
//! components; everything else modal funnels through here.

use crate::logger::Logger;
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, widgets::ScrollbarState, Frame};

use crate::ui::components::dialogs::{activity_log, confirm, help};

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    logger: Logger,
    scroll_offset: usize,
    scrollbar_state: ScrollbarState,
}

impl DialogComponent {
    pub fn new(logger: Logger) -> Self {
        Self {
            dialog_type: None,
            logger,
            scroll_offset: 0,
            scrollbar_state: ScrollbarState::new(0),
        }
    }

    pub fn show(&mut self, dialog_type: DialogType) {
        self.dialog_type = Some(dialog_type);
        self.scroll_offset = 0;
        self.scrollbar_state = ScrollbarState::new(0);
    }

    pub fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.scroll_offset = 0;
        self.scrollbar_state = ScrollbarState::new(0);
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
        self.scrollbar_state = self.scrollbar_state.position(self.scroll_offset);
    }

    fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
        self.scrollbar_state = self.scrollbar_state.position(self.scroll_offset);
    }

    fn page_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(10);
        self.scrollbar_state = self.scrollbar_state.position(self.scroll_offset);
    }

    fn page_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(10);
        self.scrollbar_state = self.scrollbar_state.position(self.scroll_offset);
    }

    fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
        self.scrollbar_state = self.scrollbar_state.position(0);
    }

    fn scroll_to_bottom(&mut self) {
        // Render clamps to the real maximum.
        self.scroll_offset = usize::MAX;
        self.scrollbar_state = self.scrollbar_state.position(usize::MAX);
    }

    /// Shared key handling for the two scrollable panels.
    fn handle_scroll_keys(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(),
            KeyCode::PageUp => self.page_up(),
            KeyCode::PageDown => self.page_down(),
            KeyCode::Home => self.scroll_to_top(),
            KeyCode::End => self.scroll_to_bottom(),
            _ => {}
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match &self.dialog_type {
            None => Action::None,
            Some(DialogType::DeleteConfirmation { .. }) => match key.code {
                KeyCode::Esc => Action::HideDialog,
                KeyCode::Enter => {
                    // Confirmation consumes the dialog either way.
                    if let Some(DialogType::DeleteConfirmation { kind, id, .. }) = self.dialog_type.take() {
                        Action::ConfirmDelete { kind, id }
                    } else {
                        Action::None
                    }
                }
                _ => Action::None,
            },
            Some(DialogType::Help) => match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Action::HideDialog,
                _ => {
                    self.handle_scroll_keys(key);
                    Action::None
                }
            },
            Some(DialogType::Logs) => match key.code {
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('L') => Action::HideDialog,
                _ => {
                    self.handle_scroll_keys(key);
                    Action::None
                }
            },
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        match &self.dialog_type {
            None => {}
            Some(DialogType::DeleteConfirmation { kind, label, .. }) => {
                confirm::render_delete_confirmation_dialog(f, rect, kind.singular(), label);
            }
            Some(DialogType::Help) => {
                help::render_help_dialog(f, rect, self.scroll_offset, &mut self.scrollbar_state);
            }
            Some(DialogType::Logs) => {
                activity_log::render_activity_log_dialog(
                    f,
                    rect,
                    &self.logger,
                    self.scroll_offset,
                    &mut self.scrollbar_state,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntityKind;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn enter_on_confirmation_emits_the_delete() {
        let mut dialogs = DialogComponent::new(Logger::new());
        dialogs.show(DialogType::DeleteConfirmation {
            kind: EntityKind::Leads,
            id: "l1".into(),
            label: "Asha Verma".into(),
        });

        let action = dialogs.handle_key_events(key(KeyCode::Enter));
        match action {
            Action::ConfirmDelete { kind, id } => {
                assert_eq!(kind, EntityKind::Leads);
                assert_eq!(id, "l1");
            }
            other => panic!("expected ConfirmDelete, got {other:?}"),
        }
        assert!(!dialogs.is_visible());
    }

    #[test]
    fn escape_on_confirmation_declines_without_delete() {
        let mut dialogs = DialogComponent::new(Logger::new());
        dialogs.show(DialogType::DeleteConfirmation {
            kind: EntityKind::Companies,
            id: "c1".into(),
            label: "Acme Homes".into(),
        });

        let action = dialogs.handle_key_events(key(KeyCode::Esc));
        assert!(matches!(action, Action::HideDialog));
    }

    #[test]
    fn other_keys_leave_the_confirmation_open() {
        let mut dialogs = DialogComponent::new(Logger::new());
        dialogs.show(DialogType::DeleteConfirmation {
            kind: EntityKind::Partners,
            id: "p1".into(),
            label: "Ravi".into(),
        });

        let action = dialogs.handle_key_events(key(KeyCode::Char('x')));
        assert!(matches!(action, Action::None));
        assert!(dialogs.is_visible());
    }
}
