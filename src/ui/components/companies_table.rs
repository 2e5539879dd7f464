//! Company list for the Companies tab.

use crate::constants::EMPTY_CELL;
use crate::models::{Company, EntityKind};
use crate::ui::components::ScrollbarHelper;
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crate::utils::text;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

pub struct CompaniesTable {
    companies: Vec<Company>,
    selected_index: usize,
    list_state: ListState,
    scrollbar: ScrollbarHelper,
}

impl CompaniesTable {
    pub fn new() -> Self {
        Self {
            companies: Vec::new(),
            selected_index: 0,
            list_state: ListState::default(),
            scrollbar: ScrollbarHelper::new(),
        }
    }

    pub fn set_companies(&mut self, companies: Vec<Company>) {
        self.companies = companies;
        self.update_list_state();
    }

    pub fn selected_company(&self) -> Option<&Company> {
        self.companies.get(self.selected_index)
    }

    fn update_list_state(&mut self) {
        if self.companies.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= self.companies.len() {
                self.selected_index = self.companies.len() - 1;
            }
            // Offset by one for the header row.
            self.list_state.select(Some(self.selected_index + 1));
        }
    }

    fn header_item() -> ListItem<'static> {
        let line = Line::from(vec![
            Span::raw(format!("{:<26}", "Name")),
            Span::raw(format!("{:<14}", "Phone")),
            Span::raw(format!("{:<28}", "Email")),
            Span::raw("Website".to_string()),
        ]);
        ListItem::new(line.style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD)))
    }

    fn company_item(company: &Company) -> ListItem<'static> {
        let email = company.email.as_deref().unwrap_or(EMPTY_CELL);
        let website = company.website.as_deref().unwrap_or(EMPTY_CELL);
        let line = Line::from(vec![
            Span::styled(
                format!("{:<26}", text::truncate(&company.name, 24)),
                Style::default().fg(Color::White),
            ),
            Span::styled(format!("{:<14}", company.phone), Style::default().fg(Color::Gray)),
            Span::styled(format!("{:<28}", text::truncate(email, 26)), Style::default().fg(Color::Cyan)),
            Span::styled(text::truncate(website, 24), Style::default().fg(Color::Blue)),
        ]);
        ListItem::new(line)
    }
}

impl Default for CompaniesTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for CompaniesTable {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Action::PreviousRow,
            KeyCode::Down | KeyCode::Char('j') => Action::NextRow,
            KeyCode::Char('a') => Action::NewRecord,
            KeyCode::Char('e') => {
                if self.selected_company().is_some() {
                    Action::EditSelected
                } else {
                    Action::None
                }
            }
            KeyCode::Char('d') => {
                if let Some(company) = self.selected_company() {
                    Action::ShowDialog(DialogType::DeleteConfirmation {
                        kind: EntityKind::Companies,
                        id: company.id.clone(),
                        label: company.name.clone(),
                    })
                } else {
                    Action::None
                }
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextRow => {
                if !self.companies.is_empty() {
                    self.selected_index = (self.selected_index + 1) % self.companies.len();
                    self.update_list_state();
                }
                Action::None
            }
            Action::PreviousRow => {
                if !self.companies.is_empty() {
                    self.selected_index = if self.selected_index == 0 {
                        self.companies.len() - 1
                    } else {
                        self.selected_index - 1
                    };
                    self.update_list_state();
                }
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Companies ({}) ", self.companies.len()));

        if self.companies.is_empty() {
            let empty_list = List::new(vec![ListItem::new(
                "No companies yet. Press 'a' to add one or 'r' to refresh.",
            )])
            .block(block);
            f.render_stateful_widget(empty_list, rect, &mut self.list_state);
            return;
        }

        let mut items = vec![Self::header_item()];
        items.extend(self.companies.iter().map(Self::company_item));

        // Header row included in the overflow check.
        let (content_area, strip) = ScrollbarHelper::split(rect, self.companies.len() + 1);

        let mut list_state = self.list_state.clone();
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

        f.render_stateful_widget(list, content_area, &mut list_state);
        self.list_state = list_state;

        self.scrollbar.update(
            self.companies.len(),
            self.selected_index,
            ScrollbarHelper::viewport_rows(content_area),
        );
        self.scrollbar.render(f, strip);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(id: &str, name: &str) -> Company {
        Company {
            id: id.to_string(),
            name: name.to_string(),
            phone: "9876543210".into(),
            email: None,
            address: None,
            website: None,
            description: None,
        }
    }

    #[test]
    fn selection_wraps_in_both_directions() {
        let mut table = CompaniesTable::new();
        table.set_companies(vec![company("c1", "Acme"), company("c2", "Nest")]);

        table.update(Action::PreviousRow);
        assert_eq!(table.selected_company().map(|c| c.id.as_str()), Some("c2"));
        table.update(Action::NextRow);
        assert_eq!(table.selected_company().map(|c| c.id.as_str()), Some("c1"));
    }

    #[test]
    fn replacing_data_clamps_the_selection() {
        let mut table = CompaniesTable::new();
        table.set_companies(vec![company("c1", "Acme"), company("c2", "Nest"), company("c3", "Urban")]);
        table.update(Action::NextRow);
        table.update(Action::NextRow);
        assert_eq!(table.selected_company().map(|c| c.id.as_str()), Some("c3"));

        table.set_companies(vec![company("c1", "Acme")]);
        assert_eq!(table.selected_company().map(|c| c.id.as_str()), Some("c1"));
    }

    #[test]
    fn edit_and_delete_do_nothing_on_an_empty_list() {
        let mut table = CompaniesTable::new();
        assert!(matches!(table.handle_key_events(KeyEvent::from(KeyCode::Char('e'))), Action::None));
        assert!(matches!(table.handle_key_events(KeyEvent::from(KeyCode::Char('d'))), Action::None));
    }
}
