//! Channel partner list for the Partners tab.

use crate::constants::EMPTY_CELL;
use crate::models::{ChannelPartner, EntityKind};
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

pub struct PartnersTable {
    partners: Vec<ChannelPartner>,
    selected_index: usize,
    list_state: ListState,
    scrollbar: ScrollbarHelper,
}

impl PartnersTable {
    pub fn new() -> Self {
        Self {
            partners: Vec::new(),
            selected_index: 0,
            list_state: ListState::default(),
            scrollbar: ScrollbarHelper::new(),
        }
    }

    pub fn set_partners(&mut self, partners: Vec<ChannelPartner>) {
        self.partners = partners;
        self.update_list_state();
    }

    pub fn selected_partner(&self) -> Option<&ChannelPartner> {
        self.partners.get(self.selected_index)
    }

    fn update_list_state(&mut self) {
        if self.partners.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= self.partners.len() {
                self.selected_index = self.partners.len() - 1;
            }
            // Offset by one for the header row.
            self.list_state.select(Some(self.selected_index + 1));
        }
    }

    fn header_item() -> ListItem<'static> {
        let line = Line::from(vec![
            Span::raw(format!("{:<24}", "Name")),
            Span::raw(format!("{:<22}", "Agency")),
            Span::raw(format!("{:<14}", "Phone")),
            Span::raw(format!("{:<14}", "RERA")),
            Span::raw("Type".to_string()),
        ]);
        ListItem::new(line.style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD)))
    }

    fn partner_item(partner: &ChannelPartner) -> ListItem<'static> {
        let agency = if partner.agency_name.is_empty() {
            EMPTY_CELL
        } else {
            &partner.agency_name
        };
        let rera = if partner.rera_number.is_empty() {
            EMPTY_CELL
        } else {
            &partner.rera_number
        };
        let partner_type = partner
            .partner_type
            .map(|t| t.label().to_string())
            .unwrap_or_else(|| EMPTY_CELL.to_string());
        let line = Line::from(vec![
            Span::styled(
                format!("{:<24}", text::truncate(&partner.full_name, 22)),
                Style::default().fg(Color::White),
            ),
            Span::styled(format!("{:<22}", text::truncate(agency, 20)), Style::default().fg(Color::Cyan)),
            Span::styled(format!("{:<14}", partner.phone), Style::default().fg(Color::Gray)),
            Span::styled(format!("{rera:<14}"), Style::default().fg(Color::Yellow)),
            Span::styled(partner_type, Style::default().fg(Color::Magenta)),
        ]);
        ListItem::new(line)
    }
}

impl Default for PartnersTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for PartnersTable {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Action::PreviousRow,
            KeyCode::Down | KeyCode::Char('j') => Action::NextRow,
            KeyCode::Char('a') => Action::NewRecord,
            KeyCode::Char('e') => {
                if self.selected_partner().is_some() {
                    Action::EditSelected
                } else {
                    Action::None
                }
            }
            KeyCode::Char('d') => {
                if let Some(partner) = self.selected_partner() {
                    Action::ShowDialog(DialogType::DeleteConfirmation {
                        kind: EntityKind::Partners,
                        id: partner.id.clone(),
                        label: partner.full_name.clone(),
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
                if !self.partners.is_empty() {
                    self.selected_index = (self.selected_index + 1) % self.partners.len();
                    self.update_list_state();
                }
                Action::None
            }
            Action::PreviousRow => {
                if !self.partners.is_empty() {
                    self.selected_index = if self.selected_index == 0 {
                        self.partners.len() - 1
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
            .title(format!(" Channel Partners ({}) ", self.partners.len()));

        if self.partners.is_empty() {
            let empty_list = List::new(vec![ListItem::new(
                "No channel partners yet. Press 'a' to add one or 'r' to refresh.",
            )])
            .block(block);
            f.render_stateful_widget(empty_list, rect, &mut self.list_state);
            return;
        }

        let mut items = vec![Self::header_item()];
        items.extend(self.partners.iter().map(Self::partner_item));

        // Header row included in the overflow check.
        let (content_area, strip) = ScrollbarHelper::split(rect, self.partners.len() + 1);

        let mut list_state = self.list_state.clone();
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

        f.render_stateful_widget(list, content_area, &mut list_state);
        self.list_state = list_state;

        self.scrollbar.update(
            self.partners.len(),
            self.selected_index,
            ScrollbarHelper::viewport_rows(content_area),
        );
        self.scrollbar.render(f, strip);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partner(id: &str, name: &str) -> ChannelPartner {
        ChannelPartner {
            id: id.to_string(),
            full_name: name.to_string(),
            phone: "9876543210".into(),
            email: None,
            agency_name: "Skyline Realty".into(),
            rera_number: "RERA12345".into(),
            address: None,
            partner_type: None,
        }
    }

    #[test]
    fn delete_key_carries_the_partner_identity() {
        let mut table = PartnersTable::new();
        table.set_partners(vec![partner("p1", "Ravi"), partner("p2", "Sunita")]);
        table.update(Action::NextRow);

        let action = table.handle_key_events(KeyEvent::from(KeyCode::Char('d')));
        match action {
            Action::ShowDialog(DialogType::DeleteConfirmation { kind, id, label }) => {
                assert_eq!(kind, EntityKind::Partners);
                assert_eq!(id, "p2");
                assert_eq!(label, "Sunita");
            }
            other => panic!("expected delete confirmation, got {other:?}"),
        }
    }

    #[test]
    fn empty_list_clears_the_selection() {
        let mut table = PartnersTable::new();
        table.set_partners(vec![partner("p1", "Ravi")]);
        assert!(table.selected_partner().is_some());

        table.set_partners(Vec::new());
        assert!(table.selected_partner().is_none());
    }
}
