//! Lead list for the Leads tab.
//!
//! Holds the full lead collection plus the company and partner collections
//! for resolving bare references into display names. The company and
//! partner filters live here too; they narrow the rendered rows without
//! touching the collection itself.

use crate::constants::EMPTY_CELL;
use crate::models::{filter_leads, ChannelPartner, Company, EntityKind, EntityRef, Lead, LeadStatus};
use crate::ui::components::ScrollbarHelper;
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crate::utils::{datetime, text};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

pub struct LeadsTable {
    leads: Vec<Lead>,
    companies: Vec<Company>,
    partners: Vec<ChannelPartner>,
    company_filter: Option<String>,
    partner_filter: Option<String>,
    /// Index into the filtered view, not the raw collection.
    selected_index: usize,
    list_state: ListState,
    scrollbar: ScrollbarHelper,
    date_format: String,
}

impl LeadsTable {
    pub fn new(date_format: String) -> Self {
        Self {
            leads: Vec::new(),
            companies: Vec::new(),
            partners: Vec::new(),
            company_filter: None,
            partner_filter: None,
            selected_index: 0,
            list_state: ListState::default(),
            scrollbar: ScrollbarHelper::new(),
            date_format,
        }
    }

    pub fn set_leads(&mut self, leads: Vec<Lead>) {
        self.leads = leads;
        self.update_list_state();
    }

    pub fn set_lookups(&mut self, companies: Vec<Company>, partners: Vec<ChannelPartner>) {
        self.companies = companies;
        self.partners = partners;
        // A vanished company or partner invalidates its filter.
        if let Some(id) = &self.company_filter {
            if !self.companies.iter().any(|c| &c.id == id) {
                self.company_filter = None;
            }
        }
        if let Some(id) = &self.partner_filter {
            if !self.partners.iter().any(|p| &p.id == id) {
                self.partner_filter = None;
            }
        }
        self.update_list_state();
    }

    pub fn selected_lead(&self) -> Option<&Lead> {
        self.visible_leads().get(self.selected_index).copied()
    }

    pub fn visible_leads(&self) -> Vec<&Lead> {
        filter_leads(
            &self.leads,
            self.company_filter.as_deref(),
            self.partner_filter.as_deref(),
        )
    }

    pub fn has_filters(&self) -> bool {
        self.company_filter.is_some() || self.partner_filter.is_some()
    }

    fn cycle_company_filter(&mut self) {
        self.company_filter = Self::next_filter(self.company_filter.as_deref(), self.companies.iter().map(|c| &c.id));
        self.update_list_state();
    }

    fn cycle_partner_filter(&mut self) {
        self.partner_filter = Self::next_filter(self.partner_filter.as_deref(), self.partners.iter().map(|p| &p.id));
        self.update_list_state();
    }

    fn clear_filters(&mut self) {
        self.company_filter = None;
        self.partner_filter = None;
        self.update_list_state();
    }

    /// Walk None -> first id -> ... -> last id -> None.
    fn next_filter<'a>(current: Option<&str>, mut ids: impl Iterator<Item = &'a String>) -> Option<String> {
        let Some(current) = current else {
            return ids.next().cloned();
        };
        let mut found = false;
        for id in ids {
            if found {
                return Some(id.clone());
            }
            if id == current {
                found = true;
            }
        }
        None
    }

    fn update_list_state(&mut self) {
        let visible = self.visible_leads().len();
        if visible == 0 {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= visible {
                self.selected_index = visible - 1;
            }
            // Offset by one for the header row.
            self.list_state.select(Some(self.selected_index + 1));
        }
    }

    fn company_name(&self, reference: &EntityRef) -> String {
        if let Some(name) = reference.display_name() {
            return name.to_string();
        }
        let id = reference.id();
        self.companies
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    fn partner_name(&self, reference: &EntityRef) -> String {
        if let Some(name) = reference.display_name() {
            return name.to_string();
        }
        let id = reference.id();
        self.partners
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.full_name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    fn status_color(status: LeadStatus) -> Color {
        match status {
            LeadStatus::New => Color::Green,
            LeadStatus::Contacted => Color::Cyan,
            LeadStatus::SiteVisit => Color::Yellow,
            LeadStatus::OfferMade => Color::Magenta,
            LeadStatus::Lost => Color::Red,
        }
    }

    fn header_item(&self) -> ListItem<'static> {
        let line = Line::from(vec![
            Span::raw(format!("{:<12}", "Date")),
            Span::raw(format!("{:<22}", "Name")),
            Span::raw(format!("{:<12}", "Phone")),
            Span::raw(format!("{:<8}", "Purpose")),
            Span::raw(format!("{:<12}", "Status")),
            Span::raw(format!("{:<20}", "Company")),
            Span::raw("Partner".to_string()),
        ]);
        ListItem::new(line.style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD)))
    }

    fn lead_item(&self, lead: &Lead) -> ListItem<'static> {
        let date = lead
            .date
            .as_deref()
            .map(|d| datetime::format_wire_date(d, &self.date_format))
            .unwrap_or_else(|| EMPTY_CELL.to_string());
        let purpose = lead.purpose.map(|p| p.label().to_string()).unwrap_or_else(|| EMPTY_CELL.to_string());
        let company = lead
            .company
            .as_ref()
            .map(|r| self.company_name(r))
            .unwrap_or_else(|| EMPTY_CELL.to_string());
        let partner = lead
            .channel_partner
            .as_ref()
            .map(|r| self.partner_name(r))
            .unwrap_or_else(|| EMPTY_CELL.to_string());

        let line = Line::from(vec![
            Span::styled(format!("{:<12}", text::truncate(&date, 10)), Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{:<22}", text::truncate(&lead.full_name, 20)),
                Style::default().fg(Color::White),
            ),
            Span::styled(format!("{:<12}", lead.phone), Style::default().fg(Color::Gray)),
            Span::styled(format!("{purpose:<8}"), Style::default().fg(Color::Blue)),
            Span::styled(
                format!("{:<12}", lead.lead_status.label()),
                Style::default().fg(Self::status_color(lead.lead_status)),
            ),
            Span::styled(
                format!("{:<20}", text::truncate(&company, 18)),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(text::truncate(&partner, 18), Style::default().fg(Color::Magenta)),
        ]);
        ListItem::new(line)
    }

    fn block_title(&self) -> String {
        let visible = self.visible_leads().len();
        let total = self.leads.len();
        let mut title = if self.has_filters() {
            format!(" Leads ({visible}/{total}) ")
        } else {
            format!(" Leads ({total}) ")
        };
        if let Some(id) = &self.company_filter {
            let name = self
                .companies
                .iter()
                .find(|c| &c.id == id)
                .map(|c| c.name.as_str())
                .unwrap_or(id);
            title.push_str(&format!("• Company: {name} "));
        }
        if let Some(id) = &self.partner_filter {
            let name = self
                .partners
                .iter()
                .find(|p| &p.id == id)
                .map(|p| p.full_name.as_str())
                .unwrap_or(id);
            title.push_str(&format!("• Partner: {name} "));
        }
        title
    }
}

impl Component for LeadsTable {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Action::PreviousRow,
            KeyCode::Down | KeyCode::Char('j') => Action::NextRow,
            KeyCode::Char('a') => Action::NewRecord,
            KeyCode::Char('e') => {
                if self.selected_lead().is_some() {
                    Action::EditSelected
                } else {
                    Action::None
                }
            }
            KeyCode::Char('d') => {
                if let Some(lead) = self.selected_lead() {
                    Action::ShowDialog(DialogType::DeleteConfirmation {
                        kind: EntityKind::Leads,
                        id: lead.id.clone(),
                        label: lead.full_name.clone(),
                    })
                } else {
                    Action::None
                }
            }
            KeyCode::Char('f') => Action::CycleCompanyFilter,
            KeyCode::Char('F') => Action::CyclePartnerFilter,
            KeyCode::Char('x') => Action::ClearFilters,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextRow => {
                let visible = self.visible_leads().len();
                if visible > 0 {
                    self.selected_index = (self.selected_index + 1) % visible;
                    self.update_list_state();
                }
                Action::None
            }
            Action::PreviousRow => {
                let visible = self.visible_leads().len();
                if visible > 0 {
                    self.selected_index = if self.selected_index == 0 {
                        visible - 1
                    } else {
                        self.selected_index - 1
                    };
                    self.update_list_state();
                }
                Action::None
            }
            Action::CycleCompanyFilter => {
                self.cycle_company_filter();
                Action::None
            }
            Action::CyclePartnerFilter => {
                self.cycle_partner_filter();
                Action::None
            }
            Action::ClearFilters => {
                self.clear_filters();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default().borders(Borders::ALL).title(self.block_title());
        let visible = self.visible_leads();

        if visible.is_empty() {
            let empty_message = if self.leads.is_empty() {
                "No leads yet. Press 'a' to add one or 'r' to refresh."
            } else {
                "No leads match the active filters. Press 'x' to clear them."
            };
            let empty_list = List::new(vec![ListItem::new(empty_message)]).block(block);
            f.render_stateful_widget(empty_list, rect, &mut self.list_state);
            return;
        }

        let row_count = visible.len();
        let mut items = vec![self.header_item()];
        items.extend(visible.iter().map(|lead| self.lead_item(lead)));

        // Header row included in the overflow check.
        let (content_area, strip) = ScrollbarHelper::split(rect, row_count + 1);

        let mut list_state = self.list_state.clone();
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

        f.render_stateful_widget(list, content_area, &mut list_state);
        self.list_state = list_state;

        self.scrollbar
            .update(row_count, self.selected_index, ScrollbarHelper::viewport_rows(content_area));
        self.scrollbar.render(f, strip);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LeadType, Purpose};

    fn lead(id: &str, name: &str, company: Option<&str>, partner: Option<&str>) -> Lead {
        Lead {
            id: id.to_string(),
            lead_type: LeadType::MyLead,
            date: Some("2024-03-05T00:00:00.000Z".into()),
            full_name: name.to_string(),
            phone: "9876543210".into(),
            email: None,
            purpose: Some(Purpose::Buy),
            budget: None,
            bhk: None,
            lead_source: None,
            lead_status: LeadStatus::New,
            financing: None,
            company: company.map(|id| EntityRef::Id(id.to_string())),
            channel_partner: partner.map(|id| EntityRef::Id(id.to_string())),
        }
    }

    fn company(id: &str, name: &str) -> Company {
        Company {
            id: id.to_string(),
            name: name.to_string(),
            phone: String::new(),
            email: None,
            address: None,
            website: None,
            description: None,
        }
    }

    fn table_with_data() -> LeadsTable {
        let mut table = LeadsTable::new("%Y-%m-%d".into());
        table.set_lookups(vec![company("c1", "Acme"), company("c2", "Nest")], Vec::new());
        table.set_leads(vec![
            lead("l1", "Asha", Some("c1"), None),
            lead("l2", "Vikram", Some("c2"), None),
            lead("l3", "Meena", Some("c1"), None),
        ]);
        table
    }

    #[test]
    fn cycling_company_filter_narrows_and_wraps_to_all() {
        let mut table = table_with_data();
        assert_eq!(table.visible_leads().len(), 3);

        table.update(Action::CycleCompanyFilter);
        assert_eq!(table.company_filter.as_deref(), Some("c1"));
        let visible: Vec<&str> = table.visible_leads().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(visible, ["l1", "l3"]);

        table.update(Action::CycleCompanyFilter);
        assert_eq!(table.company_filter.as_deref(), Some("c2"));
        assert_eq!(table.visible_leads().len(), 1);

        table.update(Action::CycleCompanyFilter);
        assert_eq!(table.company_filter, None);
        assert_eq!(table.visible_leads().len(), 3);
    }

    #[test]
    fn clearing_filters_restores_the_full_collection() {
        let mut table = table_with_data();
        table.update(Action::CycleCompanyFilter);
        assert!(table.has_filters());

        table.update(Action::ClearFilters);
        assert!(!table.has_filters());
        assert_eq!(table.visible_leads().len(), 3);
    }

    #[test]
    fn selection_clamps_when_the_view_shrinks() {
        let mut table = table_with_data();
        table.update(Action::NextRow);
        table.update(Action::NextRow);
        assert_eq!(table.selected_lead().map(|l| l.id.as_str()), Some("l3"));

        // Filter down to one row; selection must stay in bounds.
        table.update(Action::CycleCompanyFilter);
        table.update(Action::CycleCompanyFilter);
        assert_eq!(table.selected_lead().map(|l| l.id.as_str()), Some("l2"));
    }

    #[test]
    fn delete_key_asks_for_confirmation_with_the_row_identity() {
        let mut table = table_with_data();
        let action = table.handle_key_events(KeyEvent::from(KeyCode::Char('d')));
        match action {
            Action::ShowDialog(DialogType::DeleteConfirmation { kind, id, label }) => {
                assert_eq!(kind, EntityKind::Leads);
                assert_eq!(id, "l1");
                assert_eq!(label, "Asha");
            }
            other => panic!("expected delete confirmation, got {other:?}"),
        }
    }

    #[test]
    fn refreshed_data_keeps_filters_that_still_apply() {
        let mut table = table_with_data();
        table.update(Action::CycleCompanyFilter);
        assert_eq!(table.company_filter.as_deref(), Some("c1"));

        // Re-fetch with c1 still present keeps the filter.
        table.set_lookups(vec![company("c1", "Acme")], Vec::new());
        assert_eq!(table.company_filter.as_deref(), Some("c1"));

        // Re-fetch without c1 drops it.
        table.set_lookups(vec![company("c2", "Nest")], Vec::new());
        assert_eq!(table.company_filter, None);
    }
}
