//! Application component wiring the tabs, tables, forms and dialogs together.

use crate::api::ApiClient;
use crate::config::Config;
use crate::constants;
use crate::logger::Logger;
use crate::models::{ChannelPartner, Company, EntityKind, Lead};
use crate::ui::components::tab_bar::render_tab_bar;
use crate::ui::components::{
    forms::{CompanyForm, LeadForm, PartnerForm},
    CompaniesTable, DialogComponent, LeadsTable, PartnersTable, StatusBar,
};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component, EventType, JobManager,
};
use crate::ui::layout::LayoutManager;
use crate::ui::notifications::NotificationQueue;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use std::time::Duration;
use tokio::sync::mpsc;

/// Application state separate from UI concerns
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub leads: Vec<Lead>,
    pub companies: Vec<Company>,
    pub partners: Vec<ChannelPartner>,
    pub loading: bool,
}

pub struct AppComponent {
    // Component composition
    active_tab: EntityKind,
    leads_table: LeadsTable,
    companies_table: CompaniesTable,
    partners_table: PartnersTable,
    lead_form: LeadForm,
    company_form: CompanyForm,
    partner_form: PartnerForm,
    dialogs: DialogComponent,
    notifications: NotificationQueue,

    // Application state
    state: AppState,

    // Services
    api: ApiClient,
    jobs: JobManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(api: ApiClient, config: &Config) -> Self {
        let (jobs, background_action_rx) = JobManager::new();
        let logger = Logger::new();

        let state = AppState {
            loading: true,
            ..Default::default()
        };

        Self {
            active_tab: EntityKind::Leads,
            leads_table: LeadsTable::new(config.ui.date_format.clone()),
            companies_table: CompaniesTable::new(),
            partners_table: PartnersTable::new(),
            lead_form: LeadForm::new(),
            company_form: CompanyForm::new(),
            partner_form: PartnerForm::new(),
            dialogs: DialogComponent::new(logger.clone()),
            notifications: NotificationQueue::new(Duration::from_secs(config.notifications.dismiss_secs)),
            state,
            api,
            jobs,
            background_action_rx,
            logger,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Fetch all three collections on startup
    pub fn trigger_initial_fetch(&mut self) {
        self.logger.log("AppComponent: Starting initial fetch".to_string());
        self.jobs.spawn_fetch_all(&self.api);
    }

    /// Push current collections into the list components
    fn sync_component_data(&mut self) {
        self.leads_table.set_leads(self.state.leads.clone());
        self.leads_table
            .set_lookups(self.state.companies.clone(), self.state.partners.clone());
        self.companies_table.set_companies(self.state.companies.clone());
        self.partners_table.set_partners(self.state.partners.clone());
    }

    fn company_options(&self) -> Vec<(String, String)> {
        self.state
            .companies
            .iter()
            .map(|c| (c.id.clone(), c.name.clone()))
            .collect()
    }

    fn partner_options(&self) -> Vec<(String, String)> {
        self.state
            .partners
            .iter()
            .map(|p| (p.id.clone(), p.full_name.clone()))
            .collect()
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                self.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.logger.log("Global key: Ctrl+C - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('?') => {
                self.logger.log("Global key: '?' - opening help dialog".to_string());
                Action::ShowDialog(DialogType::Help)
            }
            KeyCode::Char('L') => {
                self.logger.log("Global key: 'L' - opening activity log".to_string());
                Action::ShowDialog(DialogType::Logs)
            }
            KeyCode::Tab => Action::NextTab,
            KeyCode::BackTab => Action::PreviousTab,
            KeyCode::Char('1') => Action::SelectTab(EntityKind::Leads),
            KeyCode::Char('2') => Action::SelectTab(EntityKind::Companies),
            KeyCode::Char('3') => Action::SelectTab(EntityKind::Partners),
            KeyCode::Char('r') => {
                self.logger.log("Global key: 'r' - refreshing all collections".to_string());
                Action::RefreshAll
            }
            KeyCode::Esc => {
                self.logger.log("Global key: Esc - quitting application".to_string());
                Action::Quit
            }
            _ => Action::None,
        }
    }

    /// Route a key press to the topmost interactive layer
    fn route_key(&mut self, key: KeyEvent) -> Action {
        if self.lead_form.is_visible() {
            self.lead_form.handle_key_events(key)
        } else if self.company_form.is_visible() {
            self.company_form.handle_key_events(key)
        } else if self.partner_form.is_visible() {
            self.partner_form.handle_key_events(key)
        } else if self.dialogs.is_visible() {
            self.dialogs.handle_key_events(key)
        } else {
            let table_action = match self.active_tab {
                EntityKind::Leads => self.leads_table.handle_key_events(key),
                EntityKind::Companies => self.companies_table.handle_key_events(key),
                EntityKind::Partners => self.partners_table.handle_key_events(key),
            };
            if matches!(table_action, Action::None) {
                self.handle_global_key(key)
            } else {
                table_action
            }
        }
    }

    /// Handle app-level actions that require business logic
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::SelectTab(kind) => {
                self.logger.log(format!("Navigation: Switched to {} tab", kind.title()));
                self.active_tab = kind;
                Action::None
            }
            Action::NextTab => {
                self.active_tab = self.active_tab.next();
                self.logger
                    .log(format!("Navigation: Switched to {} tab", self.active_tab.title()));
                Action::None
            }
            Action::PreviousTab => {
                self.active_tab = self.active_tab.prev();
                self.logger
                    .log(format!("Navigation: Switched to {} tab", self.active_tab.title()));
                Action::None
            }
            Action::NewRecord => {
                match self.active_tab {
                    EntityKind::Leads => {
                        self.logger.log("Form: Opening new lead form".to_string());
                        let companies = self.company_options();
                        let partners = self.partner_options();
                        self.lead_form.open_create(companies, partners);
                    }
                    EntityKind::Companies => {
                        self.logger.log("Form: Opening new company form".to_string());
                        self.company_form.open_create();
                    }
                    EntityKind::Partners => {
                        self.logger.log("Form: Opening new channel partner form".to_string());
                        self.partner_form.open_create();
                    }
                }
                Action::None
            }
            Action::EditSelected => {
                match self.active_tab {
                    EntityKind::Leads => {
                        if let Some(lead) = self.leads_table.selected_lead().cloned() {
                            self.logger
                                .log(format!("Form: Editing lead '{}' (ID: {})", lead.full_name, lead.id));
                            let companies = self.company_options();
                            let partners = self.partner_options();
                            self.lead_form.open_edit(&lead, companies, partners);
                        }
                    }
                    EntityKind::Companies => {
                        if let Some(company) = self.companies_table.selected_company().cloned() {
                            self.logger
                                .log(format!("Form: Editing company '{}' (ID: {})", company.name, company.id));
                            self.company_form.open_edit(&company);
                        }
                    }
                    EntityKind::Partners => {
                        if let Some(partner) = self.partners_table.selected_partner().cloned() {
                            self.logger.log(format!(
                                "Form: Editing channel partner '{}' (ID: {})",
                                partner.full_name, partner.id
                            ));
                            self.partner_form.open_edit(&partner);
                        }
                    }
                }
                Action::None
            }
            Action::SaveLead { id, draft } => {
                let verb = if id.is_some() { "update" } else { "create" };
                self.logger.log(format!("Save: Scheduling lead {verb}"));
                self.jobs.spawn_save_lead(self.api.clone(), id, draft);
                Action::None
            }
            Action::SaveCompany { id, draft } => {
                let verb = if id.is_some() { "update" } else { "create" };
                self.logger.log(format!("Save: Scheduling company {verb}"));
                self.jobs.spawn_save_company(self.api.clone(), id, draft);
                Action::None
            }
            Action::SavePartner { id, draft } => {
                let verb = if id.is_some() { "update" } else { "create" };
                self.logger.log(format!("Save: Scheduling channel partner {verb}"));
                self.jobs.spawn_save_partner(self.api.clone(), id, draft);
                Action::None
            }
            Action::ConfirmDelete { kind, id } => {
                self.logger
                    .log(format!("Delete: Scheduling {} delete (ID: {})", kind.singular(), id));
                self.jobs.spawn_delete(self.api.clone(), kind, id);
                Action::None
            }
            Action::ShowDialog(dialog_type) => {
                self.logger.log(format!("Dialog: Showing {dialog_type:?}"));
                self.dialogs.show(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.logger.log("Dialog: Hiding current dialog".to_string());
                self.dialogs.clear_dialog();
                Action::None
            }
            Action::CloseForm => {
                self.logger.log("Form: Closed without saving".to_string());
                self.lead_form.close();
                self.company_form.close();
                self.partner_form.close();
                Action::None
            }
            Action::LeadsLoaded(leads) => {
                self.logger.log(format!("Data: Loaded {} leads", leads.len()));
                self.state.leads = leads;
                self.state.loading = false;
                self.sync_component_data();
                Action::None
            }
            Action::CompaniesLoaded(companies) => {
                self.logger.log(format!("Data: Loaded {} companies", companies.len()));
                self.state.companies = companies;
                self.state.loading = false;
                self.sync_component_data();
                Action::None
            }
            Action::PartnersLoaded(partners) => {
                self.logger.log(format!("Data: Loaded {} channel partners", partners.len()));
                self.state.partners = partners;
                self.state.loading = false;
                self.sync_component_data();
                Action::None
            }
            Action::FetchFailed { kind, error } => {
                self.logger.log(format!("Data: Fetch failed for {}: {}", kind.title(), error));
                self.state.loading = false;
                let message = match kind {
                    EntityKind::Leads => constants::ERROR_LEADS_FETCH_FAILED,
                    EntityKind::Companies => constants::ERROR_COMPANIES_FETCH_FAILED,
                    EntityKind::Partners => constants::ERROR_PARTNERS_FETCH_FAILED,
                };
                self.notifications.error(format!("{message}: {error}"));
                Action::None
            }
            Action::SaveCompleted { kind, updated } => {
                self.logger.log(format!(
                    "Save: {} {} confirmed by server",
                    kind.singular(),
                    if updated { "update" } else { "create" }
                ));
                let message = match (kind, updated) {
                    (EntityKind::Leads, false) => constants::SUCCESS_LEAD_CREATED,
                    (EntityKind::Leads, true) => constants::SUCCESS_LEAD_UPDATED,
                    (EntityKind::Companies, false) => constants::SUCCESS_COMPANY_CREATED,
                    (EntityKind::Companies, true) => constants::SUCCESS_COMPANY_UPDATED,
                    (EntityKind::Partners, false) => constants::SUCCESS_PARTNER_CREATED,
                    (EntityKind::Partners, true) => constants::SUCCESS_PARTNER_UPDATED,
                };
                self.notifications.success(message);
                match kind {
                    EntityKind::Leads => self.lead_form.finish_submit(true),
                    EntityKind::Companies => self.company_form.finish_submit(true),
                    EntityKind::Partners => self.partner_form.finish_submit(true),
                }
                self.jobs.spawn_fetch(self.api.clone(), kind);
                Action::None
            }
            Action::SaveFailed { kind, error } => {
                self.logger
                    .log(format!("Save: {} save failed: {}", kind.singular(), error));
                match kind {
                    EntityKind::Leads => self.lead_form.finish_submit(false),
                    EntityKind::Companies => self.company_form.finish_submit(false),
                    EntityKind::Partners => self.partner_form.finish_submit(false),
                }
                let message = match kind {
                    EntityKind::Leads => constants::ERROR_LEAD_SAVE_FAILED,
                    EntityKind::Companies => constants::ERROR_COMPANY_SAVE_FAILED,
                    EntityKind::Partners => constants::ERROR_PARTNER_SAVE_FAILED,
                };
                self.notifications.error(format!("{message}: {error}"));
                Action::None
            }
            Action::DeleteCompleted(kind) => {
                self.logger
                    .log(format!("Delete: {} delete confirmed by server", kind.singular()));
                let message = match kind {
                    EntityKind::Leads => constants::SUCCESS_LEAD_DELETED,
                    EntityKind::Companies => constants::SUCCESS_COMPANY_DELETED,
                    EntityKind::Partners => constants::SUCCESS_PARTNER_DELETED,
                };
                self.notifications.success(message);
                self.jobs.spawn_fetch(self.api.clone(), kind);
                Action::None
            }
            Action::DeleteFailed { kind, error } => {
                self.logger
                    .log(format!("Delete: {} delete failed: {}", kind.singular(), error));
                let message = match kind {
                    EntityKind::Leads => constants::ERROR_LEAD_DELETE_FAILED,
                    EntityKind::Companies => constants::ERROR_COMPANY_DELETE_FAILED,
                    EntityKind::Partners => constants::ERROR_PARTNER_DELETE_FAILED,
                };
                self.notifications.error(format!("{message}: {error}"));
                Action::None
            }
            Action::Refresh(kind) => {
                self.logger.log(format!("Data: Refreshing {}", kind.title()));
                self.jobs.spawn_fetch(self.api.clone(), kind);
                Action::None
            }
            Action::RefreshAll => {
                self.logger.log("Data: Refreshing all collections".to_string());
                self.jobs.spawn_fetch_all(&self.api);
                Action::None
            }
            // Pass through other actions
            _ => action,
        }
    }

    /// Process background actions from the job manager
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Ok(action) = self.background_action_rx.try_recv() {
            actions.push(action);
        }
        self.jobs.cleanup_finished_jobs();
        actions
    }

    /// Advance the notification clock; true when the visible one expired
    pub fn tick_notifications(&mut self) -> bool {
        let before = self.notifications.len();
        self.notifications.tick();
        before != self.notifications.len()
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) {
        if let EventType::Key(key) = event_type {
            let action = self.route_key(key);
            let action = self.update(action);
            let _final_action = self.handle_app_action(action);
        }
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // This shouldn't be called directly - use handle_event instead
        self.handle_global_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        // Row and filter actions belong to the active table
        match self.active_tab {
            EntityKind::Leads => self.leads_table.update(action),
            EntityKind::Companies => self.companies_table.update(action),
            EntityKind::Partners => self.partners_table.update(action),
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = LayoutManager::main_layout(rect);

        render_tab_bar(f, chunks[0], self.active_tab);
        match self.active_tab {
            EntityKind::Leads => self.leads_table.render(f, chunks[1]),
            EntityKind::Companies => self.companies_table.render(f, chunks[1]),
            EntityKind::Partners => self.partners_table.render(f, chunks[1]),
        }
        StatusBar::render(
            f,
            chunks[2],
            self.notifications.current(),
            self.jobs.job_count(),
            self.active_tab,
        );

        if self.state.loading {
            Self::render_loading_indicator(f, rect);
        }

        // Forms and dialogs draw over the table
        if self.lead_form.is_visible() {
            self.lead_form.render(f, rect);
        }
        if self.company_form.is_visible() {
            self.company_form.render(f, rect);
        }
        if self.partner_form.is_visible() {
            self.partner_form.render(f, rect);
        }
        if self.dialogs.is_visible() {
            self.dialogs.render(f, rect);
        }
    }
}

impl AppComponent {
    /// Render the startup loading indicator
    fn render_loading_indicator(f: &mut Frame, rect: Rect) {
        use ratatui::{
            layout::{Alignment, Constraint, Layout},
            style::{Color, Style},
            text::{Line, Span},
            widgets::{Block, Borders, Clear, Paragraph},
        };

        let popup_area = {
            let popup_layout =
                Layout::vertical([Constraint::Percentage(40), Constraint::Min(3), Constraint::Percentage(40)])
                    .split(rect);

            Layout::horizontal([Constraint::Percentage(30), Constraint::Min(30), Constraint::Percentage(30)])
                .split(popup_layout[1])[1]
        };

        let content = Paragraph::new(Line::from(Span::styled(
            "⟳ Loading data...",
            Style::default().fg(Color::Yellow),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).style(Style::default().fg(Color::Yellow)));

        f.render_widget(Clear, popup_area);
        f.render_widget(content, popup_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LeadStatus, LeadType};

    fn test_app() -> AppComponent {
        let config = Config::default();
        let api = ApiClient::new(&config.api.base_url, config.api.timeout_secs).unwrap();
        AppComponent::new(api, &config)
    }

    fn lead(id: &str, name: &str) -> Lead {
        Lead {
            id: id.to_string(),
            lead_type: LeadType::MyLead,
            date: None,
            full_name: name.to_string(),
            phone: "9876543210".into(),
            email: None,
            purpose: None,
            budget: None,
            bhk: None,
            lead_source: None,
            lead_status: LeadStatus::New,
            financing: None,
            company: None,
            channel_partner: None,
        }
    }

    #[test]
    fn switching_tabs_wraps_in_both_directions() {
        let mut app = test_app();
        assert_eq!(app.active_tab, EntityKind::Leads);

        app.handle_app_action(Action::NextTab);
        assert_eq!(app.active_tab, EntityKind::Companies);
        app.handle_app_action(Action::PreviousTab);
        app.handle_app_action(Action::PreviousTab);
        assert_eq!(app.active_tab, EntityKind::Partners);

        app.handle_app_action(Action::SelectTab(EntityKind::Leads));
        assert_eq!(app.active_tab, EntityKind::Leads);
    }

    #[test]
    fn loaded_collections_replace_the_previous_ones() {
        let mut app = test_app();
        app.handle_app_action(Action::LeadsLoaded(vec![lead("l1", "Asha"), lead("l2", "Vikram")]));
        assert_eq!(app.state.leads.len(), 2);
        assert!(!app.state.loading);

        app.handle_app_action(Action::LeadsLoaded(vec![lead("l3", "Meena")]));
        assert_eq!(app.state.leads.len(), 1);
        assert_eq!(app.leads_table.visible_leads().len(), 1);
    }

    #[test]
    fn fetch_failure_notifies_and_keeps_the_collection() {
        let mut app = test_app();
        app.handle_app_action(Action::LeadsLoaded(vec![lead("l1", "Asha")]));

        app.handle_app_action(Action::FetchFailed {
            kind: EntityKind::Leads,
            error: "connection refused".into(),
        });
        assert_eq!(app.state.leads.len(), 1);
        let notification = app.notifications.current().expect("notification");
        assert!(notification.message.contains("Failed to fetch leads"));
    }

    #[test]
    fn new_record_opens_the_form_for_the_active_tab() {
        let mut app = test_app();
        app.handle_app_action(Action::NewRecord);
        assert!(app.lead_form.is_visible());
        assert!(!app.company_form.is_visible());

        app.handle_app_action(Action::CloseForm);
        app.handle_app_action(Action::SelectTab(EntityKind::Companies));
        app.handle_app_action(Action::NewRecord);
        assert!(app.company_form.is_visible());
    }

    #[tokio::test]
    async fn completed_save_closes_the_form_and_refetches() {
        let mut app = test_app();
        app.handle_app_action(Action::NewRecord);
        assert!(app.lead_form.is_visible());

        app.handle_app_action(Action::SaveCompleted {
            kind: EntityKind::Leads,
            updated: false,
        });
        assert!(!app.lead_form.is_visible());
        assert_eq!(app.notifications.current().map(|n| n.message.as_str()), Some("✅ Lead created"));
        assert!(app.jobs.job_count() > 0);
    }

    #[test]
    fn declining_a_delete_leaves_no_job_behind() {
        let mut app = test_app();
        app.handle_app_action(Action::ShowDialog(DialogType::DeleteConfirmation {
            kind: EntityKind::Leads,
            id: "l1".into(),
            label: "Asha".into(),
        }));
        assert!(app.dialogs.is_visible());

        app.handle_event(EventType::Key(KeyEvent::from(KeyCode::Esc)));
        assert!(!app.dialogs.is_visible());
        assert_eq!(app.jobs.job_count(), 0);
        assert!(!app.should_quit());
    }

    #[test]
    fn quit_is_requested_through_the_action() {
        let mut app = test_app();
        app.handle_event(EventType::Key(KeyEvent::from(KeyCode::Char('q'))));
        assert!(app.should_quit());
    }
}
