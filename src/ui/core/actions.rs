use crate::models::{
    Company, CompanyDraft, ChannelPartner, EntityKind, Lead, LeadDraft, PartnerDraft,
};

#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    SelectTab(EntityKind),
    NextTab,
    PreviousTab,
    NextRow,
    PreviousRow,

    // Record operations
    NewRecord,
    EditSelected,
    DeleteSelected,
    SaveLead {
        id: Option<String>,
        draft: LeadDraft,
    },
    SaveCompany {
        id: Option<String>,
        draft: CompanyDraft,
    },
    SavePartner {
        id: Option<String>,
        draft: PartnerDraft,
    },
    ConfirmDelete {
        kind: EntityKind,
        id: String,
    },

    // Background job results
    LeadsLoaded(Vec<Lead>),
    CompaniesLoaded(Vec<Company>),
    PartnersLoaded(Vec<ChannelPartner>),
    FetchFailed {
        kind: EntityKind,
        error: String,
    },
    SaveCompleted {
        kind: EntityKind,
        updated: bool,
    },
    SaveFailed {
        kind: EntityKind,
        error: String,
    },
    DeleteCompleted(EntityKind),
    DeleteFailed {
        kind: EntityKind,
        error: String,
    },

    // Data refresh
    Refresh(EntityKind),
    RefreshAll,

    // Lead filtering
    CycleCompanyFilter,
    CyclePartnerFilter,
    ClearFilters,

    // UI operations
    ShowDialog(DialogType),
    HideDialog,
    CloseForm,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone)]
pub enum DialogType {
    DeleteConfirmation {
        kind: EntityKind,
        id: String,
        /// Human-readable name of the record, shown in the prompt.
        label: String,
    },
    Help,
    Logs,
}
