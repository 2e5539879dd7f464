//! Reusable UI components

pub mod status_bar;
pub mod tab_bar;

// Component architecture
pub mod companies_table;
pub mod dialog_component;
pub mod dialogs;
pub mod forms;
pub mod leads_table;
pub mod partners_table;
pub mod scrollbar_helper;

// Component exports
pub use companies_table::CompaniesTable;
pub use dialog_component::DialogComponent;
pub use leads_table::LeadsTable;
pub use partners_table::PartnersTable;
pub use scrollbar_helper::ScrollbarHelper;
pub use status_bar::StatusBar;
