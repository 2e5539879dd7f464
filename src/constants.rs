//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Success Messages
pub const SUCCESS_LEAD_CREATED: &str = "✅ Lead created";
pub const SUCCESS_LEAD_UPDATED: &str = "✅ Lead updated";
pub const SUCCESS_LEAD_DELETED: &str = "✅ Lead deleted";
pub const SUCCESS_COMPANY_CREATED: &str = "✅ Company created";
pub const SUCCESS_COMPANY_UPDATED: &str = "✅ Company updated";
pub const SUCCESS_COMPANY_DELETED: &str = "✅ Company deleted";
pub const SUCCESS_PARTNER_CREATED: &str = "✅ Channel partner created";
pub const SUCCESS_PARTNER_UPDATED: &str = "✅ Channel partner updated";
pub const SUCCESS_PARTNER_DELETED: &str = "✅ Channel partner deleted";

// Error Messages
pub const ERROR_LEADS_FETCH_FAILED: &str = "❌ Failed to fetch leads";
pub const ERROR_COMPANIES_FETCH_FAILED: &str = "❌ Failed to fetch companies";
pub const ERROR_PARTNERS_FETCH_FAILED: &str = "❌ Failed to fetch channel partners";
pub const ERROR_LEAD_SAVE_FAILED: &str = "❌ Failed to save lead";
pub const ERROR_LEAD_DELETE_FAILED: &str = "❌ Failed to delete lead";
pub const ERROR_COMPANY_SAVE_FAILED: &str = "❌ Failed to save company";
pub const ERROR_COMPANY_DELETE_FAILED: &str = "❌ Failed to delete company";
pub const ERROR_PARTNER_SAVE_FAILED: &str = "❌ Failed to save channel partner";
pub const ERROR_PARTNER_DELETE_FAILED: &str = "❌ Failed to delete channel partner";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const DIALOG_TITLE_ACTIVITY_LOG: &str = "🔍 Activity Log - Press 'Esc' or 'q' to close";

// Placeholder for absent table cells
pub const EMPTY_CELL: &str = "-";
