//! Record forms, one per entity.

pub mod common;
pub mod company_form;
pub mod lead_form;
pub mod partner_form;

pub use company_form::CompanyForm;
pub use lead_form::LeadForm;
pub use partner_form::PartnerForm;
