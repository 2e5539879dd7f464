//! Field-level draft validation.
//!
//! Validators run at submit time only, as pure functions of the draft. They
//! return a map from field to message; an empty map means the draft may be
//! submitted. Forms clear a field's entry whenever that field is edited, so
//! stale messages never linger past the next keystroke.

use std::collections::BTreeMap;

use crate::models::{CompanyDraft, CompanyField, LeadDraft, LeadField, LeadType, PartnerDraft, PartnerField};
use crate::utils::datetime;

/// Errors keyed by the form field that caused them.
pub type FieldErrors<F> = BTreeMap<F, String>;

/// Exactly ten ASCII digits, nothing else.
pub fn is_valid_phone(value: &str) -> bool {
    value.len() == 10 && value.chars().all(|c| c.is_ascii_digit())
}

/// Basic `local@domain.tld` shape: one `@`, a dotted domain, no whitespace.
pub fn is_valid_email(value: &str) -> bool {
    if value.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

pub fn validate_lead(draft: &LeadDraft) -> FieldErrors<LeadField> {
    let mut errors = FieldErrors::new();

    if draft.full_name.trim().is_empty() {
        errors.insert(LeadField::FullName, "Full name is required".into());
    }
    check_phone(&draft.phone, &mut errors, LeadField::Phone);
    check_optional_email(&draft.email, &mut errors, LeadField::Email);
    if draft.date.trim().is_empty() {
        errors.insert(LeadField::Date, "Date is required".into());
    } else if datetime::parse_ymd(draft.date.trim()).is_err() {
        errors.insert(LeadField::Date, "Date must be YYYY-MM-DD".into());
    }
    if draft.purpose.is_none() {
        errors.insert(LeadField::Purpose, "Purpose is required".into());
    }
    if draft.company_id.is_empty() {
        errors.insert(LeadField::Company, "Company is required".into());
    }
    if draft.lead_type == LeadType::ChannelPartner && draft.channel_partner_id.is_empty() {
        errors.insert(LeadField::ChannelPartner, "Channel partner is required".into());
    }

    errors
}

pub fn validate_company(draft: &CompanyDraft) -> FieldErrors<CompanyField> {
    let mut errors = FieldErrors::new();

    if draft.name.trim().is_empty() {
        errors.insert(CompanyField::Name, "Company name is required".into());
    }
    check_phone(&draft.phone, &mut errors, CompanyField::Phone);
    check_optional_email(&draft.email, &mut errors, CompanyField::Email);

    errors
}

pub fn validate_partner(draft: &PartnerDraft) -> FieldErrors<PartnerField> {
    let mut errors = FieldErrors::new();

    if draft.full_name.trim().is_empty() {
        errors.insert(PartnerField::FullName, "Full name is required".into());
    }
    check_phone(&draft.phone, &mut errors, PartnerField::Phone);
    check_optional_email(&draft.email, &mut errors, PartnerField::Email);
    if draft.agency_name.trim().is_empty() {
        errors.insert(PartnerField::AgencyName, "Agency name is required".into());
    }
    let rera = draft.rera_number.trim();
    if rera.is_empty() {
        errors.insert(PartnerField::ReraNumber, "RERA number is required".into());
    } else if rera.chars().count() < 5 {
        errors.insert(
            PartnerField::ReraNumber,
            "RERA number must be at least 5 characters".into(),
        );
    }
    if draft.partner_type.is_none() {
        errors.insert(PartnerField::PartnerType, "Partner type is required".into());
    }

    errors
}

fn check_phone<F: Ord>(phone: &str, errors: &mut FieldErrors<F>, field: F) {
    if phone.trim().is_empty() {
        errors.insert(field, "Phone is required".into());
    } else if !is_valid_phone(phone) {
        errors.insert(field, "Phone must be 10 digits".into());
    }
}

fn check_optional_email<F: Ord>(email: &str, errors: &mut FieldErrors<F>, field: F) {
    if !email.is_empty() && !is_valid_email(email) {
        errors.insert(field, "Invalid email format".into());
    }
}
