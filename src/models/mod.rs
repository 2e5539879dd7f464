//! Entity records, drafts, and wire helpers.
//!
//! Every record mirrors the backend's JSON shape (camelCase fields, `_id`
//! accepted as an alias for `id`). Each entity also carries a draft type, the
//! form's local unsaved copy, and a payload type, the body sent on create and
//! update. Collections are held in memory and replaced wholesale after every
//! fetch; nothing here persists locally.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

pub mod company;
pub mod lead;
pub mod partner;
pub mod reference;

pub use company::{Company, CompanyDraft, CompanyField, CompanyPayload};
pub use lead::{
    filter_leads, Bhk, Financing, Lead, LeadDraft, LeadField, LeadPayload, LeadSource, LeadStatus,
    LeadType, Purpose,
};
pub use partner::{ChannelPartner, PartnerDraft, PartnerField, PartnerPayload, PartnerType};
pub use reference::{EmbeddedRef, EntityRef};

/// The three resources this client manages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Leads,
    Companies,
    Partners,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [EntityKind::Leads, EntityKind::Companies, EntityKind::Partners];

    /// Tab title shown in the tab bar.
    pub fn title(&self) -> &'static str {
        match self {
            EntityKind::Leads => "Leads",
            EntityKind::Companies => "Companies",
            EntityKind::Partners => "Channel Partners",
        }
    }

    /// Lowercase singular used in notifications and confirmation prompts.
    pub fn singular(&self) -> &'static str {
        match self {
            EntityKind::Leads => "lead",
            EntityKind::Companies => "company",
            EntityKind::Partners => "channel partner",
        }
    }

    pub fn next(&self) -> EntityKind {
        match self {
            EntityKind::Leads => EntityKind::Companies,
            EntityKind::Companies => EntityKind::Partners,
            EntityKind::Partners => EntityKind::Leads,
        }
    }

    pub fn prev(&self) -> EntityKind {
        match self {
            EntityKind::Leads => EntityKind::Partners,
            EntityKind::Companies => EntityKind::Leads,
            EntityKind::Partners => EntityKind::Companies,
        }
    }
}

/// Decodes a value that the backend may send as `null` or `""` into `None`.
///
/// Select fields and references come back as empty strings on records saved
/// before the field existed; failing the whole collection fetch over one of
/// those is not acceptable.
pub(crate) fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) if s.is_empty() => Ok(None),
        Some(other) => T::deserialize(other).map(Some).map_err(serde::de::Error::custom),
    }
}

/// Payload fields are omitted rather than sent as empty strings.
pub(crate) fn none_if_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
