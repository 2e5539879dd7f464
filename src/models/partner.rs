//! Channel partner record and draft.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartnerType {
    Agent,
    Broker,
    Reference,
}

impl PartnerType {
    pub const ALL: [PartnerType; 3] = [PartnerType::Agent, PartnerType::Broker, PartnerType::Reference];

    pub fn label(&self) -> &'static str {
        match self {
            PartnerType::Agent => "Agent",
            PartnerType::Broker => "Broker",
            PartnerType::Reference => "Reference",
        }
    }
}

/// A channel partner as fetched from the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelPartner {
    #[serde(alias = "_id")]
    pub id: String,
    pub full_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, deserialize_with = "super::empty_as_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub agency_name: String,
    #[serde(default)]
    pub rera_number: String,
    #[serde(default, deserialize_with = "super::empty_as_none")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "super::empty_as_none")]
    pub partner_type: Option<PartnerType>,
}

/// Fields of the partner form, in traversal order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum PartnerField {
    FullName,
    Phone,
    Email,
    AgencyName,
    ReraNumber,
    Address,
    PartnerType,
}

impl PartnerField {
    pub const ALL: [PartnerField; 7] = [
        PartnerField::FullName,
        PartnerField::Phone,
        PartnerField::Email,
        PartnerField::AgencyName,
        PartnerField::ReraNumber,
        PartnerField::Address,
        PartnerField::PartnerType,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PartnerField::FullName => "Full Name",
            PartnerField::Phone => "Phone",
            PartnerField::Email => "Email",
            PartnerField::AgencyName => "Agency Name",
            PartnerField::ReraNumber => "RERA Number",
            PartnerField::Address => "Address",
            PartnerField::PartnerType => "Partner Type",
        }
    }
}

/// The partner form's local, unsaved copy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PartnerDraft {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub agency_name: String,
    pub rera_number: String,
    pub address: String,
    pub partner_type: Option<PartnerType>,
}

impl PartnerDraft {
    pub fn from_partner(partner: &ChannelPartner) -> Self {
        Self {
            full_name: partner.full_name.clone(),
            phone: partner.phone.clone(),
            email: partner.email.clone().unwrap_or_default(),
            agency_name: partner.agency_name.clone(),
            rera_number: partner.rera_number.clone(),
            address: partner.address.clone().unwrap_or_default(),
            partner_type: partner.partner_type,
        }
    }

    pub fn to_payload(&self) -> PartnerPayload {
        PartnerPayload {
            full_name: self.full_name.clone(),
            phone: self.phone.clone(),
            email: super::none_if_empty(&self.email),
            agency_name: self.agency_name.clone(),
            rera_number: self.rera_number.clone(),
            address: super::none_if_empty(&self.address),
            partner_type: self.partner_type,
        }
    }
}

/// Request body for partner create/update.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerPayload {
    pub full_name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub agency_name: String,
    pub rera_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_type: Option<PartnerType>,
}
