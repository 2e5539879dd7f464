//! Lead record, draft, and wire enums.

use serde::{Deserialize, Serialize};

use super::reference::EntityRef;
use crate::utils::datetime;

/// Origin of a lead. Channel-partner leads must name the partner they came
/// through; the partner reference is meaningless (and blanked on submit) for
/// direct leads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeadType {
    #[default]
    #[serde(rename = "my_lead")]
    MyLead,
    #[serde(rename = "channel_partner")]
    ChannelPartner,
}

impl LeadType {
    pub const ALL: [LeadType; 2] = [LeadType::MyLead, LeadType::ChannelPartner];

    pub fn label(&self) -> &'static str {
        match self {
            LeadType::MyLead => "My Lead",
            LeadType::ChannelPartner => "Channel Partner",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Purpose {
    Buy,
    Rent,
    Invest,
    Resale,
}

impl Purpose {
    pub const ALL: [Purpose; 4] = [Purpose::Buy, Purpose::Rent, Purpose::Invest, Purpose::Resale];

    pub fn label(&self) -> &'static str {
        match self {
            Purpose::Buy => "Buy",
            Purpose::Rent => "Rent",
            Purpose::Invest => "Invest",
            Purpose::Resale => "Resale",
        }
    }
}

/// Bedroom count bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bhk {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4+")]
    FourPlus,
}

impl Bhk {
    pub const ALL: [Bhk; 4] = [Bhk::One, Bhk::Two, Bhk::Three, Bhk::FourPlus];

    pub fn label(&self) -> &'static str {
        match self {
            Bhk::One => "1",
            Bhk::Two => "2",
            Bhk::Three => "3",
            Bhk::FourPlus => "4+",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeadSource {
    Website,
    Ads,
    #[serde(rename = "Walk In")]
    WalkIn,
    Broker,
}

impl LeadSource {
    pub const ALL: [LeadSource; 4] = [
        LeadSource::Website,
        LeadSource::Ads,
        LeadSource::WalkIn,
        LeadSource::Broker,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            LeadSource::Website => "Website",
            LeadSource::Ads => "Ads",
            LeadSource::WalkIn => "Walk In",
            LeadSource::Broker => "Broker",
        }
    }
}

/// Pipeline position. New records start at `New`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeadStatus {
    #[default]
    New,
    Contacted,
    #[serde(rename = "Site Visit")]
    SiteVisit,
    #[serde(rename = "Offer Made")]
    OfferMade,
    Lost,
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 5] = [
        LeadStatus::New,
        LeadStatus::Contacted,
        LeadStatus::SiteVisit,
        LeadStatus::OfferMade,
        LeadStatus::Lost,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::SiteVisit => "Site Visit",
            LeadStatus::OfferMade => "Offer Made",
            LeadStatus::Lost => "Lost",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Financing {
    #[serde(rename = "Self")]
    SelfFunded,
    #[serde(rename = "Home Loan")]
    HomeLoan,
    #[serde(rename = "Not Sure")]
    NotSure,
}

impl Financing {
    pub const ALL: [Financing; 3] = [Financing::SelfFunded, Financing::HomeLoan, Financing::NotSure];

    pub fn label(&self) -> &'static str {
        match self {
            Financing::SelfFunded => "Self",
            Financing::HomeLoan => "Home Loan",
            Financing::NotSure => "Not Sure",
        }
    }
}

/// A lead as fetched from the backend.
///
/// Optional select fields decode leniently: old records carry empty strings
/// where nothing was picked, and references arrive bare or populated
/// depending on the endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub lead_type: LeadType,
    /// RFC 3339 timestamp on the wire.
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, deserialize_with = "super::empty_as_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "super::empty_as_none")]
    pub purpose: Option<Purpose>,
    #[serde(default, deserialize_with = "super::empty_as_none")]
    pub budget: Option<String>,
    #[serde(default, deserialize_with = "super::empty_as_none")]
    pub bhk: Option<Bhk>,
    #[serde(default, deserialize_with = "super::empty_as_none")]
    pub lead_source: Option<LeadSource>,
    #[serde(default)]
    pub lead_status: LeadStatus,
    #[serde(default, deserialize_with = "super::empty_as_none")]
    pub financing: Option<Financing>,
    #[serde(default, deserialize_with = "super::empty_as_none")]
    pub company: Option<EntityRef>,
    #[serde(default, deserialize_with = "super::empty_as_none")]
    pub channel_partner: Option<EntityRef>,
}

/// Fields of the lead form, in traversal order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LeadField {
    LeadType,
    Date,
    FullName,
    Phone,
    Email,
    Purpose,
    Budget,
    Bhk,
    LeadSource,
    LeadStatus,
    Financing,
    Company,
    ChannelPartner,
}

impl LeadField {
    pub const ALL: [LeadField; 13] = [
        LeadField::LeadType,
        LeadField::Date,
        LeadField::FullName,
        LeadField::Phone,
        LeadField::Email,
        LeadField::Purpose,
        LeadField::Budget,
        LeadField::Bhk,
        LeadField::LeadSource,
        LeadField::LeadStatus,
        LeadField::Financing,
        LeadField::Company,
        LeadField::ChannelPartner,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            LeadField::LeadType => "Lead Type",
            LeadField::Date => "Date",
            LeadField::FullName => "Full Name",
            LeadField::Phone => "Phone",
            LeadField::Email => "Email",
            LeadField::Purpose => "Purpose",
            LeadField::Budget => "Budget",
            LeadField::Bhk => "BHK",
            LeadField::LeadSource => "Lead Source",
            LeadField::LeadStatus => "Lead Status",
            LeadField::Financing => "Financing",
            LeadField::Company => "Company",
            LeadField::ChannelPartner => "Channel Partner",
        }
    }
}

/// The lead form's local, unsaved copy. Text fields are edited in place;
/// select fields hold `None` until the user picks something. References are
/// bare identities here, never embedded objects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeadDraft {
    pub lead_type: LeadType,
    /// `YYYY-MM-DD` while in the form; converted to RFC 3339 on submit.
    pub date: String,
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub purpose: Option<Purpose>,
    pub budget: String,
    pub bhk: Option<Bhk>,
    pub lead_source: Option<LeadSource>,
    pub lead_status: LeadStatus,
    pub financing: Option<Financing>,
    pub company_id: String,
    pub channel_partner_id: String,
}

impl Default for LeadDraft {
    fn default() -> Self {
        Self {
            lead_type: LeadType::default(),
            date: datetime::today_ymd(),
            full_name: String::new(),
            phone: String::new(),
            email: String::new(),
            purpose: None,
            budget: String::new(),
            bhk: None,
            lead_source: None,
            lead_status: LeadStatus::default(),
            financing: None,
            company_id: String::new(),
            channel_partner_id: String::new(),
        }
    }
}

impl LeadDraft {
    /// Builds the edit draft for an existing record. References unwrap to
    /// bare identities and the wire timestamp normalizes to `YYYY-MM-DD`
    /// here, nowhere else.
    pub fn from_lead(lead: &Lead) -> Self {
        Self {
            lead_type: lead.lead_type,
            date: lead
                .date
                .as_deref()
                .and_then(datetime::rfc3339_to_ymd)
                .unwrap_or_else(datetime::today_ymd),
            full_name: lead.full_name.clone(),
            phone: lead.phone.clone(),
            email: lead.email.clone().unwrap_or_default(),
            purpose: lead.purpose,
            budget: lead.budget.clone().unwrap_or_default(),
            bhk: lead.bhk,
            lead_source: lead.lead_source,
            lead_status: lead.lead_status,
            financing: lead.financing,
            company_id: lead
                .company
                .as_ref()
                .map(|r| r.id().to_string())
                .unwrap_or_default(),
            channel_partner_id: lead
                .channel_partner
                .as_ref()
                .map(|r| r.id().to_string())
                .unwrap_or_default(),
        }
    }

    /// Builds the request body for create/update. The partner reference is
    /// blanked unless the lead came through a channel partner, and the form
    /// date becomes an RFC 3339 timestamp.
    pub fn to_payload(&self) -> LeadPayload {
        let channel_partner = match self.lead_type {
            LeadType::ChannelPartner if !self.channel_partner_id.is_empty() => {
                Some(self.channel_partner_id.clone())
            }
            _ => None,
        };
        LeadPayload {
            lead_type: self.lead_type,
            date: datetime::ymd_to_rfc3339(&self.date).unwrap_or_else(|| self.date.clone()),
            full_name: self.full_name.clone(),
            phone: self.phone.clone(),
            email: super::none_if_empty(&self.email),
            purpose: self.purpose,
            budget: super::none_if_empty(&self.budget),
            bhk: self.bhk,
            lead_source: self.lead_source,
            lead_status: self.lead_status,
            financing: self.financing,
            company: self.company_id.clone(),
            channel_partner,
        }
    }
}

/// Request body for lead create/update.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadPayload {
    pub lead_type: LeadType,
    pub date: String,
    pub full_name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<Purpose>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bhk: Option<Bhk>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_source: Option<LeadSource>,
    pub lead_status: LeadStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financing: Option<Financing>,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_partner: Option<String>,
}

/// Client-side lead filter: exact match on company and/or partner identity,
/// `None` meaning "all". A pure view transform; the collection is untouched.
pub fn filter_leads<'a>(
    leads: &'a [Lead],
    company_id: Option<&str>,
    partner_id: Option<&str>,
) -> Vec<&'a Lead> {
    leads
        .iter()
        .filter(|lead| {
            company_id.map_or(true, |id| {
                lead.company.as_ref().map(EntityRef::id) == Some(id)
            })
        })
        .filter(|lead| {
            partner_id.map_or(true, |id| {
                lead.channel_partner.as_ref().map(EntityRef::id) == Some(id)
            })
        })
        .collect()
}
