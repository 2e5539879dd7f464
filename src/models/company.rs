//! Company record and draft.

use serde::{Deserialize, Serialize};

/// A company as fetched from the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, deserialize_with = "super::empty_as_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "super::empty_as_none")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "super::empty_as_none")]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "super::empty_as_none")]
    pub description: Option<String>,
}

/// Fields of the company form, in traversal order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum CompanyField {
    Name,
    Phone,
    Email,
    Address,
    Website,
    Description,
}

impl CompanyField {
    pub const ALL: [CompanyField; 6] = [
        CompanyField::Name,
        CompanyField::Phone,
        CompanyField::Email,
        CompanyField::Address,
        CompanyField::Website,
        CompanyField::Description,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CompanyField::Name => "Name",
            CompanyField::Phone => "Phone",
            CompanyField::Email => "Email",
            CompanyField::Address => "Address",
            CompanyField::Website => "Website",
            CompanyField::Description => "Description",
        }
    }
}

/// The company form's local, unsaved copy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompanyDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub website: String,
    pub description: String,
}

impl CompanyDraft {
    pub fn from_company(company: &Company) -> Self {
        Self {
            name: company.name.clone(),
            phone: company.phone.clone(),
            email: company.email.clone().unwrap_or_default(),
            address: company.address.clone().unwrap_or_default(),
            website: company.website.clone().unwrap_or_default(),
            description: company.description.clone().unwrap_or_default(),
        }
    }

    pub fn to_payload(&self) -> CompanyPayload {
        CompanyPayload {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: super::none_if_empty(&self.email),
            address: super::none_if_empty(&self.address),
            website: super::none_if_empty(&self.website),
            description: super::none_if_empty(&self.description),
        }
    }
}

/// Request body for company create/update.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyPayload {
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
