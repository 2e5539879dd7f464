//! Cross-entity references as they appear on the wire.
//!
//! Depending on whether the backend populated the relation, a lead's
//! `company` or `channelPartner` field arrives either as a bare identity
//! string or as an embedded object carrying the identity plus a display name.
//! [`EntityRef`] captures both shapes; unwrapping back to a bare identity
//! happens in exactly one place, [`EntityRef::id`], which the edit-draft
//! conversions use.

use serde::{Deserialize, Serialize};

/// A reference to another entity, either bare or populated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityRef {
    Id(String),
    Embedded(EmbeddedRef),
}

/// The populated form of a reference. Companies carry `name`, channel
/// partners carry `fullName`; both are optional so a half-populated object
/// still decodes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddedRef {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, rename = "fullName", skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

impl EntityRef {
    /// The referenced identity, regardless of wire shape.
    pub fn id(&self) -> &str {
        match self {
            EntityRef::Id(id) => id,
            EntityRef::Embedded(embedded) => &embedded.id,
        }
    }

    /// Display name when the reference was populated by the backend.
    pub fn display_name(&self) -> Option<&str> {
        match self {
            EntityRef::Id(_) => None,
            EntityRef::Embedded(embedded) => {
                embedded.name.as_deref().or(embedded.full_name.as_deref())
            }
        }
    }
}
