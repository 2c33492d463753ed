use serde::{Deserialize, Serialize};
use std::fmt;

/// Who receives a share of the distributed meat.
#[derive(
    diesel_derive_enum::DbEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize,
)]
#[ExistingTypePath = "crate::schema::sql_types::RecipientCategory"]
#[serde(rename_all = "snake_case")]
pub enum RecipientCategory {
    Participant,
    Resident,
    Needy,
    Proposal,
    Committee,
}

impl RecipientCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            RecipientCategory::Participant => "Qurban Participant",
            RecipientCategory::Resident => "Local Resident",
            RecipientCategory::Needy => "Needy",
            RecipientCategory::Proposal => "Proposal",
            RecipientCategory::Committee => "Committee",
        }
    }
}

impl fmt::Display for RecipientCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            RecipientCategory::Participant => "participant",
            RecipientCategory::Resident => "resident",
            RecipientCategory::Needy => "needy",
            RecipientCategory::Proposal => "proposal",
            RecipientCategory::Committee => "committee",
        };
        write!(f, "{}", s)
    }
}
