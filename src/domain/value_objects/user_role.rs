use serde::{Deserialize, Serialize};
use std::fmt;

/// Role enum matching the database type. The role is supplied by the client
/// at registration; server-side enforcement is an explicit non-goal.
#[derive(
    diesel_derive_enum::DbEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize,
)]
#[ExistingTypePath = "crate::schema::sql_types::UserRole"]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Participant,
}

impl UserRole {
    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Admin => "Committee / Admin",
            UserRole::Participant => "Qurban Participant",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UserRole::Admin => write!(f, "admin"),
            UserRole::Participant => write!(f, "participant"),
        }
    }
}
