use serde::{Deserialize, Serialize};
use std::fmt;

/// Distribution records are created as Completed; Pending is a valid stored
/// state but only ever arrives through out-of-band inserts.
#[derive(
    diesel_derive_enum::DbEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize,
)]
#[ExistingTypePath = "crate::schema::sql_types::DistributionStatus"]
#[serde(rename_all = "snake_case")]
pub enum DistributionStatus {
    Pending,
    Completed,
}

impl fmt::Display for DistributionStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DistributionStatus::Pending => write!(f, "pending"),
            DistributionStatus::Completed => write!(f, "completed"),
        }
    }
}
