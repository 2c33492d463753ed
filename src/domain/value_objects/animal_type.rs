use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(
    diesel_derive_enum::DbEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize,
)]
#[ExistingTypePath = "crate::schema::sql_types::AnimalType"]
#[serde(rename_all = "snake_case")]
pub enum AnimalType {
    Cow,
    Goat,
}

impl fmt::Display for AnimalType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AnimalType::Cow => write!(f, "cow"),
            AnimalType::Goat => write!(f, "goat"),
        }
    }
}
