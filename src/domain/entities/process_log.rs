use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ProcessStage;

/// Append-only audit trail: one row per stage transition, never mutated or
/// deleted. This is the system of record for what happened when.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessLog {
    pub id: i32,
    pub animal_id: i32,
    pub stage: ProcessStage,
    pub weight_recorded: Option<BigDecimal>,
    pub completed_at: DateTime<Utc>,
    pub notes: Option<String>,
    pub processed_by: i32,
}
