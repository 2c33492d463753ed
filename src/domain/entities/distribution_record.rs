use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{DistributionStatus, RecipientCategory};

/// A share of meat handed out to a recipient. Immutable once created; the
/// sum of distributed weight is deliberately not capped by the animal's
/// recorded weight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionRecord {
    pub id: i32,
    pub animal_id: i32,
    pub recipient_category: RecipientCategory,
    pub recipient_name: Option<String>,
    pub weight_distributed: BigDecimal,
    pub status: DistributionStatus,
    pub distributed_at: Option<DateTime<Utc>>,
    pub distributed_by: Option<i32>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}
