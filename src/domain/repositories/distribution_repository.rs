use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};

use crate::domain::entities::DistributionRecord;
use crate::domain::value_objects::{DistributionStatus, RecipientCategory};
use crate::shared::errors::AppResult;

/// Creation payload. The distribution service always sets status Completed
/// and a distributed_at timestamp; other states only enter through fixtures
/// or external imports.
#[derive(Debug, Clone)]
pub struct NewDistribution {
    pub animal_id: i32,
    pub recipient_category: RecipientCategory,
    pub recipient_name: Option<String>,
    pub weight_distributed: BigDecimal,
    pub status: DistributionStatus,
    pub distributed_at: Option<DateTime<Utc>>,
    pub distributed_by: Option<i32>,
    pub notes: Option<String>,
}

#[async_trait]
pub trait DistributionRepository: Send + Sync {
    async fn save(&self, new_distribution: NewDistribution) -> AppResult<DistributionRecord>;
    async fn get_all(&self) -> AppResult<Vec<DistributionRecord>>;
    async fn find_by_animal(&self, animal_id: i32) -> AppResult<Vec<DistributionRecord>>;
}
