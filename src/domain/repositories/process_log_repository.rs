use async_trait::async_trait;

use crate::domain::entities::ProcessLog;
use crate::shared::errors::AppResult;

/// Read-only: log rows are appended inside the animal repository's stage
/// transaction and never touched afterwards.
#[async_trait]
pub trait ProcessLogRepository: Send + Sync {
    async fn get_all(&self) -> AppResult<Vec<ProcessLog>>;
    async fn find_by_animal(&self, animal_id: i32) -> AppResult<Vec<ProcessLog>>;
}
