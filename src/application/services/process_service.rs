use std::sync::Arc;

use crate::application::dto::AdvanceStageRequest;
use crate::domain::entities::{Animal, ProcessLog, StageAdvance};
use crate::domain::repositories::{AnimalRepository, ProcessLogRepository};
use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

/// The stage machine's entry point. Validation happens here; the atomic
/// update-plus-log-append lives behind `AnimalRepository::advance_stage`.
pub struct ProcessService {
    animal_repo: Arc<dyn AnimalRepository>,
    log_repo: Arc<dyn ProcessLogRepository>,
}

impl ProcessService {
    pub fn new(
        animal_repo: Arc<dyn AnimalRepository>,
        log_repo: Arc<dyn ProcessLogRepository>,
    ) -> Self {
        Self {
            animal_repo,
            log_repo,
        }
    }

    /// Move an animal to `new_stage` and append the audit log entry.
    ///
    /// Any stage is accepted, forward or backward; the committee UI only
    /// requests sequential advances, but administrative corrections use the
    /// same operation.
    pub async fn advance_stage(&self, request: AdvanceStageRequest) -> AppResult<Animal> {
        if let Some(weight) = &request.weight_recorded {
            Validator::validate_animal_weight(weight)?;
        }

        self.animal_repo
            .advance_stage(
                request.animal_id,
                StageAdvance {
                    new_stage: request.new_stage,
                    weight_recorded: request.weight_recorded,
                    notes: request.notes,
                    processed_by: request.processed_by,
                },
            )
            .await
    }

    pub async fn list_process_logs(&self) -> AppResult<Vec<ProcessLog>> {
        self.log_repo.get_all().await
    }

    pub async fn list_process_logs_by_animal(&self, animal_id: i32) -> AppResult<Vec<ProcessLog>> {
        self.log_repo.find_by_animal(animal_id).await
    }
}
