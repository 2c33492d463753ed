use std::sync::Arc;

use chrono::Utc;

use crate::application::dto::RecordDistributionRequest;
use crate::domain::entities::DistributionRecord;
use crate::domain::repositories::{
    distribution_repository::NewDistribution, AnimalRepository, DistributionRepository,
    UserRepository,
};
use crate::domain::value_objects::DistributionStatus;
use crate::log_info;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

pub struct DistributionService {
    distribution_repo: Arc<dyn DistributionRepository>,
    animal_repo: Arc<dyn AnimalRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl DistributionService {
    pub fn new(
        distribution_repo: Arc<dyn DistributionRepository>,
        animal_repo: Arc<dyn AnimalRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            distribution_repo,
            animal_repo,
            user_repo,
        }
    }

    /// Hand out a share of meat. Records are created Completed with a
    /// distribution timestamp; there is no pending workflow through this
    /// path. Distributed weight is not capped by the animal's recorded
    /// weight.
    pub async fn record_distribution(
        &self,
        request: RecordDistributionRequest,
    ) -> AppResult<DistributionRecord> {
        Validator::validate_distribution_weight(&request.weight_distributed)?;

        self.animal_repo
            .find_by_id(request.animal_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Animal with id {} not found", request.animal_id))
            })?;

        self.user_repo
            .find_by_id(request.distributed_by)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("User with id {} not found", request.distributed_by))
            })?;

        let record = self
            .distribution_repo
            .save(NewDistribution {
                animal_id: request.animal_id,
                recipient_category: request.recipient_category,
                recipient_name: request.recipient_name,
                weight_distributed: request.weight_distributed.with_scale(2),
                status: DistributionStatus::Completed,
                distributed_at: Some(Utc::now()),
                distributed_by: Some(request.distributed_by),
                notes: request.notes,
            })
            .await?;

        log_info!(
            "Distributed {} kg from animal {} to {}",
            record.weight_distributed,
            record.animal_id,
            record.recipient_category
        );

        Ok(record)
    }

    pub async fn list_distributions(&self) -> AppResult<Vec<DistributionRecord>> {
        self.distribution_repo.get_all().await
    }

    /// Empty list (not an error) when the animal has no records or does not
    /// exist.
    pub async fn list_distributions_by_animal(
        &self,
        animal_id: i32,
    ) -> AppResult<Vec<DistributionRecord>> {
        self.distribution_repo.find_by_animal(animal_id).await
    }
}
