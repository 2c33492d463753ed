use std::collections::BTreeMap;
use std::sync::Arc;

use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Serialize};

use crate::domain::repositories::{AnimalRepository, DistributionRepository};
use crate::domain::value_objects::{AnimalType, DistributionStatus, ProcessStage};
use crate::shared::errors::AppResult;

/// Summary statistics for the committee dashboard. Weights are exact
/// decimals; repeated small-weight sums must not drift.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_animals: i64,
    pub total_cows: i64,
    pub total_goats: i64,
    /// Always carries all eight stages, zero-filled.
    pub animals_by_stage: BTreeMap<ProcessStage, i64>,
    pub total_weight: BigDecimal,
    pub total_distributed_weight: BigDecimal,
}

pub struct DashboardService {
    animal_repo: Arc<dyn AnimalRepository>,
    distribution_repo: Arc<dyn DistributionRepository>,
}

impl DashboardService {
    pub fn new(
        animal_repo: Arc<dyn AnimalRepository>,
        distribution_repo: Arc<dyn DistributionRepository>,
    ) -> Self {
        Self {
            animal_repo,
            distribution_repo,
        }
    }

    /// Recompute the dashboard from current store contents. An empty store
    /// yields all-zero statistics with the full stage map.
    pub async fn compute_stats(&self) -> AppResult<DashboardStats> {
        let animals = self.animal_repo.get_all().await?;
        let distributions = self.distribution_repo.get_all().await?;

        let mut animals_by_stage: BTreeMap<ProcessStage, i64> =
            ProcessStage::ALL.iter().map(|s| (*s, 0)).collect();

        let mut total_cows = 0;
        let mut total_goats = 0;
        let mut total_weight = BigDecimal::zero();

        for animal in &animals {
            match animal.animal_type {
                AnimalType::Cow => total_cows += 1,
                AnimalType::Goat => total_goats += 1,
            }

            if let Some(count) = animals_by_stage.get_mut(&animal.current_stage) {
                *count += 1;
            }

            // Missing weight contributes exactly zero.
            if let Some(weight) = &animal.weight {
                total_weight = &total_weight + weight;
            }
        }

        let mut total_distributed_weight = BigDecimal::zero();
        for record in &distributions {
            if record.status == DistributionStatus::Completed {
                total_distributed_weight = &total_distributed_weight + &record.weight_distributed;
            }
        }

        Ok(DashboardStats {
            total_animals: animals.len() as i64,
            total_cows,
            total_goats,
            animals_by_stage,
            total_weight: total_weight.with_scale(2),
            total_distributed_weight: total_distributed_weight.with_scale(2),
        })
    }
}
