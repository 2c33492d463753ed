use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use crate::domain::entities::DistributionRecord;
use crate::domain::repositories::{distribution_repository::NewDistribution, DistributionRepository};
use crate::infrastructure::database::{
    connection::Database,
    models::{DistributionRecordModel, NewDistributionModel},
};
use crate::schema::distribution_records;
use crate::shared::errors::AppResult;

pub struct DistributionRepositoryImpl {
    db: Arc<Database>,
}

impl DistributionRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DistributionRepository for DistributionRepositoryImpl {
    async fn save(&self, new_distribution: NewDistribution) -> AppResult<DistributionRecord> {
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<DistributionRecordModel> {
            let mut conn = db.get_connection()?;
            let row = NewDistributionModel {
                animal_id: new_distribution.animal_id,
                recipient_category: new_distribution.recipient_category,
                recipient_name: new_distribution.recipient_name,
                weight_distributed: new_distribution.weight_distributed.with_scale(2),
                status: new_distribution.status,
                distributed_at: new_distribution.distributed_at,
                distributed_by: new_distribution.distributed_by,
                notes: new_distribution.notes,
            };
            let inserted = diesel::insert_into(distribution_records::table)
                .values(&row)
                .get_result::<DistributionRecordModel>(&mut conn)?;
            Ok(inserted)
        })
        .await??;

        Ok(model.into_entity())
    }

    async fn get_all(&self) -> AppResult<Vec<DistributionRecord>> {
        let db = Arc::clone(&self.db);

        let models = task::spawn_blocking(move || -> AppResult<Vec<DistributionRecordModel>> {
            let mut conn = db.get_connection()?;
            let ms = distribution_records::table
                .order(distribution_records::id.asc())
                .load::<DistributionRecordModel>(&mut conn)?;
            Ok(ms)
        })
        .await??;

        Ok(models
            .into_iter()
            .map(DistributionRecordModel::into_entity)
            .collect())
    }

    async fn find_by_animal(&self, animal_id: i32) -> AppResult<Vec<DistributionRecord>> {
        let db = Arc::clone(&self.db);

        let models = task::spawn_blocking(move || -> AppResult<Vec<DistributionRecordModel>> {
            let mut conn = db.get_connection()?;
            let ms = distribution_records::table
                .filter(distribution_records::animal_id.eq(animal_id))
                .order(distribution_records::id.asc())
                .load::<DistributionRecordModel>(&mut conn)?;
            Ok(ms)
        })
        .await??;

        Ok(models
            .into_iter()
            .map(DistributionRecordModel::into_entity)
            .collect())
    }
}
