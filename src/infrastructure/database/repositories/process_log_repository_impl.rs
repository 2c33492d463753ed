use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use crate::domain::entities::ProcessLog;
use crate::domain::repositories::ProcessLogRepository;
use crate::infrastructure::database::{connection::Database, models::ProcessLogModel};
use crate::schema::process_logs;
use crate::shared::errors::AppResult;

pub struct ProcessLogRepositoryImpl {
    db: Arc<Database>,
}

impl ProcessLogRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProcessLogRepository for ProcessLogRepositoryImpl {
    async fn get_all(&self) -> AppResult<Vec<ProcessLog>> {
        let db = Arc::clone(&self.db);

        let models = task::spawn_blocking(move || -> AppResult<Vec<ProcessLogModel>> {
            let mut conn = db.get_connection()?;
            let ms = process_logs::table
                .order(process_logs::id.asc())
                .load::<ProcessLogModel>(&mut conn)?;
            Ok(ms)
        })
        .await??;

        Ok(models.into_iter().map(ProcessLogModel::into_entity).collect())
    }

    async fn find_by_animal(&self, animal_id: i32) -> AppResult<Vec<ProcessLog>> {
        let db = Arc::clone(&self.db);

        let models = task::spawn_blocking(move || -> AppResult<Vec<ProcessLogModel>> {
            let mut conn = db.get_connection()?;
            let ms = process_logs::table
                .filter(process_logs::animal_id.eq(animal_id))
                .order(process_logs::id.asc())
                .load::<ProcessLogModel>(&mut conn)?;
            Ok(ms)
        })
        .await??;

        Ok(models.into_iter().map(ProcessLogModel::into_entity).collect())
    }
}
