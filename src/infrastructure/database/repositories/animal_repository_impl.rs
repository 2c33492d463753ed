use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use tokio::task;

use crate::domain::entities::{Animal, AnimalWithOwner, StageAdvance};
use crate::domain::repositories::{animal_repository::NewAnimal, AnimalRepository};
use crate::domain::value_objects::ProcessStage;
use crate::infrastructure::database::{
    connection::Database,
    models::{AnimalModel, AnimalStageChangeset, NewAnimalModel, NewProcessLogModel},
};
use crate::schema::{animals, process_logs, users};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;

pub struct AnimalRepositoryImpl {
    db: Arc<Database>,
}

impl AnimalRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AnimalRepository for AnimalRepositoryImpl {
    async fn save(&self, new_animal: NewAnimal) -> AppResult<Animal> {
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<AnimalModel> {
            let mut conn = db.get_connection()?;
            let row = NewAnimalModel {
                type_: new_animal.animal_type,
                owner_id: new_animal.owner_id,
                current_stage: ProcessStage::Registration,
                weight: new_animal.weight,
                notes: new_animal.notes,
            };
            let inserted = diesel::insert_into(animals::table)
                .values(&row)
                .get_result::<AnimalModel>(&mut conn)?;
            Ok(inserted)
        })
        .await??;

        Ok(model.into_entity())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Animal>> {
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<Option<AnimalModel>> {
            let mut conn = db.get_connection()?;
            let m = animals::table
                .filter(animals::id.eq(id))
                .first::<AnimalModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(AnimalModel::into_entity))
    }

    async fn get_all(&self) -> AppResult<Vec<Animal>> {
        let db = Arc::clone(&self.db);

        let models = task::spawn_blocking(move || -> AppResult<Vec<AnimalModel>> {
            let mut conn = db.get_connection()?;
            let ms = animals::table
                .order(animals::id.asc())
                .load::<AnimalModel>(&mut conn)?;
            Ok(ms)
        })
        .await??;

        Ok(models.into_iter().map(AnimalModel::into_entity).collect())
    }

    async fn get_all_with_owner(&self) -> AppResult<Vec<AnimalWithOwner>> {
        let db = Arc::clone(&self.db);

        let rows = task::spawn_blocking(move || -> AppResult<Vec<(AnimalModel, String, String)>> {
            let mut conn = db.get_connection()?;
            let rs = animals::table
                .inner_join(users::table)
                .order(animals::id.asc())
                .select((AnimalModel::as_select(), users::name, users::email))
                .load::<(AnimalModel, String, String)>(&mut conn)?;
            Ok(rs)
        })
        .await??;

        Ok(rows
            .into_iter()
            .map(|(m, name, email)| m.into_entity_with_owner(name, email))
            .collect())
    }

    async fn find_by_owner(&self, owner_id: i32) -> AppResult<Vec<AnimalWithOwner>> {
        let db = Arc::clone(&self.db);

        let rows = task::spawn_blocking(move || -> AppResult<Vec<(AnimalModel, String, String)>> {
            let mut conn = db.get_connection()?;
            let rs = animals::table
                .inner_join(users::table)
                .filter(animals::owner_id.eq(owner_id))
                .order(animals::id.asc())
                .select((AnimalModel::as_select(), users::name, users::email))
                .load::<(AnimalModel, String, String)>(&mut conn)?;
            Ok(rs)
        })
        .await??;

        Ok(rows
            .into_iter()
            .map(|(m, name, email)| m.into_entity_with_owner(name, email))
            .collect())
    }

    async fn advance_stage(&self, animal_id: i32, advance: StageAdvance) -> AppResult<Animal> {
        let db = Arc::clone(&self.db);
        let new_stage = advance.new_stage;
        let processed_by = advance.processed_by;

        let updated = task::spawn_blocking(move || -> AppResult<AnimalModel> {
            let mut conn = db.get_connection()?;

            // Animal update and log append must land together or not at all.
            conn.transaction::<AnimalModel, AppError, _>(|conn| {
                let model = animals::table
                    .filter(animals::id.eq(animal_id))
                    .first::<AnimalModel>(conn)
                    .optional()?
                    .ok_or_else(|| {
                        AppError::NotFound(format!("Animal with id {} not found", animal_id))
                    })?;

                let now = Utc::now();
                let mut animal = model.into_entity();
                animal.apply_stage_advance(&advance, now);

                let changeset = AnimalStageChangeset {
                    current_stage: animal.current_stage,
                    weight: animal.weight.clone(),
                    slaughter_date: animal.slaughter_date,
                    completion_date: animal.completion_date,
                    notes: animal.notes.clone(),
                };

                let updated = diesel::update(animals::table.filter(animals::id.eq(animal_id)))
                    .set(&changeset)
                    .get_result::<AnimalModel>(conn)?;

                let log_row = NewProcessLogModel {
                    animal_id,
                    stage: advance.new_stage,
                    weight_recorded: advance.weight_recorded.clone().map(|w| w.with_scale(2)),
                    completed_at: now,
                    notes: advance.notes.clone(),
                    processed_by: advance.processed_by,
                };
                diesel::insert_into(process_logs::table)
                    .values(&log_row)
                    .execute(conn)?;

                Ok(updated)
            })
        })
        .await??;

        LogContext::stage_transition(animal_id, &new_stage.to_string(), processed_by);

        Ok(updated.into_entity())
    }
}
