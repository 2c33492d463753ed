use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::entities::{Animal, AnimalWithOwner, StageAdvance};
use crate::domain::value_objects::AnimalType;
use crate::shared::errors::AppResult;

/// Creation payload; new animals always start at the Registration stage.
#[derive(Debug, Clone)]
pub struct NewAnimal {
    pub animal_type: AnimalType,
    pub owner_id: i32,
    pub weight: Option<BigDecimal>,
    pub notes: Option<String>,
}

#[async_trait]
pub trait AnimalRepository: Send + Sync {
    async fn save(&self, new_animal: NewAnimal) -> AppResult<Animal>;
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Animal>>;
    async fn get_all(&self) -> AppResult<Vec<Animal>>;
    async fn get_all_with_owner(&self) -> AppResult<Vec<AnimalWithOwner>>;
    async fn find_by_owner(&self, owner_id: i32) -> AppResult<Vec<AnimalWithOwner>>;

    /// Apply a stage transition and append its process log entry as one
    /// atomic unit. Fails with NotFound (and no partial mutation) when the
    /// animal does not exist.
    async fn advance_stage(&self, animal_id: i32, advance: StageAdvance) -> AppResult<Animal>;
}
