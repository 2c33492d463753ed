use std::sync::Arc;

use crate::application::dto::RegisterAnimalRequest;
use crate::domain::entities::{Animal, AnimalWithOwner};
use crate::domain::repositories::{animal_repository::NewAnimal, AnimalRepository, UserRepository};
use crate::log_info;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

pub struct AnimalService {
    animal_repo: Arc<dyn AnimalRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl AnimalService {
    pub fn new(animal_repo: Arc<dyn AnimalRepository>, user_repo: Arc<dyn UserRepository>) -> Self {
        Self {
            animal_repo,
            user_repo,
        }
    }

    /// Register a new animal at the Registration stage.
    pub async fn register_animal(&self, request: RegisterAnimalRequest) -> AppResult<Animal> {
        if let Some(weight) = &request.weight {
            Validator::validate_animal_weight(weight)?;
        }

        self.user_repo
            .find_by_id(request.owner_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("User with id {} not found", request.owner_id))
            })?;

        let animal = self
            .animal_repo
            .save(NewAnimal {
                animal_type: request.animal_type,
                owner_id: request.owner_id,
                weight: request.weight.map(|w| w.with_scale(2)),
                notes: request.notes,
            })
            .await?;

        log_info!(
            "Registered {} #{} for owner {}",
            animal.animal_type,
            animal.id,
            animal.owner_id
        );

        Ok(animal)
    }

    pub async fn list_animals(&self) -> AppResult<Vec<AnimalWithOwner>> {
        self.animal_repo.get_all_with_owner().await
    }

    /// A participant's view: only their own animals. Unknown owners yield an
    /// empty list, not an error.
    pub async fn list_animals_by_owner(&self, owner_id: i32) -> AppResult<Vec<AnimalWithOwner>> {
        self.animal_repo.find_by_owner(owner_id).await
    }
}
