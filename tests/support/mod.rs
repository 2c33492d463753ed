#![allow(dead_code)]

use std::str::FromStr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::Utc;

use qurban_tracker::domain::entities::{
    Animal, AnimalWithOwner, DistributionRecord, ProcessLog, StageAdvance, User,
};
use qurban_tracker::domain::repositories::{
    animal_repository::NewAnimal, distribution_repository::NewDistribution,
    user_repository::NewUser, AnimalRepository, DistributionRepository, ProcessLogRepository,
    UserRepository,
};
use qurban_tracker::domain::value_objects::{ProcessStage, UserRole};
use qurban_tracker::shared::errors::{AppError, AppResult};
use qurban_tracker::AppContext;

pub fn bd(s: &str) -> BigDecimal {
    BigDecimal::from_str(s).unwrap()
}

#[derive(Default)]
struct StoreInner {
    users: Vec<User>,
    animals: Vec<Animal>,
    logs: Vec<ProcessLog>,
    distributions: Vec<DistributionRecord>,
}

/// Shared in-memory backing store. The repository wrappers below implement
/// the domain traits over it, mirroring the transactional behavior of the
/// Postgres implementations (a failed stage advance mutates nothing).
#[derive(Default)]
pub struct InMemoryStore {
    inner: Mutex<StoreInner>,
}

pub struct InMemoryUserRepository(Arc<InMemoryStore>);
pub struct InMemoryAnimalRepository(Arc<InMemoryStore>);
pub struct InMemoryProcessLogRepository(Arc<InMemoryStore>);
pub struct InMemoryDistributionRepository(Arc<InMemoryStore>);

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, new_user: NewUser) -> AppResult<User> {
        let mut inner = self.0.inner.lock().unwrap();
        if inner.users.iter().any(|u| u.email == new_user.email) {
            return Err(AppError::Conflict(format!(
                "duplicate key value violates unique constraint: {}",
                new_user.email
            )));
        }
        let user = User {
            id: inner.users.len() as i32 + 1,
            name: new_user.name,
            email: new_user.email,
            phone: new_user.phone,
            role: new_user.role,
            created_at: Utc::now(),
        };
        inner.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let inner = self.0.inner.lock().unwrap();
        Ok(inner.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let inner = self.0.inner.lock().unwrap();
        Ok(inner.users.iter().find(|u| u.email == email).cloned())
    }

    async fn get_all(&self) -> AppResult<Vec<User>> {
        let inner = self.0.inner.lock().unwrap();
        Ok(inner.users.clone())
    }

    async fn find_by_role(&self, role: UserRole) -> AppResult<Vec<User>> {
        let inner = self.0.inner.lock().unwrap();
        Ok(inner
            .users
            .iter()
            .filter(|u| u.role == role)
            .cloned()
            .collect())
    }
}

impl InMemoryStore {
    fn with_owner(&self, animal: &Animal) -> Option<AnimalWithOwner> {
        let inner = self.inner.lock().unwrap();
        let owner = inner.users.iter().find(|u| u.id == animal.owner_id)?;
        Some(AnimalWithOwner {
            id: animal.id,
            animal_type: animal.animal_type,
            owner_id: animal.owner_id,
            owner_name: owner.name.clone(),
            owner_email: owner.email.clone(),
            current_stage: animal.current_stage,
            weight: animal.weight.clone(),
            registration_date: animal.registration_date,
            slaughter_date: animal.slaughter_date,
            completion_date: animal.completion_date,
            notes: animal.notes.clone(),
            created_at: animal.created_at,
        })
    }
}

#[async_trait]
impl AnimalRepository for InMemoryAnimalRepository {
    async fn save(&self, new_animal: NewAnimal) -> AppResult<Animal> {
        let mut inner = self.0.inner.lock().unwrap();
        let now = Utc::now();
        let animal = Animal {
            id: inner.animals.len() as i32 + 1,
            animal_type: new_animal.animal_type,
            owner_id: new_animal.owner_id,
            current_stage: ProcessStage::Registration,
            weight: new_animal.weight,
            registration_date: now,
            slaughter_date: None,
            completion_date: None,
            notes: new_animal.notes,
            created_at: now,
        };
        inner.animals.push(animal.clone());
        Ok(animal)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Animal>> {
        let inner = self.0.inner.lock().unwrap();
        Ok(inner.animals.iter().find(|a| a.id == id).cloned())
    }

    async fn get_all(&self) -> AppResult<Vec<Animal>> {
        let inner = self.0.inner.lock().unwrap();
        Ok(inner.animals.clone())
    }

    async fn get_all_with_owner(&self) -> AppResult<Vec<AnimalWithOwner>> {
        let animals = { self.0.inner.lock().unwrap().animals.clone() };
        Ok(animals
            .iter()
            .filter_map(|a| self.0.with_owner(a))
            .collect())
    }

    async fn find_by_owner(&self, owner_id: i32) -> AppResult<Vec<AnimalWithOwner>> {
        let animals = { self.0.inner.lock().unwrap().animals.clone() };
        Ok(animals
            .iter()
            .filter(|a| a.owner_id == owner_id)
            .filter_map(|a| self.0.with_owner(a))
            .collect())
    }

    async fn advance_stage(&self, animal_id: i32, advance: StageAdvance) -> AppResult<Animal> {
        let mut inner = self.0.inner.lock().unwrap();
        let now = Utc::now();

        let animal = inner
            .animals
            .iter_mut()
            .find(|a| a.id == animal_id)
            .ok_or_else(|| AppError::NotFound(format!("Animal with id {} not found", animal_id)))?;

        animal.apply_stage_advance(&advance, now);
        let updated = animal.clone();

        let log = ProcessLog {
            id: inner.logs.len() as i32 + 1,
            animal_id,
            stage: advance.new_stage,
            weight_recorded: advance.weight_recorded.map(|w| w.with_scale(2)),
            completed_at: now,
            notes: advance.notes,
            processed_by: advance.processed_by,
        };
        inner.logs.push(log);

        Ok(updated)
    }
}

#[async_trait]
impl ProcessLogRepository for InMemoryProcessLogRepository {
    async fn get_all(&self) -> AppResult<Vec<ProcessLog>> {
        let inner = self.0.inner.lock().unwrap();
        Ok(inner.logs.clone())
    }

    async fn find_by_animal(&self, animal_id: i32) -> AppResult<Vec<ProcessLog>> {
        let inner = self.0.inner.lock().unwrap();
        Ok(inner
            .logs
            .iter()
            .filter(|l| l.animal_id == animal_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl DistributionRepository for InMemoryDistributionRepository {
    async fn save(&self, new_distribution: NewDistribution) -> AppResult<DistributionRecord> {
        let mut inner = self.0.inner.lock().unwrap();
        let record = DistributionRecord {
            id: inner.distributions.len() as i32 + 1,
            animal_id: new_distribution.animal_id,
            recipient_category: new_distribution.recipient_category,
            recipient_name: new_distribution.recipient_name,
            weight_distributed: new_distribution.weight_distributed.with_scale(2),
            status: new_distribution.status,
            distributed_at: new_distribution.distributed_at,
            distributed_by: new_distribution.distributed_by,
            notes: new_distribution.notes,
            created_at: Utc::now(),
        };
        inner.distributions.push(record.clone());
        Ok(record)
    }

    async fn get_all(&self) -> AppResult<Vec<DistributionRecord>> {
        let inner = self.0.inner.lock().unwrap();
        Ok(inner.distributions.clone())
    }

    async fn find_by_animal(&self, animal_id: i32) -> AppResult<Vec<DistributionRecord>> {
        let inner = self.0.inner.lock().unwrap();
        Ok(inner
            .distributions
            .iter()
            .filter(|d| d.animal_id == animal_id)
            .cloned()
            .collect())
    }
}

/// Services wired over a shared in-memory store, plus direct repository
/// handles for fixtures that bypass the services (e.g. pending records).
pub struct TestApp {
    pub app: AppContext,
    pub distribution_repo: Arc<dyn DistributionRepository>,
}

pub fn test_app() -> TestApp {
    let store = Arc::new(InMemoryStore::default());

    let user_repo: Arc<dyn UserRepository> =
        Arc::new(InMemoryUserRepository(Arc::clone(&store)));
    let animal_repo: Arc<dyn AnimalRepository> =
        Arc::new(InMemoryAnimalRepository(Arc::clone(&store)));
    let log_repo: Arc<dyn ProcessLogRepository> =
        Arc::new(InMemoryProcessLogRepository(Arc::clone(&store)));
    let distribution_repo: Arc<dyn DistributionRepository> =
        Arc::new(InMemoryDistributionRepository(Arc::clone(&store)));

    TestApp {
        app: AppContext::wire(
            user_repo,
            animal_repo,
            log_repo,
            Arc::clone(&distribution_repo),
        ),
        distribution_repo,
    }
}
