pub mod application;
pub mod domain;
pub mod infrastructure;
mod schema;
pub mod shared;

use std::sync::Arc;

use application::services::{
    AnimalService, DashboardService, DistributionService, ProcessService, UserService,
};
use domain::repositories::{
    AnimalRepository, DistributionRepository, ProcessLogRepository, UserRepository,
};
use infrastructure::database::{
    repositories::{
        AnimalRepositoryImpl, DistributionRepositoryImpl, ProcessLogRepositoryImpl,
        UserRepositoryImpl,
    },
    Database,
};
use shared::errors::AppResult;

/// Wired application services backed by Postgres. This is the surface an
/// outer transport layer (HTTP, desktop shell, CLI) calls into.
pub struct AppContext {
    pub users: Arc<UserService>,
    pub animals: Arc<AnimalService>,
    pub process: Arc<ProcessService>,
    pub distributions: Arc<DistributionService>,
    pub dashboard: Arc<DashboardService>,
}

impl AppContext {
    /// Connect, run pending migrations and wire repositories into services.
    pub fn initialize() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        shared::utils::logger::init_logger();

        let database = Arc::new(Database::new()?);
        database.run_migrations()?;

        let user_repo: Arc<dyn UserRepository> =
            Arc::new(UserRepositoryImpl::new(Arc::clone(&database)));
        let animal_repo: Arc<dyn AnimalRepository> =
            Arc::new(AnimalRepositoryImpl::new(Arc::clone(&database)));
        let log_repo: Arc<dyn ProcessLogRepository> =
            Arc::new(ProcessLogRepositoryImpl::new(Arc::clone(&database)));
        let distribution_repo: Arc<dyn DistributionRepository> =
            Arc::new(DistributionRepositoryImpl::new(Arc::clone(&database)));

        Ok(Self::wire(user_repo, animal_repo, log_repo, distribution_repo))
    }

    /// Assemble services over any repository implementations. Tests use this
    /// with in-memory repositories.
    pub fn wire(
        user_repo: Arc<dyn UserRepository>,
        animal_repo: Arc<dyn AnimalRepository>,
        log_repo: Arc<dyn ProcessLogRepository>,
        distribution_repo: Arc<dyn DistributionRepository>,
    ) -> Self {
        let users = Arc::new(UserService::new(Arc::clone(&user_repo)));
        let animals = Arc::new(AnimalService::new(
            Arc::clone(&animal_repo),
            Arc::clone(&user_repo),
        ));
        let process = Arc::new(ProcessService::new(
            Arc::clone(&animal_repo),
            Arc::clone(&log_repo),
        ));
        let distributions = Arc::new(DistributionService::new(
            Arc::clone(&distribution_repo),
            Arc::clone(&animal_repo),
            Arc::clone(&user_repo),
        ));
        let dashboard = Arc::new(DashboardService::new(animal_repo, distribution_repo));

        Self {
            users,
            animals,
            process,
            distributions,
            dashboard,
        }
    }
}
