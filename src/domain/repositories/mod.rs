pub mod animal_repository;
pub mod distribution_repository;
pub mod process_log_repository;
pub mod user_repository;

pub use animal_repository::{AnimalRepository, NewAnimal};
pub use distribution_repository::{DistributionRepository, NewDistribution};
pub use process_log_repository::ProcessLogRepository;
pub use user_repository::{NewUser, UserRepository};
