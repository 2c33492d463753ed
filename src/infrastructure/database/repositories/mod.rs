pub mod animal_repository_impl;
pub mod distribution_repository_impl;
pub mod process_log_repository_impl;
pub mod user_repository_impl;

pub use animal_repository_impl::AnimalRepositoryImpl;
pub use distribution_repository_impl::DistributionRepositoryImpl;
pub use process_log_repository_impl::ProcessLogRepositoryImpl;
pub use user_repository_impl::UserRepositoryImpl;
