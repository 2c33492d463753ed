pub mod animal_service;
pub mod dashboard_service;
pub mod distribution_service;
pub mod process_service;
pub mod user_service;

pub use animal_service::AnimalService;
pub use dashboard_service::{DashboardService, DashboardStats};
pub use distribution_service::DistributionService;
pub use process_service::ProcessService;
pub use user_service::UserService;
