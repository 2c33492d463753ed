pub mod animal_type;
pub mod distribution_status;
pub mod process_stage;
pub mod recipient_category;
pub mod user_role;

pub use animal_type::AnimalType;
pub use distribution_status::DistributionStatus;
pub use process_stage::ProcessStage;
pub use recipient_category::RecipientCategory;
pub use user_role::UserRole;
