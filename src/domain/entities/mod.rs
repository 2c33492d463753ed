pub mod animal;
pub mod distribution_record;
pub mod process_log;
pub mod user;

pub use animal::{Animal, AnimalWithOwner, StageAdvance};
pub use distribution_record::DistributionRecord;
pub use process_log::ProcessLog;
pub use user::User;
