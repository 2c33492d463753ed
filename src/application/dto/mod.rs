pub mod requests;

pub use requests::{
    AdvanceStageRequest, CreateUserRequest, RecordDistributionRequest, RegisterAnimalRequest,
};
