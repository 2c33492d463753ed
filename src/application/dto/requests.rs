use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{AnimalType, ProcessStage, RecipientCategory, UserRole};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: UserRole,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterAnimalRequest {
    pub animal_type: AnimalType,
    pub owner_id: i32,
    pub weight: Option<BigDecimal>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvanceStageRequest {
    pub animal_id: i32,
    pub new_stage: ProcessStage,
    pub weight_recorded: Option<BigDecimal>,
    pub notes: Option<String>,
    pub processed_by: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordDistributionRequest {
    pub animal_id: i32,
    pub recipient_category: RecipientCategory,
    pub recipient_name: Option<String>,
    pub weight_distributed: BigDecimal,
    pub distributed_by: i32,
    pub notes: Option<String>,
}
