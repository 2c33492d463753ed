/// Diesel models for the qurban tables, plus mapping into domain entities.
use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::entities::{Animal, AnimalWithOwner, DistributionRecord, ProcessLog, User};
use crate::domain::value_objects::{
    AnimalType, DistributionStatus, ProcessStage, RecipientCategory, UserRole,
};
use crate::schema::{animals, distribution_records, process_logs, users};

// ============= USERS =============

#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = users)]
pub struct UserModel {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = users)]
pub struct NewUserModel {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: UserRole,
}

impl UserModel {
    pub fn into_entity(self) -> User {
        User {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            role: self.role,
            created_at: self.created_at,
        }
    }
}

// ============= ANIMALS =============

#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = animals)]
pub struct AnimalModel {
    pub id: i32,
    pub type_: AnimalType,
    pub owner_id: i32,
    pub current_stage: ProcessStage,
    pub weight: Option<BigDecimal>,
    pub registration_date: DateTime<Utc>,
    pub slaughter_date: Option<DateTime<Utc>>,
    pub completion_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = animals)]
pub struct NewAnimalModel {
    pub type_: AnimalType,
    pub owner_id: i32,
    pub current_stage: ProcessStage,
    pub weight: Option<BigDecimal>,
    pub notes: Option<String>,
}

/// Changeset for a stage transition. Option fields use AsChangeset's
/// skip-on-None semantics; a stage advance never clears a set field, so the
/// skipped columns are exactly the unchanged ones.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = animals)]
pub struct AnimalStageChangeset {
    pub current_stage: ProcessStage,
    pub weight: Option<BigDecimal>,
    pub slaughter_date: Option<DateTime<Utc>>,
    pub completion_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

impl AnimalModel {
    pub fn into_entity(self) -> Animal {
        Animal {
            id: self.id,
            animal_type: self.type_,
            owner_id: self.owner_id,
            current_stage: self.current_stage,
            weight: self.weight,
            registration_date: self.registration_date,
            slaughter_date: self.slaughter_date,
            completion_date: self.completion_date,
            notes: self.notes,
            created_at: self.created_at,
        }
    }

    pub fn into_entity_with_owner(self, owner_name: String, owner_email: String) -> AnimalWithOwner {
        AnimalWithOwner {
            id: self.id,
            animal_type: self.type_,
            owner_id: self.owner_id,
            owner_name,
            owner_email,
            current_stage: self.current_stage,
            weight: self.weight,
            registration_date: self.registration_date,
            slaughter_date: self.slaughter_date,
            completion_date: self.completion_date,
            notes: self.notes,
            created_at: self.created_at,
        }
    }
}

// ============= PROCESS LOGS =============

#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = process_logs)]
pub struct ProcessLogModel {
    pub id: i32,
    pub animal_id: i32,
    pub stage: ProcessStage,
    pub weight_recorded: Option<BigDecimal>,
    pub completed_at: DateTime<Utc>,
    pub notes: Option<String>,
    pub processed_by: i32,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = process_logs)]
pub struct NewProcessLogModel {
    pub animal_id: i32,
    pub stage: ProcessStage,
    pub weight_recorded: Option<BigDecimal>,
    pub completed_at: DateTime<Utc>,
    pub notes: Option<String>,
    pub processed_by: i32,
}

impl ProcessLogModel {
    pub fn into_entity(self) -> ProcessLog {
        ProcessLog {
            id: self.id,
            animal_id: self.animal_id,
            stage: self.stage,
            weight_recorded: self.weight_recorded,
            completed_at: self.completed_at,
            notes: self.notes,
            processed_by: self.processed_by,
        }
    }
}

// ============= DISTRIBUTION RECORDS =============

#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = distribution_records)]
pub struct DistributionRecordModel {
    pub id: i32,
    pub animal_id: i32,
    pub recipient_category: RecipientCategory,
    pub recipient_name: Option<String>,
    pub weight_distributed: BigDecimal,
    pub status: DistributionStatus,
    pub distributed_at: Option<DateTime<Utc>>,
    pub distributed_by: Option<i32>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = distribution_records)]
pub struct NewDistributionModel {
    pub animal_id: i32,
    pub recipient_category: RecipientCategory,
    pub recipient_name: Option<String>,
    pub weight_distributed: BigDecimal,
    pub status: DistributionStatus,
    pub distributed_at: Option<DateTime<Utc>>,
    pub distributed_by: Option<i32>,
    pub notes: Option<String>,
}

impl DistributionRecordModel {
    pub fn into_entity(self) -> DistributionRecord {
        DistributionRecord {
            id: self.id,
            animal_id: self.animal_id,
            recipient_category: self.recipient_category,
            recipient_name: self.recipient_name,
            weight_distributed: self.weight_distributed,
            status: self.status,
            distributed_at: self.distributed_at,
            distributed_by: self.distributed_by,
            notes: self.notes,
            created_at: self.created_at,
        }
    }
}
