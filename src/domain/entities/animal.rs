use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{AnimalType, ProcessStage};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Animal {
    pub id: i32,
    pub animal_type: AnimalType,
    pub owner_id: i32,
    pub current_stage: ProcessStage,
    pub weight: Option<BigDecimal>,
    pub registration_date: DateTime<Utc>,
    pub slaughter_date: Option<DateTime<Utc>>,
    pub completion_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Animal joined with its owning user, for listing views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimalWithOwner {
    pub id: i32,
    pub animal_type: AnimalType,
    pub owner_id: i32,
    pub owner_name: String,
    pub owner_email: String,
    pub current_stage: ProcessStage,
    pub weight: Option<BigDecimal>,
    pub registration_date: DateTime<Utc>,
    pub slaughter_date: Option<DateTime<Utc>>,
    pub completion_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A requested stage transition, as validated by the process service.
///
/// The stage machine is deliberately permissive: `new_stage` may be any stage,
/// forward or backward. The committee UI only ever requests the sequential
/// successor, but administrative overrides go through the same path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageAdvance {
    pub new_stage: ProcessStage,
    pub weight_recorded: Option<BigDecimal>,
    pub notes: Option<String>,
    pub processed_by: i32,
}

impl Animal {
    /// Apply a stage transition's field effects in place.
    ///
    /// Every repository implementation routes through this so the rules stay
    /// identical regardless of the backing store:
    /// - the recorded weight, when present, overwrites the animal's weight;
    /// - notes, when present, overwrite the animal's notes;
    /// - entering Slaughtering stamps `slaughter_date` (last write wins);
    /// - entering Distribution stamps `completion_date` (last write wins).
    pub fn apply_stage_advance(&mut self, advance: &StageAdvance, now: DateTime<Utc>) {
        self.current_stage = advance.new_stage;

        if let Some(weight) = &advance.weight_recorded {
            self.weight = Some(weight.with_scale(2));
        }
        if let Some(notes) = &advance.notes {
            self.notes = Some(notes.clone());
        }

        match advance.new_stage {
            ProcessStage::Slaughtering => self.slaughter_date = Some(now),
            ProcessStage::Distribution => self.completion_date = Some(now),
            _ => {}
        }
    }
}
