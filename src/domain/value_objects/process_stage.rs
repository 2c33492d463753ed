use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed processing pipeline, in order. This is the single source of
/// truth for the stage sequence; both the stage machine and any presentation
/// layer derive ordering, progress and "next stage" from it.
#[derive(
    diesel_derive_enum::DbEnum,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[ExistingTypePath = "crate::schema::sql_types::ProcessStage"]
#[serde(rename_all = "snake_case")]
pub enum ProcessStage {
    Registration,
    Slaughtering,
    Skinning,
    MeatWeighing,
    MeatChopping,
    BoneCutting,
    Packing,
    Distribution,
}

impl ProcessStage {
    pub const ALL: [ProcessStage; 8] = [
        ProcessStage::Registration,
        ProcessStage::Slaughtering,
        ProcessStage::Skinning,
        ProcessStage::MeatWeighing,
        ProcessStage::MeatChopping,
        ProcessStage::BoneCutting,
        ProcessStage::Packing,
        ProcessStage::Distribution,
    ];

    /// Zero-based position in the pipeline.
    pub fn position(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    /// The array successor, or None at the terminal stage.
    pub fn next(&self) -> Option<ProcessStage> {
        Self::ALL.get(self.position() + 1).copied()
    }

    /// Completion percentage shown next to progress bars.
    pub fn progress_percent(&self) -> f64 {
        (self.position() + 1) as f64 / Self::ALL.len() as f64 * 100.0
    }

    pub fn is_terminal(&self) -> bool {
        *self == ProcessStage::Distribution
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProcessStage::Registration => "Registration",
            ProcessStage::Slaughtering => "Slaughtering",
            ProcessStage::Skinning => "Skinning",
            ProcessStage::MeatWeighing => "Meat Weighing",
            ProcessStage::MeatChopping => "Meat Chopping",
            ProcessStage::BoneCutting => "Bone Cutting",
            ProcessStage::Packing => "Packing",
            ProcessStage::Distribution => "Distribution",
        }
    }
}

impl fmt::Display for ProcessStage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            ProcessStage::Registration => "registration",
            ProcessStage::Slaughtering => "slaughtering",
            ProcessStage::Skinning => "skinning",
            ProcessStage::MeatWeighing => "meat_weighing",
            ProcessStage::MeatChopping => "meat_chopping",
            ProcessStage::BoneCutting => "bone_cutting",
            ProcessStage::Packing => "packing",
            ProcessStage::Distribution => "distribution",
        };
        write!(f, "{}", s)
    }
}
