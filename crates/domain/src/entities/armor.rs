//! Armor view over a catalog record

use serde::Serialize;

use super::equipment::{EquipmentRecord, RecordError};

pub const DAMAGE_THRESHOLD_ATTRIBUTE: &str = "DT";
pub const DAMAGE_RESISTANCE_ATTRIBUTE: &str = "DR";
pub const ARMOR_WEIGHT_ATTRIBUTE: &str = "Weight";

/// Typed armor attributes. All three are required.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArmorProfile {
    name: String,
    damage_threshold: f64,
    damage_resistance: f64,
    weight: f64,
}

impl ArmorProfile {
    pub fn from_record(record: &EquipmentRecord) -> Result<Self, RecordError> {
        Ok(Self {
            name: record.name().to_string(),
            damage_threshold: record.require_number(DAMAGE_THRESHOLD_ATTRIBUTE)?,
            damage_resistance: record.require_number(DAMAGE_RESISTANCE_ATTRIBUTE)?,
            weight: record.require_number(ARMOR_WEIGHT_ATTRIBUTE)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn damage_threshold(&self) -> f64 {
        self.damage_threshold
    }

    pub fn damage_resistance(&self) -> f64 {
        self.damage_resistance
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Name-based hint that the piece is meant for sneaking.
    pub fn suggests_stealth(&self) -> bool {
        self.name.to_lowercase().contains("stealth")
    }
}
