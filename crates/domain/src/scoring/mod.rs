//! Scoring engine - build-aware desirability scores for weapons and armor
//!
//! Every function here is pure: it reads a typed item view plus the build and
//! returns a fresh score rounded to two decimals. Calls are independent per
//! item.

mod armor;
mod inputs;
mod ranking;
mod weapon;

use thiserror::Error;

use crate::entities::RecordError;

pub use armor::{
    armor_weight_penalty, carry_threshold, compute_armor_score, score_armor_record,
    ARMOR_NORMALIZATION, STEALTH_ARMOR_BONUS,
};
pub use inputs::{ScoreInputs, BASE_ACTION_POINTS, DAMAGE_TRAIT_LUCK_BONUS};
pub use ranking::{best_first, rank, RankedItem};
pub use weapon::{
    compute_weapon_score, score_weapon_record, AOE_DAMPING, WEAPON_NORMALIZATION,
};

/// Why a single item could not be scored.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScoreError {
    #[error(transparent)]
    Record(#[from] RecordError),

    /// A divisor or input violated its precondition.
    #[error("{item}: {reason}")]
    Precondition { item: String, reason: String },

    /// The category label does not name a known skill.
    #[error("{item}: category '{category}' has no known owning skill")]
    UnknownSkill { item: String, category: String },
}

impl ScoreError {
    pub fn precondition(item: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Precondition {
            item: item.into(),
            reason: reason.into(),
        }
    }
}

/// Observed value range and linear weight of one scored attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalization<K> {
    pub key: K,
    pub min: f64,
    pub max: f64,
    pub weight: f64,
}

impl<K> Normalization<K> {
    /// Map `value` onto `[0, 1]` for values inside the observed range.
    pub fn normalize(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min)
    }

    /// Weighted normalized contribution.
    pub fn term(&self, value: f64) -> f64 {
        self.weight * self.normalize(value)
    }
}

/// Round half away from zero to two decimals.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
