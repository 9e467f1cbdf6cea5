//! Weapon view over a catalog record
//!
//! Reads every attribute the weapon score needs exactly once and settles the
//! required/optional distinction here, so scoring arithmetic works on a
//! fixed-shape value.

use serde::Serialize;

use super::equipment::{EquipmentRecord, RecordError};
use crate::value_objects::{EffectiveRange, Skill};

pub const RANGE_ATTRIBUTE: &str = "Range";
pub const SILENT_ATTRIBUTE: &str = "Silent";
pub const TAGS_ATTRIBUTE: &str = "Tags";
pub const AOE_TAG: &str = "AOE";
pub const ACTION_POINT_COST_ATTRIBUTE: &str = "Action point cost";
pub const DAMAGE_PER_ACTION_POINT_ATTRIBUTE: &str = "Damage per Action Point";
pub const SPREAD_ATTRIBUTE: &str = "Weapon spread";

/// Optional numeric weapon attributes that feed the normalized score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WeaponStat {
    DamagePerShot,
    DamagePerSecond,
    RateOfFire,
    CriticalChanceMultiplier,
    CriticalHitDamage,
    MagazineCapacity,
    Weight,
    SkillRequired,
    StrengthRequired,
}

impl WeaponStat {
    pub const ALL: [WeaponStat; 9] = [
        Self::DamagePerShot,
        Self::DamagePerSecond,
        Self::RateOfFire,
        Self::CriticalChanceMultiplier,
        Self::CriticalHitDamage,
        Self::MagazineCapacity,
        Self::Weight,
        Self::SkillRequired,
        Self::StrengthRequired,
    ];

    /// Catalog column name.
    pub fn attribute(&self) -> &'static str {
        match self {
            Self::DamagePerShot => "Damage per shot",
            Self::DamagePerSecond => "Damage per second",
            Self::RateOfFire => "Rate of fire",
            Self::CriticalChanceMultiplier => "Critical chance multiplier",
            Self::CriticalHitDamage => "Critical hit Damage",
            Self::MagazineCapacity => "Magazine capacity (shots per reload)",
            Self::Weight => "Weapon weight",
            Self::SkillRequired => "Skill required",
            Self::StrengthRequired => "STR required",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

/// Typed weapon attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponProfile {
    name: String,
    skill: Skill,
    ranges: Vec<EffectiveRange>,
    silent: bool,
    area_of_effect: bool,
    action_point_cost: f64,
    damage_per_action_point: f64,
    spread: Option<f64>,
    stats: [Option<f64>; 9],
}

impl WeaponProfile {
    /// Read a weapon owned by `skill` from its catalog record.
    ///
    /// Fails on any missing required attribute or non-numeric value. A critical
    /// hit damage value without its critical chance multiplier is also
    /// rejected, since the critical term needs both.
    pub fn from_record(record: &EquipmentRecord, skill: Skill) -> Result<Self, RecordError> {
        let ranges = EffectiveRange::parse_list(record.require(RANGE_ATTRIBUTE)?);
        let silent = record.require_flag(SILENT_ATTRIBUTE)?;
        let action_point_cost = record.require_number(ACTION_POINT_COST_ATTRIBUTE)?;
        let damage_per_action_point = record.require_number(DAMAGE_PER_ACTION_POINT_ATTRIBUTE)?;
        let spread = record.number(SPREAD_ATTRIBUTE)?;

        let mut stats = [None; 9];
        for stat in WeaponStat::ALL {
            stats[stat.index()] = record.number(stat.attribute())?;
        }

        if stats[WeaponStat::CriticalHitDamage.index()].is_some()
            && stats[WeaponStat::CriticalChanceMultiplier.index()].is_none()
        {
            return Err(RecordError::MissingAttribute {
                item: record.name().to_string(),
                attribute: WeaponStat::CriticalChanceMultiplier.attribute().to_string(),
            });
        }

        let area_of_effect = record.has(AOE_TAG)
            || record.get(TAGS_ATTRIBUTE).is_some_and(|tags| {
                tags.split(',')
                    .any(|tag| tag.trim().eq_ignore_ascii_case(AOE_TAG))
            });

        Ok(Self {
            name: record.name().to_string(),
            skill,
            ranges,
            silent,
            area_of_effect,
            action_point_cost,
            damage_per_action_point,
            spread,
            stats,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn skill(&self) -> Skill {
        self.skill
    }

    pub fn ranges(&self) -> &[EffectiveRange] {
        &self.ranges
    }

    pub fn is_silent(&self) -> bool {
        self.silent
    }

    pub fn is_area_of_effect(&self) -> bool {
        self.area_of_effect
    }

    pub fn action_point_cost(&self) -> f64 {
        self.action_point_cost
    }

    pub fn damage_per_action_point(&self) -> f64 {
        self.damage_per_action_point
    }

    pub fn spread(&self) -> Option<f64> {
        self.spread
    }

    pub fn stat(&self, stat: WeaponStat) -> Option<f64> {
        self.stats[stat.index()]
    }

    /// Critical chance multiplier and critical hit damage, when the weapon
    /// defines critical hits.
    pub fn critical(&self) -> Option<(f64, f64)> {
        let damage = self.stat(WeaponStat::CriticalHitDamage)?;
        let multiplier = self.stat(WeaponStat::CriticalChanceMultiplier)?;
        Some((multiplier, damage))
    }
}
