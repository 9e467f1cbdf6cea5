//! Weapon score
//!
//! The steps run in a fixed order against one accumulator; the range and
//! stealth adjustments scale whatever has been accumulated so far, so
//! reordering them changes results.

use super::inputs::ScoreInputs;
use super::{round2, Normalization, ScoreError};
use crate::aggregates::BuildProfile;
use crate::entities::{EquipmentCategory, EquipmentRecord, WeaponProfile, WeaponStat};
use crate::value_objects::{PlaystylePreferences, Skill};

/// Scale applied to every normalized term of an area-of-effect weapon.
pub const AOE_DAMPING: f64 = 0.3;

/// Flat penalty added to the spread when the weapon's range is not preferred.
const OFF_RANGE_SPREAD_PENALTY: f64 = 0.5;

/// Divisor applied when the weapon's noise level does not suit the build.
const STEALTH_MISMATCH_DIVISOR: f64 = 3.0;

const STEALTH_MATCH_BONUS: f64 = 1.0;
const ACTION_POINT_EFFICIENCY_WEIGHT: f64 = 0.01;
const CRITICAL_WEIGHT: f64 = 0.05;
const SPREAD_WEIGHT: f64 = 0.05;

pub const WEAPON_NORMALIZATION: [Normalization<WeaponStat>; 9] = [
    Normalization { key: WeaponStat::DamagePerShot, min: 1.0, max: 1075.0, weight: 0.3 },
    Normalization { key: WeaponStat::DamagePerSecond, min: 1.3, max: 390.0, weight: 0.2 },
    Normalization { key: WeaponStat::RateOfFire, min: 0.2, max: 30.0, weight: 0.1 },
    Normalization { key: WeaponStat::CriticalChanceMultiplier, min: 0.0, max: 100.0, weight: 0.1 },
    Normalization { key: WeaponStat::CriticalHitDamage, min: 1.0, max: 110.0, weight: 0.1 },
    Normalization { key: WeaponStat::MagazineCapacity, min: 1.0, max: 240.0, weight: 0.1 },
    Normalization { key: WeaponStat::Weight, min: 0.25, max: 40.0, weight: -0.001 },
    Normalization { key: WeaponStat::SkillRequired, min: 0.0, max: 100.0, weight: -0.01 },
    Normalization { key: WeaponStat::StrengthRequired, min: 1.0, max: 10.0, weight: -0.001 },
];

/// Score a weapon for a build.
///
/// `skill_factor` is the owning skill's points as a fraction of 100 and must be
/// positive; the weapon's action point cost must be positive too.
pub fn compute_weapon_score(
    weapon: &WeaponProfile,
    skill_factor: f64,
    build: &BuildProfile,
    preferences: &PlaystylePreferences,
) -> Result<f64, ScoreError> {
    if !skill_factor.is_finite() || skill_factor <= 0.0 {
        return Err(ScoreError::precondition(
            weapon.name(),
            format!("skill factor must be positive, got {}", skill_factor),
        ));
    }
    if weapon.action_point_cost() <= 0.0 {
        return Err(ScoreError::precondition(
            weapon.name(),
            format!(
                "action point cost must be positive, got {}",
                weapon.action_point_cost()
            ),
        ));
    }

    let mut score = 0.0;

    for entry in &WEAPON_NORMALIZATION {
        if let Some(value) = weapon.stat(entry.key) {
            let mut term = entry.term(value) * skill_factor;
            if weapon.is_area_of_effect() {
                term *= AOE_DAMPING;
            }
            score += term;
        }
    }

    let inputs = ScoreInputs::derive(build, skill_factor);
    let special = build.special();
    let secondary = if weapon.skill() == Skill::MeleeWeapons {
        special.strength()
    } else {
        special.perception()
    };

    if !preferences.prefers_any(weapon.ranges()) {
        match weapon.spread() {
            Some(spread) => score -= spread + OFF_RANGE_SPREAD_PENALTY,
            None => score /= 2.0,
        }
    }

    if preferences.matches_silence(weapon.is_silent()) {
        score += STEALTH_MATCH_BONUS;
    } else {
        score /= STEALTH_MISMATCH_DIVISOR;
    }

    score += f64::from(secondary) * skill_factor
        + ACTION_POINT_EFFICIENCY_WEIGHT
            * (f64::from(inputs.action_points) / weapon.action_point_cost())
            * weapon.damage_per_action_point();

    if let Some((multiplier, damage)) = weapon.critical() {
        score += CRITICAL_WEIGHT * inputs.crit_chance * multiplier * damage * (skill_factor / 10.0);
    }

    if let Some(spread) = weapon.spread() {
        score -= SPREAD_WEIGHT * spread / skill_factor;
    }

    Ok(round2(score))
}

/// Score a raw catalog record from a weapon category against a build,
/// using the build's own skill factor and preferences.
pub fn score_weapon_record(
    category: &EquipmentCategory,
    record: &EquipmentRecord,
    build: &BuildProfile,
) -> Result<f64, ScoreError> {
    let skill: Skill = category
        .skill()
        .parse()
        .map_err(|_| ScoreError::UnknownSkill {
            item: record.name().to_string(),
            category: category.label().to_string(),
        })?;

    let weapon = WeaponProfile::from_record(record, skill)?;
    compute_weapon_score(
        &weapon,
        build.skill_factor(skill),
        build,
        build.preferences(),
    )
}
