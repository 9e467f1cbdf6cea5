//! Armor score

use super::{round2, Normalization, ScoreError};
use crate::aggregates::BuildProfile;
use crate::entities::{
    ArmorProfile, EquipmentRecord, ARMOR_WEIGHT_ATTRIBUTE, DAMAGE_RESISTANCE_ATTRIBUTE,
    DAMAGE_THRESHOLD_ATTRIBUTE,
};
use crate::value_objects::PlaystylePreferences;

/// Flat bonus for stealth-named armor when the build sneaks.
pub const STEALTH_ARMOR_BONUS: f64 = 3.0;

const CARRY_BASE: f64 = 150.0;
const CARRY_PER_STRENGTH: f64 = 10.0;
const CARRY_DIVISOR: f64 = 8.0;

pub const ARMOR_NORMALIZATION: [Normalization<&str>; 3] = [
    Normalization { key: DAMAGE_THRESHOLD_ATTRIBUTE, min: 0.0, max: 28.0, weight: 3.0 },
    Normalization { key: DAMAGE_RESISTANCE_ATTRIBUTE, min: 0.0, max: 3.0, weight: 1.0 },
    Normalization { key: ARMOR_WEIGHT_ATTRIBUTE, min: 1.0, max: 45.0, weight: -1.0 },
];

/// Weight at or above which armor starts to cost the build.
pub fn carry_threshold(build: &BuildProfile) -> f64 {
    (CARRY_BASE + CARRY_PER_STRENGTH * f64::from(build.special().strength())) / CARRY_DIVISOR
}

/// Weight penalty term, present only for armor at or over the carry threshold.
pub fn armor_weight_penalty(armor: &ArmorProfile, build: &BuildProfile) -> Option<f64> {
    (armor.weight() >= carry_threshold(build)).then(|| ARMOR_NORMALIZATION[2].term(armor.weight()))
}

pub fn compute_armor_score(
    armor: &ArmorProfile,
    build: &BuildProfile,
    preferences: &PlaystylePreferences,
) -> f64 {
    let [threshold, resistance, _] = &ARMOR_NORMALIZATION;

    let mut score =
        threshold.term(armor.damage_threshold()) + resistance.term(armor.damage_resistance());

    if let Some(penalty) = armor_weight_penalty(armor, build) {
        score += penalty;
    }

    if preferences.prefers_stealth() && armor.suggests_stealth() {
        score += STEALTH_ARMOR_BONUS;
    }

    round2(score)
}

/// Score a raw armour record with the build's own preferences.
pub fn score_armor_record(record: &EquipmentRecord, build: &BuildProfile) -> Result<f64, ScoreError> {
    let armor = ArmorProfile::from_record(record)?;
    Ok(compute_armor_score(&armor, build, build.preferences()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{EffectiveRange, Skill, Special, TraitSelection};

    fn build(strength: i32, stealth: bool) -> BuildProfile {
        BuildProfile::from_allocation(
            Special::new([strength, 5, 5, 5, 5, 5, 5]).unwrap(),
            &[Skill::Guns, Skill::Sneak, Skill::Repair],
            TraitSelection::none(),
            PlaystylePreferences::new([EffectiveRange::Mid], stealth, !stealth).unwrap(),
        )
        .unwrap()
    }

    fn armor(name: &str, dt: &str, dr: &str, weight: &str) -> ArmorProfile {
        ArmorProfile::from_record(
            &EquipmentRecord::from_pairs([("Name", name), ("DT", dt), ("DR", dr), ("Weight", weight)])
                .unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn carry_threshold_follows_strength() {
        assert_eq!(carry_threshold(&build(5, false)), 25.0);
        assert_eq!(carry_threshold(&build(10, false)), 31.25);
    }

    #[test]
    fn light_armor_skips_weight_term() {
        let b = build(5, false);
        let piece = armor("Leather armor", "14", "1.5", "24");
        assert_eq!(armor_weight_penalty(&piece, &b), None);
        // 3 * 14/28 + 1 * 1.5/3
        assert_eq!(compute_armor_score(&piece, &b, b.preferences()), 2.0);
    }

    #[test]
    fn weight_boundary_is_inclusive() {
        let b = build(5, false);
        let at = armor("Metal armor", "14", "1.5", "25");
        let below = armor("Metal armor", "14", "1.5", "24");

        let penalty = armor_weight_penalty(&at, &b).unwrap();
        assert!((penalty + 24.0 / 44.0).abs() < 1e-12);

        let at_score = compute_armor_score(&at, &b, b.preferences());
        let below_score = compute_armor_score(&below, &b, b.preferences());
        assert_eq!(at_score, 1.45);
        assert!((below_score - at_score - 24.0 / 44.0).abs() < 0.01);
    }

    #[test]
    fn stealth_bonus_needs_preference_and_name() {
        let sneaky = build(5, true);
        let loud = build(5, false);
        let suit = armor("Chinese Stealth Armor", "0", "0", "5");

        assert_eq!(compute_armor_score(&suit, &sneaky, sneaky.preferences()), 3.0);
        assert_eq!(compute_armor_score(&suit, &loud, loud.preferences()), 0.0);

        let plain = armor("Vault suit", "0", "0", "5");
        assert_eq!(compute_armor_score(&plain, &sneaky, sneaky.preferences()), 0.0);
    }

    #[test]
    fn record_scoring_requires_all_attributes() {
        let b = build(5, false);
        let record = EquipmentRecord::from_pairs([("Name", "Leather armor"), ("DT", "6")]).unwrap();
        let err = score_armor_record(&record, &b).unwrap_err();
        assert!(matches!(err, ScoreError::Record(_)));

        let full = EquipmentRecord::from_pairs([
            ("Name", "Leather armor"),
            ("DT", "14"),
            ("DR", "1.5"),
            ("Weight", "24"),
        ])
        .unwrap();
        assert_eq!(score_armor_record(&full, &b).unwrap(), 2.0);
    }
}
