//! Derived per-call inputs

use crate::aggregates::BuildProfile;

/// Action points before the Agility bonus.
pub const BASE_ACTION_POINTS: i32 = 65;

/// Action points granted per point of Agility.
pub const ACTION_POINTS_PER_AGILITY: i32 = 3;

/// Luck added to critical chance by the damage-boosting trait.
pub const DAMAGE_TRAIT_LUCK_BONUS: i32 = 3;

/// Values derived from the build once per scoring call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreInputs {
    pub action_points: i32,
    pub crit_chance: f64,
    pub skill_factor: f64,
}

impl ScoreInputs {
    pub fn derive(build: &BuildProfile, skill_factor: f64) -> Self {
        let special = build.special();
        let action_points = BASE_ACTION_POINTS + ACTION_POINTS_PER_AGILITY * special.agility();

        let luck = if build.traits().has_damage_boost() {
            special.luck() + DAMAGE_TRAIT_LUCK_BONUS
        } else {
            special.luck()
        };

        Self {
            action_points,
            crit_chance: f64::from(luck) / 100.0,
            skill_factor,
        }
    }
}
