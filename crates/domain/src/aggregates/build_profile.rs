//! BuildProfile aggregate - the resolved character build
//!
//! Owns SPECIAL, the skill sheet, chosen traits and playstyle preferences.
//! Built once from the allocation step and only read afterwards; scoring and
//! ranking take it by reference.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::{
    PlaystylePreferences, Skill, SkillSheet, Special, TraitSelection, REQUIRED_TAGS,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildProfile {
    special: Special,
    skills: SkillSheet,
    traits: TraitSelection,
    preferences: PlaystylePreferences,
}

impl BuildProfile {
    /// Assemble a final build. Exactly [`REQUIRED_TAGS`] skills must be tagged.
    pub fn new(
        special: Special,
        skills: SkillSheet,
        traits: TraitSelection,
        preferences: PlaystylePreferences,
    ) -> Result<Self, DomainError> {
        let tagged = skills.tagged_count();
        if tagged != REQUIRED_TAGS {
            return Err(DomainError::constraint(format!(
                "exactly {} skills must be tagged, found {}",
                REQUIRED_TAGS, tagged
            )));
        }

        Ok(Self {
            special,
            skills,
            traits,
            preferences,
        })
    }

    /// Derive skills from SPECIAL and apply the given tags, the way the
    /// allocation screens do.
    pub fn from_allocation(
        special: Special,
        tagged: &[Skill],
        traits: TraitSelection,
        preferences: PlaystylePreferences,
    ) -> Result<Self, DomainError> {
        let mut skills = SkillSheet::derive(&special);
        for skill in tagged {
            skills.tag(*skill)?;
        }
        Self::new(special, skills, traits, preferences)
    }

    pub fn special(&self) -> &Special {
        &self.special
    }

    pub fn skills(&self) -> &SkillSheet {
        &self.skills
    }

    pub fn traits(&self) -> &TraitSelection {
        &self.traits
    }

    pub fn preferences(&self) -> &PlaystylePreferences {
        &self.preferences
    }

    /// Owning-skill factor for a weapon category.
    pub fn skill_factor(&self, skill: Skill) -> f64 {
        self.skills.skill_factor(skill)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{EffectiveRange, TAG_BONUS};

    fn preferences() -> PlaystylePreferences {
        PlaystylePreferences::new([EffectiveRange::Mid], false, true).unwrap()
    }

    #[test]
    fn from_allocation_applies_tags() {
        let special = Special::default();
        let build = BuildProfile::from_allocation(
            special,
            &[Skill::Guns, Skill::Repair, Skill::Speech],
            TraitSelection::none(),
            preferences(),
        )
        .unwrap();

        assert_eq!(build.skills().tagged_count(), 3);
        assert_eq!(
            build.skills().points(Skill::Guns),
            Skill::Guns.starting_points(&special) + TAG_BONUS
        );
    }

    #[test]
    fn rejects_incomplete_tags() {
        let err = BuildProfile::from_allocation(
            Special::default(),
            &[Skill::Guns],
            TraitSelection::none(),
            preferences(),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Constraint(_)));
    }
}
