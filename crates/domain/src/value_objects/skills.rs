//! Skills and the skill sheet of a build
//!
//! Starting points derive from SPECIAL; tagging a skill grants a flat bonus.
//! A committed build carries exactly [`REQUIRED_TAGS`] tagged skills.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::DomainError;
use crate::value_objects::{Special, SpecialStat};

/// Points granted to a skill when it is tagged.
pub const TAG_BONUS: i32 = 15;

/// Number of tagged skills a final build must have.
pub const REQUIRED_TAGS: usize = 3;

/// Default point window used to pick candidate weapon skills.
pub const DEFAULT_SKILL_WINDOW: i32 = 10;

/// The thirteen character skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Skill {
    Barter,
    EnergyWeapons,
    Explosives,
    Guns,
    Lockpick,
    Medicine,
    MeleeWeapons,
    Repair,
    Science,
    Sneak,
    Speech,
    Survival,
    Unarmed,
}

impl Skill {
    pub const ALL: [Skill; 13] = [
        Self::Barter,
        Self::EnergyWeapons,
        Self::Explosives,
        Self::Guns,
        Self::Lockpick,
        Self::Medicine,
        Self::MeleeWeapons,
        Self::Repair,
        Self::Science,
        Self::Sneak,
        Self::Speech,
        Self::Survival,
        Self::Unarmed,
    ];

    /// Skills that own a weapon category.
    pub const COMBAT: [Skill; 5] = [
        Self::Unarmed,
        Self::MeleeWeapons,
        Self::Guns,
        Self::EnergyWeapons,
        Self::Explosives,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Barter => "Barter",
            Self::EnergyWeapons => "Energy Weapons",
            Self::Explosives => "Explosives",
            Self::Guns => "Guns",
            Self::Lockpick => "Lockpick",
            Self::Medicine => "Medicine",
            Self::MeleeWeapons => "Melee Weapons",
            Self::Repair => "Repair",
            Self::Science => "Science",
            Self::Sneak => "Sneak",
            Self::Speech => "Speech",
            Self::Survival => "Survival",
            Self::Unarmed => "Unarmed",
        }
    }

    /// The SPECIAL attribute the starting value is derived from.
    pub fn governing_attribute(&self) -> SpecialStat {
        match self {
            Self::Barter | Self::Speech => SpecialStat::Charisma,
            Self::EnergyWeapons | Self::Explosives | Self::Lockpick => SpecialStat::Perception,
            Self::Guns | Self::Sneak => SpecialStat::Agility,
            Self::Medicine | Self::Repair | Self::Science => SpecialStat::Intelligence,
            Self::MeleeWeapons => SpecialStat::Strength,
            Self::Survival | Self::Unarmed => SpecialStat::Endurance,
        }
    }

    pub fn is_combat(&self) -> bool {
        Self::COMBAT.contains(self)
    }

    /// Starting points: `2 + 2 * governing attribute + ceil(Luck / 2)`.
    pub fn starting_points(&self, special: &Special) -> i32 {
        let luck = special.luck();
        2 + 2 * special.get(self.governing_attribute()) + (luck + 1) / 2
    }
}

impl std::fmt::Display for Skill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Skill {
    type Err = DomainError;

    /// Case-insensitive, so both "Melee Weapons" and the normalized category
    /// label "Melee weapons" resolve.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|skill| skill.display_name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::parse(format!("Unknown skill: {}", s)))
    }
}

/// Points and tag state of one skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillEntry {
    pub points: i32,
    pub tagged: bool,
}

/// Point totals and tags for all thirteen skills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillSheet {
    entries: BTreeMap<Skill, SkillEntry>,
}

impl SkillSheet {
    /// Starting sheet derived from SPECIAL, nothing tagged.
    pub fn derive(special: &Special) -> Self {
        let entries = Skill::ALL
            .iter()
            .map(|skill| {
                (
                    *skill,
                    SkillEntry {
                        points: skill.starting_points(special),
                        tagged: false,
                    },
                )
            })
            .collect();
        Self { entries }
    }

    /// Sheet from explicit point totals; skills not listed start at 0.
    ///
    /// Point totals are taken as final: tagging here does not add the bonus.
    pub fn from_points(
        points: impl IntoIterator<Item = (Skill, i32)>,
        tagged: &[Skill],
    ) -> Result<Self, DomainError> {
        let mut entries: BTreeMap<Skill, SkillEntry> = Skill::ALL
            .iter()
            .map(|skill| (*skill, SkillEntry::default()))
            .collect();

        for (skill, value) in points {
            if value < 0 {
                return Err(DomainError::validation(format!(
                    "{} cannot have negative points ({})",
                    skill, value
                )));
            }
            if let Some(entry) = entries.get_mut(&skill) {
                entry.points = value;
            }
        }

        let mut sheet = Self { entries };
        for skill in tagged {
            sheet.mark_tagged(*skill)?;
        }
        Ok(sheet)
    }

    /// Tag a skill, adding [`TAG_BONUS`] points.
    pub fn tag(&mut self, skill: Skill) -> Result<(), DomainError> {
        self.mark_tagged(skill)?;
        if let Some(entry) = self.entries.get_mut(&skill) {
            entry.points += TAG_BONUS;
        }
        Ok(())
    }

    /// Remove a tag and its bonus. Untagging an untagged skill is a no-op.
    pub fn untag(&mut self, skill: Skill) {
        if let Some(entry) = self.entries.get_mut(&skill) {
            if entry.tagged {
                entry.tagged = false;
                entry.points -= TAG_BONUS;
            }
        }
    }

    fn mark_tagged(&mut self, skill: Skill) -> Result<(), DomainError> {
        if self.is_tagged(skill) {
            return Err(DomainError::constraint(format!("{} is already tagged", skill)));
        }
        if self.tagged_count() >= REQUIRED_TAGS {
            return Err(DomainError::constraint(format!(
                "cannot tag {}: all {} tags are already used",
                skill, REQUIRED_TAGS
            )));
        }
        if let Some(entry) = self.entries.get_mut(&skill) {
            entry.tagged = true;
        }
        Ok(())
    }

    pub fn entry(&self, skill: Skill) -> SkillEntry {
        self.entries.get(&skill).copied().unwrap_or_default()
    }

    pub fn points(&self, skill: Skill) -> i32 {
        self.entry(skill).points
    }

    pub fn is_tagged(&self, skill: Skill) -> bool {
        self.entry(skill).tagged
    }

    pub fn tagged(&self) -> impl Iterator<Item = Skill> + '_ {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.tagged)
            .map(|(skill, _)| *skill)
    }

    pub fn tagged_count(&self) -> usize {
        self.tagged().count()
    }

    /// Skill points as a fraction of the 100-point scale.
    pub fn skill_factor(&self, skill: Skill) -> f64 {
        f64::from(self.points(skill)) / 100.0
    }

    /// Combat skills within `window` points of the strongest combat skill.
    ///
    /// Weapon ranking only considers categories owned by these skills.
    pub fn candidate_weapon_skills(&self, window: i32) -> Vec<Skill> {
        let best = Skill::COMBAT
            .iter()
            .map(|skill| self.points(*skill))
            .max()
            .unwrap_or(0);

        Skill::COMBAT
            .iter()
            .copied()
            .filter(|skill| (best - self.points(*skill)).abs() <= window)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Skill, SkillEntry)> + '_ {
        self.entries.iter().map(|(skill, entry)| (*skill, *entry))
    }
}
