//! Value objects - Immutable objects defined by their attributes

mod preferences;
mod skills;
mod special;
mod traits;

pub use preferences::{EffectiveRange, PlaystylePreferences};
pub use skills::{
    Skill, SkillEntry, SkillSheet, DEFAULT_SKILL_WINDOW, REQUIRED_TAGS, TAG_BONUS,
};
pub use special::{
    Special, SpecialStat, SPECIAL_DEFAULT, SPECIAL_MAX, SPECIAL_MIN, SPECIAL_POINT_BUDGET,
};
pub use traits::{TraitSelection, DAMAGE_BOOST_TRAIT, MAX_TRAITS, NO_TRAIT};
