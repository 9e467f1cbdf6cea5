extern crate self as loadout_domain;

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod graph;
pub mod scoring;
pub mod value_objects;

pub use aggregates::BuildProfile;

// Re-export entities (explicit list in entities/mod.rs)
pub use entities::{
    owning_skill_label, ArmorProfile, Catalog, CatalogSection, EquipmentCategory, EquipmentRecord,
    RecordError, WeaponProfile, WeaponStat,
};

pub use error::DomainError;

pub use graph::{
    EdgeView, EquipmentGraph, EquipmentVertex, GraphError, GraphView, NodeView,
    DEFAULT_MAX_VERTICES,
};

pub use scoring::{
    best_first, compute_armor_score, compute_weapon_score, rank, score_armor_record,
    score_weapon_record, RankedItem, ScoreError, ScoreInputs,
};

// Re-export value objects (explicit list in value_objects/mod.rs)
pub use value_objects::{
    EffectiveRange, PlaystylePreferences, Skill, SkillEntry, SkillSheet, Special, SpecialStat,
    TraitSelection, DEFAULT_SKILL_WINDOW,
};
