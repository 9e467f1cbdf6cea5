//! Equipment catalog - labelled categories of attribute records
//!
//! Records arrive from ingestion as free-form `attribute -> value` maps with
//! strings already trimmed and cleaned. This module only groups them and
//! offers checked accessors; typed views live in [`super::weapon`] and
//! [`super::armor`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Attribute holding the item's unique name.
pub const NAME_ATTRIBUTE: &str = "Name";

/// A record attribute was missing or malformed.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RecordError {
    #[error("{item}: required attribute '{attribute}' is missing")]
    MissingAttribute { item: String, attribute: String },

    #[error("{item}: attribute '{attribute}' has invalid value '{value}'")]
    InvalidAttribute {
        item: String,
        attribute: String,
        value: String,
    },
}

/// Top-level catalog sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogSection {
    Weapons,
    Armour,
    Perks,
    Traits,
    Companions,
}

impl CatalogSection {
    pub const ALL: [CatalogSection; 5] = [
        Self::Weapons,
        Self::Armour,
        Self::Perks,
        Self::Traits,
        Self::Companions,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weapons => "weapons",
            Self::Armour => "armour",
            Self::Perks => "perks",
            Self::Traits => "traits",
            Self::Companions => "companions",
        }
    }
}

impl std::fmt::Display for CatalogSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Owning-skill label of a category: the part before `" -"`, capitalized.
///
/// `"Melee weapons - unique"` becomes `"Melee weapons"`, `"GUNS"` becomes
/// `"Guns"`.
pub fn owning_skill_label(category_label: &str) -> String {
    let head = category_label
        .split(" -")
        .next()
        .unwrap_or_default()
        .trim();
    let mut chars = head.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// One catalog row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentRecord {
    name: String,
    attributes: HashMap<String, String>,
}

impl EquipmentRecord {
    /// Build a record from its attribute map; the `Name` attribute is required.
    pub fn new(attributes: HashMap<String, String>) -> Result<Self, RecordError> {
        let name = attributes
            .get(NAME_ATTRIBUTE)
            .map(|n| n.trim())
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .ok_or_else(|| RecordError::MissingAttribute {
                item: "<unnamed>".to_string(),
                attribute: NAME_ATTRIBUTE.to_string(),
            })?;
        Ok(Self { name, attributes })
    }

    /// Convenience constructor from string pairs (tests, fixtures).
    pub fn from_pairs<'a>(
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, RecordError> {
        Self::new(
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &HashMap<String, String> {
        &self.attributes
    }

    /// Whether the attribute exists at all, even with an empty value.
    pub fn has(&self, attribute: &str) -> bool {
        self.attributes.contains_key(attribute)
    }

    /// Attribute value; empty cells count as absent.
    pub fn get(&self, attribute: &str) -> Option<&str> {
        self.attributes
            .get(attribute)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn require(&self, attribute: &str) -> Result<&str, RecordError> {
        self.get(attribute)
            .ok_or_else(|| RecordError::MissingAttribute {
                item: self.name.clone(),
                attribute: attribute.to_string(),
            })
    }

    /// Optional numeric attribute. Present but non-numeric is an error.
    pub fn number(&self, attribute: &str) -> Result<Option<f64>, RecordError> {
        self.get(attribute)
            .map(|raw| self.parse_number(attribute, raw))
            .transpose()
    }

    pub fn require_number(&self, attribute: &str) -> Result<f64, RecordError> {
        let raw = self.require(attribute)?;
        self.parse_number(attribute, raw)
    }

    /// Required Yes/No flag.
    pub fn require_flag(&self, attribute: &str) -> Result<bool, RecordError> {
        let raw = self.require(attribute)?;
        match raw.to_ascii_lowercase().as_str() {
            "yes" | "y" | "true" => Ok(true),
            "no" | "n" | "false" => Ok(false),
            _ => Err(self.invalid(attribute, raw)),
        }
    }

    fn parse_number(&self, attribute: &str, raw: &str) -> Result<f64, RecordError> {
        raw.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| self.invalid(attribute, raw))
    }

    fn invalid(&self, attribute: &str, raw: &str) -> RecordError {
        RecordError::InvalidAttribute {
            item: self.name.clone(),
            attribute: attribute.to_string(),
            value: raw.to_string(),
        }
    }
}

/// Records loaded under one category label, in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentCategory {
    label: String,
    skill: String,
    records: Vec<EquipmentRecord>,
}

impl EquipmentCategory {
    /// The owning-skill label is normalized here, once, at ingestion.
    pub fn new(label: impl Into<String>, records: Vec<EquipmentRecord>) -> Self {
        let label = label.into();
        let skill = owning_skill_label(&label);
        Self {
            label,
            skill,
            records,
        }
    }

    /// Raw category label, e.g. `"Guns - ballistic"`.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Normalized owning-skill label, e.g. `"Guns"`.
    pub fn skill(&self) -> &str {
        &self.skill
    }

    pub fn records(&self) -> &[EquipmentRecord] {
        &self.records
    }

    pub fn find(&self, name: &str) -> Option<&EquipmentRecord> {
        self.records.iter().find(|r| r.name() == name)
    }
}

/// The whole parsed equipment catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    sections: HashMap<CatalogSection, Vec<EquipmentCategory>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, section: CatalogSection, category: EquipmentCategory) -> Self {
        self.add_category(section, category);
        self
    }

    pub fn add_category(&mut self, section: CatalogSection, category: EquipmentCategory) {
        self.sections.entry(section).or_default().push(category);
    }

    /// Categories of a section in insertion order.
    pub fn section(&self, section: CatalogSection) -> &[EquipmentCategory] {
        self.sections
            .get(&section)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    pub fn weapons(&self) -> &[EquipmentCategory] {
        self.section(CatalogSection::Weapons)
    }

    pub fn armour(&self) -> &[EquipmentCategory] {
        self.section(CatalogSection::Armour)
    }

    /// Look up a record by name within a section.
    pub fn find(&self, section: CatalogSection, name: &str) -> Option<(&EquipmentCategory, &EquipmentRecord)> {
        self.section(section)
            .iter()
            .find_map(|category| category.find(name).map(|record| (category, record)))
    }

    /// Number of records in a section.
    pub fn record_count(&self, section: CatalogSection) -> usize {
        self.section(section).iter().map(|c| c.records().len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> EquipmentRecord {
        EquipmentRecord::from_pairs([
            ("Name", "Varmint rifle"),
            ("Damage per shot", "18"),
            ("Weapon spread", ""),
            ("Silent", "No"),
            ("Value", "lots"),
        ])
        .unwrap()
    }

    #[test]
    fn owning_skill_label_takes_first_token() {
        assert_eq!(owning_skill_label("Melee weapons - unique"), "Melee weapons");
        assert_eq!(owning_skill_label("ENERGY WEAPONS - pistols"), "Energy weapons");
        assert_eq!(owning_skill_label("Guns"), "Guns");
        assert_eq!(owning_skill_label(""), "");
    }

    #[test]
    fn record_requires_name() {
        let err = EquipmentRecord::from_pairs([("Damage per shot", "10")]).unwrap_err();
        assert!(matches!(err, RecordError::MissingAttribute { .. }));
    }

    #[test]
    fn empty_cells_are_absent() {
        let r = record();
        assert!(r.has("Weapon spread"));
        assert_eq!(r.get("Weapon spread"), None);
        assert_eq!(r.number("Weapon spread").unwrap(), None);
    }

    #[test]
    fn numeric_accessors_fail_loudly() {
        let r = record();
        assert_eq!(r.require_number("Damage per shot").unwrap(), 18.0);
        assert!(matches!(
            r.require_number("Value"),
            Err(RecordError::InvalidAttribute { .. })
        ));
        assert!(matches!(
            r.require_number("Rate of fire"),
            Err(RecordError::MissingAttribute { .. })
        ));
    }

    #[test]
    fn flags_parse_yes_no() {
        let r = record();
        assert!(!r.require_flag("Silent").unwrap());
        assert!(r.require_flag("Value").is_err());
    }

    #[test]
    fn catalog_keeps_category_order() {
        let catalog = Catalog::new()
            .with_category(
                CatalogSection::Weapons,
                EquipmentCategory::new("Guns - pistols", vec![record()]),
            )
            .with_category(
                CatalogSection::Weapons,
                EquipmentCategory::new("Unarmed - fists", vec![]),
            );

        let labels: Vec<&str> = catalog.weapons().iter().map(|c| c.label()).collect();
        assert_eq!(labels, vec!["Guns - pistols", "Unarmed - fists"]);
        assert_eq!(catalog.weapons()[0].skill(), "Guns");
        assert_eq!(catalog.record_count(CatalogSection::Weapons), 1);
        assert!(catalog.armour().is_empty());

        let (category, found) = catalog
            .find(CatalogSection::Weapons, "Varmint rifle")
            .unwrap();
        assert_eq!(category.label(), "Guns - pistols");
        assert_eq!(found.name(), "Varmint rifle");
    }
}
