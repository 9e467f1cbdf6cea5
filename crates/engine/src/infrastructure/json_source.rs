//! JSON file adapter for the catalog and build ports.
//!
//! Catalog document layout:
//!
//! ```json
//! {
//!   "weapons": [{ "label": "Guns - pistols", "items": [{ "Name": "9mm pistol", "Range": "Mid range" }] }],
//!   "armour":  [{ "label": "Light armor", "items": [{ "Name": "Leather armor", "DT": 6 }] }]
//! }
//! ```
//!
//! Cell values may be strings, numbers, booleans (`Yes`/`No`) or arrays of
//! those (joined with `", "`). `null` and missing cells are absent. Unknown
//! top-level sections are ignored.
//!
//! Build document layout:
//!
//! ```json
//! {
//!   "special": { "Strength": 6, "Agility": 7 },
//!   "taggedSkills": ["Guns", "Sneak", "Lockpick"],
//!   "skills": { "Guns": 55 },
//!   "traits": ["Built to Destroy"],
//!   "preferences": { "ranges": ["Mid range"], "stealth": true, "loud": false }
//! }
//! ```
//!
//! Unlisted SPECIAL attributes keep the default of 5. When `skills` is absent
//! the sheet is derived from SPECIAL and the tag bonus applied; when present
//! the totals are final and skills it does not list sit at 0.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tokio::fs;

use loadout_domain::{
    BuildProfile, Catalog, CatalogSection, EffectiveRange, EquipmentCategory, EquipmentRecord,
    PlaystylePreferences, Skill, SkillSheet, Special, SpecialStat, TraitSelection,
};

use super::ports::{BuildSource, CatalogSource, SourceError};

// =============================================================================
// Document types
// =============================================================================

#[derive(Debug, Deserialize)]
struct CategoryDocument {
    label: String,
    #[serde(default)]
    items: Vec<BTreeMap<String, Value>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BuildDocument {
    #[serde(default)]
    special: BTreeMap<String, i32>,
    tagged_skills: Vec<String>,
    #[serde(default)]
    skills: Option<BTreeMap<String, i32>>,
    #[serde(default)]
    traits: Vec<String>,
    preferences: PreferencesDocument,
}

#[derive(Debug, Deserialize)]
struct PreferencesDocument {
    ranges: Vec<String>,
    #[serde(default)]
    stealth: bool,
    #[serde(default)]
    loud: bool,
}

// =============================================================================
// Parsing
// =============================================================================

/// Parse a catalog document.
pub fn parse_catalog(content: &str) -> Result<Catalog, SourceError> {
    let document: BTreeMap<String, Value> = serde_json::from_str(content)?;

    let mut catalog = Catalog::new();
    for (key, value) in document {
        let Some(section) = CatalogSection::ALL
            .into_iter()
            .find(|section| section.as_str().eq_ignore_ascii_case(key.trim()))
        else {
            tracing::debug!(section = %key, "Ignoring unknown catalog section");
            continue;
        };

        let categories: Vec<CategoryDocument> = serde_json::from_value(value)?;
        for category in categories {
            let records = category
                .items
                .iter()
                .map(|item| {
                    let attributes: HashMap<String, String> = item
                        .iter()
                        .map(|(column, value)| (column.clone(), cell_text(value)))
                        .collect();
                    EquipmentRecord::new(attributes)
                })
                .collect::<Result<Vec<_>, _>>()?;
            catalog.add_category(section, EquipmentCategory::new(category.label, records));
        }
    }

    Ok(catalog)
}

/// Parse a build document into a validated build.
pub fn parse_build(content: &str) -> Result<BuildProfile, SourceError> {
    let document: BuildDocument = serde_json::from_str(content)?;

    let mut values = Special::default().values();
    for (name, value) in &document.special {
        let stat: SpecialStat = name.parse()?;
        if let Some(index) = SpecialStat::ALL.iter().position(|s| *s == stat) {
            values[index] = *value;
        }
    }
    let special = Special::new(values)?;

    let tagged = document
        .tagged_skills
        .iter()
        .map(|name| name.parse::<Skill>())
        .collect::<Result<Vec<_>, _>>()?;

    let traits = TraitSelection::new(document.traits)?;

    let ranges = document
        .preferences
        .ranges
        .iter()
        .map(|name| name.parse::<EffectiveRange>())
        .collect::<Result<Vec<_>, _>>()?;
    let preferences = PlaystylePreferences::new(
        ranges,
        document.preferences.stealth,
        document.preferences.loud,
    )?;

    let build = match document.skills {
        Some(points) => {
            let points = points
                .iter()
                .map(|(name, value)| name.parse::<Skill>().map(|skill| (skill, *value)))
                .collect::<Result<Vec<_>, _>>()?;
            let sheet = SkillSheet::from_points(points, &tagged)?;
            BuildProfile::new(special, sheet, traits, preferences)?
        }
        None => BuildProfile::from_allocation(special, &tagged, traits, preferences)?,
    };

    Ok(build)
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(true) => "Yes".to_string(),
        Value::Bool(false) => "No".to_string(),
        Value::Array(values) => values
            .iter()
            .map(cell_text)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(_) => value.to_string(),
    }
}

// =============================================================================
// Adapter
// =============================================================================

/// Reads the catalog and the build from two JSON files.
pub struct JsonFileSource {
    catalog_path: PathBuf,
    build_path: PathBuf,
}

impl JsonFileSource {
    pub fn new(catalog_path: impl Into<PathBuf>, build_path: impl Into<PathBuf>) -> Self {
        Self {
            catalog_path: catalog_path.into(),
            build_path: build_path.into(),
        }
    }

    pub fn catalog_path(&self) -> &Path {
        &self.catalog_path
    }

    pub fn build_path(&self) -> &Path {
        &self.build_path
    }
}

async fn read_document(path: &Path) -> Result<String, SourceError> {
    if !path.exists() {
        return Err(SourceError::NotFound(path.to_path_buf()));
    }
    Ok(fs::read_to_string(path).await?)
}

#[async_trait]
impl CatalogSource for JsonFileSource {
    async fn load_catalog(&self) -> Result<Catalog, SourceError> {
        let content = read_document(&self.catalog_path).await?;
        let catalog = parse_catalog(&content)?;
        tracing::debug!(
            path = %self.catalog_path.display(),
            weapons = catalog.record_count(CatalogSection::Weapons),
            armour = catalog.record_count(CatalogSection::Armour),
            "Loaded catalog"
        );
        Ok(catalog)
    }
}

#[async_trait]
impl BuildSource for JsonFileSource {
    async fn load_build(&self) -> Result<BuildProfile, SourceError> {
        let content = read_document(&self.build_path).await?;
        let build = parse_build(&content)?;
        tracing::debug!(path = %self.build_path.display(), "Loaded build");
        Ok(build)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"{
        "weapons": [
            {
                "label": "Guns - pistols",
                "items": [
                    {
                        "Name": "9mm pistol",
                        "Range": "Close range, Mid range",
                        "Silent": false,
                        "Action point cost": 17,
                        "Damage per Action Point": 1.06,
                        "Damage per shot": 18,
                        "Weapon spread": null
                    },
                    { "Name": "Silenced .22 pistol", "Range": ["Close range"], "Silent": "Yes" }
                ]
            },
            { "label": "Melee weapons - bladed", "items": [{ "Name": "Machete" }] }
        ],
        "armour": [
            { "label": "Light armor", "items": [{ "Name": "Leather armor", "DT": 6, "DR": 0, "Weight": 15 }] }
        ],
        "notes": [{ "label": "ignored", "items": [] }]
    }"#;

    const BUILD: &str = r#"{
        "special": { "Strength": 6, "Perception": 6, "Agility": 7, "Luck": 6 },
        "taggedSkills": ["Guns", "Sneak", "Lockpick"],
        "traits": ["Built to Destroy", "No Trait"],
        "preferences": { "ranges": ["Mid range", "Long range"], "stealth": true }
    }"#;

    #[test]
    fn parses_catalog_sections_and_cells() {
        let catalog = parse_catalog(CATALOG).unwrap();

        assert_eq!(catalog.weapons().len(), 2);
        assert_eq!(catalog.weapons()[0].skill(), "Guns");
        assert_eq!(catalog.weapons()[1].skill(), "Melee weapons");
        assert_eq!(catalog.record_count(CatalogSection::Armour), 1);

        let (_, pistol) = catalog.find(CatalogSection::Weapons, "9mm pistol").unwrap();
        assert_eq!(pistol.get("Silent"), Some("No"));
        assert_eq!(pistol.get("Action point cost"), Some("17"));
        assert_eq!(pistol.get("Damage per Action Point"), Some("1.06"));
        assert_eq!(pistol.get("Weapon spread"), None);

        let (_, silenced) = catalog
            .find(CatalogSection::Weapons, "Silenced .22 pistol")
            .unwrap();
        assert_eq!(silenced.get("Range"), Some("Close range"));
    }

    #[test]
    fn unknown_sections_of_any_shape_are_ignored() {
        let catalog = parse_catalog(
            r#"{
                "weapons": [{ "label": "Guns - pistols", "items": [{ "Name": "9mm pistol" }] }],
                "version": "1.2",
                "meta": { "source": "wiki" }
            }"#,
        )
        .unwrap();

        assert_eq!(catalog.weapons().len(), 1);
        assert!(catalog.armour().is_empty());
    }

    #[test]
    fn known_section_with_wrong_shape_is_a_json_error() {
        let err = parse_catalog(r#"{ "weapons": "all of them" }"#).unwrap_err();
        assert!(matches!(err, SourceError::Json(_)));
    }

    #[test]
    fn catalog_item_without_name_is_rejected() {
        let err = parse_catalog(r#"{"weapons": [{"label": "Guns - rifles", "items": [{"Range": "Long range"}]}]}"#)
            .unwrap_err();
        assert!(matches!(err, SourceError::Record(_)));
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        assert!(matches!(parse_catalog("{"), Err(SourceError::Json(_))));
    }

    #[test]
    fn parses_build_with_derived_skills() {
        let build = parse_build(BUILD).unwrap();

        assert_eq!(build.special().strength(), 6);
        assert_eq!(build.special().agility(), 7);
        assert_eq!(build.special().total(), 40);
        // 2 + 2 * 7 + ceil(6 / 2) + 15
        assert_eq!(build.skills().points(Skill::Guns), 34);
        assert!(build.skills().is_tagged(Skill::Sneak));
        assert!(build.traits().has_damage_boost());
        assert_eq!(build.traits().len(), 1);
        assert!(build.preferences().prefers_range(EffectiveRange::Long));
        assert!(!build.preferences().prefers_loud());
    }

    #[test]
    fn explicit_skill_points_are_final() {
        let content = r#"{
            "taggedSkills": ["Guns", "Energy Weapons", "Science"],
            "skills": { "Guns": 80, "Energy Weapons": 75, "Science": 60 },
            "preferences": { "ranges": ["Close range"], "loud": true }
        }"#;
        let build = parse_build(content).unwrap();

        assert_eq!(build.special(), &Special::default());
        assert_eq!(build.skills().points(Skill::Guns), 80);
        assert_eq!(build.skills().points(Skill::Sneak), 0);
        assert!(build.skills().is_tagged(Skill::EnergyWeapons));
    }

    #[test]
    fn build_rejects_unknown_skill() {
        let content = r#"{
            "taggedSkills": ["Guns", "Throwing", "Science"],
            "preferences": { "ranges": ["Close range"], "loud": true }
        }"#;
        assert!(matches!(parse_build(content), Err(SourceError::Domain(_))));
    }

    #[test]
    fn build_rejects_overspent_special() {
        let content = r#"{
            "special": { "Strength": 10, "Endurance": 10 },
            "taggedSkills": ["Guns", "Sneak", "Science"],
            "preferences": { "ranges": ["Close range"], "loud": true }
        }"#;
        let err = parse_build(content).unwrap_err();
        assert!(err.to_string().contains("budget"));
    }

    #[test]
    fn build_requires_an_affinity() {
        let content = r#"{
            "taggedSkills": ["Guns", "Sneak", "Science"],
            "preferences": { "ranges": ["Close range"] }
        }"#;
        assert!(parse_build(content).is_err());
    }

    #[tokio::test]
    async fn loads_both_documents_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let catalog_path = dir.path().join("catalog.json");
        let build_path = dir.path().join("build.json");
        std::fs::write(&catalog_path, CATALOG).unwrap();
        std::fs::write(&build_path, BUILD).unwrap();

        let source = JsonFileSource::new(&catalog_path, &build_path);
        let catalog = source.load_catalog().await.unwrap();
        let build = source.load_build().await.unwrap();

        assert_eq!(catalog.record_count(CatalogSection::Weapons), 3);
        assert_eq!(build.skills().tagged_count(), 3);
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileSource::new(dir.path().join("nope.json"), dir.path().join("nope.json"));

        let err = source.load_catalog().await.unwrap_err();
        assert!(err.is_not_found());
    }
}
