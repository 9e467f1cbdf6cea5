//! Rank weapons use case.

use loadout_domain::{rank, score_weapon_record, BuildProfile, Catalog, Skill};

use super::{RankingReport, SkippedItem};

/// Scores every weapon owned by one of the build's candidate combat skills
/// and ranks them lowest first.
pub struct RankWeapons {
    skill_window: i32,
}

impl RankWeapons {
    pub fn new(skill_window: i32) -> Self {
        Self { skill_window }
    }

    pub fn execute(&self, catalog: &Catalog, build: &BuildProfile) -> RankingReport {
        let candidates = build.skills().candidate_weapon_skills(self.skill_window);

        let mut scores = Vec::new();
        let mut skipped = Vec::new();

        for category in catalog.weapons() {
            if let Ok(skill) = category.skill().parse::<Skill>() {
                if !candidates.contains(&skill) {
                    tracing::debug!(
                        category = %category.label(),
                        skill = %skill,
                        "Skipping category outside the candidate weapon skills"
                    );
                    continue;
                }
            }

            for record in category.records() {
                match score_weapon_record(category, record, build) {
                    Ok(score) => scores.push((record.name().to_string(), score)),
                    Err(e) => {
                        tracing::warn!(
                            error = %e,
                            item = %record.name(),
                            category = %category.label(),
                            "Failed to score weapon, skipping"
                        );
                        skipped.push(SkippedItem {
                            identity: record.name().to_string(),
                            reason: e.to_string(),
                        });
                    }
                }
            }
        }

        let report = RankingReport {
            ranked: rank(scores),
            skipped,
        };
        tracing::info!(
            ranked = report.ranked.len(),
            skipped = report.skipped.len(),
            best = report.best().map(|item| item.identity.as_str()).unwrap_or("none"),
            "Ranked weapons"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use loadout_domain::{
        CatalogSection, EffectiveRange, EquipmentCategory, EquipmentRecord,
        PlaystylePreferences, SkillSheet, Special, TraitSelection,
    };

    use super::*;

    fn record(pairs: &[(&str, &str)]) -> EquipmentRecord {
        EquipmentRecord::from_pairs(pairs.iter().copied()).unwrap()
    }

    fn catalog() -> Catalog {
        Catalog::new()
            .with_category(
                CatalogSection::Weapons,
                EquipmentCategory::new(
                    "Guns - pistols",
                    vec![
                        record(&[
                            ("Name", "Silenced .22 pistol"),
                            ("Range", "Mid range"),
                            ("Silent", "Yes"),
                            ("Action point cost", "20"),
                            ("Damage per Action Point", "5"),
                            ("Damage per shot", "100"),
                        ]),
                        record(&[("Name", "Broken pistol"), ("Silent", "No")]),
                    ],
                ),
            )
            .with_category(
                CatalogSection::Weapons,
                EquipmentCategory::new(
                    "Melee weapons - bladed",
                    vec![record(&[
                        ("Name", "Knife"),
                        ("Range", "Close range"),
                        ("Silent", "Yes"),
                        ("Action point cost", "15"),
                        ("Damage per Action Point", "2"),
                    ])],
                ),
            )
            .with_category(
                CatalogSection::Weapons,
                EquipmentCategory::new(
                    "Explosives - thrown",
                    vec![record(&[("Name", "Frag grenade")])],
                ),
            )
            .with_category(
                CatalogSection::Weapons,
                EquipmentCategory::new("Throwing - spears", vec![record(&[("Name", "Spear")])]),
            )
    }

    fn build() -> BuildProfile {
        let skills = SkillSheet::from_points(
            [
                (Skill::Guns, 50),
                (Skill::MeleeWeapons, 45),
                (Skill::Explosives, 20),
            ],
            &[Skill::Guns, Skill::MeleeWeapons, Skill::Sneak],
        )
        .unwrap();
        BuildProfile::new(
            Special::default(),
            skills,
            TraitSelection::none(),
            PlaystylePreferences::new([EffectiveRange::Mid], true, false).unwrap(),
        )
        .unwrap()
    }

    fn report() -> RankingReport {
        RankWeapons::new(10).execute(&catalog(), &build())
    }

    #[test]
    fn when_build_favours_guns_and_melee_then_ranks_those_lowest_first() {
        let report = report();

        let ranked: Vec<(&str, f64)> = report
            .ranked
            .iter()
            .map(|item| (item.identity.as_str(), item.score))
            .collect();
        // Knife: off range halves nothing, +1 silent, 5 * 0.45 + 0.01 * (80 / 15) * 2
        assert_eq!(ranked, vec![("Knife", 3.36), ("Silenced .22 pistol", 3.71)]);
        assert_eq!(
            report.best().map(|item| item.identity.as_str()),
            Some("Silenced .22 pistol")
        );
    }

    #[test]
    fn when_items_cannot_be_scored_then_they_are_skipped() {
        let report = report();

        let skipped: Vec<&str> = report
            .skipped
            .iter()
            .map(|item| item.identity.as_str())
            .collect();
        assert_eq!(skipped, vec!["Broken pistol", "Spear"]);
        assert!(report.skipped[0].reason.contains("Range"));
        assert!(report.skipped[1].reason.contains("Throwing"));
        // Explosives sit 30 points below Guns, outside the window.
        assert!(report.ranked.iter().all(|item| item.identity != "Frag grenade"));
    }

    #[test]
    fn when_window_is_wide_then_explosives_are_attempted() {
        let report = RankWeapons::new(30).execute(&catalog(), &build());

        let skipped: Vec<&str> = report
            .skipped
            .iter()
            .map(|item| item.identity.as_str())
            .collect();
        assert_eq!(skipped, vec!["Broken pistol", "Frag grenade", "Spear"]);
    }
}
