//! Rank armor use case.

use loadout_domain::{rank, score_armor_record, BuildProfile, Catalog};

use super::{RankingReport, SkippedItem};

#[derive(Debug, Default)]
pub struct RankArmor;

impl RankArmor {
    pub fn new() -> Self {
        Self
    }

    /// Score every armour record in the catalog, lowest first.
    pub fn execute(&self, catalog: &Catalog, build: &BuildProfile) -> RankingReport {
        let mut scores = Vec::new();
        let mut skipped = Vec::new();

        for record in catalog.armour().iter().flat_map(|c| c.records()) {
            match score_armor_record(record, build) {
                Ok(score) => scores.push((record.name().to_string(), score)),
                Err(e) => {
                    tracing::warn!(error = %e, item = %record.name(), "Failed to score armor, skipping");
                    skipped.push(SkippedItem {
                        identity: record.name().to_string(),
                        reason: e.to_string(),
                    });
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
            "Ranked armor"
        );
        report
    }
}
