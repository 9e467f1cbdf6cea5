//! Build advisor use cases.
//!
//! The catalog and build are loaded once through the source ports; the graph
//! and ranking steps then work from those same values and return serializable
//! reports. A failure to load data or to build the graph aborts the run; a
//! single item that cannot be scored is reported as skipped and the rest are
//! still ranked.

mod build_graph;
mod load_inputs;
mod rank_armor;
mod rank_weapons;

pub use build_graph::{BuildEquipmentGraph, GraphReport};
pub use load_inputs::{AdvisorInputs, LoadAdvisorInputs};
pub use rank_armor::RankArmor;
pub use rank_weapons::RankWeapons;

use std::sync::Arc;

use loadout_domain::{GraphError, RankedItem};
use serde::Serialize;

use crate::infrastructure::ports::SourceError;

/// Container for advisor use cases.
pub struct AdvisorUseCases {
    pub load_inputs: Arc<LoadAdvisorInputs>,
    pub build_graph: Arc<BuildEquipmentGraph>,
    pub rank_weapons: Arc<RankWeapons>,
    pub rank_armor: Arc<RankArmor>,
}

impl AdvisorUseCases {
    pub fn new(
        load_inputs: Arc<LoadAdvisorInputs>,
        build_graph: Arc<BuildEquipmentGraph>,
        rank_weapons: Arc<RankWeapons>,
        rank_armor: Arc<RankArmor>,
    ) -> Self {
        Self {
            load_inputs,
            build_graph,
            rank_weapons,
            rank_armor,
        }
    }
}

/// An item left out of a ranking, with the reason.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedItem {
    pub identity: String,
    pub reason: String,
}

/// Ranked items (lowest score first) plus those that could not be scored.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RankingReport {
    pub ranked: Vec<RankedItem>,
    pub skipped: Vec<SkippedItem>,
}

impl RankingReport {
    /// Highest-scoring item, if any was ranked.
    pub fn best(&self) -> Option<&RankedItem> {
        self.ranked.last()
    }
}

/// Errors that abort an advisor use case.
#[derive(Debug, thiserror::Error)]
pub enum AdvisorError {
    #[error("Failed to load data: {0}")]
    Source(#[from] SourceError),
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
}
