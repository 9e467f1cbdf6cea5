//! Application state and composition.

use std::sync::Arc;

use serde::Serialize;

use crate::infrastructure::config::AdvisorConfig;
use crate::infrastructure::ports::{BuildSource, CatalogSource};
use crate::use_cases::advisor::{
    AdvisorError, AdvisorUseCases, BuildEquipmentGraph, GraphReport, LoadAdvisorInputs,
    RankArmor, RankWeapons, RankingReport,
};

/// Main application state.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub advisor: AdvisorUseCases,
}

/// Everything the advisor produces for one build.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvisorReport {
    pub graph: GraphReport,
    pub weapons: RankingReport,
    pub armor: RankingReport,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(
        catalog: Arc<dyn CatalogSource>,
        build: Arc<dyn BuildSource>,
        config: &AdvisorConfig,
    ) -> Self {
        let advisor = AdvisorUseCases::new(
            Arc::new(LoadAdvisorInputs::new(catalog, build)),
            Arc::new(BuildEquipmentGraph::new(config.max_vertices)),
            Arc::new(RankWeapons::new(config.skill_window)),
            Arc::new(RankArmor::new()),
        );

        Self {
            use_cases: UseCases { advisor },
        }
    }

    /// Load the catalog and build once, then run the graph export and both
    /// rankings against that snapshot.
    pub async fn advise(&self) -> Result<AdvisorReport, AdvisorError> {
        let advisor = &self.use_cases.advisor;
        let inputs = advisor.load_inputs.execute().await?;
        Ok(AdvisorReport {
            graph: advisor.build_graph.execute(&inputs.catalog)?,
            weapons: advisor.rank_weapons.execute(&inputs.catalog, &inputs.build),
            armor: advisor.rank_armor.execute(&inputs.catalog, &inputs.build),
        })
    }
}
