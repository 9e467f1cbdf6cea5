//! Load advisor inputs use case.

use std::sync::Arc;

use loadout_domain::{BuildProfile, Catalog};

use crate::infrastructure::ports::{BuildSource, CatalogSource};

use super::AdvisorError;

/// The catalog and build every advisor step works from.
#[derive(Debug, Clone)]
pub struct AdvisorInputs {
    pub catalog: Catalog,
    pub build: BuildProfile,
}

/// Reads the catalog and build once through the source ports.
pub struct LoadAdvisorInputs {
    catalog: Arc<dyn CatalogSource>,
    build: Arc<dyn BuildSource>,
}

impl LoadAdvisorInputs {
    pub fn new(catalog: Arc<dyn CatalogSource>, build: Arc<dyn BuildSource>) -> Self {
        Self { catalog, build }
    }

    pub async fn execute(&self) -> Result<AdvisorInputs, AdvisorError> {
        let catalog = self.catalog.load_catalog().await?;
        let build = self.build.load_build().await?;
        tracing::debug!(
            weapon_categories = catalog.weapons().len(),
            armour_categories = catalog.armour().len(),
            "Loaded advisor inputs"
        );
        Ok(AdvisorInputs { catalog, build })
    }
}
