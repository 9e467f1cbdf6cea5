//! Data source ports.

use async_trait::async_trait;
use loadout_domain::{BuildProfile, Catalog};

use super::error::SourceError;

/// Supplies the equipment catalog.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load_catalog(&self) -> Result<Catalog, SourceError>;
}

/// Supplies the finished character build.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BuildSource: Send + Sync {
    async fn load_build(&self) -> Result<BuildProfile, SourceError>;
}
