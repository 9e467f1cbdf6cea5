//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Catalog data (could swap JSON files -> a spreadsheet export or database)
//! - The character build (could swap a JSON file -> an interactive allocator)

mod error;
mod sources;

pub use error::SourceError;
pub use sources::{BuildSource, CatalogSource};

#[cfg(test)]
pub use sources::{MockBuildSource, MockCatalogSource};
