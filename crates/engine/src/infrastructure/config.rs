//! Advisor configuration from environment variables.
//!
//! Supported environment variables:
//! - LOADOUT_CATALOG_PATH: catalog JSON document (default `data/catalog.json`)
//! - LOADOUT_BUILD_PATH: build JSON document (default `data/build.json`)
//! - LOADOUT_GRAPH_MAX_VERTICES: node cap for the graph export (default 5000)
//! - LOADOUT_SKILL_WINDOW: points below the best combat skill a weapon skill
//!   may sit and still be ranked (default 10)

use std::path::PathBuf;

use loadout_domain::{DEFAULT_MAX_VERTICES, DEFAULT_SKILL_WINDOW};

pub const CATALOG_PATH_VAR: &str = "LOADOUT_CATALOG_PATH";
pub const BUILD_PATH_VAR: &str = "LOADOUT_BUILD_PATH";
pub const MAX_VERTICES_VAR: &str = "LOADOUT_GRAPH_MAX_VERTICES";
pub const SKILL_WINDOW_VAR: &str = "LOADOUT_SKILL_WINDOW";

const DEFAULT_CATALOG_PATH: &str = "data/catalog.json";
const DEFAULT_BUILD_PATH: &str = "data/build.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisorConfig {
    pub catalog_path: PathBuf,
    pub build_path: PathBuf,
    pub max_vertices: usize,
    pub skill_window: i32,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            build_path: PathBuf::from(DEFAULT_BUILD_PATH),
            max_vertices: DEFAULT_MAX_VERTICES,
            skill_window: DEFAULT_SKILL_WINDOW,
        }
    }
}

impl AdvisorConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// Unparseable numbers fall back to the default with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let path = |key: &str, default: PathBuf| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
                .unwrap_or(default)
        };

        let catalog_path = path(CATALOG_PATH_VAR, defaults.catalog_path);
        let build_path = path(BUILD_PATH_VAR, defaults.build_path);

        let max_vertices = match lookup(MAX_VERTICES_VAR) {
            Some(val) => val.trim().parse::<usize>().unwrap_or_else(|_| {
                tracing::warn!(
                    val = %val,
                    "{} is not a valid vertex count, using {}",
                    MAX_VERTICES_VAR,
                    defaults.max_vertices
                );
                defaults.max_vertices
            }),
            None => defaults.max_vertices,
        };

        let skill_window = match lookup(SKILL_WINDOW_VAR) {
            Some(val) => match val.trim().parse::<i32>() {
                Ok(window) if window >= 0 => window,
                _ => {
                    tracing::warn!(
                        val = %val,
                        "{} must be a non-negative integer, using {}",
                        SKILL_WINDOW_VAR,
                        defaults.skill_window
                    );
                    defaults.skill_window
                }
            },
            None => defaults.skill_window,
        };

        Self {
            catalog_path,
            build_path,
            max_vertices,
            skill_window,
        }
    }
}
