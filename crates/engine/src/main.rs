//! Loadout Engine - Main entry point.
//!
//! Loads the configured catalog and build, then prints the advisor report as
//! JSON on stdout. Logs go to stderr.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use loadout_engine::infrastructure::config::AdvisorConfig;
use loadout_engine::infrastructure::json_source::JsonFileSource;
use loadout_engine::App;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the engine may be run from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "loadout_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AdvisorConfig::from_env();
    tracing::info!(
        catalog = %config.catalog_path.display(),
        build = %config.build_path.display(),
        max_vertices = config.max_vertices,
        skill_window = config.skill_window,
        "Starting Loadout Engine"
    );

    let source = Arc::new(JsonFileSource::new(
        config.catalog_path.clone(),
        config.build_path.clone(),
    ));
    let app = App::new(source.clone(), source, &config);

    let report = app.advise().await?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides, then the working directory.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
    let _ = dotenvy::dotenv();
}
