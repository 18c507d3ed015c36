//! Skirmish binary.
//!
//! Loads combat content, starts a fixed encounter and auto-plays it through
//! the runtime's `CombatService`, then prints the battle log and the final
//! projection as JSON.
//!
//! # Environment
//!
//! - `SKIRMISH_CONTENT_DIR`: content directory (default `crates/combat/content/data`)
//! - `SKIRMISH_SEED`: battle seed (random when unset)
//! - `SKIRMISH_MAX_ROUNDS`: round limit for auto-play (default 20)
//! - `RUST_LOG`: tracing filter
mod autoplay;
mod config;
mod scenario;

use std::sync::Arc;

use anyhow::{Context, Result};
use combat_content::ContentFactory;
use runtime::{BattleRepository, CombatService, InMemoryBattleRepo, OracleManager, random_seed};

use crate::config::SkirmishConfig;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SkirmishConfig::from_env();
    let content = ContentFactory::load(&config.content_dir).with_context(|| {
        format!(
            "Failed to load content from {}",
            config.content_dir.display()
        )
    })?;

    let seed = config.seed.unwrap_or_else(random_seed);
    tracing::info!(seed, max_rounds = config.max_rounds, "Starting skirmish");

    let oracles = OracleManager::with_system_clock(Arc::new(content.catalog));
    let service = CombatService::new(
        Arc::new(InMemoryBattleRepo::new()),
        oracles,
        content.config,
    );

    let setup = scenario::ambush(seed);
    service.start(&setup).await?;
    let view = autoplay::run(&service, setup.id, config.max_rounds).await?;

    let battle = service
        .repository()
        .load(setup.id)?
        .context("battle vanished from the repository")?;
    for entry in battle.log.entries() {
        println!("{entry}");
    }
    println!("{}", serde_json::to_string_pretty(&view)?);

    tracing::info!(outcome = %view.outcome, round = view.round, "Skirmish finished");
    Ok(())
}
