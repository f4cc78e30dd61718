use anyhow::{Context, Result};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crewmate::config::Config;

fn main() -> Result<()> {
    // Load configuration first so the log level can come from .env
    let config = Config::from_env()?;

    // Logs go to stderr; stdout carries only the JSON payload
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting Crewmate prompt catalog v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Selected prompt variant: {} (persona: {})",
        config.variant,
        config.variant.persona()
    );

    let blocks = config.variant.system_blocks();
    let payload = if config.pretty {
        serde_json::to_string_pretty(&blocks)
    } else {
        serde_json::to_string(&blocks)
    }
    .context("Failed to serialize system prompt blocks")?;

    debug!("Serialized {} block(s), {} bytes", blocks.len(), payload.len());
    println!("{payload}");

    Ok(())
}
