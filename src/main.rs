use anyhow::Result;
use product_catalog::config::{self, Config};
use product_catalog::server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;
    init_tracing(&config)?;
    config.print_summary();

    server::run(config).await
}

/// Installs the global subscriber: `RUST_LOG` filtering, text or JSON lines.
fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.log_format == "json" {
        builder
            .json()
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to init tracing: {}", e))
    } else {
        builder
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to init tracing: {}", e))
    }
}
