use anyhow::Result;
use tracing_subscriber::EnvFilter;

use tinylink::config::{self, Config};
use tinylink::server;

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` takes priority over the configured default level.
/// `LOG_FORMAT=json` switches to machine-readable output.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;
    init_tracing(&config);
    config.print_summary();

    server::run(config).await
}
