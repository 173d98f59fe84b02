use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use risk_calculator::config::Config;
use risk_calculator::exchange::BinanceClient;
use risk_calculator::server::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();

    info!(
        "Market data from {} ({} pairs quoted in {})",
        cfg.market_url, cfg.pair_limit, cfg.quote_asset
    );

    let market = Arc::new(BinanceClient::new(&cfg));
    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", cfg.bind_addr))?;

    let state = AppState {
        config: cfg.shared(),
        market,
    };

    server::serve(listener, state).await
}
