use crate::models::Timeframe;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

pub type SharedConfig = Arc<Config>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Server
    pub bind_addr: String,
    pub backend_url: String,

    // Exchange
    pub market_url: String,
    pub binance_api_key: String,
    pub ticker_cache_ttl_secs: u64,

    // Pair catalog
    pub quote_asset: String,
    pub pair_limit: usize,

    // Chart
    pub chart_symbol: String,
    pub chart_interval: Timeframe,
    pub chart_points: usize,

    // Logging
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_addr: "0.0.0.0:8282".to_string(),
            backend_url: "http://127.0.0.1:8282".to_string(),
            market_url: "https://api.binance.com".to_string(),
            binance_api_key: String::new(),
            ticker_cache_ttl_secs: 5,
            quote_asset: "USDT".to_string(),
            pair_limit: 20,
            chart_symbol: "BTCUSDT".to_string(),
            chart_interval: Timeframe::H1,
            chart_points: 24,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let env = |key: &str, default: &str| -> String {
            std::env::var(key).unwrap_or_else(|_| default.to_string())
        };

        let defaults = Config::default();

        Config {
            bind_addr: env("BIND_ADDR", &defaults.bind_addr),
            backend_url: env("BACKEND_URL", &defaults.backend_url)
                .trim_end_matches('/')
                .to_string(),
            market_url: env("MARKET_URL", &defaults.market_url)
                .trim_end_matches('/')
                .to_string(),
            binance_api_key: env("BINANCE_API_KEY", ""),
            ticker_cache_ttl_secs: env("TICKER_CACHE_TTL_SECS", "5")
                .parse()
                .unwrap_or(defaults.ticker_cache_ttl_secs),
            quote_asset: env("QUOTE_ASSET", &defaults.quote_asset).to_uppercase(),
            pair_limit: env("PAIR_LIMIT", "20").parse().unwrap_or(defaults.pair_limit),
            chart_symbol: env("CHART_SYMBOL", &defaults.chart_symbol).to_uppercase(),
            chart_interval: Timeframe::from_str_loose(&env("CHART_INTERVAL", "1h"))
                .unwrap_or(defaults.chart_interval),
            chart_points: env("CHART_POINTS", "24")
                .parse()
                .unwrap_or(defaults.chart_points),
            log_level: env("LOG_LEVEL", &defaults.log_level),
        }
    }

    pub fn ticker_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.ticker_cache_ttl_secs)
    }

    pub fn shared(self) -> SharedConfig {
        Arc::new(self)
    }
}
