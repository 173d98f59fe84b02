pub mod binance;
pub mod fixture;

pub use binance::BinanceClient;
pub use fixture::FixtureMarket;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::{Candle, Ticker24h, Timeframe};

/// Read-only market data used by the pair catalog and the chart.
#[async_trait]
pub trait MarketData: Send + Sync {
    /// 24h tickers for every listed symbol.
    async fn tickers_24h(&self) -> Result<Vec<Ticker24h>>;
    async fn ticker_24h(&self, symbol: &str) -> Result<Ticker24h>;
    /// Most recent `limit` candles, oldest first.
    async fn klines(&self, symbol: &str, tf: Timeframe, limit: usize) -> Result<Vec<Candle>>;
}
