use anyhow::{Context, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::exchange::MarketData;
use crate::models::{Candle, Ticker24h, Timeframe};

/// In-memory market with pre-loaded tickers and candles. Serves the same
/// answers on every call; `set_failing` makes every call error instead.
#[derive(Default)]
pub struct FixtureMarket {
    tickers: RwLock<Vec<Ticker24h>>,
    candles: RwLock<HashMap<(String, Timeframe), Vec<Candle>>>,
    failure: RwLock<Option<String>>,
}

impl FixtureMarket {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tickers(mut self, tickers: Vec<Ticker24h>) -> Self {
        self.tickers = RwLock::new(tickers);
        self
    }

    /// Candles must be sorted oldest-first.
    pub fn load(&self, symbol: &str, tf: Timeframe, candles: Vec<Candle>) {
        if let Ok(mut c) = self.candles.write() {
            c.insert((symbol.to_string(), tf), candles);
        }
    }

    pub fn set_failing(&self, message: Option<&str>) {
        if let Ok(mut f) = self.failure.write() {
            *f = message.map(str::to_string);
        }
    }

    fn check(&self) -> Result<()> {
        match self.failure.read().ok().and_then(|f| f.clone()) {
            Some(msg) => anyhow::bail!(msg),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl MarketData for FixtureMarket {
    async fn tickers_24h(&self) -> Result<Vec<Ticker24h>> {
        self.check()?;
        Ok(self.tickers.read().map(|t| t.clone()).unwrap_or_default())
    }

    async fn ticker_24h(&self, symbol: &str) -> Result<Ticker24h> {
        self.check()?;
        self.tickers
            .read()
            .ok()
            .and_then(|t| t.iter().find(|t| t.symbol == symbol).cloned())
            .with_context(|| format!("Invalid symbol {}", symbol))
    }

    async fn klines(&self, symbol: &str, tf: Timeframe, limit: usize) -> Result<Vec<Candle>> {
        self.check()?;
        let candles = self.candles.read().ok();
        let all = candles
            .as_ref()
            .and_then(|c| c.get(&(symbol.to_string(), tf)))
            .with_context(|| format!("No {} candles for {}", tf, symbol))?;

        let start = all.len().saturating_sub(limit);
        Ok(all[start..].to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{hourly_candles, ticker};

    #[tokio::test]
    async fn klines_returns_most_recent_window() {
        let market = FixtureMarket::new();
        market.load("BTCUSDT", Timeframe::H1, hourly_candles(48, 100.0));

        let window = market.klines("BTCUSDT", Timeframe::H1, 24).await.unwrap();
        assert_eq!(window.len(), 24);
        assert_eq!(window[0].close, 124.0);
        assert!(market.klines("ETHUSDT", Timeframe::H1, 24).await.is_err());
    }

    #[tokio::test]
    async fn failing_market_errors_everywhere() {
        let market = FixtureMarket::new().with_tickers(vec![ticker("BTCUSDT", 1.0, 1.0)]);
        assert!(market.ticker_24h("BTCUSDT").await.is_ok());

        market.set_failing(Some("exchange down"));
        let err = market.tickers_24h().await.unwrap_err();
        assert_eq!(err.to_string(), "exchange down");
    }
}
