use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::config::Config;
use crate::exchange::MarketData;
use crate::models::{Candle, Ticker24h, Timeframe};

const MIN_REQUEST_INTERVAL: Duration = Duration::from_millis(100);
const API_KEY_HEADER: &str = "X-MBX-APIKEY";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTicker {
    symbol: String,
    last_price: String,
    high_price: String,
    low_price: String,
    ask_price: String,
    bid_price: String,
    quote_volume: String,
    price_change_percent: String,
}

impl RawTicker {
    fn parse(self) -> Option<Ticker24h> {
        Some(Ticker24h {
            last_price: self.last_price.parse().ok()?,
            high_price: self.high_price.parse().ok()?,
            low_price: self.low_price.parse().ok()?,
            ask_price: self.ask_price.parse().ok()?,
            bid_price: self.bid_price.parse().ok()?,
            quote_volume: self.quote_volume.parse().ok()?,
            price_change_percent: self.price_change_percent.parse().ok()?,
            symbol: self.symbol,
        })
    }
}

/// Public spot market endpoints of the Binance REST API.
pub struct BinanceClient {
    client: Client,
    base_url: String,
    api_key: String,
    last_request: Mutex<Option<Instant>>,
    ticker_cache: Mutex<Option<(Instant, Vec<Ticker24h>)>>,
    cache_ttl: Duration,
}

impl BinanceClient {
    pub fn new(cfg: &Config) -> Self {
        Self {
            client: Client::new(),
            base_url: cfg.market_url.clone(),
            api_key: cfg.binance_api_key.clone(),
            last_request: Mutex::new(None),
            ticker_cache: Mutex::new(None),
            cache_ttl: cfg.ticker_cache_ttl(),
        }
    }

    async fn rate_limit(&self) {
        let mut last = self.last_request.lock().await;
        if let Some(at) = *last {
            let elapsed = at.elapsed();
            if elapsed < MIN_REQUEST_INTERVAL {
                tokio::time::sleep(MIN_REQUEST_INTERVAL - elapsed).await;
            }
        }
        *last = Some(Instant::now());
    }

    fn get(&self, path: &str) -> RequestBuilder {
        let req = self.client.get(format!("{}{}", self.base_url, path));
        if self.api_key.is_empty() {
            req
        } else {
            req.header(API_KEY_HEADER, &self.api_key)
        }
    }

    async fn send_json<T: DeserializeOwned>(&self, req: RequestBuilder, what: &str) -> Result<T> {
        self.rate_limit().await;

        let resp = req
            .send()
            .await
            .with_context(|| format!("Failed to fetch {}", what))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("Binance API error {}: {}", status, body);
        }

        resp.json()
            .await
            .with_context(|| format!("Failed to parse {} response", what))
    }

    pub async fn tickers_24h(&self) -> Result<Vec<Ticker24h>> {
        {
            let cache = self.ticker_cache.lock().await;
            if let Some((cached_at, tickers)) = cache.as_ref() {
                if cached_at.elapsed() < self.cache_ttl {
                    return Ok(tickers.clone());
                }
            }
        }

        let raw: Vec<RawTicker> = self
            .send_json(self.get("/api/v3/ticker/24hr"), "tickers")
            .await?;
        let total = raw.len();
        let tickers: Vec<Ticker24h> = raw.into_iter().filter_map(RawTicker::parse).collect();
        if tickers.len() < total {
            debug!("Dropped {} unparseable tickers", total - tickers.len());
        }

        *self.ticker_cache.lock().await = Some((Instant::now(), tickers.clone()));
        Ok(tickers)
    }

    pub async fn ticker_24h(&self, symbol: &str) -> Result<Ticker24h> {
        let req = self.get("/api/v3/ticker/24hr").query(&[("symbol", symbol)]);
        let raw: RawTicker = self.send_json(req, "ticker").await?;
        raw.parse()
            .with_context(|| format!("Malformed ticker for {}", symbol))
    }

    pub async fn klines(&self, symbol: &str, tf: Timeframe, limit: usize) -> Result<Vec<Candle>> {
        let req = self.get("/api/v3/klines").query(&[
            ("symbol", symbol.to_string()),
            ("interval", tf.as_str().to_string()),
            ("limit", limit.to_string()),
        ]);
        let rows: Vec<Vec<Value>> = self.send_json(req, "klines").await?;

        let mut candles: Vec<Candle> = rows
            .iter()
            .filter_map(|row| Candle::from_kline(row))
            .collect();
        if candles.len() < rows.len() {
            warn!("Skipped {} malformed {} klines", rows.len() - candles.len(), symbol);
        }

        candles.sort_by_key(|c| c.timestamp);
        Ok(candles)
    }
}

#[async_trait]
impl MarketData for BinanceClient {
    async fn tickers_24h(&self) -> Result<Vec<Ticker24h>> {
        self.tickers_24h().await
    }

    async fn ticker_24h(&self, symbol: &str) -> Result<Ticker24h> {
        self.ticker_24h(symbol).await
    }

    async fn klines(&self, symbol: &str, tf: Timeframe, limit: usize) -> Result<Vec<Candle>> {
        self.klines(symbol, tf, limit).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_ticker_parses_camel_case_strings() {
        let body = r#"{
            "symbol": "BTCUSDT",
            "priceChange": "-94.99",
            "priceChangePercent": "-0.25",
            "lastPrice": "37000.01",
            "bidPrice": "37000.00",
            "askPrice": "37000.02",
            "highPrice": "37500.00",
            "lowPrice": "36500.00",
            "volume": "1234.5",
            "quoteVolume": "45678901.23"
        }"#;
        let raw: RawTicker = serde_json::from_str(body).unwrap();
        let t = raw.parse().unwrap();
        assert_eq!(t.symbol, "BTCUSDT");
        assert!((t.last_price - 37000.01).abs() < 1e-9);
        assert!((t.price_change_percent + 0.25).abs() < 1e-9);
        assert!((t.quote_volume - 45678901.23).abs() < 1e-6);
    }

    #[test]
    fn raw_ticker_with_bad_number_is_dropped() {
        let raw = RawTicker {
            symbol: "XUSDT".to_string(),
            last_price: "n/a".to_string(),
            high_price: "1".to_string(),
            low_price: "1".to_string(),
            ask_price: "1".to_string(),
            bid_price: "1".to_string(),
            quote_volume: "1".to_string(),
            price_change_percent: "0".to_string(),
        };
        assert!(raw.parse().is_none());
    }
}
