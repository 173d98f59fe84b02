use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;

use risk_calculator::config::Config;
use risk_calculator::exchange::FixtureMarket;
use risk_calculator::models::{Candle, Ticker24h, Timeframe};
use risk_calculator::server::{self, AppState};

pub fn ticker(symbol: &str, last: f64, quote_volume: f64, change: f64) -> Ticker24h {
    Ticker24h {
        symbol: symbol.to_string(),
        last_price: last,
        high_price: last * 1.1,
        low_price: last * 0.9,
        ask_price: last * 1.001,
        bid_price: last * 0.999,
        quote_volume,
        price_change_percent: change,
    }
}

/// `n` hourly candles closing at `start`, `start + 10`, ...
pub fn hourly_candles(n: usize, start: f64) -> Vec<Candle> {
    let base = DateTime::parse_from_rfc3339("2024-03-01T00:00:00Z")
        .unwrap()
        .with_timezone(&Utc);

    (0..n)
        .map(|i| {
            let close = start + i as f64 * 10.0;
            Candle {
                timestamp: base + Duration::hours(i as i64),
                open: close - 5.0,
                high: close + 5.0,
                low: close - 10.0,
                close,
                volume: 3.0,
            }
        })
        .collect()
}

/// A market with a few USDT pairs, one BTC-quoted pair and 48h of BTC candles.
pub fn fixture_market() -> FixtureMarket {
    let market = FixtureMarket::new().with_tickers(vec![
        ticker("BTCUSDT", 40000.0, 9_000_000.0, 1.2),
        ticker("ETHUSDT", 2000.0, 5_000_000.0, -0.8),
        ticker("ETHBTC", 0.05, 50_000_000.0, 0.1),
        ticker("SOLUSDT", 100.0, 7_000_000.0, 3.4),
        ticker("ZEROUSDT", 0.0, 1e12, 0.0),
    ]);
    market.load("BTCUSDT", Timeframe::H1, hourly_candles(48, 39000.0));
    market
}

/// Start the service on an ephemeral port; returns its base URL.
pub async fn spawn_server(market: Arc<FixtureMarket>) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let state = AppState {
        config: Config::default().shared(),
        market,
    };
    tokio::spawn(async move {
        server::serve(listener, state).await.unwrap();
    });

    format!("http://{}", addr)
}
