use serde::{Deserialize, Serialize};

/// Read-only market snapshot for one trading symbol, as served by `/data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairSummary {
    pub symbol: String,
    pub current_price: f64,
    pub volume: f64,
    pub price_change_24h: f64,
    pub spread: f64,
    pub volatility: f64,
    pub high_price: f64,
    pub low_price: f64,
}

/// Exchange 24h rolling-window ticker, already parsed to numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticker24h {
    pub symbol: String,
    pub last_price: f64,
    pub high_price: f64,
    pub low_price: f64,
    pub ask_price: f64,
    pub bid_price: f64,
    pub quote_volume: f64,
    pub price_change_percent: f64,
}
