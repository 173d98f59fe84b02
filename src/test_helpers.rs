use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::client::{CalculationBackend, CatalogPayload, PairSource, PipelineError};
use crate::core::risk;
use crate::models::{Candle, PairSummary, Ticker24h, TradeInput, TradeResult};
use crate::page::{chart_canvas_id, MemoryDocument, PageBindings};

/// Ticker with a 1% spread band around `last` and the given quote volume.
pub fn ticker(symbol: &str, last: f64, quote_volume: f64) -> Ticker24h {
    Ticker24h {
        symbol: symbol.to_string(),
        last_price: last,
        high_price: last * 1.05,
        low_price: last * 0.95,
        ask_price: last * 1.005,
        bid_price: last * 0.995,
        quote_volume,
        price_change_percent: 1.5,
    }
}

pub fn pair(symbol: &str, price: f64) -> PairSummary {
    PairSummary {
        symbol: symbol.to_string(),
        current_price: price,
        volume: 1_000_000.0,
        price_change_24h: 2.5,
        spread: 0.01,
        volatility: 4.2,
        high_price: price * 1.02,
        low_price: price * 0.98,
    }
}

/// `n` hourly candles from midnight UTC, closing at `start`, `start + 1`, ...
pub fn hourly_candles(n: usize, start: f64) -> Vec<Candle> {
    let base = DateTime::parse_from_rfc3339("2024-01-15T00:00:00Z")
        .unwrap()
        .with_timezone(&Utc);

    (0..n)
        .map(|i| {
            let close = start + i as f64;
            Candle {
                timestamp: base + Duration::hours(i as i64),
                open: close - 0.5,
                high: close + 1.0,
                low: close - 1.0,
                close,
                volume: 10.0,
            }
        })
        .collect()
}

/// Document exposing every element of the richest page variant.
pub fn full_page() -> (MemoryDocument, PageBindings) {
    let canvas = chart_canvas_id("BTCUSDT");
    let ids = PageBindings::full_page_ids(&canvas);
    let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
    let doc = MemoryDocument::with_ids(&refs);
    let page = PageBindings::bind(&doc, &canvas).unwrap();
    (doc, page)
}

pub fn fill_form(doc: &mut MemoryDocument, values: [&str; 5]) {
    use crate::page::Document;
    let ids = ["current_price", "entry_price", "leverage", "position_size", "risk_percent"];
    for (id, value) in ids.iter().zip(values) {
        doc.set_value(id, value);
    }
}

/// Records every request; answers with the real formula unless a scripted
/// error is queued.
#[derive(Default)]
pub struct RecordingBackend {
    pub requests: Mutex<Vec<TradeInput>>,
    pub failures: Mutex<VecDeque<Option<PipelineError>>>,
}

impl RecordingBackend {
    pub fn failing_with(script: Vec<Option<PipelineError>>) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            failures: Mutex::new(script.into()),
        }
    }

    pub fn requests(&self) -> Vec<TradeInput> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CalculationBackend for RecordingBackend {
    async fn compute_trade(&self, input: &TradeInput) -> Result<TradeResult, PipelineError> {
        self.requests.lock().unwrap().push(*input);
        if let Some(Some(err)) = self.failures.lock().unwrap().pop_front() {
            return Err(err);
        }
        risk::calculate(input).map_err(|e| PipelineError::Backend(e.to_string()))
    }
}

pub struct StaticPairs(pub Result<CatalogPayload, String>);

#[async_trait]
impl PairSource for StaticPairs {
    async fn fetch_pairs(&self) -> Result<CatalogPayload, PipelineError> {
        self.0.clone().map_err(PipelineError::Transport)
    }
}
