use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Html;
use axum::Json;
use serde_json::Value;
use tracing::{debug, error, info};

use crate::core::pairs::build_catalog;
use crate::core::risk::{self, CalcError};
use crate::models::{PairSummary, TradeInput, TradeResult};
use crate::server::{ApiError, AppState};

const INDEX_HTML: &str = include_str!("../../templates/index.html");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Top pairs for the configured quote asset, by 24h quote volume.
pub async fn get_data(State(state): State<AppState>) -> Result<Json<Vec<PairSummary>>, ApiError> {
    let tickers = state.market.tickers_24h().await.map_err(|e| {
        error!("Error fetching data: {:#}", e);
        ApiError::Market(e)
    })?;

    let pairs = build_catalog(&tickers, &state.config.quote_asset, state.config.pair_limit);
    info!("Serving {} pairs out of {} tickers", pairs.len(), tickers.len());
    Ok(Json(pairs))
}

pub async fn calculate(
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<TradeResult>, ApiError> {
    let Json(data) = body.map_err(|e| CalcError::InvalidInput(e.body_text()))?;
    let input = parse_trade_input(&data)?;
    debug!("Calculating {:?}", input);
    Ok(Json(risk::calculate(&input)?))
}

/// Every field must be present and be a number or a numeric string.
fn parse_trade_input(data: &Value) -> Result<TradeInput, CalcError> {
    Ok(TradeInput {
        entry_price: field(data, "entry_price")?,
        leverage: field(data, "leverage")?,
        position_size: field(data, "position_size")?,
        risk_percent: field(data, "risk_percent")?,
        current_price: field(data, "current_price")?,
    })
}

fn field(data: &Value, key: &str) -> Result<f64, CalcError> {
    let value = data
        .get(key)
        .ok_or_else(|| CalcError::InvalidInput(format!("'{}'", key)))?;

    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| {
        CalcError::InvalidInput(format!("could not convert {} to float: {}", key, value))
    })
}
