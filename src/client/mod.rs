pub mod http;

pub use http::HttpBackend;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::models::{PairSummary, TradeInput, TradeResult};

#[derive(Debug, Error)]
pub enum PipelineError {
    /// The backend answered with an `error` field.
    #[error("{0}")]
    Backend(String),
    /// Network failure or a body that is not the expected JSON.
    #[error("transport failure: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for PipelineError {
    fn from(e: reqwest::Error) -> Self {
        PipelineError::Transport(e.to_string())
    }
}

/// What `/data` answered, before the page decides how to render it.
///
/// Array elements stay raw so one malformed pair cannot hide the others.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CatalogPayload {
    Pairs(Vec<Value>),
    Error { error: String },
    Other(Value),
}

impl CatalogPayload {
    pub fn from_pairs(pairs: &[PairSummary]) -> Self {
        CatalogPayload::Pairs(
            pairs
                .iter()
                .filter_map(|p| serde_json::to_value(p).ok())
                .collect(),
        )
    }
}

#[async_trait]
pub trait CalculationBackend: Send + Sync {
    async fn compute_trade(&self, input: &TradeInput) -> Result<TradeResult, PipelineError>;
}

#[async_trait]
pub trait PairSource: Send + Sync {
    async fn fetch_pairs(&self) -> Result<CatalogPayload, PipelineError>;
}

/// Interpret a `/calculate` body: an `error` field wins over everything else.
pub fn decode_trade_result(body: Value) -> Result<TradeResult, PipelineError> {
    if let Some(err) = body.get("error") {
        let message = match err {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        return Err(PipelineError::Backend(message));
    }
    serde_json::from_value(body).map_err(|e| PipelineError::Transport(e.to_string()))
}
