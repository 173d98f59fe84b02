use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::client::{
    decode_trade_result, CalculationBackend, CatalogPayload, PairSource, PipelineError,
};
use crate::config::Config;
use crate::models::{TradeInput, TradeResult};

/// Talks to the risk calculator service over HTTP.
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(&cfg.backend_url)
    }
}

#[async_trait]
impl CalculationBackend for HttpBackend {
    async fn compute_trade(&self, input: &TradeInput) -> Result<TradeResult, PipelineError> {
        debug!("POST /calculate {:?}", input);
        // Error bodies come back with 4xx/5xx, so the status is not checked.
        let body: Value = self
            .client
            .post(format!("{}/calculate", self.base_url))
            .json(input)
            .send()
            .await?
            .json()
            .await?;
        decode_trade_result(body)
    }
}

#[async_trait]
impl PairSource for HttpBackend {
    async fn fetch_pairs(&self) -> Result<CatalogPayload, PipelineError> {
        debug!("GET /data");
        let payload: CatalogPayload = self
            .client
            .get(format!("{}/data", self.base_url))
            .send()
            .await?
            .json()
            .await?;
        Ok(payload)
    }
}
