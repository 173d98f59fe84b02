use serde::{Deserialize, Serialize};

use super::TradeType;

/// The five calculator form fields. Field names double as the JSON keys of
/// the `/calculate` request body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeInput {
    pub current_price: f64,
    pub entry_price: f64,
    pub leverage: f64,
    pub position_size: f64,
    pub risk_percent: f64,
}

impl TradeInput {
    pub fn trade_type(&self) -> TradeType {
        TradeType::from_prices(self.entry_price, self.current_price)
    }
}

/// Backend answer to `/calculate`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeResult {
    pub stop_loss_price: f64,
    pub take_profit_price: f64,
    pub risk_amount: f64,
    pub reward_amount: f64,
    pub distance_to_stop_loss: f64,
}

/// Error body shared by `/calculate` and `/data`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
