use serde::{Deserialize, Serialize};
use std::fmt;

/// Directional label of a trade, derived from where the entry sits
/// relative to the current market price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeType {
    Long,
    Short,
}

impl TradeType {
    /// Long when entering below the current price, Short otherwise
    /// (an entry equal to the current price counts as Short).
    pub fn from_prices(entry_price: f64, current_price: f64) -> Self {
        if entry_price < current_price {
            TradeType::Long
        } else {
            TradeType::Short
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TradeType::Long => "Long",
            TradeType::Short => "Short",
        }
    }
}

impl fmt::Display for TradeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
