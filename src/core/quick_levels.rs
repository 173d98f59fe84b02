use serde::{Deserialize, Serialize};

use crate::models::TradeInput;

/// Unleveraged stop / target estimate computed locally on the page.
///
/// This is a separate path from the backend figures: it ignores leverage and
/// places the target one risk unit above the entry instead of two. Both are
/// shown side by side and neither is reconciled with the other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuickLevels {
    pub stop_loss: f64,
    pub take_profit: f64,
}

impl QuickLevels {
    pub fn estimate(input: &TradeInput) -> Self {
        let risk_amount = input.position_size * (input.risk_percent / 100.0);
        let offset = risk_amount / input.position_size;
        Self {
            stop_loss: input.entry_price - offset,
            take_profit: input.entry_price + offset,
        }
    }

    pub fn stop_loss_text(&self) -> String {
        format!("{:.2}", self.stop_loss)
    }

    pub fn take_profit_text(&self) -> String {
        format!("{:.2}", self.take_profit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetric_levels_ignore_leverage() {
        let input = TradeInput {
            current_price: 101.0,
            entry_price: 100.0,
            leverage: 50.0,
            position_size: 1000.0,
            risk_percent: 2.0,
        };
        let q = QuickLevels::estimate(&input);
        assert_eq!(q.stop_loss_text(), "99.98");
        assert_eq!(q.take_profit_text(), "100.02");
    }

    #[test]
    fn zero_position_gives_nan_text() {
        let input = TradeInput {
            current_price: 1.0,
            entry_price: 1.0,
            leverage: 1.0,
            position_size: 0.0,
            risk_percent: 1.0,
        };
        let q = QuickLevels::estimate(&input);
        assert!(q.stop_loss.is_nan());
        assert_eq!(q.stop_loss_text(), "NaN");
    }
}
