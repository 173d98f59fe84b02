use thiserror::Error;

use crate::models::{TradeInput, TradeResult};

/// Reward target expressed in multiples of the risked distance (2R).
const REWARD_MULTIPLE: f64 = 2.0;
const RESULT_DECIMALS: i32 = 5;

#[derive(Debug, Error, PartialEq)]
pub enum CalcError {
    #[error("Invalid input or missing data: {0}")]
    InvalidInput(String),
}

/// Stop-loss / take-profit levels for a leveraged position.
///
/// The stop sits `risk_amount / (position_size * leverage)` below the entry,
/// the target twice that distance above it. All figures are rounded to five
/// decimals before they leave this function.
pub fn calculate(input: &TradeInput) -> Result<TradeResult, CalcError> {
    let exposure = input.position_size * input.leverage;
    if exposure == 0.0 {
        return Err(CalcError::InvalidInput(
            "position_size * leverage must not be zero".to_string(),
        ));
    }

    let risk_amount = (input.position_size * input.risk_percent) / 100.0;
    let stop_loss_price = input.entry_price - (risk_amount / exposure);
    let take_profit_price =
        input.entry_price + (REWARD_MULTIPLE * (input.entry_price - stop_loss_price));
    let reward_amount = (take_profit_price - input.entry_price) * exposure;
    let distance_to_stop_loss = (input.entry_price - stop_loss_price).abs();

    let result = TradeResult {
        stop_loss_price: round_to(stop_loss_price, RESULT_DECIMALS),
        take_profit_price: round_to(take_profit_price, RESULT_DECIMALS),
        risk_amount: round_to(risk_amount, RESULT_DECIMALS),
        reward_amount: round_to(reward_amount, RESULT_DECIMALS),
        distance_to_stop_loss: round_to(distance_to_stop_loss, RESULT_DECIMALS),
    };

    let finite = [
        result.stop_loss_price,
        result.take_profit_price,
        result.risk_amount,
        result.reward_amount,
        result.distance_to_stop_loss,
    ]
    .iter()
    .all(|v| v.is_finite());

    if !finite {
        return Err(CalcError::InvalidInput(
            "calculation produced a non-finite value".to_string(),
        ));
    }

    Ok(result)
}

/// Round half away from zero. Values too large to scale are already
/// coarser than the requested precision and come back unchanged.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}
