use crate::models::TradeInput;

/// Share of the requested risk kept for the suggested variant.
pub const SUGGESTED_RISK_SCALE: f64 = 0.75;
/// Leverage ceiling applied to the suggested variant.
pub const SUGGESTED_MAX_LEVERAGE: f64 = 10.0;

/// Derives the "Suggested Parameters" request from the user's input.
pub trait SuggestionPolicy: Send + Sync {
    fn suggest(&self, input: &TradeInput) -> TradeInput;
}

/// Cut risk by a quarter and cap leverage at 10x.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedSuggestion;

impl SuggestionPolicy for FixedSuggestion {
    fn suggest(&self, input: &TradeInput) -> TradeInput {
        TradeInput {
            risk_percent: input.risk_percent * SUGGESTED_RISK_SCALE,
            leverage: input.leverage.min(SUGGESTED_MAX_LEVERAGE),
            ..*input
        }
    }
}

impl<F> SuggestionPolicy for F
where
    F: Fn(&TradeInput) -> TradeInput + Send + Sync,
{
    fn suggest(&self, input: &TradeInput) -> TradeInput {
        self(input)
    }
}
