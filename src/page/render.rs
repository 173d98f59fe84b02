use crate::models::{PairSummary, TradeResult, TradeType};

pub const CALCULATION_HEADING: &str = "Calculation Results";
pub const SUGGESTION_HEADING: &str = "Suggested Parameters";
pub const SELECT_PLACEHOLDER: &str = "Select Pair";

/// Shortest round-trip form of a number: `100` rather than `100.0`.
pub fn fmt_num(value: f64) -> String {
    format!("{}", value)
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Full contents of a result panel.
pub fn result_panel(heading: &str, result: &TradeResult, trade_type: TradeType) -> String {
    format!(
        "<h6>{}</h6>\n\
         <p>Stop Loss Price: {} USD</p>\n\
         <p>Take Profit Price: {} USD</p>\n\
         <p>Risk Amount: {} USD</p>\n\
         <p>Reward Amount: {} USD</p>\n\
         <p>Distance to Stop Loss: {} USD</p>\n\
         <p>Trade Type: {}</p>\n",
        heading,
        fmt_num(result.stop_loss_price),
        fmt_num(result.take_profit_price),
        fmt_num(result.risk_amount),
        fmt_num(result.reward_amount),
        fmt_num(result.distance_to_stop_loss),
        trade_type,
    )
}

/// One catalog card. The `data-*` attributes carry the raw figures.
pub fn pair_card(pair: &PairSummary) -> String {
    let symbol = escape_html(&pair.symbol);
    format!(
        "<div class=\"col-md-4\">\n\
         <div class=\"card\" data-symbol=\"{symbol}\" data-current-price=\"{price}\" \
         data-volume=\"{volume}\" data-price-change=\"{change}\" data-spread=\"{spread}\" \
         data-volatility=\"{volatility}\" data-high-price=\"{high}\" data-low-price=\"{low}\">\n\
         <div class=\"card-body\">\n\
         <h5 class=\"card-title\">{symbol}</h5>\n\
         <p class=\"card-text\">Current Price: {price} USDT</p>\n\
         <p class=\"card-text\">Volume: {volume}</p>\n\
         <p class=\"card-text\">24h Price Change: {change}%</p>\n\
         <p class=\"card-text\">Spread: {spread}%</p>\n\
         <p class=\"card-text\">Volatility: {volatility}%</p>\n\
         <p class=\"card-text\">High Price: {high} USDT</p>\n\
         <p class=\"card-text\">Low Price: {low} USDT</p>\n\
         </div>\n\
         </div>\n\
         </div>\n",
        symbol = symbol,
        price = fmt_num(pair.current_price),
        volume = fmt_num(pair.volume),
        change = fmt_num(pair.price_change_24h),
        spread = fmt_num(pair.spread),
        volatility = fmt_num(pair.volatility),
        high = fmt_num(pair.high_price),
        low = fmt_num(pair.low_price),
    )
}

pub fn placeholder_option() -> String {
    format!("<option value=\"\">{}</option>", SELECT_PLACEHOLDER)
}

pub fn pair_option(symbol: &str) -> String {
    let symbol = escape_html(symbol);
    format!("<option value=\"{0}\">{0}</option>", symbol)
}

/// 24h change with an explicit sign.
pub fn signed_percent(change: f64) -> String {
    if change >= 0.0 {
        format!("+{}%", fmt_num(change))
    } else {
        format!("{}%", fmt_num(change))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::pair;

    #[test]
    fn result_panel_lists_all_six_fields() {
        let result = TradeResult {
            stop_loss_price: 99.999,
            take_profit_price: 100.002,
            risk_amount: 10.0,
            reward_amount: 20.0,
            distance_to_stop_loss: 0.001,
        };
        let html = result_panel(CALCULATION_HEADING, &result, TradeType::Long);
        assert!(html.starts_with("<h6>Calculation Results</h6>"));
        assert!(html.contains("<p>Stop Loss Price: 99.999 USD</p>"));
        assert!(html.contains("<p>Take Profit Price: 100.002 USD</p>"));
        assert!(html.contains("<p>Risk Amount: 10 USD</p>"));
        assert!(html.contains("<p>Reward Amount: 20 USD</p>"));
        assert!(html.contains("<p>Distance to Stop Loss: 0.001 USD</p>"));
        assert!(html.contains("<p>Trade Type: Long</p>"));
    }

    #[test]
    fn card_carries_data_attributes() {
        let html = pair_card(&pair("ETHUSDT", 2150.5));
        assert!(html.contains("data-symbol=\"ETHUSDT\""));
        assert!(html.contains("data-current-price=\"2150.5\""));
        assert!(html.contains("<h5 class=\"card-title\">ETHUSDT</h5>"));
        assert!(html.contains("Current Price: 2150.5 USDT"));
    }

    #[test]
    fn symbols_are_escaped() {
        assert_eq!(pair_option("<x>"), "<option value=\"&lt;x&gt;\">&lt;x&gt;</option>");
    }

    #[test]
    fn percent_sign_follows_direction() {
        assert_eq!(signed_percent(1.25), "+1.25%");
        assert_eq!(signed_percent(-0.5), "-0.5%");
        assert_eq!(signed_percent(0.0), "+0%");
    }
}
