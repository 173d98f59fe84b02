use std::cmp::Ordering;

use super::risk::round_to;
use crate::models::{PairSummary, Ticker24h};

/// Turn raw 24h tickers into the pair catalog served by `/data`: pairs quoted
/// in `quote_asset`, ranked by quote volume, at most `limit` of them.
pub fn build_catalog(
    tickers: &[Ticker24h],
    quote_asset: &str,
    limit: usize,
) -> Vec<PairSummary> {
    let mut pairs: Vec<PairSummary> = tickers
        .iter()
        .filter(|t| t.symbol.contains(quote_asset))
        // Zero last price would divide by zero below
        .filter(|t| t.last_price != 0.0)
        .map(summarize)
        .collect();

    pairs.sort_by(|a, b| b.volume.partial_cmp(&a.volume).unwrap_or(Ordering::Equal));
    pairs.truncate(limit);
    pairs
}

fn summarize(t: &Ticker24h) -> PairSummary {
    let spread = round_to((t.ask_price - t.bid_price).abs() / t.last_price * 100.0, 2);
    let volatility = round_to((t.high_price - t.low_price).abs() / t.last_price * 100.0, 2);

    PairSummary {
        symbol: t.symbol.clone(),
        current_price: t.last_price,
        volume: t.quote_volume,
        price_change_24h: t.price_change_percent,
        spread,
        volatility,
        high_price: t.high_price,
        low_price: t.low_price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::ticker;

    #[test]
    fn keeps_quote_pairs_sorted_by_volume() {
        let tickers = vec![
            ticker("ETHUSDT", 2000.0, 5_000.0),
            ticker("ETHBTC", 0.05, 90_000.0),
            ticker("BTCUSDT", 40000.0, 80_000.0),
            ticker("SOLUSDT", 100.0, 10_000.0),
        ];
        let pairs = build_catalog(&tickers, "USDT", 20);
        let symbols: Vec<&str> = pairs.iter().map(|p| p.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["BTCUSDT", "SOLUSDT", "ETHUSDT"]);
    }

    #[test]
    fn skips_zero_price_and_truncates() {
        let mut tickers: Vec<Ticker24h> = (0..30)
            .map(|i| ticker(&format!("C{}USDT", i), 1.0 + i as f64, i as f64))
            .collect();
        tickers.push(ticker("DEADUSDT", 0.0, 1e12));
        let pairs = build_catalog(&tickers, "USDT", 20);
        assert_eq!(pairs.len(), 20);
        assert!(pairs.iter().all(|p| p.symbol != "DEADUSDT"));
        assert_eq!(pairs[0].symbol, "C29USDT");
    }

    #[test]
    fn spread_and_volatility_are_percent_of_last() {
        let t = Ticker24h {
            symbol: "XUSDT".to_string(),
            last_price: 200.0,
            high_price: 210.0,
            low_price: 190.0,
            ask_price: 200.5,
            bid_price: 199.5,
            quote_volume: 1.0,
            price_change_percent: -1.5,
        };
        let p = &build_catalog(&[t], "USDT", 20)[0];
        assert_eq!(p.spread, 0.5);
        assert_eq!(p.volatility, 10.0);
        assert_eq!(p.price_change_24h, -1.5);
        assert_eq!(p.current_price, 200.0);
    }
}
