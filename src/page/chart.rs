use tracing::{error, info};

use super::bindings::PageBindings;
use super::document::{Document, LineChart};
use super::render::{fmt_num, signed_percent};
use crate::exchange::MarketData;
use crate::models::{Candle, Timeframe};

pub fn build_line_chart(symbol: &str, candles: &[Candle]) -> LineChart {
    LineChart {
        label: format!("{} Price", symbol),
        labels: candles
            .iter()
            .map(|c| c.timestamp.format("%H:%M:%S").to_string())
            .collect(),
        values: candles.iter().map(|c| c.close).collect(),
        x_title: "Time".to_string(),
        y_title: "Price (USDT)".to_string(),
    }
}

/// Draw the closing-price chart and fill the ticker header for `symbol`.
/// Each half fails on its own; failures only reach the log.
pub async fn render_chart<D, M>(
    doc: &mut D,
    page: &PageBindings,
    market: &M,
    symbol: &str,
    tf: Timeframe,
    points: usize,
) where
    D: Document + ?Sized,
    M: MarketData + ?Sized,
{
    if let Some(ticker_out) = &page.ticker {
        match market.ticker_24h(symbol).await {
            Ok(t) => {
                ticker_out.symbol.set(doc, &t.symbol);
                ticker_out
                    .price
                    .set(doc, &format!("Current Price: {} USDT", fmt_num(t.last_price)));
                ticker_out
                    .change
                    .set(doc, &signed_percent(t.price_change_percent));
            }
            Err(e) => error!("Error fetching ticker for {}: {:#}", symbol, e),
        }
    }

    let Some(canvas) = &page.chart else {
        return;
    };

    match market.klines(symbol, tf, points).await {
        Ok(candles) => {
            let chart = build_line_chart(symbol, &candles);
            info!("Drawing {} chart with {} points", symbol, chart.values.len());
            canvas.draw(doc, &chart);
        }
        Err(e) => error!("Error fetching klines for {}: {:#}", symbol, e),
    }
}
