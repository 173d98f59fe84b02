use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    /// Decode one array-encoded kline:
    /// `[open_time_ms, open, high, low, close, volume, ...]`.
    /// Prices arrive as strings, but plain numbers are accepted too.
    pub fn from_kline(row: &[Value]) -> Option<Candle> {
        let open_time = row.first()?.as_i64()?;
        let timestamp = DateTime::from_timestamp_millis(open_time)?;
        Some(Candle {
            timestamp,
            open: number_at(row, 1)?,
            high: number_at(row, 2)?,
            low: number_at(row, 3)?,
            close: number_at(row, 4)?,
            volume: number_at(row, 5)?,
        })
    }
}

fn number_at(row: &[Value], idx: usize) -> Option<f64> {
    match row.get(idx)? {
        Value::String(s) => s.parse().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_exchange_kline_row() {
        let row = json!([
            1_700_000_000_000i64,
            "37000.10",
            "37100.00",
            "36950.5",
            "37050.25",
            "123.4",
            1_700_003_599_999i64,
            "4567890.1",
            1000,
            "60.0",
            "2200000.0",
            "0"
        ]);
        let candle = Candle::from_kline(row.as_array().unwrap()).unwrap();
        assert_eq!(candle.timestamp.timestamp_millis(), 1_700_000_000_000);
        assert!((candle.close - 37050.25).abs() < 1e-9);
        assert!((candle.volume - 123.4).abs() < 1e-9);
        assert!((candle.open - 37000.10).abs() < 1e-9);
    }

    #[test]
    fn short_or_garbled_rows_are_rejected() {
        let short = json!([1_700_000_000_000i64, "1", "2"]);
        assert!(Candle::from_kline(short.as_array().unwrap()).is_none());

        let garbled = json!([1_700_000_000_000i64, "1", "2", "0.5", "abc", "10"]);
        assert!(Candle::from_kline(garbled.as_array().unwrap()).is_none());
    }
}
