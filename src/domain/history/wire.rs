//! Wire types for the OHLCV history endpoint.

use crate::shared::serde_util::decimal_string;
use serde::{Deserialize, Serialize};

/// A single candle as returned by the endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalCandle {
    /// Unix seconds.
    pub time_open: i64,
    /// Unix seconds.
    pub time_close: i64,
    #[serde(with = "decimal_string")]
    pub open: String,
    #[serde(with = "decimal_string")]
    pub high: String,
    #[serde(with = "decimal_string")]
    pub low: String,
    #[serde(with = "decimal_string")]
    pub close: String,
    #[serde(with = "decimal_string")]
    pub volume: String,
    #[serde(default)]
    pub market_cap: i64,
}

/// Body of `GET /?coinId=..`.
///
/// Unknown coins come back with a 200 and an `{"error": ".."}` object
/// instead of an array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum HistoryResponse {
    Candles(Vec<HistoricalCandle>),
    Error { error: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"[
        {"time_open":1700000000,"time_close":1700001800,"open":"36500.1","high":"36620.0",
         "low":"36480.7","close":"36601.2","volume":"1234567","market_cap":714000000000},
        {"time_open":1700001800,"time_close":1700003600,"open":"36601.2","high":"36700",
         "low":"36590","close":"36688.4","volume":"987654","market_cap":715000000000}
    ]"#;

    #[test]
    fn test_candles_deserialize() {
        let resp: HistoryResponse = serde_json::from_str(BODY).unwrap();
        let HistoryResponse::Candles(candles) = resp else {
            panic!("expected candles");
        };
        assert_eq!(candles.len(), 2);
        assert_eq!(candles[0].time_close, 1_700_001_800);
        assert_eq!(candles[1].close, "36688.4");
        assert_eq!(candles[1].market_cap, 715_000_000_000);
    }

    #[test]
    fn test_empty_array_is_candles() {
        let resp: HistoryResponse = serde_json::from_str("[]").unwrap();
        assert!(matches!(resp, HistoryResponse::Candles(c) if c.is_empty()));
    }

    #[test]
    fn test_error_object() {
        let resp: HistoryResponse =
            serde_json::from_str(r#"{"error":"id not found"}"#).unwrap();
        assert!(matches!(resp, HistoryResponse::Error { error } if error == "id not found"));
    }

    #[test]
    fn test_missing_market_cap_defaults_to_zero() {
        let c: HistoricalCandle = serde_json::from_str(
            r#"{"time_open":1,"time_close":2,"open":"1","high":"1","low":"1","close":"1","volume":"0"}"#,
        )
        .unwrap();
        assert_eq!(c.market_cap, 0);
    }
}
