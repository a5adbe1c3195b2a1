//! Conversion: wire candles → `HistoricalPricePoint` (TryFrom + validation).

use super::wire::{HistoricalCandle, HistoryResponse};
use super::HistoricalPricePoint;
use crate::error::{HttpError, TrackerError};
use crate::shared::CoinId;
use chrono::{DateTime, TimeZone, Utc};

fn timestamp(secs: i64, field: &str) -> Result<DateTime<Utc>, TrackerError> {
    Utc.timestamp_opt(secs, 0)
        .single()
        .ok_or_else(|| TrackerError::Validation(format!("{} out of range: {}", field, secs)))
}

impl TryFrom<HistoricalCandle> for HistoricalPricePoint {
    type Error = TrackerError;

    fn try_from(c: HistoricalCandle) -> Result<Self, Self::Error> {
        Ok(Self {
            open_time: timestamp(c.time_open, "time_open")?,
            close_time: timestamp(c.time_close, "time_close")?,
            open: c.open,
            high: c.high,
            low: c.low,
            close: c.close,
            volume: c.volume,
            market_cap: c.market_cap,
        })
    }
}

impl HistoryResponse {
    /// Convert a response body into the domain series for `coin_id`.
    ///
    /// Candle order is preserved as received.
    pub fn into_points(self, coin_id: &CoinId) -> Result<Vec<HistoricalPricePoint>, TrackerError> {
        match self {
            HistoryResponse::Candles(candles) => candles
                .into_iter()
                .map(HistoricalPricePoint::try_from)
                .collect(),
            HistoryResponse::Error { error } => Err(HttpError::NotFound(format!(
                "{}: {}",
                coin_id, error
            ))
            .into()),
        }
    }
}
