//! Price history domain — OHLCV records for one coin.

pub mod change;
#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod provider;
pub mod state;
pub mod wire;

use crate::shared::{parse_decimal, PriceParseError};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use change::{percent_change, ChangeWindow, PercentChange};
pub use provider::{HistoryProvider, StaticHistory};
pub use state::{PriceQuery, QueryKey, QueryState};

/// One observation in a coin's price series.
///
/// Price fields keep the decimal strings the endpoint sends; use
/// [`HistoricalPricePoint::close_price`] to get a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPricePoint {
    pub open_time: DateTime<Utc>,
    pub close_time: DateTime<Utc>,
    pub open: String,
    pub high: String,
    pub low: String,
    pub close: String,
    pub volume: String,
    pub market_cap: i64,
}

impl HistoricalPricePoint {
    /// The closing price parsed as a `Decimal`.
    pub fn close_price(&self) -> Result<Decimal, PriceParseError> {
        parse_decimal(&self.close)
    }
}
