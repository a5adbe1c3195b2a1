//! Text rendering of the price card.
//!
//! A card is one of four states: loading, fetch error, no data, or the
//! change line. A series that exists but cannot produce a change still
//! shows the label, followed by the no-data text.

use crate::domain::history::{ChangeWindow, HistoricalPricePoint, QueryState};
use chrono::{DateTime, Utc};

pub const LOADING_TEXT: &str = "Loading...";
pub const ERROR_TEXT: &str = "Error loading data";
pub const NO_DATA_TEXT: &str = "No data available";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceCard {
    Loading,
    Error,
    NoData,
    Change { label: String, value: String },
}

impl PriceCard {
    pub fn from_state(
        state: &QueryState<Vec<HistoricalPricePoint>>,
        window: ChangeWindow,
        now: DateTime<Utc>,
    ) -> Self {
        let series = match state {
            QueryState::Loading => return PriceCard::Loading,
            QueryState::Failure(_) => return PriceCard::Error,
            QueryState::Success(series) if series.is_empty() => return PriceCard::NoData,
            QueryState::Success(series) => series,
        };

        let value = match window.percent_change(series, now) {
            Ok(change) => change.to_string(),
            Err(reason) => {
                tracing::debug!(%reason, "Change unavailable");
                NO_DATA_TEXT.to_string()
            }
        };

        PriceCard::Change {
            label: window.label(),
            value,
        }
    }
}

impl std::fmt::Display for PriceCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriceCard::Loading => f.write_str(LOADING_TEXT),
            PriceCard::Error => f.write_str(ERROR_TEXT),
            PriceCard::NoData => f.write_str(NO_DATA_TEXT),
            PriceCard::Change { label, value } => write!(f, "{} {}", label, value),
        }
    }
}
