//! History sub-client — OHLCV queries and the windowed change.

use super::{ChangeWindow, HistoricalPricePoint, PercentChange};
use crate::client::TrackerClient;
use crate::error::{TrackerError, Unavailable};
use crate::shared::CoinId;
use chrono::{DateTime, Utc};

/// Sub-client for price history operations.
pub struct History<'a> {
    pub(crate) client: &'a TrackerClient,
}

impl<'a> History<'a> {
    /// Fetch the full series for `coin_id`, oldest first.
    pub async fn get(&self, coin_id: &CoinId) -> Result<Vec<HistoricalPricePoint>, TrackerError> {
        let resp = self.client.http.get_history(coin_id).await?;
        let points = resp.into_points(coin_id)?;
        tracing::debug!(coin = %coin_id, count = points.len(), "Fetched price history");
        Ok(points)
    }

    /// Fetch the series and compute the change over the client's window.
    ///
    /// The outer `Result` is the fetch; the inner one is the calculation.
    pub async fn change(
        &self,
        coin_id: &CoinId,
        now: DateTime<Utc>,
    ) -> Result<Result<PercentChange, Unavailable>, TrackerError> {
        let points = self.get(coin_id).await?;
        Ok(self.window().percent_change(&points, now))
    }

    pub fn window(&self) -> ChangeWindow {
        self.client.change_window
    }
}
