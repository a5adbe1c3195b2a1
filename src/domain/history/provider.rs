//! The `HistoryProvider` seam and an in-memory implementation.

use super::HistoricalPricePoint;
use crate::error::{HttpError, TrackerError};
use crate::shared::CoinId;
use async_trait::async_trait;
use std::collections::HashMap;

/// Supplies the ordered price series for a coin.
///
/// Implementations return records in ascending `close_time` order. Failures
/// (transport, not-found, decode) come back as `Err`, never a panic.
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    async fn fetch_history(
        &self,
        coin_id: &CoinId,
    ) -> Result<Vec<HistoricalPricePoint>, TrackerError>;
}

/// Provider backed by fixed series, for offline use and tests.
///
/// Unknown coins fail with `HttpError::NotFound`, like the live endpoint.
#[derive(Debug, Clone, Default)]
pub struct StaticHistory {
    series: HashMap<CoinId, Vec<HistoricalPricePoint>>,
}

impl StaticHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series(
        mut self,
        coin_id: impl Into<CoinId>,
        points: Vec<HistoricalPricePoint>,
    ) -> Self {
        self.series.insert(coin_id.into(), points);
        self
    }
}

#[async_trait]
impl HistoryProvider for StaticHistory {
    async fn fetch_history(
        &self,
        coin_id: &CoinId,
    ) -> Result<Vec<HistoricalPricePoint>, TrackerError> {
        self.series
            .get(coin_id)
            .cloned()
            .ok_or_else(|| HttpError::NotFound(coin_id.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_history_known_and_unknown() {
        let provider = StaticHistory::new().with_series("btc-bitcoin", Vec::new());
        assert!(provider
            .fetch_history(&CoinId::from("btc-bitcoin"))
            .await
            .unwrap()
            .is_empty());

        let err = provider
            .fetch_history(&CoinId::from("doge"))
            .await
            .unwrap_err();
        assert!(matches!(err, TrackerError::Http(HttpError::NotFound(id)) if id == "doge"));
    }

    #[tokio::test]
    async fn test_provider_is_object_safe() {
        let provider: Box<dyn HistoryProvider> = Box::new(StaticHistory::new());
        assert!(provider.fetch_history(&CoinId::from("x")).await.is_err());
    }
}
