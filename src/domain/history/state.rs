//! Query state containers — app-owned, SDK-provided update logic.

use super::provider::HistoryProvider;
use super::HistoricalPricePoint;
use crate::error::TrackerError;
use crate::shared::CoinId;
use std::sync::Arc;

/// Query name for the price history of one coin.
pub const PRICE_QUERY: &str = "price";

/// Identifies one fetch: query name + coin identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    name: &'static str,
    coin_id: CoinId,
}

impl QueryKey {
    pub fn price(coin_id: CoinId) -> Self {
        Self {
            name: PRICE_QUERY,
            coin_id,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn coin_id(&self) -> &CoinId {
        &self.coin_id
    }
}

impl std::fmt::Display for QueryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.name, self.coin_id)
    }
}

/// Lifecycle of one asynchronous fetch.
#[derive(Debug, Clone)]
pub enum QueryState<T> {
    Loading,
    Success(T),
    /// The fetch failed; shared so the state stays `Clone`.
    Failure(Arc<TrackerError>),
}

impl<T> QueryState<T> {
    pub fn from_result(result: Result<T, TrackerError>) -> Self {
        match result {
            Ok(data) => QueryState::Success(data),
            Err(e) => QueryState::Failure(Arc::new(e)),
        }
    }

    pub fn error(&self) -> Option<&TrackerError> {
        match self {
            QueryState::Failure(e) => Some(e.as_ref()),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            QueryState::Success(data) => Some(data),
            _ => None,
        }
    }
}

/// Price history query for the coin currently on screen.
///
/// Changing the coin discards the previous series and returns to
/// `Loading`. Results for a key other than the current one are dropped.
#[derive(Debug, Clone)]
pub struct PriceQuery {
    key: QueryKey,
    state: QueryState<Vec<HistoricalPricePoint>>,
}

impl PriceQuery {
    pub fn new(coin_id: CoinId) -> Self {
        Self {
            key: QueryKey::price(coin_id),
            state: QueryState::Loading,
        }
    }

    pub fn key(&self) -> &QueryKey {
        &self.key
    }

    pub fn state(&self) -> &QueryState<Vec<HistoricalPricePoint>> {
        &self.state
    }

    /// Point the query at another coin. Returns `false` if it already was.
    pub fn set_coin(&mut self, coin_id: CoinId) -> bool {
        if self.key.coin_id == coin_id {
            return false;
        }
        self.key = QueryKey::price(coin_id);
        self.state = QueryState::Loading;
        true
    }

    /// Apply a finished fetch. Returns `false` (and leaves the state alone)
    /// if `key` is no longer current.
    pub fn resolve(
        &mut self,
        key: &QueryKey,
        result: Result<Vec<HistoricalPricePoint>, TrackerError>,
    ) -> bool {
        if *key != self.key {
            tracing::warn!(stale = %key, current = %self.key, "Dropping stale history response");
            return false;
        }
        if let Err(e) = &result {
            tracing::warn!(key = %key, error = %e, "History fetch failed");
        }
        self.state = QueryState::from_result(result);
        true
    }

    /// Fetch the current key from `provider` and apply the result.
    pub async fn run<P>(&mut self, provider: &P) -> &QueryState<Vec<HistoricalPricePoint>>
    where
        P: HistoryProvider + ?Sized,
    {
        let key = self.key.clone();
        let result = provider.fetch_history(key.coin_id()).await;
        self.resolve(&key, result);
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::history::StaticHistory;
    use crate::error::HttpError;
    use chrono::{TimeZone, Utc};

    fn point(close_time: i64, close: &str) -> HistoricalPricePoint {
        HistoricalPricePoint {
            open_time: Utc.timestamp_opt(close_time - 1800, 0).unwrap(),
            close_time: Utc.timestamp_opt(close_time, 0).unwrap(),
            open: close.to_string(),
            high: close.to_string(),
            low: close.to_string(),
            close: close.to_string(),
            volume: "0".to_string(),
            market_cap: 0,
        }
    }

    #[test]
    fn test_new_query_is_loading() {
        let query = PriceQuery::new(CoinId::from("btc-bitcoin"));
        assert!(query.state().is_loading());
        assert_eq!(query.key().to_string(), "price/btc-bitcoin");
    }

    #[test]
    fn test_resolve_success() {
        let mut query = PriceQuery::new(CoinId::from("btc-bitcoin"));
        let key = query.key().clone();
        assert!(query.resolve(&key, Ok(vec![point(100, "1")])));
        assert_eq!(query.state().data().map(Vec::len), Some(1));
    }

    #[test]
    fn test_resolve_failure_keeps_typed_error() {
        let mut query = PriceQuery::new(CoinId::from("btc-bitcoin"));
        let key = query.key().clone();
        query.resolve(&key, Err(HttpError::Timeout.into()));
        let err = query.state().error().unwrap();
        assert!(matches!(err, TrackerError::Http(HttpError::Timeout)));
        assert_eq!(err.to_string(), "HTTP error: Timeout");
    }

    #[test]
    fn test_stale_response_dropped() {
        let mut query = PriceQuery::new(CoinId::from("btc-bitcoin"));
        let old_key = query.key().clone();
        assert!(query.set_coin(CoinId::from("eth-ethereum")));
        assert!(!query.resolve(&old_key, Ok(vec![point(100, "1")])));
        assert!(query.state().is_loading());
    }

    #[test]
    fn test_set_same_coin_keeps_data() {
        let mut query = PriceQuery::new(CoinId::from("btc-bitcoin"));
        let key = query.key().clone();
        query.resolve(&key, Ok(vec![point(100, "1")]));
        assert!(!query.set_coin(CoinId::from("btc-bitcoin")));
        assert!(query.state().data().is_some());
    }

    #[test]
    fn test_run_against_static_provider() {
        let provider = StaticHistory::new().with_series("btc-bitcoin", vec![point(100, "1")]);
        let mut query = PriceQuery::new(CoinId::from("btc-bitcoin"));
        let state = tokio_test::block_on(query.run(&provider));
        assert_eq!(state.data().map(Vec::len), Some(1));

        let mut missing = PriceQuery::new(CoinId::from("unknown"));
        let state = tokio_test::block_on(missing.run(&provider));
        assert!(matches!(
            state.error(),
            Some(TrackerError::Http(HttpError::NotFound(id))) if id == "unknown"
        ));
    }
}
