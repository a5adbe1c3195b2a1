//! Low-level HTTP client — `TrackerHttp`.
//!
//! One method per endpoint. Returns wire types (conversion to domain types
//! happens in the history sub-client). Each request is attempted once.

use crate::domain::history::wire::HistoryResponse;
use crate::error::HttpError;
use crate::shared::CoinId;

use reqwest::Client;
use serde::de::DeserializeOwned;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

/// Low-level HTTP client for the OHLCV history endpoint.
#[derive(Clone)]
pub struct TrackerHttp {
    base_url: String,
    client: Client,
}

impl TrackerHttp {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()?;
        Ok(Self::with_client(base_url, client))
    }

    #[cfg(target_arch = "wasm32")]
    pub fn new(base_url: &str) -> Result<Self, HttpError> {
        Ok(Self::with_client(base_url, Client::builder().build()?))
    }

    /// Wrap an already-configured `reqwest::Client`.
    pub fn with_client(base_url: &str, client: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── History ──────────────────────────────────────────────────────────

    pub fn history_url(&self, coin_id: &CoinId) -> String {
        format!(
            "{}/?coinId={}",
            self.base_url,
            urlencoding::encode(coin_id.as_str())
        )
    }

    pub async fn get_history(&self, coin_id: &CoinId) -> Result<HistoryResponse, HttpError> {
        let url = self.history_url(coin_id);
        self.get(&url).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        tracing::debug!(url, "GET");
        let resp = self.client.get(url).send().await.map_err(map_transport)?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await?;
            return Ok(parsed);
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();
        Err(status_error(status_code, body_text))
    }
}

fn map_transport(e: reqwest::Error) -> HttpError {
    if e.is_timeout() {
        HttpError::Timeout
    } else {
        HttpError::Reqwest(e)
    }
}

fn status_error(status: u16, body: String) -> HttpError {
    match status {
        404 => HttpError::NotFound(body),
        429 => HttpError::RateLimited,
        400..=499 => HttpError::BadRequest(body),
        _ => HttpError::ServerError { status, body },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_url_encodes_coin_id() {
        let http = TrackerHttp::with_client("https://example.com/", Client::new());
        assert_eq!(http.base_url(), "https://example.com");
        assert_eq!(
            http.history_url(&CoinId::from("btc-bitcoin")),
            "https://example.com/?coinId=btc-bitcoin"
        );
        assert_eq!(
            http.history_url(&CoinId::from("a b&c")),
            "https://example.com/?coinId=a%20b%26c"
        );
    }

    #[test]
    fn test_status_error_mapping() {
        assert!(matches!(status_error(404, "x".into()), HttpError::NotFound(b) if b == "x"));
        assert!(matches!(status_error(429, String::new()), HttpError::RateLimited));
        assert!(matches!(status_error(400, String::new()), HttpError::BadRequest(_)));
        assert!(matches!(
            status_error(503, "down".into()),
            HttpError::ServerError { status: 503, .. }
        ));
    }
}
