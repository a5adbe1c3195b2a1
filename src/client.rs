//! High-level client — `TrackerClient` with nested sub-client accessors.
//!
//! The history sub-client lives in `domain/history/client.rs`.
//! This module keeps the builder and accessor methods.

use crate::domain::history::client::History;
use crate::domain::history::{ChangeWindow, HistoricalPricePoint, HistoryProvider};
use crate::error::TrackerError;
use crate::http::TrackerHttp;
use crate::shared::CoinId;

use async_trait::async_trait;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::history::client::History as HistoryClient;

/// The primary entry point.
///
/// Holds no history between calls; every query hits the endpoint.
#[derive(Clone)]
pub struct TrackerClient {
    pub(crate) http: TrackerHttp,
    pub(crate) change_window: ChangeWindow,
}

impl TrackerClient {
    pub fn builder() -> TrackerClientBuilder {
        TrackerClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn history(&self) -> History<'_> {
        History { client: self }
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    pub fn change_window(&self) -> ChangeWindow {
        self.change_window
    }
}

#[async_trait]
impl HistoryProvider for TrackerClient {
    async fn fetch_history(
        &self,
        coin_id: &CoinId,
    ) -> Result<Vec<HistoricalPricePoint>, TrackerError> {
        self.history().get(coin_id).await
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct TrackerClientBuilder {
    base_url: String,
    timeout: Duration,
    change_window: ChangeWindow,
}

impl Default for TrackerClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            timeout: crate::network::DEFAULT_TIMEOUT,
            change_window: ChangeWindow::default(),
        }
    }
}

impl TrackerClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Per-request timeout (ignored on WASM).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn change_window(mut self, window: ChangeWindow) -> Self {
        self.change_window = window;
        self
    }

    pub fn build(self) -> Result<TrackerClient, TrackerError> {
        if self.base_url.trim().is_empty() {
            return Err(TrackerError::Validation("base URL is empty".to_string()));
        }

        #[cfg(not(target_arch = "wasm32"))]
        let http = TrackerHttp::new(&self.base_url, self.timeout)?;
        #[cfg(target_arch = "wasm32")]
        let http = TrackerHttp::new(&self.base_url)?;

        Ok(TrackerClient {
            http,
            change_window: self.change_window,
        })
    }
}
