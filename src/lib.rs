//! # coin-tracker
//!
//! Fetches OHLCV price history for a coin and derives the percent change
//! over a lookback window (30 minutes by default).
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — Types, the change calculator, query state, themes (always available, WASM-safe)
//! 2. **HTTP** — `TrackerHttp`, one method per endpoint
//! 3. **High-Level Client** — `TrackerClient` with a history sub-client
//! 4. **Render** — the text price card
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coin_tracker::prelude::*;
//!
//! let client = TrackerClient::builder().build()?;
//! let coin = CoinId::from("btc-bitcoin");
//!
//! let mut query = PriceQuery::new(coin);
//! query.run(&client).await;
//! let card = PriceCard::from_state(query.state(), client.change_window(), chrono::Utc::now());
//! println!("{card}");
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// HTTP client for the history endpoint.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `TrackerClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Layer 4: Render ──────────────────────────────────────────────────────────

/// Text price card.
pub mod render;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::CoinId;

    // Domain types — history
    pub use crate::domain::history::{
        percent_change, ChangeWindow, HistoricalPricePoint, HistoryProvider, PercentChange,
        PriceQuery, QueryKey, QueryState, StaticHistory,
    };

    // Domain types — theme
    pub use crate::domain::theme::{Theme, ThemeMode, DARK_THEME, LIGHT_THEME};

    // Errors
    pub use crate::error::{HttpError, TrackerError, Unavailable};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // Render
    pub use crate::render::PriceCard;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{HistoryClient, TrackerClient, TrackerClientBuilder};
}
