//! Network URL constants and transport defaults.

use std::time::Duration;

/// Default OHLCV history endpoint.
pub const DEFAULT_API_URL: &str = "https://ohlcv-api.nomadcoders.workers.dev";

/// Environment variable the CLI reads to override [`DEFAULT_API_URL`].
pub const API_URL_ENV: &str = "COIN_TRACKER_API_URL";

/// Default per-request timeout for native clients.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
