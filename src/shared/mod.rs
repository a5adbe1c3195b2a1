//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the endpoint sends, so they can be used directly in wire types
//! without conversion overhead.

pub mod fmt;
pub mod serde_util;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use thiserror::Error;

// ─── CoinId ──────────────────────────────────────────────────────────────────

/// Newtype for coin identifiers (e.g. `"btc-bitcoin"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CoinId(String);

impl CoinId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CoinId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CoinId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CoinId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for CoinId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CoinId(s.to_string()))
    }
}

impl Serialize for CoinId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CoinId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(CoinId(s))
    }
}

// ─── Decimal parsing ─────────────────────────────────────────────────────────

/// A decimal string that could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid decimal '{input}': {reason}")]
pub struct PriceParseError {
    pub input: String,
    pub reason: String,
}

/// Parse a price quote the endpoint sends as a decimal string.
///
/// Accepts scientific notation (`"1.5e-7"`), which some quotes for very
/// cheap coins use. Digit separators (`"1_000"`) are rejected.
pub fn parse_decimal(input: &str) -> Result<Decimal, PriceParseError> {
    let trimmed = input.trim();
    if trimmed.contains('_') {
        return Err(PriceParseError {
            input: input.to_string(),
            reason: "digit separators are not allowed".to_string(),
        });
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|e| PriceParseError {
            input: input.to_string(),
            reason: e.to_string(),
        })
}
