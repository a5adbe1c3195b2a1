//! Human-readable formatting helpers.

pub mod decimal;
