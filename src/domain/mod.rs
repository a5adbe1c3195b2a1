//! Domain modules organized as vertical slices.
//!
//! `history` contains:
//! - `mod.rs` — Rich domain types (validated, business-logic-ready)
//! - `wire.rs` — Raw serde structs matching endpoint responses
//! - `convert.rs` — `TryFrom` conversions with validation
//! - `change.rs` — The windowed percent-change calculator
//! - `state.rs` — Query state container for one in-flight fetch
//! - `provider.rs` — The `HistoryProvider` seam
//! - `client.rs` — Sub-client with HTTP methods
//!
//! `theme` holds the light/dark display palettes.

pub mod history;
pub mod theme;
