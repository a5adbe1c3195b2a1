//! HTTP client layer — `TrackerHttp`.

pub mod client;

pub use client::TrackerHttp;
