//! Windowed percent change over a price series.
//!
//! The reference record is the **first** record, scanning forward, whose
//! `close_time` is at or before `now - window`. For a series in ascending
//! `close_time` order that is the oldest qualifying record, not the one
//! nearest to exactly one window ago. A series that breaks the ordering
//! still gets a forward scan; the result then depends on input order.

use super::HistoricalPricePoint;
use crate::error::Unavailable;
use crate::shared::fmt::decimal;
use chrono::{DateTime, TimeDelta, Utc};
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

const DEFAULT_WINDOW_MINUTES: u32 = 30;

/// Lookback window for [`percent_change`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChangeWindow {
    minutes: u32,
}

impl Default for ChangeWindow {
    fn default() -> Self {
        Self::from_minutes(DEFAULT_WINDOW_MINUTES)
    }
}

impl ChangeWindow {
    pub const fn from_minutes(minutes: u32) -> Self {
        Self { minutes }
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn duration(&self) -> TimeDelta {
        TimeDelta::minutes(self.minutes as i64)
    }

    /// Display label, e.g. `"30-minute change:"`.
    pub fn label(&self) -> String {
        format!("{}-minute change:", self.minutes)
    }

    /// Latest instant a reference record may close at.
    pub fn cutoff(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        now.checked_sub_signed(self.duration())
    }

    /// Percent change between the last record and the first record that
    /// closed at least one window before `now`.
    pub fn percent_change(
        &self,
        series: &[HistoricalPricePoint],
        now: DateTime<Utc>,
    ) -> Result<PercentChange, Unavailable> {
        let recent = series.last().ok_or(Unavailable::EmptySeries)?;

        let reference = self
            .cutoff(now)
            .and_then(|cutoff| find_reference(series, cutoff))
            .ok_or(Unavailable::InsufficientHistory {
                minutes: self.minutes as i64,
            })?;

        let recent_close = recent
            .close_price()
            .map_err(|e| Unavailable::MalformedPrice(e.input))?;
        let reference_close = reference
            .close_price()
            .map_err(|e| Unavailable::MalformedPrice(e.input))?;

        if reference_close.is_zero() {
            return Err(Unavailable::ZeroReferencePrice);
        }

        recent_close
            .checked_sub(reference_close)
            .and_then(|diff| diff.checked_div(reference_close))
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .map(PercentChange)
            .ok_or(Unavailable::Overflow)
    }
}

/// First record, in series order, that closed at or before `cutoff`.
pub fn find_reference(
    series: &[HistoricalPricePoint],
    cutoff: DateTime<Utc>,
) -> Option<&HistoricalPricePoint> {
    series.iter().find(|p| p.close_time <= cutoff)
}

/// Percent change over the default 30-minute window.
pub fn percent_change(
    series: &[HistoricalPricePoint],
    now: DateTime<Utc>,
) -> Result<PercentChange, Unavailable> {
    ChangeWindow::default().percent_change(series, now)
}

/// A computed percent change (e.g. `10` means +10%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PercentChange(Decimal);

impl PercentChange {
    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn as_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(f64::NAN)
    }
}

impl std::fmt::Display for PercentChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&decimal::percent(&self.0))
    }
}
