//! PriceBar: one OHLCV observation as supplied by a price source.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// OHLCV bar stamped with local wall-clock time.
///
/// Daily and coarser bars carry midnight; intraday bars carry the bar open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub timestamp: NaiveDateTime,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl PriceBar {
    /// Returns true if any price field is NaN.
    pub fn is_void(&self) -> bool {
        self.open.is_nan() || self.high.is_nan() || self.low.is_nan() || self.close.is_nan()
    }

    /// Basic OHLC sanity check: high >= low, high >= open, high >= close, etc.
    pub fn is_sane(&self) -> bool {
        if self.is_void() {
            return false;
        }
        self.high >= self.low
            && self.high >= self.open
            && self.high >= self.close
            && self.low <= self.open
            && self.low <= self.close
            && self.open > 0.0
            && self.close > 0.0
    }

    /// Close-over-open change in percent.
    pub fn change_pct(&self) -> f64 {
        (self.close - self.open) / self.open * 100.0
    }
}
