//! Price source trait and structured error types.
//!
//! The `PriceSource` trait abstracts over wherever OHLCV history comes from
//! (CSV exports today) so the calendar core never touches I/O directly and
//! tests can substitute in-memory sources.

use crate::domain::PriceBar;
use chrono::NaiveDate;
use thiserror::Error;

/// Structured error types for data operations.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: unrecognised timestamp '{value}'")]
    BadTimestamp { row: usize, value: String },

    #[error("no price data for symbol '{symbol}'")]
    SymbolNotFound { symbol: String },

    #[error("no bars for '{symbol}' between {start} and {end}")]
    Empty {
        symbol: String,
        start: NaiveDate,
        end: NaiveDate,
    },
}

/// Trait for price sources.
pub trait PriceSource: Send + Sync {
    /// Human-readable name of this source.
    fn name(&self) -> &str;

    /// Bars for `symbol` whose local date lies in `start..=end`, in source order.
    fn fetch(&self, symbol: &str, start: NaiveDate, end: NaiveDate)
        -> Result<Vec<PriceBar>, DataError>;
}

/// In-memory source, mainly for tests and demos.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    bars: Vec<(String, PriceBar)>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bars(mut self, symbol: &str, bars: impl IntoIterator<Item = PriceBar>) -> Self {
        let symbol = symbol.to_uppercase();
        self.bars
            .extend(bars.into_iter().map(|b| (symbol.clone(), b)));
        self
    }
}

impl PriceSource for MemorySource {
    fn name(&self) -> &str {
        "memory"
    }

    fn fetch(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PriceBar>, DataError> {
        let symbol = symbol.to_uppercase();
        let known = self.bars.iter().any(|(s, _)| *s == symbol);
        if !known {
            return Err(DataError::SymbolNotFound { symbol });
        }
        let bars: Vec<PriceBar> = self
            .bars
            .iter()
            .filter(|(s, b)| *s == symbol && in_window(b, start, end))
            .map(|(_, b)| b.clone())
            .collect();
        if bars.is_empty() {
            return Err(DataError::Empty { symbol, start, end });
        }
        Ok(bars)
    }
}

pub(crate) fn in_window(bar: &PriceBar, start: NaiveDate, end: NaiveDate) -> bool {
    let date = bar.timestamp.date();
    date >= start && date <= end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(y: i32, m: u32, d: u32) -> PriceBar {
        PriceBar {
            timestamp: NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(0, 0, 0).unwrap(),
            open: 10.0,
            high: 11.0,
            low: 9.0,
            close: 10.5,
            volume: 100,
        }
    }

    #[test]
    fn memory_source_filters_window() {
        let src = MemorySource::new().with_bars("spy", vec![bar(2024, 1, 1), bar(2024, 2, 1), bar(2024, 3, 1)]);
        let got = src
            .fetch(
                "SPY",
                NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            )
            .unwrap();
        assert_eq!(got.len(), 2);
    }

    #[test]
    fn unknown_symbol_is_an_error() {
        let src = MemorySource::new();
        let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(matches!(src.fetch("X", d, d), Err(DataError::SymbolNotFound { .. })));
    }

    #[test]
    fn empty_window_is_an_error() {
        let src = MemorySource::new().with_bars("SPY", vec![bar(2024, 1, 1)]);
        let d = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert!(matches!(src.fetch("SPY", d, d), Err(DataError::Empty { .. })));
    }
}
