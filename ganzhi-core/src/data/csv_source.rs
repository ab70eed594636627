//! CSV price files.
//!
//! Expected header: `date,open,high,low,close,volume` (case-insensitive
//! variants and extra columns such as `Adj Close` are accepted). The date
//! column may hold a plain date, a date and time, or an RFC 3339 timestamp;
//! offsets are dropped in favour of the local wall-clock reading.

use super::provider::{in_window, DataError, PriceSource};
use crate::domain::PriceBar;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use log::info;
use serde::Deserialize;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(alias = "Date", alias = "timestamp", alias = "Datetime")]
    date: String,
    #[serde(alias = "Open")]
    open: f64,
    #[serde(alias = "High")]
    high: f64,
    #[serde(alias = "Low")]
    low: f64,
    #[serde(alias = "Close")]
    close: f64,
    #[serde(alias = "Volume")]
    volume: f64,
}

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Parse a timestamp cell into local wall-clock time.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN));
    }
    if let Ok(zoned) = DateTime::parse_from_rfc3339(value) {
        return Some(zoned.naive_local());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

/// Read bars from any CSV reader, in file order.
pub fn read_bars<R: Read>(reader: R) -> Result<Vec<PriceBar>, DataError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut bars = Vec::new();
    for (i, row) in rdr.deserialize::<CsvRow>().enumerate() {
        let row = row?;
        let timestamp = parse_timestamp(&row.date).ok_or_else(|| DataError::BadTimestamp {
            row: i + 1,
            value: row.date.clone(),
        })?;
        bars.push(PriceBar {
            timestamp,
            open: row.open,
            high: row.high,
            low: row.low,
            close: row.close,
            volume: row.volume.max(0.0).round() as u64,
        });
    }
    Ok(bars)
}

pub fn read_bars_from_path(path: &Path) -> Result<Vec<PriceBar>, DataError> {
    let file = std::fs::File::open(path)?;
    let bars = read_bars(file)?;
    info!("read {} bars from {}", bars.len(), path.display());
    Ok(bars)
}

/// Directory of `<SYMBOL>.csv` files, or a single explicit file.
#[derive(Debug, Clone)]
pub struct CsvSource {
    location: Location,
}

#[derive(Debug, Clone)]
enum Location {
    Dir(PathBuf),
    File(PathBuf),
}

impl CsvSource {
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        Self { location: Location::Dir(dir.into()) }
    }

    /// Serve every symbol from one file.
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self { location: Location::File(path.into()) }
    }

    pub fn path_for(&self, symbol: &str) -> PathBuf {
        match &self.location {
            Location::Dir(dir) => dir.join(format!("{}.csv", symbol.trim().to_uppercase())),
            Location::File(path) => path.clone(),
        }
    }
}

impl PriceSource for CsvSource {
    fn name(&self) -> &str {
        "csv"
    }

    fn fetch(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PriceBar>, DataError> {
        let path = self.path_for(symbol);
        if !path.is_file() {
            return Err(DataError::SymbolNotFound { symbol: symbol.to_string() });
        }
        let bars: Vec<PriceBar> = read_bars_from_path(&path)?
            .into_iter()
            .filter(|b| in_window(b, start, end))
            .collect();
        if bars.is_empty() {
            return Err(DataError::Empty { symbol: symbol.to_string(), start, end });
        }
        Ok(bars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn parses_supported_timestamp_shapes() {
        let d = parse_timestamp("2024-05-01").unwrap();
        assert_eq!(d.hour(), 0);
        let t = parse_timestamp("2024-05-01 13:30").unwrap();
        assert_eq!(t.hour(), 13);
        let t = parse_timestamp("2024-05-01T09:30:00").unwrap();
        assert_eq!(t.minute(), 30);
        // offset is dropped, wall time kept
        let z = parse_timestamp("2024-05-01T23:00:00+08:00").unwrap();
        assert_eq!(z.hour(), 23);
        assert!(parse_timestamp("05/01/2024").is_none());
    }

    #[test]
    fn reads_yahoo_style_headers() {
        let data = "Date,Open,High,Low,Close,Adj Close,Volume\n\
                    2024-01-02,100,105,98,103,103,50000\n\
                    2024-01-03,103,104,101,102,102,42000\n";
        let bars = read_bars(data.as_bytes()).unwrap();
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[1].close, 102.0);
        assert_eq!(bars[0].volume, 50_000);
    }

    #[test]
    fn bad_timestamp_reports_row() {
        let data = "date,open,high,low,close,volume\n2024-01-02,1,1,1,1,1\nnot-a-date,1,1,1,1,1\n";
        match read_bars(data.as_bytes()) {
            Err(DataError::BadTimestamp { row, value }) => {
                assert_eq!(row, 2);
                assert_eq!(value, "not-a-date");
            }
            other => panic!("expected BadTimestamp, got {other:?}"),
        }
    }

    #[test]
    fn directory_source_maps_symbol_to_file() {
        let src = CsvSource::from_dir("/data");
        assert_eq!(src.path_for("aapl"), PathBuf::from("/data/AAPL.csv"));
    }
}
