//! Price data boundary: sources, CSV files, canonicalization.

pub mod canonicalize;
pub mod csv_source;
pub mod provider;

pub use canonicalize::{canonicalize, Canonical};
pub use csv_source::{parse_timestamp, read_bars, read_bars_from_path, CsvSource};
pub use provider::{DataError, MemorySource, PriceSource};
