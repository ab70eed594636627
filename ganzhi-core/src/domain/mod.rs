//! Domain types: price bars, annotated points, intervals, assets.

pub mod asset;
pub mod bar;
pub mod interval;
pub mod time_point;

pub use asset::{element_for_sector, Asset, AssetCatalog, DEFAULT_ELEMENT};
pub use bar::PriceBar;
pub use interval::{Interval, LookbackRange, ParseIntervalError};
pub use time_point::{annotate, TimePoint};
