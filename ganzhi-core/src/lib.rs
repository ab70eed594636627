//! Ganzhi Core: sexagenary calendar pillars, five-element fortune rules, and
//! calendar-labelled segmentation of price series.
//!
//! - Calendar tables: stems, branches, elements, two-hour periods
//! - Pillar calculator: year, month, day, and hour pillars of an instant
//! - Fortune engine: ordered element-relation rules with a branch override
//! - Segment builder: single-pass fold into contiguous labelled runs
//! - Data boundary: price sources, CSV files, canonicalization
//! - Asset catalog and TOML configuration

pub mod calendar;
pub mod config;
pub mod data;
pub mod domain;
pub mod fortune;
pub mod overlay;
pub mod pillars;
pub mod segment;

pub use calendar::{Branch, Element, Pillar, PillarKind, Pillars, Stem};
pub use fortune::{determine_fortune, fortune_for, Fortune, FortuneReading, FortuneRule};
pub use overlay::Overlay;
pub use pillars::{pillars_for, pillars_for_zoned};
pub use segment::{build_segments, Granularity, Segment, SegmentLabel};
