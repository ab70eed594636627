//! Canonicalization: sort ascending, drop duplicate timestamps, flag anomalies.
//!
//! The segment builder requires an ascending, deduplicated series; this is
//! where raw source output is brought into that shape.

use crate::domain::PriceBar;
use log::warn;

/// Canonical series plus what was changed or noticed on the way.
#[derive(Debug, Clone)]
pub struct Canonical {
    pub bars: Vec<PriceBar>,
    pub dropped_duplicates: usize,
    /// Bars kept despite failing [`PriceBar::is_sane`].
    pub insane: usize,
}

/// Stable-sort by timestamp and keep the first bar of each timestamp.
pub fn canonicalize(mut bars: Vec<PriceBar>) -> Canonical {
    bars.sort_by_key(|b| b.timestamp);
    let before = bars.len();
    bars.dedup_by_key(|b| b.timestamp);
    let dropped_duplicates = before - bars.len();

    let insane = bars.iter().filter(|b| !b.is_sane()).count();

    if dropped_duplicates > 0 {
        warn!("dropped {dropped_duplicates} bars with duplicate timestamps");
    }
    if insane > 0 {
        warn!("{insane} bars fail OHLC sanity checks");
    }

    Canonical { bars, dropped_duplicates, insane }
}
