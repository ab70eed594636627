//! TimePoint: a price bar annotated with its four pillars.

use super::PriceBar;
use crate::calendar::Pillars;
use crate::pillars::pillars_for;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimePoint {
    pub bar: PriceBar,
    pub pillars: Pillars,
}

impl TimePoint {
    pub fn new(bar: PriceBar) -> Self {
        let pillars = pillars_for(bar.timestamp);
        Self { bar, pillars }
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.bar.timestamp
    }
}

/// Annotate every bar with its pillars, preserving order.
pub fn annotate(bars: Vec<PriceBar>) -> Vec<TimePoint> {
    bars.into_iter().map(TimePoint::new).collect()
}
