//! Day pillar: the only pillar that is strictly 60-day periodic.

use crate::calendar::Pillar;
use chrono::{Datelike, NaiveDateTime};

/// `num_days_from_ce` of the anchor date 1900-01-31 (甲辰).
pub const ANCHOR_DAYS_FROM_CE: i32 = 693_626;
pub const ANCHOR_STEM: i64 = 0;
pub const ANCHOR_BRANCH: i64 = 4;

/// Whole civil days between the anchor date and the instant's local date.
pub fn days_since_anchor(instant: NaiveDateTime) -> i64 {
    i64::from(instant.date().num_days_from_ce()) - i64::from(ANCHOR_DAYS_FROM_CE)
}

pub fn day_pillar(instant: NaiveDateTime) -> Pillar {
    let d = days_since_anchor(instant);
    Pillar::from_indices(ANCHOR_STEM + d, ANCHOR_BRANCH + d)
}
