//! Hour pillar.

use crate::calendar::{two_hour_period, Branch, Pillar, Stem};
use chrono::{NaiveDateTime, Timelike};

/// Zi-hour stem for each day-stem pair (甲己, 乙庚, 丙辛, 丁壬, 戊癸).
const HOUR_STEM_BASE: [i64; 5] = [0, 2, 4, 6, 8];

/// Branch of the two-hour period containing `hour`.
pub fn hour_branch(hour: u32) -> Branch {
    match two_hour_period(hour) {
        Some(period) => period.branch,
        None => Branch::from_index(i64::from((hour + 1) / 2)),
    }
}

pub fn hour_pillar(instant: NaiveDateTime, day_stem: Stem) -> Pillar {
    let branch = hour_branch(instant.hour());
    let base = HOUR_STEM_BASE[day_stem.index() % 5];
    Pillar::new(Stem::from_index(base + branch.index() as i64), branch)
}
