//! Month pillar.

use super::solar_term::{solar_term_day, start_of_spring_day};
use crate::calendar::{Pillar, Stem};
use chrono::{Datelike, NaiveDateTime};

/// First-month stem for each year-stem pair (甲己, 乙庚, 丙辛, 丁壬, 戊癸).
const MONTH_STEM_BASE: [i64; 5] = [2, 4, 6, 8, 0];

/// Lunar month number (1–12) the instant falls in.
pub fn lunar_month(instant: NaiveDateTime) -> u32 {
    let year = instant.year();
    let month = instant.month();
    let day = instant.day();

    if month == 2 && day < start_of_spring_day(year) {
        1
    } else if day < solar_term_day(year, month) {
        if month == 1 {
            12
        } else {
            month - 1
        }
    } else {
        month
    }
}

pub fn month_pillar(instant: NaiveDateTime, year_stem: Stem) -> Pillar {
    let lunar = i64::from(lunar_month(instant));
    let base = MONTH_STEM_BASE[year_stem.index() % 5];
    Pillar::from_indices(base + lunar - 1, lunar + 1)
}
