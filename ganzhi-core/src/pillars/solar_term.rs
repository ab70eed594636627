//! Approximate solar-term boundaries.
//!
//! Two independent closed-form approximations are used: one for the
//! start-of-spring day (year and month pillar rollover) and one for the
//! per-month solar-term day. They are not reconciled with each other and are
//! only tuned for roughly the 1900–2100 window.

use chrono::{Days, NaiveDate};
use std::ops::RangeInclusive;

/// Years for which the start-of-spring day is taken from a table.
pub const TABULATED_YEARS: RangeInclusive<i32> = 2000..=2050;

/// Every tabulated year starts spring on February 4th.
const TABULATED_START_OF_SPRING_DAY: u32 = 4;

/// `floor(frac(x) * 31) + offset`
fn fractional_day(x: f64, offset: u32) -> u32 {
    ((x - x.floor()) * 31.0).floor() as u32 + offset
}

/// Day of February on which spring starts for `year`.
///
/// Inside [`TABULATED_YEARS`] this is the table value; outside it the
/// fractional-year approximation is used, which can exceed the length of
/// February (see [`start_of_spring`]).
pub fn start_of_spring_day(year: i32) -> u32 {
    if TABULATED_YEARS.contains(&year) {
        TABULATED_START_OF_SPRING_DAY
    } else {
        fractional_day(f64::from(year) * 0.2422 + 3.87, 4)
    }
}

/// Day of `month` (1–12) on which that month's solar term begins.
pub fn solar_term_day(year: i32, month: u32) -> u32 {
    fractional_day(f64::from(year) * 0.2422 + f64::from(month) * 2.08, 6)
}

/// Calendar date of the start-of-spring boundary for `year`.
///
/// Computed as February 1st plus `day - 1` days, so a day number past the end
/// of February lands in early March.
pub fn start_of_spring(year: i32) -> NaiveDate {
    let day = start_of_spring_day(year);
    NaiveDate::from_ymd_opt(year, 2, 1)
        .and_then(|feb1| feb1.checked_add_days(Days::new(u64::from(day - 1))))
        // only reachable at the edge of chrono's representable range
        .unwrap_or(NaiveDate::MAX)
}
