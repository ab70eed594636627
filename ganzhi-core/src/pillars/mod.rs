//! Pillar calculator: year, month, day, and hour pillars for an instant.
//!
//! Every function here is pure and total over local wall-clock time
//! (`NaiveDateTime`). Time-zone handling is the caller's concern:
//! [`pillars_for_zoned`] reads the wall time in whatever zone the
//! `DateTime` carries.
//!
//! Dependency order: the month pillar needs the year stem and the hour
//! pillar needs the day stem.

pub mod day;
pub mod hour;
pub mod month;
pub mod solar_term;
pub mod year;

pub use day::{day_pillar, days_since_anchor};
pub use hour::{hour_branch, hour_pillar};
pub use month::{lunar_month, month_pillar};
pub use solar_term::{solar_term_day, start_of_spring, start_of_spring_day, TABULATED_YEARS};
pub use year::{pillar_year, year_pillar};

use crate::calendar::Pillars;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

pub fn pillars_for(instant: NaiveDateTime) -> Pillars {
    let year = year_pillar(instant);
    let month = month_pillar(instant, year.stem);
    let day = day_pillar(instant);
    let hour = hour_pillar(instant, day.stem);
    Pillars { year, month, day, hour }
}

/// Pillars for a zoned instant, using its local wall-clock reading.
pub fn pillars_for_zoned<Tz: TimeZone>(instant: &DateTime<Tz>) -> Pillars {
    pillars_for(instant.naive_local())
}

/// Pillars at local midnight of `date`.
pub fn pillars_for_date(date: NaiveDate) -> Pillars {
    pillars_for(date.and_time(NaiveTime::MIN))
}
