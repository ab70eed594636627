//! Year pillar.

use super::solar_term::start_of_spring;
use crate::calendar::Pillar;
use chrono::{Datelike, NaiveDateTime, NaiveTime};

/// Year of the sexagenary cycle containing `instant`.
///
/// Instants before the start-of-spring boundary belong to the previous year.
pub fn pillar_year(instant: NaiveDateTime) -> i32 {
    let year = instant.year();
    if instant < start_of_spring(year).and_time(NaiveTime::MIN) {
        year - 1
    } else {
        year
    }
}

pub fn year_pillar(instant: NaiveDateTime) -> Pillar {
    let offset = i64::from(pillar_year(instant)) - 4;
    Pillar::from_indices(offset, offset)
}
