//! Candle intervals and lookback ranges.
//!
//! The interval decides which pillar labels chart segments; the lookback
//! range decides how much history is requested from a price source.

use crate::segment::Granularity;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    #[serde(rename = "1mo")]
    OneMonth,
    #[serde(rename = "1wk")]
    OneWeek,
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "60m")]
    SixtyMinutes,
}

impl Interval {
    pub const ALL: [Interval; 4] = [
        Interval::OneMonth,
        Interval::OneWeek,
        Interval::OneDay,
        Interval::SixtyMinutes,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Interval::OneMonth => "1mo",
            Interval::OneWeek => "1wk",
            Interval::OneDay => "1d",
            Interval::SixtyMinutes => "60m",
        }
    }

    /// Segment granularity for charts of this interval.
    ///
    /// Monthly candles span years, so they are labelled by year pillar;
    /// daily and weekly by month pillar; hourly by day pillar.
    pub fn granularity(self) -> Granularity {
        match self {
            Interval::OneMonth => Granularity::Year,
            Interval::OneWeek | Interval::OneDay => Granularity::Month,
            Interval::SixtyMinutes => Granularity::Day,
        }
    }

    pub fn is_intraday(self) -> bool {
        matches!(self, Interval::SixtyMinutes)
    }

    /// Lookback requested when the caller does not name one.
    pub fn default_range(self) -> LookbackRange {
        match self {
            Interval::OneMonth => LookbackRange::FiveYears,
            _ => LookbackRange::OneYear,
        }
    }

    /// Start of the history window ending at `end`.
    ///
    /// An unrecognised `range` falls back to 2010-01-01 for monthly candles and
    /// one year otherwise.
    pub fn window_start(self, range: Option<&str>, end: NaiveDate) -> NaiveDate {
        match range.map(str::parse::<LookbackRange>) {
            Some(Ok(r)) => r.start_from(end),
            None => self.default_range().start_from(end),
            Some(Err(_)) => match self {
                Interval::OneMonth => ymd(2010, 1, 1),
                _ => end - Duration::days(365),
            },
        }
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown interval '{0}' (expected 1mo, 1wk, 1d or 60m)")]
pub struct ParseIntervalError(pub String);

impl FromStr for Interval {
    type Err = ParseIntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Interval::ALL
            .into_iter()
            .find(|i| i.as_str() == s.trim())
            .ok_or_else(|| ParseIntervalError(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LookbackRange {
    #[serde(rename = "1mo")]
    OneMonth,
    #[serde(rename = "3mo")]
    ThreeMonths,
    #[serde(rename = "6mo")]
    SixMonths,
    #[serde(rename = "1y")]
    OneYear,
    #[serde(rename = "2y")]
    TwoYears,
    #[serde(rename = "5y")]
    FiveYears,
    #[serde(rename = "max")]
    Max,
}

impl LookbackRange {
    pub fn as_str(self) -> &'static str {
        match self {
            LookbackRange::OneMonth => "1mo",
            LookbackRange::ThreeMonths => "3mo",
            LookbackRange::SixMonths => "6mo",
            LookbackRange::OneYear => "1y",
            LookbackRange::TwoYears => "2y",
            LookbackRange::FiveYears => "5y",
            LookbackRange::Max => "max",
        }
    }

    /// Fixed day count, or `None` for [`LookbackRange::Max`].
    pub fn days(self) -> Option<i64> {
        match self {
            LookbackRange::OneMonth => Some(30),
            LookbackRange::ThreeMonths => Some(90),
            LookbackRange::SixMonths => Some(180),
            LookbackRange::OneYear => Some(365),
            LookbackRange::TwoYears => Some(730),
            LookbackRange::FiveYears => Some(1825),
            LookbackRange::Max => None,
        }
    }

    pub fn start_from(self, end: NaiveDate) -> NaiveDate {
        match self.days() {
            Some(days) => end - Duration::days(days),
            None => ymd(2000, 1, 1),
        }
    }
}

impl FromStr for LookbackRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1mo" => Ok(LookbackRange::OneMonth),
            "3mo" => Ok(LookbackRange::ThreeMonths),
            "6mo" => Ok(LookbackRange::SixMonths),
            "1y" => Ok(LookbackRange::OneYear),
            "2y" => Ok(LookbackRange::TwoYears),
            "5y" => Ok(LookbackRange::FiveYears),
            "max" => Ok(LookbackRange::Max),
            other => Err(format!("unknown range '{other}'")),
        }
    }
}
