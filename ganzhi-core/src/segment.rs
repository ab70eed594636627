//! Segment builder: groups an annotated series into contiguous runs that
//! share one calendar label.
//!
//! The builder is a left fold over the points with [`step`] as the pure
//! transition: it takes the open accumulator (if any) and the next point and
//! returns the new accumulator plus the segment it closed, if the label
//! changed. The accumulator still open after the last point is flushed as the
//! final segment.
//!
//! Postconditions for non-empty input:
//! - segments appear in input order;
//! - their index ranges are contiguous and together cover `0..points.len()`;
//! - consecutive segments always have different labels.

use crate::calendar::{Element, Pillar, PillarKind, Pillars};
use crate::domain::TimePoint;
use chrono::NaiveDateTime;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Which pillar labels a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Year,
    Month,
    Day,
}

impl Granularity {
    pub fn suffix(self) -> char {
        match self {
            Granularity::Year => '年',
            Granularity::Month => '月',
            Granularity::Day => '日',
        }
    }

    pub fn pillar_kind(self) -> PillarKind {
        match self {
            Granularity::Year => PillarKind::Year,
            Granularity::Month => PillarKind::Month,
            Granularity::Day => PillarKind::Day,
        }
    }

    pub fn label_for(self, pillars: &Pillars) -> SegmentLabel {
        SegmentLabel {
            granularity: self,
            pillar: pillars.get(self.pillar_kind()),
        }
    }
}

/// A pillar tagged with its unit, rendered as e.g. `甲辰年`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct SegmentLabel {
    pub granularity: Granularity,
    pub pillar: Pillar,
}

impl fmt::Display for SegmentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pillar, self.granularity.suffix())
    }
}

impl From<SegmentLabel> for String {
    fn from(label: SegmentLabel) -> Self {
        label.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub label: SegmentLabel,
    /// Stem element of the labelling pillar.
    pub element: Element,
    /// Index range of the member points in the input series.
    pub range: Range<usize>,
}

impl Segment {
    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

/// The segment currently being grown.
#[derive(Debug, Clone, PartialEq)]
pub struct Accumulator {
    start: NaiveDateTime,
    end: NaiveDateTime,
    label: SegmentLabel,
    first: usize,
    last: usize,
}

impl Accumulator {
    fn open(index: usize, point: &TimePoint, label: SegmentLabel) -> Self {
        Self {
            start: point.timestamp(),
            end: point.timestamp(),
            label,
            first: index,
            last: index,
        }
    }

    pub fn label(&self) -> SegmentLabel {
        self.label
    }

    pub fn close(self) -> Segment {
        Segment {
            start: self.start,
            end: self.end,
            label: self.label,
            element: self.label.pillar.stem_element(),
            range: self.first..self.last + 1,
        }
    }
}

/// One fold step: extend the open accumulator or close it and open a new one.
pub fn step(
    acc: Option<Accumulator>,
    index: usize,
    point: &TimePoint,
    granularity: Granularity,
) -> (Accumulator, Option<Segment>) {
    let label = granularity.label_for(&point.pillars);
    match acc {
        Some(mut open) if open.label == label => {
            open.end = point.timestamp();
            open.last = index;
            (open, None)
        }
        Some(open) => (Accumulator::open(index, point, label), Some(open.close())),
        None => (Accumulator::open(index, point, label), None),
    }
}

/// Group `points` (ascending, deduplicated) into labelled segments.
pub fn build_segments(points: &[TimePoint], granularity: Granularity) -> Vec<Segment> {
    let (open, mut segments) = points.iter().enumerate().fold(
        (None, Vec::new()),
        |(acc, mut closed), (i, point)| {
            let (next, emitted) = step(acc, i, point, granularity);
            closed.extend(emitted);
            (Some(next), closed)
        },
    );
    segments.extend(open.map(Accumulator::close));

    debug!(
        "built {} {:?} segments from {} points",
        segments.len(),
        granularity,
        points.len()
    );
    segments
}
