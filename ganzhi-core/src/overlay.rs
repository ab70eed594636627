//! Chart overlay: the annotated series and its segments for one interval.
//!
//! This is the hand-off to a rendering layer: every point carries its four
//! pillars (for tooltips) and the segments carry label, element, and colour
//! for background shading.

use crate::data::canonicalize;
use crate::domain::{annotate, Interval, PriceBar, TimePoint};
use crate::segment::{build_segments, Segment};
use log::info;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Overlay {
    pub interval: Interval,
    pub points: Vec<TimePoint>,
    pub segments: Vec<Segment>,
}

impl Overlay {
    /// Canonicalize raw bars, annotate them, and segment at the interval's granularity.
    pub fn build(bars: Vec<PriceBar>, interval: Interval) -> Self {
        let canonical = canonicalize(bars);
        let points = annotate(canonical.bars);
        let segments = build_segments(&points, interval.granularity());
        info!(
            "overlay for {interval}: {} points in {} segments",
            points.len(),
            segments.len()
        );
        Self { interval, points, segments }
    }

    /// Points belonging to `segment`.
    pub fn points_in(&self, segment: &Segment) -> &[TimePoint] {
        &self.points[segment.range.clone()]
    }
}
