//! Property tests for calendar, fortune, and segmentation invariants.
//!
//! Uses proptest to verify:
//! 1. Every pillar is a valid sexagenary pair
//! 2. Day pillars repeat every 60 days and advance one step per day
//! 3. Segments partition the input exactly, in order
//! 4. Segment boundaries sit exactly at label changes
//! 5. A branch-element match always forces a favorable verdict

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use ganzhi_core::calendar::{Element, Pillar};
use ganzhi_core::domain::{annotate, PriceBar};
use ganzhi_core::fortune::{determine_fortune, Fortune, FortuneRule, STEM_RULES};
use ganzhi_core::pillars::{day_pillar, pillars_for};
use ganzhi_core::segment::{build_segments, Granularity};
use proptest::prelude::*;

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_instant() -> impl Strategy<Value = NaiveDateTime> {
    // 1800-01-01 ..= 2199-12-31
    let first = NaiveDate::from_ymd_opt(1800, 1, 1).unwrap().num_days_from_ce();
    let last = NaiveDate::from_ymd_opt(2199, 12, 31).unwrap().num_days_from_ce();
    (first..=last, 0u32..86_400).prop_map(|(days, secs)| {
        NaiveDate::from_num_days_from_ce_opt(days)
            .unwrap()
            .and_hms_opt(secs / 3600, (secs / 60) % 60, secs % 60)
            .unwrap()
    })
}

fn arb_element() -> impl Strategy<Value = Element> {
    prop::sample::select(Element::ALL.to_vec())
}

fn arb_granularity() -> impl Strategy<Value = Granularity> {
    prop::sample::select(vec![Granularity::Year, Granularity::Month, Granularity::Day])
}

/// Ascending series with gaps of 1 hour to 40 days.
fn arb_series() -> impl Strategy<Value = Vec<PriceBar>> {
    (arb_instant(), prop::collection::vec(1i64..960, 0..150)).prop_map(|(start, gaps)| {
        let mut t = start;
        let mut bars = Vec::with_capacity(gaps.len());
        for (i, gap) in gaps.into_iter().enumerate() {
            let close = 50.0 + i as f64;
            bars.push(PriceBar {
                timestamp: t,
                open: close,
                high: close + 1.0,
                low: close - 1.0,
                close,
                volume: 1,
            });
            t += Duration::hours(gap);
        }
        bars
    })
}

fn is_valid(p: Pillar) -> bool {
    p.stem.index() < 10 && p.branch.index() < 12 && p.cycle_index().is_some()
}

// ── 1–2. Pillars ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn all_pillars_are_sexagenary_pairs(t in arb_instant()) {
        let p = pillars_for(t);
        prop_assert!(is_valid(p.year));
        prop_assert!(is_valid(p.month));
        prop_assert!(is_valid(p.day));
        prop_assert!(is_valid(p.hour));
    }

    #[test]
    fn day_pillar_has_period_sixty(t in arb_instant()) {
        prop_assert_eq!(day_pillar(t), day_pillar(t + Duration::days(60)));
        prop_assert_eq!(day_pillar(t), day_pillar(t - Duration::days(60)));
    }

    #[test]
    fn day_pillar_advances_one_step_per_day(t in arb_instant()) {
        let today = day_pillar(t).cycle_index().unwrap();
        let tomorrow = day_pillar(t + Duration::days(1)).cycle_index().unwrap();
        prop_assert_eq!(tomorrow, (today + 1) % 60);
    }

    #[test]
    fn pillars_are_deterministic(t in arb_instant()) {
        prop_assert_eq!(pillars_for(t), pillars_for(t));
    }
}

// ── 3–4. Segments ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn segments_partition_the_series(bars in arb_series(), g in arb_granularity()) {
        let points = annotate(bars);
        let segments = build_segments(&points, g);

        if points.is_empty() {
            prop_assert!(segments.is_empty());
        } else {
            let mut next = 0;
            for seg in &segments {
                prop_assert_eq!(seg.range.start, next);
                prop_assert!(!seg.range.is_empty());
                prop_assert_eq!(seg.start, points[seg.range.start].timestamp());
                prop_assert_eq!(seg.end, points[seg.range.end - 1].timestamp());
                next = seg.range.end;
            }
            prop_assert_eq!(next, points.len());
        }
    }

    #[test]
    fn boundaries_match_label_changes(bars in arb_series(), g in arb_granularity()) {
        let points = annotate(bars);
        let segments = build_segments(&points, g);

        let changes = points
            .windows(2)
            .filter(|w| g.label_for(&w[0].pillars) != g.label_for(&w[1].pillars))
            .count();
        if !points.is_empty() {
            prop_assert_eq!(segments.len(), changes + 1);
        }
        for seg in &segments {
            for p in &points[seg.range.clone()] {
                prop_assert_eq!(g.label_for(&p.pillars), seg.label);
            }
            prop_assert_eq!(seg.element, seg.label.pillar.stem_element());
        }
        for pair in segments.windows(2) {
            prop_assert_ne!(pair[0].label, pair[1].label);
        }
    }
}

// ── 5. Fortune ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn branch_match_always_favorable(assigned in arb_element(), stem in arb_element()) {
        let r = determine_fortune(assigned, stem, assigned);
        prop_assert_eq!(r.verdict, Fortune::Favorable);
        prop_assert_eq!(r.rule, FortuneRule::BranchMatch);
    }

    #[test]
    fn without_branch_match_first_stem_rule_decides(
        assigned in arb_element(),
        stem in arb_element(),
        branch in arb_element(),
    ) {
        prop_assume!(assigned != branch);
        let r = determine_fortune(assigned, stem, branch);
        match STEM_RULES.iter().find(|rule| rule.applies(assigned, stem)) {
            Some(rule) => {
                prop_assert_eq!(r.rule, rule.rule);
                prop_assert_eq!(r.verdict, rule.verdict);
            }
            None => {
                prop_assert_eq!(r.rule, FortuneRule::Default);
                prop_assert_eq!(r.verdict, Fortune::Unfavorable);
            }
        }
    }
}
