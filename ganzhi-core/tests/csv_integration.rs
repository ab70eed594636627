//! Integration tests for the CSV price source and overlay pipeline.

use chrono::NaiveDate;
use ganzhi_core::data::{CsvSource, DataError, PriceSource};
use ganzhi_core::domain::Interval;
use ganzhi_core::Overlay;
use std::path::PathBuf;

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn fixture_builds_month_segments_across_solar_term() {
    let src = CsvSource::from_file(fixture_dir().join("sample_daily.csv"));
    let bars = src.fetch("ANY", d(2024, 1, 1), d(2024, 12, 31)).unwrap();
    assert_eq!(bars.len(), 6);

    let overlay = Overlay::build(bars, Interval::OneDay);
    // duplicate 2024-03-19 row dropped, first one kept
    assert_eq!(overlay.points.len(), 5);
    assert_eq!(overlay.points[1].bar.close, 102.5);

    // solar term for March 2024 falls on the 20th
    let labels: Vec<String> = overlay.segments.iter().map(|s| s.label.to_string()).collect();
    assert_eq!(labels, vec!["丁卯月", "戊辰月"]);
    assert_eq!(overlay.segments[0].range, 0..2);
    assert_eq!(overlay.segments[1].range, 2..5);
}

#[test]
fn window_filters_rows() {
    let src = CsvSource::from_file(fixture_dir().join("sample_daily.csv"));
    let bars = src.fetch("ANY", d(2024, 3, 21), d(2024, 3, 31)).unwrap();
    assert_eq!(bars.len(), 2);
}

#[test]
fn directory_source_reads_symbol_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("KO.csv"),
        "date,open,high,low,close,volume\n2024-05-01 10:00,60,61,59,60.5,500\n2024-05-01 11:00,60.5,61,60,60.8,400\n",
    )
    .unwrap();

    let src = CsvSource::from_dir(dir.path());
    let bars = src.fetch("ko", d(2024, 5, 1), d(2024, 5, 1)).unwrap();
    assert_eq!(bars.len(), 2);

    let overlay = Overlay::build(bars, Interval::SixtyMinutes);
    assert_eq!(overlay.segments.len(), 1);
    assert_eq!(overlay.points[0].pillars.hour.branch.index(), 5);

    let missing = src.fetch("PEP", d(2024, 5, 1), d(2024, 5, 1));
    assert!(matches!(missing, Err(DataError::SymbolNotFound { .. })));
}

#[test]
fn overlay_serializes_labels_and_elements() {
    let src = CsvSource::from_file(fixture_dir().join("sample_daily.csv"));
    let bars = src.fetch("ANY", d(2024, 1, 1), d(2024, 12, 31)).unwrap();
    let overlay = Overlay::build(bars, Interval::OneDay);
    let json = serde_json::to_value(&overlay).unwrap();
    assert_eq!(json["interval"], "1d");
    assert_eq!(json["segments"][1]["label"], "戊辰月");
    assert_eq!(json["segments"][1]["element"], "earth");
}
