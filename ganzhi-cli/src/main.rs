//! Ganzhi CLI: calendar pillars, fortune readings, and chart segments.
//!
//! Commands:
//! - `pillars`: year/month/day/hour pillars of an instant
//! - `fortune`: day-pillar fortune for an asset or element
//! - `segments`: load a CSV price series and print its calendar segments
//! - `assets`: list the asset catalog

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};
use clap::{Parser, Subcommand};
use ganzhi_core::calendar::{two_hour_period, Element, Pillar};
use ganzhi_core::config::AppConfig;
use ganzhi_core::data::{parse_timestamp, CsvSource, PriceSource};
use ganzhi_core::domain::Interval;
use ganzhi_core::fortune::reading_for;
use ganzhi_core::pillars::pillars_for;
use ganzhi_core::Overlay;
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ganzhi",
    about = "Ganzhi CLI: sexagenary calendar overlays for price charts"
)]
struct Cli {
    /// Path to a TOML config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the four pillars of an instant.
    Pillars {
        /// Local date or date-time (YYYY-MM-DD[ HH:MM[:SS]]). Defaults to now.
        #[arg(long)]
        at: Option<String>,
    },
    /// Day-pillar fortune for an asset (by symbol) or a bare element.
    Fortune {
        /// Asset symbol looked up in the catalog.
        #[arg(long, conflicts_with = "element")]
        symbol: Option<String>,

        /// Element to evaluate directly (wood, fire, earth, metal, water).
        #[arg(long)]
        element: Option<Element>,

        /// Local date or date-time. Defaults to now.
        #[arg(long)]
        at: Option<String>,
    },
    /// Load a CSV price series and print its calendar segments.
    Segments {
        /// Symbol; its file is <data_dir>/<SYMBOL>.csv unless --csv is given.
        #[arg(long)]
        symbol: String,

        /// Explicit CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Candle interval: 1mo, 1wk, 1d, 60m. Defaults to the config value.
        #[arg(long)]
        interval: Option<Interval>,

        /// Lookback range: 1mo, 3mo, 6mo, 1y, 2y, 5y, max.
        #[arg(long)]
        range: Option<String>,

        /// Window end date (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        end: Option<String>,

        /// Emit the overlay as JSON instead of a table.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List the asset catalog.
    Assets,
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Pillars { at } => run_pillars(at.as_deref()),
        Commands::Fortune { symbol, element, at } => {
            run_fortune(&config, symbol.as_deref(), element, at.as_deref())
        }
        Commands::Segments {
            symbol,
            csv,
            interval,
            range,
            end,
            json,
        } => run_segments(&config, &symbol, csv, interval, range.as_deref(), end.as_deref(), json),
        Commands::Assets => run_assets(&config),
    }
}

fn parse_instant(at: Option<&str>) -> Result<NaiveDateTime> {
    match at {
        Some(s) => parse_timestamp(s).with_context(|| format!("unrecognised date/time '{s}'")),
        None => Ok(Local::now().naive_local()),
    }
}

fn describe(pillar: Pillar) -> String {
    format!(
        "{} ({} {} / {} {})",
        pillar,
        pillar.stem.pinyin(),
        pillar.stem_element(),
        pillar.branch.pinyin(),
        pillar.branch_element()
    )
}

fn run_pillars(at: Option<&str>) -> Result<()> {
    let instant = parse_instant(at)?;
    let p = pillars_for(instant);

    println!("{}", instant.format("%Y-%m-%d %H:%M"));
    println!("  Year:  {}", describe(p.year));
    println!("  Month: {}", describe(p.month));
    println!("  Day:   {}", describe(p.day));
    print!("  Hour:  {}", describe(p.hour));
    if let Some(period) = two_hour_period(instant.hour()) {
        print!("  {}", period.name);
    }
    println!();
    Ok(())
}

fn run_fortune(
    config: &AppConfig,
    symbol: Option<&str>,
    element: Option<Element>,
    at: Option<&str>,
) -> Result<()> {
    let instant = parse_instant(at)?;
    let (subject, assigned) = match (symbol, element) {
        (Some(sym), None) => {
            let asset = config.catalog().resolve(sym, config.default_element);
            (format!("{} - {} [{}]", asset.symbol, asset.name, asset.sector), asset.element)
        }
        (None, Some(e)) => (format!("element {e}"), e),
        (None, None) => bail!("one of --symbol or --element is required"),
        (Some(_), Some(_)) => bail!("--symbol and --element are mutually exclusive"),
    };

    let day = pillars_for(instant).day;
    let reading = reading_for(assigned, instant);

    println!("{subject}");
    println!("  Date:      {}", instant.format("%Y-%m-%d"));
    println!("  Element:   {} ({})", assigned, assigned.glyph());
    println!("  Day pillar {}", describe(day));
    println!("  Fortune:   {}", reading.verdict);
    println!("  Rule:      {}", reading.rule.describe());
    println!("  {}", reading.summary(assigned));
    Ok(())
}

fn run_segments(
    config: &AppConfig,
    symbol: &str,
    csv: Option<PathBuf>,
    interval: Option<Interval>,
    range: Option<&str>,
    end: Option<&str>,
    json: bool,
) -> Result<()> {
    let interval = interval.unwrap_or(config.default_interval);
    let end_date = end
        .map(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .transpose()?
        .unwrap_or_else(|| Local::now().date_naive());
    let start_date = interval.window_start(range, end_date);

    let source = match csv {
        Some(path) => CsvSource::from_file(path),
        None => CsvSource::from_dir(config.data_dir.clone()),
    };
    info!(
        "loading {symbol} from {} ({start_date} to {end_date})",
        source.path_for(symbol).display()
    );
    let bars = source.fetch(symbol, start_date, end_date)?;
    let overlay = Overlay::build(bars, interval);

    if json {
        println!("{}", serde_json::to_string_pretty(&overlay)?);
        return Ok(());
    }

    let asset = config.catalog().resolve(symbol, config.default_element);
    println!(
        "{} - {} ({}, {} points, {} segments)",
        asset.symbol,
        asset.name,
        interval,
        overlay.points.len(),
        overlay.segments.len()
    );
    println!("{:<20} {:<20} {:<8} {:<7} {:>6} {:>9}", "start", "end", "label", "element", "bars", "change%");
    for seg in &overlay.segments {
        let points = overlay.points_in(seg);
        let change = match (points.first(), points.last()) {
            (Some(first), Some(last)) => (last.bar.close - first.bar.open) / first.bar.open * 100.0,
            _ => 0.0,
        };
        println!(
            "{:<20} {:<20} {:<8} {:<7} {:>6} {:>9.2}",
            seg.start.format("%Y-%m-%d %H:%M").to_string(),
            seg.end.format("%Y-%m-%d %H:%M").to_string(),
            seg.label.to_string(),
            seg.element.to_string(),
            seg.len(),
            change
        );
    }
    Ok(())
}

fn run_assets(config: &AppConfig) -> Result<()> {
    let catalog = config.catalog();
    println!("{:<12} {:<7} {:<24} name", "symbol", "element", "sector");
    for asset in catalog.iter() {
        println!(
            "{:<12} {:<7} {:<24} {}",
            asset.symbol,
            asset.element.to_string(),
            asset.sector,
            asset.name
        );
    }
    println!("\n{} assets (default element: {})", catalog.len(), config.default_element);
    Ok(())
}
