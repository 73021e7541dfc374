use std::fs;

use anyhow::{Context, Result};
use areas::Areas;
use clap::{Parser, Subcommand};
use serde::Deserialize;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "areas-cli")]
#[command(about = "Named-region membership demo and query tool")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Register the two sample squares and print best-region lookups.
    Demo,
    /// Load regions from a JSON file and report matches for a point.
    Query {
        /// Region file: { "regions": [ { "name": "...", "points": [[x, y], ...] } ] }
        #[arg(long)]
        regions: String,
        x: f64,
        y: f64,
    },
}

#[derive(Deserialize)]
struct RegionFile {
    regions: Vec<RegionDef>,
}

#[derive(Deserialize)]
struct RegionDef {
    name: String,
    points: Vec<(f64, f64)>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Demo => demo(),
        Action::Query { regions, x, y } => query(&regions, x, y),
    }
}

fn demo() -> Result<()> {
    let mut areas = Areas::new();
    areas.add_region("A", [(0, 0), (4, 0), (4, 4), (0, 4)])?;
    areas.add_region("B", [(0, 0), (1, 0), (1, 1), (0, 1)])?;
    for (x, y) in [(1.0, 1.0), (3.0, 7.0), (7.0, 3.0), (9.0, 9.0)] {
        report_point(&areas, x, y);
    }
    Ok(())
}

fn query(path: &str, x: f64, y: f64) -> Result<()> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading region file {path}"))?;
    let file: RegionFile = serde_json::from_str(&raw).context("parsing region file")?;
    let mut areas = Areas::new();
    for def in file.regions {
        areas
            .add_region(&def.name, def.points)
            .with_context(|| format!("region {:?}", def.name))?;
    }
    tracing::info!(regions = areas.len(), x, y, "query");
    report_point(&areas, x, y);
    let all = areas.all_regions_with_point(x, y);
    if !all.is_empty() {
        println!("all matches: {}", all.join(", "));
    }
    Ok(())
}

fn report_point(areas: &Areas, x: f64, y: f64) {
    match areas.best_region(x, y) {
        Some(name) => println!("{x}, {y}: {name}"),
        None => println!("{x}, {y}: no region"),
    }
}
