//! # route-optimizer CLI
//!
//! Reads a route request as JSON and prints the optimal round trip.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, error};
use route_optimizer::optimizer::{OptimizerConfig, RouteOptimizer, DEFAULT_MAX_LOCATIONS};
use route_optimizer::request::{RouteRequest, RouteResponse};

/// Command-line interface for route-optimizer
#[derive(Parser)]
#[command(name = "route-optimizer")]
#[command(version, about = "Finds the fastest round trip through a handful of locations")]
#[command(long_about = "Reads a JSON request from a file or stdin:
  { \"locations\": [\"A\", \"B\", \"C\"], \"matrix\": [[0, 5, 9], [4, 0, null], [8, 3, 0]] }

matrix[i][j] is the travel time from locations[i] to locations[j]; null marks
an unreachable leg. The tour starts and ends at the first location.")]
struct Cli {
    /// Request file; reads stdin when omitted or "-"
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Refuse requests with more locations than this
    #[arg(long, default_value_t = DEFAULT_MAX_LOCATIONS)]
    max_locations: usize,

    /// Give up after this many milliseconds
    #[arg(long)]
    time_limit_ms: Option<u64>,

    /// Pretty-print the response
    #[arg(long)]
    pretty: bool,
}

fn main() {
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(e) = run() {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let body = read_input(cli.input.as_ref())?;
    let request: RouteRequest =
        serde_json::from_str(&body).context("failed to parse route request")?;
    debug!("received {} locations", request.locations.len());

    let optimizer = RouteOptimizer::new(OptimizerConfig {
        max_locations: cli.max_locations,
        time_limit_ms: cli.time_limit_ms,
    });
    let tour = optimizer
        .plan(&request, &request.locations)
        .context("failed to optimize route")?;

    let response = RouteResponse::from(tour);
    let out = if cli.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{out}");
    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => {
            fs::read_to_string(p).with_context(|| format!("failed to read {}", p.display()))
        }
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read request from stdin")?;
            Ok(buf)
        }
    }
}
