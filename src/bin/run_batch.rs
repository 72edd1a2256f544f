//! Run a batch of simulation requests from CSV
//!
//! Reads requests (see `scenario::loader` for the layout), runs them in
//! parallel and writes one summary row per request. Failed requests keep their
//! row with the error message.
//!
//! Engine limits come from `GOAL_SEARCH_BOUND_MONTHS` and `GOAL_MAX_HORIZON_YEARS`.

use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use goal_simulator::scenario::load_requests;
use goal_simulator::{ScenarioRunner, SimulationMode, SolverConfig};

#[derive(Debug, Parser)]
#[command(name = "run_batch", about = "Run simulation requests from a CSV file")]
struct Cli {
    /// Request CSV
    input: PathBuf,

    /// Summary CSV to write
    #[arg(default_value = "batch_output.csv")]
    output: PathBuf,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchRow {
    row: usize,
    mode: SimulationMode,
    months_elapsed: Option<u32>,
    final_balance: Option<f64>,
    total_contributed: Option<f64>,
    total_return: Option<f64>,
    resolved_monthly_contribution: Option<f64>,
    covered_by_initial_deposit: Option<bool>,
    error: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let start = Instant::now();

    let requests = load_requests(&cli.input)
        .with_context(|| format!("failed to load requests from {}", cli.input.display()))?;
    println!("Loaded {} requests in {:?}", requests.len(), start.elapsed());

    let mut config = SolverConfig::from_env();
    config.detailed_output = false;
    let runner = ScenarioRunner::with_config(config);

    let run_start = Instant::now();
    let results = runner.run_batch(&requests);
    println!("Simulations complete in {:?}", run_start.elapsed());

    let file = File::create(&cli.output)
        .with_context(|| format!("unable to create {}", cli.output.display()))?;
    let mut wtr = csv::Writer::from_writer(file);

    let mut failures = 0;
    for (index, (request, result)) in requests.iter().zip(&results).enumerate() {
        let row = match result {
            Ok(r) => BatchRow {
                row: index + 1,
                mode: r.mode,
                months_elapsed: Some(r.months_elapsed),
                final_balance: Some(r.final_balance),
                total_contributed: Some(r.total_contributed),
                total_return: Some(r.total_return),
                resolved_monthly_contribution: Some(r.resolved_monthly_contribution),
                covered_by_initial_deposit: Some(r.covered_by_initial_deposit),
                error: None,
            },
            Err(e) => {
                failures += 1;
                BatchRow {
                    row: index + 1,
                    mode: request.mode(),
                    months_elapsed: None,
                    final_balance: None,
                    total_contributed: None,
                    total_return: None,
                    resolved_monthly_contribution: None,
                    covered_by_initial_deposit: None,
                    error: Some(e.to_string()),
                }
            }
        };
        wtr.serialize(row)?;
    }
    wtr.flush()?;

    println!("Output written to {}", cli.output.display());
    println!(
        "\nBatch Summary:\n  Succeeded: {}\n  Failed: {}",
        results.len() - failures,
        failures
    );
    println!("\nTotal time: {:?}", start.elapsed());

    Ok(())
}
