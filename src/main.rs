//! Goal Simulator CLI
//!
//! Command-line interface for the investment goal solvers

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use goal_simulator::breakdown::{write_breakdown_csv, write_monthly_csv};
use goal_simulator::rates::DEFAULT_ANNUAL_RATE_PERCENT;
use goal_simulator::{
    ReferenceRate, SimulationEngine, SimulationRequest, SimulationResult, SolverConfig,
};

#[derive(Debug, Parser)]
#[command(name = "goal_simulator", version, about = "Investment goal simulator")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print the full result as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Write the yearly breakdown to a CSV file
    #[arg(long, global = true)]
    breakdown_csv: Option<PathBuf>,

    /// Write the month-by-month trace to a CSV file
    #[arg(long, global = true)]
    monthly_csv: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// How long until the target is reached
    TimeToTarget {
        #[arg(long)]
        target: f64,
        #[arg(long)]
        contribution: f64,
        #[arg(long, default_value_t = 0.0)]
        initial: f64,
        #[command(flatten)]
        rate: RateArgs,
    },
    /// Monthly contribution needed to reach the target within the horizon
    RequiredContribution {
        #[arg(long)]
        target: f64,
        #[arg(long)]
        years: u32,
        #[arg(long, default_value_t = 0.0)]
        initial: f64,
        #[command(flatten)]
        rate: RateArgs,
    },
    /// Balance at the horizon from a lump sum plus monthly contributions
    ProjectedValue {
        #[arg(long, default_value_t = 0.0)]
        initial: f64,
        #[arg(long)]
        contribution: f64,
        #[arg(long)]
        years: u32,
        #[command(flatten)]
        rate: RateArgs,
    },
    /// List the reference annual rates
    Rates,
}

#[derive(Debug, Args)]
struct RateArgs {
    /// Nominal annual rate in percent (e.g. 14.25)
    #[arg(long, conflicts_with = "reference")]
    rate: Option<f64>,

    /// Use a reference rate instead of --rate
    #[arg(long, value_enum)]
    reference: Option<CliReferenceRate>,
}

impl RateArgs {
    fn annual_percent(&self) -> f64 {
        match (self.rate, self.reference) {
            (Some(rate), _) => rate,
            (None, Some(reference)) => ReferenceRate::from(reference).annual_percent(),
            (None, None) => DEFAULT_ANNUAL_RATE_PERCENT,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliReferenceRate {
    Savings,
    Cdi,
    Selic,
}

impl From<CliReferenceRate> for ReferenceRate {
    fn from(value: CliReferenceRate) -> Self {
        match value {
            CliReferenceRate::Savings => ReferenceRate::Savings,
            CliReferenceRate::Cdi => ReferenceRate::Cdi,
            CliReferenceRate::Selic => ReferenceRate::Selic,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let request = match &cli.command {
        Command::TimeToTarget { target, contribution, initial, rate } => {
            let annual = rate.annual_percent();
            SimulationRequest::time_to_target(*target, *contribution, annual, *initial)
        }
        Command::RequiredContribution { target, years, initial, rate } => {
            let annual = rate.annual_percent();
            SimulationRequest::required_contribution(*target, *years, annual, *initial)
        }
        Command::ProjectedValue { initial, contribution, years, rate } => {
            let annual = rate.annual_percent();
            SimulationRequest::projected_value(*initial, *contribution, *years, annual)
        }
        Command::Rates => {
            print_rates();
            return Ok(());
        }
    };

    let mut config = SolverConfig::from_env();
    if cli.monthly_csv.is_some() {
        config.detailed_output = true;
    }

    let engine = SimulationEngine::new(config);
    let result = engine
        .simulate(&request)
        .with_context(|| format!("{:?} simulation failed", request.mode()))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&result);
    }

    if let Some(path) = &cli.breakdown_csv {
        let file = File::create(path)
            .with_context(|| format!("unable to create {}", path.display()))?;
        write_breakdown_csv(&result.yearly_breakdown, file)?;
        eprintln!("Yearly breakdown written to: {}", path.display());
    }

    if let Some(path) = &cli.monthly_csv {
        let file = File::create(path)
            .with_context(|| format!("unable to create {}", path.display()))?;
        write_monthly_csv(&result.monthly, file)?;
        eprintln!("Monthly trace written to: {}", path.display());
    }

    Ok(())
}

fn print_rates() {
    println!("{:<8} {:>8}", "Rate", "% / yr");
    for rate in ReferenceRate::ALL {
        println!("{:<8} {:>8.2}", rate.label(), rate.annual_percent());
    }
}

fn print_result(result: &SimulationResult) {
    let summary = result.summary();

    println!("{:?}", summary.mode);
    println!("======================");
    if summary.covered_by_initial_deposit {
        println!("  Initial deposit alone covers the goal");
    }
    println!(
        "  Duration: {} months ({} years, {} months)",
        summary.months_elapsed, summary.whole_years, summary.remaining_months
    );
    println!("  Monthly contribution: ${:.2}", summary.resolved_monthly_contribution);
    println!("  Total contributed: ${:.2}", summary.total_contributed);
    println!("  Total return: ${:.2} ({:.1}%)", summary.total_return, summary.return_pct);
    println!("  Final balance: ${:.2} ({:.2}x)", summary.final_balance, summary.growth_multiple);

    println!();
    println!(
        "{:>4} {:>6} {:>16} {:>16} {:>16}",
        "Year", "Months", "Contributed", "Return", "Balance"
    );
    println!("{}", "-".repeat(62));
    for entry in &result.yearly_breakdown {
        println!(
            "{:>4} {:>6} {:>16.2} {:>16.2} {:>16.2}",
            entry.year,
            entry.months_in_year,
            entry.contributed_to_date,
            entry.accrued_return,
            entry.balance
        );
    }
}
