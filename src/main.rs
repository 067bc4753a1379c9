use anyhow::{bail, Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use remote_roster::audit::audit_schedule;
use remote_roster::config::WeekConfig;
use remote_roster::export::export_csv;
use remote_roster::report::{render_outcome, render_plan};
use remote_roster::solver::{BacktrackingSolver, SolveReport, SolverConfig};

#[derive(Parser, Debug)]
#[command(name = "remote-roster")]
#[command(about = "Generates a weekly remote-work schedule", long_about = None)]
struct Args {
    /// Week configuration (TOML). The reference week is used when absent.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Random seed; a fresh one is drawn and logged when absent
    #[arg(long)]
    seed: Option<u64>,

    /// CSV output path
    #[arg(short, long, default_value = "remote_schedule.csv")]
    output: PathBuf,

    /// Skip writing the CSV file
    #[arg(long)]
    no_export: bool,

    /// Print the result as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    seed: u64,
    people: Vec<&'a str>,
    days: Vec<String>,
    #[serde(flatten)]
    report: &'a SolveReport,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<ExitCode> {
    let config = match &args.config {
        Some(path) => WeekConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => WeekConfig::default(),
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, "generating weekly remote schedule");
    let mut rng = StdRng::seed_from_u64(seed);

    let request = config.build_request(&mut rng)?;
    let solver_config = match config.node_limit {
        Some(limit) => SolverConfig::default().with_node_limit(limit),
        None => SolverConfig::default(),
    };
    let report = BacktrackingSolver::with_config(solver_config).solve(&request, &mut rng)?;

    if args.json {
        let output = JsonOutput {
            seed,
            people: request.people.iter().map(|p| p.name.as_str()).collect(),
            days: request.week.days.iter().map(|d| d.label()).collect(),
            report: &report,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", render_plan(&request));
        print!("{}", render_outcome(&request, &report));
    }

    let Some(schedule) = report.outcome.schedule() else {
        warn!(stats = ?report.stats, "no schedule produced");
        return Ok(ExitCode::from(2));
    };

    let violations = audit_schedule(&request, schedule);
    if !violations.is_empty() {
        bail!("solver produced an invalid schedule: {violations:?}");
    }

    if !args.no_export {
        export_csv(&args.output, &request, schedule)
            .with_context(|| format!("failed to write {}", args.output.display()))?;
        if !args.json {
            println!("CSV file created: {}", args.output.display());
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(1)
        }
    }
}
