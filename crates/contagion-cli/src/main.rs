//! Conspiracy-spread network simulation runner.
//!
//! Builds a synthetic social network, runs the contagion engine for a tick
//! budget, and reports the outcome. Interactive mode asks which node to
//! ban before every tick; headless mode runs a null policy.

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use contagion_core::{
    NoRemoval, Presenter, RemovalPolicy, RunOutcome, RunReport, SimulationConfig,
    SimulationEngine,
};

mod interactive;
mod render;

use interactive::InteractiveBan;
use render::{outcome_message, progress_line, TextPresenter};

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "contagion")]
#[command(about = "Conspiracy spread simulation over a random social network")]
struct Args {
    /// Random seed for reproducibility
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Maximum number of ticks to simulate
    #[arg(long, default_value_t = 50)]
    ticks: u64,

    /// Path to a TOML config file (defaults to contagion.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Prompt for a node to ban before every tick
    #[arg(long)]
    interactive: bool,

    /// Write the per-tick snapshot series as JSON to this path
    #[arg(long)]
    metrics_out: Option<PathBuf>,

    /// Print the final report as JSON instead of prose
    #[arg(long)]
    report_json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match SimulationConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => SimulationConfig::load_or_default(),
    };

    println!("Contagion Simulation");
    println!("====================");
    println!("Seed: {}", args.seed);
    println!("Ticks: {}", args.ticks);
    println!(
        "Nodes: {} (avg degree {}, outbreak {})",
        config.num_nodes,
        config.avg_node_degree,
        config.effective_outbreak_size()
    );
    println!();

    let mut engine = match SimulationEngine::new(config, args.seed) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut policy: Box<dyn RemovalPolicy> = if args.interactive {
        Box::new(InteractiveBan)
    } else {
        Box::new(NoRemoval)
    };

    // Same contract as SimulationEngine::run, stepped here so each tick
    // gets a progress line.
    let mut outcome = RunOutcome::TickBudgetExhausted;
    for _ in 0..args.ticks {
        if let Some(fired) = engine.termination() {
            outcome = fired;
            break;
        }
        if let Err(e) = engine.step(policy.as_mut()) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        println!("{}", progress_line(engine.tick(), engine.counts()));
    }
    let report = RunReport {
        outcome,
        ticks_executed: engine.tick(),
        counts: engine.counts(),
        bans: engine.bans(),
    };

    println!();
    println!("{}", outcome_message(report.outcome, report.bans));
    TextPresenter.render(engine.nodes(), engine.topology());
    println!(
        "Ran {} of {} ticks: {} bans, {} radicals, {} counter-radicals, {} citizens.",
        report.ticks_executed,
        args.ticks,
        report.bans,
        report.counts.radicalised,
        report.counts.immune,
        report.counts.citizen
    );

    if args.report_json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => tracing::warn!("could not serialize report: {}", e),
        }
    }

    if let Some(path) = &args.metrics_out {
        if let Err(e) = engine.metrics().write_series(path) {
            tracing::warn!("could not write metrics to {}: {}", path.display(), e);
        } else {
            println!("Wrote {} snapshots to {}", engine.metrics().series().len(), path.display());
        }
    }
}
