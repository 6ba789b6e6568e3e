//! Tournament CLI
//!
//! Play a configured tournament, print its schedule, or check that both
//! engines agree.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use tournament::{compare_engines, create_engine, EngineKind, RunConfig, TournamentRunner};
use tournament_core::{TournamentConfig, TournamentEngine};

#[derive(Parser)]
#[command(name = "tournament")]
#[command(about = "Simulate a seeded round-robin tournament", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play every fixture and print the final report
    Run {
        /// Configuration file (.json or .toml)
        config: PathBuf,

        /// Engine implementation: baseline or indexed
        #[arg(long, default_value = "indexed")]
        engine: EngineKind,

        /// Override the configured seed
        #[arg(long)]
        seed: Option<u64>,

        /// Write results as JSON
        #[arg(long)]
        out: Option<PathBuf>,

        /// Only print the final report
        #[arg(long, short)]
        quiet: bool,
    },

    /// Print the fixture schedule without playing it
    Schedule {
        /// Configuration file (.json or .toml)
        config: PathBuf,
    },

    /// Run both engines and report any divergence
    Compare {
        /// Configuration file (.json or .toml)
        config: PathBuf,

        /// Override the configured seed
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn load_config(path: &Path, seed: Option<u64>) -> Result<TournamentConfig> {
    let config = TournamentConfig::load(path)
        .with_context(|| format!("loading configuration from {}", path.display()))?;
    Ok(match seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    })
}

fn run(
    config: TournamentConfig,
    engine: EngineKind,
    out: Option<PathBuf>,
    quiet: bool,
) -> Result<()> {
    println!("=== {}: {} teams, {} engine ===", config.name, config.teams.len(), engine);
    println!();

    let mut engine = create_engine(engine, config)?;
    let runner = TournamentRunner::new(RunConfig { verbose: !quiet });
    let results = runner.run(engine.as_mut())?;

    println!();
    results.print_report();

    if let Some(path) = out {
        results
            .save(&path)
            .with_context(|| format!("saving results to {}", path.display()))?;
        println!("Results written to {}", path.display());
    }
    Ok(())
}

fn show_schedule(config: TournamentConfig) -> Result<()> {
    let engine = create_engine(EngineKind::default(), config)?;
    println!("=== Schedule: {} ===", engine.config().name);
    for id in engine.play_order() {
        if let Some(fixture) = engine.fixture(id) {
            println!("{}", fixture);
        }
    }
    Ok(())
}

fn compare(config: TournamentConfig) -> Result<()> {
    let comparison = compare_engines(&config)?;

    println!("=== Engine comparison: {} ===", config.name);
    println!("Fixtures compared: {}", comparison.fixtures_compared);
    println!("Baseline: {:?}", comparison.baseline_time);
    println!("Indexed:  {:?}", comparison.indexed_time);

    if !comparison.identical() {
        for mismatch in &comparison.mismatches {
            eprintln!("{}", mismatch);
        }
        bail!("engines diverged in {} places", comparison.mismatches.len());
    }
    println!("Engines agree on every fixture and standings snapshot");
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            engine,
            seed,
            out,
            quiet,
        } => run(load_config(&config, seed)?, engine, out, quiet),
        Commands::Schedule { config } => show_schedule(load_config(&config, None)?),
        Commands::Compare { config, seed } => compare(load_config(&config, seed)?),
    }
}
