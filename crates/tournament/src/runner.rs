//! Runner for playing a configured tournament on a chosen engine

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use baseline_engine::BaselineEngine;
use indexed_engine::IndexedEngine;
use tournament_core::{
    ConfigError, FixtureId, Standings, StateError, TournamentConfig, TournamentEngine,
    TournamentError,
};

use crate::results::TournamentResults;

/// Which engine implementation to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineKind {
    Baseline,
    #[default]
    Indexed,
}

impl FromStr for EngineKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "baseline" | "base" => Ok(EngineKind::Baseline),
            "indexed" | "optimised" | "optimized" => Ok(EngineKind::Indexed),
            other => Err(format!(
                "unknown engine '{}' (expected baseline or indexed)",
                other
            )),
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineKind::Baseline => f.write_str("baseline"),
            EngineKind::Indexed => f.write_str("indexed"),
        }
    }
}

/// Initialize an engine of the requested kind
pub fn create_engine(
    kind: EngineKind,
    config: TournamentConfig,
) -> Result<Box<dyn TournamentEngine>, ConfigError> {
    Ok(match kind {
        EngineKind::Baseline => Box::new(BaselineEngine::initialize(config)?),
        EngineKind::Indexed => Box::new(IndexedEngine::initialize(config)?),
    })
}

/// Configuration for a run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Print each fixture as it is played
    pub verbose: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self { verbose: true }
    }
}

/// Plays every remaining fixture, round by round
pub struct TournamentRunner {
    config: RunConfig,
}

impl TournamentRunner {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// Play out the tournament and collect the results
    pub fn run(&self, engine: &mut dyn TournamentEngine) -> Result<TournamentResults, StateError> {
        let order = engine.play_order();
        let last_round = engine.fixtures().iter().map(|f| f.round).max().unwrap_or(0);
        let mut current_round = None;

        for id in order {
            let round = engine.fixture(id).map(|f| f.round);
            if current_round.is_some() && current_round != round {
                self.finish_round(engine, current_round, last_round);
            }
            current_round = round;

            engine.simulate_fixture(id)?;
            if self.config.verbose {
                if let Some(fixture) = engine.fixture(id) {
                    println!("{}", fixture);
                }
            }
        }
        if current_round.is_some() {
            self.finish_round(engine, current_round, last_round);
        }

        Ok(TournamentResults::from_engine(engine))
    }

    fn finish_round(&self, engine: &dyn TournamentEngine, round: Option<u32>, last_round: u32) {
        let standings = engine.standings();
        let leader = standings.leader().map(|row| row.team.as_str()).unwrap_or("-");
        tracing::info!(
            engine = engine.name(),
            round = round.unwrap_or(0),
            last_round,
            leader,
            "round complete"
        );
        if self.config.verbose {
            println!(
                "--- Round {}/{} complete, leader: {} ---",
                round.unwrap_or(0),
                last_round,
                leader
            );
        }
    }
}

/// Play the tournament on the default engine without progress output
pub fn quick_run(config: TournamentConfig) -> Result<TournamentResults, TournamentError> {
    let mut engine = create_engine(EngineKind::default(), config)?;
    let runner = TournamentRunner::new(RunConfig { verbose: false });
    Ok(runner.run(engine.as_mut())?)
}

/// Outcome of running both engines side by side
#[derive(Debug, Clone)]
pub struct EngineComparison {
    pub fixtures_compared: usize,
    /// Human-readable description of every divergence
    pub mismatches: Vec<String>,
    pub baseline_time: Duration,
    pub indexed_time: Duration,
}

impl EngineComparison {
    pub fn identical(&self) -> bool {
        self.mismatches.is_empty()
    }
}

struct Trace {
    results: Vec<(FixtureId, tournament_core::FixtureResult)>,
    snapshots: Vec<Standings>,
    elapsed: Duration,
}

/// Play `order` on `engine`, taking standings after every fixture.
fn trace(engine: &mut dyn TournamentEngine, order: &[FixtureId]) -> Result<Trace, StateError> {
    let start = Instant::now();
    let mut results = Vec::with_capacity(order.len());
    let mut snapshots = Vec::with_capacity(order.len() + 1);
    snapshots.push(engine.standings());
    for &id in order {
        results.push((id, engine.simulate_fixture(id)?));
        snapshots.push(engine.standings());
    }
    Ok(Trace {
        results,
        snapshots,
        elapsed: start.elapsed(),
    })
}

/// Run both engines on the same configuration and report any divergence
pub fn compare_engines(config: &TournamentConfig) -> Result<EngineComparison, TournamentError> {
    let mut baseline = create_engine(EngineKind::Baseline, config.clone())?;
    let mut indexed = create_engine(EngineKind::Indexed, config.clone())?;

    let order = baseline.play_order();
    let base = trace(baseline.as_mut(), &order)?;
    let fast = trace(indexed.as_mut(), &order)?;

    let mut mismatches = Vec::new();
    for ((id, expected), (_, actual)) in base.results.iter().zip(&fast.results) {
        if expected != actual {
            mismatches.push(format!(
                "fixture {}: baseline {} vs indexed {}",
                id, expected, actual
            ));
        }
    }
    for (step, (expected, actual)) in base.snapshots.iter().zip(&fast.snapshots).enumerate() {
        if expected != actual {
            mismatches.push(format!(
                "standings after {} fixtures: baseline {:?} vs indexed {:?}",
                step,
                expected.team_order(),
                actual.team_order()
            ));
        }
    }

    if !mismatches.is_empty() {
        tracing::warn!(count = mismatches.len(), "engines diverged");
    }

    Ok(EngineComparison {
        fixtures_compared: order.len(),
        mismatches,
        baseline_time: base.elapsed,
        indexed_time: fast.elapsed,
    })
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod runner_tests;
