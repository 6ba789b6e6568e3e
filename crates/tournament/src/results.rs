//! Tournament results storage and reporting

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

use tournament_core::{Fixture, Outcome, Standings, TieBreak, TournamentEngine};

#[derive(Debug, Error)]
pub enum ResultsError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to (de)serialize results: {0}")]
    Json(#[from] serde_json::Error),
}

/// A team's W/D/L sequence in round order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WinRecord {
    pub team: String,
    pub form: Vec<Outcome>,
}

impl WinRecord {
    pub fn form_string(&self) -> String {
        self.form.iter().map(|o| o.symbol()).collect()
    }
}

/// Complete tournament results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentResults {
    /// Name of the tournament
    pub name: String,
    /// Engine that produced the results
    pub engine: String,
    pub seed: u64,
    pub tie_break: TieBreak,
    /// All fixtures, played or not, in insertion order
    pub fixtures: Vec<Fixture>,
    pub standings: Standings,
    /// Win record per team, in configured team order
    pub win_records: Vec<WinRecord>,
}

impl TournamentResults {
    /// Snapshot the current state of an engine
    pub fn from_engine(engine: &dyn TournamentEngine) -> Self {
        let config = engine.config();
        let win_records = config
            .team_names()
            .map(|team| WinRecord {
                team: team.to_string(),
                form: engine.form(team),
            })
            .collect();

        Self {
            name: config.name.clone(),
            engine: engine.name().to_string(),
            seed: config.seed,
            tie_break: config.tie_break,
            fixtures: engine.fixtures().to_vec(),
            standings: engine.standings(),
            win_records,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.fixtures.iter().all(Fixture::is_played)
    }

    /// Top of the table once every fixture has been played
    pub fn champion(&self) -> Option<&str> {
        if !self.is_complete() {
            return None;
        }
        self.standings.leader().map(|row| row.team.as_str())
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<(), ResultsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| ResultsError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self, ResultsError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ResultsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== {} ===\n\n", self));
        report.push_str(&format!(
            "Engine: {}, seed {}, tie-break {}\n\n",
            self.engine, self.seed, self.tie_break
        ));

        report.push_str("Fixtures:\n");
        for fixture in &self.fixtures {
            report.push_str(&format!("  {}\n", fixture));
        }
        report.push('\n');

        report.push_str("Standings:\n");
        report.push_str(&self.standings.to_string());
        report.push_str("\n\n");

        report.push_str("Win record:\n");
        for record in &self.win_records {
            report.push_str(&format!("{:>20}: {}\n", record.team, record.form_string()));
        }

        if let Some(champion) = self.champion() {
            report.push_str(&format!("\nChampion: {}\n", champion));
        }
        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

impl fmt::Display for TournamentResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Tournament with {} teams",
            self.name,
            self.standings.rows.len()
        )
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
