//! Tournament configuration: typed record, file loading and validation.
//!
//! A configuration is read once from JSON or TOML and validated eagerly.
//! Unknown fields are rejected at parse time.
//!
//! Point values must be whole numbers, written either as integers or as
//! integral floats (`3` or `3.0`). A negative seed is accepted and read as
//! its two's complement `u64`.
//!
//! ```json
//! {
//!   "name": "Spring Cup",
//!   "teams": ["Ajax", { "name": "Benfica", "rating": 1620 }, "Celtic"],
//!   "scoring": { "win": 3, "draw": 1, "loss": 0 },
//!   "tie_break": "goal_difference",
//!   "seed": 42
//! }
//! ```

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use crate::elo::DEFAULT_RATING;
use crate::error::ConfigError;

pub const DEFAULT_NAME: &str = "Tournament";
pub const DEFAULT_DRAW_PROBABILITY: f64 = 0.25;
pub const DEFAULT_MAX_GOALS: u32 = 5;
/// Upper bound for `max_goals`; keeps season goal totals far from overflow
pub const MAX_GOALS: u32 = 99;

/// Points awarded per fixture outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoringRules {
    #[serde(deserialize_with = "points_value")]
    pub win: i32,
    #[serde(deserialize_with = "points_value")]
    pub draw: i32,
    #[serde(deserialize_with = "points_value")]
    pub loss: i32,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Number {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
}

fn points_value<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    let invalid = || D::Error::custom("point values must be whole numbers within i32 range");
    match Number::deserialize(deserializer)? {
        Number::Unsigned(value) => i32::try_from(value).map_err(|_| invalid()),
        Number::Signed(value) => i32::try_from(value).map_err(|_| invalid()),
        Number::Float(value) => {
            if value.fract() == 0.0 && value >= i32::MIN as f64 && value <= i32::MAX as f64 {
                Ok(value as i32)
            } else {
                Err(invalid())
            }
        }
    }
}

fn seed_value<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    match Number::deserialize(deserializer)? {
        Number::Unsigned(value) => Ok(value),
        Number::Signed(value) => Ok(value as u64),
        Number::Float(_) => Err(D::Error::custom("seed must be an integer")),
    }
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            win: 3,
            draw: 1,
            loss: 0,
        }
    }
}

/// Secondary ranking metric applied when points are level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    #[default]
    GoalDifference,
    HeadToHead,
    GoalsScored,
    Wins,
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TieBreak::GoalDifference => "goal_difference",
            TieBreak::HeadToHead => "head_to_head",
            TieBreak::GoalsScored => "goals_scored",
            TieBreak::Wins => "wins",
        };
        f.write_str(name)
    }
}

/// Schedule format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    /// Every unordered pair meets once
    #[default]
    RoundRobin,
    /// Every pair meets twice, home and away
    DoubleRoundRobin,
}

/// A team as written in the configuration: a bare name or a name with rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TeamEntry {
    Name(String),
    Rated(RatedTeam),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RatedTeam {
    pub name: String,
    #[serde(default = "default_rating")]
    pub rating: f64,
}

impl TeamEntry {
    pub fn name(&self) -> &str {
        match self {
            TeamEntry::Name(name) => name,
            TeamEntry::Rated(team) => &team.name,
        }
    }

    pub fn rating(&self) -> f64 {
        match self {
            TeamEntry::Name(_) => DEFAULT_RATING,
            TeamEntry::Rated(team) => team.rating,
        }
    }
}

impl From<&str> for TeamEntry {
    fn from(name: &str) -> Self {
        TeamEntry::Name(name.to_string())
    }
}

impl From<String> for TeamEntry {
    fn from(name: String) -> Self {
        TeamEntry::Name(name)
    }
}

/// Validated tournament configuration. Read-only once an engine owns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TournamentConfig {
    #[serde(default = "default_name")]
    pub name: String,
    pub teams: Vec<TeamEntry>,
    pub scoring: ScoringRules,
    #[serde(default)]
    pub tie_break: TieBreak,
    #[serde(default)]
    pub format: Format,
    #[serde(default, deserialize_with = "seed_value")]
    pub seed: u64,
    #[serde(default = "default_draw_probability")]
    pub draw_probability: f64,
    #[serde(default = "default_max_goals")]
    pub max_goals: u32,
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

fn default_rating() -> f64 {
    DEFAULT_RATING
}

fn default_draw_probability() -> f64 {
    DEFAULT_DRAW_PROBABILITY
}

fn default_max_goals() -> u32 {
    DEFAULT_MAX_GOALS
}

impl TournamentConfig {
    /// Configuration with default scoring (3/1/0) for the given teams.
    pub fn new<I, T>(teams: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TeamEntry>,
    {
        Self {
            name: default_name(),
            teams: teams.into_iter().map(Into::into).collect(),
            scoring: ScoringRules::default(),
            tie_break: TieBreak::default(),
            format: Format::default(),
            seed: 0,
            draw_probability: DEFAULT_DRAW_PROBABILITY,
            max_goals: DEFAULT_MAX_GOALS,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_scoring(mut self, scoring: ScoringRules) -> Self {
        self.scoring = scoring;
        self
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    pub fn with_draw_probability(mut self, draw_probability: f64) -> Self {
        self.draw_probability = draw_probability;
        self
    }

    pub fn with_max_goals(mut self, max_goals: u32) -> Self {
        self.max_goals = max_goals;
        self
    }

    /// Set the rating of an already listed team.
    pub fn with_rating(mut self, team: &str, rating: f64) -> Self {
        for entry in &mut self.teams {
            if entry.name() == team {
                *entry = TeamEntry::Rated(RatedTeam {
                    name: team.to_string(),
                    rating,
                });
            }
        }
        self
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file; the format follows the file extension.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = match extension.as_deref() {
            Some("json") => Self::from_json_str(&contents)?,
            Some("toml") => Self::from_toml_str(&contents)?,
            _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        };

        tracing::debug!(
            path = %path.display(),
            teams = config.teams.len(),
            seed = config.seed,
            tie_break = %config.tie_break,
            "loaded tournament configuration"
        );
        Ok(config)
    }

    /// Check everything serde cannot: names, ratings, probabilities.
    ///
    /// A single team passes here; engines require at least two on
    /// initialization.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.teams.is_empty() {
            return Err(ConfigError::NoTeams);
        }

        let mut seen = HashSet::with_capacity(self.teams.len());
        for entry in &self.teams {
            let name = entry.name();
            if name.trim().is_empty() {
                return Err(ConfigError::BlankTeamName);
            }
            if !seen.insert(name) {
                return Err(ConfigError::DuplicateTeam(name.to_string()));
            }
            let rating = entry.rating();
            if !rating.is_finite() || rating <= 0.0 {
                return Err(ConfigError::InvalidRating {
                    team: name.to_string(),
                    rating,
                });
            }
        }

        if !(0.0..1.0).contains(&self.draw_probability) {
            return Err(ConfigError::InvalidDrawProbability(self.draw_probability));
        }
        if !(1..=MAX_GOALS).contains(&self.max_goals) {
            return Err(ConfigError::InvalidMaxGoals(self.max_goals));
        }
        Ok(())
    }

    /// Validation plus the engine's minimum roster size.
    pub fn validate_for_engine(&self) -> Result<(), ConfigError> {
        if self.teams.len() < 2 {
            return Err(ConfigError::TooFewTeams {
                found: self.teams.len(),
            });
        }
        self.validate()
    }

    pub fn team_names(&self) -> impl Iterator<Item = &str> {
        self.teams.iter().map(TeamEntry::name)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
