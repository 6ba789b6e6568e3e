//! Error types for configuration loading and engine state transitions.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::FixtureId;

/// Malformed or insufficient configuration. Fatal to initialization.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unsupported configuration format for {0} (expected .json or .toml)")]
    UnsupportedFormat(PathBuf),

    #[error("team list is empty")]
    NoTeams,

    #[error("at least two teams are required, found {found}")]
    TooFewTeams { found: usize },

    #[error("team names must not be blank")]
    BlankTeamName,

    #[error("team '{0}' is listed more than once")]
    DuplicateTeam(String),

    #[error("team '{team}' has invalid rating {rating} (must be finite and positive)")]
    InvalidRating { team: String, rating: f64 },

    #[error("draw probability {0} is outside [0, 1)")]
    InvalidDrawProbability(f64),

    #[error("max_goals {0} is outside 1..={max}", max = crate::config::MAX_GOALS)]
    InvalidMaxGoals(u32),
}

/// Operation not valid for the current fixture or engine state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("fixture {0} does not exist")]
    UnknownFixture(FixtureId),

    #[error("fixture {0} has already been played")]
    AlreadyPlayed(FixtureId),
}

/// Either failure kind, for callers driving a whole tournament.
#[derive(Debug, Error)]
pub enum TournamentError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    State(#[from] StateError),
}
