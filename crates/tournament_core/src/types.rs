//! Core tournament types: teams, fixtures, results.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::ScoringRules;
use crate::error::StateError;

/// Index of a fixture in schedule insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FixtureId(pub usize);

impl fmt::Display for FixtureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Result of a fixture from one team's perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Outcome {
    /// The same result seen from the other side.
    pub fn flip(self) -> Self {
        match self {
            Outcome::Win => Outcome::Loss,
            Outcome::Loss => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Outcome::Win => 'W',
            Outcome::Draw => 'D',
            Outcome::Loss => 'L',
        }
    }
}

/// Final score of a played fixture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureResult {
    pub home_goals: u32,
    pub away_goals: u32,
}

impl FixtureResult {
    pub fn new(home_goals: u32, away_goals: u32) -> Self {
        Self {
            home_goals,
            away_goals,
        }
    }

    /// Outcome for the home side
    pub fn home_outcome(&self) -> Outcome {
        match self.home_goals.cmp(&self.away_goals) {
            std::cmp::Ordering::Greater => Outcome::Win,
            std::cmp::Ordering::Less => Outcome::Loss,
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }
}

impl fmt::Display for FixtureResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.home_goals, self.away_goals)
    }
}

/// Lifecycle of a single fixture. `Played` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FixtureStatus {
    Unplayed,
    Played,
}

/// A scheduled match between two distinct teams
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: FixtureId,
    /// 1-based round number
    pub round: u32,
    pub home: String,
    pub away: String,
    pub result: Option<FixtureResult>,
}

impl Fixture {
    pub fn new(id: FixtureId, round: u32, home: &str, away: &str) -> Self {
        Self {
            id,
            round,
            home: home.to_string(),
            away: away.to_string(),
            result: None,
        }
    }

    pub fn status(&self) -> FixtureStatus {
        if self.result.is_some() {
            FixtureStatus::Played
        } else {
            FixtureStatus::Unplayed
        }
    }

    pub fn is_played(&self) -> bool {
        self.result.is_some()
    }

    pub fn involves(&self, team: &str) -> bool {
        self.home == team || self.away == team
    }

    /// Outcome of this fixture for `team`, if played and involved.
    pub fn outcome_for(&self, team: &str) -> Option<Outcome> {
        let result = self.result?;
        if self.home == team {
            Some(result.home_outcome())
        } else if self.away == team {
            Some(result.home_outcome().flip())
        } else {
            None
        }
    }

    /// Store the result. Fails if the fixture was already played.
    pub fn record(&mut self, result: FixtureResult) -> Result<(), StateError> {
        if self.is_played() {
            return Err(StateError::AlreadyPlayed(self.id));
        }
        self.result = Some(result);
        Ok(())
    }
}

impl fmt::Display for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.result {
            Some(result) => write!(
                f,
                "R{} {} {} {} {}",
                self.round, self.id, self.home, result, self.away
            ),
            None => write!(f, "R{} {} {} vs {}", self.round, self.id, self.home, self.away),
        }
    }
}

/// Running statistics for one team
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStats {
    pub points: i64,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
}

impl TeamStats {
    pub fn goal_difference(&self) -> i64 {
        self.goals_for as i64 - self.goals_against as i64
    }

    /// Apply one played fixture to these statistics.
    pub fn record(&mut self, goals_for: u32, goals_against: u32, rules: &ScoringRules) {
        self.played += 1;
        self.goals_for += goals_for;
        self.goals_against += goals_against;
        match goals_for.cmp(&goals_against) {
            std::cmp::Ordering::Greater => {
                self.wins += 1;
                self.points += rules.win as i64;
            }
            std::cmp::Ordering::Less => {
                self.losses += 1;
                self.points += rules.loss as i64;
            }
            std::cmp::Ordering::Equal => {
                self.draws += 1;
                self.points += rules.draw as i64;
            }
        }
    }
}

/// A participant and its accumulated statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub rating: f64,
    pub stats: TeamStats,
}

impl Team {
    pub fn new(name: &str, rating: f64) -> Self {
        Self {
            name: name.to_string(),
            rating,
            stats: TeamStats::default(),
        }
    }
}

/// Engine-level progress, derived from how many fixtures have been played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    Initialized,
    Running,
    Complete,
}

impl EngineState {
    pub fn from_progress(played: usize, total: usize) -> Self {
        if played == 0 && total > 0 {
            EngineState::Initialized
        } else if played < total {
            EngineState::Running
        } else {
            EngineState::Complete
        }
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
