pub mod config;
pub mod elo;
pub mod error;
pub mod schedule;
pub mod scoring;
pub mod standings;
pub mod types;

pub use config::*;
pub use elo::{expected_score, DEFAULT_RATING};
pub use error::*;
pub use scoring::ScoringModel;
pub use standings::{HeadToHeadTable, RankEntry, StandingRow, Standings};
pub use types::*;

// =============================================================================
// Engine trait — implemented by every tournament engine (baseline, indexed)
// =============================================================================

/// Shared contract of all tournament engines.
///
/// Engines differ only in how they store and look up team state; for the
/// same configuration they must produce identical fixture results and
/// standings after any sequence of operations.
pub trait TournamentEngine {
    /// Build teams with zeroed statistics and the full fixture schedule.
    ///
    /// Fails with [`ConfigError::TooFewTeams`] for fewer than two teams, or
    /// any other [`ConfigError`] the configuration does not pass.
    fn initialize(config: TournamentConfig) -> Result<Self, ConfigError>
    where
        Self: Sized;

    /// Short engine identifier
    fn name(&self) -> &str;

    fn config(&self) -> &TournamentConfig;

    /// All fixtures in insertion order (indexable by `FixtureId`)
    fn fixtures(&self) -> &[Fixture];

    fn teams(&self) -> &[Team];

    /// Look up a team by identifier
    fn team(&self, name: &str) -> Option<&Team>;

    /// Play one unplayed fixture and update both teams exactly once.
    fn simulate_fixture(&mut self, id: FixtureId) -> Result<FixtureResult, StateError>;

    /// Current ranked table. Never mutates engine state.
    fn standings(&self) -> Standings;

    fn fixture(&self, id: FixtureId) -> Option<&Fixture> {
        self.fixtures().get(id.0)
    }

    fn state(&self) -> EngineState {
        let fixtures = self.fixtures();
        let played = fixtures.iter().filter(|f| f.is_played()).count();
        EngineState::from_progress(played, fixtures.len())
    }

    /// Unplayed fixtures in the order `run_all` plays them
    fn play_order(&self) -> Vec<FixtureId> {
        schedule::play_order(self.fixtures())
    }

    /// Play every remaining fixture. Returns how many were played.
    fn run_all(&mut self) -> Result<usize, StateError> {
        let order = self.play_order();
        for &id in &order {
            self.simulate_fixture(id)?;
        }
        Ok(order.len())
    }

    /// Win record of `team` over played fixtures, in round order
    fn form(&self, team: &str) -> Vec<Outcome> {
        let mut played: Vec<&Fixture> = self
            .fixtures()
            .iter()
            .filter(|f| f.is_played() && f.involves(team))
            .collect();
        played.sort_by_key(|f| (f.round, f.id));
        played.iter().filter_map(|f| f.outcome_for(team)).collect()
    }
}
