//! Baseline Tournament Engine
//!
//! The reference implementation of [`TournamentEngine`]:
//! - Teams are found by scanning the roster
//! - Standings are rebuilt from the full fixture history on every call
//!
//! Simple enough to trust, and used as the oracle the indexed engine is
//! checked against.

use tournament_core::standings::{self, HeadToHeadTable, RankEntry};
use tournament_core::{
    schedule, ConfigError, Fixture, FixtureId, FixtureResult, ScoringModel, Standings,
    StateError, Team, TeamStats, TournamentConfig, TournamentEngine,
};

#[cfg(test)]
mod lib_tests;

/// Tournament engine using linear scans and full recomputation.
#[derive(Debug, Clone)]
pub struct BaselineEngine {
    config: TournamentConfig,
    model: ScoringModel,
    teams: Vec<Team>,
    fixtures: Vec<Fixture>,
}

impl BaselineEngine {
    fn team_position(&self, name: &str) -> Option<usize> {
        self.teams.iter().position(|team| team.name == name)
    }
}

impl TournamentEngine for BaselineEngine {
    fn initialize(config: TournamentConfig) -> Result<Self, ConfigError> {
        config.validate_for_engine()?;

        let teams: Vec<Team> = config
            .teams
            .iter()
            .map(|entry| Team::new(entry.name(), entry.rating()))
            .collect();
        let fixtures = schedule::generate(&config);
        let model = ScoringModel::from_config(&config);

        tracing::info!(
            engine = "baseline",
            tournament = %config.name,
            teams = teams.len(),
            fixtures = fixtures.len(),
            "tournament initialized"
        );

        Ok(Self {
            config,
            model,
            teams,
            fixtures,
        })
    }

    fn name(&self) -> &str {
        "baseline"
    }

    fn config(&self) -> &TournamentConfig {
        &self.config
    }

    fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }

    fn teams(&self) -> &[Team] {
        &self.teams
    }

    fn team(&self, name: &str) -> Option<&Team> {
        self.teams.iter().find(|team| team.name == name)
    }

    fn simulate_fixture(&mut self, id: FixtureId) -> Result<FixtureResult, StateError> {
        let fixture = self
            .fixtures
            .get(id.0)
            .ok_or(StateError::UnknownFixture(id))?;
        if fixture.is_played() {
            return Err(StateError::AlreadyPlayed(id));
        }

        // Schedule only references roster teams
        let home = self
            .team_position(&fixture.home)
            .ok_or(StateError::UnknownFixture(id))?;
        let away = self
            .team_position(&fixture.away)
            .ok_or(StateError::UnknownFixture(id))?;

        let result = self
            .model
            .play(fixture, self.teams[home].rating, self.teams[away].rating);

        self.fixtures[id.0].record(result)?;
        let rules = self.config.scoring;
        self.teams[home]
            .stats
            .record(result.home_goals, result.away_goals, &rules);
        self.teams[away]
            .stats
            .record(result.away_goals, result.home_goals, &rules);

        tracing::debug!(
            fixture = %self.fixtures[id.0],
            "fixture played"
        );
        if self.fixtures.iter().all(Fixture::is_played) {
            tracing::info!(engine = "baseline", tournament = %self.config.name, "tournament complete");
        }
        Ok(result)
    }

    fn standings(&self) -> Standings {
        let rules = self.config.scoring;
        let mut stats = vec![TeamStats::default(); self.teams.len()];
        let mut h2h = HeadToHeadTable::new(self.teams.len());

        for fixture in &self.fixtures {
            let Some(result) = fixture.result else {
                continue;
            };
            let (Some(home), Some(away)) = (
                self.team_position(&fixture.home),
                self.team_position(&fixture.away),
            ) else {
                continue;
            };
            stats[home].record(result.home_goals, result.away_goals, &rules);
            stats[away].record(result.away_goals, result.home_goals, &rules);
            h2h.record(home, away, result, &rules);
        }

        let entries = self
            .teams
            .iter()
            .zip(stats)
            .enumerate()
            .map(|(index, (team, stats))| RankEntry {
                index,
                name: team.name.clone(),
                stats,
            })
            .collect();

        standings::rank(entries, self.config.tie_break, &h2h)
    }
}
