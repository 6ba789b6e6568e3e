//! Indexed Tournament Engine
//!
//! Same contract as the baseline engine, but keeps lookup structures up to
//! date as fixtures are played instead of rescanning:
//! - `HashMap` from team identifier to roster index
//! - Per-team statistics and a head-to-head points matrix
//! - A ranking of roster indices plus each team's position in it
//!
//! Playing a fixture repositions the two teams involved in O(N);
//! `standings()` walks the ranking in O(N). With the `head_to_head`
//! tie-break, teams level on points are additionally ordered within their
//! group at read time.

use std::cmp::Ordering;
use std::collections::HashMap;

use tournament_core::standings::{self, HeadToHeadTable, RankEntry};
use tournament_core::{
    schedule, ConfigError, Fixture, FixtureId, FixtureResult, ScoringModel, Standings,
    StateError, Team, TournamentConfig, TournamentEngine,
};


/// Tournament engine with incrementally maintained ranking.
#[derive(Debug, Clone)]
pub struct IndexedEngine {
    config: TournamentConfig,
    model: ScoringModel,
    teams: Vec<Team>,
    fixtures: Vec<Fixture>,
    /// Team identifier -> roster index
    index: HashMap<String, usize>,
    /// Roster indices, best first
    ranking: Vec<usize>,
    /// Roster index -> position in `ranking`
    rank_of: Vec<usize>,
    h2h: HeadToHeadTable,
    played: usize,
}

impl IndexedEngine {
    fn compare(&self, a: usize, b: usize) -> Ordering {
        let (ta, tb) = (&self.teams[a], &self.teams[b]);
        standings::compare_teams(
            (ta.name.as_str(), &ta.stats),
            (tb.name.as_str(), &tb.stats),
            self.config.tie_break,
        )
    }

    /// Move the two teams whose statistics just changed to their new slots.
    fn reposition(&mut self, home: usize, away: usize) {
        self.ranking.retain(|&team| team != home && team != away);
        for team in [home, away] {
            let slot = self
                .ranking
                .partition_point(|&other| self.compare(other, team) == Ordering::Less);
            self.ranking.insert(slot, team);
        }
        for (position, &team) in self.ranking.iter().enumerate() {
            self.rank_of[team] = position;
        }
    }

    /// 1-based position of `team` in the maintained ranking.
    ///
    /// Equal to the standings position except inside head-to-head groups,
    /// which are ordered when standings are built.
    pub fn rank_position(&self, team: &str) -> Option<usize> {
        self.index.get(team).map(|&i| self.rank_of[i] + 1)
    }
}

impl TournamentEngine for IndexedEngine {
    fn initialize(config: TournamentConfig) -> Result<Self, ConfigError> {
        config.validate_for_engine()?;

        let teams: Vec<Team> = config
            .teams
            .iter()
            .map(|entry| Team::new(entry.name(), entry.rating()))
            .collect();
        let index = teams
            .iter()
            .enumerate()
            .map(|(i, team)| (team.name.clone(), i))
            .collect();
        let fixtures = schedule::generate(&config);
        let model = ScoringModel::from_config(&config);
        let h2h = HeadToHeadTable::new(teams.len());

        tracing::info!(
            engine = "indexed",
            tournament = %config.name,
            teams = teams.len(),
            fixtures = fixtures.len(),
            "tournament initialized"
        );

        let mut engine = Self {
            config,
            model,
            rank_of: vec![0; teams.len()],
            ranking: (0..teams.len()).collect(),
            teams,
            fixtures,
            index,
            h2h,
            played: 0,
        };
        // Everyone is on zero, so names decide the opening order
        let mut ranking = std::mem::take(&mut engine.ranking);
        ranking.sort_by(|&a, &b| engine.compare(a, b));
        for (position, &team) in ranking.iter().enumerate() {
            engine.rank_of[team] = position;
        }
        engine.ranking = ranking;
        Ok(engine)
    }

    fn name(&self) -> &str {
        "indexed"
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
        self.index.get(name).map(|&i| &self.teams[i])
    }

    fn simulate_fixture(&mut self, id: FixtureId) -> Result<FixtureResult, StateError> {
        let fixture = self
            .fixtures
            .get(id.0)
            .ok_or(StateError::UnknownFixture(id))?;
        if fixture.is_played() {
            return Err(StateError::AlreadyPlayed(id));
        }

        let (Some(&home), Some(&away)) = (self.index.get(&fixture.home), self.index.get(&fixture.away))
        else {
            return Err(StateError::UnknownFixture(id));
        };

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
        self.h2h.record(home, away, result, &rules);
        self.reposition(home, away);
        self.played += 1;

        tracing::debug!(
            fixture = %self.fixtures[id.0],
            leader = %self.teams[self.ranking[0]].name,
            "fixture played"
        );
        if self.played == self.fixtures.len() {
            tracing::info!(engine = "indexed", tournament = %self.config.name, "tournament complete");
        }
        Ok(result)
    }

    fn standings(&self) -> Standings {
        let entries = self
            .ranking
            .iter()
            .map(|&i| RankEntry {
                index: i,
                name: self.teams[i].name.clone(),
                stats: self.teams[i].stats,
            })
            .collect();
        standings::finalize(entries, self.config.tie_break, &self.h2h)
    }

    fn state(&self) -> tournament_core::EngineState {
        tournament_core::EngineState::from_progress(self.played, self.fixtures.len())
    }
}
