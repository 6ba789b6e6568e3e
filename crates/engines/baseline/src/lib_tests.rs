use super::*;
use tournament_core::{EngineState, Format, Outcome, ScoringRules, TieBreak};

fn example_config() -> TournamentConfig {
    TournamentConfig::new(["A", "B", "C"])
        .with_scoring(ScoringRules {
            win: 3,
            draw: 1,
            loss: 0,
        })
        .with_seed(42)
}

fn roster(n: usize) -> TournamentConfig {
    TournamentConfig::new((0..n).map(|i| format!("Team{}", i)))
}

#[test]
fn baseline_example_schedule() {
    let engine = BaselineEngine::initialize(example_config()).unwrap();
    let pairs: Vec<(&str, &str)> = engine
        .fixtures()
        .iter()
        .map(|f| (f.home.as_str(), f.away.as_str()))
        .collect();
    assert_eq!(pairs, vec![("A", "B"), ("A", "C"), ("B", "C")]);
    assert_eq!(engine.state(), EngineState::Initialized);
    assert!(engine.teams().iter().all(|t| t.stats == TeamStats::default()));
}

#[test]
fn baseline_example_run_is_reproducible() {
    let mut first = BaselineEngine::initialize(example_config()).unwrap();
    assert_eq!(first.run_all().unwrap(), 3);
    let standings = first.standings();

    let mut order = standings.team_order();
    order.sort();
    assert_eq!(order, vec!["A", "B", "C"]);

    for _ in 0..5 {
        let mut again = BaselineEngine::initialize(example_config()).unwrap();
        again.run_all().unwrap();
        assert_eq!(again.standings(), standings);
        assert_eq!(again.fixtures(), first.fixtures());
    }
}

#[test]
fn baseline_rejects_small_rosters() {
    for n in 0..2 {
        let err = BaselineEngine::initialize(roster(n)).unwrap_err();
        assert!(matches!(err, ConfigError::TooFewTeams { found } if found == n));
    }
    let engine = BaselineEngine::initialize(roster(2)).unwrap();
    assert_eq!(engine.fixtures().len(), 1);
}

#[test]
fn baseline_double_play_is_state_error() {
    let mut engine = BaselineEngine::initialize(example_config()).unwrap();
    let first = engine.simulate_fixture(FixtureId(1)).unwrap();
    assert_eq!(engine.fixture(FixtureId(1)).unwrap().result, Some(first));
    assert_eq!(engine.state(), EngineState::Running);

    let err = engine.simulate_fixture(FixtureId(1)).unwrap_err();
    assert_eq!(err, StateError::AlreadyPlayed(FixtureId(1)));

    // Statistics were applied once only
    let played: u32 = engine.teams().iter().map(|t| t.stats.played).sum();
    assert_eq!(played, 2);
}

#[test]
fn baseline_unknown_fixture_is_state_error() {
    let mut engine = BaselineEngine::initialize(example_config()).unwrap();
    let err = engine.simulate_fixture(FixtureId(99)).unwrap_err();
    assert_eq!(err, StateError::UnknownFixture(FixtureId(99)));
    assert_eq!(engine.state(), EngineState::Initialized);
}

#[test]
fn baseline_run_all_completes_and_is_idempotent() {
    let n = 7;
    let mut engine = BaselineEngine::initialize(roster(n).with_seed(9)).unwrap();
    engine.run_all().unwrap();
    assert_eq!(engine.state(), EngineState::Complete);
    let standings = engine.standings();

    // Nothing left to play
    assert_eq!(engine.run_all().unwrap(), 0);
    assert_eq!(engine.standings(), standings);

    let wins: u32 = engine.teams().iter().map(|t| t.stats.wins).sum();
    let losses: u32 = engine.teams().iter().map(|t| t.stats.losses).sum();
    assert_eq!(wins, losses);

    for row in &standings.rows {
        let s = &row.stats;
        assert_eq!(s.wins + s.draws + s.losses, (n - 1) as u32, "{}", row.team);
    }
}

#[test]
fn baseline_standings_match_team_records() {
    let mut engine = BaselineEngine::initialize(roster(6).with_seed(3)).unwrap();
    let order = engine.play_order();
    for id in order.iter().take(7) {
        engine.simulate_fixture(*id).unwrap();
    }

    let standings = engine.standings();
    for row in &standings.rows {
        assert_eq!(row.stats, engine.team(&row.team).unwrap().stats);
    }
}

#[test]
fn baseline_partial_standings_cover_all_teams() {
    let mut engine = BaselineEngine::initialize(roster(4)).unwrap();
    let before = engine.standings();
    assert_eq!(before.rows.len(), 4);
    assert!(before.rows.iter().all(|r| r.stats.points == 0));
    // All level, so names decide
    assert_eq!(before.team_order(), vec!["Team0", "Team1", "Team2", "Team3"]);

    let id = engine.play_order()[0];
    engine.simulate_fixture(id).unwrap();
    assert_eq!(engine.standings().rows.len(), 4);
}

#[test]
fn baseline_points_follow_scoring_rules() {
    let rules = ScoringRules {
        win: 2,
        draw: 1,
        loss: -1,
    };
    let mut engine =
        BaselineEngine::initialize(roster(5).with_scoring(rules).with_seed(11)).unwrap();
    engine.run_all().unwrap();
    for team in engine.teams() {
        let s = &team.stats;
        let expected = 2 * s.wins as i64 + s.draws as i64 - s.losses as i64;
        assert_eq!(s.points, expected);
    }
}

#[test]
fn baseline_form_follows_round_order() {
    let mut engine = BaselineEngine::initialize(roster(4).with_seed(5)).unwrap();
    engine.run_all().unwrap();
    for team in engine.teams() {
        let form = engine.form(&team.name);
        assert_eq!(form.len(), 3);
        let wins = form.iter().filter(|o| **o == Outcome::Win).count() as u32;
        assert_eq!(wins, team.stats.wins);
    }
}

#[test]
fn baseline_head_to_head_standings_are_total() {
    let config = roster(8)
        .with_seed(21)
        .with_tie_break(TieBreak::HeadToHead)
        .with_draw_probability(0.6)
        .with_max_goals(1);
    let mut engine = BaselineEngine::initialize(config).unwrap();
    engine.run_all().unwrap();
    let standings = engine.standings();

    let mut names = standings.team_order();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), 8);
    for pair in standings.rows.windows(2) {
        assert!(pair[0].stats.points >= pair[1].stats.points);
    }
}

#[test]
fn baseline_rejects_unbounded_goal_limit() {
    let config = roster(6).with_seed(1).with_max_goals(u32::MAX);
    assert!(matches!(
        BaselineEngine::initialize(config),
        Err(ConfigError::InvalidMaxGoals(u32::MAX))
    ));

    let config = roster(6)
        .with_seed(1)
        .with_max_goals(tournament_core::MAX_GOALS)
        .with_format(Format::DoubleRoundRobin);
    let mut engine = BaselineEngine::initialize(config).unwrap();
    engine.run_all().unwrap();
    let goals_for: u32 = engine.teams().iter().map(|t| t.stats.goals_for).sum();
    let goals_against: u32 = engine.teams().iter().map(|t| t.stats.goals_against).sum();
    assert_eq!(goals_for, goals_against);
}
