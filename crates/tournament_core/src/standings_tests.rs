use super::*;

fn entry(index: usize, name: &str, points: i64, goals_for: u32, goals_against: u32) -> RankEntry {
    RankEntry {
        index,
        name: name.to_string(),
        stats: TeamStats {
            points,
            goals_for,
            goals_against,
            ..TeamStats::default()
        },
    }
}

#[test]
fn test_points_then_goal_difference_then_name() {
    let entries = vec![
        entry(0, "Delta", 4, 3, 3),
        entry(1, "Alpha", 6, 2, 1),
        entry(2, "Charlie", 4, 5, 1),
        entry(3, "Bravo", 4, 3, 3),
    ];
    let standings = rank(entries, TieBreak::GoalDifference, &HeadToHeadTable::new(4));

    assert_eq!(standings.team_order(), vec!["Alpha", "Charlie", "Bravo", "Delta"]);
    let positions: Vec<usize> = standings.rows.iter().map(|r| r.position).collect();
    assert_eq!(positions, vec![1, 2, 3, 4]);
    assert_eq!(standings.rows[1].tie_break_value, 4);
    assert_eq!(standings.leader().unwrap().team, "Alpha");
    assert_eq!(standings.position_of("Delta"), Some(4));
}

#[test]
fn test_goals_scored_tie_break() {
    let entries = vec![entry(0, "A", 3, 1, 0), entry(1, "B", 3, 4, 4)];
    let standings = rank(entries, TieBreak::GoalsScored, &HeadToHeadTable::new(2));
    assert_eq!(standings.team_order(), vec!["B", "A"]);
}

#[test]
fn test_head_to_head_pair() {
    let rules = ScoringRules::default();
    let mut h2h = HeadToHeadTable::new(3);
    // B beat A; A has the better goal difference overall
    h2h.record(0, 1, FixtureResult::new(0, 1), &rules);

    let entries = vec![
        entry(0, "A", 3, 9, 1),
        entry(1, "B", 3, 2, 2),
        entry(2, "C", 1, 0, 0),
    ];
    let standings = rank(entries, TieBreak::HeadToHead, &h2h);
    assert_eq!(standings.team_order(), vec!["B", "A", "C"]);
    assert_eq!(standings.rows[0].tie_break_value, 3);
    assert_eq!(standings.rows[1].tie_break_value, 0);
}

#[test]
fn test_head_to_head_cycle_falls_back_to_name() {
    let rules = ScoringRules::default();
    let mut h2h = HeadToHeadTable::new(3);
    // A beats B, B beats C, C beats A
    h2h.record(0, 1, FixtureResult::new(1, 0), &rules);
    h2h.record(1, 2, FixtureResult::new(1, 0), &rules);
    h2h.record(2, 0, FixtureResult::new(1, 0), &rules);

    let entries = vec![entry(2, "C", 3, 1, 1), entry(0, "A", 3, 1, 1), entry(1, "B", 3, 1, 1)];
    let standings = rank(entries, TieBreak::HeadToHead, &h2h);
    assert_eq!(standings.team_order(), vec!["A", "B", "C"]);
    assert!(standings.rows.iter().all(|r| r.tie_break_value == 3));
}

#[test]
fn test_head_to_head_ignores_results_outside_group() {
    let rules = ScoringRules::default();
    let mut h2h = HeadToHeadTable::new(3);
    // C (not level on points) lost to B only
    h2h.record(1, 2, FixtureResult::new(2, 0), &rules);
    h2h.record(0, 1, FixtureResult::new(1, 1), &rules);

    let entries = vec![entry(0, "A", 4, 1, 1), entry(1, "B", 4, 3, 1), entry(2, "C", 0, 0, 2)];
    let standings = rank(entries, TieBreak::HeadToHead, &h2h);
    // Level on mutual points, so name decides
    assert_eq!(standings.team_order(), vec!["A", "B", "C"]);
    assert_eq!(standings.rows[0].tie_break_value, 1);
    assert_eq!(standings.rows[1].tie_break_value, 1);
}

#[test]
fn test_display_lists_every_team() {
    let entries = vec![entry(0, "A", 3, 1, 0), entry(1, "B", 0, 0, 1)];
    let text = rank(entries, TieBreak::GoalDifference, &HeadToHeadTable::new(2)).to_string();
    assert!(text.contains("Pts"));
    assert!(text.lines().any(|l| l.contains(" A ")));
    assert!(text.ends_with("tie-break: goal_difference"));
}
