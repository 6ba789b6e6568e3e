//! Ranking: turns team statistics into an ordered standings table.
//!
//! Order is points (desc), then the configured tie-break metric (desc), then
//! team name (asc). Names are unique, so the result is a total order.
//!
//! `head_to_head` is evaluated per group of teams level on points: each
//! team's metric is the points it took from fixtures against the other
//! members of its group. Evaluating the group as a mini-league keeps the
//! order transitive even when three teams beat each other in a cycle.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::config::{ScoringRules, TieBreak};
use crate::types::{FixtureResult, TeamStats};

/// Points each team took off each other team, indexed by roster position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadToHeadTable {
    teams: usize,
    points: Vec<i64>,
}

impl HeadToHeadTable {
    pub fn new(teams: usize) -> Self {
        Self {
            teams,
            points: vec![0; teams * teams],
        }
    }

    pub fn record(&mut self, home: usize, away: usize, result: FixtureResult, rules: &ScoringRules) {
        let (home_points, away_points) = match result.home_goals.cmp(&result.away_goals) {
            Ordering::Greater => (rules.win, rules.loss),
            Ordering::Less => (rules.loss, rules.win),
            Ordering::Equal => (rules.draw, rules.draw),
        };
        self.points[home * self.teams + away] += home_points as i64;
        self.points[away * self.teams + home] += away_points as i64;
    }

    /// Points `team` earned against `opponent`
    pub fn points(&self, team: usize, opponent: usize) -> i64 {
        self.points[team * self.teams + opponent]
    }
}

/// A team waiting to be ranked
#[derive(Debug, Clone, PartialEq)]
pub struct RankEntry {
    /// Position in the configured roster
    pub index: usize,
    pub name: String,
    pub stats: TeamStats,
}

/// Tie-break value that does not depend on other teams.
/// Head-to-head is resolved per group and reads as zero here.
pub fn metric(stats: &TeamStats, tie_break: TieBreak) -> i64 {
    match tie_break {
        TieBreak::GoalDifference => stats.goal_difference(),
        TieBreak::GoalsScored => stats.goals_for as i64,
        TieBreak::Wins => stats.wins as i64,
        TieBreak::HeadToHead => 0,
    }
}

/// Ordering before head-to-head groups are resolved. `Less` ranks higher.
pub fn compare_teams(
    a: (&str, &TeamStats),
    b: (&str, &TeamStats),
    tie_break: TieBreak,
) -> Ordering {
    let ((a_name, a_stats), (b_name, b_stats)) = (a, b);
    b_stats
        .points
        .cmp(&a_stats.points)
        .then_with(|| metric(b_stats, tie_break).cmp(&metric(a_stats, tie_break)))
        .then_with(|| a_name.cmp(b_name))
}

pub fn compare(a: &RankEntry, b: &RankEntry, tie_break: TieBreak) -> Ordering {
    compare_teams((a.name.as_str(), &a.stats), (b.name.as_str(), &b.stats), tie_break)
}

/// Sort entries and build the table.
pub fn rank(mut entries: Vec<RankEntry>, tie_break: TieBreak, h2h: &HeadToHeadTable) -> Standings {
    entries.sort_by(|a, b| compare(a, b, tie_break));
    finalize(entries, tie_break, h2h)
}

/// Build the table from entries already ordered by [`compare`].
pub fn finalize(mut entries: Vec<RankEntry>, tie_break: TieBreak, h2h: &HeadToHeadTable) -> Standings {
    let values = if tie_break == TieBreak::HeadToHead {
        resolve_head_to_head(&mut entries, h2h)
    } else {
        entries.iter().map(|e| metric(&e.stats, tie_break)).collect()
    };

    let rows = entries
        .into_iter()
        .zip(values)
        .enumerate()
        .map(|(i, (entry, tie_break_value))| StandingRow {
            position: i + 1,
            team: entry.name,
            stats: entry.stats,
            tie_break_value,
        })
        .collect();

    Standings { tie_break, rows }
}

/// Reorder each run of equal points by mini-league points, then name.
/// Returns the head-to-head value of every entry in the new order.
fn resolve_head_to_head(entries: &mut [RankEntry], h2h: &HeadToHeadTable) -> Vec<i64> {
    let mut values = vec![0; entries.len()];
    let mut start = 0;
    while start < entries.len() {
        let points = entries[start].stats.points;
        let end = entries[start..]
            .iter()
            .position(|e| e.stats.points != points)
            .map_or(entries.len(), |offset| start + offset);

        let group = &mut entries[start..end];
        if group.len() > 1 {
            let members: Vec<usize> = group.iter().map(|e| e.index).collect();
            let mut keyed: Vec<(i64, RankEntry)> = group
                .iter()
                .map(|e| {
                    let value = members
                        .iter()
                        .filter(|&&other| other != e.index)
                        .map(|&other| h2h.points(e.index, other))
                        .sum();
                    (value, e.clone())
                })
                .collect();
            keyed.sort_by(|(va, a), (vb, b)| vb.cmp(va).then_with(|| a.name.cmp(&b.name)));
            for (offset, (value, entry)) in keyed.into_iter().enumerate() {
                values[start + offset] = value;
                group[offset] = entry;
            }
        }
        start = end;
    }
    values
}

/// One line of the standings table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingRow {
    /// 1-based rank
    pub position: usize,
    pub team: String,
    pub stats: TeamStats,
    pub tie_break_value: i64,
}

/// Ranked table of all teams
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standings {
    pub tie_break: TieBreak,
    pub rows: Vec<StandingRow>,
}

impl Standings {
    pub fn leader(&self) -> Option<&StandingRow> {
        self.rows.first()
    }

    pub fn row(&self, team: &str) -> Option<&StandingRow> {
        self.rows.iter().find(|row| row.team == team)
    }

    pub fn position_of(&self, team: &str) -> Option<usize> {
        self.row(team).map(|row| row.position)
    }

    pub fn team_order(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.team.as_str()).collect()
    }
}

impl fmt::Display for Standings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>3} {:<20} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>6} {:>5}",
            "#", "Team", "P", "W", "D", "L", "GF", "GA", "TB", "Pts"
        )?;
        writeln!(f, "{}", "-".repeat(64))?;
        for row in &self.rows {
            let s = &row.stats;
            writeln!(
                f,
                "{:>3} {:<20} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>6} {:>5}",
                row.position,
                row.team,
                s.played,
                s.wins,
                s.draws,
                s.losses,
                s.goals_for,
                s.goals_against,
                row.tie_break_value,
                s.points
            )?;
        }
        write!(f, "tie-break: {}", self.tie_break)
    }
}

#[cfg(test)]
#[path = "standings_tests.rs"]
mod standings_tests;
