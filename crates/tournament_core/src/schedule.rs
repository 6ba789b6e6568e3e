//! Fixture schedule generation.
//!
//! Fixtures are inserted in nested-loop order over the configured team list
//! (`i < j`, the earlier team at home), so ids are stable and easy to
//! predict. Rounds are assigned with the circle method: with `m` teams
//! (rounded up to even) and `k = m - 1` rounds per cycle, pair `(i, j)`
//! plays in round `(i + j) mod k` unless `j` is the pivot `k`, in which
//! case it plays in round `2i mod k`. Every team appears at most once per
//! round; with an odd roster the pivot is a bye.

use crate::config::{Format, TournamentConfig};
use crate::types::{Fixture, FixtureId};

/// Number of rounds in one full cycle for `n` teams.
pub fn rounds_per_cycle(n: usize) -> u32 {
    if n < 2 {
        return 0;
    }
    let even = n + n % 2;
    (even - 1) as u32
}

/// 1-based round of the pairing `(i, j)` with `i < j` in a roster of `n`.
fn circle_round(i: usize, j: usize, n: usize) -> u32 {
    let k = rounds_per_cycle(n) as usize;
    let zero_based = if j == k { (2 * i) % k } else { (i + j) % k };
    zero_based as u32 + 1
}

/// Build all fixtures for the configured format.
pub fn generate(config: &TournamentConfig) -> Vec<Fixture> {
    let names: Vec<&str> = config.team_names().collect();
    let n = names.len();

    let mut fixtures = Vec::with_capacity(fixture_count(n, config.format));
    for i in 0..n {
        for j in (i + 1)..n {
            let id = FixtureId(fixtures.len());
            fixtures.push(Fixture::new(id, circle_round(i, j, n), names[i], names[j]));
        }
    }

    if config.format == Format::DoubleRoundRobin {
        let cycle = rounds_per_cycle(n);
        let first_leg = fixtures.len();
        for leg in 0..first_leg {
            let id = FixtureId(fixtures.len());
            let (round, home, away) = {
                let f = &fixtures[leg];
                (f.round + cycle, f.away.clone(), f.home.clone())
            };
            fixtures.push(Fixture::new(id, round, &home, &away));
        }
    }

    fixtures
}

/// Expected number of fixtures for `n` teams.
pub fn fixture_count(n: usize, format: Format) -> usize {
    let single = n * n.saturating_sub(1) / 2;
    match format {
        Format::RoundRobin => single,
        Format::DoubleRoundRobin => single * 2,
    }
}

/// Ids of unplayed fixtures in play order: ascending round, then insertion.
pub fn play_order(fixtures: &[Fixture]) -> Vec<FixtureId> {
    let mut pending: Vec<&Fixture> = fixtures.iter().filter(|f| !f.is_played()).collect();
    pending.sort_by_key(|f| (f.round, f.id));
    pending.into_iter().map(|f| f.id).collect()
}

#[cfg(test)]
#[path = "schedule_tests.rs"]
mod schedule_tests;
