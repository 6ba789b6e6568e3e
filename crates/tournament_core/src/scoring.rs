//! Fixture scoring: a reproducible pseudo-random result per fixture.
//!
//! Each fixture gets its own generator, seeded from the configuration seed,
//! both team identifiers and the round. Results therefore do not depend on
//! the order fixtures are simulated in, and two engines fed the same
//! configuration always agree.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::{TournamentConfig, MAX_GOALS};
use crate::elo::expected_score;
use crate::types::{Fixture, FixtureResult};

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

fn fnv1a(mut hash: u64, bytes: &[u8]) -> u64 {
    for &b in bytes {
        hash ^= b as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// splitmix64 finalizer
fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Stable per-fixture seed. Independent of platform and std hasher changes.
pub fn fixture_seed(seed: u64, home: &str, away: &str, round: u32) -> u64 {
    let mut hash = fnv1a(FNV_OFFSET, &seed.to_le_bytes());
    hash = fnv1a(hash, home.as_bytes());
    // Separator so ("AB", "C") and ("A", "BC") differ
    hash = fnv1a(hash, &[0xff]);
    hash = fnv1a(hash, away.as_bytes());
    hash = fnv1a(hash, &round.to_le_bytes());
    mix64(hash)
}

/// Probability cut points for a single roll in `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Rolls below this are home wins
    pub home_win: f64,
    /// Rolls below this (and not a home win) are draws
    pub draw: f64,
}

/// Turns a fixture into a result using the configured probabilities
#[derive(Debug, Clone)]
pub struct ScoringModel {
    seed: u64,
    draw_probability: f64,
    max_goals: u32,
}

impl ScoringModel {
    pub fn new(seed: u64, draw_probability: f64, max_goals: u32) -> Self {
        Self {
            seed,
            draw_probability,
            // A decisive result needs room for a one-goal margin
            max_goals: max_goals.clamp(1, MAX_GOALS),
        }
    }

    pub fn from_config(config: &TournamentConfig) -> Self {
        Self::new(config.seed, config.draw_probability, config.max_goals)
    }

    pub fn thresholds(&self, home_rating: f64, away_rating: f64) -> Thresholds {
        let expected = expected_score(home_rating, away_rating);
        let home_win = expected * (1.0 - self.draw_probability);
        Thresholds {
            home_win,
            draw: home_win + self.draw_probability,
        }
    }

    /// Deterministic result for `fixture`.
    pub fn play(&self, fixture: &Fixture, home_rating: f64, away_rating: f64) -> FixtureResult {
        let seed = fixture_seed(self.seed, &fixture.home, &fixture.away, fixture.round);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.draw_result(&mut rng, home_rating, away_rating)
    }

    /// Draw a result from any generator.
    pub fn draw_result<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        home_rating: f64,
        away_rating: f64,
    ) -> FixtureResult {
        let thresholds = self.thresholds(home_rating, away_rating);
        let roll: f64 = rng.gen();

        if roll >= thresholds.home_win && roll < thresholds.draw {
            let goals = rng.gen_range(0..=self.max_goals);
            return FixtureResult::new(goals, goals);
        }

        let margin = rng.gen_range(1..=self.max_goals);
        let loser = rng.gen_range(0..=self.max_goals - margin);
        let winner = loser + margin;
        if roll < thresholds.home_win {
            FixtureResult::new(winner, loser)
        } else {
            FixtureResult::new(loser, winner)
        }
    }
}

#[cfg(test)]
#[path = "scoring_tests.rs"]
mod scoring_tests;
