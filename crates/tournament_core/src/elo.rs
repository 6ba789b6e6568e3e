//! Elo expectation used to skew fixture outcomes toward stronger teams

/// Rating given to teams listed without one
pub const DEFAULT_RATING: f64 = 1500.0;

/// Rating gap at which the stronger side is expected to score ~91%
pub const ELO_SCALE: f64 = 400.0;

/// Expected score for a team rated `rating` against `opponent`
/// (1 for a certain win, 0.5 for even, 0 for a certain loss)
pub fn expected_score(rating: f64, opponent: f64) -> f64 {
    1.0 / (1.0 + 10.0_f64.powf((opponent - rating) / ELO_SCALE))
}

#[cfg(test)]
#[path = "elo_tests.rs"]
mod elo_tests;
