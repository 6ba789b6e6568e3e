use super::*;

#[test]
fn test_equal_ratings_even() {
    // Equal ratings should give 50% expected score
    let expected = expected_score(DEFAULT_RATING, DEFAULT_RATING);
    assert!((expected - 0.5).abs() < 1e-9);
}

#[test]
fn test_expected_scores_are_complementary() {
    let strong = expected_score(1700.0, 1500.0);
    let weak = expected_score(1500.0, 1700.0);
    assert!(strong > 0.5);
    assert!((strong + weak - 1.0).abs() < 1e-9);
}

#[test]
fn test_scale_gap() {
    // 400 points of difference is 10:1 odds
    let expected = expected_score(1900.0, 1500.0);
    assert!((expected - 10.0 / 11.0).abs() < 1e-9);
}
