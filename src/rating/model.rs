/// Logistic (Bradley-Terry) win probability.
///
/// `P(a beats b) = 1 / (1 + exp(-(r_a - r_b)))`
pub fn win_probability(rating_a: f64, rating_b: f64) -> f64 {
    1.0 / (1.0 + (-(rating_a - rating_b)).exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    #[test]
    fn equal_ratings_split_evenly() {
        for rating in [-25.0, -1.0, 0.0, 0.5, 3.0, 1000.0] {
            assert!((win_probability(rating, rating) - 0.5).abs() < TOLERANCE);
        }
    }

    #[test]
    fn probabilities_are_complementary() {
        for (a, b) in [(0.0, 1.0), (-2.5, 0.3), (4.0, 4.0), (10.0, -10.0)] {
            let total = win_probability(a, b) + win_probability(b, a);
            assert!((total - 1.0).abs() < TOLERANCE);
        }
    }

    #[test]
    fn strictly_increasing_in_own_rating() {
        let mut previous = win_probability(-3.0, 0.0);
        for step in 1..=12 {
            let current = win_probability(-3.0 + step as f64 * 0.5, 0.0);
            assert!(current > previous);
            previous = current;
        }
    }

    #[test]
    fn strictly_decreasing_in_opponent_rating() {
        assert!(win_probability(0.0, 1.0) < win_probability(0.0, 0.0));
        assert!(win_probability(0.0, 2.0) < win_probability(0.0, 1.0));
    }
}
