use ndarray::Array1;

use super::model::win_probability;
use super::optimizer::Objective;
use super::outcome_index::OutcomeIndex;

/// Negative log-likelihood of the decided outcomes under the logistic model.
///
/// With no decided contests the sum is zero everywhere, so the minimizer
/// leaves the seed ratings untouched. When the contest graph is
/// disconnected, the likelihood is invariant to a per-component additive
/// shift; ratings are only comparable within a connected component.
pub struct LogLikelihoodObjective<'a> {
    index: &'a OutcomeIndex,
}

impl<'a> LogLikelihoodObjective<'a> {
    pub fn new(index: &'a OutcomeIndex) -> Self {
        Self { index }
    }

    fn contests(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.index
            .winners
            .iter()
            .copied()
            .zip(self.index.losers.iter().copied())
    }
}

impl Objective for LogLikelihoodObjective<'_> {
    fn value(&self, theta: &Array1<f64>) -> f64 {
        self.contests()
            .map(|(winner, loser)| -win_probability(theta[winner], theta[loser]).ln())
            .sum()
    }

    fn gradient(&self, theta: &Array1<f64>) -> Array1<f64> {
        let mut gradient = Array1::zeros(theta.len());

        for (winner, loser) in self.contests() {
            // Derivative of -ln P(w beats l) with respect to each rating.
            let shortfall = 1.0 - win_probability(theta[winner], theta[loser]);
            gradient[winner] -= shortfall;
            gradient[loser] += shortfall;
        }

        gradient
    }
}
