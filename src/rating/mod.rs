pub mod estimator;
pub mod model;
pub mod objective;
pub mod optimizer;
pub mod outcome_index;

pub use estimator::{RankingEntry, RatingEstimator, RatingFit, ranking};
pub use model::win_probability;
pub use objective::LogLikelihoodObjective;
pub use optimizer::{GradientDescent, Minimization, Objective, Optimizer};
pub use outcome_index::{OutcomeIndex, build_outcome_index};
