use thiserror::Error;

/// Data-integrity failures raised while assembling league data.
///
/// These are unrecoverable for the caller that supplied the data; numerical
/// non-convergence is not an error and is reported on the fit result instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LeagueError {
    #[error("opponent '{opponent}' on the schedule of '{competitor}' is not in the roster")]
    UnknownOpponent { competitor: String, opponent: String },

    #[error("competitor '{0}' appears more than once in the roster")]
    DuplicateCompetitor(String),
}
