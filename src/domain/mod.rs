pub mod contests;
pub mod models;
pub mod roster;

pub use contests::{Contest, collapse_schedules};
pub use models::*;
pub use roster::Roster;
