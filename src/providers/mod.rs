pub mod roster;
pub mod schedule;

pub use roster::{FileRosterSource, RosterSource};
pub use schedule::{FileScheduleSource, ScheduleSource};
