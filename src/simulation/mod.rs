pub mod simulator;
pub mod standings;

pub use simulator::SeasonSimulator;
pub use standings::Standing;
