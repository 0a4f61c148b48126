pub mod config;
pub mod error;
pub mod logging;
pub mod map;
pub mod robot;
pub mod station;

pub use error::SimulationError;
