pub mod world;

pub use world::{Bounds, RobotId, World};
