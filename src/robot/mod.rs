pub mod commands;
pub mod heading;
pub mod movement;
pub mod state;

pub use commands::{CommandInterpreter, RobotOp};
pub use heading::Heading;
pub use state::RobotState;
