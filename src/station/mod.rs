pub mod console;
pub mod controller;
pub mod protocol;

pub use console::{Console, IoConsole};
pub use controller::{SessionController, SessionSummary};
