use std::io;

use crate::config::{MAX_COMMAND_LENGTH, MAX_COORDINATE};

/// Everything that can go wrong while running a session.
///
/// The input variants are recoverable: their `Display` text is reported back
/// on the console and the session keeps reading.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error("Incorrect input, please insert Mars bound coordinates up to {} i.e. 5 3 ({reason})", MAX_COORDINATE)]
    InvalidBounds { reason: String },

    #[error("Unexpected input, please insert robot coordinates with direction i.e. 1 5 E ({reason})")]
    MalformedPlacement { reason: String },

    #[error("Robot placed outside of boundary: {x} {y} is not within 0 0 - {width} {height}")]
    OutOfBoundsPlacement {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },

    #[error("Incorrect input, robots support up to {} commands but got {len}", MAX_COMMAND_LENGTH)]
    CommandTooLong { len: usize },

    #[error("console failure: {0}")]
    Io(#[from] io::Error),
}

impl SimulationError {
    /// True for errors caused by a bad input line; the session recovers from these.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, SimulationError::Io(_))
    }
}
