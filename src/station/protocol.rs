//! Wire grammar for the bounds and placement lines.

use crate::config::END_TOKEN;
use crate::error::SimulationError;
use crate::map::world::{Bounds, World};
use crate::robot::heading::Heading;
use crate::robot::state::RobotState;

pub fn is_end_token(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case(END_TOKEN)
}

/// Parses `"<width> <height>"`.
pub fn parse_bounds(line: &str) -> Result<Bounds, SimulationError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(SimulationError::InvalidBounds {
            reason: format!("expected 2 values, got {}", tokens.len()),
        });
    }

    let parse = |token: &str| {
        token
            .parse::<i32>()
            .map_err(|_| SimulationError::InvalidBounds {
                reason: format!("'{}' is not a number", token),
            })
    };

    Bounds::new(parse(tokens[0])?, parse(tokens[1])?)
}

/// Parses `"<x> <y> <heading>"` and checks the position against `world`.
pub fn parse_placement(line: &str, world: &World) -> Result<RobotState, SimulationError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [x, y, heading] = tokens.as_slice() else {
        return Err(SimulationError::MalformedPlacement {
            reason: format!("expected 3 values, got {}", tokens.len()),
        });
    };

    let parse = |token: &str| {
        token
            .parse::<i32>()
            .map_err(|_| SimulationError::MalformedPlacement {
                reason: format!("'{}' is not a number", token),
            })
    };
    let x = parse(*x)?;
    let y = parse(*y)?;
    let heading = heading
        .parse::<Heading>()
        .map_err(|e| SimulationError::MalformedPlacement {
            reason: e.to_string(),
        })?;

    if !world.is_within_bounds(x, y) {
        let bounds = world.bounds();
        return Err(SimulationError::OutOfBoundsPlacement {
            x,
            y,
            width: bounds.width,
            height: bounds.height,
        });
    }

    Ok(RobotState::new(x, y, heading))
}
