//! Turns a command line into robot operations.
//!
//! Each character of the line is looked up in a symbol map (case-insensitive)
//! and dispatched to the navigation functions in [`movement`](super::movement).
//! Characters with no mapping are skipped.

use std::collections::HashMap;

use log::debug;

use crate::config::MAX_COMMAND_LENGTH;
use crate::error::SimulationError;
use crate::map::world::World;
use crate::robot::movement::{self, MoveOutcome};
use crate::robot::state::RobotState;

/// Operations a command symbol can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RobotOp {
    RotateLeft,
    RotateRight,
    MoveForward,
}

pub struct CommandInterpreter {
    op_map: HashMap<char, RobotOp>,
}

impl Default for CommandInterpreter {
    fn default() -> Self {
        let mut interpreter = Self::new();
        interpreter.populate_standard_commands();
        interpreter
    }
}

impl CommandInterpreter {
    /// Creates an interpreter with an empty symbol map; every symbol is ignored
    /// until registered.
    pub fn new() -> Self {
        Self {
            op_map: HashMap::new(),
        }
    }

    /// Assigns `op` to `symbol`. Matching ignores ASCII case.
    pub fn set_op(&mut self, symbol: char, op: RobotOp) {
        self.op_map.insert(symbol.to_ascii_uppercase(), op);
    }

    /// Registers `L`, `R` and `F`.
    pub fn populate_standard_commands(&mut self) {
        let mappings = [
            ('L', RobotOp::RotateLeft),
            ('R', RobotOp::RotateRight),
            ('F', RobotOp::MoveForward),
        ];
        for (symbol, op) in mappings {
            self.set_op(symbol, op);
        }
    }

    pub fn op_for(&self, symbol: char) -> Option<RobotOp> {
        self.op_map.get(&symbol.to_ascii_uppercase()).copied()
    }

    /// Rejects command lines longer than [`MAX_COMMAND_LENGTH`] characters.
    pub fn validate(&self, commands: &str) -> Result<(), SimulationError> {
        let len = commands.chars().count();
        if len > MAX_COMMAND_LENGTH {
            return Err(SimulationError::CommandTooLong { len });
        }
        Ok(())
    }

    /// Runs `commands` against `robot`.
    ///
    /// The whole line is validated before the first operation runs. A robot
    /// that is already lost is left untouched, and processing stops on the
    /// move that loses it.
    pub fn execute(
        &self,
        robot: &mut RobotState,
        commands: &str,
        world: &World,
    ) -> Result<(), SimulationError> {
        self.validate(commands)?;

        if robot.is_lost() {
            return Ok(());
        }

        for symbol in commands.chars() {
            match self.op_for(symbol) {
                Some(RobotOp::RotateLeft) => movement::rotate_left(robot),
                Some(RobotOp::RotateRight) => movement::rotate_right(robot),
                Some(RobotOp::MoveForward) => {
                    if movement::move_forward(robot, world) == MoveOutcome::Lost {
                        break;
                    }
                }
                None => debug!("Ignoring unknown command symbol {:?}", symbol),
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::world::Bounds;
    use crate::robot::heading::Heading;

    fn world(width: i32, height: i32) -> World {
        World::new(Bounds::new(width, height).unwrap())
    }

    fn run(world: &World, robot: RobotState, commands: &str) -> RobotState {
        let mut robot = robot;
        CommandInterpreter::default()
            .execute(&mut robot, commands, world)
            .expect("command should be accepted");
        robot
    }

    #[test]
    fn test_square_returns_home() {
        let world = world(5, 3);
        let robot = run(&world, RobotState::new(1, 1, Heading::East), "RFRFRFRF");
        assert_eq!(robot.to_string(), "1 1 E");
    }

    #[test]
    fn test_lowercase_commands() {
        let world = world(5, 3);
        let robot = run(&world, RobotState::new(1, 1, Heading::East), "rfrfrfrf");
        assert_eq!(robot.to_string(), "1 1 E");
    }

    #[test]
    fn test_unknown_symbols_are_ignored() {
        let world = world(5, 3);
        let robot = run(&world, RobotState::new(1, 1, Heading::North), "F X?F 1");
        assert_eq!(robot.position(), (1, 3));
    }

    #[test]
    fn test_empty_commands_leave_robot_unchanged() {
        let world = world(5, 3);
        let start = RobotState::new(2, 2, Heading::South);
        assert_eq!(run(&world, start, ""), start);
    }

    #[test]
    fn test_stops_after_loss() {
        let world = world(5, 3);
        let robot = run(&world, RobotState::new(3, 2, Heading::North), "FRRFLLFFRRFLL");
        assert_eq!(robot.to_string(), "3 3 N LOST");
        assert_eq!(robot.lost_at(), Some((3, 3)));
    }

    #[test]
    fn test_lost_robot_ignores_commands() {
        let world = world(5, 3);
        let mut robot = RobotState::new(0, 0, Heading::South);
        robot.mark_lost();
        let after = run(&world, robot, "LFFRF");
        assert_eq!(after, robot);
    }

    #[test]
    fn test_length_limit() {
        let world = world(5, 3);
        let interpreter = CommandInterpreter::default();

        let exact = "L".repeat(100);
        let mut robot = RobotState::new(0, 0, Heading::North);
        assert!(interpreter.execute(&mut robot, &exact, &world).is_ok());
        assert_eq!(robot.heading, Heading::North);

        let too_long = "F".repeat(101);
        let mut robot = RobotState::new(0, 0, Heading::North);
        assert!(matches!(
            interpreter.execute(&mut robot, &too_long, &world),
            Err(SimulationError::CommandTooLong { len: 101 })
        ));
        assert_eq!(robot.position(), (0, 0));
    }

    #[test]
    fn test_custom_symbol_mapping() {
        let world = world(5, 3);
        let mut interpreter = CommandInterpreter::new();
        interpreter.set_op('m', RobotOp::MoveForward);
        assert_eq!(interpreter.op_for('M'), Some(RobotOp::MoveForward));
        assert_eq!(interpreter.op_for('F'), None);

        let mut robot = RobotState::new(0, 0, Heading::East);
        interpreter.execute(&mut robot, "MMF", &world).unwrap();
        assert_eq!(robot.position(), (2, 0));
    }
}
