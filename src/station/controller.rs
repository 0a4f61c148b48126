use log::{info, warn};

use crate::config::CLOSING_MESSAGE;
use crate::error::SimulationError;
use crate::map::world::{RobotId, World};
use crate::robot::commands::CommandInterpreter;
use crate::station::console::Console;
use crate::station::protocol;

/// Where the session is in the line protocol.
enum Phase {
    AwaitingBounds,
    AwaitingPlacement(World),
    AwaitingCommand(World, RobotId),
    Terminated(Option<World>),
}

/// Counters reported when the session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub robots_reported: usize,
    pub robots_lost: usize,
    pub rejected_lines: usize,
    pub scented_cells: usize,
}

/// Drives one session: bounds line, then alternating placement and command
/// lines until `end` or end of input.
pub struct SessionController<C: Console> {
    console: C,
    interpreter: CommandInterpreter,
    phase: Phase,
    summary: SessionSummary,
}

impl<C: Console> SessionController<C> {
    pub fn new(console: C) -> Self {
        Self::with_interpreter(console, CommandInterpreter::default())
    }

    pub fn with_interpreter(console: C, interpreter: CommandInterpreter) -> Self {
        Self {
            console,
            interpreter,
            phase: Phase::AwaitingBounds,
            summary: SessionSummary::default(),
        }
    }

    /// Reads and handles lines until the session terminates.
    ///
    /// Bad input lines are reported on the console and skipped; only console
    /// failures end the loop with an error.
    pub fn run(&mut self) -> Result<SessionSummary, SimulationError> {
        info!("Session started, awaiting world bounds");

        while !self.is_terminated() {
            match self.console.read_line()? {
                Some(line) => self.handle_line(&line)?,
                None => {
                    info!("Input closed");
                    self.terminate()?;
                }
            }
        }

        self.summary.scented_cells = self.world().map_or(0, |world| world.scents().count());
        info!(
            "Session finished: {} robots reported, {} lost, {} lines rejected, {} scented cells",
            self.summary.robots_reported,
            self.summary.robots_lost,
            self.summary.rejected_lines,
            self.summary.scented_cells
        );
        Ok(self.summary)
    }

    pub fn handle_line(&mut self, line: &str) -> Result<(), SimulationError> {
        let line = line.trim();
        let phase = std::mem::replace(&mut self.phase, Phase::Terminated(None));

        self.phase = match phase {
            Phase::AwaitingBounds => self.on_bounds(line)?,
            Phase::AwaitingPlacement(world) => self.on_placement(world, line)?,
            Phase::AwaitingCommand(world, id) => self.on_command(world, id, line)?,
            Phase::Terminated(world) => Phase::Terminated(world),
        };
        Ok(())
    }

    /// Ends the session and writes the closing notice. Does nothing once terminated.
    pub fn terminate(&mut self) -> Result<(), SimulationError> {
        let world = match std::mem::replace(&mut self.phase, Phase::Terminated(None)) {
            Phase::AwaitingBounds => None,
            Phase::AwaitingPlacement(world) | Phase::AwaitingCommand(world, _) => Some(world),
            Phase::Terminated(world) => {
                self.phase = Phase::Terminated(world);
                return Ok(());
            }
        };
        self.phase = Phase::Terminated(world);
        self.console.write_line(CLOSING_MESSAGE)?;
        Ok(())
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self.phase, Phase::Terminated(_))
    }

    pub fn world(&self) -> Option<&World> {
        match &self.phase {
            Phase::AwaitingBounds => None,
            Phase::AwaitingPlacement(world) | Phase::AwaitingCommand(world, _) => Some(world),
            Phase::Terminated(world) => world.as_ref(),
        }
    }

    pub fn summary(&self) -> SessionSummary {
        self.summary
    }

    pub fn into_console(self) -> C {
        self.console
    }

    fn on_bounds(&mut self, line: &str) -> Result<Phase, SimulationError> {
        if line.is_empty() {
            return Ok(Phase::AwaitingBounds);
        }
        if protocol::is_end_token(line) {
            self.console.write_line(CLOSING_MESSAGE)?;
            return Ok(Phase::Terminated(None));
        }

        match protocol::parse_bounds(line) {
            Ok(bounds) => Ok(Phase::AwaitingPlacement(World::new(bounds))),
            Err(err) => {
                self.reject(line, err)?;
                Ok(Phase::AwaitingBounds)
            }
        }
    }

    fn on_placement(&mut self, mut world: World, line: &str) -> Result<Phase, SimulationError> {
        if line.is_empty() {
            return Ok(Phase::AwaitingPlacement(world));
        }
        if protocol::is_end_token(line) {
            self.console.write_line(CLOSING_MESSAGE)?;
            return Ok(Phase::Terminated(Some(world)));
        }

        match protocol::parse_placement(line, &world) {
            Ok(robot) => {
                info!("Robot placed at {} {} facing {}", robot.x, robot.y, robot.heading);
                let id = world.register_robot(robot);
                Ok(Phase::AwaitingCommand(world, id))
            }
            Err(err) => {
                self.reject(line, err)?;
                Ok(Phase::AwaitingPlacement(world))
            }
        }
    }

    fn on_command(
        &mut self,
        mut world: World,
        id: RobotId,
        line: &str,
    ) -> Result<Phase, SimulationError> {
        let mut robot = world.robot(id);

        if let Err(err) = self.interpreter.execute(&mut robot, line, &world) {
            // The robot keeps waiting for a command it can run.
            self.reject(line, err)?;
            return Ok(Phase::AwaitingCommand(world, id));
        }

        world.store_robot(id, robot);
        self.summary.robots_reported += 1;
        if robot.is_lost() {
            self.summary.robots_lost += 1;
        }
        self.console.write_line(&robot.to_string())?;
        Ok(Phase::AwaitingPlacement(world))
    }

    fn reject(&mut self, line: &str, err: SimulationError) -> Result<(), SimulationError> {
        if !err.is_input_error() {
            return Err(err);
        }
        warn!("Rejected input {:?}: {}", line, err);
        self.summary.rejected_lines += 1;
        self.console.write_line(&err.to_string())?;
        Ok(())
    }
}
