use log::info;

use crate::config::MAX_COORDINATE;
use crate::error::SimulationError;
use crate::robot::state::{Position, RobotState};

/// Inclusive upper corner of the grid. The grid spans `[0, width] x [0, height]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub fn new(width: i32, height: i32) -> Result<Self, SimulationError> {
        for (name, value) in [("width", width), ("height", height)] {
            if !(0..=MAX_COORDINATE).contains(&value) {
                return Err(SimulationError::InvalidBounds {
                    reason: format!("{} {} is outside 0..={}", name, value, MAX_COORDINATE),
                });
            }
        }
        Ok(Self { width, height })
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        (0..=self.width).contains(&x) && (0..=self.height).contains(&y)
    }
}

/// Handle to a robot registered in a [`World`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RobotId(usize);

/// The bounded grid plus every robot ever placed on it.
///
/// Lost robots stay in the registry: their last safe position is the scent
/// that protects later robots.
pub struct World {
    bounds: Bounds,
    robots: Vec<RobotState>,
}

impl World {
    /// Bounds are fixed for the lifetime of the world.
    pub fn new(bounds: Bounds) -> Self {
        info!(
            "Initializing world with bounds {}x{}",
            bounds.width, bounds.height
        );
        Self {
            bounds,
            robots: Vec::new(),
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn is_within_bounds(&self, x: i32, y: i32) -> bool {
        self.bounds.contains(x, y)
    }

    pub fn is_scented(&self, x: i32, y: i32) -> bool {
        self.robots
            .iter()
            .any(|robot| robot.lost_at() == Some((x, y)))
    }

    pub fn scents(&self) -> impl Iterator<Item = Position> + '_ {
        self.robots.iter().filter_map(|robot| robot.lost_at())
    }

    pub fn register_robot(&mut self, robot: RobotState) -> RobotId {
        self.robots.push(robot);
        RobotId(self.robots.len() - 1)
    }

    /// Panics if `id` was not handed out by this world.
    pub fn robot(&self, id: RobotId) -> RobotState {
        self.robots[id.0]
    }

    pub(crate) fn store_robot(&mut self, id: RobotId, robot: RobotState) {
        self.robots[id.0] = robot;
    }

    pub fn robots(&self) -> &[RobotState] {
        &self.robots
    }
}
