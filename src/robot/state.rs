use std::fmt;

use super::heading::Heading;

/// Grid position. Both coordinates are inclusive-bounded by the world.
pub type Position = (i32, i32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RobotState {
    pub x: i32,
    pub y: i32,
    pub heading: Heading,
    /// Last in-bounds position before the robot fell off; `None` while it is alive.
    lost_at: Option<Position>,
}

impl RobotState {
    pub fn new(start_x: i32, start_y: i32, heading: Heading) -> Self {
        Self {
            x: start_x,
            y: start_y,
            heading,
            lost_at: None,
        }
    }

    pub fn position(&self) -> Position {
        (self.x, self.y)
    }

    pub fn is_lost(&self) -> bool {
        self.lost_at.is_some()
    }

    pub fn lost_at(&self) -> Option<Position> {
        self.lost_at
    }

    /// Freezes the robot at its current position.
    pub fn mark_lost(&mut self) {
        if self.lost_at.is_none() {
            self.lost_at = Some(self.position());
        }
    }
}

/// Report line: `X Y HEADING`, with ` LOST` appended for lost robots.
impl fmt::Display for RobotState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.heading)?;
        if self.is_lost() {
            write!(f, " LOST")?;
        }
        Ok(())
    }
}
