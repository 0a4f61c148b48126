use log::{debug, info};

use crate::map::world::World;
use crate::robot::state::{Position, RobotState};

/// What happened to a robot on a forward move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    /// The move would leave the grid, but a scent at the current cell held the robot back.
    Suppressed,
    Lost,
}

pub fn rotate_left(robot: &mut RobotState) {
    robot.heading = robot.heading.rotate_left();
}

pub fn rotate_right(robot: &mut RobotState) {
    robot.heading = robot.heading.rotate_right();
}

pub fn next_position(robot: &RobotState) -> Position {
    let (dx, dy) = robot.heading.step();
    (robot.x + dx, robot.y + dy)
}

/// Advances the robot one cell along its heading.
///
/// Leaving the grid loses the robot unless an earlier robot was lost from the
/// very same cell, in which case the move is dropped. The caller must not pass
/// a robot that is already lost.
pub fn move_forward(robot: &mut RobotState, world: &World) -> MoveOutcome {
    let (nx, ny) = next_position(robot);

    if world.is_within_bounds(nx, ny) {
        robot.x = nx;
        robot.y = ny;
        return MoveOutcome::Moved;
    }

    if world.is_scented(robot.x, robot.y) {
        debug!(
            "Scent at {} {} kept robot from moving {} off the grid",
            robot.x, robot.y, robot.heading
        );
        return MoveOutcome::Suppressed;
    }

    robot.mark_lost();
    info!(
        "Robot lost moving {} from {} {}",
        robot.heading, robot.x, robot.y
    );
    MoveOutcome::Lost
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::world::Bounds;
    use crate::robot::heading::Heading;
    use proptest::prelude::*;

    fn world(width: i32, height: i32) -> World {
        World::new(Bounds::new(width, height).unwrap())
    }

    #[test]
    fn test_move_forward_each_heading() {
        let world = world(5, 5);
        for (heading, expected) in [
            (Heading::North, (2, 3)),
            (Heading::East, (3, 2)),
            (Heading::South, (2, 1)),
            (Heading::West, (1, 2)),
        ] {
            let mut robot = RobotState::new(2, 2, heading);
            assert_eq!(move_forward(&mut robot, &world), MoveOutcome::Moved);
            assert_eq!(robot.position(), expected);
        }
    }

    #[test]
    fn test_rotations_do_not_move() {
        let mut robot = RobotState::new(1, 1, Heading::North);
        rotate_left(&mut robot);
        assert_eq!(robot.heading, Heading::West);
        rotate_right(&mut robot);
        rotate_right(&mut robot);
        assert_eq!(robot.heading, Heading::East);
        assert_eq!(robot.position(), (1, 1));
    }

    #[test]
    fn test_falling_off_marks_lost_at_last_position() {
        let world = world(5, 3);
        let mut robot = RobotState::new(3, 3, Heading::North);
        assert_eq!(move_forward(&mut robot, &world), MoveOutcome::Lost);
        assert!(robot.is_lost());
        assert_eq!(robot.lost_at(), Some((3, 3)));
        assert_eq!(robot.position(), (3, 3));
    }

    #[test]
    fn test_scent_suppresses_fatal_move() {
        let mut world = world(5, 3);
        let mut first = RobotState::new(3, 3, Heading::North);
        move_forward(&mut first, &world);
        world.register_robot(first);

        let mut second = RobotState::new(3, 3, Heading::North);
        assert_eq!(move_forward(&mut second, &world), MoveOutcome::Suppressed);
        assert!(!second.is_lost());
        assert_eq!(second.position(), (3, 3));
    }

    #[test]
    fn test_scent_protects_any_heading_off_that_cell() {
        let mut world = world(5, 3);
        let mut first = RobotState::new(5, 3, Heading::North);
        move_forward(&mut first, &world);
        world.register_robot(first);

        let mut second = RobotState::new(5, 3, Heading::East);
        assert_eq!(move_forward(&mut second, &world), MoveOutcome::Suppressed);
        assert!(!second.is_lost());
    }

    #[test]
    fn test_scent_elsewhere_does_not_protect() {
        let mut world = world(5, 3);
        let mut first = RobotState::new(3, 3, Heading::North);
        move_forward(&mut first, &world);
        world.register_robot(first);

        let mut second = RobotState::new(2, 3, Heading::North);
        assert_eq!(move_forward(&mut second, &world), MoveOutcome::Lost);
        assert_eq!(second.lost_at(), Some((2, 3)));
    }

    proptest! {
        #[test]
        fn test_free_moves_sum_unit_steps(
            heading in prop_oneof![
                Just(Heading::North),
                Just(Heading::East),
                Just(Heading::South),
                Just(Heading::West),
            ],
            steps in 0..=25i32,
        ) {
            // Start in the middle of a 50x50 grid so 25 steps never reach an edge.
            let world = world(50, 50);
            let mut robot = RobotState::new(25, 25, heading);
            for _ in 0..steps {
                prop_assert_eq!(move_forward(&mut robot, &world), MoveOutcome::Moved);
            }
            let (dx, dy) = heading.step();
            prop_assert_eq!(robot.position(), (25 + dx * steps, 25 + dy * steps));
            prop_assert!(!robot.is_lost());
        }
    }
}
