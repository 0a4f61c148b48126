use std::fmt;
use std::str::FromStr;

/// Cardinal orientation of a robot on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    pub fn all() -> [Self; 4] {
        [Heading::North, Heading::East, Heading::South, Heading::West]
    }

    /// One step counter-clockwise: N -> W -> S -> E -> N.
    pub fn rotate_left(self) -> Self {
        match self {
            Heading::North => Heading::West,
            Heading::West => Heading::South,
            Heading::South => Heading::East,
            Heading::East => Heading::North,
        }
    }

    /// One step clockwise: N -> E -> S -> W -> N.
    pub fn rotate_right(self) -> Self {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    /// Unit step `(dx, dy)` for a forward move. North is +y.
    pub fn step(self) -> (i32, i32) {
        match self {
            Heading::North => (0, 1),
            Heading::East => (1, 0),
            Heading::South => (0, -1),
            Heading::West => (-1, 0),
        }
    }

    pub fn letter(self) -> char {
        match self {
            Heading::North => 'N',
            Heading::East => 'E',
            Heading::South => 'S',
            Heading::West => 'W',
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownHeading(pub String);

impl fmt::Display for UnknownHeading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "incorrect direction '{}', currently supported directions: N E S W",
            self.0
        )
    }
}

impl FromStr for Heading {
    type Err = UnknownHeading;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "N" | "NORTH" => Ok(Heading::North),
            "E" | "EAST" => Ok(Heading::East),
            "S" | "SOUTH" => Ok(Heading::South),
            "W" | "WEST" => Ok(Heading::West),
            _ => Err(UnknownHeading(s.to_string())),
        }
    }
}
