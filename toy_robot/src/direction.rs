use serde::{Deserialize, Serialize};

/// One of the four compass directions a robot can face.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

/// The directions in clockwise order.
///
/// Turning right advances one step through this ring, turning left goes one step back.
const RING: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

impl Direction {
    fn ring_index(self) -> usize {
        self as usize
    }

    pub fn left(self) -> Direction {
        RING[(self.ring_index() + RING.len() - 1) % RING.len()]
    }

    pub fn right(self) -> Direction {
        RING[(self.ring_index() + 1) % RING.len()]
    }

    /// The change in `(x, y)` caused by one step in this direction.
    ///
    /// North is towards increasing y, east towards increasing x.
    pub fn offset(self) -> (i64, i64) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "NORTH",
            Direction::East => "EAST",
            Direction::South => "SOUTH",
            Direction::West => "WEST",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The error type for the [`FromStr`](std::str::FromStr) instance of [`Direction`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownDirection(pub String);

impl std::error::Error for UnknownDirection {}

impl std::fmt::Display for UnknownDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' is not one of NORTH, EAST, SOUTH or WEST", self.0)
    }
}

impl std::str::FromStr for Direction {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RING.iter()
            .copied()
            .find(|direction| direction.name() == s)
            .ok_or_else(|| UnknownDirection(String::from(s)))
    }
}

/// What a robot is facing.
///
/// The direction token of a `PLACE` command is never rejected. A token that
/// doesn't name a [`Direction`] is kept verbatim, so that it shows up in reports,
/// but a robot facing that way neither moves nor turns.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Facing {
    Known(Direction),
    Unsupported(String),
}

impl Facing {
    /// Interprets a direction token. Never fails.
    pub fn parse(token: &str) -> Facing {
        match token.parse::<Direction>() {
            Ok(direction) => Facing::Known(direction),
            Err(UnknownDirection(token)) => Facing::Unsupported(token),
        }
    }

    pub fn direction(&self) -> Option<Direction> {
        match self {
            Facing::Known(direction) => Some(*direction),
            Facing::Unsupported(_) => None,
        }
    }

    pub fn left(&self) -> Facing {
        match self {
            Facing::Known(direction) => Facing::Known(direction.left()),
            Facing::Unsupported(_) => self.clone(),
        }
    }

    pub fn right(&self) -> Facing {
        match self {
            Facing::Known(direction) => Facing::Known(direction.right()),
            Facing::Unsupported(_) => self.clone(),
        }
    }

    /// Like [`Direction::offset()`], but `(0, 0)` for an unsupported facing.
    pub fn offset(&self) -> (i64, i64) {
        self.direction().map_or((0, 0), Direction::offset)
    }
}

impl From<Direction> for Facing {
    fn from(direction: Direction) -> Self {
        Facing::Known(direction)
    }
}

impl From<String> for Facing {
    fn from(token: String) -> Self {
        match token.parse::<Direction>() {
            Ok(direction) => Facing::Known(direction),
            Err(_) => Facing::Unsupported(token),
        }
    }
}

impl From<Facing> for String {
    fn from(facing: Facing) -> Self {
        match facing {
            Facing::Known(direction) => String::from(direction.name()),
            Facing::Unsupported(token) => token,
        }
    }
}

impl std::fmt::Display for Facing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Facing::Known(direction) => write!(f, "{}", direction),
            Facing::Unsupported(token) => write!(f, "{}", token),
        }
    }
}
