use crate::Facing;

/// Identifies a robot. Assigned in placement order, starting at 1.
pub type RobotId = i64;

/// A robot somewhere on (or off) the grid.
///
/// The robot itself knows nothing about the grid. Keeping it in bounds is the
/// job of the [`Board`](crate::Board).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Robot {
    id: RobotId,
    pub x: i64,
    pub y: i64,
    pub facing: Facing,
}

impl Robot {
    pub fn new(id: RobotId, x: i64, y: i64, facing: Facing) -> Self {
        Self { id, x, y, facing }
    }

    pub fn id(&self) -> RobotId {
        self.id
    }

    pub fn position(&self) -> (i64, i64) {
        (self.x, self.y)
    }

    /// Where the robot would be after one step forward.
    ///
    /// A robot with an unsupported facing stays where it is.
    pub fn next_forward_position(&self) -> (i64, i64) {
        let (dx, dy) = self.facing.offset();
        (self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    pub fn move_forward(&mut self) {
        (self.x, self.y) = self.next_forward_position();
    }

    pub fn rotate_left(&mut self) {
        self.facing = self.facing.left();
    }

    pub fn rotate_right(&mut self) {
        self.facing = self.facing.right();
    }
}

impl std::fmt::Display for Robot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.facing)
    }
}
