use serde::{Deserialize, Serialize};

use crate::{Facing, RobotId};

/// A serializable picture of a [`Board`](crate::Board), see [`Board::snapshot()`](crate::Board::snapshot).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub grid_size: i64,
    /// The id selected by the last `ROBOT` command. There may be no robot with this id.
    pub active_robot: RobotId,
    /// In placement order.
    pub robots: Vec<RobotSnapshot>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotSnapshot {
    pub id: RobotId,
    pub x: i64,
    pub y: i64,
    pub facing: Facing,
    pub active: bool,
}
