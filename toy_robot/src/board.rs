use std::io::Write;

use crate::{Action, BoardSnapshot, Command, Facing, Robot, RobotId, RobotSnapshot};

/// The grid is `GRID_SIZE` x `GRID_SIZE` fields, with coordinates from 0 to `GRID_SIZE - 1`.
pub const GRID_SIZE: i64 = 5;

/// The robot that is active before any `ROBOT` command.
pub const INITIAL_ACTIVE_ROBOT: RobotId = 1;

/// All robots placed so far, and which one is controlled by `MOVE`, `LEFT` and `RIGHT`.
#[derive(Clone, Debug)]
pub struct Board {
    /// In placement order, which is also the order of their ids.
    robots: Vec<Robot>,
    /// May refer to a robot that doesn't exist (yet).
    active_robot: RobotId,
}

/// What applying a command did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// The command had no effect. This is not an error.
    Ignored(Notice),
}

/// Why a command was ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    NoActiveRobot {
        active_robot: RobotId,
    },
    MoveBlocked {
        robot: RobotId,
        from: (i64, i64),
        to: (i64, i64),
    },
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::NoActiveRobot { active_robot } => {
                write!(f, "There is no robot with number {}", active_robot)
            }
            Notice::MoveBlocked { robot, from, to } => write!(
                f,
                "Robot {} cannot move forward from ({}, {}) to ({}, {})",
                robot, from.0, from.1, to.0, to.1
            ),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            robots: Vec::new(),
            active_robot: INITIAL_ACTIVE_ROBOT,
        }
    }

    pub fn robots(&self) -> &[Robot] {
        &self.robots
    }

    pub fn active_robot_id(&self) -> RobotId {
        self.active_robot
    }

    pub fn active_robot(&self) -> Option<&Robot> {
        self.robots
            .iter()
            .find(|robot| robot.id() == self.active_robot)
    }

    fn active_robot_mut(&mut self) -> Result<&mut Robot, Notice> {
        let active_robot = self.active_robot;
        self.robots
            .iter_mut()
            .find(|robot| robot.id() == active_robot)
            .ok_or(Notice::NoActiveRobot { active_robot })
    }

    pub fn is_in_bounds(x: i64, y: i64) -> bool {
        (0..GRID_SIZE).contains(&x) && (0..GRID_SIZE).contains(&y)
    }

    pub fn can_move_forward(robot: &Robot) -> bool {
        let (x, y) = robot.next_forward_position();
        Self::is_in_bounds(x, y)
    }

    /// Puts a new robot on the board and returns its id.
    ///
    /// The position is not checked, a robot may be placed outside the grid.
    pub fn place(&mut self, x: i64, y: i64, facing: Facing) -> RobotId {
        let id = self.robots.len() as RobotId + 1;
        self.robots.push(Robot::new(id, x, y, facing));
        id
    }

    /// Applies a single command.
    ///
    /// `REPORT` writes to `out`, nothing else does. Errors only come from writing.
    pub fn apply(&mut self, command: &Command, out: &mut impl Write) -> std::io::Result<Outcome> {
        let result = match command {
            Command::Place { x, y, facing } => {
                self.place(*x, *y, facing.clone());
                Ok(())
            }
            Command::SelectRobot(id) => {
                self.active_robot = *id;
                Ok(())
            }
            Command::Plain(Action::Move) => self.move_active_robot(),
            Command::Plain(Action::Left) => self.active_robot_mut().map(Robot::rotate_left),
            Command::Plain(Action::Right) => self.active_robot_mut().map(Robot::rotate_right),
            Command::Plain(Action::Report) => {
                self.write_report(out)?;
                Ok(())
            }
        };
        Ok(match result {
            Ok(()) => Outcome::Applied,
            Err(notice) => Outcome::Ignored(notice),
        })
    }

    fn move_active_robot(&mut self) -> Result<(), Notice> {
        let robot = self.active_robot_mut()?;
        if !Self::can_move_forward(robot) {
            return Err(Notice::MoveBlocked {
                robot: robot.id(),
                from: robot.position(),
                to: robot.next_forward_position(),
            });
        }
        robot.move_forward();
        Ok(())
    }

    /// Writes the robot count, then one `x,y,DIRECTION` line per robot.
    pub fn write_report(&self, out: &mut impl Write) -> std::io::Result<()> {
        writeln!(out, "There is/are {} robot(s):", self.robots.len())?;
        for robot in &self.robots {
            let active_text = if robot.id() == self.active_robot {
                " (Active)"
            } else {
                ""
            };
            writeln!(out, "{}{}", robot, active_text)?;
        }
        Ok(())
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            grid_size: GRID_SIZE,
            active_robot: self.active_robot,
            robots: self
                .robots
                .iter()
                .map(|robot| RobotSnapshot {
                    id: robot.id(),
                    x: robot.x,
                    y: robot.y,
                    facing: robot.facing.clone(),
                    active: robot.id() == self.active_robot,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::{ActionSequence, PlacementOnGrid};
    use crate::{parse_command, Direction};

    fn run(lines: &[&str]) -> (Board, String) {
        let mut board = Board::new();
        let mut out = Vec::new();
        for line in lines {
            if let Some(command) = parse_command(line).unwrap() {
                board.apply(&command, &mut out).unwrap();
            }
        }
        (board, String::from_utf8(out).unwrap())
    }

    quickcheck! {
        fn moves_stay_on_the_grid(placement: PlacementOnGrid, actions: ActionSequence) -> bool {
            let mut board = Board::new();
            board.place(placement.x, placement.y, Facing::Known(placement.direction));
            let mut sink = std::io::sink();
            for action in actions.0 {
                board.apply(&Command::Plain(action), &mut sink).unwrap();
                let robot = &board.robots()[0];
                if !Board::is_in_bounds(robot.x, robot.y) {
                    return false;
                }
            }
            true
        }

        fn ids_follow_placement_order(placements: Vec<(i64, i64)>) -> bool {
            let mut board = Board::new();
            for (x, y) in &placements {
                board.place(*x, *y, Facing::Known(Direction::North));
            }
            board
                .robots()
                .iter()
                .enumerate()
                .all(|(idx, robot)| robot.id() == idx as RobotId + 1)
        }
    }

    #[test]
    fn report_without_robots() {
        let (_, out) = run(&["REPORT"]);
        assert_eq!(out, "There is/are 0 robot(s):\n");
    }

    #[test]
    fn move_north() {
        let (_, out) = run(&["PLACE 0,0,NORTH", "MOVE", "REPORT"]);
        assert_eq!(out, "There is/are 1 robot(s):\n0,1,NORTH (Active)\n");
    }

    #[test]
    fn turn_left() {
        let (_, out) = run(&["PLACE 0,0,NORTH", "LEFT", "REPORT"]);
        assert_eq!(out, "There is/are 1 robot(s):\n0,0,WEST (Active)\n");
    }

    #[test]
    fn move_off_the_grid_is_blocked() {
        let mut board = Board::new();
        board.place(4, 4, Facing::Known(Direction::North));
        let outcome = board
            .apply(&Command::Plain(Action::Move), &mut std::io::sink())
            .unwrap();
        assert_eq!(
            outcome,
            Outcome::Ignored(Notice::MoveBlocked {
                robot: 1,
                from: (4, 4),
                to: (4, 5)
            })
        );
        let mut out = Vec::new();
        board.write_report(&mut out).unwrap();
        assert_eq!(out, b"There is/are 1 robot(s):\n4,4,NORTH (Active)\n");
    }

    #[test]
    fn select_robot() {
        let (board, out) = run(&["PLACE 1,1,EAST", "PLACE 2,2,SOUTH", "ROBOT 1", "REPORT"]);
        assert_eq!(
            out,
            "There is/are 2 robot(s):\n1,1,EAST (Active)\n2,2,SOUTH\n"
        );
        assert_eq!(board.active_robot().map(Robot::id), Some(1));
    }

    #[test]
    fn only_the_active_robot_moves() {
        let (_, out) = run(&[
            "PLACE 0,0,NORTH",
            "PLACE 3,3,WEST",
            "ROBOT 2",
            "MOVE",
            "RIGHT",
            "MOVE",
            "REPORT",
        ]);
        assert_eq!(
            out,
            "There is/are 2 robot(s):\n0,0,NORTH\n2,4,NORTH (Active)\n"
        );
    }

    #[test]
    fn commands_without_active_robot_are_ignored() {
        let mut board = Board::new();
        let mut sink = std::io::sink();
        for action in [Action::Move, Action::Left, Action::Right] {
            assert_eq!(
                board.apply(&Command::Plain(action), &mut sink).unwrap(),
                Outcome::Ignored(Notice::NoActiveRobot { active_robot: 1 })
            );
        }

        board.place(2, 2, Facing::Known(Direction::East));
        board.apply(&Command::SelectRobot(7), &mut sink).unwrap();
        assert!(board.active_robot().is_none());
        assert_eq!(
            board.apply(&Command::Plain(Action::Move), &mut sink).unwrap(),
            Outcome::Ignored(Notice::NoActiveRobot { active_robot: 7 })
        );
        assert_eq!(board.robots()[0].position(), (2, 2));
    }

    #[test]
    fn placement_outside_the_grid_is_accepted() {
        let (board, out) = run(&["PLACE 9,9,NORTH", "MOVE", "REPORT"]);
        assert_eq!(out, "There is/are 1 robot(s):\n9,9,NORTH (Active)\n");
        assert_eq!(board.robots().len(), 1);
    }

    #[test]
    fn robot_placed_before_selection_becomes_active() {
        let (_, out) = run(&["ROBOT 2", "PLACE 0,0,EAST", "PLACE 1,0,EAST", "MOVE", "REPORT"]);
        assert_eq!(
            out,
            "There is/are 2 robot(s):\n0,0,EAST\n2,0,EAST (Active)\n"
        );
    }

    #[test]
    fn unsupported_direction_is_inert() {
        let (_, out) = run(&["PLACE 2,2,UP", "MOVE", "LEFT", "RIGHT", "REPORT"]);
        assert_eq!(out, "There is/are 1 robot(s):\n2,2,UP (Active)\n");
    }

    #[test]
    fn unknown_commands_change_nothing() {
        let (_, out) = run(&["PLACE 1,1,NORTH", "FOO", "JUMP 3", "REPORT"]);
        assert_eq!(out, "There is/are 1 robot(s):\n1,1,NORTH (Active)\n");
    }

    #[test]
    fn snapshot_marks_the_active_robot() {
        let (board, _) = run(&["PLACE 1,1,EAST", "PLACE 2,2,SOUTH"]);
        let snapshot = board.snapshot();
        assert_eq!(snapshot.active_robot, 1);
        assert_eq!(snapshot.robots.len(), 2);
        assert!(snapshot.robots[0].active);
        assert!(!snapshot.robots[1].active);
        assert_eq!(snapshot.robots[1].facing, Facing::Known(Direction::South));
    }
}
