use std::num::ParseIntError;

use crate::{Facing, RobotId};

/// A command without arguments.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Move,
    Left,
    Right,
    Report,
}

/// One line of input, parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `PLACE X,Y,F`: put a new robot on the grid.
    Place { x: i64, y: i64, facing: Facing },
    /// `ROBOT N`: make robot `N` the active one.
    SelectRobot(RobotId),
    /// `MOVE`, `LEFT`, `RIGHT` or `REPORT`.
    Plain(Action),
}

impl Action {
    pub fn keyword(self) -> &'static str {
        match self {
            Action::Move => "MOVE",
            Action::Left => "LEFT",
            Action::Right => "RIGHT",
            Action::Report => "REPORT",
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Place { x, y, facing } => write!(f, "PLACE {},{},{}", x, y, facing),
            Command::SelectRobot(id) => write!(f, "ROBOT {}", id),
            Command::Plain(action) => write!(f, "{}", action.keyword()),
        }
    }
}

/// The error type for [`parse_command()`].
///
/// Only malformed arguments of `PLACE` and `ROBOT` are errors. Lines with an
/// unknown keyword are not.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandParseError {
    MissingPlacement,
    IncompletePlacement { placement: String },
    InvalidCoordinate { token: String, err: ParseIntError },
    MissingRobotId,
    InvalidRobotId { token: String, err: ParseIntError },
}

impl std::error::Error for CommandParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandParseError::InvalidCoordinate { err, .. }
            | CommandParseError::InvalidRobotId { err, .. } => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for CommandParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandParseError::MissingPlacement => {
                write!(f, "PLACE needs an argument of the form X,Y,F")
            }
            CommandParseError::IncompletePlacement { placement } => write!(
                f,
                "PLACE argument '{}' is not of the form X,Y,F",
                placement
            ),
            CommandParseError::InvalidCoordinate { token, .. } => {
                write!(f, "PLACE coordinate '{}' is not an integer", token)
            }
            CommandParseError::MissingRobotId => write!(f, "ROBOT needs a robot number"),
            CommandParseError::InvalidRobotId { token, .. } => {
                write!(f, "Robot number '{}' is not an integer", token)
            }
        }
    }
}

/// Parses a single line of input.
///
/// Returns `Ok(None)` for empty lines and unknown keywords, which callers should skip.
/// Keywords are case-sensitive. Arguments after the ones a command needs are ignored.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandParseError> {
    let mut tokens = line.split_whitespace();
    let command = match tokens.next() {
        Some("PLACE") => {
            let placement = tokens.next().ok_or(CommandParseError::MissingPlacement)?;
            parse_placement(placement)?
        }
        Some("MOVE") => Command::Plain(Action::Move),
        Some("LEFT") => Command::Plain(Action::Left),
        Some("RIGHT") => Command::Plain(Action::Right),
        Some("REPORT") => Command::Plain(Action::Report),
        Some("ROBOT") => {
            let token = tokens.next().ok_or(CommandParseError::MissingRobotId)?;
            let id = token
                .parse::<RobotId>()
                .map_err(|err| CommandParseError::InvalidRobotId {
                    token: String::from(token),
                    err,
                })?;
            Command::SelectRobot(id)
        }
        _ => return Ok(None),
    };
    Ok(Some(command))
}

fn parse_placement(placement: &str) -> Result<Command, CommandParseError> {
    let mut parts = placement.split(',');
    let (Some(x), Some(y), Some(facing)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(CommandParseError::IncompletePlacement {
            placement: String::from(placement),
        });
    };
    Ok(Command::Place {
        x: parse_coordinate(x)?,
        y: parse_coordinate(y)?,
        facing: Facing::parse(facing),
    })
}

fn parse_coordinate(token: &str) -> Result<i64, CommandParseError> {
    token
        .parse::<i64>()
        .map_err(|err| CommandParseError::InvalidCoordinate {
            token: String::from(token),
            err,
        })
}
