use crate::{Board, Direction, Facing, GRID_SIZE};

fn robot_char(facing: &Facing) -> char {
    match facing.direction() {
        Some(Direction::North) => '^',
        Some(Direction::East) => '>',
        Some(Direction::South) => 'v',
        Some(Direction::West) => '<',
        None => '?',
    }
}

/// Draws the grid with north at the top.
///
/// Robots outside the grid are left out. When several robots share a field,
/// the active one is drawn, otherwise the one placed last.
pub fn visualize_board(board: &Board) -> String {
    let size = GRID_SIZE as usize;
    // (robot char, is active) for every field, indexed by [y][x]
    let mut cells: Vec<Vec<Option<(char, bool)>>> = vec![vec![None; size]; size];
    for robot in board.robots() {
        if !Board::is_in_bounds(robot.x, robot.y) {
            continue;
        }
        let cell = &mut cells[robot.y as usize][robot.x as usize];
        if !matches!(cell, Some((_, true))) {
            *cell = Some((
                robot_char(&robot.facing),
                robot.id() == board.active_robot_id(),
            ));
        }
    }

    let mut result = String::from("    ");
    for x in 0..size {
        result += &format!(" {} ", x);
    }
    result += "\n   ╭";
    for _ in 0..size {
        result += "───";
    }
    result += "╮\n";
    for y in (0..size).rev() {
        result += &format!("{:>2} │", y);
        for cell in &cells[y] {
            result += &match cell {
                Some((c, true)) => format!("[{}]", c),
                Some((c, false)) => format!(" {} ", c),
                None => String::from(" . "),
            };
        }
        result += "│\n";
    }
    result += "   ╰";
    for _ in 0..size {
        result += "───";
    }
    result += "╯";
    result
}

impl Board {
    pub fn visualize(&self) -> String {
        visualize_board(self)
    }
}
