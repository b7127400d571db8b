use crate::{Action, Direction, Facing, Robot, GRID_SIZE};

/// A valid starting position: on the grid, facing a known direction.
#[derive(Clone, Debug)]
pub struct PlacementOnGrid {
    pub x: i64,
    pub y: i64,
    pub direction: Direction,
}

/// A nonempty list of commands for the active robot.
#[derive(Clone, Debug)]
pub struct ActionSequence(pub Vec<Action>);

impl quickcheck::Arbitrary for Direction {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&[
            Direction::North,
            Direction::East,
            Direction::South,
            Direction::West,
        ])
        .unwrap()
    }
}

impl quickcheck::Arbitrary for Facing {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        // Mostly known directions, sometimes a junk token
        if u8::arbitrary(g) % 5 == 0 {
            let token = *g.choose(&["UP", "north", "", "NORTHEAST"]).unwrap();
            Facing::Unsupported(String::from(token))
        } else {
            Facing::Known(Direction::arbitrary(g))
        }
    }
}

impl quickcheck::Arbitrary for Action {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&[Action::Move, Action::Left, Action::Right, Action::Report])
            .unwrap()
    }
}

impl quickcheck::Arbitrary for Robot {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let id = (u8::arbitrary(g) % 16) as i64 + 1;
        Robot::new(id, i64::arbitrary(g), i64::arbitrary(g), Facing::arbitrary(g))
    }
}

impl quickcheck::Arbitrary for PlacementOnGrid {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        PlacementOnGrid {
            x: (u8::arbitrary(g) as i64) % GRID_SIZE,
            y: (u8::arbitrary(g) as i64) % GRID_SIZE,
            direction: Direction::arbitrary(g),
        }
    }
}

impl quickcheck::Arbitrary for ActionSequence {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let mut actions = Vec::<Action>::arbitrary(g);
        actions.push(Action::Move);
        ActionSequence(actions)
    }
}
