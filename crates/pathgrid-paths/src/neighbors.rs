use pathgrid_core::Point;

/// Cost of one horizontal or vertical step.
pub const ORTHOGONAL_COST: i32 = 5;
/// Cost of one diagonal step.
pub const DIAGONAL_COST: i32 = 7;

/// The eight grid directions, clockwise from up-left.
///
/// ```text
///   0  1  2
///    \ | /
///  7 -   - 3
///    / | \
///   6  5  4
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    UpLeft,
    Up,
    UpRight,
    Right,
    DownRight,
    Down,
    DownLeft,
    Left,
}

impl Direction {
    /// All directions in expansion order.
    pub const ALL: [Direction; 8] = [
        Direction::UpLeft,
        Direction::Up,
        Direction::UpRight,
        Direction::Right,
        Direction::DownRight,
        Direction::Down,
        Direction::DownLeft,
        Direction::Left,
    ];

    /// Unit offset of a step in this direction (Y grows down).
    #[inline]
    pub const fn offset(self) -> Point {
        match self {
            Direction::UpLeft => Point::new(-1, -1),
            Direction::Up => Point::new(0, -1),
            Direction::UpRight => Point::new(1, -1),
            Direction::Right => Point::new(1, 0),
            Direction::DownRight => Point::new(1, 1),
            Direction::Down => Point::new(0, 1),
            Direction::DownLeft => Point::new(-1, 1),
            Direction::Left => Point::new(-1, 0),
        }
    }

    #[inline]
    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Direction::UpLeft | Direction::UpRight | Direction::DownRight | Direction::DownLeft
        )
    }

    /// Base cost of a step in this direction, before terrain weights.
    #[inline]
    pub const fn step_cost(self) -> i32 {
        if self.is_diagonal() {
            DIAGONAL_COST
        } else {
            ORTHOGONAL_COST
        }
    }

    /// The direction leading from `from` to the adjacent `to`, if any.
    pub fn between(from: Point, to: Point) -> Option<Direction> {
        let d = to - from;
        Direction::ALL.into_iter().find(|dir| dir.offset() == d)
    }
}
