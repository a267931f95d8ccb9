use strum_macros::EnumIter;

/// A cell of the maze as `[row, col]`.
pub type Position = [i32; 2];

/// Configuration of the robot: a straight segment from `tail` to `head`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MazeState {
    pub head: Position,
    pub tail: Position,
}

impl MazeState {
    pub fn new(head: Position, tail: Position) -> Self {
        Self { head, tail }
    }

    /// Whether head and tail differ on exactly one axis.
    pub fn is_straight(&self) -> bool {
        let differing_axes = (0..2).filter(|&axis| self.head[axis] != self.tail[axis]);
        differing_axes.count() == 1
    }

    /// Number of cells the robot covers.
    pub fn length(&self) -> usize {
        manhattan_distance(self.head, self.tail) as usize + 1
    }

    /// Unit vector pointing from the tail towards the head.
    pub fn heading(&self) -> Position {
        [
            self.head[0].cmp(&self.tail[0]) as i32,
            self.head[1].cmp(&self.tail[1]) as i32,
        ]
    }

    /// Middle point between head and tail.
    pub fn center(&self) -> [f64; 2] {
        [
            (f64::from(self.head[0]) + f64::from(self.tail[0])) / 2.,
            (f64::from(self.head[1]) + f64::from(self.tail[1])) / 2.,
        ]
    }

    /// The covered cells, from tail to head.
    pub fn cells(&self) -> impl Iterator<Item = Position> {
        let heading = self.heading();
        let tail = self.tail;
        (0..self.length() as i32).map(move |step| {
            [tail[0] + heading[0] * step, tail[1] + heading[1] * step]
        })
    }

    pub fn translated(&self, offset: Position) -> Self {
        Self {
            head: [self.head[0] + offset[0], self.head[1] + offset[1]],
            tail: [self.tail[0] + offset[0], self.tail[1] + offset[1]],
        }
    }

    /// The same cells with head and tail swapped.
    pub fn reversed(&self) -> Self {
        Self {
            head: self.tail,
            tail: self.head,
        }
    }
}

pub fn manhattan_distance(a: Position, b: Position) -> u64 {
    u64::from(a[0].abs_diff(b[0])) + u64::from(a[1].abs_diff(b[1]))
}

/// A move translates the whole body by one cell, relative to the heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, strum_macros::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Move {
    Forward,
    Left,
    Right,
}

impl Move {
    /// Offset applied to every cell of a robot with the given heading. Rows
    /// grow downwards, so heading east the left side is north.
    pub fn offset(&self, heading: Position) -> Position {
        let [row, col] = heading;
        match self {
            Move::Forward => [row, col],
            Move::Left => [-col, row],
            Move::Right => [col, -row],
        }
    }
}
