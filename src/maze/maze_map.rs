use crate::maze::{MazeError, Position};
use itertools::Itertools;
use std::fmt;
use std::str::FromStr;

const FREE_CELL: char = '.';
const BLOCKED_CELL: char = '#';

/// A rectangular grid of free and blocked cells. Positions outside the grid
/// are treated as blocked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeMap {
    rows: usize,
    cols: usize,
    blocked: Vec<bool>,
}

impl MazeMap {
    /// An obstacle-free map.
    pub fn open(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            blocked: vec![false; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_free(&self, position: Position) -> bool {
        match self.index(position) {
            Some(index) => !self.blocked[index],
            None => false,
        }
    }

    fn index(&self, [row, col]: Position) -> Option<usize> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }
}

impl FromStr for MazeMap {
    type Err = MazeError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let cols = lines.first().map_or(0, |line| line.chars().count());
        if cols == 0 {
            return Err(MazeError::EmptyMap);
        }

        let mut blocked = Vec::with_capacity(lines.len() * cols);
        for (row, line) in lines.iter().enumerate() {
            if line.chars().count() != cols {
                return Err(MazeError::RaggedMap { row });
            }
            for (col, cell) in line.chars().enumerate() {
                match cell {
                    FREE_CELL => blocked.push(false),
                    BLOCKED_CELL => blocked.push(true),
                    _ => return Err(MazeError::InvalidCell { cell, row, col }),
                }
            }
        }

        Ok(Self {
            rows: lines.len(),
            cols,
            blocked,
        })
    }
}

impl fmt::Display for MazeMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cols == 0 {
            return Ok(());
        }
        let text = self
            .blocked
            .chunks(self.cols)
            .map(|row| {
                row.iter()
                    .map(|&blocked| if blocked { BLOCKED_CELL } else { FREE_CELL })
                    .collect::<String>()
            })
            .join("\n");
        write!(f, "{}", text)
    }
}
