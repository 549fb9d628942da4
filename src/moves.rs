use std::{fmt::Display, str::FromStr};

use smallvec::SmallVec;

use crate::error::PuzzleError;

/// A move, named for the direction the tile next to the blank slides.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Move {
    Down,
    Up,
    Right,
    Left,
}

// search order; when several shortest solutions exist this picks the one returned
pub const MOVES: [Move; 4] = [Move::Down, Move::Up, Move::Right, Move::Left];

impl Move {
    /// Offset applied to the blank's (row, column).
    pub fn delta(self) -> (isize, isize) {
        match self {
            Move::Down => (-1, 0),
            Move::Up => (1, 0),
            Move::Right => (0, -1),
            Move::Left => (0, 1),
        }
    }

    pub fn opposite(self) -> Move {
        match self {
            Move::Down => Move::Up,
            Move::Up => Move::Down,
            Move::Right => Move::Left,
            Move::Left => Move::Right,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Move::Down => "down",
            Move::Up => "up",
            Move::Right => "right",
            Move::Left => "left",
        }
    }

    /// Where the blank ends up, or `None` if that is off the board.
    pub fn target(self, blank: (usize, usize), size: usize) -> Option<(usize, usize)> {
        let (dx, dy) = self.delta();
        let x = blank.0.checked_add_signed(dx)?;
        let y = blank.1.checked_add_signed(dy)?;
        (x < size && y < size).then_some((x, y))
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Move {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MOVES
            .into_iter()
            .find(|m| m.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PuzzleError::UnknownMove(s.to_owned()))
    }
}

/// The legal moves from `blank`, in search order, each with the cell the
/// blank moves to.
pub fn candidates(blank: (usize, usize), size: usize) -> SmallVec<[(Move, (usize, usize)); 4]> {
    MOVES
        .into_iter()
        .filter_map(|m| m.target(blank, size).map(|to| (m, to)))
        .collect()
}
