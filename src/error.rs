use std::{io, num::ParseIntError};

use crate::Move;

/// Everything that can be wrong with puzzle input before a search starts.
#[derive(thiserror::Error, Debug)]
pub enum PuzzleError {
    #[error("invalid puzzle size: {0} tiles is not one less than a square")]
    InvalidTileCount(usize),
    #[error("goal zero position {index} is outside a {size}x{size} board")]
    GoalIndexOutOfRange { index: i64, size: usize },
    #[error("board is empty")]
    EmptyBoard,
    #[error("row {row} has {len} values, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },
    #[error("boards larger than 16x16 are not supported (got {0}x{0})")]
    TooLarge(usize),
    #[error("value {value} is out of range for a {size}x{size} board")]
    ValueOutOfRange { value: u32, size: usize },
    #[error("tile {0} appears more than once")]
    DuplicateTile(u8),
    #[error("board has no blank (0)")]
    MissingBlank,
    #[error("invalid number: {0}")]
    Parse(#[from] ParseIntError),
    #[error("board is {board}x{board} but goal is {goal}x{goal}")]
    SizeMismatch { board: usize, goal: usize },
    #[error("move {0} would slide off the board")]
    IllegalMove(Move),
    #[error("unknown move {0:?}")]
    UnknownMove(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

pub type PuzzleResult<T> = Result<T, PuzzleError>;
