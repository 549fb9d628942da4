//! Optimal solver for k×k sliding tile puzzles.
//!
//! A start board is first checked for solvability against the goal by
//! inversion parity; solvable boards are then searched with IDA* using the
//! Manhattan distance, which yields a shortest move sequence.

pub mod board;
pub mod error;
pub mod goal;
pub mod heuristic;
pub mod moves;
pub mod reference;
pub mod search;
pub mod solvability;

pub use board::{parse_board, Board};
pub use error::{PuzzleError, PuzzleResult};
pub use goal::{goal_board, size_for_tiles, Goal, GoalBlank};
pub use moves::Move;
pub use search::{solve, IdaSearch, Outcome, Solution};
pub use solvability::is_solvable;
