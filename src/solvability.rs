use itertools::Itertools;

use crate::board::{Board, BLANK};

/// Pairs of numbered tiles, read row-major, where the earlier one is larger.
pub fn count_inversions(board: &Board) -> usize {
    board
        .tiles()
        .iter()
        .filter(|&&t| t != BLANK)
        .tuple_combinations()
        .filter(|(a, b)| a > b)
        .count()
}

// A horizontal move never reorders tiles. A vertical move carries one tile
// past k-1 others: inversion parity is unchanged for odd k, and flips
// together with the blank's row parity for even k.
fn parity_class(board: &Board) -> usize {
    let inversions = count_inversions(board);
    if board.size() % 2 == 1 {
        inversions % 2
    } else {
        (inversions + board.blank().0) % 2
    }
}

/// Whether `board` can be slid into `goal`. Both must be the same size.
///
/// With the usual goal (blank bottom-right) on an odd-sized board this is
/// just "the inversion count is even".
pub fn is_solvable(board: &Board, goal: &Board) -> bool {
    debug_assert_eq!(board.size(), goal.size());
    parity_class(board) == parity_class(goal)
}
