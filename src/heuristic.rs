use crate::{
    board::{Board, BLANK},
    goal::Goal,
};

fn distance(a: (usize, usize), b: (usize, usize)) -> u32 {
    (a.0.abs_diff(b.0) + a.1.abs_diff(b.1)) as u32
}

/// Sum of Manhattan distances of every numbered tile to its goal cell.
///
/// Each move shifts exactly one tile by one cell, so this never
/// overestimates and changes by exactly one per move.
pub fn manhattan_distance(board: &Board, goal: &Goal) -> u32 {
    let size = board.size();
    board
        .tiles()
        .iter()
        .enumerate()
        .filter(|(_, &tile)| tile != BLANK)
        .map(|(ix, &tile)| distance((ix / size, ix % size), goal.position(tile)))
        .sum()
}

/// Updates `h` for `tile` having slid from `from` to `to`.
pub fn after_slide(h: u32, tile: u8, from: (usize, usize), to: (usize, usize), goal: &Goal) -> u32 {
    let target = goal.position(tile);
    h + distance(to, target) - distance(from, target)
}
