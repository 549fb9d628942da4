//! Memory-hungry exhaustive searches, used to check the IDA* solver on
//! small boards.

use pathfinding::directed::{astar::astar, bfs::bfs, bfs::bfs_reach};
use smallvec::SmallVec;

use crate::{board::Board, goal::Goal, heuristic::manhattan_distance};

fn neighbours(b: &Board) -> SmallVec<[Board; 4]> {
    b.successors().map(|(_, next)| next).collect()
}

/// Length of a shortest solution by breadth-first search, or `None` if
/// `goal` cannot be reached.
pub fn bfs_len(start: &Board, goal: &Board) -> Option<usize> {
    bfs(start, neighbours, |b| b == goal).map(|path| path.len() - 1)
}

/// Length of a shortest solution by A* with the Manhattan heuristic.
pub fn astar_len(start: &Board, goal: &Goal) -> Option<u32> {
    astar(
        start,
        |b| neighbours(b).into_iter().map(|next| (next, 1)),
        |b| manhattan_distance(b, goal),
        |b| b == goal.board(),
    )
    .map(|(_, cost)| cost)
}

/// Every board reachable from `from`, `from` included.
pub fn reachable(from: &Board) -> impl Iterator<Item = Board> {
    bfs_reach(from.clone(), neighbours)
}
