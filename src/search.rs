use log::{debug, info};

use crate::{
    board::Board,
    error::{PuzzleError, PuzzleResult},
    goal::Goal,
    heuristic::{after_slide, manhattan_distance},
    moves::{candidates, Move},
    solvability::is_solvable,
};

/// An optimal move sequence and what it took to find it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    pub moves: Vec<Move>,
    /// Thresholds tried, the last one being the solution length.
    pub iterations: u32,
    pub visited: usize,
    pub generated: usize,
}

impl Solution {
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Solved(Solution),
    Unsolvable,
}

impl Outcome {
    /// Number of moves, or -1 when the goal cannot be reached.
    pub fn path_len(&self) -> i64 {
        match self {
            Outcome::Solved(solution) => solution.len() as i64,
            Outcome::Unsolvable => -1,
        }
    }

    pub fn solution(&self) -> Option<&Solution> {
        match self {
            Outcome::Solved(solution) => Some(solution),
            Outcome::Unsolvable => None,
        }
    }
}

/// Iterative-deepening A* over a single board that is mutated in place and
/// restored on backtrack.
pub struct IdaSearch<'g> {
    board: Board,
    goal: &'g Goal,
    path: Vec<Move>,
    visited: usize,
    generated: usize,
}

impl<'g> IdaSearch<'g> {
    pub fn new(board: Board, goal: &'g Goal) -> IdaSearch<'g> {
        debug_assert_eq!(board.size(), goal.size());
        IdaSearch {
            board,
            goal,
            path: Vec::new(),
            visited: 0,
            generated: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn path(&self) -> &[Move] {
        &self.path
    }

    /// Raises the threshold one step at a time, starting from the start
    /// board's distance, until a depth-limited pass reaches the goal.
    ///
    /// Never returns if the goal is unreachable; check solvability first.
    pub fn run(mut self) -> Solution {
        let mut threshold = manhattan_distance(&self.board, self.goal);
        let mut iterations = 1;

        while !self.depth_limited(threshold) {
            debug!(
                "threshold {} exhausted after {} nodes",
                threshold, self.visited
            );
            threshold += 1;
            iterations += 1;
        }

        info!(
            "solved in {} moves: {} thresholds, visited {} (generated {})",
            self.path.len(),
            iterations,
            self.visited,
            self.generated
        );

        Solution {
            moves: self.path,
            iterations,
            visited: self.visited,
            generated: self.generated,
        }
    }

    /// One depth-first pass from the current board, pruning any node whose
    /// cost so far plus distance exceeds `threshold`.
    ///
    /// On success the path holds the winning moves and the board is the
    /// goal. On failure both are exactly as they were before the call.
    pub fn depth_limited(&mut self, threshold: u32) -> bool {
        let h = manhattan_distance(&self.board, self.goal);
        self.descend(0, h, threshold, None)
    }

    fn descend(&mut self, g: u32, h: u32, threshold: u32, last: Option<Move>) -> bool {
        self.visited += 1;
        debug_assert_eq!(h, manhattan_distance(&self.board, self.goal));

        if g + h > threshold {
            return false;
        }
        if h == 0 {
            return true;
        }

        let blank = self.board.blank();
        for (m, to) in candidates(blank, self.board.size()) {
            // stepping straight back can't be part of a shortest path
            if last == Some(m.opposite()) {
                continue;
            }
            self.generated += 1;

            let tile = self.board.swap_blank(to);
            self.path.push(m);

            let next_h = after_slide(h, tile, to, blank, self.goal);
            if self.descend(g + 1, next_h, threshold, Some(m)) {
                return true;
            }

            self.path.pop();
            self.board.swap_blank(blank);
        }

        false
    }
}

/// Finds a shortest sequence of moves turning `start` into `goal`.
pub fn solve(start: &Board, goal: &Board) -> PuzzleResult<Outcome> {
    if start.size() != goal.size() {
        return Err(PuzzleError::SizeMismatch {
            board: start.size(),
            goal: goal.size(),
        });
    }

    if !is_solvable(start, goal) {
        info!("board cannot reach the goal, skipping search");
        return Ok(Outcome::Unsolvable);
    }

    let goal = Goal::new(goal.clone());
    Ok(Outcome::Solved(IdaSearch::new(start.clone(), &goal).run()))
}
