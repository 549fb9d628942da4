use crate::{
    board::{Board, BLANK, MAX_SIZE},
    error::{PuzzleError, PuzzleResult},
};

/// Where the blank sits in a generated goal layout.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GoalBlank {
    BottomRight,
    /// Row-major index into the board.
    Index(usize),
}

impl GoalBlank {
    /// Reads the interactive convention: -1 is the bottom-right corner,
    /// anything else a row-major index.
    pub fn from_index(index: i64, size: usize) -> PuzzleResult<GoalBlank> {
        match index {
            -1 => Ok(GoalBlank::BottomRight),
            i if i >= 0 && (i as usize) < size * size => Ok(GoalBlank::Index(i as usize)),
            _ => Err(PuzzleError::GoalIndexOutOfRange { index, size }),
        }
    }
}

/// Grid side for a puzzle with `tiles` numbered tiles.
pub fn size_for_tiles(tiles: usize) -> PuzzleResult<usize> {
    let cells = tiles + 1;
    let size = (cells as f64).sqrt().round() as usize;
    if size * size != cells || size < 2 || size > MAX_SIZE {
        return Err(PuzzleError::InvalidTileCount(tiles));
    }
    Ok(size)
}

/// Tiles 1.. in row-major order with the blank at `blank`.
pub fn goal_board(size: usize, blank: GoalBlank) -> Board {
    let blank_ix = match blank {
        GoalBlank::BottomRight => size * size - 1,
        GoalBlank::Index(ix) => ix,
    };

    let mut value = 0;
    let tiles = (0..size * size)
        .map(|ix| {
            if ix == blank_ix {
                BLANK
            } else {
                value += 1;
                value
            }
        })
        .collect();

    Board::from_tiles(size, tiles)
}

/// A target board together with the position of every tile in it.
#[derive(Clone, Debug)]
pub struct Goal {
    board: Board,
    positions: Vec<(usize, usize)>,
}

impl Goal {
    pub fn new(board: Board) -> Goal {
        let size = board.size();
        let mut positions = vec![(0, 0); size * size];
        for (ix, &tile) in board.tiles().iter().enumerate() {
            positions[tile as usize] = (ix / size, ix % size);
        }

        Goal { board, positions }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Where `tile` belongs.
    pub fn position(&self, tile: u8) -> (usize, usize) {
        self.positions[tile as usize]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn tile_counts() {
        assert_eq!(size_for_tiles(3).unwrap(), 2);
        assert_eq!(size_for_tiles(8).unwrap(), 3);
        assert_eq!(size_for_tiles(15).unwrap(), 4);
        assert_eq!(size_for_tiles(255).unwrap(), 16);
        for bad in [0, 2, 7, 9, 288] {
            assert!(matches!(
                size_for_tiles(bad),
                Err(PuzzleError::InvalidTileCount(t)) if t == bad
            ));
        }
    }

    #[test]
    fn default_goal_has_blank_bottom_right() {
        let goal = goal_board(3, GoalBlank::BottomRight);
        assert_eq!(goal.to_string(), "1 2 3\n4 5 6\n7 8 0");
        assert_eq!(goal.blank(), (2, 2));
    }

    #[test]
    fn goal_blank_at_index_skips_that_slot() {
        let goal = goal_board(3, GoalBlank::Index(0));
        assert_eq!(goal.to_string(), "0 1 2\n3 4 5\n6 7 8");

        let goal = goal_board(2, GoalBlank::Index(1));
        assert_eq!(goal.to_string(), "1 0\n2 3");
        assert_eq!(goal.blank(), (0, 1));
    }

    #[test]
    fn goal_blank_index_convention() {
        assert_eq!(GoalBlank::from_index(-1, 3).unwrap(), GoalBlank::BottomRight);
        assert_eq!(GoalBlank::from_index(4, 3).unwrap(), GoalBlank::Index(4));
        assert!(GoalBlank::from_index(9, 3).is_err());
        assert!(GoalBlank::from_index(-2, 3).is_err());
    }

    #[test]
    fn positions_follow_goal_layout() {
        let goal = Goal::new(goal_board(3, GoalBlank::Index(4)));
        assert_eq!(goal.position(0), (1, 1));
        assert_eq!(goal.position(1), (0, 0));
        assert_eq!(goal.position(5), (1, 2));
        assert_eq!(goal.position(8), (2, 2));
    }
}
