use std::{
    fmt::{Display, Write},
    ops::Index,
};

use crate::{
    error::{PuzzleError, PuzzleResult},
    moves::Move,
};

pub const BLANK: u8 = 0;

// tiles are stored as u8, so k*k - 1 must fit
pub const MAX_SIZE: usize = 16;

/// A k×k sliding puzzle, stored row-major, with the blank's position cached.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    size: usize,
    tiles: Vec<u8>,
    blank: (usize, usize),
}

impl Board {
    pub fn new(from: Vec<Vec<u32>>) -> PuzzleResult<Board> {
        let size = from.len();
        if size == 0 {
            return Err(PuzzleError::EmptyBoard);
        }
        if size > MAX_SIZE {
            return Err(PuzzleError::TooLarge(size));
        }

        let mut seen = vec![false; size * size];
        let mut tiles = Vec::with_capacity(size * size);
        for (row, line) in from.iter().enumerate() {
            if line.len() != size {
                return Err(PuzzleError::NotSquare {
                    row,
                    len: line.len(),
                    size,
                });
            }

            for &value in line {
                if value as usize >= size * size {
                    return Err(PuzzleError::ValueOutOfRange { value, size });
                }
                let value = value as u8;
                if std::mem::replace(&mut seen[value as usize], true) {
                    return Err(PuzzleError::DuplicateTile(value));
                }
                tiles.push(value);
            }
        }

        let ix = tiles
            .iter()
            .position(|&t| t == BLANK)
            .ok_or(PuzzleError::MissingBlank)?;

        Ok(Board {
            size,
            tiles,
            blank: (ix / size, ix % size),
        })
    }

    pub(crate) fn from_tiles(size: usize, tiles: Vec<u8>) -> Board {
        debug_assert_eq!(tiles.len(), size * size);
        let ix = tiles.iter().position(|&t| t == BLANK).unwrap_or_default();
        Board {
            size,
            tiles,
            blank: (ix / size, ix % size),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn blank(&self) -> (usize, usize) {
        self.blank
    }

    /// Row-major tile values, blank included.
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.tiles.chunks(self.size)
    }

    /// Slides the tile at `to` into the blank. `to` must be adjacent to the
    /// blank. Returns the tile that moved.
    pub(crate) fn swap_blank(&mut self, to: (usize, usize)) -> u8 {
        let from = self.blank.0 * self.size + self.blank.1;
        let target = to.0 * self.size + to.1;
        self.tiles.swap(from, target);
        self.blank = to;
        self.tiles[from]
    }

    /// Applies a single move, failing if the blank would leave the grid.
    pub fn apply(&mut self, m: Move) -> PuzzleResult<()> {
        let to = m
            .target(self.blank, self.size)
            .ok_or(PuzzleError::IllegalMove(m))?;
        self.swap_blank(to);
        Ok(())
    }

    /// Replays `path` on a copy of this board.
    pub fn apply_path(&self, path: &[Move]) -> PuzzleResult<Board> {
        let mut board = self.clone();
        for &m in path {
            board.apply(m)?;
        }
        Ok(board)
    }

    /// Every board one move away, with the move that reaches it.
    pub fn successors(&self) -> impl Iterator<Item = (Move, Board)> + '_ {
        crate::moves::candidates(self.blank, self.size)
            .into_iter()
            .map(move |(m, to)| {
                let mut next = self.clone();
                next.swap_blank(to);
                (m, next)
            })
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = (self.tiles.len() - 1).to_string().len();
        let mut first = true;
        for line in self.rows() {
            if !first {
                f.write_char('\n')?;
            } else {
                first = false;
            }

            for (ix, c) in line.iter().enumerate() {
                if ix > 0 {
                    f.write_char(' ')?;
                }
                write!(f, "{:>width$}", c, width = width)?;
            }
        }

        Ok(())
    }
}

impl Index<(usize, usize)> for Board {
    type Output = u8;
    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.tiles[index.0 * self.size + index.1]
    }
}

/// Reads one row per non-empty line, values separated by whitespace.
pub fn parse_board(b: &str) -> PuzzleResult<Board> {
    let rows = b
        .trim()
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|row| {
            row.split_whitespace()
                .map(str::parse::<u32>)
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

    Board::new(rows)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_and_finds_blank() {
        let board = parse_board("1 2 3\n4 0 6\n7 5 8\n").unwrap();
        assert_eq!(board.size(), 3);
        assert_eq!(board.blank(), (1, 1));
        assert_eq!(board[(2, 1)], 5);
        assert_eq!(board.to_string(), "1 2 3\n4 0 6\n7 5 8");
    }

    #[test]
    fn display_pads_wide_values() {
        let board = parse_board("1 2 3 4\n5 6 7 8\n9 10 11 12\n13 14 15 0").unwrap();
        assert_eq!(board.to_string().lines().nth(3), Some("13 14 15  0"));
    }

    #[test]
    fn rejects_malformed_boards() {
        assert!(matches!(parse_board(""), Err(PuzzleError::EmptyBoard)));
        assert!(matches!(
            parse_board("1 2\n3"),
            Err(PuzzleError::NotSquare { row: 1, len: 1, size: 2 })
        ));
        assert!(matches!(
            parse_board("1 2\n3 4"),
            Err(PuzzleError::ValueOutOfRange { value: 4, size: 2 })
        ));
        assert!(matches!(
            parse_board("1 1\n3 0"),
            Err(PuzzleError::DuplicateTile(1))
        ));
        assert!(matches!(parse_board("1 x\n3 0"), Err(PuzzleError::Parse(_))));
        assert!(matches!(parse_board("1 -2\n3 0"), Err(PuzzleError::Parse(_))));
    }

    #[test]
    fn apply_moves_blank_and_tile_together() {
        let mut board = parse_board("1 2 3\n4 5 6\n7 0 8").unwrap();
        board.apply(Move::Left).unwrap();
        assert_eq!(board.blank(), (2, 2));
        assert_eq!(board[(2, 1)], 8);
        assert_eq!(board[(2, 2)], BLANK);

        assert!(matches!(
            board.apply(Move::Left),
            Err(PuzzleError::IllegalMove(Move::Left))
        ));
        assert!(matches!(
            board.apply(Move::Up),
            Err(PuzzleError::IllegalMove(Move::Up))
        ));
    }

    #[test]
    fn apply_path_leaves_original_untouched() {
        let board = parse_board("1 2\n3 0").unwrap();
        let moved = board.apply_path(&[Move::Down, Move::Right]).unwrap();
        assert_eq!(board.blank(), (1, 1));
        assert_eq!(moved.blank(), (0, 0));
        assert_eq!(moved.to_string(), "0 1\n3 2");
    }
}
