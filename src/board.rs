//! Board representation and encoding.
//!
//! A board is an immutable snapshot of the 18 intersections, one byte per
//! cell over the alphabet `{'x', 'W', 'B'}`. Every transition in the engine
//! produces a new board instead of mutating in place, so search trees never
//! share mutable state between parent and child positions.
//!
//! The external encoding is the same 18-character string, e.g.
//! `"WxxxxxxxxBxxxxxxxx"`. Parsing validates length and alphabet up front;
//! a malformed encoding is rejected before any search runs.

use std::fmt;

use crate::constants::{BLACK, CELLS, EMPTY, NEIGHBORS, WHITE};

/// One of the two players.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// The byte marking this side's pieces on the board.
    #[inline]
    pub fn byte(self) -> u8 {
        match self {
            Side::White => WHITE,
            Side::Black => BLACK,
        }
    }

    /// The other player.
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

/// Error produced when parsing a board encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseBoardError {
    /// The encoding is not exactly 18 characters long.
    BadLength(usize),
    /// A character outside `{'x', 'W', 'B'}` appeared at the given index.
    BadSymbol(usize, char),
}

impl fmt::Display for ParseBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseBoardError::BadLength(n) => {
                write!(f, "board encoding must be {CELLS} characters, got {n}")
            }
            ParseBoardError::BadSymbol(i, c) => {
                write!(f, "invalid symbol {c:?} at cell {i}, expected 'x', 'W' or 'B'")
            }
        }
    }
}

impl std::error::Error for ParseBoardError {}

/// A mill-board position: 18 cells, each empty or holding one piece.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [u8; CELLS],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// The starting position: all 18 cells empty.
    pub fn empty() -> Self {
        Board { cells: [EMPTY; CELLS] }
    }

    /// Parse an 18-character encoding.
    pub fn parse(s: &str) -> Result<Self, ParseBoardError> {
        let bytes = s.trim().as_bytes();
        if bytes.len() != CELLS {
            return Err(ParseBoardError::BadLength(bytes.len()));
        }
        let mut cells = [EMPTY; CELLS];
        for (i, &b) in bytes.iter().enumerate() {
            match b {
                EMPTY | WHITE | BLACK => cells[i] = b,
                _ => return Err(ParseBoardError::BadSymbol(i, b as char)),
            }
        }
        Ok(Board { cells })
    }

    /// Raw contents of a cell.
    #[inline]
    pub fn cell(&self, i: usize) -> u8 {
        self.cells[i]
    }

    /// True if the cell holds no piece.
    #[inline]
    pub fn is_empty(&self, i: usize) -> bool {
        self.cells[i] == EMPTY
    }

    /// True if the cell holds a piece of `side`.
    #[inline]
    pub fn is_side(&self, i: usize, side: Side) -> bool {
        self.cells[i] == side.byte()
    }

    /// A copy of this board with cell `i` set to `value`.
    #[inline]
    pub fn with_cell(&self, i: usize, value: u8) -> Board {
        let mut b = *self;
        b.cells[i] = value;
        b
    }

    /// Number of pieces of `side` on the board.
    pub fn count(&self, side: Side) -> usize {
        let piece = side.byte();
        self.cells.iter().filter(|&&c| c == piece).count()
    }

    /// A copy with every White piece turned Black and vice versa.
    ///
    /// Mill detection and placement generation are color-symmetric, so
    /// Black's opening moves are generated by inverting, generating for
    /// White, and inverting each child back.
    pub fn invert(&self) -> Board {
        let mut b = *self;
        for c in &mut b.cells {
            *c = match *c {
                WHITE => BLACK,
                BLACK => WHITE,
                other => other,
            };
        }
        b
    }

    /// Cells adjacent to `i` per the fixed board topology.
    #[inline]
    pub fn neighbors(i: usize) -> &'static [usize] {
        NEIGHBORS[i]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &c in &self.cells {
            write!(f, "{}", c as char)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrip() {
        let s = "WxxxBxxxxxWxxxxxxB";
        let board = Board::parse(s).unwrap();
        assert_eq!(board.to_string(), s);
    }

    #[test]
    fn test_parse_rejects_bad_length() {
        assert_eq!(
            Board::parse("Wxx"),
            Err(ParseBoardError::BadLength(3))
        );
        assert_eq!(
            Board::parse("xxxxxxxxxxxxxxxxxxxxx"),
            Err(ParseBoardError::BadLength(21))
        );
    }

    #[test]
    fn test_parse_rejects_bad_symbol() {
        assert_eq!(
            Board::parse("xxxxQxxxxxxxxxxxxx"),
            Err(ParseBoardError::BadSymbol(4, 'Q'))
        );
    }

    #[test]
    fn test_counts() {
        let board = Board::parse("WWWxxxxxxBBxxxxxxx").unwrap();
        assert_eq!(board.count(Side::White), 3);
        assert_eq!(board.count(Side::Black), 2);
    }

    #[test]
    fn test_invert_is_involution() {
        let board = Board::parse("WxBxWxBxWxBxxxxxxx").unwrap();
        let inverted = board.invert();
        assert_eq!(inverted.to_string(), "BxWxBxWxBxWxxxxxxx");
        assert_eq!(inverted.invert(), board);
    }

    #[test]
    fn test_neighbor_table_literals() {
        // The full table, checked against the board diagram.
        let expected: [&[usize]; CELLS] = [
            &[1, 2, 15],
            &[0, 3, 11],
            &[0, 3, 4, 12],
            &[1, 2, 5, 7],
            &[2, 5, 9],
            &[3, 4, 6],
            &[5, 7, 11],
            &[3, 6, 8, 14],
            &[1, 7, 17],
            &[4, 10, 12],
            &[9, 11, 13],
            &[6, 10, 14],
            &[2, 9, 13, 15],
            &[10, 12, 14, 16],
            &[7, 11, 13, 17],
            &[0, 12, 16],
            &[13, 15, 17],
            &[8, 14, 16],
        ];
        for (i, want) in expected.iter().enumerate() {
            assert_eq!(Board::neighbors(i), *want, "neighbors of cell {i}");
        }
    }

    #[test]
    fn test_neighbor_table_symmetric_except_legacy_edges() {
        // The inherited table carries two one-way edges, 1 -> 11 and
        // 8 -> 1; every other adjacency is mutual.
        let one_way = [(1, 11), (8, 1)];
        for i in 0..CELLS {
            for &j in Board::neighbors(i) {
                if one_way.contains(&(i, j)) {
                    assert!(!Board::neighbors(j).contains(&i));
                } else {
                    assert!(
                        Board::neighbors(j).contains(&i),
                        "adjacency {i} -> {j} has no reverse edge"
                    );
                }
            }
        }
    }
}
