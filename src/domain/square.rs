//! Board coordinates: (rank, file) pairs, algebraic labels and the 180° flip.
//!
//! Pure domain module with no GPUI dependencies.

use std::fmt;

use thiserror::Error;

/// Errors raised by coordinate conversions. Both indicate a caller bug.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SquareError {
    #[error("rank {rank} / file {file} is outside the board")]
    OutOfRange { rank: u8, file: u8 },
    #[error("invalid square label {0:?}")]
    InvalidLabel(String),
}

/// A square on the 8×8 grid. Rank and file are both 1-based (a1 = (1, 1)).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Square {
    rank: u8,
    file: u8,
}

impl Square {
    pub fn new(rank: u8, file: u8) -> Result<Self, SquareError> {
        if (1..=8).contains(&rank) && (1..=8).contains(&file) {
            Ok(Self { rank, file })
        } else {
            Err(SquareError::OutOfRange { rank, file })
        }
    }

    /// Parse a two-character label such as `"e4"`.
    pub fn from_label(label: &str) -> Result<Self, SquareError> {
        let invalid = || SquareError::InvalidLabel(label.to_string());
        let bytes = label.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let (file, rank) = (bytes[0], bytes[1]);
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(invalid());
        }
        Ok(Self {
            rank: rank - b'0',
            file: file - b'a' + 1,
        })
    }

    pub fn rank(self) -> u8 {
        self.rank
    }

    pub fn file(self) -> u8 {
        self.file
    }

    pub fn label(self) -> String {
        format!("{}{}", self.file_char(), self.rank_char())
    }

    pub fn file_char(self) -> char {
        (b'a' + self.file - 1) as char
    }

    pub fn rank_char(self) -> char {
        (b'0' + self.rank) as char
    }

    /// The square rotated 180° about the board centre (a1 <-> h8).
    pub fn flipped(self) -> Self {
        Self {
            rank: 9 - self.rank,
            file: 9 - self.file,
        }
    }

    /// Index into an a8..h1 array (a8 = 0, h8 = 7, a1 = 56, h1 = 63).
    pub fn index(self) -> usize {
        (8 - self.rank as usize) * 8 + (self.file as usize - 1)
    }

    /// Inverse of [`Square::index`]. Returns `None` for indices past 63.
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= 64 {
            return None;
        }
        Some(Self {
            rank: ((64 - (index + 1)) / 8 + 1) as u8,
            file: (index % 8 + 1) as u8,
        })
    }

    /// Visual row/column (0-indexed, row 0 at the top of the drawn board).
    pub fn to_row_col(self) -> (usize, usize) {
        (8 - self.rank as usize, self.file as usize - 1)
    }

    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Self {
                rank: (8 - row) as u8,
                file: (col + 1) as u8,
            })
        } else {
            None
        }
    }

    /// All 64 squares in a8..h1 order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).filter_map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

/// Label for a (rank, file) pair.
pub fn square_label(rank: u8, file: u8) -> Result<String, SquareError> {
    Square::new(rank, file).map(Square::label)
}

/// Flip a label through the board centre: `flip_label("e4") == "d5"`.
pub fn flip_label(label: &str) -> Result<String, SquareError> {
    Square::from_label(label).map(|sq| sq.flipped().label())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_label() {
        assert_eq!(square_label(1, 1).unwrap(), "a1");
        assert_eq!(square_label(4, 5).unwrap(), "e4");
        assert_eq!(square_label(8, 8).unwrap(), "h8");
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            square_label(0, 3),
            Err(SquareError::OutOfRange { rank: 0, file: 3 })
        );
        assert!(square_label(9, 1).is_err());
        assert!(Square::new(4, 9).is_err());
    }

    #[test]
    fn test_flip_known_squares() {
        assert_eq!(flip_label("a1").unwrap(), "h8");
        assert_eq!(flip_label("e4").unwrap(), "d5");
        assert_eq!(flip_label("b3").unwrap(), "g6");
    }

    #[test]
    fn test_flip_is_involution() {
        for sq in Square::all() {
            let label = sq.label();
            let twice = flip_label(&flip_label(&label).unwrap()).unwrap();
            assert_eq!(twice, label);
        }
    }

    #[test]
    fn test_flip_rejects_malformed_labels() {
        for bad in ["", "e", "e44", "i1", "a9", "A1", "1a", "e0"] {
            assert_eq!(
                flip_label(bad),
                Err(SquareError::InvalidLabel(bad.to_string())),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_index_layout() {
        assert_eq!(Square::from_index(0).unwrap().label(), "a8");
        assert_eq!(Square::from_index(7).unwrap().label(), "h8");
        assert_eq!(Square::from_index(56).unwrap().label(), "a1");
        assert_eq!(Square::from_index(63).unwrap().label(), "h1");
        assert!(Square::from_index(64).is_none());
        for sq in Square::all() {
            assert_eq!(Square::from_index(sq.index()), Some(sq));
        }
    }

    #[test]
    fn test_row_col() {
        let a8 = Square::from_label("a8").unwrap();
        assert_eq!(a8.to_row_col(), (0, 0));
        let h1 = Square::from_label("h1").unwrap();
        assert_eq!(h1.to_row_col(), (7, 7));
        assert_eq!(Square::from_row_col(7, 7), Some(h1));
        assert_eq!(Square::from_row_col(8, 0), None);
    }
}
