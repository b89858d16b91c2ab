//! Square coordinates and line geometry.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the board as (row, column), both 1-indexed.
///
/// Row 1 is White's back rank, column 1 is the a-file. Values outside
/// `1..=8` are never constructed; every lookup that could leave the board
/// returns `None` instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square {
    row: u8,
    column: u8,
}

impl Square {
    /// Create a square, or `None` outside `[1,8]×[1,8]`.
    #[must_use]
    pub const fn new(row: i32, column: i32) -> Option<Self> {
        if row >= 1 && row <= 8 && column >= 1 && column <= 8 {
            Some(Square {
                row: row as u8,
                column: column as u8,
            })
        } else {
            None
        }
    }

    /// Row (1-8, where 1 = White's back rank)
    #[inline]
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Column (1-8, where 1 = the a-file)
    #[inline]
    #[must_use]
    pub const fn column(self) -> u8 {
        self.column
    }

    /// The square `dr` rows and `dc` columns away, if it is on the board.
    #[inline]
    #[must_use]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        Square::new(
            i32::from(self.row) + i32::from(dr),
            i32::from(self.column) + i32::from(dc),
        )
    }

    /// Index 0-63 (a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        (self.row as usize - 1) * 8 + (self.column as usize - 1)
    }

    #[inline]
    #[must_use]
    pub(crate) const fn from_index(idx: usize) -> Self {
        Square {
            row: (idx / 8) as u8 + 1,
            column: (idx % 8) as u8 + 1,
        }
    }

    /// All 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }

    /// Unit step from `self` toward `other` when both share a row, column or
    /// diagonal. `None` for equal or unaligned squares.
    #[must_use]
    pub fn step_toward(self, other: Square) -> Option<(i8, i8)> {
        let dr = other.row as i8 - self.row as i8;
        let dc = other.column as i8 - self.column as i8;
        if dr == 0 && dc == 0 {
            return None;
        }
        if dr == 0 || dc == 0 || dr.abs() == dc.abs() {
            Some((dr.signum(), dc.signum()))
        } else {
            None
        }
    }

    /// Squares strictly between `self` and `other` along their shared line.
    /// Empty when the two are adjacent, equal or unaligned.
    #[must_use]
    pub fn between(self, other: Square) -> Vec<Square> {
        let mut squares = Vec::new();
        let Some((dr, dc)) = self.step_toward(other) else {
            return squares;
        };
        let mut cursor = self;
        while let Some(next) = cursor.offset(dr, dc) {
            if next == other {
                break;
            }
            squares.push(next);
            cursor = next;
        }
        squares
    }

    /// Chebyshev distance: the number of king steps between two squares.
    #[inline]
    #[must_use]
    pub fn distance(self, other: Square) -> u8 {
        self.row.abs_diff(other.row).max(self.column.abs_diff(other.column))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.column - 1 + b'a') as char, self.row)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return Err(invalid());
        }
        let column = file as i32 - 'a' as i32 + 1;
        let row = rank as i32 - '0' as i32;
        Square::new(row, column).ok_or_else(invalid)
    }
}
