//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, PieceKind, Square};
//!
//! let e1 = Square::new(1, 5).unwrap();
//! let e8 = Square::new(8, 5).unwrap();
//! let a2 = Square::new(2, 1).unwrap();
//! let board = BoardBuilder::new()
//!     .piece(e1, Color::White, PieceKind::King)
//!     .piece(e8, Color::Black, PieceKind::King)
//!     .piece(a2, Color::White, PieceKind::Pawn)
//!     .build()
//!     .unwrap();
//! assert_eq!(board.king_square(Color::Black), e8);
//! ```

use super::error::SetupError;
use super::{Board, Color, PieceKind, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pub(crate) pieces: Vec<(Square, Color, PieceKind)>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Create a builder starting from the standard initial position.
    ///
    /// The two kings are listed first, White then Black.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        for color in Color::BOTH {
            builder.pieces.push((home(color, 5), color, PieceKind::King));
        }
        for color in Color::BOTH {
            for (column, &kind) in (1..).zip(BACK_RANK.iter()) {
                if kind != PieceKind::King {
                    builder.pieces.push((home(color, column), color, kind));
                }
            }
            for column in 1..=8 {
                if let Some(square) = Square::new(i32::from(color.pawn_start_row()), column) {
                    builder.pieces.push((square, color, PieceKind::Pawn));
                }
            }
        }
        builder
    }

    /// Place a piece on the board, replacing anything already there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, kind));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Place a piece, refusing to overwrite. Used by the FEN parser, where a
    /// doubly-filled square means the input is broken.
    pub(crate) fn place(&mut self, square: Square, color: Color, kind: PieceKind) -> Result<(), SetupError> {
        if self.pieces.iter().any(|(sq, _, _)| *sq == square) {
            return Err(SetupError::SquareOccupied(square));
        }
        self.pieces.push((square, color, kind));
        Ok(())
    }

    /// Build the board.
    ///
    /// Fails unless each color has exactly one king.
    pub fn build(self) -> Result<Board, SetupError> {
        let kings = [self.king_index(Color::White)?, self.king_index(Color::Black)?];
        Ok(Board::from_placements(&self.pieces, kings))
    }

    fn king_index(&self, color: Color) -> Result<usize, SetupError> {
        let mut kings = self
            .pieces
            .iter()
            .enumerate()
            .filter(|&(_, &(_, c, kind))| c == color && kind == PieceKind::King)
            .map(|(idx, _)| idx);
        match (kings.next(), kings.next()) {
            (Some(idx), None) => Ok(idx),
            (None, _) => Err(SetupError::MissingKing(color)),
            (Some(_), Some(_)) => Err(SetupError::DuplicateKing(color)),
        }
    }
}

fn home(color: Color, column: i32) -> Square {
    let row = match color {
        Color::White => 1,
        Color::Black => 8,
    };
    Square::from_index(((row - 1) * 8 + (column - 1)) as usize)
}
