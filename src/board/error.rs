//! Error types for board setup and rule queries.
//!
//! Rule queries themselves are total; these errors cover malformed setup
//! input and broken caller contracts.

use std::fmt;

use super::types::{Color, PieceId, Square};

/// Error type for square notation parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Not of the form `[a-h][1-8]`
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for positions that break the one-king-per-color rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    MissingKing(Color),
    DuplicateKing(Color),
    /// Two pieces placed on the same square
    SquareOccupied(Square),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::MissingKing(color) => write!(f, "{color} has no king"),
            SetupError::DuplicateKing(color) => write!(f, "{color} has more than one king"),
            SetupError::SquareOccupied(square) => {
                write!(f, "Square {square} is already occupied")
            }
        }
    }
}

impl std::error::Error for SetupError {}

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Empty FEN string
    Empty,
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// More than eight ranks
    InvalidRank { rank: usize },
    /// Fewer than eight ranks
    TooFewRanks { found: usize },
    /// Too many files in a rank
    TooManyFiles { rank: usize, files: usize },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Placement parsed but the position is not playable
    Setup(SetupError),
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::Empty => write!(f, "Empty FEN string"),
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidRank { rank } => {
                write!(f, "Invalid rank index {rank} in FEN")
            }
            FenError::TooFewRanks { found } => {
                write!(f, "FEN placement needs 8 ranks, found {found}")
            }
            FenError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::Setup(err) => write!(f, "Unplayable position: {err}"),
        }
    }
}

impl std::error::Error for FenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FenError::Setup(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SetupError> for FenError {
    fn from(err: SetupError) -> Self {
        FenError::Setup(err)
    }
}

/// Broken caller contract.
///
/// Legal play never produces these; seeing one means a stale id or a move
/// that bypassed legality checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// The id does not name a piece currently on the board
    UnknownPiece(PieceId),
    /// A move tried to land on the enemy king
    KingCapture(Square),
    /// A move tried to land on a piece of the mover's own color
    OwnPieceCapture(Square),
}

impl fmt::Display for RulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RulesError::UnknownPiece(id) => write!(f, "Piece {id} is not on the board"),
            RulesError::KingCapture(square) => {
                write!(f, "Move onto {square} would capture a king")
            }
            RulesError::OwnPieceCapture(square) => {
                write!(f, "Move onto {square} would capture an own piece")
            }
        }
    }
}

impl std::error::Error for RulesError {}
