//! Board representation and one-ply chess legality.
//!
//! Squares are 1-indexed (row, column) coordinates. Legality is computed per
//! piece from its movement descriptor, filtered by occupancy, by the current
//! check on its king and by any pin holding it. Check and pin detection share
//! one primitive: projecting a piece kind from a square without touching the
//! board.
//!
//! No castling, en passant or promotion.
//!
//! # Example
//! ```
//! use chess_rules::board::{king_in_check, possible_moves, Board, Color};
//!
//! let board = Board::new();
//! assert!(king_in_check(&board, Color::White).is_none());
//! let count: usize = board
//!     .pieces(Color::White)
//!     .map(|piece| possible_moves(&board, &piece, None, true).len())
//!     .sum();
//! assert_eq!(count, 20);
//! ```

mod builder;
mod check;
mod error;
mod fen;
mod movegen;
mod pin;
mod projection;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use check::{in_check, king_in_check, opposition, Attacker, Check};
pub use error::{FenError, RulesError, SetupError, SquareError};
pub use fen::side_to_move;
pub use movegen::{king_moves, legal_moves_for, possible_moves};
pub use pin::{find_pin, Pin};
pub use projection::{attackers_of_kind, project};
pub use state::Board;
pub use types::{Color, MoveRule, Movement, Offset, PieceId, PieceInfo, PieceKind, Square};
