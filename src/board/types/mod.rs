//! Core rule types.
//!
//! - `PieceKind`, `Color`, `PieceId`, `PieceInfo` - what stands on the board
//! - `Square` - 1-indexed coordinates and line geometry
//! - `Movement`, `MoveRule` - per-kind travel descriptors

mod movement;
mod piece;
mod square;

pub use movement::{MoveRule, Movement, Offset};
pub use piece::{Color, PieceId, PieceInfo, PieceKind};
pub use square::Square;

pub(crate) use movement::Flow;
