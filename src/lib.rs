pub mod board;
pub mod game;

pub use board::{Board, Color, PieceId, PieceKind, Square};
pub use game::{Game, GameConfig, GameResult, Transition};
