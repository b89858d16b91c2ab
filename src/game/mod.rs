//! Turn-based game session driven by square clicks.
//!
//! A [`Game`] owns the board, the side to move and one [`Player`] per color.
//! Each click runs one transition of the selection state machine; a
//! committed move flips the turn, rebuilds both legal-move caches and
//! re-evaluates the result.
//!
//! # Example
//! ```
//! use chess_rules::game::{Game, GameResult, Transition};
//!
//! let mut game = Game::new();
//! let e2 = "e2".parse().unwrap();
//! let e4 = "e4".parse().unwrap();
//! assert!(matches!(game.click(e2), Transition::Selected(_)));
//! assert!(matches!(game.click(e4), Transition::Moved { .. }));
//! assert_eq!(game.result(), GameResult::Ongoing);
//! ```

mod config;
mod locator;
mod player;

use std::fmt;

use log::{debug, error, info, trace};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{
    king_in_check, side_to_move, Board, Check, Color, FenError, PieceId, PieceKind, RulesError,
    Square,
};
use player::Player;

pub use config::{ConfigError, GameConfig};
pub use locator::{Orientation, PixelGrid, SquareLocator};

/// Outcome of the game as seen by the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameResult {
    Ongoing,
    /// The named side is in check with no legal move
    Checkmate(Color),
    /// The named side is not in check but has no legal move
    Stalemate(Color),
}

impl GameResult {
    #[must_use]
    pub fn is_over(self) -> bool {
        self != GameResult::Ongoing
    }

    /// The side that delivered mate.
    #[must_use]
    pub fn winner(self) -> Option<Color> {
        match self {
            GameResult::Checkmate(loser) => Some(loser.opponent()),
            _ => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Ongoing => write!(f, "Ongoing"),
            GameResult::Checkmate(color) => {
                write!(f, "{} is checkmated, {} wins", color, color.opponent())
            }
            GameResult::Stalemate(color) => write!(f, "{} is stalemated", color),
        }
    }
}

/// What a click did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed
    Ignored,
    Selected(PieceId),
    Unselected,
    /// Selection moved to another piece of the same side
    Reselected(PieceId),
    Moved {
        from: Square,
        to: Square,
        captured: Option<PieceKind>,
    },
}

/// A game session: board, turn, selection and cached legality.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    turn: Color,
    players: [Player; 2],
    checks: [Option<Check>; 2],
    result: GameResult,
}

impl Game {
    /// Standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        Self::with_board(Board::new(), Color::White)
    }

    /// Start from an arbitrary board with `first_to_move` on turn.
    #[must_use]
    pub fn with_board(board: Board, first_to_move: Color) -> Self {
        let mut game = Game {
            board,
            turn: first_to_move,
            players: [Player::new(Color::White), Player::new(Color::Black)],
            checks: [None, None],
            result: GameResult::Ongoing,
        };
        game.refresh();
        game
    }

    /// Placement and side to move from FEN; other fields are ignored.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let board = Board::try_from_fen(fen)?;
        Ok(Self::with_board(board, side_to_move(fen)?))
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_board(config.board()?, config.first_to_move))
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[must_use]
    pub fn result(&self) -> GameResult {
        self.result
    }

    /// The piece selected by the side to move.
    #[must_use]
    pub fn selected(&self) -> Option<PieceId> {
        self.player(self.turn).selected()
    }

    /// Check on the `color` king as of the last committed move.
    #[must_use]
    pub fn check(&self, color: Color) -> Option<&Check> {
        self.checks[color.index()].as_ref()
    }

    /// Cached legal destinations of a live piece. Empty for every piece of
    /// the side not on turn.
    pub fn legal_moves(&self, id: PieceId) -> Result<&[Square], RulesError> {
        self.players
            .iter()
            .find_map(|player| player.legal_moves(id))
            .ok_or(RulesError::UnknownPiece(id))
    }

    /// Every cached (piece, destination) pair of `color`.
    #[must_use]
    pub fn all_legal_moves(&self, color: Color) -> Vec<(PieceId, Square)> {
        self.player(color).all_moves().collect()
    }

    /// Ids with a cache entry for `color`: exactly its live pieces.
    pub fn tracked_pieces(&self, color: Color) -> impl Iterator<Item = PieceId> + '_ {
        self.player(color).tracked()
    }

    /// Translate a pointer position and click the square under it.
    pub fn play(&mut self, locator: &impl SquareLocator, x: f32, y: f32) -> Transition {
        match locator.locate(x, y) {
            Some(square) => self.click(square),
            None => {
                trace!("click at ({}, {}) is off the board", x, y);
                Transition::Ignored
            }
        }
    }

    /// Run one step of the selection state machine for the side to move.
    pub fn click(&mut self, square: Square) -> Transition {
        if self.result.is_over() {
            trace!("click on {} after the game ended", square);
            return Transition::Ignored;
        }
        let turn = self.turn;
        let target = self.board.piece_at(square);

        let Some(selected) = self.player(turn).selected() else {
            return match target {
                Some(piece) if piece.color == turn => {
                    self.players[turn.index()].select(piece.id, &mut self.board);
                    trace!("{} selected {} on {}", turn, piece.kind, square);
                    Transition::Selected(piece.id)
                }
                _ => Transition::Ignored,
            };
        };

        let Some(moves) = self.player(turn).legal_moves(selected) else {
            error!("selected piece {} has no cached moves", selected);
            self.players[turn.index()].unselect(&mut self.board);
            return Transition::Unselected;
        };
        if moves.contains(&square) {
            return self.commit(selected, square);
        }

        self.players[turn.index()].unselect(&mut self.board);
        match target {
            Some(piece) if piece.id == selected => {
                trace!("{} unselected {}", turn, square);
                Transition::Unselected
            }
            Some(piece) if piece.color == turn => {
                self.players[turn.index()].select(piece.id, &mut self.board);
                trace!("{} reselected {} on {}", turn, piece.kind, square);
                Transition::Reselected(piece.id)
            }
            _ => Transition::Unselected,
        }
    }

    fn player(&self, color: Color) -> &Player {
        &self.players[color.index()]
    }

    fn commit(&mut self, id: PieceId, to: Square) -> Transition {
        let turn = self.turn;
        self.players[turn.index()].unselect(&mut self.board);

        let mover = match self.board.piece(id) {
            Ok(piece) => piece,
            Err(err) => {
                error!("cached move for a missing piece: {}", err);
                return Transition::Unselected;
            }
        };
        let captured = match self.board.move_piece(id, to) {
            Ok(captured) => captured,
            Err(err) => {
                error!("cached move {} to {} rejected: {}", mover.square, to, err);
                return Transition::Unselected;
            }
        };
        debug!(
            "{} {} {} to {}{}",
            turn,
            mover.kind,
            mover.square,
            to,
            captured.map_or(String::new(), |victim| format!(" takes {}", victim.kind))
        );

        self.turn = turn.opponent();
        self.refresh();
        Transition::Moved {
            from: mover.square,
            to,
            captured: captured.map(|victim| victim.kind),
        }
    }

    /// Recompute both checks and caches, then the result.
    fn refresh(&mut self) {
        for color in Color::BOTH {
            self.checks[color.index()] = king_in_check(&self.board, color);
        }
        for player in &mut self.players {
            let color = player.color();
            let check = self.checks[color.index()].as_ref();
            player.rebuild(&self.board, check, color == self.turn);
        }

        self.result = if self.player(self.turn).has_legal_move() {
            GameResult::Ongoing
        } else if self.checks[self.turn.index()].is_some() {
            GameResult::Checkmate(self.turn)
        } else {
            GameResult::Stalemate(self.turn)
        };
        if self.result.is_over() {
            info!("game over: {}", self.result);
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
