//! Per-piece legal destination generation.
//!
//! Each generator walks its kind's movement pattern and passes every
//! reachable square through a [`MoveFilter`]: occupancy first, then the
//! active check, then the piece's pin.

mod jumps;
mod kings;
mod pawns;
mod sliders;

use super::check::Check;
use super::error::RulesError;
use super::pin::{find_pin, Pin};
use super::types::{Flow, MoveRule};
use super::{Board, Color, PieceId, PieceInfo, Square};

pub use kings::king_moves;

/// Occupancy, check and pin constraints for one piece's destinations.
pub(crate) struct MoveFilter<'a> {
    color: Color,
    check: Option<&'a Check>,
    pin: Option<Pin>,
}

impl<'a> MoveFilter<'a> {
    fn new(board: &Board, piece: &PieceInfo, check: Option<&'a Check>, enforce_pin: bool) -> Self {
        let pin = if enforce_pin {
            find_pin(board, piece.color, piece.square)
        } else {
            None
        };
        MoveFilter {
            color: piece.color,
            check,
            pin,
        }
    }

    fn allows(&self, square: Square) -> bool {
        !self.check.is_some_and(|check| check.restricted(square))
            && !self.pin.is_some_and(|pin| pin.restricted(square))
    }

    /// Record `square` if legal and report whether a ray may continue past it.
    ///
    /// The check and pin constraints only decide whether the square is kept;
    /// an occupied square ends the ray either way.
    pub(crate) fn visit(&self, board: &Board, square: Square, moves: &mut Vec<Square>) -> Flow {
        match board.piece_at(square) {
            Some(piece) if piece.color == self.color => Flow::Stop,
            Some(_) => {
                if self.allows(square) {
                    moves.push(square);
                }
                Flow::Stop
            }
            None => {
                if self.allows(square) {
                    moves.push(square);
                }
                Flow::Continue
            }
        }
    }

    /// Record `square` only if it is empty and legal (pawn pushes).
    pub(crate) fn visit_empty(&self, board: &Board, square: Square, moves: &mut Vec<Square>) {
        if board.is_empty(square) && self.allows(square) {
            moves.push(square);
        }
    }

    /// Record `square` only if it holds an enemy and is legal (pawn captures).
    pub(crate) fn visit_capture(&self, board: &Board, square: Square, moves: &mut Vec<Square>) {
        let enemy = board.piece_at(square).is_some_and(|p| p.color != self.color);
        if enemy && self.allows(square) {
            moves.push(square);
        }
    }
}

/// Destinations `piece` may move to, in generation order.
///
/// `check` is the current check on `piece`'s own king, if any. With
/// `enforce_pin` false the pin constraint is skipped, which yields the
/// piece's reach as if its king were not behind it. Kings ignore both
/// arguments: each step is tested for attacks directly.
#[must_use]
pub fn possible_moves(
    board: &Board,
    piece: &PieceInfo,
    check: Option<&Check>,
    enforce_pin: bool,
) -> Vec<Square> {
    match piece.kind.rule() {
        MoveRule::King(steps) => king_moves(board, piece, steps),
        MoveRule::Pawn => {
            pawns::pawn_moves(board, piece, &MoveFilter::new(board, piece, check, enforce_pin))
        }
        MoveRule::Jump(offsets) => jumps::jump_moves(
            board,
            piece,
            offsets,
            &MoveFilter::new(board, piece, check, enforce_pin),
        ),
        MoveRule::Slide(directions) => sliders::slider_moves(
            board,
            piece,
            directions,
            &MoveFilter::new(board, piece, check, enforce_pin),
        ),
    }
}

/// Legal destinations for the piece named by `id`.
pub fn legal_moves_for(
    board: &Board,
    id: PieceId,
    check: Option<&Check>,
) -> Result<Vec<Square>, RulesError> {
    let piece = board.piece(id)?;
    Ok(possible_moves(board, &piece, check, true))
}
