use super::super::check::{in_check, opposition};
use super::super::types::{Flow, Movement, Offset};
use super::super::{Board, PieceInfo, Square};

/// King steps that land on an empty or enemy square, are not attacked and do
/// not touch the enemy king.
///
/// Attacks are evaluated with the king's current square treated as empty,
/// so stepping back along a checking line is refused.
#[must_use]
pub fn king_moves(board: &Board, king: &PieceInfo, steps: &'static [Offset]) -> Vec<Square> {
    let mut moves = Vec::with_capacity(steps.len());
    Movement::Jumps(steps).walk(king.square, |target| {
        let own = board.piece_at(target).is_some_and(|p| p.color == king.color);
        if !own && in_check(board, king.color, target).is_none() && !opposition(board, king.color, target) {
            moves.push(target);
        }
        Flow::Continue
    });
    moves
}
