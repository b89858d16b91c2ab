use super::super::types::{Movement, Offset};
use super::super::{Board, PieceInfo, Square};
use super::MoveFilter;

/// Line movers: each ray runs until the edge, an own piece (excluded) or an
/// enemy piece (included).
pub(crate) fn slider_moves(
    board: &Board,
    piece: &PieceInfo,
    directions: &'static [Offset],
    filter: &MoveFilter<'_>,
) -> Vec<Square> {
    let mut moves = Vec::new();
    Movement::Rays(directions).walk(piece.square, |target| filter.visit(board, target, &mut moves));
    moves
}
