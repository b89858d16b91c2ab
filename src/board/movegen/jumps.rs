use super::super::types::{Movement, Offset};
use super::super::{Board, PieceInfo, Square};
use super::MoveFilter;

/// Knight-style jumps: each offset is an independent candidate.
pub(crate) fn jump_moves(
    board: &Board,
    piece: &PieceInfo,
    offsets: &'static [Offset],
    filter: &MoveFilter<'_>,
) -> Vec<Square> {
    let mut moves = Vec::with_capacity(offsets.len());
    Movement::Jumps(offsets).walk(piece.square, |target| filter.visit(board, target, &mut moves));
    moves
}
