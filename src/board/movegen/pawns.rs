use super::super::{Board, PieceInfo, Square};
use super::MoveFilter;

/// Pawn pushes and captures. No en passant and no promotion: a pawn on the
/// last row simply has no forward square.
pub(crate) fn pawn_moves(board: &Board, pawn: &PieceInfo, filter: &MoveFilter<'_>) -> Vec<Square> {
    let mut moves = Vec::with_capacity(4);
    let dir = pawn.color.pawn_direction();
    let from = pawn.square;

    // Captures are listed "left" then "right" from the mover's side of the board
    let front = from.offset(dir, 0);
    let left = from.offset(dir, -dir);
    let right = from.offset(dir, dir);
    let double = if from.row() == pawn.color.pawn_start_row() {
        from.offset(2 * dir, 0)
    } else {
        None
    };

    if let Some(front) = front {
        filter.visit_empty(board, front, &mut moves);
    }
    for diagonal in [left, right].into_iter().flatten() {
        filter.visit_capture(board, diagonal, &mut moves);
    }
    if let (Some(front), Some(double)) = (front, double) {
        if board.is_empty(front) {
            filter.visit_empty(board, double, &mut moves);
        }
    }
    moves
}
