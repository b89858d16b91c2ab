//! Board-level rule tests.
//!
//! Tests are organized into separate files by category:
//! - `empty_board.rs` - lone pieces and their full reach
//! - `check_scenarios.rs` - single and double check resolution
//! - `pins.rs` - pinned pieces confined to their line
//! - `edge_cases.rs` - assorted positions that broke naive implementations
//! - `proptest.rs` - random playouts checked against a brute-force oracle

mod edge_cases;
mod proptest;

use crate::board::{king_in_check, possible_moves, Board, PieceInfo, PieceKind, Square};

pub(super) fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

/// Legal destinations of `piece` given its king's current check state.
pub(super) fn legal(board: &Board, piece: &PieceInfo) -> Vec<Square> {
    let check = king_in_check(board, piece.color);
    possible_moves(board, piece, check.as_ref(), true)
}

/// Brute force: play the move on a copy and look at the mover's king.
pub(super) fn leaves_king_safe(board: &Board, piece: &PieceInfo, to: Square) -> bool {
    let mut after = board.clone();
    if after.move_piece(piece.id, to).is_err() {
        return false;
    }
    let enemy_king = after.king_square(piece.color.opponent());
    let kings_apart = piece.kind != PieceKind::King || to.distance(enemy_king) > 1;
    king_in_check(&after, piece.color).is_none() && kings_apart
}

/// Reach of `piece` ignoring check and pin; kings get their raw steps.
pub(super) fn pseudo_moves(board: &Board, piece: &PieceInfo) -> Vec<Square> {
    if piece.kind == PieceKind::King {
        return Square::all()
            .filter(|&s| s.distance(piece.square) == 1)
            .filter(|&s| board.piece_at(s).map_or(true, |p| p.color != piece.color))
            .collect();
    }
    possible_moves(board, piece, None, false)
}
