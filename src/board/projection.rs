//! Ghost projection: what would a piece of a given kind hit from a square?
//!
//! Nothing is placed on the board. The walk uses the same jump/ray
//! descriptors as move generation, but stops at the first occupied square of
//! every line and records it only when it holds an enemy. Because attacks are
//! symmetric, the enemies of kind `T` found by projecting `T` from `S` are
//! exactly the enemy `T`s attacking `S`.

use super::types::{Flow, Movement};
use super::{Board, Color, PieceInfo, PieceKind, Square};

/// Enemies of `color` hit by `movement` from `from`.
///
/// `transparent` names a square to walk through as if it were empty; check
/// detection passes the moving king's own square so a king cannot hide
/// behind itself when stepping along a checking line.
pub fn project(
    board: &Board,
    color: Color,
    from: Square,
    movement: Movement,
    transparent: Option<Square>,
) -> Vec<PieceInfo> {
    let mut hits = Vec::new();
    movement.walk(from, |square| {
        if Some(square) == transparent {
            return Flow::Continue;
        }
        match board.piece_at(square) {
            None => Flow::Continue,
            Some(piece) => {
                if piece.color != color {
                    hits.push(piece);
                }
                Flow::Stop
            }
        }
    });
    hits
}

/// Enemy pieces of exactly `kind` that attack `from` by that kind's movement.
///
/// Pawns have no projectable movement and always yield nothing; their
/// attacks are looked up directly by check detection.
pub fn attackers_of_kind(
    board: &Board,
    color: Color,
    from: Square,
    kind: PieceKind,
    transparent: Option<Square>,
) -> Vec<PieceInfo> {
    let Some(movement) = kind.rule().movement() else {
        return Vec::new();
    };
    let mut hits = project(board, color, from, movement, transparent);
    hits.retain(|piece| piece.kind == kind);
    hits
}
