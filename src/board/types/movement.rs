//! Movement descriptors: how each piece kind travels.
//!
//! Every kind maps to a [`MoveRule`]. Knights, bishops, rooks and queens are
//! fully described by a [`Movement`] (jump offsets or ray directions); pawns
//! and kings carry extra rules that the move generator applies on top.

use super::piece::PieceKind;
use super::square::Square;

/// A (row, column) displacement.
pub type Offset = (i8, i8);

pub(crate) const KNIGHT_JUMPS: [Offset; 8] = [
    (-2, -1),
    (-2, 1),
    (2, 1),
    (2, -1),
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
];

pub(crate) const KING_STEPS: [Offset; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
];

pub(crate) const BISHOP_RAYS: [Offset; 4] = [(1, 1), (-1, -1), (1, -1), (-1, 1)];

pub(crate) const ROOK_RAYS: [Offset; 4] = [(1, 0), (-1, 0), (0, -1), (0, 1)];

// Bishop rays followed by rook rays.
pub(crate) const QUEEN_RAYS: [Offset; 8] = [
    BISHOP_RAYS[0],
    BISHOP_RAYS[1],
    BISHOP_RAYS[2],
    BISHOP_RAYS[3],
    ROOK_RAYS[0],
    ROOK_RAYS[1],
    ROOK_RAYS[2],
    ROOK_RAYS[3],
];

/// Geometric travel pattern shared by move generation and projection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Movement {
    /// Fixed offsets reached regardless of what stands in between.
    Jumps(&'static [Offset]),
    /// Directions followed square by square until the walk is stopped.
    Rays(&'static [Offset]),
}

/// Whether a ray walk goes on past the square just visited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Stop,
}

impl Movement {
    /// Visit every square the pattern reaches from `from`.
    ///
    /// Jumps visit each on-board target once and ignore the returned flow.
    /// Rays visit squares in order along each direction until the board
    /// edge or until `visit` answers [`Flow::Stop`].
    pub(crate) fn walk(self, from: Square, mut visit: impl FnMut(Square) -> Flow) {
        match self {
            Movement::Jumps(offsets) => {
                for &(dr, dc) in offsets {
                    if let Some(target) = from.offset(dr, dc) {
                        visit(target);
                    }
                }
            }
            Movement::Rays(directions) => {
                for &(dr, dc) in directions {
                    let mut cursor = from;
                    while let Some(next) = cursor.offset(dr, dc) {
                        if visit(next) == Flow::Stop {
                            break;
                        }
                        cursor = next;
                    }
                }
            }
        }
    }
}

/// Per-kind movement rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveRule {
    /// Forward pushes onto empty squares, diagonal captures only.
    Pawn,
    Jump(&'static [Offset]),
    Slide(&'static [Offset]),
    /// Single steps, each vetted against attacks and opposition.
    King(&'static [Offset]),
}

impl MoveRule {
    /// The geometric part of the rule. Pawns have none: their reach depends
    /// on color and occupancy.
    #[must_use]
    pub const fn movement(self) -> Option<Movement> {
        match self {
            MoveRule::Pawn => None,
            MoveRule::Jump(offsets) | MoveRule::King(offsets) => Some(Movement::Jumps(offsets)),
            MoveRule::Slide(directions) => Some(Movement::Rays(directions)),
        }
    }
}

impl PieceKind {
    #[must_use]
    pub const fn rule(self) -> MoveRule {
        match self {
            PieceKind::Pawn => MoveRule::Pawn,
            PieceKind::Knight => MoveRule::Jump(&KNIGHT_JUMPS),
            PieceKind::Bishop => MoveRule::Slide(&BISHOP_RAYS),
            PieceKind::Rook => MoveRule::Slide(&ROOK_RAYS),
            PieceKind::Queen => MoveRule::Slide(&QUEEN_RAYS),
            PieceKind::King => MoveRule::King(&KING_STEPS),
        }
    }
}
