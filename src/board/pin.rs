//! Pin detection.

use super::check::{line_restricted, Attacker};
use super::projection::attackers_of_kind;
use super::{Board, Color, PieceKind, Square};

/// A piece held on the line between its king and an enemy slider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pin {
    king: Square,
    pinned: Square,
    pinner: Attacker,
}

impl Pin {
    #[must_use]
    pub fn king_square(&self) -> Square {
        self.king
    }

    #[must_use]
    pub fn pinned_square(&self) -> Square {
        self.pinned
    }

    #[must_use]
    pub fn pinner(&self) -> Attacker {
        self.pinner
    }

    /// Whether `king` sits on the far side of `pinned` from `pinner`, on the
    /// same row, column or diagonal.
    #[must_use]
    pub fn in_path(pinned: Square, pinner: Square, king: Square) -> bool {
        match (pinner.step_toward(pinned), pinned.step_toward(king)) {
            (Some(inward), Some(onward)) => inward == onward,
            _ => false,
        }
    }

    /// Whether moving the pinned piece to `candidate` would leave the line.
    /// Capturing the pinner stays on it.
    #[must_use]
    pub fn restricted(&self, candidate: Square) -> bool {
        line_restricted(self.king, &self.pinner, candidate)
    }
}

/// The pin holding the `color` piece on `square`, if any.
///
/// Projects each line-moving kind from `square` as if a king stood there; an
/// enemy slider found that way pins the piece when the real king is the next
/// piece along the same line on the other side.
#[must_use]
pub fn find_pin(board: &Board, color: Color, square: Square) -> Option<Pin> {
    let king = board.king_square(color);
    if king == square {
        return None;
    }
    PieceKind::SLIDERS
        .iter()
        .flat_map(|&kind| attackers_of_kind(board, color, square, kind, None))
        .find(|candidate| {
            Pin::in_path(square, candidate.square, king)
                && square.between(king).iter().all(|&sq| board.is_empty(sq))
        })
        .map(|pinner| Pin {
            king,
            pinned: square,
            pinner: pinner.into(),
        })
}
