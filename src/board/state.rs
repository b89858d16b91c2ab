use std::fmt;

use super::error::RulesError;
use super::{BoardBuilder, Color, PieceId, PieceInfo, PieceKind, Square};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Placement {
    color: Color,
    kind: PieceKind,
    square: Square,
}

/// The 8×8 grid and the pieces standing on it.
///
/// The board is the sole owner of the occupancy relation: `squares` maps a
/// square to its occupant and `pieces` maps an occupant back to its square.
/// Every mutation updates both sides under `&mut self`, so the two views
/// never disagree from the outside.
#[derive(Clone, Debug)]
pub struct Board {
    squares: [Option<PieceId>; 64],
    highlighted: [bool; 64],
    pieces: Vec<Option<Placement>>,
    kings: [PieceId; 2],
    king_squares: [Square; 2],
}

impl Board {
    /// Standard initial position.
    #[must_use]
    pub fn new() -> Self {
        // starting_position() lists the two kings first
        let builder = BoardBuilder::starting_position();
        Board::from_placements(&builder.pieces, [0, 1])
    }

    /// Assemble a board from validated placements; `kings` must name one
    /// king per color among them.
    pub(crate) fn from_placements(
        placements: &[(Square, Color, PieceKind)],
        kings: [usize; 2],
    ) -> Self {
        let mut squares = [None; 64];
        let mut pieces = Vec::with_capacity(placements.len());
        for (idx, &(square, color, kind)) in placements.iter().enumerate() {
            squares[square.index()] = Some(PieceId(idx as u8));
            pieces.push(Some(Placement {
                color,
                kind,
                square,
            }));
        }
        Board {
            squares,
            highlighted: [false; 64],
            pieces,
            kings: [PieceId(kings[0] as u8), PieceId(kings[1] as u8)],
            king_squares: [placements[kings[0]].0, placements[kings[1]].0],
        }
    }

    /// Look up a square by 1-indexed row and column; `None` off the board.
    #[inline]
    #[must_use]
    pub fn get_square(&self, row: i32, column: i32) -> Option<Square> {
        Square::new(row, column)
    }

    #[inline]
    #[must_use]
    pub fn occupant(&self, square: Square) -> Option<PieceId> {
        self.squares[square.index()]
    }

    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<PieceInfo> {
        let id = self.occupant(square)?;
        self.piece(id).ok()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.occupant(square).is_none()
    }

    /// Resolve a piece id to its current placement.
    pub fn piece(&self, id: PieceId) -> Result<PieceInfo, RulesError> {
        self.pieces
            .get(id.index())
            .copied()
            .flatten()
            .map(|p| PieceInfo {
                id,
                color: p.color,
                kind: p.kind,
                square: p.square,
            })
            .ok_or(RulesError::UnknownPiece(id))
    }

    /// Live pieces of one color in id order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = PieceInfo> + '_ {
        self.pieces
            .iter()
            .enumerate()
            .filter_map(move |(idx, slot)| match slot {
                Some(p) if p.color == color => Some(PieceInfo {
                    id: PieceId(idx as u8),
                    color: p.color,
                    kind: p.kind,
                    square: p.square,
                }),
                _ => None,
            })
    }

    #[must_use]
    pub fn king(&self, color: Color) -> PieceInfo {
        PieceInfo {
            id: self.kings[color.index()],
            color,
            kind: PieceKind::King,
            square: self.king_squares[color.index()],
        }
    }

    #[inline]
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    /// Move a piece, capturing whatever enemy stands on `to`.
    ///
    /// Clears the source square, retires the captured piece, occupies the
    /// destination and updates the mover's own position as one step.
    /// Returns the captured piece, if any.
    pub fn move_piece(&mut self, id: PieceId, to: Square) -> Result<Option<PieceInfo>, RulesError> {
        let mover = self.piece(id)?;
        let captured = match self.piece_at(to) {
            Some(victim) if victim.id == id => None,
            Some(victim) if victim.color == mover.color => {
                return Err(RulesError::OwnPieceCapture(to));
            }
            Some(victim) if victim.kind == PieceKind::King => {
                return Err(RulesError::KingCapture(to));
            }
            other => other,
        };

        if let Some(victim) = captured {
            self.pieces[victim.id.index()] = None;
        }
        self.squares[mover.square.index()] = None;
        self.squares[to.index()] = Some(id);
        if let Some(placement) = self.pieces[id.index()].as_mut() {
            placement.square = to;
        }
        if mover.kind == PieceKind::King {
            self.king_squares[mover.color.index()] = to;
        }
        Ok(captured)
    }

    #[inline]
    #[must_use]
    pub fn is_highlighted(&self, square: Square) -> bool {
        self.highlighted[square.index()]
    }

    #[inline]
    pub fn set_highlighted(&mut self, square: Square, on: bool) {
        self.highlighted[square.index()] = on;
    }

    pub fn clear_highlights(&mut self) {
        self.highlighted = [false; 64];
    }

    pub fn highlighted_squares(&self) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(|&sq| self.is_highlighted(sq))
    }

    /// Check the occupancy relation in both directions.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let forward = Square::all().all(|sq| match self.occupant(sq) {
            Some(id) => self.piece(id).is_ok_and(|p| p.square == sq),
            None => true,
        });
        let backward = Color::BOTH
            .iter()
            .flat_map(|&c| self.pieces(c))
            .all(|p| self.occupant(p.square) == Some(p.id));
        let kings = Color::BOTH.iter().all(|&c| {
            let king = self.king(c);
            self.piece(king.id).is_ok_and(|p| p == king)
        });
        forward && backward && kings
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (1..=8).rev() {
            write!(f, "{row} ")?;
            for column in 1..=8 {
                let c = Square::new(row, column)
                    .and_then(|sq| self.piece_at(sq))
                    .map_or('.', |p| p.kind.to_fen_char(p.color));
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  abcdefgh")
    }
}
