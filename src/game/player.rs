//! Per-side selection state and legal-move cache.

use std::collections::BTreeMap;

use log::debug;

use crate::board::{possible_moves, Board, Check, Color, PieceId, Square};

/// One side of the game: its selection and the cached legal destinations of
/// every live piece it owns.
#[derive(Clone, Debug)]
pub(crate) struct Player {
    color: Color,
    selected: Option<PieceId>,
    moves: BTreeMap<PieceId, Vec<Square>>,
}

impl Player {
    pub(crate) fn new(color: Color) -> Self {
        Player {
            color,
            selected: None,
            moves: BTreeMap::new(),
        }
    }

    pub(crate) fn color(&self) -> Color {
        self.color
    }

    pub(crate) fn selected(&self) -> Option<PieceId> {
        self.selected
    }

    /// Rebuild the cache from the pieces currently on `board`.
    ///
    /// Entries for captured pieces disappear. An inactive side keeps an
    /// entry for every piece, each with an empty list.
    pub(crate) fn rebuild(&mut self, board: &Board, check: Option<&Check>, active: bool) {
        self.moves.clear();
        for piece in board.pieces(self.color) {
            let moves = if active {
                possible_moves(board, &piece, check, true)
            } else {
                Vec::new()
            };
            self.moves.insert(piece.id, moves);
        }
        debug!(
            "{} cache rebuilt: {} pieces, {} moves",
            self.color,
            self.moves.len(),
            self.moves.values().map(Vec::len).sum::<usize>()
        );
    }

    pub(crate) fn legal_moves(&self, id: PieceId) -> Option<&[Square]> {
        self.moves.get(&id).map(Vec::as_slice)
    }

    pub(crate) fn has_legal_move(&self) -> bool {
        self.moves.values().any(|moves| !moves.is_empty())
    }

    pub(crate) fn all_moves(&self) -> impl Iterator<Item = (PieceId, Square)> + '_ {
        self.moves
            .iter()
            .flat_map(|(&id, moves)| moves.iter().map(move |&to| (id, to)))
    }

    pub(crate) fn tracked(&self) -> impl Iterator<Item = PieceId> + '_ {
        self.moves.keys().copied()
    }

    /// Select `id` and light up its cached destinations.
    pub(crate) fn select(&mut self, id: PieceId, board: &mut Board) {
        self.selected = Some(id);
        for &square in self.legal_moves(id).unwrap_or_default() {
            board.set_highlighted(square, true);
        }
    }

    pub(crate) fn unselect(&mut self, board: &mut Board) {
        self.selected = None;
        board.clear_highlights();
    }
}
