//! Check detection.
//!
//! A king is in check when projecting each attacking kind from its square
//! hits an enemy of that same kind, or when an enemy pawn stands on one of
//! the two squares diagonally ahead of it.

use super::projection::attackers_of_kind;
use super::{Board, Color, PieceId, PieceInfo, PieceKind, Square};

/// A piece giving check (or pinning).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Attacker {
    pub id: PieceId,
    pub kind: PieceKind,
    pub square: Square,
}

impl From<PieceInfo> for Attacker {
    fn from(piece: PieceInfo) -> Self {
        Attacker {
            id: piece.id,
            kind: piece.kind,
            square: piece.square,
        }
    }
}

/// An attacked king together with every piece attacking it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Check {
    color: Color,
    king: Square,
    attackers: Vec<Attacker>,
}

impl Check {
    /// Color of the king in check.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Square the check was evaluated on.
    #[must_use]
    pub fn king_square(&self) -> Square {
        self.king
    }

    /// Never empty.
    #[must_use]
    pub fn attackers(&self) -> &[Attacker] {
        &self.attackers
    }

    /// Two or more attackers: only a king move can answer it.
    #[must_use]
    pub fn is_double(&self) -> bool {
        self.attackers.len() >= 2
    }

    /// Whether `candidate` lies on the line from `king` to `attacker`,
    /// attacker included, king excluded.
    ///
    /// False when the two squares share no row, column or diagonal: a
    /// knight's check cannot be blocked.
    #[must_use]
    pub fn in_path(king: Square, attacker: Square, candidate: Square) -> bool {
        if candidate == king {
            return false;
        }
        let Some((dr, dc)) = king.step_toward(attacker) else {
            return false;
        };
        let mut cursor = king;
        while let Some(next) = cursor.offset(dr, dc) {
            if next == candidate {
                return true;
            }
            if next == attacker {
                break;
            }
            cursor = next;
        }
        false
    }

    /// Whether a non-king move to `candidate` leaves this check unanswered.
    #[must_use]
    pub fn restricted(&self, candidate: Square) -> bool {
        match self.attackers.as_slice() {
            [single] => line_restricted(self.king, single, candidate),
            _ => true,
        }
    }
}

/// A move to `candidate` fails to capture `attacker` and fails to block the
/// line between it and `king`.
pub(crate) fn line_restricted(king: Square, attacker: &Attacker, candidate: Square) -> bool {
    if candidate == attacker.square {
        return false;
    }
    if attacker.kind == PieceKind::Knight {
        return true;
    }
    !Check::in_path(king, attacker.square, candidate)
}

/// Every enemy piece that would attack a `color` king standing on `square`.
///
/// The king's current square is treated as empty, so a destination further
/// along a checking line is still seen as attacked.
#[must_use]
pub fn in_check(board: &Board, color: Color, square: Square) -> Option<Check> {
    let transparent = Some(board.king_square(color));
    let mut attackers: Vec<Attacker> = PieceKind::PROJECTED_CHECKERS
        .iter()
        .flat_map(|&kind| attackers_of_kind(board, color, square, kind, transparent))
        .map(Attacker::from)
        .collect();

    let forward = color.pawn_direction();
    for dc in [1, -1] {
        let pawn = square
            .offset(forward, dc)
            .and_then(|sq| board.piece_at(sq))
            .filter(|p| p.kind == PieceKind::Pawn && p.color != color);
        if let Some(pawn) = pawn {
            attackers.push(pawn.into());
        }
    }

    if attackers.is_empty() {
        None
    } else {
        Some(Check {
            color,
            king: square,
            attackers,
        })
    }
}

/// Check state of the `color` king where it currently stands.
#[must_use]
pub fn king_in_check(board: &Board, color: Color) -> Option<Check> {
    in_check(board, color, board.king_square(color))
}

/// Whether a `color` king on `square` would stand next to the enemy king.
#[must_use]
pub fn opposition(board: &Board, color: Color, square: Square) -> bool {
    !attackers_of_kind(board, color, square, PieceKind::King, None).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn starting_position_is_quiet() {
        let board = Board::new();
        assert!(king_in_check(&board, Color::White).is_none());
        assert!(king_in_check(&board, Color::Black).is_none());
    }

    #[test]
    fn single_rook_check() {
        let board = Board::from_fen("4r2k/8/8/8/8/8/8/4K3");
        let check = king_in_check(&board, Color::White).unwrap();
        assert!(!check.is_double());
        assert_eq!(check.attackers()[0].square, sq("e8"));
        assert_eq!(check.color(), Color::White);
    }

    #[test]
    fn knight_and_bishop_double_check() {
        let board = Board::from_fen("7k/8/8/8/1b6/3n4/8/4K3");
        let check = king_in_check(&board, Color::White).unwrap();
        assert!(check.is_double());
        let kinds: Vec<_> = check.attackers().iter().map(|a| a.kind).collect();
        assert_eq!(kinds, vec![PieceKind::Knight, PieceKind::Bishop]);
    }

    #[test]
    fn pawns_attack_forward_diagonals_only() {
        // Black pawn on d2 attacks e1 from White's point of view
        let board = Board::from_fen("7k/8/8/8/8/8/3p4/4K3");
        assert!(king_in_check(&board, Color::White).is_some());
        // A black pawn behind the white king attacks nothing
        let board = Board::from_fen("7k/8/8/8/8/4K3/3p4/8");
        assert!(king_in_check(&board, Color::White).is_none());
        // White pawn on d7 checks the black king on e8
        let board = Board::from_fen("4k3/3P4/8/8/8/8/8/K7");
        assert!(king_in_check(&board, Color::Black).is_some());
    }

    #[test]
    fn blocked_line_is_not_check() {
        let board = Board::from_fen("4r2k/8/8/8/4P3/8/8/4K3");
        assert!(king_in_check(&board, Color::White).is_none());
    }

    #[test]
    fn square_behind_king_on_checking_line_is_attacked() {
        let board = Board::from_fen("4r2k/8/8/8/8/8/4K3/8");
        assert!(in_check(&board, Color::White, sq("e1")).is_some());
        assert!(in_check(&board, Color::White, sq("d1")).is_none());
    }

    #[test]
    fn in_path_orthogonal_and_diagonal() {
        assert!(Check::in_path(sq("e1"), sq("e8"), sq("e5")));
        assert!(Check::in_path(sq("e1"), sq("e8"), sq("e8")));
        assert!(!Check::in_path(sq("e1"), sq("e8"), sq("e1")));
        assert!(!Check::in_path(sq("e1"), sq("e5"), sq("e7")));
        assert!(!Check::in_path(sq("e1"), sq("e8"), sq("d5")));
        assert!(Check::in_path(sq("h8"), sq("a1"), sq("d4")));
        assert!(!Check::in_path(sq("h8"), sq("a1"), sq("d5")));
        assert!(Check::in_path(sq("a8"), sq("h1"), sq("e4")));
    }

    #[test]
    fn in_path_rejects_knight_geometry() {
        assert!(!Check::in_path(sq("e1"), sq("d3"), sq("d3")));
        assert!(!Check::in_path(sq("e1"), sq("d3"), sq("e2")));
    }

    #[test]
    fn restricted_allows_capture_and_block() {
        let board = Board::from_fen("4r2k/8/8/8/8/8/8/4K3");
        let check = king_in_check(&board, Color::White).unwrap();
        assert!(!check.restricted(sq("e8")));
        assert!(!check.restricted(sq("e4")));
        assert!(check.restricted(sq("d4")));
    }

    #[test]
    fn knight_check_only_capture() {
        let board = Board::from_fen("7k/8/8/8/8/3n4/8/4K3");
        let check = king_in_check(&board, Color::White).unwrap();
        assert!(!check.restricted(sq("d3")));
        assert!(check.restricted(sq("e2")));
        assert!(check.restricted(sq("d2")));
    }

    #[test]
    fn double_check_restricts_everything() {
        let board = Board::from_fen("7k/8/8/8/1b6/3n4/8/4K3");
        let check = king_in_check(&board, Color::White).unwrap();
        assert!(check.restricted(sq("d3")));
        assert!(check.restricted(sq("b4")));
        assert!(check.restricted(sq("c3")));
    }

    #[test]
    fn opposition_detects_adjacent_king() {
        let board = Board::from_fen("8/8/8/4k3/8/4K3/8/8");
        assert!(opposition(&board, Color::White, sq("e4")));
        assert!(opposition(&board, Color::White, sq("d4")));
        assert!(!opposition(&board, Color::White, sq("e2")));
    }
}
