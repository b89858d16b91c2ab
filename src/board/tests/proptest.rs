//! Property-based tests using proptest.

use super::{leaves_king_safe, legal, pseudo_moves};
use crate::board::{king_in_check, Board, Color, PieceId, PieceKind, Square};
use proptest::prelude::*;

/// Strategy to generate a random playout length
fn ply_count_strategy() -> impl Strategy<Value = usize> {
    1..=60usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Every legal (piece, destination) pair for `color`.
fn all_moves(board: &Board, color: Color) -> Vec<(PieceId, Square)> {
    board
        .pieces(color)
        .flat_map(|piece| {
            legal(board, &piece)
                .into_iter()
                .map(move |to| (piece.id, to))
        })
        .collect()
}

proptest! {
    /// Property: occupancy and piece positions agree after every move
    #[test]
    fn prop_board_stays_consistent(seed in seed_strategy(), plies in ply_count_strategy()) {
        use rand::prelude::*;

        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut turn = Color::White;

        for _ in 0..plies {
            let moves = all_moves(&board, turn);
            if moves.is_empty() {
                break;
            }
            let (id, to) = moves[rng.gen_range(0..moves.len())];
            prop_assert!(board.move_piece(id, to).is_ok());
            prop_assert!(board.is_consistent());
            prop_assert_eq!(board.pieces(Color::White).filter(|p| p.kind == PieceKind::King).count(), 1);
            prop_assert_eq!(board.pieces(Color::Black).filter(|p| p.kind == PieceKind::King).count(), 1);
            turn = turn.opponent();
        }
    }

    /// Property: no legal move leaves the mover's own king attacked
    #[test]
    fn prop_moves_never_expose_own_king(seed in seed_strategy(), plies in ply_count_strategy()) {
        use rand::prelude::*;

        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut turn = Color::White;

        for _ in 0..plies {
            let moves = all_moves(&board, turn);
            if moves.is_empty() {
                break;
            }
            let (id, to) = moves[rng.gen_range(0..moves.len())];
            board.move_piece(id, to).unwrap();
            prop_assert!(king_in_check(&board, turn).is_none());
            let kings = board.king_square(Color::White).distance(board.king_square(Color::Black));
            prop_assert!(kings > 1);
            turn = turn.opponent();
        }
    }

    /// Property: generated moves equal the brute-force set of pseudo moves
    /// that keep the king safe
    #[test]
    fn prop_legal_moves_match_brute_force(seed in seed_strategy(), plies in ply_count_strategy()) {
        use rand::prelude::*;

        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut turn = Color::White;

        for _ in 0..plies {
            for piece in board.pieces(turn) {
                let mut expected: Vec<Square> = pseudo_moves(&board, &piece)
                    .into_iter()
                    .filter(|&to| leaves_king_safe(&board, &piece, to))
                    .collect();
                expected.sort();
                let mut generated = legal(&board, &piece);
                generated.sort();
                prop_assert_eq!(generated, expected, "{} in {}", piece, board.to_fen());
            }

            let moves = all_moves(&board, turn);
            if moves.is_empty() {
                break;
            }
            let (id, to) = moves[rng.gen_range(0..moves.len())];
            board.move_piece(id, to).unwrap();
            turn = turn.opponent();
        }
    }

    /// Property: FEN round-trip preserves the placement
    #[test]
    fn prop_fen_roundtrip(seed in seed_strategy(), plies in ply_count_strategy()) {
        use rand::prelude::*;

        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut turn = Color::White;

        for _ in 0..plies {
            let moves = all_moves(&board, turn);
            if moves.is_empty() {
                break;
            }
            let (id, to) = moves[rng.gen_range(0..moves.len())];
            board.move_piece(id, to).unwrap();
            turn = turn.opponent();
        }

        let fen = board.to_fen();
        let restored = Board::from_fen(&fen);
        prop_assert_eq!(restored.to_fen(), fen);
    }
}
