use super::{legal, sq};
use crate::board::{legal_moves_for, Board, Color, RulesError, Square};

fn moves_at(board: &Board, at: &str) -> Vec<Square> {
    legal(board, &board.piece_at(sq(at)).unwrap())
}

#[test]
fn double_step_needs_empty_front_square() {
    let board = Board::from_fen("4k3/8/8/8/8/4n3/4P3/4K3");
    assert!(moves_at(&board, "e2").is_empty());
}

#[test]
fn double_step_needs_empty_landing_square() {
    let board = Board::from_fen("4k3/8/8/8/4n3/8/4P3/4K3");
    assert_eq!(moves_at(&board, "e2"), vec![sq("e3")]);
}

#[test]
fn black_pawns_move_down() {
    let board = Board::from_fen("4k3/4p3/8/8/8/8/8/4K3");
    assert_eq!(moves_at(&board, "e7"), vec![sq("e6"), sq("e5")]);
}

#[test]
fn pawn_off_start_row_single_steps() {
    let board = Board::from_fen("4k3/8/8/8/8/4P3/8/4K3");
    assert_eq!(moves_at(&board, "e3"), vec![sq("e4")]);
}

#[test]
fn pawn_captures_only_enemies() {
    let board = Board::from_fen("4k3/8/8/3p1P2/4P3/8/8/4K3");
    assert_eq!(moves_at(&board, "e4"), vec![sq("e5"), sq("d5")]);
}

#[test]
fn pawn_never_captures_straight_ahead() {
    let board = Board::from_fen("4k3/8/8/4p3/4P3/8/8/4K3");
    assert!(moves_at(&board, "e4").is_empty());
}

#[test]
fn pawn_on_last_row_is_stuck() {
    // No promotion: nothing lies beyond the edge
    let board = Board::from_fen("P3k3/8/8/8/8/8/8/4K3");
    assert!(moves_at(&board, "a8").is_empty());
}

#[test]
fn kings_keep_their_distance() {
    let board = Board::from_fen("8/8/8/4k3/8/4K3/8/8");
    let mut moves = moves_at(&board, "e3");
    moves.sort();
    assert_eq!(
        moves,
        vec![sq("d2"), sq("e2"), sq("f2"), sq("d3"), sq("f3")]
    );
}

#[test]
fn king_cannot_take_into_pawn_defence() {
    // The e5 pawn guards d4
    let board = Board::from_fen("7k/8/8/4p3/3p4/3K4/8/8");
    assert!(!moves_at(&board, "d3").contains(&sq("d4")));
}

#[test]
fn retired_piece_has_no_moves() {
    let mut board = Board::from_fen("4k3/8/8/3p4/3R4/8/8/4K3");
    let pawn = board.occupant(sq("d5")).unwrap();
    let rook = board.occupant(sq("d4")).unwrap();
    board.move_piece(rook, sq("d5")).unwrap();
    assert_eq!(
        legal_moves_for(&board, pawn, None),
        Err(RulesError::UnknownPiece(pawn))
    );
    assert!(legal_moves_for(&board, rook, None).is_ok());
}

#[test]
fn starting_position_move_counts() {
    let board = Board::new();
    for color in Color::BOTH {
        let total: usize = board.pieces(color).map(|p| legal(&board, &p).len()).sum();
        assert_eq!(total, 20);
    }
}
