//! Benchmarks for legality computation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_rules::board::{find_pin, in_check, king_in_check, possible_moves, Board, Color};
use chess_rules::game::Game;

const POSITIONS: [(&str, &str); 4] = [
    ("startpos", "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"),
    (
        "middlegame",
        "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R",
    ),
    ("open", "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R"),
    ("check", "4r2k/8/8/8/1B6/2N5/8/R3K3"),
];

fn all_moves(board: &Board, color: Color) -> usize {
    let check = king_in_check(board, color);
    board
        .pieces(color)
        .map(|piece| possible_moves(board, &piece, check.as_ref(), true).len())
        .sum()
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    for (name, fen) in POSITIONS {
        let board = Board::from_fen(fen);
        group.bench_with_input(BenchmarkId::new("white", name), &board, |b, board| {
            b.iter(|| all_moves(black_box(board), Color::White))
        });
    }

    group.finish();
}

fn bench_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("detection");

    let board = Board::from_fen(POSITIONS[2].1);
    group.bench_function("in_check_every_square", |b| {
        b.iter(|| {
            board
                .pieces(Color::White)
                .filter(|piece| in_check(&board, Color::White, black_box(piece.square)).is_some())
                .count()
        })
    });
    group.bench_function("find_pin_every_piece", |b| {
        b.iter(|| {
            board
                .pieces(Color::White)
                .filter(|piece| find_pin(&board, Color::White, black_box(piece.square)).is_some())
                .count()
        })
    });

    group.finish();
}

fn bench_game(c: &mut Criterion) {
    let mut group = c.benchmark_group("game");

    // One click to select, one to move: the full cache rebuild runs each time
    let e2 = "e2".parse().unwrap();
    let e4 = "e4".parse().unwrap();
    group.bench_function("commit_opening_move", |b| {
        b.iter(|| {
            let mut game = Game::new();
            game.click(e2);
            black_box(game.click(e4))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_movegen, bench_detection, bench_game);
criterion_main!(benches);
