use std::env;

use chess_rules::game::{Game, GameConfig, SquareLocator, Transition};
use env_logger::Env;
use log::{debug, info};
use rand::prelude::*;

fn main() {
    let env = Env::default().filter_or("CHESS_RULES_LOG", "info");
    env_logger::Builder::from_env(env).init();

    let args: Vec<String> = env::args().collect();
    let seed: u64 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(0);
    let max_plies: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(200);
    let config = match load_config(args.get(3)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(2);
        }
    };

    let mut game = match Game::from_config(&config) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(2);
        }
    };
    let grid = config.locator();
    let mut rng = StdRng::seed_from_u64(seed);
    info!("seed {}, up to {} plies", seed, max_plies);

    let mut plies = 0;
    while plies < max_plies && !game.result().is_over() {
        let moves = game.all_legal_moves(game.turn());
        let Some(&(id, to)) = moves.choose(&mut rng) else {
            break;
        };
        let Ok(piece) = game.board().piece(id) else {
            break;
        };
        // Click through pixels so the locator is exercised as a UI would
        for square in [piece.square, to] {
            let (x, y) = grid.square_center(square);
            debug_assert_eq!(grid.locate(x, y), Some(square));
            if let Transition::Moved { from, to, captured } = game.play(&grid, x, y) {
                plies += 1;
                debug!("ply {}: {} to {} captured {:?}", plies, from, to, captured);
            }
        }
    }

    println!("{}", game.board());
    println!("plies: {}", plies);
    println!("result: {}", game.result());
}

#[cfg(feature = "serde")]
fn load_config(path: Option<&String>) -> Result<GameConfig, chess_rules::game::ConfigError> {
    match path {
        Some(path) => GameConfig::load(path),
        None => Ok(GameConfig::default()),
    }
}

#[cfg(not(feature = "serde"))]
fn load_config(path: Option<&String>) -> Result<GameConfig, String> {
    match path {
        Some(path) => Err(format!(
            "cannot read {}: rebuild with --features serde for config files",
            path
        )),
        None => Ok(GameConfig::default()),
    }
}
