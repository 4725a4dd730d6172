mod config;
mod error;
mod food;
mod game;
mod grid;
mod snake;
mod term;

use std::{env, process::exit};

use log::{debug, error};

use crate::config::GameConfig;
use crate::error::TermError;
use crate::game::{GameState, MoveResult};
use crate::grid::Cell;
use crate::term::TermManager;

/// `(row, col)`, zero-based from the top-left corner.
pub type Coords = (usize, usize);

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        error!("{}", e);
        exit(1);
    }
}

fn run() -> Result<(), TermError> {
    let (config, notice) = GameConfig::from_args_or_default(env::args());
    let mut rng = rand::thread_rng();
    let mut term = TermManager::new(notice);
    let mut state = GameState::new(&config, &mut rng);

    term.draw(&state)?;

    // One round per line of input, until the snake crashes
    while !state.is_over() {
        let mv = term.read_move()?;
        if let MoveResult::Moved { new_head, ate: true, .. } = state.step(mv, &mut rng) {
            debug!("ate at {:?}, length now {}, next food at {:?}", new_head, state.snake().len(), state.food());
        }
        term.draw(&state)?;
    }

    if let Some(crash) = state.crash() {
        debug!("stopped by {:?} at round {}, {} cells left empty", crash, state.round(), state.grid().count(Cell::Empty));
    }
    term.show_final_score(state.score())
}
