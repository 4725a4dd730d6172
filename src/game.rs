use log::{debug, info};
use rand::Rng;

use crate::Coords;
use crate::config::GameConfig;
use crate::food::place_food;
use crate::grid::{Cell, Grid};
use crate::snake::{Snake, Direction::{*, self}};

const INITIAL_SNAKE_LENGTH: usize = 2;

/// What ended the game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Crash {
    Wall,
    Body,
}

/// Outcome of a single round.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveResult {
    Moved { new_head: Coords, old_head: Coords, old_tail: Option<Coords>, ate: bool },
    Crashed(Crash),
}

pub struct GameState {
    grid: Grid,
    snake: Snake,
    round: u64,
    score: u64,
    food: Option<Coords>,
    crash: Option<Crash>,
}

impl GameState {
    /// Sets up a fresh board: a two-cell snake in the middle heading right,
    /// and one piece of food somewhere else.
    pub fn new<R: Rng>(config: &GameConfig, rng: &mut R) -> Self {
        let mut grid = Grid::new(config.height, config.width);
        let snake = Snake::new((config.height / 2, config.width / 2), INITIAL_SNAKE_LENGTH, Right);

        grid.set(snake.head(), Cell::Head);
        for pos in snake.body() {
            grid.set(*pos, Cell::Body);
        }

        let food = place_food(&mut grid, rng);
        info!("new {}x{} game, snake at {:?}, food at {:?}", config.height, config.width, snake.head(), food);

        GameState { grid, snake, round: 0, score: 0, food, crash: None }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn food(&self) -> Option<Coords> {
        self.food
    }

    pub fn crash(&self) -> Option<Crash> {
        self.crash
    }

    pub fn is_over(&self) -> bool {
        self.crash.is_some()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Advances the game by one round. `None` keeps the current heading, as
    /// does a request to reverse. Once crashed, the state no longer changes.
    ///
    /// Food is only re-placed when some is eaten, so a failed placement
    /// leaves the board without food for the rest of the game. Placement only
    /// fails on a completely full board.
    pub fn step<R: Rng>(&mut self, requested: Option<Direction>, rng: &mut R) -> MoveResult {
        if let Some(crash) = self.crash {
            return MoveResult::Crashed(crash);
        }

        let heading = self.snake.heading();
        let dir = self.snake.resolve_direction(requested);
        if requested.is_some() && requested != Some(dir) {
            debug!("ignoring reversal to {:?} while heading {:?}", requested, heading);
        }

        let old_head = self.snake.head();
        let new_head = match dir.step_from(old_head, self.height(), self.width()) {
            Some(pos) => pos,
            None => {
                self.grid.set(old_head, Cell::DeadHead);
                return self.game_over(Crash::Wall);
            },
        };

        let ate = match self.grid.get(new_head) {
            Cell::Body => {
                self.grid.set(new_head, Cell::DeadHead);
                return self.game_over(Crash::Body);
            },
            Cell::Food => true,
            _ => false,
        };

        let old_tail = self.snake.advance(new_head, dir, ate);
        if let Some(tail) = old_tail {
            self.grid.set(tail, Cell::Empty);
        }
        self.grid.set(new_head, Cell::Head);
        self.grid.set(old_head, Cell::Body);

        if ate {
            self.score += 1;
            self.food = place_food(&mut self.grid, rng);
        }

        self.round += 1;
        debug!("round {}: {:?} to {:?}, score {}", self.round, dir, new_head, self.score);

        MoveResult::Moved { new_head, old_head, old_tail, ate }
    }

    ///////////////////////////////////////////////////////////////////////////

    fn game_over(&mut self, crash: Crash) -> MoveResult {
        info!("game over ({:?}) after {} rounds, score {}", crash, self.round, self.score);
        self.crash = Some(crash);
        MoveResult::Crashed(crash)
    }
}
