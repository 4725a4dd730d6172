use log::warn;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::Coords;
use crate::grid::{Cell, Grid};

/// Random draws per board cell before giving up on blind sampling.
const DRAWS_PER_CELL: usize = 10;

/// Picks an empty cell uniformly at random and marks it as food.
///
/// Samples the whole board up to `10 * height * width` times; if every draw
/// lands on something, falls back to choosing among the empty cells directly.
/// Returns `None` only when the board has no empty cell left.
pub fn place_food<R: Rng>(grid: &mut Grid, rng: &mut R) -> Option<Coords> {
    let (height, width) = (grid.height(), grid.width());

    let drawn = (0..DRAWS_PER_CELL * height * width)
        .map(|_| (rng.gen_range(0..height), rng.gen_range(0..width)))
        .find(|pos| grid.get(*pos) == Cell::Empty);

    let res = drawn.or_else(|| grid.positions_of(Cell::Empty).choose(rng).copied());

    match res {
        Some(pos) => grid.set(pos, Cell::Food),
        None => warn!("could not place food: no empty cell on a {}x{} board", height, width),
    }

    res
}
