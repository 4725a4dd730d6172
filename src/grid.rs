use crate::Coords;

/// What occupies a single board cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Body,
    Head,
    Food,
    DeadHead,
}

/// Fixed-size occupancy map, indexed by `(row, col)`.
///
/// Callers are expected to pass in-bounds coordinates to `get` and `set`;
/// `in_bounds` is there for the few places that need to check first.
#[derive(Clone, Debug)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(height: usize, width: usize) -> Self {
        Grid { height, width, cells: vec![Cell::Empty; height * width] }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn in_bounds(&self, pos: Coords) -> bool {
        pos.0 < self.height && pos.1 < self.width
    }

    pub fn get(&self, pos: Coords) -> Cell {
        self.cells[self.index(pos)]
    }

    pub fn set(&mut self, pos: Coords, cell: Cell) {
        let idx = self.index(pos);
        self.cells[idx] = cell;
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1))
    }

    /// Every coordinate currently holding `cell`, in row-major order.
    pub fn positions_of(&self, cell: Cell) -> Vec<Coords> {
        let width = self.width;
        self.cells.iter()
            .enumerate()
            .filter(|(_, c)| **c == cell)
            .map(|(i, _)| (i / width, i % width))
            .collect()
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|c| **c == cell).count()
    }

    ///////////////////////////////////////////////////////////////////////////

    fn index(&self, pos: Coords) -> usize {
        debug_assert!(self.in_bounds(pos), "{:?} is outside the board", pos);
        pos.0 * self.width + pos.1
    }
}
