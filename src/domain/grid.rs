use super::Cell;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Offsets of the 8 cells surrounding a position, row by row.
const NEIGHBORHOOD: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Grid manages the 2D cellular automaton on a torus.
///
/// Cells live in a flat row-major buffer. `step` writes the next generation
/// into a second buffer of the same size and swaps the two, so no generation
/// is ever observed half-updated and no allocation happens per step.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    back: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells dead.
    ///
    /// Panics if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            width > 0 && height > 0,
            "grid dimensions must be positive, got {width}x{height}"
        );
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
            back: vec![Cell::Dead; width * height],
        }
    }

    /// Create a grid where every cell is alive with probability 0.5.
    ///
    /// Cells draw from `rng` one at a time in row-major order, so the same
    /// generator state always yields the same grid.
    pub fn random<R: Rng>(width: usize, height: usize, rng: &mut R) -> Self {
        let mut grid = Self::new(width, height);
        grid.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from_alive(rng.random::<f64>() < 0.5));
        grid
    }

    /// Random grid from a fixed seed.
    pub fn seeded(width: usize, height: usize, seed: u64) -> Self {
        Self::random(width, height, &mut StdRng::seed_from_u64(seed))
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    fn assert_in_bounds(&self, x: usize, y: usize) {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) is outside the {}x{} grid",
            self.width,
            self.height
        );
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width && y < self.height).then(|| self.cells[self.get_index(x, y)])
    }

    /// Whether the cell at (x, y) is alive.
    ///
    /// Panics when (x, y) lies outside the grid: callers never pass wrapped
    /// coordinates, and clamping would silently break the torus.
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.assert_in_bounds(x, y);
        self.cells[self.get_index(x, y)].is_alive()
    }

    /// Set cell at position. Writes outside the grid are ignored.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.get_index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Move `coord` by `delta` (-1, 0 or 1) along an axis of length `len`.
    /// Stepping below 0 lands on the last index, stepping past it lands on 0.
    fn wrap(coord: usize, delta: isize, len: usize) -> usize {
        let max = len - 1;
        match coord.checked_add_signed(delta) {
            None => max,
            Some(c) if c > max => 0,
            Some(c) => c,
        }
    }

    /// The 8 positions around (x, y) with toroidal wrapping.
    ///
    /// On a grid only 1 cell wide or tall several of these coincide, and may
    /// even be (x, y) itself.
    fn neighbors(&self, x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        NEIGHBORHOOD.iter().map(move |&(dx, dy)| {
            (
                Self::wrap(x, dx, self.width),
                Self::wrap(y, dy, self.height),
            )
        })
    }

    /// Count live neighbors of (x, y), wrapping at the edges. Result is in 0..=8.
    pub fn count_alive_neighbors(&self, x: usize, y: usize) -> u8 {
        self.assert_in_bounds(x, y);
        self.neighbors(x, y)
            .filter(|&(nx, ny)| self.cells[self.get_index(nx, ny)].is_alive())
            .count() as u8
    }

    /// Advance one generation.
    ///
    /// Every cell of the next generation is computed from the current buffer
    /// only; the buffers are swapped once all of them are written.
    pub fn step(&mut self) {
        let mut next = std::mem::take(&mut self.back);
        let width = self.width;

        next.iter_mut().enumerate().for_each(|(idx, slot)| {
            let (x, y) = (idx % width, idx / width);
            *slot = self.cells[idx].evolve(self.count_alive_neighbors(x, y));
        });

        self.back = std::mem::replace(&mut self.cells, next);
    }

    /// Force the 3x3 block centred on (x, y) alive, within the current generation.
    ///
    /// The block wraps at the edges exactly like neighbor counting does.
    /// Panics if (x, y) itself is outside the grid.
    pub fn activate_neighborhood(&mut self, x: usize, y: usize) {
        self.assert_in_bounds(x, y);
        let block: Vec<(usize, usize)> = std::iter::once((x, y))
            .chain(self.neighbors(x, y))
            .collect();
        for (nx, ny) in block {
            let idx = self.get_index(nx, ny);
            self.cells[idx] = Cell::Alive;
        }
    }

    /// Visit every cell as (x, y, alive) in row-major order.
    pub fn for_each_cell<F: FnMut(usize, usize, bool)>(&self, mut visit: F) {
        self.iter_cells()
            .for_each(|(x, y, cell)| visit(x, y, cell.is_alive()));
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (idx % width, idx / width, cell))
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }
}

/// Two grids are equal when they hold the same generation; the scratch
/// buffer does not take part.
impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.cells == other.cells
    }
}

impl Eq for Grid {}
