/// Viewport maps window pixels to grid cells at a fixed integer scale
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    scale: usize,
    columns: usize,
    rows: usize,
}

impl Viewport {
    pub fn new(scale: usize, columns: usize, rows: usize) -> Self {
        assert!(scale > 0, "viewport scale must be positive");
        Self { scale, columns, rows }
    }

    pub const fn scale(&self) -> usize {
        self.scale
    }

    /// Convert screen coordinates to grid coordinates.
    /// Returns None for points left of, above, or beyond the grid.
    pub fn screen_to_grid(&self, screen_x: f32, screen_y: f32) -> Option<(usize, usize)> {
        if !(screen_x >= 0.0 && screen_y >= 0.0) {
            return None;
        }
        let grid_x = screen_x as usize / self.scale;
        let grid_y = screen_y as usize / self.scale;
        (grid_x < self.columns && grid_y < self.rows).then_some((grid_x, grid_y))
    }

    /// Convert grid coordinates to the top-left pixel of the cell
    pub fn grid_to_screen(&self, grid_x: usize, grid_y: usize) -> (f32, f32) {
        ((grid_x * self.scale) as f32, (grid_y * self.scale) as f32)
    }

    /// True when (x, y) is not on the outermost ring of cells.
    pub const fn is_interior(&self, x: usize, y: usize) -> bool {
        x > 0 && x + 1 < self.columns && y > 0 && y + 1 < self.rows
    }
}
