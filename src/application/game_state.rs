use super::Viewport;
use crate::config::Config;
use crate::domain::Grid;

/// What a single tick did to the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Advanced one generation
    Stepped,
    /// Forced the 3x3 block around this cell alive
    Activated { x: usize, y: usize },
    /// Pointer was down on the border or outside the grid; nothing changed
    Ignored,
}

/// GameState orchestrates the simulation.
/// This is the application layer that coordinates domain logic.
pub struct GameState {
    pub grid: Grid,
    pub viewport: Viewport,
    pub generation: u64,
    pub last_tick: Tick,
    pub last_step_time_ms: f32,
}

impl GameState {
    /// Wrap an existing grid, drawing each cell `scale` pixels wide
    pub fn new(grid: Grid, scale: usize) -> Self {
        let (columns, rows) = grid.dimensions();
        Self {
            grid,
            viewport: Viewport::new(scale, columns, rows),
            generation: 0,
            last_tick: Tick::Ignored,
            last_step_time_ms: 0.0,
        }
    }

    /// Seeded random first generation sized from the window and scale
    pub fn from_config(config: &Config) -> Self {
        let (columns, rows) = config.grid_dimensions();
        Self::new(Grid::seeded(columns, rows, config.seed), config.scale as usize)
    }

    /// Run one tick. A pointer press (window pixels) activates the cell under
    /// it when that cell is off the border; no press advances a generation.
    pub fn tick(mut self, pointer: Option<(f32, f32)>) -> Self {
        self.last_tick = match pointer {
            Some((px, py)) => self.activate_at(px, py),
            None => self.step(),
        };
        self
    }

    fn activate_at(&mut self, px: f32, py: f32) -> Tick {
        match self.viewport.screen_to_grid(px, py) {
            Some((x, y)) if self.viewport.is_interior(x, y) => {
                self.grid.activate_neighborhood(x, y);
                log::debug!("activated neighborhood at ({x}, {y})");
                Tick::Activated { x, y }
            }
            _ => Tick::Ignored,
        }
    }

    fn step(&mut self) -> Tick {
        let start = std::time::Instant::now();
        self.grid.step();
        self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.generation += 1;

        log::trace!(
            "generation {} population {} ({:.3}ms)",
            self.generation,
            self.grid.population(),
            self.last_step_time_ms
        );
        Tick::Stepped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;

    fn blinker_state() -> GameState {
        let mut grid = Grid::new(10, 8);
        presets::blinker().place_on(&mut grid, 3, 3);
        GameState::new(grid, 10)
    }

    #[test]
    fn test_from_config_uses_seed() {
        let config = Config::default();
        let state = GameState::from_config(&config);
        assert_eq!(state.grid, Grid::seeded(64, 48, config.seed));
        assert_eq!(state.viewport.scale(), 10);
        assert_eq!(state.generation, 0);
    }

    #[test]
    fn test_no_pointer_steps() {
        let state = blinker_state();
        let mut expected = state.grid.clone();
        expected.step();

        let state = state.tick(None);
        assert_eq!(state.last_tick, Tick::Stepped);
        assert_eq!(state.generation, 1);
        assert_eq!(state.grid, expected);
    }

    #[test]
    fn test_press_activates_without_stepping() {
        let state = GameState::new(Grid::new(10, 8), 10);
        let state = state.tick(Some((55.0, 42.0)));

        assert_eq!(state.last_tick, Tick::Activated { x: 5, y: 4 });
        assert_eq!(state.generation, 0);
        assert_eq!(state.grid.population(), 9);
        assert!(state.grid.is_alive(4, 3));
        assert!(state.grid.is_alive(6, 5));
    }

    #[test]
    fn test_press_on_border_is_ignored() {
        let state = blinker_state();
        let before = state.grid.clone();

        let state = state.tick(Some((5.0, 40.0)));
        assert_eq!(state.last_tick, Tick::Ignored);
        let state = state.tick(Some((95.0, 40.0)));
        assert_eq!(state.last_tick, Tick::Ignored);
        let state = state.tick(Some((40.0, 79.0)));
        assert_eq!(state.last_tick, Tick::Ignored);

        assert_eq!(state.generation, 0);
        assert_eq!(state.grid, before);
    }

    #[test]
    fn test_press_outside_window_is_ignored() {
        let state = blinker_state();
        let before = state.grid.clone();
        let state = state.tick(Some((-20.0, 30.0))).tick(Some((500.0, 30.0)));
        assert_eq!(state.last_tick, Tick::Ignored);
        assert_eq!(state.grid, before);
    }

    #[test]
    fn test_generation_counts_steps_only() {
        let state = blinker_state()
            .tick(None)
            .tick(Some((50.0, 50.0)))
            .tick(None);
        assert_eq!(state.generation, 2);
    }
}
