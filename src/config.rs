use anyhow::{Result, bail};
use clap::Parser;

pub const DEFAULT_WIDTH: u32 = 640;
pub const DEFAULT_HEIGHT: u32 = 480;
pub const DEFAULT_SCALE: u32 = 10;
pub const DEFAULT_SEED: u64 = 1234123;

/// Startup configuration for the windowed simulation.
#[derive(Debug, Clone, Parser)]
#[command(name = "toroidal-life", about = "Conway's Game of Life on a wrapping grid")]
pub struct Config {
    /// Window width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Size of one cell in pixels
    #[arg(long, default_value_t = DEFAULT_SCALE)]
    pub scale: u32,

    /// Seed for the first generation
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Window title
    #[arg(long, default_value = "Conway's Game of Life")]
    pub title: String,
}

impl Config {
    /// Reject configurations that leave nothing to draw or activate.
    pub fn validate(&self) -> Result<()> {
        if self.scale < 3 {
            bail!("--scale must be at least 3 pixels, got {}", self.scale);
        }
        let (cols, rows) = self.grid_dimensions();
        if cols < 3 || rows < 3 {
            bail!(
                "a {}x{} window at scale {} gives a {cols}x{rows} grid; need at least 3x3",
                self.width,
                self.height,
                self.scale
            );
        }
        Ok(())
    }

    /// Grid size in cells: the window divided by the cell scale.
    pub fn grid_dimensions(&self) -> (usize, usize) {
        let scale = self.scale.max(1);
        ((self.width / scale) as usize, (self.height / scale) as usize)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::parse_from(["toroidal-life"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert_eq!(config.seed, DEFAULT_SEED);
        assert_eq!(config.grid_dimensions(), (64, 48));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_flags() {
        let config = Config::parse_from([
            "toroidal-life", "--width", "300", "--height", "200", "--scale", "5", "--seed", "9",
        ]);
        assert_eq!(config.grid_dimensions(), (60, 40));
        assert_eq!(config.seed, 9);
    }

    #[test]
    fn test_partial_cells_are_dropped() {
        let config = Config { width: 645, height: 489, ..Config::default() };
        assert_eq!(config.grid_dimensions(), (64, 48));
    }

    #[test]
    fn test_rejects_tiny_scale() {
        let config = Config { scale: 2, ..Config::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_tiny_grid() {
        let config = Config { width: 20, ..Config::default() };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("2x48"));
    }
}
