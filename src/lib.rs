// Domain layer - the grid engine, free of any windowing
pub mod domain;

// Application layer - tick dispatch and pixel/cell mapping
pub mod application;
pub mod config;

// Infrastructure layer - rendering and input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, Pattern, presets};
pub use application::{GameState, Tick, Viewport};
pub use config::Config;
