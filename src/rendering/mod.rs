use macroquad::prelude::*;
use crate::application::{GameState, Tick};

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Draw every live cell as a square two pixels smaller than the cell
pub fn draw_grid(state: &GameState) {
    let viewport = state.viewport;
    let size = viewport.scale() as f32 - 2.0;

    state.grid.for_each_cell(|x, y, alive| {
        if alive {
            let (screen_x, screen_y) = viewport.grid_to_screen(x, y);
            draw_rectangle(screen_x, screen_y, size, size, WHITE);
        }
    });
}

/// Debug line in the top-left corner
pub fn draw_status(state: &GameState) {
    let mode = match state.last_tick {
        Tick::Stepped => "running",
        Tick::Activated { .. } => "editing",
        Tick::Ignored => "idle",
    };
    let status = format!(
        "FPS: {} Gen: {} Pop: {} Step: {:.2}ms [{}]",
        get_fps(),
        state.generation,
        format_number(state.grid.population()),
        state.last_step_time_ms,
        mode
    );
    draw_text(&status, 4.0, 14.0, 16.0, Color::from_rgba(0, 255, 150, 255));
}
