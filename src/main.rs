use anyhow::Result;
use clap::Parser;
use macroquad::prelude::*;
use toroidal_life::{Config, GameState, input, rendering};

fn window_conf(config: &Config) -> Conf {
    Conf {
        window_title: config.title.clone(),
        window_width: config.width as i32,
        window_height: config.height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

async fn run(mut state: GameState) {
    loop {
        state = state.tick(input::pointer_press());

        clear_background(BLACK);
        rendering::draw_grid(&state);
        rendering::draw_status(&state);

        next_frame().await;
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::parse();
    config.validate()?;

    let state = GameState::from_config(&config);
    let (columns, rows) = state.grid.dimensions();
    log::info!(
        "starting {columns}x{rows} grid (scale {}, seed {}, {} alive)",
        config.scale,
        config.seed,
        state.grid.population()
    );

    macroquad::Window::from_config(window_conf(&config), run(state));
    Ok(())
}
