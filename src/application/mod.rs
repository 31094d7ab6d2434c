mod game_state;
mod viewport;

pub use game_state::{GameState, Tick};
pub use viewport::Viewport;
