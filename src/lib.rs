pub mod cell;
pub mod config;
pub mod error;
pub mod life;
pub mod pattern;
pub mod state;
pub mod universe;

pub mod prelude {
    pub const UPDATE_INTERVAL_MS: u64 = 200;
    /// how long the app runner sleeps between frames
    pub const RUNNER_WAIT_MS: u64 = 5;

    pub const BOARD_WIDTH: u32 = 40;
    pub const BOARD_HEIGHT: u32 = 20;

    pub const ALIVE_GLYPH: char = '*';
    pub const DEAD_GLYPH: char = ' ';

    pub const DEFAULT_DENSITY: f32 = 0.35;
}
