//! Web Arcade - Pong and Snake in the browser
//!
//! Core modules:
//! - `pong`: paddle/ball physics, scoring, match lifecycle
//! - `snake`: grid movement, growth, collision restart
//! - `input`: held-key set shared by both games
//! - `render`: Canvas2D painters (wasm only, read simulation snapshots)
//! - `settings`: host preferences persisted to LocalStorage

pub mod input;
pub mod pong;
#[cfg(target_arch = "wasm32")]
pub mod render;
pub mod settings;
pub mod snake;

pub use input::{InputState, Key};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use std::f32::consts::PI;

    /// Pong board dimensions (pixels)
    pub const BOARD_WIDTH: f32 = 700.0;
    pub const BOARD_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Player paddle movement per tick while a key is held
    pub const PADDLE_STEP: f32 = 7.0;
    /// Proportional gain for the opponent's ball tracking (deliberately laggy)
    pub const TRACKING_GAIN: f32 = 0.1;

    /// Ball defaults (the ball is a square of side BALL_SIZE)
    pub const BALL_SIZE: f32 = 20.0;
    pub const BALL_SPEED: f32 = 10.0;

    /// First score to reach this wins the match
    pub const WIN_SCORE: u32 = 5;

    /// Serve angle is drawn from [-SERVE_ANGLE_MAX, SERVE_ANGLE_MAX]
    pub const SERVE_ANGLE_MAX: f32 = 0.1 * PI;
    /// Paddle hits return the ball within [-HIT_ANGLE_MAX, HIT_ANGLE_MAX]
    pub const HIT_ANGLE_MAX: f32 = 0.25 * PI;
    /// Edge hits beyond this angle get the smash multiplier
    pub const SMASH_THRESHOLD: f32 = 0.2 * PI;
    pub const SMASH_MULTIPLIER: f32 = 1.5;

    /// Snake grid dimensions (cells)
    pub const GRID_COLS: usize = 26;
    pub const GRID_ROWS: usize = 26;
    /// The snake steps once every STEP_INTERVAL frames
    pub const STEP_INTERVAL: u64 = 5;
}
