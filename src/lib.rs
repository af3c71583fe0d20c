//! Block Hopper - a minimal canvas platformer demo
//!
//! Core modules:
//! - `sim`: player physics (gravity, jumping, ground landing)
//! - `input`: keyboard events translated into player intents
//! - `renderer`: drawing-surface abstraction and per-frame scene painting
//!
//! The browser drives everything from `main.rs`: key events mutate the
//! player's velocity through the input router, and each animation frame runs
//! exactly one `Player::update` followed by one scene paint.

pub mod input;
pub mod renderer;
pub mod sim;

pub use input::Intent;
pub use sim::{MotionParams, Player};

/// Game configuration constants
pub mod consts {
    /// Canvas size in pixels
    pub const CANVAS_WIDTH: u32 = 800;
    pub const CANVAS_HEIGHT: u32 = 600;

    /// Y coordinate of the top of the ground band (y grows downward)
    pub const GROUND_LEVEL: f32 = 500.0;

    /// Player spawn position (top-left corner of the rectangle)
    pub const PLAYER_SPAWN_X: f32 = 100.0;
    pub const PLAYER_SPAWN_Y: f32 = 400.0;

    /// Player rectangle size
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 60.0;

    /// Motion tuning: gravity added to vertical velocity every update
    pub const GRAVITY: f32 = 0.5;
    /// Vertical velocity set on jump (negative = up)
    pub const JUMP_STRENGTH: f32 = -12.0;
    /// Horizontal speed while a movement key is held
    pub const MOVE_SPEED: f32 = 5.0;

    /// Fill colors (CSS color strings, fed straight to the canvas context)
    pub const PLAYER_FILL: &str = "#FF0000";
    pub const GROUND_FILL: &str = "#333";
}
