//! The player entity: one rectangle with gravity, a jump, and a landing.
//!
//! All motion state for the single controllable actor lives here. Input
//! handlers record intent by mutating velocity and the jump flag; position
//! only ever changes inside [`Player::update`], once per animation frame.

use glam::Vec2;

use crate::consts::{GRAVITY, JUMP_STRENGTH, MOVE_SPEED, PLAYER_FILL};
use crate::renderer::Surface;

/// Motion tuning, fixed at construction.
#[derive(Debug, Clone, Copy)]
pub struct MotionParams {
    /// Acceleration added to vertical velocity every update
    pub gravity: f32,
    /// Vertical velocity set on jump (negative = up, y grows downward)
    pub jump_strength: f32,
    /// Horizontal speed while a movement key is held
    pub move_speed: f32,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_strength: JUMP_STRENGTH,
            move_speed: MOVE_SPEED,
        }
    }
}

/// The controllable rectangle.
///
/// Coordinates are canvas pixels, origin top-left, y growing downward.
/// `pos` is the rectangle's top-left corner.
#[derive(Debug, Clone)]
pub struct Player {
    pos: Vec2,
    size: Vec2,
    vel: Vec2,
    jumping: bool,
    params: MotionParams,
}

impl Player {
    /// Create a player at `pos` with the given rectangle size and default
    /// motion tuning.
    ///
    /// The caller is expected to hand in a strictly positive size and a
    /// starting position on or above the ground; neither is validated.
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self::with_params(pos, size, MotionParams::default())
    }

    /// Create a player with explicit motion tuning.
    pub fn with_params(pos: Vec2, size: Vec2, params: MotionParams) -> Self {
        Self {
            pos,
            size,
            vel: Vec2::ZERO,
            jumping: false,
            params,
        }
    }

    /// Start a jump, unless one is already in progress.
    ///
    /// Sets the launch velocity and marks the player airborne. While airborne
    /// this is a no-op: no double-jump, no jump buffering.
    pub fn jump(&mut self) {
        if !self.jumping {
            self.vel.y = self.params.jump_strength;
            self.jumping = true;
        }
    }

    /// Move left at full speed. Overwrites any prior horizontal velocity.
    pub fn move_left(&mut self) {
        self.vel.x = -self.params.move_speed;
    }

    /// Move right at full speed. Overwrites any prior horizontal velocity.
    pub fn move_right(&mut self) {
        self.vel.x = self.params.move_speed;
    }

    /// Stop horizontal movement (movement-key release).
    pub fn stop_moving(&mut self) {
        self.vel.x = 0.0;
    }

    /// Advance the simulation by one fixed step.
    ///
    /// `ground` is the y coordinate of the floor plane's top. Gravity is
    /// added to vertical velocity on every call, grounded or not; when the
    /// rectangle ends up below the ground line, the landing clamp snaps it
    /// back and zeroes vertical velocity in the same call, so nothing
    /// accumulates while resting. Landing never touches horizontal velocity,
    /// and there is no ceiling or horizontal bound.
    pub fn update(&mut self, ground: f32) {
        self.vel.y += self.params.gravity;
        self.pos.y += self.vel.y;
        self.pos.x += self.vel.x;

        if self.pos.y + self.size.y > ground {
            self.pos.y = ground - self.size.y;
            self.vel.y = 0.0;
            self.jumping = false;
        }
    }

    /// Paint the player as a filled rectangle.
    pub fn draw(&self, surface: &mut impl Surface) {
        surface.set_fill(PLAYER_FILL);
        surface.fill_rect(self.pos.x, self.pos.y, self.size.x, self.size.y);
    }

    /// Current top-left corner, as a value snapshot.
    pub fn position(&self) -> Vec2 {
        self.pos
    }

    /// Rectangle size (width, height), as a value snapshot.
    pub fn dimensions(&self) -> Vec2 {
        self.size
    }

    /// Current velocity, as a value snapshot.
    pub fn velocity(&self) -> Vec2 {
        self.vel
    }

    /// True between a `jump` call and the landing that ends it.
    pub fn airborne(&self) -> bool {
        self.jumping
    }
}
