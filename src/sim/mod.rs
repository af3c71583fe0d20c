//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One `Player::update` call is one fixed simulation step (no delta time)
//! - Every operation is total: no fallible inputs, no panics
//! - No platform dependencies beyond the `Surface` drawing trait

pub mod player;

pub use player::{MotionParams, Player};
