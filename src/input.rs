//! Keyboard input routed as player intents
//!
//! The browser layer never touches the player directly: key events are
//! translated into an [`Intent`] here and applied through the player's
//! mutators. Intents only change velocity and the jump flag; position moves
//! once per frame in `Player::update`.

use crate::sim::Player;

/// A single piece of player intent, decoded from one key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Jump,
    MoveLeft,
    MoveRight,
    StopMoving,
}

impl Intent {
    /// Apply this intent to the player via the matching mutator.
    pub fn apply(self, player: &mut Player) {
        match self {
            Intent::Jump => player.jump(),
            Intent::MoveLeft => player.move_left(),
            Intent::MoveRight => player.move_right(),
            Intent::StopMoving => player.stop_moving(),
        }
    }
}

/// Decode a key press into an intent.
///
/// `key` is the `KeyboardEvent.key` string. Space and ArrowUp both jump;
/// unrecognized keys decode to `None`. Auto-repeat presses are not filtered:
/// every mutator is idempotent, so repeats are harmless.
pub fn intent_for_keydown(key: &str) -> Option<Intent> {
    match key {
        " " | "ArrowUp" => Some(Intent::Jump),
        "ArrowLeft" => Some(Intent::MoveLeft),
        "ArrowRight" => Some(Intent::MoveRight),
        _ => None,
    }
}

/// Decode a key release into an intent.
///
/// Releasing either movement key stops horizontal motion; everything else
/// decodes to `None`.
pub fn intent_for_keyup(key: &str) -> Option<Intent> {
    match key {
        "ArrowLeft" | "ArrowRight" => Some(Intent::StopMoving),
        _ => None,
    }
}
