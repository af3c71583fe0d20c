//! Per-frame scene painting
//!
//! One frame is: wipe the canvas, paint the ground band, paint the player.
//! The caller runs `Player::update` first; nothing here mutates game state.

use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH, GROUND_FILL, GROUND_LEVEL};
use crate::sim::Player;

use super::Surface;

/// Paint one frame of the scene.
pub fn render(surface: &mut impl Surface, player: &Player) {
    let w = CANVAS_WIDTH as f32;
    let h = CANVAS_HEIGHT as f32;

    surface.clear_rect(0.0, 0.0, w, h);

    // Ground band from the ground line down to the bottom edge.
    surface.set_fill(GROUND_FILL);
    surface.fill_rect(0.0, GROUND_LEVEL, w, h - GROUND_LEVEL);

    player.draw(surface);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::PLAYER_FILL;
    use glam::Vec2;

    /// Records every surface call for assertions.
    #[derive(Default)]
    struct RecordingSurface {
        calls: Vec<Call>,
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        SetFill(String),
        FillRect(f32, f32, f32, f32),
        ClearRect(f32, f32, f32, f32),
    }

    impl Surface for RecordingSurface {
        fn set_fill(&mut self, color: &str) {
            self.calls.push(Call::SetFill(color.to_string()));
        }

        fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
            self.calls.push(Call::FillRect(x, y, w, h));
        }

        fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
            self.calls.push(Call::ClearRect(x, y, w, h));
        }
    }

    #[test]
    fn test_frame_paint_order() {
        let player = Player::new(Vec2::new(100.0, 400.0), Vec2::new(40.0, 60.0));
        let mut surface = RecordingSurface::default();

        render(&mut surface, &player);

        assert_eq!(
            surface.calls,
            vec![
                Call::ClearRect(0.0, 0.0, 800.0, 600.0),
                Call::SetFill(GROUND_FILL.to_string()),
                Call::FillRect(0.0, 500.0, 800.0, 100.0),
                Call::SetFill(PLAYER_FILL.to_string()),
                Call::FillRect(100.0, 400.0, 40.0, 60.0),
            ]
        );
    }

    #[test]
    fn test_player_rect_tracks_position() {
        let mut player = Player::new(Vec2::new(100.0, 440.0), Vec2::new(40.0, 60.0));
        player.move_right();
        player.update(GROUND_LEVEL);

        let mut surface = RecordingSurface::default();
        player.draw(&mut surface);

        assert_eq!(
            surface.calls.last(),
            Some(&Call::FillRect(105.0, 440.0, 40.0, 60.0))
        );
    }
}
