//! Canvas rendering module
//!
//! Everything on screen is painted with two primitives: a fill color and
//! filled axis-aligned rectangles. [`Surface`] captures that contract so the
//! simulation can be exercised headless; the browser supplies the real
//! canvas-backed implementation.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

/// Minimal drawing contract the game paints through.
///
/// Coordinates are canvas pixels in the simulation's own space (origin
/// top-left, y down); colors are CSS color strings.
pub trait Surface {
    /// Set the fill color used by subsequent `fill_rect` calls.
    fn set_fill(&mut self, color: &str);

    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);

    /// Clear an axis-aligned rectangle back to transparent.
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
}
