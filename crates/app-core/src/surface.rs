//! Drawing capability consumed by the scene.
//!
//! The scene never touches a real canvas: the web frontend implements this
//! over `CanvasRenderingContext2d`, the tests over a recording stub. Colors
//! are CSS color strings, the native currency of the 2D canvas.

use glam::Vec2;

/// Horizontal text alignment, mirroring the canvas `textAlign` values the
/// guides use. Text is always drawn with a middle vertical baseline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

pub trait Surface {
    /// Wipe the whole drawing area.
    fn clear(&mut self);
    /// Stroke the upper half-circle (π to 0) around `center`.
    fn stroke_upper_arc(&mut self, center: Vec2, radius: f32, color: &str, line_width: f32);
    fn line(&mut self, from: Vec2, to: Vec2, color: &str, line_width: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str);
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: &str);
    fn stroke_rect(&mut self, origin: Vec2, size: Vec2, color: &str, line_width: f32);
    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, color: &str, align: TextAlign);
}
