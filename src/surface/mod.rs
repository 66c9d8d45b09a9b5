//! Drawing targets that commands and previews are replayed onto.
//!
//! A [`Surface`] is an immediate-mode 2D target with a small transient state
//! stack (uniform scale and opacity). Commands never know what resolution
//! they are drawn at; the export path scales the surface instead.

use egui::{Color32, Pos2, Stroke};

mod painter;
mod raster;
mod recording;

pub use painter::PainterSurface;
pub use raster::{RasterSurface, StickerFonts};
pub use recording::{DrawOp, RecordingSurface};

/// How the ends of an open path are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    #[default]
    Round,
    Butt,
}

/// Style of a stroked path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathStyle {
    pub width: f32,
    pub cap: LineCap,
    pub color: Color32,
}

impl PathStyle {
    pub fn new(width: f32, color: Color32) -> Self {
        Self {
            width,
            cap: LineCap::Round,
            color,
        }
    }

    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }
}

/// Transient per-draw state that `save`/`restore` push and pop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceState {
    /// Uniform scale applied to every coordinate and length.
    pub scale: f32,
    /// Global opacity multiplied into every color.
    pub alpha: f32,
}

impl Default for SurfaceState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            alpha: 1.0,
        }
    }
}

/// The current state plus the saved states below it.
#[derive(Debug, Clone, Default)]
pub struct StateStack {
    current: SurfaceState,
    saved: Vec<SurfaceState>,
}

impl StateStack {
    pub fn current(&self) -> SurfaceState {
        self.current
    }

    pub fn save(&mut self) {
        self.saved.push(self.current);
    }

    /// Restoring with nothing saved leaves the state untouched.
    pub fn restore(&mut self) {
        if let Some(state) = self.saved.pop() {
            self.current = state;
        }
    }

    pub fn scale(&mut self, factor: f32) {
        self.current.scale *= factor;
    }

    pub fn set_alpha(&mut self, alpha: f32) {
        self.current.alpha = alpha.clamp(0.0, 1.0);
    }

    /// Maps a surface-local point through the current transform.
    pub fn transform(&self, pos: Pos2) -> Pos2 {
        Pos2::new(pos.x * self.current.scale, pos.y * self.current.scale)
    }

    /// Scales a length (line width, radius, font size) through the current transform.
    pub fn length(&self, len: f32) -> f32 {
        len * self.current.scale
    }

    /// Applies the current opacity to a color.
    pub fn tint(&self, color: Color32) -> Color32 {
        if self.current.alpha >= 1.0 {
            color
        } else {
            color.gamma_multiply(self.current.alpha)
        }
    }
}

/// A 2D drawing target.
///
/// Implementors only provide the primitives; the state-stack operations have
/// default implementations on top of [`Surface::state_mut`].
pub trait Surface {
    fn state_mut(&mut self) -> &mut StateStack;

    /// Wipes the whole surface.
    fn clear(&mut self);

    /// Strokes an open polyline. Paths with fewer than two points leave no mark.
    fn stroke_path(&mut self, points: &[Pos2], style: PathStyle);

    /// Draws a filled circle with an outline on top.
    fn circle(&mut self, center: Pos2, radius: f32, fill: Color32, stroke: Stroke);

    /// Draws `text` centered horizontally and vertically on `anchor`.
    fn text(&mut self, anchor: Pos2, text: &str, size: f32, color: Color32);

    fn save(&mut self) {
        self.state_mut().save();
    }

    fn restore(&mut self) {
        self.state_mut().restore();
    }

    fn scale(&mut self, factor: f32) {
        self.state_mut().scale(factor);
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.state_mut().set_alpha(alpha);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_pops_scale_and_alpha() {
        let mut stack = StateStack::default();
        stack.scale(4.0);
        stack.save();
        stack.scale(2.0);
        stack.set_alpha(0.5);
        assert_eq!(stack.transform(Pos2::new(1.0, 2.0)), Pos2::new(8.0, 16.0));

        stack.restore();
        assert_eq!(stack.current().alpha, 1.0);
        assert_eq!(stack.length(3.0), 12.0);
    }

    #[test]
    fn test_restore_without_save_is_noop() {
        let mut stack = StateStack::default();
        stack.set_alpha(0.25);
        stack.restore();
        assert_eq!(stack.current().alpha, 0.25);
    }
}
