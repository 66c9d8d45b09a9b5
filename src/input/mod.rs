//! Pointer input, from raw egui state down to history and preview updates.

use egui::Pos2;

mod canvas_input;
mod router;

pub use canvas_input::{CanvasInput, PointerFrame};
pub use router::{InputRouter, RouterState};

/// Pointer events in canvas-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button went down on the canvas
    PointerDown { pos: Pos2 },
    /// Pointer moved over the canvas, with or without the button held
    PointerMove { pos: Pos2 },
    /// Primary button was released
    PointerUp { pos: Pos2 },
    /// Pointer left the canvas
    PointerLeave,
}
