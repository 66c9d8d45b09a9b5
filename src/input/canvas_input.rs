use egui::{Pos2, Rect};

use super::InputEvent;

/// The slice of egui's pointer state the canvas cares about, for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerFrame {
    pub hover_pos: Option<Pos2>,
    /// False when another layer (a window, a popup) covers the canvas under the pointer
    pub canvas_hovered: bool,
    pub primary_pressed: bool,
    pub primary_released: bool,
}

impl PointerFrame {
    pub fn from_egui(ctx: &egui::Context, canvas_hovered: bool) -> Self {
        ctx.input(|input| Self {
            hover_pos: input.pointer.hover_pos(),
            canvas_hovered,
            primary_pressed: input.pointer.primary_pressed(),
            primary_released: input.pointer.primary_released(),
        })
    }
}

/// Converts per-frame egui pointer state into canvas [`InputEvent`]s.
#[derive(Debug, Clone)]
pub struct CanvasInput {
    canvas_rect: Rect,
    /// Last canvas-local position while the pointer was over the canvas
    last_pos: Option<Pos2>,
    pressed: bool,
}

impl CanvasInput {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            last_pos: None,
            pressed: false,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    /// `canvas_hovered` should come from the canvas response's `contains_pointer()`.
    pub fn process_input(&mut self, ctx: &egui::Context, canvas_hovered: bool) -> Vec<InputEvent> {
        self.translate(PointerFrame::from_egui(ctx, canvas_hovered))
    }

    pub fn translate(&mut self, frame: PointerFrame) -> Vec<InputEvent> {
        let mut events = Vec::new();

        let inside = frame
            .hover_pos
            .filter(|pos| frame.canvas_hovered && self.canvas_rect.contains(*pos))
            .map(|pos| (pos - self.canvas_rect.min).to_pos2());

        match (self.last_pos, inside) {
            (last, Some(pos)) if last != Some(pos) => {
                events.push(InputEvent::PointerMove { pos });
            }
            (Some(_), None) => {
                events.push(InputEvent::PointerLeave);
                self.pressed = false;
            }
            _ => {}
        }
        self.last_pos = inside;

        if frame.primary_pressed {
            if let Some(pos) = inside {
                events.push(InputEvent::PointerDown { pos });
                self.pressed = true;
            }
        }

        if frame.primary_released && self.pressed {
            if let Some(pos) = inside {
                events.push(InputEvent::PointerUp { pos });
            }
            self.pressed = false;
        }

        events
    }
}
