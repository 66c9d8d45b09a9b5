use egui::{Color32, Pos2, Stroke};

use super::{LineCap, PathStyle, StateStack, Surface};

/// One primitive as it reached the surface, in device coordinates with the
/// current opacity already applied.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    Path {
        points: Vec<Pos2>,
        width: f32,
        cap: LineCap,
        color: Color32,
    },
    Circle {
        center: Pos2,
        radius: f32,
        fill: Color32,
        stroke: Stroke,
    },
    Text {
        anchor: Pos2,
        text: String,
        size: f32,
        color: Color32,
        alpha: f32,
    },
}

/// Surface that keeps a log of everything drawn on it.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    state: StateStack,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Operations drawn since the most recent clear.
    pub fn frame(&self) -> &[DrawOp] {
        let start = self
            .ops
            .iter()
            .rposition(|op| *op == DrawOp::Clear)
            .map_or(0, |i| i + 1);
        &self.ops[start..]
    }
}

impl Surface for RecordingSurface {
    fn state_mut(&mut self) -> &mut StateStack {
        &mut self.state
    }

    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn stroke_path(&mut self, points: &[Pos2], style: PathStyle) {
        self.ops.push(DrawOp::Path {
            points: points.iter().map(|p| self.state.transform(*p)).collect(),
            width: self.state.length(style.width),
            cap: style.cap,
            color: self.state.tint(style.color),
        });
    }

    fn circle(&mut self, center: Pos2, radius: f32, fill: Color32, stroke: Stroke) {
        self.ops.push(DrawOp::Circle {
            center: self.state.transform(center),
            radius: self.state.length(radius),
            fill: self.state.tint(fill),
            stroke: Stroke::new(self.state.length(stroke.width), self.state.tint(stroke.color)),
        });
    }

    fn text(&mut self, anchor: Pos2, text: &str, size: f32, color: Color32) {
        self.ops.push(DrawOp::Text {
            anchor: self.state.transform(anchor),
            text: text.to_owned(),
            size: self.state.length(size),
            color: self.state.tint(color),
            alpha: self.state.current().alpha,
        });
    }
}
