use egui::{Color32, Pos2};

use crate::surface::{PathStyle, Surface};

pub const MARKER_COLOR: Color32 = Color32::BLACK;

/// A freehand marker line.
///
/// Points only ever grow at the end; the thickness is fixed when the stroke
/// is started.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerStroke {
    points: Vec<Pos2>,
    thickness: f32,
}

impl MarkerStroke {
    pub fn new(start: Pos2, thickness: f32) -> Self {
        Self {
            points: vec![start],
            thickness,
        }
    }

    pub fn extend(&mut self, point: Pos2) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    // A single point renders as a dot from the round cap.
    pub fn display(&self, surface: &mut dyn Surface) {
        surface.save();
        surface.stroke_path(&self.points, PathStyle::new(self.thickness, MARKER_COLOR));
        surface.restore();
    }
}
