use egui::{Color32, Pos2};

use super::DisplayParams;
use crate::surface::Surface;

pub const STICKER_COLOR: Color32 = Color32::BLACK;

/// A glyph placed on the canvas, centered on its position.
#[derive(Debug, Clone, PartialEq)]
pub struct StickerPlacement {
    position: Pos2,
    glyph: String,
}

impl StickerPlacement {
    pub fn new(position: Pos2, glyph: impl Into<String>) -> Self {
        Self {
            position,
            glyph: glyph.into(),
        }
    }

    pub fn move_to(&mut self, position: Pos2) {
        self.position = position;
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn display(&self, surface: &mut dyn Surface, params: &DisplayParams) {
        surface.save();
        surface.text(self.position, &self.glyph, params.sticker_size, STICKER_COLOR);
        surface.restore();
    }
}
