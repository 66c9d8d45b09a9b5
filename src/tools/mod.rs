use egui::Pos2;

use crate::command::{Command, MarkerStroke, StickerPlacement};
use crate::preview::Preview;

mod palette;
pub use palette::{StickerPalette, StickerSet};

pub const THIN_MARKER: f32 = 2.0;
pub const THICK_MARKER: f32 = 6.0;
pub const DEFAULT_STICKER_SIZE: f32 = 24.0;

/// Which kind of command a press on the canvas starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolKind {
    #[default]
    Marker,
    Sticker,
}

/// Current tool selection and its parameters.
///
/// The controller is the only place new commands and previews are built, so
/// they always reflect what the tool panel shows.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolController {
    kind: ToolKind,
    thickness: f32,
    /// None until a sticker has been picked
    glyph: Option<String>,
    sticker_size: f32,
}

impl Default for ToolController {
    fn default() -> Self {
        Self::new(THIN_MARKER, DEFAULT_STICKER_SIZE)
    }
}

impl ToolController {
    /// Starts out with the marker selected.
    pub fn new(thickness: f32, sticker_size: f32) -> Self {
        Self {
            kind: ToolKind::Marker,
            thickness,
            glyph: None,
            sticker_size,
        }
    }

    pub fn kind(&self) -> ToolKind {
        self.kind
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn glyph(&self) -> Option<&str> {
        self.glyph.as_deref()
    }

    pub fn sticker_size(&self) -> f32 {
        self.sticker_size
    }

    /// True when `thickness` is the active marker, for highlighting.
    pub fn is_marker_selected(&self, thickness: f32) -> bool {
        self.kind == ToolKind::Marker && self.thickness == thickness
    }

    /// True when `glyph` is the active sticker, for highlighting.
    pub fn is_sticker_selected(&self, glyph: &str) -> bool {
        self.kind == ToolKind::Sticker && self.glyph.as_deref() == Some(glyph)
    }

    pub fn select_marker(&mut self, thickness: f32) {
        if !(thickness > 0.0) {
            log::warn!("Ignoring marker thickness {thickness}");
            return;
        }
        log::info!("Marker selected ({thickness}px)");
        self.kind = ToolKind::Marker;
        self.thickness = thickness;
    }

    pub fn select_sticker(&mut self, glyph: impl Into<String>) {
        let glyph = glyph.into();
        log::info!("Sticker selected: {glyph}");
        self.kind = ToolKind::Sticker;
        self.glyph = Some(glyph);
    }

    /// Switches tools while keeping every parameter as it was.
    pub fn select_tool(&mut self, kind: ToolKind) {
        self.kind = kind;
    }

    pub fn set_sticker_size(&mut self, size: f32) {
        if !(size > 0.0) {
            log::warn!("Ignoring sticker size {size}");
            return;
        }
        self.sticker_size = size;
    }

    pub fn begin_stroke(&self, pos: Pos2) -> Command {
        MarkerStroke::new(pos, self.thickness).into()
    }

    /// None when no sticker has been picked yet.
    pub fn begin_sticker(&self, pos: Pos2) -> Option<Command> {
        self.glyph
            .as_ref()
            .map(|glyph| StickerPlacement::new(pos, glyph.clone()).into())
    }

    /// Builds the command a press at `pos` starts with the active tool.
    pub fn begin_command(&self, pos: Pos2) -> Option<Command> {
        match self.kind {
            ToolKind::Marker => Some(self.begin_stroke(pos)),
            ToolKind::Sticker => {
                let command = self.begin_sticker(pos);
                if command.is_none() {
                    log::warn!("Sticker tool active without a sticker, ignoring press");
                }
                command
            }
        }
    }

    pub fn preview_at(&self, pos: Pos2) -> Option<Preview> {
        match (self.kind, &self.glyph) {
            (ToolKind::Marker, _) => Some(Preview::Marker {
                position: pos,
                thickness: self.thickness,
            }),
            (ToolKind::Sticker, Some(glyph)) => Some(Preview::Sticker {
                position: pos,
                glyph: glyph.clone(),
            }),
            (ToolKind::Sticker, None) => None,
        }
    }
}
