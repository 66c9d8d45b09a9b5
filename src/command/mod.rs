mod history;
mod marker;
mod sticker;

use egui::Pos2;

use crate::surface::Surface;

pub use history::History;
pub use marker::{MARKER_COLOR, MarkerStroke};
pub use sticker::{STICKER_COLOR, StickerPlacement};

/// Values a command reads from live editor state at display time rather than
/// capturing them when it is created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayParams {
    /// Font size every sticker is drawn at, placed or previewed.
    pub sticker_size: f32,
}

impl Default for DisplayParams {
    fn default() -> Self {
        Self {
            sticker_size: crate::tools::DEFAULT_STICKER_SIZE,
        }
    }
}

/// A replayable unit of drawing history.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// A freehand marker line
    Stroke(MarkerStroke),
    /// An emoji or text sticker
    Sticker(StickerPlacement),
}

impl Command {
    /// Extends the command while the pointer is dragged.
    ///
    /// Strokes gain a point; stickers jump to the new position.
    pub fn drag(&mut self, pos: Pos2) {
        match self {
            Command::Stroke(stroke) => stroke.extend(pos),
            Command::Sticker(sticker) => sticker.move_to(pos),
        }
    }

    pub fn display(&self, surface: &mut dyn Surface, params: &DisplayParams) {
        match self {
            Command::Stroke(stroke) => stroke.display(surface),
            Command::Sticker(sticker) => sticker.display(surface, params),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Stroke(_) => "Marker Stroke",
            Command::Sticker(_) => "Sticker",
        }
    }

    pub fn as_stroke(&self) -> Option<&MarkerStroke> {
        match self {
            Command::Stroke(stroke) => Some(stroke),
            _ => None,
        }
    }

    pub fn as_sticker(&self) -> Option<&StickerPlacement> {
        match self {
            Command::Sticker(sticker) => Some(sticker),
            _ => None,
        }
    }
}

impl From<MarkerStroke> for Command {
    fn from(stroke: MarkerStroke) -> Self {
        Command::Stroke(stroke)
    }
}

impl From<StickerPlacement> for Command {
    fn from(sticker: StickerPlacement) -> Self {
        Command::Sticker(sticker)
    }
}
