use egui::{Color32, Pos2, Stroke};

use crate::command::{DisplayParams, STICKER_COLOR};
use crate::surface::Surface;

const MARKER_PREVIEW_ALPHA: f32 = 0.7;
const STICKER_PREVIEW_ALPHA: f32 = 0.6;
const MARKER_PREVIEW_OUTLINE: Color32 = Color32::RED;
const MARKER_PREVIEW_FILL: Color32 = Color32::from_rgba_premultiplied(38, 0, 0, 38);

/// Indicator of the active tool drawn under an idle pointer. Never committed.
#[derive(Debug, Clone, PartialEq)]
pub enum Preview {
    /// Ring the size of the marker tip
    Marker { position: Pos2, thickness: f32 },
    /// Faded copy of the selected sticker
    Sticker { position: Pos2, glyph: String },
}

impl Preview {
    pub fn position(&self) -> Pos2 {
        match self {
            Preview::Marker { position, .. } | Preview::Sticker { position, .. } => *position,
        }
    }

    pub fn display(&self, surface: &mut dyn Surface, params: &DisplayParams) {
        surface.save();
        match self {
            Preview::Marker {
                position,
                thickness,
            } => {
                surface.set_alpha(MARKER_PREVIEW_ALPHA);
                surface.circle(
                    *position,
                    thickness / 2.0,
                    MARKER_PREVIEW_FILL,
                    Stroke::new(1.0, MARKER_PREVIEW_OUTLINE),
                );
            }
            Preview::Sticker { position, glyph } => {
                surface.set_alpha(STICKER_PREVIEW_ALPHA);
                surface.text(*position, glyph, params.sticker_size, STICKER_COLOR);
            }
        }
        surface.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawOp, RecordingSurface};

    #[test]
    fn test_marker_preview_ring_matches_thickness() {
        let preview = Preview::Marker {
            position: Pos2::new(20.0, 30.0),
            thickness: 6.0,
        };
        let mut surface = RecordingSurface::new();
        preview.display(&mut surface, &DisplayParams::default());

        match &surface.ops()[0] {
            DrawOp::Circle { center, radius, .. } => {
                assert_eq!(*center, Pos2::new(20.0, 30.0));
                assert_eq!(*radius, 3.0);
            }
            other => panic!("unexpected op {other:?}"),
        }
    }

    #[test]
    fn test_sticker_preview_is_translucent_and_state_is_restored() {
        let preview = Preview::Sticker {
            position: Pos2::new(5.0, 5.0),
            glyph: "🚀".to_owned(),
        };
        let mut surface = RecordingSurface::new();
        preview.display(&mut surface, &DisplayParams { sticker_size: 20.0 });
        surface.text(Pos2::ZERO, "x", 10.0, Color32::BLACK);

        let alphas: Vec<f32> = surface
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { alpha, .. } => Some(*alpha),
                _ => None,
            })
            .collect();
        assert_eq!(alphas, vec![STICKER_PREVIEW_ALPHA, 1.0]);
    }
}
