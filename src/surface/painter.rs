use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke};

use super::{LineCap, PathStyle, StateStack, Surface};

/// On-screen surface backed by an egui painter.
///
/// Surface-local coordinates are relative to the top-left of `canvas_rect`.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    canvas_rect: Rect,
    background: Color32,
    state: StateStack,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, canvas_rect: Rect, background: Color32) -> Self {
        Self {
            painter,
            canvas_rect,
            background,
            state: StateStack::default(),
        }
    }

    fn to_screen(&self, pos: Pos2) -> Pos2 {
        self.canvas_rect.min + self.state.transform(pos).to_vec2()
    }
}

impl Surface for PainterSurface<'_> {
    fn state_mut(&mut self) -> &mut StateStack {
        &mut self.state
    }

    fn clear(&mut self) {
        self.painter.rect_filled(self.canvas_rect, 0.0, self.background);
    }

    fn stroke_path(&mut self, points: &[Pos2], style: PathStyle) {
        let width = self.state.length(style.width);
        let color = self.state.tint(style.color);
        let screen_points: Vec<Pos2> = points.iter().map(|p| self.to_screen(*p)).collect();

        if let [dot] = screen_points[..] {
            if style.cap == LineCap::Round {
                self.painter.circle_filled(dot, width / 2.0, color);
            }
            return;
        }
        if screen_points.is_empty() {
            return;
        }

        // egui paths have no cap style, round ends are drawn as discs
        if style.cap == LineCap::Round {
            for end in [screen_points[0], screen_points[screen_points.len() - 1]] {
                self.painter.circle_filled(end, width / 2.0, color);
            }
        }

        self.painter
            .add(Shape::line(screen_points, Stroke::new(width, color)));
    }

    fn circle(&mut self, center: Pos2, radius: f32, fill: Color32, stroke: Stroke) {
        let stroke = Stroke::new(self.state.length(stroke.width), self.state.tint(stroke.color));
        self.painter.circle(
            self.to_screen(center),
            self.state.length(radius),
            self.state.tint(fill),
            stroke,
        );
    }

    fn text(&mut self, anchor: Pos2, text: &str, size: f32, color: Color32) {
        self.painter.text(
            self.to_screen(anchor),
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(self.state.length(size)),
            self.state.tint(color),
        );
    }
}
