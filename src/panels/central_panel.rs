use egui::{Color32, Sense, Stroke};

use crate::app::SketchpadApp;
use crate::surface::PainterSurface;

pub fn central_panel(app: &mut SketchpadApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let canvas_size = app.config().canvas_size_vec();
        let background = app.config().background_color();
        let (response, painter) = ui.allocate_painter(canvas_size, Sense::drag());
        let canvas_rect = response.rect;

        // Handle input
        app.canvas_input_mut().set_canvas_rect(canvas_rect);
        let events = app
            .canvas_input_mut()
            .process_input(ctx, response.contains_pointer());
        if app.sketchpad_mut().handle_events(&events) {
            ctx.request_repaint();
        }

        // Render the canvas
        let mut surface = PainterSurface::new(&painter, canvas_rect, background);
        app.sketchpad().render(&mut surface);
        painter.rect_stroke(canvas_rect, 0.0, Stroke::new(1.0, Color32::GRAY));
    });
}
