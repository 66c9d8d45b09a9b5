use egui::{Button, ComboBox, RichText, Slider};

use crate::app::SketchpadApp;

const STICKER_BUTTON_SIZE: f32 = 20.0;

pub fn tools_panel(app: &mut SketchpadApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading("Sticker Sketchpad");
            ui.separator();

            marker_section(app, ui);
            ui.separator();

            sticker_section(app, ui);
            ui.separator();

            // Clear/Undo/Redo/Export section
            ui.horizontal(|ui| {
                if ui.button("Clear").clicked() {
                    app.sketchpad_mut().clear_all();
                }

                let can_undo = app.sketchpad().can_undo();
                let can_redo = app.sketchpad().can_redo();

                if ui.add_enabled(can_undo, Button::new("Undo")).clicked() {
                    app.sketchpad_mut().undo();
                }
                if ui.add_enabled(can_redo, Button::new("Redo")).clicked() {
                    app.sketchpad_mut().redo();
                }
            });

            if ui.button("Export PNG").clicked() {
                app.export();
            }
            if let Some(error) = app.export_error() {
                let color = ui.visuals().error_fg_color;
                ui.colored_label(color, error);
            }

            ui.separator();

            let history = app.sketchpad().history();
            ui.horizontal(|ui| {
                ui.label(format!("Commands: {}", history.len()));
                ui.label(format!("Redo stack size: {}", history.redo_stack().len()));
            });
        });
}

fn marker_section(app: &mut SketchpadApp, ui: &mut egui::Ui) {
    let thin = app.config().thin_marker;
    let thick = app.config().thick_marker;

    ui.horizontal(|ui| {
        for (label, thickness) in [("Thin Marker", thin), ("Thick Marker", thick)] {
            let selected = app.sketchpad().tools().is_marker_selected(thickness);
            if ui.selectable_label(selected, label).clicked() {
                app.sketchpad_mut().select_marker(thickness);
            }
        }
    });
}

fn sticker_section(app: &mut SketchpadApp, ui: &mut egui::Ui) {
    let palette = app.sketchpad().palette();
    let sets: Vec<(String, String)> = palette
        .sets()
        .iter()
        .map(|set| (set.name.clone(), set.label.clone()))
        .collect();
    let active_set = palette.active_set().map(|set| set.name.clone());
    let active_label = palette
        .active_set()
        .map(|set| set.label.clone())
        .unwrap_or_default();

    let mut chosen_set = None;
    ComboBox::from_label("Sticker Set")
        .selected_text(active_label)
        .show_ui(ui, |ui| {
            for (name, label) in &sets {
                let selected = active_set.as_deref() == Some(name.as_str());
                if ui.selectable_label(selected, label.as_str()).clicked() {
                    chosen_set = Some(name.clone());
                }
            }
        });
    if let Some(name) = chosen_set {
        app.sketchpad_mut().choose_sticker_set(&name);
    }

    let [min, max] = app.config().sticker_size_range;
    let mut size = app.sketchpad().tools().sticker_size();
    if ui
        .add(Slider::new(&mut size, min..=max).text("Sticker Size"))
        .changed()
    {
        app.sketchpad_mut().set_sticker_render_size(size);
    }

    let glyphs = app.sketchpad().palette().glyphs().to_vec();
    ui.horizontal_wrapped(|ui| {
        for glyph in &glyphs {
            let selected = app.sketchpad().tools().is_sticker_selected(glyph);
            let text = RichText::new(glyph.as_str()).size(STICKER_BUTTON_SIZE);
            if ui.selectable_label(selected, text).clicked() {
                app.sketchpad_mut().select_sticker(glyph);
            }
        }
    });

    if ui.button("Add Custom Sticker").clicked() {
        app.open_custom_sticker_prompt();
    }
}
