use egui::{Key, TextEdit};

use crate::app::SketchpadApp;

enum PromptAction {
    Submit,
    Cancel,
}

/// Modal asking for the text of a new custom sticker.
pub fn custom_sticker_prompt(app: &mut SketchpadApp, ctx: &egui::Context) {
    let Some(draft) = app.custom_sticker_draft_mut() else {
        return;
    };

    let mut action = None;
    egui::Window::new("Add Custom Sticker")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label("Enter a custom sticker (emoji or text):");
            let response = ui.add(TextEdit::singleline(draft).desired_width(160.0));
            if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                action = Some(PromptAction::Submit);
            }
            ui.horizontal(|ui| {
                if ui.button("Add").clicked() {
                    action = Some(PromptAction::Submit);
                }
                if ui.button("Cancel").clicked() {
                    action = Some(PromptAction::Cancel);
                }
            });
        });

    match action {
        Some(PromptAction::Submit) => app.submit_custom_sticker(),
        Some(PromptAction::Cancel) => app.cancel_custom_sticker(),
        None => {}
    }
}
