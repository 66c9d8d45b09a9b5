use crate::config::SketchpadConfig;
use crate::export;
use crate::input::CanvasInput;
use crate::panels::{central_panel, custom_sticker_prompt, tools_panel};
use crate::sketchpad::Sketchpad;

/// Default text offered when adding a custom sticker.
pub const CUSTOM_STICKER_PLACEHOLDER: &str = "🔥";

pub struct SketchpadApp {
    sketchpad: Sketchpad,
    config: SketchpadConfig,
    canvas_input: CanvasInput,
    /// Text of the custom sticker prompt, Some while it is open
    custom_sticker_draft: Option<String>,
    /// Message from the last failed export
    export_error: Option<String>,
}

impl SketchpadApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: SketchpadConfig) -> Self {
        Self::with_sketchpad(Sketchpad::new(&config), config)
    }

    pub fn with_sketchpad(sketchpad: Sketchpad, config: SketchpadConfig) -> Self {
        Self {
            sketchpad,
            config,
            canvas_input: CanvasInput::new(egui::Rect::NOTHING),
            custom_sticker_draft: None,
            export_error: None,
        }
    }

    pub fn sketchpad(&self) -> &Sketchpad {
        &self.sketchpad
    }

    pub fn sketchpad_mut(&mut self) -> &mut Sketchpad {
        &mut self.sketchpad
    }

    pub fn config(&self) -> &SketchpadConfig {
        &self.config
    }

    pub fn canvas_input_mut(&mut self) -> &mut CanvasInput {
        &mut self.canvas_input
    }

    pub fn export_error(&self) -> Option<&str> {
        self.export_error.as_deref()
    }

    /// Encodes the drawing and hands it to the platform.
    pub fn export(&mut self) {
        let result = self.sketchpad.export_image().and_then(|bytes| {
            export::deliver_png(&bytes, &self.config.export_file_name, &self.config.export_dir)
        });
        match result {
            Ok(()) => self.export_error = None,
            Err(err) => {
                log::error!("Export failed: {err}");
                self.export_error = Some(err.to_string());
            }
        }
    }

    pub fn open_custom_sticker_prompt(&mut self) {
        self.custom_sticker_draft = Some(CUSTOM_STICKER_PLACEHOLDER.to_owned());
    }

    pub fn custom_sticker_draft_mut(&mut self) -> Option<&mut String> {
        self.custom_sticker_draft.as_mut()
    }

    pub fn submit_custom_sticker(&mut self) {
        if let Some(text) = self.custom_sticker_draft.take() {
            self.sketchpad.commit_custom_sticker(&text);
        }
    }

    pub fn cancel_custom_sticker(&mut self) {
        self.custom_sticker_draft = None;
    }
}

impl eframe::App for SketchpadApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        central_panel(self, ctx);
        custom_sticker_prompt(self, ctx);
    }
}
