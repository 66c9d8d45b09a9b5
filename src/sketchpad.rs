use crate::command::{Command, DisplayParams, History};
use crate::config::SketchpadConfig;
use crate::error::ExportError;
use crate::input::{InputEvent, InputRouter};
use crate::preview::Preview;
use crate::renderer::Renderer;
use crate::surface::{StickerFonts, Surface};
use crate::tools::{StickerPalette, ToolController, ToolKind};

/// Drawing state behind the canvas and the operations the tool panel calls.
///
/// Every operation runs to completion and never fails; export is the only
/// fallible step and it does not touch drawing state.
#[derive(Debug)]
pub struct Sketchpad {
    history: History,
    tools: ToolController,
    router: InputRouter,
    palette: StickerPalette,
    renderer: Renderer,
}

impl Default for Sketchpad {
    fn default() -> Self {
        Self::new(&SketchpadConfig::default())
    }
}

impl Sketchpad {
    pub fn new(config: &SketchpadConfig) -> Self {
        Self::with_renderer(
            config,
            Renderer::new(config.canvas_size, config.export_scale),
        )
    }

    /// Builds a sketchpad whose exports draw no glyphs, without parsing any fonts.
    pub fn without_fonts(config: &SketchpadConfig) -> Self {
        Self::with_renderer(
            config,
            Renderer::with_fonts(StickerFonts::default(), config.canvas_size, config.export_scale),
        )
    }

    pub fn with_renderer(config: &SketchpadConfig, renderer: Renderer) -> Self {
        Self {
            history: History::new(),
            tools: ToolController::new(config.thin_marker, config.sticker_size),
            router: InputRouter::new(),
            palette: StickerPalette::new(config.sticker_sets.clone()),
            renderer,
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn tools(&self) -> &ToolController {
        &self.tools
    }

    pub fn palette(&self) -> &StickerPalette {
        &self.palette
    }

    pub fn commands(&self) -> &[Command] {
        self.history.snapshot()
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.router.preview()
    }

    pub fn is_drawing(&self) -> bool {
        self.router.is_drawing()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn display_params(&self) -> DisplayParams {
        DisplayParams {
            sticker_size: self.tools.sticker_size(),
        }
    }

    /// Feeds one pointer event through the state machine. Returns true when a redraw is due.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        self.router.handle(event, &mut self.history, &self.tools)
    }

    pub fn handle_events<'a>(&mut self, events: impl IntoIterator<Item = &'a InputEvent>) -> bool {
        events
            .into_iter()
            .fold(false, |redraw, event| self.handle_event(event) | redraw)
    }

    pub fn select_marker(&mut self, thickness: f32) {
        self.tools.select_marker(thickness);
    }

    pub fn select_tool(&mut self, kind: ToolKind) {
        self.tools.select_tool(kind);
    }

    pub fn select_sticker(&mut self, glyph: &str) {
        self.tools.select_sticker(glyph);
    }

    pub fn set_sticker_render_size(&mut self, size: f32) {
        self.tools.set_sticker_size(size);
    }

    /// Adds a custom sticker to the palette. Blank text is ignored.
    pub fn commit_custom_sticker(&mut self, text: &str) {
        self.palette.add_custom(text);
    }

    pub fn choose_sticker_set(&mut self, name: &str) {
        self.palette.choose_set(name);
    }

    pub fn clear_all(&mut self) {
        log::info!("Clearing canvas ({} commands)", self.history.len());
        self.history.clear();
        self.router.detach();
    }

    pub fn undo(&mut self) {
        if self.history.undo() {
            self.router.detach();
        }
    }

    pub fn redo(&mut self) {
        if self.history.redo() {
            self.router.detach();
        }
    }

    /// Redraws the canvas from history, with the preview on top when idle.
    pub fn render(&self, surface: &mut dyn Surface) {
        Renderer::render(
            surface,
            self.history.snapshot(),
            self.router.preview(),
            self.router.is_drawing(),
            &self.display_params(),
        );
    }

    /// Encodes the committed drawing as a PNG at the export scale.
    pub fn export_image(&self) -> Result<Vec<u8>, ExportError> {
        self.renderer
            .export_png(self.history.snapshot(), &self.display_params())
    }
}
