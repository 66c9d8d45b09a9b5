use std::io::Cursor;

use image::{ImageFormat, RgbaImage};

use crate::command::{Command, DisplayParams};
use crate::error::ExportError;
use crate::preview::Preview;
use crate::surface::{RasterSurface, StickerFonts, Surface};

/// Replays commands onto surfaces, for the screen and for export.
#[derive(Debug, Clone)]
pub struct Renderer {
    fonts: StickerFonts,
    canvas_size: [u32; 2],
    export_scale: u32,
}

impl Renderer {
    /// Creates a renderer that rasterizes exports with egui's bundled fonts.
    pub fn new(canvas_size: [u32; 2], export_scale: u32) -> Self {
        Self::with_fonts(StickerFonts::from_egui_defaults(), canvas_size, export_scale)
    }

    pub fn with_fonts(fonts: StickerFonts, canvas_size: [u32; 2], export_scale: u32) -> Self {
        Self {
            fonts,
            canvas_size,
            export_scale,
        }
    }

    /// Redraws a whole frame.
    ///
    /// Commands are drawn oldest first so newer ones end up on top. The
    /// preview goes last, and only while no button is held.
    pub fn render(
        surface: &mut dyn Surface,
        commands: &[Command],
        preview: Option<&Preview>,
        is_drawing: bool,
        params: &DisplayParams,
    ) {
        surface.clear();
        for command in commands {
            command.display(surface, params);
        }
        if let Some(preview) = preview.filter(|_| !is_drawing) {
            preview.display(surface, params);
        }
    }

    /// Pixel size of an exported image.
    pub fn export_size(&self) -> Result<(u32, u32), ExportError> {
        let [width, height] = self.canvas_size;
        let invalid = ExportError::InvalidSize { width, height };
        let scaled = |side: u32| side.checked_mul(self.export_scale).filter(|s| *s > 0);
        match (scaled(width), scaled(height)) {
            (Some(w), Some(h)) => Ok((w, h)),
            _ => Err(invalid),
        }
    }

    /// Draws `commands` offscreen at the export scale. Previews never appear in exports.
    pub fn export_image(
        &self,
        commands: &[Command],
        params: &DisplayParams,
    ) -> Result<RgbaImage, ExportError> {
        let (width, height) = self.export_size()?;
        let mut surface = RasterSurface::new(width, height, self.fonts.clone());
        surface.clear();
        surface.scale(self.export_scale as f32);
        for command in commands {
            command.display(&mut surface, params);
        }
        log::info!("Exported {} commands at {width}x{height}", commands.len());
        Ok(surface.into_image())
    }

    pub fn export_png(
        &self,
        commands: &[Command],
        params: &DisplayParams,
    ) -> Result<Vec<u8>, ExportError> {
        encode_png(&self.export_image(commands, params)?)
    }
}

pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, ExportError> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}
