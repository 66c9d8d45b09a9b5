use ab_glyph::{Font as _, FontArc, GlyphId, PxScale, ScaleFont as _, point};
use egui::{Color32, Pos2, Stroke};
use image::{Rgba, RgbaImage};

use super::{LineCap, PathStyle, StateStack, Surface};

/// Fonts used to rasterize sticker glyphs, tried in order for every character.
#[derive(Clone, Default)]
pub struct StickerFonts {
    fonts: Vec<FontArc>,
}

impl std::fmt::Debug for StickerFonts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StickerFonts")
            .field("fonts", &self.fonts.len())
            .finish()
    }
}

impl StickerFonts {
    /// Loads egui's bundled proportional fonts (text first, then emoji).
    pub fn from_egui_defaults() -> Self {
        let definitions = egui::FontDefinitions::default();
        let names = definitions
            .families
            .get(&egui::FontFamily::Proportional)
            .cloned()
            .unwrap_or_default();

        let mut fonts = Vec::with_capacity(names.len());
        for name in names {
            let Some(data) = definitions.font_data.get(&name) else {
                continue;
            };
            match FontArc::try_from_vec(data.font.to_vec()) {
                Ok(font) => fonts.push(font),
                Err(err) => log::warn!("Skipping font {name} for export: {err}"),
            }
        }

        if fonts.is_empty() {
            log::warn!("No fonts available, stickers will be missing from exports");
        }
        Self { fonts }
    }

    fn font_for(&self, ch: char) -> Option<&FontArc> {
        self.fonts.iter().find(|font| font.glyph_id(ch) != GlyphId(0))
    }
}

/// Scale at which one em is `size` pixels tall.
fn em_scale(font: &FontArc, size: f32) -> PxScale {
    let units_per_em = font.units_per_em().unwrap_or(1000.0);
    PxScale::from(size * font.height_unscaled() / units_per_em)
}

fn segment_distance(p: Pos2, a: Pos2, b: Pos2, cap: LineCap) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_sq();
    let t = if len_sq == 0.0 {
        0.0
    } else {
        (p - a).dot(ab) / len_sq
    };

    let t = match cap {
        LineCap::Round => t.clamp(0.0, 1.0),
        LineCap::Butt if (0.0..=1.0).contains(&t) => t,
        LineCap::Butt => return f32::INFINITY,
    };
    (p - (a + ab * t)).length()
}

/// Offscreen software surface used for image export.
pub struct RasterSurface {
    image: RgbaImage,
    fonts: StickerFonts,
    state: StateStack,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32, fonts: StickerFonts) -> Self {
        Self {
            image: RgbaImage::new(width, height),
            fonts,
            state: StateStack::default(),
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Source-over blend of `color` at `coverage` onto one pixel.
    fn blend(&mut self, x: i64, y: i64, color: Color32, coverage: f32) {
        if x < 0 || y < 0 || x >= self.image.width() as i64 || y >= self.image.height() as i64 {
            return;
        }

        let [r, g, b, a] = color.to_srgba_unmultiplied();
        let src_a = (a as f32 / 255.0) * coverage.clamp(0.0, 1.0);
        if src_a <= 0.0 {
            return;
        }

        let dst = self.image.get_pixel_mut(x as u32, y as u32);
        let dst_a = dst[3] as f32 / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);

        let mix = |src: u8, dst: u8| -> u8 {
            let value = (src as f32 * src_a + dst as f32 * dst_a * (1.0 - src_a)) / out_a;
            value.round().clamp(0.0, 255.0) as u8
        };
        *dst = Rgba([
            mix(r, dst[0]),
            mix(g, dst[1]),
            mix(b, dst[2]),
            (out_a * 255.0).round() as u8,
        ]);
    }

    /// Pixel range covering `[min, max]`, clipped to the image.
    fn pixel_span(&self, min: f32, max: f32, limit: u32) -> std::ops::Range<i64> {
        let start = (min.floor() as i64).max(0);
        let end = (max.ceil() as i64 + 1).min(limit as i64);
        start..end.max(start)
    }
}

impl Surface for RasterSurface {
    fn state_mut(&mut self) -> &mut StateStack {
        &mut self.state
    }

    fn clear(&mut self) {
        for pixel in self.image.pixels_mut() {
            *pixel = Rgba([0, 0, 0, 0]);
        }
    }

    fn stroke_path(&mut self, points: &[Pos2], style: PathStyle) {
        let mut points: Vec<Pos2> = points.iter().map(|p| self.state.transform(*p)).collect();
        match points.len() {
            0 => return,
            // A lone point only shows up as a round cap.
            1 if style.cap == LineCap::Round => points.push(points[0]),
            1 => return,
            _ => {}
        }
        let half = self.state.length(style.width) / 2.0;
        let color = self.state.tint(style.color);
        let reach = half + 1.0;

        let (mut min, mut max) = (points[0], points[0]);
        for p in &points {
            min = min.min(*p);
            max = max.max(*p);
        }
        let xs = self.pixel_span(min.x - reach, max.x + reach, self.image.width());
        let ys = self.pixel_span(min.y - reach, max.y + reach, self.image.height());
        if xs.is_empty() || ys.is_empty() {
            return;
        }

        // Coverage of the whole path, so overlapping segments don't blend twice.
        let stride = (xs.end - xs.start) as usize;
        let mut mask = vec![0.0f32; stride * (ys.end - ys.start) as usize];

        for segment in points.windows(2) {
            let (a, b) = (segment[0], segment[1]);
            let seg_xs = self.pixel_span(a.x.min(b.x) - reach, a.x.max(b.x) + reach, self.image.width());
            let seg_ys = self.pixel_span(a.y.min(b.y) - reach, a.y.max(b.y) + reach, self.image.height());
            for y in seg_ys {
                for x in seg_xs.clone() {
                    let center = Pos2::new(x as f32 + 0.5, y as f32 + 0.5);
                    let coverage = (half + 0.5 - segment_distance(center, a, b, style.cap)).clamp(0.0, 1.0);
                    let cell = &mut mask[(y - ys.start) as usize * stride + (x - xs.start) as usize];
                    *cell = cell.max(coverage);
                }
            }
        }

        for (i, coverage) in mask.into_iter().enumerate() {
            if coverage > 0.0 {
                let x = xs.start + (i % stride) as i64;
                let y = ys.start + (i / stride) as i64;
                self.blend(x, y, color, coverage);
            }
        }
    }

    fn circle(&mut self, center: Pos2, radius: f32, fill: Color32, stroke: Stroke) {
        let center = self.state.transform(center);
        let radius = self.state.length(radius);
        let half_width = self.state.length(stroke.width) / 2.0;
        let fill = self.state.tint(fill);
        let outline = self.state.tint(stroke.color);

        let reach = radius + half_width + 1.0;
        let xs = self.pixel_span(center.x - reach, center.x + reach, self.image.width());
        let ys = self.pixel_span(center.y - reach, center.y + reach, self.image.height());

        for y in ys {
            for x in xs.clone() {
                let d = (Pos2::new(x as f32 + 0.5, y as f32 + 0.5) - center).length();
                if fill.a() > 0 {
                    self.blend(x, y, fill, radius + 0.5 - d);
                }
                if half_width > 0.0 && outline.a() > 0 {
                    self.blend(x, y, outline, half_width + 0.5 - (d - radius).abs());
                }
            }
        }
    }

    fn text(&mut self, anchor: Pos2, text: &str, size: f32, color: Color32) {
        let anchor = self.state.transform(anchor);
        let size = self.state.length(size);
        let color = self.state.tint(color);

        let mut glyphs = Vec::new();
        let mut pen = 0.0f32;
        let (mut ascent, mut descent) = (0.0f32, 0.0f32);
        for ch in text.chars() {
            // Characters no font covers (variation selectors, joiners) are skipped.
            let Some(font) = self.fonts.font_for(ch) else {
                continue;
            };
            let scale = em_scale(font, size);
            let scaled = font.as_scaled(scale);
            let id = font.glyph_id(ch);
            glyphs.push((font.clone(), id, scale, pen));
            pen += scaled.h_advance(id);
            ascent = ascent.max(scaled.ascent());
            descent = descent.min(scaled.descent());
        }

        let left = anchor.x - pen / 2.0;
        let baseline = anchor.y + (ascent + descent) / 2.0;
        for (font, id, scale, offset) in glyphs {
            let glyph = id.with_scale_and_position(scale, point(left + offset, baseline));
            let Some(outlined) = font.outline_glyph(glyph) else {
                continue;
            };
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                self.blend(
                    bounds.min.x as i64 + gx as i64,
                    bounds.min.y as i64 + gy as i64,
                    color,
                    coverage,
                );
            });
        }
    }
}
