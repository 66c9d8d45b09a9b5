use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::tools::{DEFAULT_STICKER_SIZE, StickerSet, THICK_MARKER, THIN_MARKER};

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV_VAR: &str = "STICKER_SKETCHPAD_CONFIG";

/// Startup settings. Every field is optional in the JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old configs
pub struct SketchpadConfig {
    /// On-screen canvas size in points
    pub canvas_size: [u32; 2],
    /// Exported images are this many times larger than the canvas
    pub export_scale: u32,
    pub export_file_name: String,
    /// Where native builds write exports
    pub export_dir: PathBuf,
    pub thin_marker: f32,
    pub thick_marker: f32,
    pub sticker_size: f32,
    pub sticker_size_range: [f32; 2],
    /// Canvas background as unmultiplied sRGBA
    pub background: [u8; 4],
    pub sticker_sets: Vec<StickerSet>,
}

impl Default for SketchpadConfig {
    fn default() -> Self {
        Self {
            canvas_size: [256, 256],
            export_scale: 4,
            export_file_name: "sticker_sketchpad_export.png".to_owned(),
            export_dir: PathBuf::from("."),
            thin_marker: THIN_MARKER,
            thick_marker: THICK_MARKER,
            sticker_size: DEFAULT_STICKER_SIZE,
            sticker_size_range: [16.0, 32.0],
            background: [255, 255, 255, 255],
            sticker_sets: StickerSet::presets(),
        }
    }
}

impl SketchpadConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the file named by the first argument or by [`CONFIG_ENV_VAR`],
    /// falling back to defaults when neither is given.
    pub fn from_env() -> Result<Self, ConfigError> {
        let path = std::env::args_os()
            .nth(1)
            .or_else(|| std::env::var_os(CONFIG_ENV_VAR));
        match path {
            Some(path) => {
                log::info!("Loading config from {}", Path::new(&path).display());
                Self::load(path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field, reason: String| Err(ConfigError::Invalid { field, reason });

        if self.canvas_size.contains(&0) {
            return invalid("canvas_size", format!("{:?} has a zero side", self.canvas_size));
        }
        if self.export_scale == 0 {
            return invalid("export_scale", "must be at least 1".to_owned());
        }
        for (field, value) in [("thin_marker", self.thin_marker), ("thick_marker", self.thick_marker)] {
            if !(value > 0.0) {
                return invalid(field, format!("{value} is not a positive thickness"));
            }
        }
        let [min, max] = self.sticker_size_range;
        if !(min > 0.0 && min <= max) {
            return invalid("sticker_size_range", format!("{min}..={max} is empty"));
        }
        if !(min..=max).contains(&self.sticker_size) {
            return invalid("sticker_size", format!("{} is outside {min}..={max}", self.sticker_size));
        }
        if self.sticker_sets.is_empty() {
            return invalid("sticker_sets", "at least one set is required".to_owned());
        }
        Ok(())
    }

    pub fn canvas_size_vec(&self) -> egui::Vec2 {
        egui::vec2(self.canvas_size[0] as f32, self.canvas_size[1] as f32)
    }

    pub fn background_color(&self) -> egui::Color32 {
        let [r, g, b, a] = self.background;
        egui::Color32::from_rgba_unmultiplied(r, g, b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SketchpadConfig::default();
        config.validate().unwrap();
        assert_eq!(config.canvas_size, [256, 256]);
        assert_eq!(config.export_scale, 4);
        assert_eq!(config.sticker_sets.len(), 3);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SketchpadConfig::from_json(r#"{ "export_scale": 2, "thick_marker": 8.0 }"#).unwrap();
        assert_eq!(config.export_scale, 2);
        assert_eq!(config.thick_marker, 8.0);
        assert_eq!(config.thin_marker, THIN_MARKER);
        assert_eq!(config.export_file_name, "sticker_sketchpad_export.png");
    }

    #[test]
    fn test_custom_sticker_sets_parse() {
        let json = r#"{ "sticker_sets": [ { "name": "food", "label": "Food Set", "glyphs": ["🍕", "🍩"] } ] }"#;
        let config = SketchpadConfig::from_json(json).unwrap();
        assert_eq!(config.sticker_sets[0].glyphs, vec!["🍕", "🍩"]);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        for json in [
            r#"{ "export_scale": 0 }"#,
            r#"{ "canvas_size": [0, 256] }"#,
            r#"{ "thin_marker": -1.0 }"#,
            r#"{ "sticker_size": 40.0 }"#,
            r#"{ "sticker_size_range": [32.0, 16.0] }"#,
            r#"{ "sticker_sets": [] }"#,
        ] {
            let err = SketchpadConfig::from_json(json).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid { .. }), "{json}: {err}");
        }
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let err = SketchpadConfig::from_json("{ export_scale: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
