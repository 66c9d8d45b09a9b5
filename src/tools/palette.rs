use serde::{Deserialize, Serialize};

/// A named preset of sticker glyphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StickerSet {
    pub name: String,
    pub label: String,
    pub glyphs: Vec<String>,
}

impl StickerSet {
    pub fn new(name: &str, label: &str, glyphs: &[&str]) -> Self {
        Self {
            name: name.to_owned(),
            label: label.to_owned(),
            glyphs: glyphs.iter().map(|g| (*g).to_owned()).collect(),
        }
    }

    /// The built-in presets, in menu order.
    pub fn presets() -> Vec<StickerSet> {
        vec![
            StickerSet::new("friendly", "Friendly Set", &["😀", "⭐", "🌸", "😎", "🎵"]),
            StickerSet::new("animals", "Animal Set", &["🐱", "🐶", "🐸", "🐢", "🐙"]),
            StickerSet::new("space", "Space Set", &["🚀", "🪐", "⭐", "🌙", "👽"]),
        ]
    }
}

/// The stickers currently offered as buttons.
///
/// Starts as a copy of the first set. Custom stickers are appended to the
/// current copy and are lost when another set is chosen.
#[derive(Debug, Clone, PartialEq)]
pub struct StickerPalette {
    sets: Vec<StickerSet>,
    active_set: usize,
    glyphs: Vec<String>,
}

impl Default for StickerPalette {
    fn default() -> Self {
        Self::new(StickerSet::presets())
    }
}

impl StickerPalette {
    pub fn new(sets: Vec<StickerSet>) -> Self {
        let glyphs = sets.first().map(|set| set.glyphs.clone()).unwrap_or_default();
        Self {
            sets,
            active_set: 0,
            glyphs,
        }
    }

    pub fn sets(&self) -> &[StickerSet] {
        &self.sets
    }

    pub fn active_set(&self) -> Option<&StickerSet> {
        self.sets.get(self.active_set)
    }

    pub fn glyphs(&self) -> &[String] {
        &self.glyphs
    }

    /// Swaps the palette for a fresh copy of the named set. Unknown names are ignored.
    pub fn choose_set(&mut self, name: &str) -> bool {
        let Some(index) = self.sets.iter().position(|set| set.name == name) else {
            log::warn!("Unknown sticker set {name:?}");
            return false;
        };
        log::info!("Sticker set selected: {name}");
        self.active_set = index;
        self.glyphs = self.sets[index].glyphs.clone();
        true
    }

    /// Appends a custom sticker. Blank text is ignored.
    pub fn add_custom(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            log::warn!("Ignoring blank custom sticker");
            return false;
        }
        log::info!("Custom sticker added: {text}");
        self.glyphs.push(text.to_owned());
        true
    }
}
