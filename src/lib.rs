#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod config;
pub mod error;
pub mod export;
pub mod input;
pub mod panels;
pub mod preview;
pub mod renderer;
pub mod sketchpad;
pub mod surface;
pub mod tools;

pub use app::SketchpadApp;
pub use command::{Command, DisplayParams, History, MarkerStroke, StickerPlacement};
pub use config::SketchpadConfig;
pub use error::{ConfigError, ExportError};
pub use input::{InputEvent, InputRouter};
pub use preview::Preview;
pub use renderer::Renderer;
pub use sketchpad::Sketchpad;
pub use surface::Surface;
pub use tools::{StickerPalette, ToolController, ToolKind};
