use thiserror::Error;

/// Errors that can occur while loading the sketchpad configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Errors that can occur while exporting the drawing as an image
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Export size {width}x{height} is not drawable")]
    InvalidSize { width: u32, height: u32 },

    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to write export: {0}")]
    Write(#[from] std::io::Error),

    #[error("Browser download failed: {0}")]
    Download(String),
}
