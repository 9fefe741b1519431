use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompressError {
    #[error("No PDF file selected")]
    NoFileSelected,

    #[error("Ghostscript not found at {}", .path.display())]
    EngineNotFound { path: PathBuf },

    #[error("Compression failed: {0}")]
    CompressionFailed(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("DPI {0} is out of range (expected 50-300)")]
    DpiOutOfRange(u16),
}
