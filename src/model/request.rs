use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::preset::{Dpi, QualityPreset};

/// How a PDF gets compressed, together with the knob the user picked for it
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CompressionMode {
    /// Re-save through lopdf with garbage collection and stream deflation
    LibraryResave,
    /// Ghostscript with a `-dPDFSETTINGS` preset
    PresetExternal(QualityPreset),
    /// Ghostscript with image downsampling to a fixed resolution
    DpiExternal(Dpi),
}

impl CompressionMode {
    /// True when the mode shells out to Ghostscript
    pub fn uses_engine(&self) -> bool {
        !matches!(self, CompressionMode::LibraryResave)
    }

    /// Text inserted between the input's stem and extension
    pub fn output_suffix(&self) -> String {
        match self {
            CompressionMode::LibraryResave => "_compressed".to_string(),
            CompressionMode::PresetExternal(_) => "_compressed_gs".to_string(),
            CompressionMode::DpiExternal(dpi) => format!("_compressed_{}dpi", dpi),
        }
    }
}

/// Derive the output path for `input`: `{stem}{suffix}{.ext}` next to the input.
///
/// Only the last `.` of the file name separates the extension, and a leading
/// dot (e.g. `.pdf` as a whole file name) does not count as one.
pub fn derive_output_path(input: &Path, mode: &CompressionMode) -> PathBuf {
    let mut name = OsString::from(input.file_stem().unwrap_or_default());
    name.push(mode.output_suffix());
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }
    input.with_file_name(name)
}

/// A single compression action: which file, and how
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressionRequest {
    pub input: PathBuf,
    pub mode: CompressionMode,
}

impl CompressionRequest {
    pub fn new(input: impl Into<PathBuf>, mode: CompressionMode) -> Self {
        Self {
            input: input.into(),
            mode,
        }
    }

    pub fn output_path(&self) -> PathBuf {
        derive_output_path(&self.input, &self.mode)
    }
}
