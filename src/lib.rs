pub mod cli;
pub mod compress;
pub mod config;
pub mod error;
pub mod model;
pub mod session;

pub use compress::{format_bytes, Compressor, Ghostscript, SilentStatus, SizeStats, StatusReporter};
pub use config::Settings;
pub use error::{CompressError, ConfigError};
pub use model::{CompressionMode, CompressionReport, CompressionRequest, Dpi, QualityPreset};
pub use session::Session;

use std::path::{Path, PathBuf};

/// High-level API for compressing a single PDF.
///
/// This is the recommended entry point for library consumers. The output is
/// written next to the input under a name derived from the mode (for example
/// `report.pdf` becomes `report_compressed_150dpi.pdf`).
///
/// # Arguments
///
/// * `input` - PDF file to compress; it is never modified
/// * `mode` - Compression method and its parameter
/// * `engine_path` - Ghostscript executable, only consulted by the external modes
///
/// # Example
///
/// ```no_run
/// use pdf_compressor::{compress_file, CompressionMode, QualityPreset};
///
/// let report = compress_file(
///     "scan.pdf",
///     CompressionMode::PresetExternal(QualityPreset::Ebook),
///     "/usr/bin/gs",
/// )
/// .unwrap();
///
/// println!("Saved to {}", report.output_path.display());
/// ```
pub fn compress_file(
    input: impl AsRef<Path>,
    mode: CompressionMode,
    engine_path: impl Into<PathBuf>,
) -> Result<CompressionReport, CompressError> {
    let compressor = Compressor::with_engine(Ghostscript::new(engine_path));
    let request = CompressionRequest::new(input.as_ref(), mode);
    compressor.compress(&request, &mut SilentStatus)
}
