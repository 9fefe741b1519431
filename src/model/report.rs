use std::path::PathBuf;

use crate::compress::SizeStats;

/// Outcome of a successful compression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressionReport {
    /// Where the compressed copy was written
    pub output_path: PathBuf,
    /// Sizes of input and output, when both could be read back
    pub stats: Option<SizeStats>,
}
