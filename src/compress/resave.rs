//! PDF re-save helper
//!
//! Uses lopdf to drop unreferenced objects and deflate every stream, then
//! writes the cleaned document to a new file.

use std::path::Path;

use lopdf::Document;

use crate::error::CompressError;

/// Re-save `input` to `output` with garbage collection and stream deflation.
///
/// The input file is never modified. On failure a partially written output
/// file may be left behind.
pub fn resave(input: &Path, output: &Path) -> Result<(), CompressError> {
    let mut doc = Document::load(input).map_err(|e| {
        CompressError::CompressionFailed(format!(
            "Failed to open PDF {}: {}",
            input.display(),
            e
        ))
    })?;

    let pruned = doc.prune_objects();
    let empty_streams = doc.delete_zero_length_streams();
    log::debug!(
        "Removed {} unreferenced objects and {} empty streams",
        pruned.len(),
        empty_streams.len()
    );

    doc.renumber_objects();
    doc.compress();

    doc.save(output).map_err(|e| {
        CompressError::CompressionFailed(format!(
            "Failed to save compressed PDF {}: {}",
            output.display(),
            e
        ))
    })?;

    Ok(())
}
