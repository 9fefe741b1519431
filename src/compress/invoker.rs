use std::path::Path;

use crate::config::Settings;
use crate::error::CompressError;
use crate::model::{CompressionReport, CompressionRequest};

use super::ghostscript::{build_args, Ghostscript};
use super::resave::resave;
use super::stats::SizeStats;
use super::status::StatusReporter;

/// Status text shown while the engine runs
pub const WORKING_STATUS: &str = "Compressing... please wait.";

/// Runs compression requests against lopdf or the configured Ghostscript
#[derive(Debug)]
pub struct Compressor {
    engine: Ghostscript,
}

impl Compressor {
    pub fn new(settings: &Settings) -> Self {
        Self::with_engine(Ghostscript::new(&settings.engine_path))
    }

    pub fn with_engine(engine: Ghostscript) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &Ghostscript {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Ghostscript {
        &mut self.engine
    }

    /// Compress `request.input` into its derived output path.
    ///
    /// Blocks until the library call or child process finishes. Whatever the
    /// outcome, `status` is cleared before returning.
    pub fn compress(
        &self,
        request: &CompressionRequest,
        status: &mut dyn StatusReporter,
    ) -> Result<CompressionReport, CompressError> {
        let result = self.run(request, status);
        status.clear();

        match &result {
            Ok(report) => log::info!("Wrote {}", report.output_path.display()),
            Err(e) => log::debug!("Compression failed: {}", e),
        }
        result
    }

    fn run(
        &self,
        request: &CompressionRequest,
        status: &mut dyn StatusReporter,
    ) -> Result<CompressionReport, CompressError> {
        if request.input.as_os_str().is_empty() {
            return Err(CompressError::NoFileSelected);
        }

        if request.mode.uses_engine() {
            self.engine.ensure_available()?;
        }

        if !request.input.is_file() {
            return Err(CompressError::CompressionFailed(format!(
                "Input file not found: {}",
                request.input.display()
            )));
        }

        let output_path = request.output_path();
        log::info!(
            "Compressing {} -> {} ({:?})",
            request.input.display(),
            output_path.display(),
            request.mode
        );

        status.show(WORKING_STATUS);
        self.execute(request, &output_path)?;

        Ok(CompressionReport {
            stats: SizeStats::measure(&request.input, &output_path),
            output_path,
        })
    }

    fn execute(&self, request: &CompressionRequest, output: &Path) -> Result<(), CompressError> {
        match build_args(&request.mode, &request.input, output) {
            Some(args) => self.engine.run(&args),
            None => resave(&request.input, output),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compress::SilentStatus;
    use crate::model::{CompressionMode, QualityPreset};
    use std::fs;

    #[test]
    fn test_repointing_engine_resets_availability() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("doc.pdf");
        fs::write(&input, b"%PDF-1.4").unwrap();

        let mut compressor = Compressor::with_engine(Ghostscript::new(dir.path().join("gs")));
        let request = CompressionRequest::new(
            &input,
            CompressionMode::PresetExternal(QualityPreset::Ebook),
        );
        assert!(matches!(
            compressor.compress(&request, &mut SilentStatus),
            Err(CompressError::EngineNotFound { .. })
        ));

        // Installed after the first (cached) check
        let installed = dir.path().join("gs-installed");
        fs::write(&installed, b"").unwrap();
        assert!(!compressor.engine().is_available());

        compressor.engine_mut().set_path(&installed);
        assert_eq!(compressor.engine().path(), installed.as_path());
        assert!(compressor.engine().is_available());
    }
}
