use std::path::PathBuf;

use crate::cli::{Args, Mode};
use crate::error::ConfigError;
use crate::model::{CompressionMode, Dpi, QualityPreset};

use super::defaults::*;

/// Runtime settings for a compression run
#[derive(Debug, Clone)]
pub struct Settings {
    /// Absolute path of the Ghostscript executable
    pub engine_path: PathBuf,

    pub mode: Mode,
    pub preset: QualityPreset,
    pub dpi: Dpi,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            engine_path: PathBuf::from(DEFAULT_ENGINE_PATH),
            mode: Mode::default(),
            preset: QualityPreset::default(),
            dpi: Dpi::default(),
        }
    }
}

impl Settings {
    /// Create settings from CLI arguments
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        Ok(Self {
            engine_path: args.engine_path.clone(),
            mode: args.mode,
            preset: args.preset,
            dpi: Dpi::new(args.dpi)?,
        })
    }

    /// The selected mode with its parameter attached
    pub fn compression_mode(&self) -> CompressionMode {
        match self.mode {
            Mode::Resave => CompressionMode::LibraryResave,
            Mode::Preset => CompressionMode::PresetExternal(self.preset),
            Mode::Dpi => CompressionMode::DpiExternal(self.dpi),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.compression_mode(), CompressionMode::LibraryResave);
        assert_eq!(settings.dpi.value(), DEFAULT_DPI);
        assert_eq!(settings.engine_path, PathBuf::from(DEFAULT_ENGINE_PATH));
    }

    #[test]
    fn test_from_args_dpi_mode() {
        let args = Args::try_parse_from([
            "pdf-compressor",
            "--mode",
            "dpi",
            "--dpi",
            "96",
            "--engine-path",
            "/opt/gs/bin/gs",
            "doc.pdf",
        ])
        .unwrap();
        let settings = Settings::from_args(&args).unwrap();

        assert_eq!(
            settings.compression_mode(),
            CompressionMode::DpiExternal(Dpi::new(96).unwrap())
        );
        assert_eq!(settings.engine_path, PathBuf::from("/opt/gs/bin/gs"));
    }

    #[test]
    fn test_from_args_preset_mode() {
        let args = Args::try_parse_from([
            "pdf-compressor",
            "--mode",
            "preset",
            "--preset",
            "screen",
            "doc.pdf",
        ])
        .unwrap();
        let settings = Settings::from_args(&args).unwrap();

        assert_eq!(
            settings.compression_mode(),
            CompressionMode::PresetExternal(QualityPreset::Screen)
        );
    }
}
