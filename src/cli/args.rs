use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{DEFAULT_DPI, DEFAULT_ENGINE_PATH, ENGINE_PATH_ENV};
use crate::model::{QualityPreset, MAX_DPI, MIN_DPI};

#[derive(Parser, Debug)]
#[command(name = "pdf-compressor")]
#[command(
    author,
    version,
    about = "Shrink a PDF by re-saving it or by running it through Ghostscript"
)]
pub struct Args {
    /// PDF file to compress
    pub input: Option<PathBuf>,

    /// Compression method
    #[arg(short, long, value_enum, default_value = "resave")]
    pub mode: Mode,

    /// Ghostscript quality preset (preset mode)
    #[arg(short, long, value_enum, default_value = "ebook")]
    pub preset: QualityPreset,

    /// Image resolution in DPI (dpi mode)
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_DPI,
        value_parser = clap::value_parser!(u16).range(MIN_DPI as i64..=MAX_DPI as i64)
    )]
    pub dpi: u16,

    /// Path to the Ghostscript executable
    #[arg(long, env = ENGINE_PATH_ENV, default_value = DEFAULT_ENGINE_PATH)]
    pub engine_path: PathBuf,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Compression method
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Default)]
pub enum Mode {
    /// Re-save with lopdf: drop unused objects and deflate streams
    #[default]
    Resave,
    /// Ghostscript with a quality preset
    Preset,
    /// Ghostscript with image downsampling to a fixed DPI
    Dpi,
}
