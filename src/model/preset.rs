use std::fmt;

use clap::ValueEnum;

use crate::config::DEFAULT_DPI;
use crate::error::ConfigError;

/// Lowest resolution accepted for DPI-based compression
pub const MIN_DPI: u16 = 50;

/// Highest resolution accepted for DPI-based compression
pub const MAX_DPI: u16 = 300;

/// Ghostscript `-dPDFSETTINGS` quality preset
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum QualityPreset {
    /// Low resolution, smallest output (72 dpi images)
    Screen,
    /// Medium resolution for on-screen reading (150 dpi images)
    #[default]
    Ebook,
    /// High quality for desktop printing (300 dpi images)
    Printer,
    /// Prepress quality, preserves color (300 dpi images)
    Prepress,
}

impl QualityPreset {
    /// Name as Ghostscript expects it after the leading slash
    pub fn name(&self) -> &'static str {
        match self {
            QualityPreset::Screen => "screen",
            QualityPreset::Ebook => "ebook",
            QualityPreset::Printer => "printer",
            QualityPreset::Prepress => "prepress",
        }
    }

    pub fn all() -> [QualityPreset; 4] {
        [
            QualityPreset::Screen,
            QualityPreset::Ebook,
            QualityPreset::Printer,
            QualityPreset::Prepress,
        ]
    }
}

impl fmt::Display for QualityPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Image resolution for DPI-based compression, always within `MIN_DPI..=MAX_DPI`
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Dpi(u16);

impl Dpi {
    pub fn new(value: u16) -> Result<Self, ConfigError> {
        if (MIN_DPI..=MAX_DPI).contains(&value) {
            Ok(Dpi(value))
        } else {
            Err(ConfigError::DpiOutOfRange(value))
        }
    }

    pub fn value(&self) -> u16 {
        self.0
    }
}

impl Default for Dpi {
    fn default() -> Self {
        Dpi(DEFAULT_DPI)
    }
}

impl TryFrom<u16> for Dpi {
    type Error = ConfigError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Dpi::new(value)
    }
}

impl fmt::Display for Dpi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
