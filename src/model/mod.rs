pub mod preset;
pub mod report;
pub mod request;

pub use preset::{Dpi, QualityPreset, MAX_DPI, MIN_DPI};
pub use report::CompressionReport;
pub use request::{derive_output_path, CompressionMode, CompressionRequest};
