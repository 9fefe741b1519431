//! The compression invoker and the engines it drives

pub mod ghostscript;
pub mod invoker;
pub mod resave;
pub mod stats;
pub mod status;

pub use ghostscript::{build_args, Ghostscript};
pub use invoker::{Compressor, WORKING_STATUS};
pub use resave::resave;
pub use stats::{format_bytes, format_reduction, reduction_percent, SizeStats};
pub use status::{SilentStatus, StatusReporter};
