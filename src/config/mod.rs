pub mod defaults;
pub mod settings;

pub use defaults::{DEFAULT_DPI, DEFAULT_ENGINE_PATH, ENGINE_PATH_ENV};
pub use settings::Settings;
