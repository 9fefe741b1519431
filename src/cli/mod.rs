pub mod args;
pub mod console;

pub use args::{Args, Mode};
pub use console::ConsoleStatus;
