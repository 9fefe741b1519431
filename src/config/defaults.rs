/// Environment variable that overrides the Ghostscript location
pub const ENGINE_PATH_ENV: &str = "GHOSTSCRIPT_PATH";

/// Default Ghostscript console executable (64-bit Windows installer layout)
#[cfg(windows)]
pub const DEFAULT_ENGINE_PATH: &str = r"C:\Program Files\gs\gs10.03.1\bin\gswin64c.exe";

/// Default Ghostscript executable
#[cfg(not(windows))]
pub const DEFAULT_ENGINE_PATH: &str = "/usr/bin/gs";

/// Default image resolution for DPI mode
pub const DEFAULT_DPI: u16 = 150;
