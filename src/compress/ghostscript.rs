//! Ghostscript invocation
//!
//! Builds the `pdfwrite` argument list for the preset and DPI modes and runs
//! the configured executable as a blocking child process.

use std::cell::OnceCell;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::CompressError;
use crate::model::CompressionMode;

/// Build the Ghostscript arguments (without the executable itself).
///
/// Returns `None` for modes that don't use Ghostscript.
///
/// The output path is passed through as-is, so a `%d` in it is read by
/// Ghostscript as a page-number template and output lands in a different file.
pub fn build_args(mode: &CompressionMode, input: &Path, output: &Path) -> Option<Vec<OsString>> {
    let mut args: Vec<OsString> = vec![
        "-sDEVICE=pdfwrite".into(),
        "-dCompatibilityLevel=1.4".into(),
    ];

    match mode {
        CompressionMode::LibraryResave => return None,
        CompressionMode::PresetExternal(preset) => {
            args.push(format!("-dPDFSETTINGS=/{}", preset.name()).into());
        }
        CompressionMode::DpiExternal(dpi) => {
            args.push("-dDownsampleColorImages=true".into());
            args.push("-dDownsampleGrayImages=true".into());
            args.push("-dDownsampleMonoImages=true".into());
            args.push(format!("-dColorImageResolution={}", dpi).into());
            args.push(format!("-dGrayImageResolution={}", dpi).into());
            args.push(format!("-dMonoImageResolution={}", dpi).into());
        }
    }

    args.push("-dNOPAUSE".into());
    args.push("-dQUIET".into());
    args.push("-dBATCH".into());

    let mut output_flag = OsString::from("-sOutputFile=");
    output_flag.push(output);
    args.push(output_flag);
    args.push(input.into());

    Some(args)
}

/// Handle on the configured Ghostscript executable.
///
/// The existence check runs at most once per configured path; the answer is
/// kept until [`Ghostscript::set_path`] points somewhere else.
#[derive(Debug)]
pub struct Ghostscript {
    path: PathBuf,
    available: OnceCell<bool>,
}

impl Ghostscript {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            available: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Point at a different executable, forgetting the cached check if the path changed
    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        if path != self.path {
            self.path = path;
            self.available = OnceCell::new();
        }
    }

    pub fn is_available(&self) -> bool {
        *self.available.get_or_init(|| {
            let found = self.path.exists();
            log::debug!(
                "Ghostscript {} at {}",
                if found { "found" } else { "not found" },
                self.path.display()
            );
            found
        })
    }

    pub fn ensure_available(&self) -> Result<(), CompressError> {
        if self.is_available() {
            Ok(())
        } else {
            Err(CompressError::EngineNotFound {
                path: self.path.clone(),
            })
        }
    }

    /// Run Ghostscript with `args` and wait for it to exit
    pub fn run(&self, args: &[OsString]) -> Result<(), CompressError> {
        log::debug!(
            "Running {} {}",
            self.path.display(),
            args.iter()
                .map(|a| a.to_string_lossy())
                .collect::<Vec<_>>()
                .join(" ")
        );

        let output = Command::new(&self.path)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => CompressError::EngineNotFound {
                    path: self.path.clone(),
                },
                _ => CompressError::Unexpected(format!(
                    "Failed to launch {}: {}",
                    self.path.display(),
                    e
                )),
            })?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim();
        let message = if stderr.is_empty() {
            format!("Ghostscript exited with {}", output.status)
        } else {
            format!("Ghostscript exited with {}: {}", output.status, stderr)
        };
        Err(CompressError::CompressionFailed(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Dpi, QualityPreset};
    use std::fs;

    fn strings(args: Vec<OsString>) -> Vec<String> {
        args.into_iter()
            .map(|a| a.into_string().unwrap())
            .collect()
    }

    #[test]
    fn test_preset_args() {
        let mode = CompressionMode::PresetExternal(QualityPreset::Ebook);
        let args = build_args(&mode, Path::new("/in/a.pdf"), Path::new("/in/a_compressed_gs.pdf"));
        assert_eq!(
            strings(args.unwrap()),
            vec![
                "-sDEVICE=pdfwrite",
                "-dCompatibilityLevel=1.4",
                "-dPDFSETTINGS=/ebook",
                "-dNOPAUSE",
                "-dQUIET",
                "-dBATCH",
                "-sOutputFile=/in/a_compressed_gs.pdf",
                "/in/a.pdf",
            ]
        );
    }

    #[test]
    fn test_dpi_args() {
        let mode = CompressionMode::DpiExternal(Dpi::new(150).unwrap());
        let args = build_args(&mode, Path::new("/in/a.pdf"), Path::new("/in/out.pdf"));
        assert_eq!(
            strings(args.unwrap()),
            vec![
                "-sDEVICE=pdfwrite",
                "-dCompatibilityLevel=1.4",
                "-dDownsampleColorImages=true",
                "-dDownsampleGrayImages=true",
                "-dDownsampleMonoImages=true",
                "-dColorImageResolution=150",
                "-dGrayImageResolution=150",
                "-dMonoImageResolution=150",
                "-dNOPAUSE",
                "-dQUIET",
                "-dBATCH",
                "-sOutputFile=/in/out.pdf",
                "/in/a.pdf",
            ]
        );
    }

    #[test]
    fn test_no_args_for_library_resave() {
        let args = build_args(
            &CompressionMode::LibraryResave,
            Path::new("a.pdf"),
            Path::new("b.pdf"),
        );
        assert!(args.is_none());
    }

    #[test]
    fn test_missing_engine() {
        let gs = Ghostscript::new("/nonexistent/gs/bin/gs");
        assert!(!gs.is_available());
        assert!(matches!(
            gs.ensure_available(),
            Err(CompressError::EngineNotFound { .. })
        ));
    }

    #[test]
    fn test_availability_is_cached_until_path_changes() {
        let dir = tempfile::tempdir().unwrap();
        let exe = dir.path().join("gs");
        fs::write(&exe, b"").unwrap();

        let mut gs = Ghostscript::new(&exe);
        assert!(gs.is_available());

        // Still cached after the file disappears
        fs::remove_file(&exe).unwrap();
        assert!(gs.is_available());

        // Same path keeps the cached answer
        gs.set_path(&exe);
        assert!(gs.is_available());

        gs.set_path(dir.path().join("other-gs"));
        assert!(!gs.is_available());
    }

    #[test]
    fn test_run_missing_executable() {
        let gs = Ghostscript::new("/nonexistent/gs/bin/gs");
        let result = gs.run(&[OsString::from("-dBATCH")]);
        assert!(matches!(result, Err(CompressError::EngineNotFound { .. })));
    }
}
