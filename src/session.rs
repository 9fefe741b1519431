use std::path::{Path, PathBuf};

use crate::compress::{Compressor, StatusReporter};
use crate::error::CompressError;
use crate::model::{CompressionMode, CompressionReport, CompressionRequest};

/// Holds the file picked by the user between "select" and "compress"
#[derive(Debug, Default, Clone)]
pub struct Session {
    selected: Option<PathBuf>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember `path` as the file to compress next. An empty path counts as a cancelled pick.
    pub fn select(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return;
        }
        log::info!("Selected file: {}", path.display());
        self.selected = Some(path);
    }

    pub fn selected(&self) -> Option<&Path> {
        self.selected.as_deref()
    }

    /// Build a request for the selected file
    pub fn request(&self, mode: CompressionMode) -> Result<CompressionRequest, CompressError> {
        self.selected
            .as_ref()
            .map(|path| CompressionRequest::new(path.clone(), mode))
            .ok_or(CompressError::NoFileSelected)
    }

    pub fn compress(
        &self,
        compressor: &Compressor,
        mode: CompressionMode,
        status: &mut dyn StatusReporter,
    ) -> Result<CompressionReport, CompressError> {
        let request = match self.request(mode) {
            Ok(request) => request,
            Err(e) => {
                status.clear();
                return Err(e);
            }
        };
        compressor.compress(&request, status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_without_selection() {
        let session = Session::new();
        assert!(session.selected().is_none());
        assert!(matches!(
            session.request(CompressionMode::LibraryResave),
            Err(CompressError::NoFileSelected)
        ));
    }

    #[test]
    fn test_cancelled_pick_keeps_previous_selection() {
        let mut session = Session::new();
        session.select("/tmp/first.pdf");
        session.select("");
        assert_eq!(session.selected(), Some(Path::new("/tmp/first.pdf")));
    }

    #[test]
    fn test_request_uses_latest_selection() {
        let mut session = Session::new();
        session.select("/tmp/first.pdf");
        session.select("/tmp/second.pdf");

        let request = session.request(CompressionMode::LibraryResave).unwrap();
        assert_eq!(request.input, PathBuf::from("/tmp/second.pdf"));
        assert_eq!(
            request.output_path(),
            PathBuf::from("/tmp/second_compressed.pdf")
        );
    }
}
