//! Error types for the bullseye core.
//!
//! [LoadError] covers every read the core performs against the filesystem (listing a
//! directory, reading a file head). [PreviewError] wraps it together with image decode
//! failures so the preview pipeline can decide which ones to surface and which ones to
//! recover from.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A failed filesystem read, tagged with the path that caused it.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        LoadError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// The io error kind, used to pick a short message for the panes.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            LoadError::Io { source, .. } => source.kind(),
        }
    }

    /// Short human readable message without the full path.
    pub fn short_message(&self) -> String {
        match self.kind() {
            io::ErrorKind::PermissionDenied => "Permission denied".to_string(),
            io::ErrorKind::NotFound => "No such file or directory".to_string(),
            _ => match self {
                LoadError::Io { source, .. } => source.to_string(),
            },
        }
    }
}

/// Errors produced while building a preview.
#[derive(Debug, Error)]
pub enum PreviewError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("image decode failed: {0}")]
    Decode(#[from] image::ImageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_error_messages() {
        let err = LoadError::io(
            Path::new("/nope/dir"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
        assert_eq!(err.short_message(), "Permission denied");
        assert!(err.to_string().starts_with("/nope/dir"));
    }
}
