//! State of the parent pane in bullseye.
//!
//! Holds the snapshot of the directory above the current one and the index of the
//! current directory inside it, which is where the cursor lands after ascending.

use crate::core::{FileEntry, Formatter};
use std::path::{Path, PathBuf};

/// Holds the state of the parent directory pane
///
/// `path` is `None` at the filesystem root, where no parent pane is shown.
#[derive(Debug, Clone, Default)]
pub struct ParentState {
    path: Option<PathBuf>,
    entries: Vec<FileEntry>,
    selected_idx: Option<usize>,
    error: Option<String>,
}

impl ParentState {
    /// Builds the parent snapshot for `current_dir`.
    ///
    /// The parent snapshot ignores the search query, so it matches what ascending shows.
    /// A failed listing yields an empty snapshot carrying the error message.
    pub fn load(current_dir: &Path, formatter: &Formatter) -> Self {
        let Some(parent) = current_dir.parent() else {
            return Self::default();
        };

        match formatter.snapshot(parent, "") {
            Ok(entries) => {
                // Find the index of the folder we are currently inside to highlight it
                let selected_idx = current_dir
                    .file_name()
                    .and_then(|name| entries.iter().position(|e| e.name() == name));
                Self {
                    path: Some(parent.to_path_buf()),
                    entries,
                    selected_idx,
                    error: None,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "parent listing failed");
                Self {
                    path: Some(parent.to_path_buf()),
                    entries: Vec::new(),
                    selected_idx: None,
                    error: Some(e.short_message()),
                }
            }
        }
    }

    // Getters / accessors

    #[inline]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    #[inline]
    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    #[inline]
    pub fn selected_idx(&self) -> Option<usize> {
        self.selected_idx
    }

    #[inline]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
