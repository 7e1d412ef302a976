//! Core runtime logic for bullseye.
//!
//! This module contains the non-UI "engine" pieces used by the application:
//! - [fm]: directory listing and bounded file reads (see [browse_dir], [FileEntry]).
//! - [formatter]: the snapshot builder (filter + sort) and display formatting helpers.
//! - [preview]: classification of the selected entry into [PreviewContent].
//! - [error]: the typed read and decode errors.
//! - [terminal]: terminal setup/teardown and the synchronous crossterm/ratatui event loop.

pub mod error;
pub mod fm;
pub mod formatter;
pub mod preview;
pub mod terminal;

pub use error::{LoadError, PreviewError};
pub use fm::{FileEntry, browse_dir, read_head};
pub use formatter::{
    Formatter, SortKey, format_attributes, format_file_time, format_size, sanitize_to_exact_width,
};
pub use preview::{PreviewContent, build_preview};
