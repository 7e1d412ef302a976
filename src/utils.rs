//! Miscellaneous utility functions for bullseye.
//!
//! - [helpers]: color parsing, editor launch, home path handling and start directory resolution
//! - [cli]: command-line flags
//! - [logging]: the file-backed tracing subscriber

pub mod cli;
pub mod helpers;
pub mod logging;

pub use helpers::{
    expand_home_path, get_home, open_in_editor, parse_color, resolve_initial_dir,
    shorten_home_path,
};
pub use logging::init_logging;
