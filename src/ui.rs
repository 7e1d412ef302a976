//! Terminal UI of bullseye.
//!
//! - [layout]: pane geometry and row fitting
//! - [panes]: the parent, current and preview panes
//! - [widgets]: status bar, help bar and pane borders
//! - [icons]: Nerd Font icon lookup
//! - [render]: frame entry points

pub mod icons;
pub mod layout;
pub mod panes;
pub mod render;
pub mod widgets;

pub use render::{render, render_to_text};
