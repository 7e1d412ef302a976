//! Application state and input handling for bullseye.
//!
//! - [nav]: the navigation state machine (cursor, scroll, mode, snapshots)
//! - [parent]: the parent pane snapshot
//! - [preview]: the preview pane content and when to rebuild it
//! - [keymap]: key parsing and the action set
//! - [state] and [handlers]: [AppState], which feeds key events into the above

pub mod handlers;
pub mod keymap;
pub mod nav;
pub mod parent;
pub mod preview;
pub mod state;

pub use keymap::{Action, Keymap, NavAction, SystemAction};
pub use nav::{Mode, NavEvent, NavState, SearchInput};
pub use parent::ParentState;
pub use preview::PreviewState;
pub use state::{AppState, KeypressResult};
