//! Application state and main controller module for bullseye.
//!
//! [AppState] ties the configuration and keymap to the navigation state machine and the
//! preview pane. Each input is turned into a [NavEvent], applied to the navigation state,
//! and followed by a preview refresh, all before the next frame is drawn.

use crate::app::keymap::Keymap;
use crate::app::nav::{NavEvent, NavState};
use crate::app::preview::PreviewState;
use crate::config::Config;

use std::path::Path;

/// Result of processing one keypress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypressResult {
    Continue,
    Consumed,
    Quit,
    /// An external program owned the terminal, so the next frame must be drawn in full.
    OpenedEditor,
}

/// Main struct which holds the central application state of bullseye
pub struct AppState<'a> {
    pub(super) config: &'a Config,
    pub(super) keymap: Keymap,
    pub(super) nav: NavState,
    pub(super) preview: PreviewState,
}

impl<'a> AppState<'a> {
    /// Opens the process working directory.
    pub fn new(config: &'a Config) -> std::io::Result<Self> {
        let current_dir = std::env::current_dir()?;
        Ok(Self::from_dir(config, &current_dir))
    }

    pub fn from_dir(config: &'a Config, initial_path: &Path) -> Self {
        let nav = NavState::new(initial_path.to_path_buf(), config.general().formatter());
        tracing::info!(path = %initial_path.display(), "opened");

        let mut app = Self {
            config,
            keymap: Keymap::from_config(config),
            nav,
            preview: PreviewState::default(),
        };
        app.refresh_preview(true);
        app
    }

    // Getters/ accessors

    #[inline]
    pub fn config(&self) -> &Config {
        self.config
    }

    #[inline]
    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    #[inline]
    pub fn preview(&self) -> &PreviewState {
        &self.preview
    }

    /// Applies a terminal resize.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        self.dispatch(NavEvent::Resize { width, height });
    }

    /// Runs one event through the navigation state machine and brings the preview in line
    /// with the resulting selection.
    pub fn dispatch(&mut self, event: NavEvent) {
        let nav = std::mem::take(&mut self.nav);
        self.nav = nav.apply(event);
        self.refresh_preview(false);
    }

    pub(super) fn refresh_preview(&mut self, force: bool) {
        self.preview.refresh(&self.nav, force);
        self.nav.clamp_preview_offset(self.preview.line_count());
    }
}
