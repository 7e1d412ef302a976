//! Input handler methods for bullseye.
//!
//! This module implements the [AppState] methods that turn key events into navigation
//! events, search input or system actions.

use crate::app::keymap::{Action, NavAction, SystemAction};
use crate::app::nav::{Mode, NavEvent, SearchInput};
use crate::app::state::{AppState, KeypressResult};
use crate::utils::open_in_editor;

use crossterm::event::{KeyCode::*, KeyEvent, KeyModifiers};

/// AppState input and action handlers
impl<'a> AppState<'a> {
    /// Handles one key press and reports what the host loop should do next.
    pub fn handle_keypress(&mut self, key: KeyEvent) -> KeypressResult {
        if self.nav.mode() == Mode::SearchEntry {
            return self.handle_search_key(key);
        }

        match self.keymap.lookup(key) {
            Some(Action::Nav(action)) => self.handle_nav_action(action),
            Some(Action::System(action)) => self.handle_sys_action(action),
            None => KeypressResult::Continue,
        }
    }

    /// Handles key events while the search query is being typed.
    /// Every key is consumed so typed letters never trigger bindings.
    fn handle_search_key(&mut self, key: KeyEvent) -> KeypressResult {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let input = match key.code {
            Enter => SearchInput::Confirm,
            Esc => SearchInput::Cancel,
            Char('c') if ctrl => SearchInput::Cancel,
            Backspace => SearchInput::Backspace,
            Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                SearchInput::Char(c)
            }
            _ => return KeypressResult::Consumed,
        };
        self.dispatch(NavEvent::Search(input));
        KeypressResult::Consumed
    }

    /// Handles navigation actions (up, down, into dir, etc).
    fn handle_nav_action(&mut self, action: NavAction) -> KeypressResult {
        self.dispatch(NavEvent::Action(action));
        if action == NavAction::Refresh {
            self.refresh_preview(true);
        }
        KeypressResult::Consumed
    }

    fn handle_sys_action(&mut self, action: SystemAction) -> KeypressResult {
        match action {
            SystemAction::Quit => KeypressResult::Quit,
            SystemAction::OpenEditor => self.handle_open_file(),
        }
    }

    /// Opens the selected file in the configured editor. Directories are ignored.
    ///
    /// Failures end up in the status bar.
    fn handle_open_file(&mut self) -> KeypressResult {
        let Some(entry) = self.nav.selected_entry() else {
            return KeypressResult::Continue;
        };
        if entry.is_dir() {
            return KeypressResult::Continue;
        }
        let path = self.nav.current_dir().join(entry.name());

        let editor = self.config.editor();
        if !editor.exists() {
            self.nav
                .set_message(format!("Editor '{}' not found", editor.cmd()));
            return KeypressResult::Consumed;
        }

        tracing::info!(editor = editor.cmd(), path = %path.display(), "opening editor");
        if let Err(e) = open_in_editor(editor, &path) {
            tracing::warn!(error = %e, "editor failed");
            self.nav.set_message(format!("Editor failed: {e}"));
        }
        // The file may have changed while the editor ran
        self.refresh_preview(true);
        KeypressResult::OpenedEditor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crossterm::event::KeyCode;
    use std::fs;
    use tempfile::tempdir;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn search_mode_swallows_bindings() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        fs::write(tmp.path().join("queue.txt"), b"")?;
        fs::write(tmp.path().join("other.txt"), b"")?;
        let config = Config::default();
        let mut app = AppState::from_dir(&config, tmp.path());
        app.handle_resize(100, 30);

        assert_eq!(app.handle_keypress(key(Char('/'))), KeypressResult::Consumed);
        // `q` is the quit binding, but here it is a search character
        assert_eq!(app.handle_keypress(key(Char('q'))), KeypressResult::Consumed);
        assert_eq!(app.nav().query(), "q");
        assert_eq!(app.nav().entries().len(), 1);

        app.handle_keypress(KeyEvent::new(Char('c'), KeyModifiers::CONTROL));
        assert_eq!(app.nav().mode(), Mode::Normal);
        assert_eq!(app.nav().entries().len(), 2);

        assert_eq!(app.handle_keypress(key(Char('q'))), KeypressResult::Quit);
        Ok(())
    }

    #[test]
    fn open_on_directory_is_noop() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        fs::create_dir(tmp.path().join("sub"))?;
        let config = Config::default();
        let mut app = AppState::from_dir(&config, tmp.path());
        app.handle_resize(100, 30);

        assert_eq!(app.handle_keypress(key(Char('o'))), KeypressResult::Continue);
        assert!(app.nav().message().is_none());
        Ok(())
    }
}
