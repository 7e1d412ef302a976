//! Navigation state machine for bullseye.
//!
//! [NavState] is the single source of truth for what is on screen: the current directory
//! and its snapshot, the parent snapshot, cursor and scroll offsets, the input mode and the
//! view rules. Every input goes through [NavState::apply], which consumes the state and
//! returns the next one. New snapshots are built before any field is committed, so a state
//! with a broken invariant is never observable.

use crate::app::keymap::NavAction;
use crate::app::parent::ParentState;
use crate::core::{FileEntry, Formatter, SortKey};

use std::path::{Path, PathBuf};

/// Input mode of the browser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    SearchEntry,
}

/// Input while in [Mode::SearchEntry]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchInput {
    Char(char),
    Backspace,
    Confirm,
    Cancel,
}

/// Every input the state machine reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    Action(NavAction),
    Search(SearchInput),
    Resize { width: u16, height: u16 },
}

/// Rows available to a list pane for a terminal `height`.
#[inline]
pub fn visible_rows(height: u16) -> usize {
    (height as usize).saturating_sub(4).max(1)
}

/// Holds the navigation, selection and file list state
#[derive(Debug, Clone, Default)]
pub struct NavState {
    current_dir: PathBuf,
    entries: Vec<FileEntry>,
    load_error: Option<String>,
    parent: ParentState,
    home: Option<PathBuf>,

    cursor: usize,
    list_offset: usize,
    preview_offset: usize,

    mode: Mode,
    query: String,
    view: Formatter,

    width: u16,
    height: u16,

    message: Option<String>,
}

impl NavState {
    /// Opens `dir` with the given view rules.
    ///
    /// A directory that cannot be listed still yields a usable state: an empty snapshot
    /// with the error shown in the current pane.
    pub fn new(dir: PathBuf, view: Formatter) -> Self {
        let mut state = Self {
            current_dir: dir,
            view,
            home: crate::utils::get_home(),
            ..Self::default()
        };
        state.reload();
        state
    }

    /// Replaces the directory [NavAction::GoHome] jumps to.
    #[must_use]
    pub fn with_home(mut self, home: Option<PathBuf>) -> Self {
        self.home = home;
        self
    }

    // Getters / Accessors

    #[inline]
    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    #[inline]
    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    #[inline]
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    #[inline]
    pub fn parent(&self) -> &ParentState {
        &self.parent
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn list_offset(&self) -> usize {
        self.list_offset
    }

    #[inline]
    pub fn preview_offset(&self) -> usize {
        self.preview_offset
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[inline]
    pub fn view(&self) -> &Formatter {
        &self.view
    }

    #[inline]
    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    #[inline]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn visible_rows(&self) -> usize {
        visible_rows(self.height)
    }

    pub fn selected_entry(&self) -> Option<&FileEntry> {
        self.entries.get(self.cursor)
    }

    pub fn selected_path(&self) -> Option<PathBuf> {
        self.selected_entry()
            .map(|e| self.current_dir.join(e.name()))
    }

    /// Index of the current directory inside the parent snapshot.
    pub fn parent_cursor(&self) -> Option<usize> {
        self.parent.selected_idx()
    }

    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    /// Clamps the preview scroll offset to a preview of `line_count` lines.
    pub fn clamp_preview_offset(&mut self, line_count: usize) {
        self.preview_offset = self.preview_offset.min(line_count.saturating_sub(1));
    }

    // Transitions

    /// Applies one input and returns the resulting state.
    #[must_use]
    pub fn apply(mut self, event: NavEvent) -> Self {
        match event {
            NavEvent::Resize { width, height } => {
                self.width = width;
                self.height = height;
                self.ensure_visible();
            }
            NavEvent::Search(input) if self.mode == Mode::SearchEntry => self.apply_search(input),
            NavEvent::Action(action) if self.mode == Mode::Normal => {
                self.message = None;
                self.apply_action(action);
            }
            _ => {}
        }
        self
    }

    fn apply_action(&mut self, action: NavAction) {
        let before = self.selected_path();
        let len = self.entries.len();
        let page = (self.visible_rows() / 2).max(1);

        match action {
            NavAction::MoveUp => self.cursor = self.cursor.saturating_sub(1),
            NavAction::MoveDown => {
                if self.cursor + 1 < len {
                    self.cursor += 1;
                }
            }
            NavAction::PageUp => self.cursor = self.cursor.saturating_sub(page),
            NavAction::PageDown => {
                self.cursor = (self.cursor + page).min(len.saturating_sub(1));
            }
            NavAction::Top => {
                self.cursor = 0;
                self.list_offset = 0;
            }
            NavAction::Bottom => {
                self.cursor = len.saturating_sub(1);
                self.list_offset = len.saturating_sub(self.visible_rows());
            }
            NavAction::Descend => return self.descend(),
            NavAction::Ascend => return self.ascend(),
            NavAction::GoHome => return self.go_home(),
            NavAction::ToggleHidden => {
                self.view.toggle_hidden();
                self.reload();
            }
            NavAction::Sort(key) => self.select_sort(key),
            NavAction::Search => {
                self.mode = Mode::SearchEntry;
                self.query.clear();
                self.reload_current();
            }
            NavAction::Refresh => self.reload(),
            NavAction::ScrollPreviewDown => {
                self.preview_offset = self.preview_offset.saturating_add(1);
            }
            NavAction::ScrollPreviewUp => {
                self.preview_offset = self.preview_offset.saturating_sub(1);
            }
        }

        self.ensure_visible();
        if self.selected_path() != before {
            self.preview_offset = 0;
        }
    }

    fn apply_search(&mut self, input: SearchInput) {
        let before = self.selected_path();
        match input {
            SearchInput::Char(c) => {
                self.query.push(c);
                self.reload_current();
            }
            SearchInput::Backspace => {
                if self.query.pop().is_some() {
                    self.reload_current();
                }
            }
            SearchInput::Confirm => self.mode = Mode::Normal,
            SearchInput::Cancel => {
                self.mode = Mode::Normal;
                self.query.clear();
                self.reload_current();
            }
        }
        self.ensure_visible();
        if self.selected_path() != before {
            self.preview_offset = 0;
        }
    }

    fn select_sort(&mut self, key: SortKey) {
        self.view.select_sort(key);
        self.reload();
    }

    /// Descends into the selected directory. Files are left to the host.
    fn descend(&mut self) {
        let Some(entry) = self.selected_entry() else {
            return;
        };
        if !entry.is_dir() {
            return;
        }
        let target = self.current_dir.join(entry.name());
        if self.enter_dir(target) {
            tracing::debug!(path = %self.current_dir.display(), "descended");
        }
    }

    /// Moves to the parent directory and puts the cursor back on the directory just left.
    fn ascend(&mut self) {
        let Some(parent) = self.current_dir.parent().map(Path::to_path_buf) else {
            return;
        };
        let focus = self.current_dir.file_name().map(|n| n.to_os_string());
        let fallback = self.parent.selected_idx();

        let Some(entries) = self.try_snapshot(&parent) else {
            return;
        };
        let cursor = focus
            .and_then(|name| entries.iter().position(|e| e.name() == name))
            .or(fallback)
            .unwrap_or(0);

        self.commit_dir(parent, entries);
        self.cursor = cursor.min(self.entries.len().saturating_sub(1));
        self.list_offset = self.cursor.saturating_sub(self.visible_rows() / 2);
        self.ensure_visible();
    }

    fn go_home(&mut self) {
        let Some(home) = self.home.clone() else {
            self.set_message("Home directory not found");
            return;
        };
        self.enter_dir(home);
    }

    /// Enters `target` with the cursor at the top. Leaves the state untouched and sets a
    /// message when the directory cannot be listed.
    fn enter_dir(&mut self, target: PathBuf) -> bool {
        let Some(entries) = self.try_snapshot(&target) else {
            return false;
        };
        self.commit_dir(target, entries);
        true
    }

    /// Builds the unfiltered snapshot of a directory about to be entered.
    fn try_snapshot(&mut self, target: &Path) -> Option<Vec<FileEntry>> {
        match self.view.snapshot(target, "") {
            Ok(entries) => Some(entries),
            Err(e) => {
                tracing::warn!(error = %e, "cannot enter directory");
                self.set_message(format!("Cannot open {}: {}", target.display(), e.short_message()));
                None
            }
        }
    }

    fn commit_dir(&mut self, dir: PathBuf, entries: Vec<FileEntry>) {
        self.current_dir = dir;
        self.entries = entries;
        self.load_error = None;
        self.query.clear();
        self.cursor = 0;
        self.list_offset = 0;
        self.preview_offset = 0;
        self.parent = ParentState::load(&self.current_dir, &self.view);
    }

    /// Rebuilds both snapshots from disk under the current view rules.
    fn reload(&mut self) {
        self.reload_current();
        self.parent = ParentState::load(&self.current_dir, &self.view);
    }

    /// Rebuilds the current snapshot. A failure leaves an empty snapshot and the error.
    fn reload_current(&mut self) {
        match self.view.snapshot(&self.current_dir, &self.query) {
            Ok(entries) => {
                self.entries = entries;
                self.load_error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "current directory reload failed");
                self.entries = Vec::new();
                self.load_error = Some(e.short_message());
            }
        }
        self.ensure_visible();
    }

    /// Keeps the cursor inside the snapshot and the window around the cursor.
    fn ensure_visible(&mut self) {
        let len = self.entries.len();
        if len == 0 {
            self.cursor = 0;
            self.list_offset = 0;
            return;
        }
        self.cursor = self.cursor.min(len - 1);

        let rows = self.visible_rows();
        if self.cursor < self.list_offset {
            self.list_offset = self.cursor;
        } else if self.cursor >= self.list_offset + rows {
            self.list_offset = self.cursor + 1 - rows;
        }
    }
}
