//! State of the preview pane in bullseye.
//!
//! Holds the last [PreviewContent] and the inputs it was built from. The content is rebuilt
//! whenever those inputs change (selection, view rules, pane size) or on an explicit refresh.

use crate::app::NavState;
use crate::core::{FileEntry, Formatter, PreviewContent, build_preview};
use crate::ui::layout::preview_content_size;

use std::path::PathBuf;

/// Everything a preview depends on.
#[derive(Debug, Clone, PartialEq)]
struct PreviewKey {
    dir: PathBuf,
    entry: Option<FileEntry>,
    view: Formatter,
    width: usize,
    height: usize,
}

impl PreviewKey {
    fn of(nav: &NavState) -> Self {
        let (w, h) = nav.size();
        let (width, height) = preview_content_size(w, h);
        Self {
            dir: nav.current_dir().to_path_buf(),
            entry: nav.selected_entry().cloned(),
            view: *nav.view(),
            width,
            height,
        }
    }
}

/// State of the preview pane
#[derive(Debug, Default)]
pub struct PreviewState {
    content: PreviewContent,
    line_count: usize,
    key: Option<PreviewKey>,
}

impl PreviewState {
    #[inline]
    pub fn content(&self) -> &PreviewContent {
        &self.content
    }

    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// Rebuilds the content for the current selection when its inputs changed, or always
    /// when `force` is set. Returns whether a rebuild happened.
    pub fn refresh(&mut self, nav: &NavState, force: bool) -> bool {
        let key = PreviewKey::of(nav);
        if !force && self.key.as_ref() == Some(&key) {
            return false;
        }

        self.content = build_preview(
            &key.dir,
            key.entry.as_ref(),
            &key.view,
            key.width,
            key.height,
        );
        self.line_count = self.content.line_count();
        self.key = Some(key);
        true
    }
}
