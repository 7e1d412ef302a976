//! UI pane drawing module for bullseye.
//!
//! This module provides drawers for the parent, current and preview panes.
//! Row fitting, scrolling windows and entry coloring are handled here.
//!
//! Used internally by ui::render

use crate::app::AppState;
use crate::config::Theme;
use crate::core::{FileEntry, PreviewContent, sanitize_to_exact_width};
use crate::ui::icons::icon_for;
use crate::ui::layout::fit_entry_line;
use crate::ui::widgets::pane_block;

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};
use std::path::Path;

/// Shared inputs of the listing panes
pub struct PaneContext<'a> {
    pub theme: &'a Theme,
    pub show_icons: bool,
}

impl PaneContext<'_> {
    /// One listing row, fitted to `interior` columns and colored by role.
    fn entry_row(&self, entry: &FileEntry, selected: bool, interior: usize) -> Line<'static> {
        let icon = icon_for(entry, self.show_icons);
        let text = fit_entry_line(icon, &entry.name_str(), interior);
        let style = self.theme.entry_style(entry, selected);

        if entry.is_symlink()
            && !icon.is_empty()
            && let Some(rest) = text.strip_prefix(icon)
        {
            let icon_style = style.fg(self.theme.symlink());
            return Line::from(vec![
                Span::styled(icon.to_string(), icon_style),
                Span::styled(rest.to_string(), style),
            ]);
        }
        Line::styled(text, style)
    }

    fn rows(
        &self,
        entries: &[FileEntry],
        selected: Option<usize>,
        offset: usize,
        visible: usize,
        interior: usize,
    ) -> Vec<Line<'static>> {
        entries
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(idx, e)| self.entry_row(e, Some(idx) == selected, interior))
            .collect()
    }
}

/// Interior width and height of a bordered pane.
fn interior(area: Rect) -> (usize, usize) {
    (
        area.width.saturating_sub(2) as usize,
        area.height.saturating_sub(2) as usize,
    )
}

fn dir_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Draws the parent pane: the listing of the directory above, with the current directory
/// highlighted. Empty at the filesystem root.
pub fn draw_parent(frame: &mut Frame, app: &AppState, area: Rect, ctx: &PaneContext) {
    let parent = app.nav().parent();
    let (width, height) = interior(area);

    let title = parent.path().map(dir_name).unwrap_or_default();
    let block = pane_block(&title, ctx.theme.border_style());

    let lines = if let Some(err) = parent.error() {
        vec![Line::styled(
            sanitize_to_exact_width(err, width),
            Style::default().fg(ctx.theme.default_fg()),
        )]
    } else {
        let selected = parent.selected_idx();
        // Keep the highlighted row on screen
        let offset = selected
            .filter(|&idx| idx >= height)
            .map(|idx| idx + 1 - height)
            .unwrap_or(0);
        ctx.rows(parent.entries(), selected, offset, height, width)
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Draws the current directory listing from the scroll offset, with the cursor row
/// highlighted.
pub fn draw_current(frame: &mut Frame, app: &AppState, area: Rect, ctx: &PaneContext) {
    let nav = app.nav();
    let (width, height) = interior(area);

    let title = format!("{} ({} items)", dir_name(nav.current_dir()), nav.entries().len());
    let block = pane_block(&title, ctx.theme.border_style());
    let plain = Style::default().fg(ctx.theme.default_fg());

    let lines = if let Some(err) = nav.load_error() {
        vec![Line::styled(
            sanitize_to_exact_width(&format!("Error: {err}"), width),
            plain,
        )]
    } else if nav.entries().is_empty() {
        vec![Line::styled("No Items", plain)]
    } else {
        ctx.rows(
            nav.entries(),
            Some(nav.cursor()),
            nav.list_offset(),
            height,
            width,
        )
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Draws the preview pane from the preview scroll offset.
pub fn draw_preview(frame: &mut Frame, app: &AppState, area: Rect, ctx: &PaneContext) {
    let nav = app.nav();
    let content = app.preview().content();
    let (width, height) = interior(area);

    let title = nav
        .selected_entry()
        .map(|e| e.name_str().into_owned())
        .unwrap_or_default();
    let block = pane_block(&title, ctx.theme.preview_border_style()).style(ctx.theme.preview_style());
    let offset = nav.preview_offset();

    let lines: Vec<Line> = match content {
        // Sub-listings keep the listing colors
        PreviewContent::Directory { entries, .. } => {
            let mut lines = ctx.rows(entries, None, offset, height, width);
            if lines.len() < height
                && let Some(footer) = content.footer()
            {
                lines.push(Line::raw(sanitize_to_exact_width(&footer, width)));
            }
            lines
        }
        _ => {
            let show_icons = ctx.show_icons;
            content
                .to_lines(&|e| icon_for(e, show_icons))
                .iter()
                .skip(offset)
                .take(height)
                .map(|l| Line::raw(sanitize_to_exact_width(l, width)))
                .collect()
        }
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
