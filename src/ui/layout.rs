//! Screen geometry and text fitting for the bullseye UI.
//!
//! Pane widths follow fixed formulas of the terminal size, so the same numbers are used by
//! the renderer, the preview builder (content size) and the navigation state (visible rows).

use crate::app::nav::visible_rows;

use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Columns between the three panes, split into two gutters.
pub const PANE_GUTTER: u16 = 2;
pub const ELLIPSIS: &str = "...";

/// Outer widths of the parent, current and preview panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneWidths {
    pub parent: u16,
    pub current: u16,
    pub preview: u16,
}

/// Pane widths for a terminal `width` columns wide.
///
/// Each pane has a minimum width, so on narrow terminals the sum can exceed `width` and the
/// rightmost panes get clipped.
pub fn pane_widths(width: u16) -> PaneWidths {
    let parent = (width / 4).max(15);
    let current = (width / 3).max(20);
    let preview = width
        .saturating_sub(parent)
        .saturating_sub(current)
        .saturating_sub(2 * PANE_GUTTER)
        .max(20);
    PaneWidths {
        parent,
        current,
        preview,
    }
}

/// Size of the text area inside the preview pane's borders, as (columns, rows).
pub fn preview_content_size(width: u16, height: u16) -> (usize, usize) {
    let preview = pane_widths(width).preview;
    (preview.saturating_sub(2) as usize, visible_rows(height))
}

/// Rectangles of every region of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneLayout {
    pub parent: Rect,
    pub current: Rect,
    pub preview: Rect,
    pub status: Rect,
    pub help: Rect,
}

impl PaneLayout {
    /// Splits `area` into three bordered panes over a status bar and a help bar.
    /// Regions are clipped to `area`.
    pub fn compute(area: Rect) -> Self {
        let widths = pane_widths(area.width);
        let pane_h = area.height.saturating_sub(2);

        let pane = |offset: u16, width: u16| {
            Rect::new(
                area.x.saturating_add(offset),
                area.y,
                width,
                pane_h,
            )
            .intersection(area)
        };
        let bar = |row: u16| {
            if row < area.height {
                Rect::new(area.x, area.y + row, area.width, 1)
            } else {
                Rect::new(area.x, area.y, 0, 0)
            }
        };

        let current_x = widths.parent.saturating_add(PANE_GUTTER);
        let preview_x = current_x
            .saturating_add(widths.current)
            .saturating_add(PANE_GUTTER);

        Self {
            parent: pane(0, widths.parent),
            current: pane(current_x, widths.current),
            preview: pane(preview_x, widths.preview),
            status: bar(area.height.saturating_sub(2)),
            help: bar(area.height.saturating_sub(1)),
        }
    }
}

/// Cuts `s` to at most `max` display columns. Wide characters that would straddle the
/// limit are dropped.
pub fn truncate_to_width(s: &str, max: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max {
            break;
        }
        used += w;
        out.push(c);
    }
    out
}

/// Cuts `s` to `max` columns and pads with spaces where a dropped wide character left
/// a gap, so the result is exactly `max` columns wide.
fn cut_exact(s: &str, max: usize) -> String {
    let mut out = truncate_to_width(s, max);
    let gap = max.saturating_sub(out.width());
    out.extend(std::iter::repeat_n(' ', gap));
    out
}

/// Shortens `s` to exactly `max` columns, ending in an ellipsis when at least 4 columns
/// are available and hard-cut otherwise.
pub fn ellipsize(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    if max > ELLIPSIS.len() {
        let mut out = cut_exact(s, max - ELLIPSIS.len());
        out.push_str(ELLIPSIS);
        out
    } else {
        cut_exact(s, max)
    }
}

/// Builds the text of one listing row: `icon name`, fitted to `interior` columns.
///
/// Only the name is ever shortened. When the interior cannot even hold the icon the row is
/// empty.
pub fn fit_entry_line(icon: &str, name: &str, interior: usize) -> String {
    if icon.is_empty() {
        return ellipsize(name, interior);
    }

    let icon_w = icon.width();
    if interior <= icon_w {
        return String::new();
    }
    // icon and the separating space
    let budget = interior - icon_w - 1;
    format!("{icon} {}", ellipsize(name, budget))
}

/// Joins the two halves of the status bar, padding the gap so the line spans `width`.
/// Overlapping halves get no gap at all.
pub fn status_line(left: &str, right: &str, width: usize) -> String {
    let gap = width.saturating_sub(left.width() + right.width());
    format!("{left}{}{right}", " ".repeat(gap))
}
