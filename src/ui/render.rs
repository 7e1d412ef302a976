//! UI renderer implementation.
//!
//! Contains the top-level `render` entry point used by the terminal loop and
//! `render_to_text`, which draws one frame off-screen and flattens it into text.
//!
//! This module should stay "pure rendering": it reads state + config and
//! produces widgets, without owning bullseye core logic.

use crate::app::AppState;
use crate::ui::layout::PaneLayout;
use crate::ui::panes::{self, PaneContext};
use crate::ui::widgets;

use ratatui::{Frame, Terminal, backend::TestBackend};
use std::io;
use unicode_width::UnicodeWidthStr;

/// Render function which renders the entire terminal UI for bullseye on each frame:
/// three panes side by side over the status and help bars.
pub fn render(frame: &mut Frame, app: &AppState) {
    let layout = PaneLayout::compute(frame.area());
    let cfg = app.config();
    let ctx = PaneContext {
        theme: cfg.theme(),
        show_icons: cfg.general().icons(),
    };

    panes::draw_parent(frame, app, layout.parent, &ctx);
    panes::draw_current(frame, app, layout.current, &ctx);
    panes::draw_preview(frame, app, layout.preview, &ctx);
    widgets::draw_status_bar(frame, app, layout.status);
    widgets::draw_help_bar(frame, app, layout.help);
}

/// Renders one full frame of `width` x `height` cells off-screen and returns it as text,
/// one line per terminal row with trailing blanks removed.
///
/// The app should have seen a resize to the same size first, otherwise scroll windows and
/// the preview are computed for a different terminal.
pub fn render_to_text(app: &AppState, width: u16, height: u16) -> io::Result<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height))
        .map_err(|e| io::Error::other(e.to_string()))?;
    terminal
        .draw(|f| render(f, app))
        .map_err(|e| io::Error::other(e.to_string()))?;

    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    let mut rows = Vec::with_capacity(area.height as usize);
    for y in area.top()..area.bottom() {
        let mut row = String::new();
        let mut skip = 0;
        for x in area.left()..area.right() {
            // cells covered by a wide glyph
            if skip > 0 {
                skip -= 1;
                continue;
            }
            let symbol = buffer[(x, y)].symbol();
            skip = symbol.width().saturating_sub(1);
            row.push_str(symbol);
        }
        rows.push(row.trim_end().to_string());
    }
    Ok(rows.join("\n"))
}
