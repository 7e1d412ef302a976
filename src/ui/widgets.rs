//! Bars and pane chrome for the bullseye UI.
//!
//! The status and help bar texts are built by plain functions so they can be checked
//! without a terminal.

use crate::app::{AppState, Mode};
use crate::ui::layout::status_line;
use crate::utils::shorten_home_path;

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
};

pub const HELP_NORMAL: &str =
    "q:quit | h/l:nav | j/k:up/down | o:open | .:hidden | s:size | t:time | n:name | /:search | r:refresh";
pub const HELP_SEARCH: &str = "Type to search | Enter:confirm | Esc:cancel";

/// Rounded, bordered block with `title` on its top border.
pub fn pane_block(title: &str, border_style: Style) -> Block<'static> {
    let mut b = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);
    if !title.is_empty() {
        b = b.title(Line::from(format!(" {title} ")));
    }
    b
}

/// Text of the status bar for a bar `width` columns wide, including its one column of
/// padding on each side.
pub fn status_text(app: &AppState, width: usize) -> String {
    let nav = app.nav();
    let inner = width.saturating_sub(2);

    if nav.mode() == Mode::SearchEntry {
        return format!(" Search: {}", nav.query());
    }

    let left = match nav.message() {
        Some(msg) => msg.to_string(),
        None => {
            let view = nav.view();
            let arrow = if view.reversed() { "↓" } else { "↑" };
            let mut left = format!(
                "{} | Sort: {}{arrow}",
                shorten_home_path(nav.current_dir()),
                view.sort_key().label()
            );
            if view.show_hidden() {
                left.push_str(" | Hidden: ON");
            }
            left
        }
    };

    let right = match nav.selected_entry() {
        Some(entry) => format!(
            "{} {}/{}",
            entry.permissions(),
            nav.cursor() + 1,
            nav.entries().len()
        ),
        None => "0/0".to_string(),
    };

    format!(" {} ", status_line(&left, &right, inner))
}

pub fn help_text(mode: Mode) -> &'static str {
    match mode {
        Mode::SearchEntry => HELP_SEARCH,
        Mode::Normal => HELP_NORMAL,
    }
}

pub fn draw_status_bar(frame: &mut Frame, app: &AppState, area: Rect) {
    let text = status_text(app, area.width as usize);
    frame.render_widget(
        Paragraph::new(text).style(app.config().theme().status_style()),
        area,
    );
}

pub fn draw_help_bar(frame: &mut Frame, app: &AppState, area: Rect) {
    let text = format!(" {}", help_text(app.nav().mode()));
    frame.render_widget(
        Paragraph::new(text).style(app.config().theme().help_style()),
        area,
    );
}
