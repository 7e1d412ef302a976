//! Theme configuration options for bullseye
//!
//! Every semantic role maps to one color. Roles missing from the `[theme]` table, or set to
//! something that does not parse, fall back to the built-in palette, so the browser looks
//! the same with no theme at all.
//!
//! # Examples
//! ```toml
//! [theme]
//! dir = "blue"
//! hidden = "244"
//! selected_hover_bg = "#303030"
//! ```

use crate::core::FileEntry;
use crate::utils::parse_color;

use ratatui::style::{Color, Style};
use serde::{Deserialize, Deserializer};

/// Theme configuration options
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct Theme {
    #[serde(deserialize_with = "deserialize_color_field")]
    border: Option<Color>,
    #[serde(deserialize_with = "deserialize_color_field")]
    status_bg: Option<Color>,
    #[serde(deserialize_with = "deserialize_color_field")]
    status_fg: Option<Color>,
    #[serde(deserialize_with = "deserialize_color_field")]
    dir: Option<Color>,
    #[serde(deserialize_with = "deserialize_color_field")]
    hidden: Option<Color>,
    #[serde(deserialize_with = "deserialize_color_field")]
    executable: Option<Color>,
    #[serde(deserialize_with = "deserialize_color_field")]
    default_fg: Option<Color>,
    #[serde(deserialize_with = "deserialize_color_field")]
    preview_bg: Option<Color>,
    #[serde(deserialize_with = "deserialize_color_field")]
    preview_border: Option<Color>,
    #[serde(deserialize_with = "deserialize_color_field")]
    selected_hover_bg: Option<Color>,
    #[serde(deserialize_with = "deserialize_color_field")]
    symlink: Option<Color>,
}

/// Generates a getter per role that falls back to the given ANSI-256 index.
macro_rules! role {
    ($($name:ident => $fallback:expr),+ $(,)?) => {
        impl Theme {
            $(
                #[inline]
                pub fn $name(&self) -> Color {
                    self.$name.unwrap_or(Color::Indexed($fallback))
                }
            )+
        }
    };
}

role!(
    border => 240,
    status_bg => 235,
    status_fg => 255,
    dir => 33,
    hidden => 244,
    executable => 46,
    default_fg => 252,
    preview_bg => 234,
    preview_border => 240,
    selected_hover_bg => 0,
    symlink => 14,
);

impl Theme {
    /// Foreground for a listing row: hidden, then directory, then executable, else default.
    pub fn entry_fg(&self, entry: &FileEntry) -> Color {
        if entry.is_hidden() {
            self.hidden()
        } else if entry.is_dir() {
            self.dir()
        } else if entry.is_executable() {
            self.executable()
        } else {
            self.default_fg()
        }
    }

    /// Style of a listing row, with the hover background when selected.
    pub fn entry_style(&self, entry: &FileEntry, selected: bool) -> Style {
        let style = Style::default().fg(self.entry_fg(entry));
        if selected {
            style.bg(self.selected_hover_bg())
        } else {
            style
        }
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border())
    }

    pub fn preview_border_style(&self) -> Style {
        Style::default()
            .fg(self.preview_border())
            .bg(self.preview_bg())
    }

    pub fn preview_style(&self) -> Style {
        Style::default().fg(self.default_fg()).bg(self.preview_bg())
    }

    pub fn status_style(&self) -> Style {
        Style::default().fg(self.status_fg()).bg(self.status_bg())
    }

    /// The help bar is not themable.
    pub fn help_style(&self) -> Style {
        Style::default()
            .fg(Color::Indexed(248))
            .bg(Color::Indexed(236))
    }
}

/// Deserializes a color role, mapping unparsable values to `None` so the role falls back.
fn deserialize_color_field<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    let color = parse_color(&s);
    if color.is_none() {
        tracing::warn!(value = %s, "unrecognized theme color, using default");
    }
    Ok(color)
}
