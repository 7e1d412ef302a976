//! Helpers for bullseye.
//!
//! - Color parsing from names, hex codes or ANSI-256 indices
//! - Opening a file in the user's chosen editor
//! - Displaying home directories as "~" in paths
//! - Resolving the directory the browser starts in

use crate::config::Editor;
use crate::core::terminal;

use ratatui::style::Color;
use std::io;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};
use std::process::Command;

/// Parses a string into a [Color].
///
/// Supports standard names (red, green, etc.), hex values (#RRGGBB or #RGB) and
/// ANSI-256 indices ("240"). Returns `None` for anything else.
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    let color = match s.to_lowercase().as_str() {
        "default" | "reset" => Color::Reset,
        "yellow" => Color::Yellow,
        "red" => Color::Red,
        "blue" => Color::Blue,
        "green" => Color::Green,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "black" => Color::Black,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        _ => {
            if let Some(hex) = s.strip_prefix('#') {
                let expanded = match hex.len() {
                    6 => hex.to_string(),
                    3 => hex.chars().map(|c| format!("{c}{c}")).collect(),
                    _ => return None,
                };
                let rgb = u32::from_str_radix(&expanded, 16).ok()?;
                Color::Rgb(
                    ((rgb >> 16) & 0xFF) as u8,
                    ((rgb >> 8) & 0xFF) as u8,
                    (rgb & 0xFF) as u8,
                )
            } else {
                Color::Indexed(s.parse::<u8>().ok()?)
            }
        }
    };
    Some(color)
}

/// Opens a file in the configured editor.
///
/// Leaves raw mode and the alternate screen while the editor runs and restores both on
/// return, even when the editor fails to start.
pub fn open_in_editor(editor: &Editor, file_path: &Path) -> io::Result<()> {
    if !editor.exists() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("editor '{}' not found", editor.cmd()),
        ));
    }

    terminal::suspend()?;
    let status = Command::new(editor.cmd()).arg(file_path).status();
    terminal::resume()?;

    let status = status?;
    if !status.success() {
        tracing::info!(editor = editor.cmd(), %status, "editor exited with failure");
    }
    Ok(())
}

pub fn get_home() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Shortens the home directory to ~ for display.
pub fn shorten_home_path<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();
    if let Some(home_dir) = get_home()
        && let Ok(stripped) = path.strip_prefix(&home_dir)
    {
        if stripped.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~{}{}", MAIN_SEPARATOR, stripped.display());
    }
    path.display().to_string()
}

/// Expands a leading `~` to the home directory.
pub fn expand_home_path(raw: &str) -> PathBuf {
    if raw == "~" {
        return get_home().unwrap_or_else(|| PathBuf::from(raw));
    }
    if let Some(rest) = raw.strip_prefix("~/")
        && let Some(home) = get_home()
    {
        return home.join(rest);
    }
    PathBuf::from(raw)
}

/// Resolves the CLI path argument to an absolute directory.
///
/// Returns an error if the path does not exist or is not a directory.
pub fn resolve_initial_dir(raw: &str) -> io::Result<PathBuf> {
    let path = expand_home_path(raw.trim()).canonicalize()?;
    if !path.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotADirectory,
            format!("'{}' is not a directory", path.display()),
        ));
    }
    Ok(path)
}
