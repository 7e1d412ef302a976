//! Input configuration options for bullseye
//!
//! This module defines the `[keys]` and `[editor]` tables of the configuration file.

use serde::Deserialize;

/// Input configuration options of all actions
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Keys {
    move_up: Vec<String>,
    move_down: Vec<String>,
    page_up: Vec<String>,
    page_down: Vec<String>,
    go_to_top: Vec<String>,
    go_to_bottom: Vec<String>,
    go_into_dir: Vec<String>,
    go_parent: Vec<String>,
    go_to_home: Vec<String>,
    toggle_hidden: Vec<String>,
    sort_name: Vec<String>,
    sort_size: Vec<String>,
    sort_modified: Vec<String>,
    search: Vec<String>,
    refresh: Vec<String>,
    open_file: Vec<String>,
    scroll_preview_down: Vec<String>,
    scroll_preview_up: Vec<String>,
    quit: Vec<String>,
}

/// Editor configuration options
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Editor {
    cmd: String,
}

macro_rules! accessor {
    ($($name:ident),+ $(,)?) => {
        impl Keys {
            $(
                #[inline]
                pub fn $name(&self) -> &[String] {
                    &self.$name
                }
            )+
        }
    };
}

accessor!(
    move_up,
    move_down,
    page_up,
    page_down,
    go_to_top,
    go_to_bottom,
    go_into_dir,
    go_parent,
    go_to_home,
    toggle_hidden,
    sort_name,
    sort_size,
    sort_modified,
    search,
    refresh,
    open_file,
    scroll_preview_down,
    scroll_preview_up,
    quit,
);

/// Default input configuration options
impl Default for Keys {
    fn default() -> Self {
        Keys {
            move_up: vec!["k".into(), "Up".into()],
            move_down: vec!["j".into(), "Down".into()],
            page_up: vec!["Ctrl+u".into(), "PageUp".into()],
            page_down: vec!["Ctrl+d".into(), "PageDown".into()],
            go_to_top: vec!["g".into(), "Home".into()],
            go_to_bottom: vec!["G".into(), "End".into()],
            go_into_dir: vec!["l".into(), "Right".into(), "Enter".into()],
            go_parent: vec!["h".into(), "Left".into(), "Backspace".into()],
            go_to_home: vec!["~".into()],

            toggle_hidden: vec![".".into()],
            sort_name: vec!["n".into()],
            sort_size: vec!["s".into()],
            sort_modified: vec!["t".into()],
            search: vec!["/".into()],
            refresh: vec!["r".into()],

            open_file: vec!["o".into()],
            scroll_preview_down: vec!["J".into()],
            scroll_preview_up: vec!["K".into()],

            quit: vec!["q".into(), "Ctrl+c".into()],
        }
    }
}

impl Editor {
    /// The editor command, `$EDITOR` or nvim when unset.
    #[inline]
    pub fn cmd(&self) -> &str {
        let trimmed = self.cmd.trim();
        if trimmed.is_empty() { "nvim" } else { trimmed }
    }

    pub fn exists(&self) -> bool {
        which::which(self.cmd()).is_ok()
    }
}

/// Default editor configuration options
impl Default for Editor {
    fn default() -> Self {
        Editor {
            cmd: std::env::var("EDITOR").unwrap_or_default(),
        }
    }
}
