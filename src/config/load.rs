//! The main config loading module for bullseye.
//!
//! Handles loading and deserializing settings from `config.toml`.
//!
//! Provides the main [Config] struct and the internal [RawConfig] used for parsing.
//! Also writes a default config file for `--init`.

use crate::config::{Editor, General, Keys, Theme};
use crate::utils::get_home;

use serde::Deserialize;
use std::{fs, io, path::Path, path::PathBuf};

pub const CONFIG_ENV: &str = "BULLSEYE_CONFIG";

/// Raw configuration as read from the toml file
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RawConfig {
    general: General,
    theme: Theme,
    editor: Editor,
    keys: Keys,
}

/// Main configuration struct for bullseye
#[derive(Debug, Default, Clone)]
pub struct Config {
    general: General,
    theme: Theme,
    editor: Editor,
    keys: Keys,
}

impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            general: raw.general,
            theme: raw.theme,
            editor: raw.editor,
            keys: raw.keys,
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    /// If the file does not exist or fails to parse, returns the default configuration.
    ///
    /// Called by entry point to load config at startup.
    pub fn load() -> Self {
        let path = Self::default_path();

        if !path.exists() {
            tracing::info!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "config loaded");
                config
            }
            Err(e) => {
                eprintln!("[bullseye] Error reading config {}: {e}", path.display());
                tracing::warn!(path = %path.display(), error = %e, "config rejected, using defaults");
                Self::default()
            }
        }
    }

    /// Reads and parses one config file.
    pub fn load_from(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<RawConfig>(content).map(Config::from)
    }

    // Getters

    #[inline]
    pub fn general(&self) -> &General {
        &self.general
    }

    #[inline]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    #[inline]
    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    #[inline]
    pub fn keys(&self) -> &Keys {
        &self.keys
    }

    /// Determine the default configuration file path.
    /// Checks the BULLSEYE_CONFIG environment variable first,
    /// then XDG_CONFIG_HOME, then ~/.config/bullseye/config.toml,
    /// and finally ./config.toml.
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return PathBuf::from(path);
        }

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("bullseye/config.toml");
        }

        if let Some(home) = get_home() {
            return home.join(".config/bullseye/config.toml");
        }
        PathBuf::from("config.toml")
    }

    /// Generate a default configuration file at the specified path.
    /// If the file already exists, returns an error.
    pub fn generate_default(path: &Path) -> io::Result<()> {
        if path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Config file already exists at {}", path.display()),
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_TOML)?;
        println!("Default config generated at {}", path.display());
        Ok(())
    }
}

const DEFAULT_TOML: &str = r##"# config.toml - default configuration for bullseye

# Note:
# Commented values are the internal defaults of bullseye
# Colors: names ("cyan"), hex codes ("#RRGGBB") or ANSI-256 indices ("240")

[general]
# show_hidden = false
# sort = "name"            # "name", "size" or "modified"
# reverse = false
# icons = true

[theme]
# border = "240"
# status_bg = "235"
# status_fg = "255"
# dir = "33"
# hidden = "244"
# executable = "46"
# default_fg = "252"
# preview_bg = "234"
# preview_border = "240"
# selected_hover_bg = "0"
# symlink = "14"

# [editor]
# cmd = "nvim"             # defaults to $EDITOR

# [keys]
# move_up = ["k", "Up"]
# move_down = ["j", "Down"]
# page_up = ["Ctrl+u", "PageUp"]
# page_down = ["Ctrl+d", "PageDown"]
# go_to_top = ["g", "Home"]
# go_to_bottom = ["G", "End"]
# go_into_dir = ["l", "Right", "Enter"]
# go_parent = ["h", "Left", "Backspace"]
# go_to_home = ["~"]
# toggle_hidden = ["."]
# sort_name = ["n"]
# sort_size = ["s"]
# sort_modified = ["t"]
# search = ["/"]
# refresh = ["r"]
# open_file = ["o"]
# scroll_preview_down = ["J"]
# scroll_preview_up = ["K"]
# quit = ["q", "Ctrl+c"]
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SortKey;
    use ratatui::style::Color;
    use tempfile::tempdir;

    #[test]
    fn generated_default_parses() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("nested/config.toml");

        Config::generate_default(&path)?;
        let config = Config::load_from(&path)?;
        assert!(!config.general().show_hidden());
        assert_eq!(config.theme().dir(), Color::Indexed(33));

        let again = Config::generate_default(&path);
        assert!(again.is_err_and(|e| e.kind() == io::ErrorKind::AlreadyExists));
        Ok(())
    }

    #[test]
    fn sections_are_read() -> Result<(), Box<dyn std::error::Error>> {
        let config = Config::from_toml(
            r#"
            [general]
            show_hidden = true
            sort = "time"
            reverse = true

            [theme]
            dir = "cyan"

            [keys]
            quit = ["x"]
            "#,
        )?;
        let fmt = config.general().formatter();
        assert!(fmt.show_hidden());
        assert_eq!(fmt.sort_key(), SortKey::Modified);
        assert!(fmt.reversed());
        assert_eq!(config.theme().dir(), Color::Cyan);
        assert_eq!(config.keys().quit(), ["x"]);
        Ok(())
    }

    #[test]
    fn invalid_file_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("config.toml");
        fs::write(&path, "[general]\nshow_hidden = \"maybe\"\n")?;
        assert!(Config::load_from(&path).is_err());
        Ok(())
    }
}
