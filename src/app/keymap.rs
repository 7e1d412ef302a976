//! Key mapping and action dispatch for bullseye
//!
//! Maps keys to actions, parsed from the `[keys]` config table, and defines the action
//! set of the browser: navigation actions handled by the pure navigation state machine
//! and system actions handled by the host.

use crate::core::SortKey;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Represents any action in the app: navigation or system.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Nav(NavAction),
    System(SystemAction),
}

/// Actions applied by [NavState::apply](crate::app::NavState::apply)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NavAction {
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    Top,
    Bottom,
    Descend,
    Ascend,
    GoHome,
    ToggleHidden,
    Sort(SortKey),
    Search,
    Refresh,
    ScrollPreviewDown,
    ScrollPreviewUp,
}

/// Actions that reach outside the navigation state
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SystemAction {
    OpenEditor,
    Quit,
}

/// Key + modifiers as used in keybind/keymap
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub struct Key {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

/// Stores the mapping from Key to action, which is built from the config
#[derive(Debug, Clone)]
pub struct Keymap {
    map: HashMap<Key, Action>,
}

impl Keymap {
    /// Builds the keymap from the config
    #[rustfmt::skip]
    pub fn from_config(config: &crate::config::Config) -> Self {
        let mut map = HashMap::new();
        let keys = config.keys();

        macro_rules! bind {
            ($keys:expr, $action:expr) => {
                bind($keys, $action, &mut map);
            };
        }

        use NavAction as N;
        use SystemAction as S;

        // NavActions
        bind!(keys.move_up(),               Action::Nav(N::MoveUp));
        bind!(keys.move_down(),             Action::Nav(N::MoveDown));
        bind!(keys.page_up(),               Action::Nav(N::PageUp));
        bind!(keys.page_down(),             Action::Nav(N::PageDown));
        bind!(keys.go_to_top(),             Action::Nav(N::Top));
        bind!(keys.go_to_bottom(),          Action::Nav(N::Bottom));
        bind!(keys.go_into_dir(),           Action::Nav(N::Descend));
        bind!(keys.go_parent(),             Action::Nav(N::Ascend));
        bind!(keys.go_to_home(),            Action::Nav(N::GoHome));
        bind!(keys.toggle_hidden(),         Action::Nav(N::ToggleHidden));
        bind!(keys.sort_name(),             Action::Nav(N::Sort(SortKey::Name)));
        bind!(keys.sort_size(),             Action::Nav(N::Sort(SortKey::Size)));
        bind!(keys.sort_modified(),         Action::Nav(N::Sort(SortKey::Modified)));
        bind!(keys.search(),                Action::Nav(N::Search));
        bind!(keys.refresh(),               Action::Nav(N::Refresh));
        bind!(keys.scroll_preview_down(),   Action::Nav(N::ScrollPreviewDown));
        bind!(keys.scroll_preview_up(),     Action::Nav(N::ScrollPreviewUp));

        // SystemActions
        bind!(keys.open_file(),             Action::System(S::OpenEditor));
        bind!(keys.quit(),                  Action::System(S::Quit));

        Keymap { map }
    }

    /// Looks up the action for a given key event
    pub fn lookup(&self, key: KeyEvent) -> Option<Action> {
        let k = Key {
            code: key.code,
            modifiers: key.modifiers,
        };

        if let Some(action) = self.map.get(&k).copied() {
            return Some(action);
        }

        // Terminals disagree on whether typed symbols like `~` or `G` carry SHIFT
        if matches!(key.code, KeyCode::Char(_)) && key.modifiers.contains(KeyModifiers::SHIFT) {
            let k2 = Key {
                code: key.code,
                modifiers: key.modifiers - KeyModifiers::SHIFT,
            };
            return self.map.get(&k2).copied();
        }
        None
    }
}

/// Parses a key string like `"k"`, `"Up"`, `"Ctrl+d"`, `"<c-u>"` or `"Shift+g"`.
pub fn parse_key(s: &str) -> Option<Key> {
    let mut modifiers = KeyModifiers::NONE;
    let mut code: Option<KeyCode> = None;

    // A lone symbol is its own key, even when it is a separator character
    if s.chars().count() == 1 {
        return s.chars().next().map(|c| Key {
            code: KeyCode::Char(c),
            modifiers,
        });
    }

    let is_bracketed = s.starts_with('<') && s.ends_with('>');
    let mut input = s.trim_start_matches('<').trim_end_matches('>').to_string();

    if is_bracketed && input.contains('-') {
        let parts: Vec<&str> = input.split('-').collect();

        for &prefix in parts.iter().take(parts.len().saturating_sub(1)) {
            match prefix.to_lowercase().as_str() {
                "c" | "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "a" | "m" | "alt" => modifiers |= KeyModifiers::ALT,
                "s" | "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }
        input = parts.last()?.to_string();
    }

    let normalized = input.replace('-', "+");
    for part in normalized.split('+') {
        let p_low = part.to_lowercase();
        match p_low.as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "alt" | "meta" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,

            "up" => code = Some(KeyCode::Up),
            "down" => code = Some(KeyCode::Down),
            "left" => code = Some(KeyCode::Left),
            "right" => code = Some(KeyCode::Right),
            "enter" => code = Some(KeyCode::Enter),
            "esc" => code = Some(KeyCode::Esc),
            "backspace" | "back" => code = Some(KeyCode::Backspace),
            "tab" => code = Some(KeyCode::Tab),
            "home" => code = Some(KeyCode::Home),
            "end" => code = Some(KeyCode::End),
            "pageup" | "pgup" => code = Some(KeyCode::PageUp),
            "pagedown" | "pgdn" => code = Some(KeyCode::PageDown),
            "space" | "spc" => code = Some(KeyCode::Char(' ')),

            _ => {
                if part.chars().count() == 1 {
                    let mut c = part.chars().next()?;
                    if modifiers.contains(KeyModifiers::SHIFT) {
                        c = c.to_ascii_uppercase();
                        // `G` is matched as typed, without the modifier
                        modifiers.remove(KeyModifiers::SHIFT);
                    }
                    code = Some(KeyCode::Char(c));
                } else if p_low.starts_with('f')
                    && p_low.len() > 1
                    && p_low[1..].chars().all(|c| c.is_ascii_digit())
                {
                    let n = p_low[1..].parse().ok()?;
                    code = Some(KeyCode::F(n));
                } else if part.is_empty() {
                    continue;
                } else {
                    return None;
                }
            }
        }
    }

    Some(Key {
        code: code?,
        modifiers,
    })
}

fn bind(key_list: &[String], action: Action, map: &mut HashMap<Key, Action>) {
    for k in key_list {
        match parse_key(k) {
            Some(key) => {
                map.insert(key, action);
            }
            None => tracing::warn!(key = %k, ?action, "ignoring unparsable key binding"),
        }
    }
}
