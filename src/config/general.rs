//! The general configuration settings for bullseye.
//!
//! [General] is deserialized from the `[general]` table and provides the initial view
//! rules (hidden files, sort key, direction) and whether icons are drawn.

use crate::core::{Formatter, SortKey};

use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct General {
    show_hidden: bool,
    sort: SortKey,
    reverse: bool,
    icons: bool,
}

impl Default for General {
    fn default() -> Self {
        General {
            show_hidden: false,
            sort: SortKey::Name,
            reverse: false,
            icons: true,
        }
    }
}

impl General {
    #[inline]
    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    #[inline]
    pub fn icons(&self) -> bool {
        self.icons
    }

    /// The view rules the browser starts with.
    pub fn formatter(&self) -> Formatter {
        Formatter::new(self.show_hidden, self.sort, self.reverse)
    }
}
