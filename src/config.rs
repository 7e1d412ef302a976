//! Configuration for bullseye.
//!
//! [load] reads `config.toml` into [Config]; the other modules hold one table each:
//! [general] for the initial view, [theme] for role colors and [input] for keys and
//! the editor command. Everything falls back to built-in defaults.

pub mod general;
pub mod input;
pub mod load;
pub mod theme;

pub use general::General;
pub use input::{Editor, Keys};
pub use load::{Config, RawConfig};
pub use theme::Theme;
