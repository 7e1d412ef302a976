//! Command-line argument parsing and help for bullseye.
//!
//! This module handles all CLI flag parsing used for config initialization and help.
//!
//! When invoked with no args/flags (bullseye), bullseye simply browses the working directory.

use crate::config::Config;

#[derive(Debug, PartialEq, Eq)]
pub enum CliAction {
    RunApp,
    RunAppAtPath(String),
    Exit,
}

/// What the command line asked for, before anything is printed or written.
#[derive(Debug, PartialEq, Eq)]
enum CliRequest {
    Run(Option<String>),
    Version,
    Help,
    ConfigHelp,
    Keybinds,
    Init,
    Invalid(String),
}

fn parse_args(args: &[String]) -> CliRequest {
    match args {
        [] => CliRequest::Run(None),
        [arg] => match arg.as_str() {
            "--version" | "-v" => CliRequest::Version,
            "-h" | "--help" => CliRequest::Help,
            "--config-help" => CliRequest::ConfigHelp,
            "--keybinds" => CliRequest::Keybinds,
            "--init" => CliRequest::Init,
            a if !a.starts_with('-') && !a.trim().is_empty() => CliRequest::Run(Some(a.to_string())),
            a => CliRequest::Invalid(format!("Unknown argument: {a}")),
        },
        _ => CliRequest::Invalid("bullseye accepts only one argument at a time.".to_string()),
    }
}

/// Parses the process arguments, handles the informational flags and tells the caller
/// whether to start the browser.
pub fn handle_args() -> CliAction {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match parse_args(&args) {
        CliRequest::Run(None) => CliAction::RunApp,
        CliRequest::Run(Some(path)) => CliAction::RunAppAtPath(path),
        CliRequest::Version => {
            println!("bullseye {}", env!("CARGO_PKG_VERSION"));
            CliAction::Exit
        }
        CliRequest::Help => {
            print_help();
            CliAction::Exit
        }
        CliRequest::ConfigHelp => {
            println!("{CONFIG_HELP_TEXT}");
            CliAction::Exit
        }
        CliRequest::Keybinds => {
            println!("{KEYBINDS_TEXT}");
            CliAction::Exit
        }
        CliRequest::Init => {
            if let Err(e) = Config::generate_default(&Config::default_path()) {
                eprintln!("Error: {e}");
            }
            CliAction::Exit
        }
        CliRequest::Invalid(msg) => {
            eprintln!("Error: {msg}");
            eprintln!("Usage: bullseye [PATH] or bullseye [OPTION]");
            eprintln!("Try --help for available options");
            CliAction::Exit
        }
    }
}

fn print_help() {
    println!(
        r#"bullseye - A three-pane terminal file browser with live previews

USAGE:
  bullseye [PATH]

PATH:
  Directory to open (defaults to current directory)

OPTIONS:
      --init              Generate a default configuration file
      --config-help       Display all the configuration options
      --keybinds          Display all the default keybinds
  -h, --help              Print help information
  -v, --version           Display the current installed version of bullseye

ENVIRONMENT:
  BULLSEYE_CONFIG         Override the default config path
  BULLSEYE_LOG            Log filter, e.g. "debug" (default: "warn")
  EDITOR                  Editor used to open files when [editor] cmd is unset
"#
    );
}

const KEYBINDS_TEXT: &str = r##"
=========================
 Key Bindings
=========================
[keys]
  move_up                   ["k", "Up"]
  move_down                 ["j", "Down"]
  page_up                   ["Ctrl+u", "PageUp"]
  page_down                 ["Ctrl+d", "PageDown"]
  go_to_top                 ["g", "Home"]
  go_to_bottom              ["G", "End"]
  go_into_dir               ["l", "Right", "Enter"]
  go_parent                 ["h", "Left", "Backspace"]
  go_to_home                ["~"]
  toggle_hidden             ["."]
  sort_name                 ["n"]     (again to reverse)
  sort_size                 ["s"]     (again to reverse)
  sort_modified             ["t"]     (again to reverse)
  search                    ["/"]
  refresh                   ["r"]
  open_file                 ["o"]
  scroll_preview_down       ["J"]
  scroll_preview_up         ["K"]
  quit                      ["q", "Ctrl+c"]

  While searching:
    type to filter, Backspace to delete, Enter to confirm, Esc or Ctrl+c to cancel

  Syntax Reference:
    Modifiers: <c-x> (Ctrl), <m-x>/<a-x> (Alt/Meta), <s-x> (Shift)
    Standard:  ctrl+x, alt+x, shift+x, meta+x
    Special:   "Enter", "Esc", "Tab", "Backspace", "Up", "Down", "Left", "Right",
               "Home", "End", "PageUp", "PageDown", "space"
"##;

const CONFIG_HELP_TEXT: &str = r##"
bullseye - Configuration Guide (config.toml)

=========================
 General Settings
=========================
[general]
  show_hidden                Show hidden files (dotfiles) [default: false]
  sort                       "name", "size" or "modified" [default: "name"]
  reverse                    Reverse the sort order [default: false]
  icons                      Show Nerd Font icons [default: true]

=========================
 Theme Configuration
=========================
[theme]
Each role takes a color name ("blue", "darkgrey"), hex "#RRGGBB"/"#RGB" or an
ANSI-256 index ("240"). Unset or invalid roles use the default.

  border                     Pane borders [default: 240]
  status_bg                  Status bar background [default: 235]
  status_fg                  Status bar text [default: 255]
  dir                        Directories [default: 33]
  hidden                     Hidden entries [default: 244]
  executable                 Executables [default: 46]
  default_fg                 Everything else [default: 252]
  preview_bg                 Preview pane background [default: 234]
  preview_border             Preview pane border [default: 240]
  selected_hover_bg          Background of the selected row [default: 0]
  symlink                    Symlink icons [default: 14]

=========================
 Editor
=========================
[editor]
  cmd                        Command to open files (e.g. "nvim", "hx") [default: $EDITOR or "nvim"]

=========================
 Keys
=========================
[keys]
  A list of keys per action, see --keybinds.
"##;
