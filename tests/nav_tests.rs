//! Navigation tests for bullseye
//!
//! These tests drive the navigation state machine and the key handling of [AppState]
//! through the public library API, over temporary directory trees.
//! They check the invariants that must survive any sequence of inputs.

use bullseye::app::{AppState, KeypressResult, Mode, NavAction, NavEvent, NavState, SearchInput};
use bullseye::config::Config;
use bullseye::core::{Formatter, SortKey};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::error;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn names(state: &NavState) -> Vec<String> {
    state
        .entries()
        .iter()
        .map(|e| e.name_str().into_owned())
        .collect()
}

fn open(dir: &Path, view: Formatter) -> NavState {
    NavState::new(dir.to_path_buf(), view).apply(NavEvent::Resize {
        width: 100,
        height: 12,
    })
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn check_invariants(state: &NavState) {
    let len = state.entries().len();
    if len == 0 {
        assert_eq!(state.cursor(), 0);
        assert_eq!(state.list_offset(), 0);
    } else {
        assert!(state.cursor() < len, "cursor {} of {len}", state.cursor());
        assert!(state.list_offset() <= state.cursor());
        assert!(state.cursor() < state.list_offset() + state.visible_rows());
    }
    if let (Some(idx), entries) = (state.parent_cursor(), state.parent().entries()) {
        assert!(idx < entries.len());
    }
}

#[test]
fn test_scenario_hidden_toggle_order() -> Result<(), Box<dyn error::Error>> {
    let tmp = tempdir()?;
    let d = tmp.path().join("d");
    fs::create_dir(&d)?;
    fs::write(d.join("a.txt"), b"0123456789")?;
    fs::create_dir(d.join("B"))?;
    fs::create_dir(d.join(".hidden"))?;

    let state = open(&d, Formatter::new(false, SortKey::Name, false));
    assert_eq!(names(&state), ["B", "a.txt"]);

    let state = state.apply(NavEvent::Action(NavAction::ToggleHidden));
    assert_eq!(names(&state), [".hidden", "B", "a.txt"]);

    let state = state.apply(NavEvent::Action(NavAction::ToggleHidden));
    assert_eq!(names(&state), ["B", "a.txt"]);
    Ok(())
}

#[test]
fn test_dirs_first_for_every_sort() -> Result<(), Box<dyn error::Error>> {
    let tmp = tempdir()?;
    let mut rng = StdRng::seed_from_u64(7);

    let mut specs: Vec<(String, bool, usize)> = (0..12)
        .map(|i| (format!("entry{i:02}"), i % 3 == 0, rng.random_range(0..4096)))
        .collect();
    specs.shuffle(&mut rng);
    for (name, is_dir, size) in &specs {
        let path = tmp.path().join(name);
        if *is_dir {
            fs::create_dir(&path)?;
        } else {
            fs::write(&path, vec![b'x'; *size])?;
        }
    }

    for sort in [SortKey::Name, SortKey::Size, SortKey::Modified] {
        for reversed in [false, true] {
            let state = open(tmp.path(), Formatter::new(false, sort, reversed));
            let first_file = state
                .entries()
                .iter()
                .position(|e| !e.is_dir())
                .unwrap_or(state.entries().len());
            assert!(
                state.entries()[first_file..].iter().all(|e| !e.is_dir()),
                "{sort:?} reversed={reversed}"
            );
            assert_eq!(first_file, 4);
        }
    }
    Ok(())
}

#[test]
fn test_missing_substring_yields_empty_snapshot() -> Result<(), Box<dyn error::Error>> {
    let tmp = tempdir()?;
    fs::write(tmp.path().join("alpha"), b"")?;
    fs::write(tmp.path().join("beta"), b"")?;

    let mut state = open(tmp.path(), Formatter::default());
    state = state.apply(NavEvent::Action(NavAction::Search));
    for c in "zzz".chars() {
        state = state.apply(NavEvent::Search(SearchInput::Char(c)));
    }
    assert!(state.entries().is_empty());
    assert!(state.load_error().is_none());
    check_invariants(&state);

    state = state.apply(NavEvent::Search(SearchInput::Confirm));
    assert_eq!(state.mode(), Mode::Normal);
    // movement on an empty snapshot keeps a valid state
    for action in [NavAction::MoveDown, NavAction::Bottom, NavAction::PageUp] {
        state = state.apply(NavEvent::Action(action));
        check_invariants(&state);
    }
    Ok(())
}

#[test]
fn test_random_walk_keeps_invariants() -> Result<(), Box<dyn error::Error>> {
    let tmp = tempdir()?;
    let root = tmp.path().canonicalize()?;
    for d in ["one", "two", ".three"] {
        fs::create_dir(root.join(d))?;
        for i in 0..15 {
            fs::write(root.join(d).join(format!("f{i}.txt")), vec![b'a'; i])?;
        }
    }
    fs::create_dir(root.join("one").join("deeper"))?;
    for i in 0..25 {
        fs::write(root.join(format!("top{i}.rs")), b"fn main() {}")?;
    }

    let actions = [
        NavAction::MoveUp,
        NavAction::MoveDown,
        NavAction::PageUp,
        NavAction::PageDown,
        NavAction::Top,
        NavAction::Bottom,
        NavAction::Descend,
        NavAction::Ascend,
        NavAction::ToggleHidden,
        NavAction::Sort(SortKey::Name),
        NavAction::Sort(SortKey::Size),
        NavAction::Sort(SortKey::Modified),
        NavAction::Refresh,
        NavAction::ScrollPreviewDown,
    ];

    let mut rng = StdRng::seed_from_u64(42);
    let mut state = open(&root, Formatter::default());

    for _ in 0..500 {
        let event = match rng.random_range(0..10) {
            0 => NavEvent::Resize {
                width: rng.random_range(10..200),
                height: rng.random_range(0..60),
            },
            1 if state.mode() == Mode::Normal => NavEvent::Action(NavAction::Search),
            1 | 2 if state.mode() == Mode::SearchEntry => {
                let inputs = [
                    SearchInput::Char('f'),
                    SearchInput::Char('1'),
                    SearchInput::Backspace,
                    SearchInput::Confirm,
                    SearchInput::Cancel,
                ];
                NavEvent::Search(inputs[rng.random_range(0..inputs.len())])
            }
            _ => {
                let action = actions[rng.random_range(0..actions.len())];
                // stay inside the sandbox
                if action == NavAction::Ascend && state.current_dir() == root {
                    continue;
                }
                NavEvent::Action(action)
            }
        };
        state = state.apply(event);
        check_invariants(&state);
        assert!(state.current_dir().starts_with(&root));
    }
    Ok(())
}

#[test]
fn test_descend_ascend_round_trip() -> Result<(), Box<dyn error::Error>> {
    let tmp = tempdir()?;
    for d in ["a", "b", "c", "d"] {
        fs::create_dir(tmp.path().join(d))?;
        fs::write(tmp.path().join(d).join("inner.txt"), b"x")?;
    }

    let mut state = open(tmp.path(), Formatter::default());
    for expected in 0..4 {
        while state.cursor() < expected {
            state = state.apply(NavEvent::Action(NavAction::MoveDown));
        }
        state = state.apply(NavEvent::Action(NavAction::Descend));
        assert_eq!(names(&state), ["inner.txt"]);
        assert_eq!(state.parent_cursor(), Some(expected));

        state = state.apply(NavEvent::Action(NavAction::Ascend));
        assert_eq!(state.cursor(), expected);
    }
    Ok(())
}

#[test]
fn test_keys_drive_app() -> Result<(), Box<dyn error::Error>> {
    let tmp = tempdir()?;
    for i in 0..40 {
        fs::write(tmp.path().join(format!("file{i:02}.txt")), b"x")?;
    }
    let config = Config::default();
    let mut app = AppState::from_dir(&config, tmp.path());
    app.handle_resize(100, 14);

    assert_eq!(app.handle_keypress(key(KeyCode::Char('G'))), KeypressResult::Consumed);
    assert_eq!(app.nav().cursor(), 39);
    assert_eq!(app.nav().list_offset(), 30);

    app.handle_keypress(key(KeyCode::Char('g')));
    assert_eq!(app.nav().cursor(), 0);

    app.handle_keypress(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL));
    assert_eq!(app.nav().cursor(), 5);

    // unbound keys fall through
    assert_eq!(app.handle_keypress(key(KeyCode::Char('z'))), KeypressResult::Continue);
    assert_eq!(
        app.handle_keypress(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        KeypressResult::Quit
    );
    Ok(())
}

#[test]
fn test_preview_scroll_is_clamped() -> Result<(), Box<dyn error::Error>> {
    let tmp = tempdir()?;
    fs::write(tmp.path().join("short.txt"), b"one\ntwo\n")?;
    let config = Config::default();
    let mut app = AppState::from_dir(&config, tmp.path());
    app.handle_resize(100, 20);

    let lines = app.preview().line_count();
    for _ in 0..50 {
        app.handle_keypress(key(KeyCode::Char('J')));
    }
    assert_eq!(app.nav().preview_offset(), lines - 1);

    app.handle_keypress(key(KeyCode::Char('K')));
    assert_eq!(app.nav().preview_offset(), lines - 2);
    Ok(())
}

#[test]
fn test_sort_change_keeps_index() -> Result<(), Box<dyn error::Error>> {
    let tmp = tempdir()?;
    fs::write(tmp.path().join("a_big"), vec![0u8; 300])?;
    fs::write(tmp.path().join("b_small"), vec![0u8; 10])?;
    fs::write(tmp.path().join("c_mid"), vec![0u8; 100])?;

    let mut state = open(tmp.path(), Formatter::default());
    state = state.apply(NavEvent::Action(NavAction::MoveDown));
    assert_eq!(state.selected_entry().map(|e| e.name_str().into_owned()), Some("b_small".into()));

    state = state.apply(NavEvent::Action(NavAction::Sort(SortKey::Size)));
    assert_eq!(names(&state), ["b_small", "c_mid", "a_big"]);
    // selection follows the index, not the entry
    assert_eq!(state.cursor(), 1);
    assert_eq!(state.selected_entry().map(|e| e.name_str().into_owned()), Some("c_mid".into()));

    state = state.apply(NavEvent::Action(NavAction::Sort(SortKey::Size)));
    assert!(state.view().reversed());
    assert_eq!(names(&state), ["a_big", "c_mid", "b_small"]);
    Ok(())
}
