//! UI-related tests for bullseye
//!
//! These tests focus on the user interface of the bullseye TUI application,
//! including formatting, layout and whole rendered frames.
//! They ensure that the UI behaves correctly under various conditions.
//!
//! These tests may create temporary directories and files to simulate different UI scenarios.
//! These temporary resources are automatically cleaned up after the tests complete.

use bullseye::app::AppState;
use bullseye::config::Config;
use bullseye::core::{self, Formatter, PreviewContent};
use bullseye::ui::layout::{fit_entry_line, pane_widths};
use bullseye::ui::render_to_text;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::error;
use std::fs;
use tempfile::tempdir;
use unicode_width::UnicodeWidthStr;

fn no_icons() -> Result<Config, Box<dyn error::Error>> {
    Ok(Config::from_toml("[general]\nicons = false\n")?)
}

fn frame(app: &mut AppState, width: u16, height: u16) -> Result<Vec<String>, Box<dyn error::Error>> {
    app.handle_resize(width, height);
    let text = render_to_text(app, width, height)?;
    Ok(text.split('\n').map(str::to_string).collect())
}

#[test]
fn test_ui_sanitization_and_exact_width() {
    let pane_width = 10;

    let cases = vec![
        ("short.txt", 10),
        ("very_long_filename.txt", 10),
        ("🦀_crab.rs", 10),
        ("\t_tab", 10),
    ];

    for (input, expected_width) in cases {
        let result = core::sanitize_to_exact_width(input, pane_width);
        let actual_width = result.width();

        assert_eq!(
            actual_width, expected_width,
            "Failed to produce exact width for input: '{}'. Result was: '{}' (width: {})",
            input, result, actual_width
        );

        assert!(
            !result.chars().any(|c| c.is_control() && c != ' '),
            "Result contains control characters: {:?}",
            result
        );
    }
}

#[test]
fn test_empty_dir_preview_is_sentinel() -> Result<(), Box<dyn error::Error>> {
    let temp_dir = tempdir()?;
    fs::create_dir(temp_dir.path().join("empty"))?;
    fs::write(temp_dir.path().join("empty_file.txt"), b"")?;

    let entries = core::browse_dir(temp_dir.path())?;
    let dir = entries
        .iter()
        .find(|e| e.is_dir())
        .ok_or("empty dir not listed")?;
    assert!(core::browse_dir(&temp_dir.path().join("empty"))?.is_empty());

    let content = core::build_preview(temp_dir.path(), Some(dir), &Formatter::default(), 40, 10);
    assert_eq!(content, PreviewContent::Empty);
    assert_eq!(content.to_lines(&|_| ""), ["No Items"]);
    Ok(())
}

#[test]
fn test_name_truncation_contract() {
    let icon = "\u{f15b}";
    let names = [
        "an_extremely_long_file_name_for_a_narrow_pane.txt",
        "日本語のとても長いファイル名ですね本当に長い.txt",
        "mixed_日本_names_ファイル_with_a_long_tail_for_sure",
    ];

    for name in names {
        for interior in 0..40 {
            let line = fit_entry_line(icon, name, interior);
            if interior <= 1 {
                assert!(line.is_empty(), "interior {interior}: {line:?}");
                continue;
            }
            assert!(line.starts_with(icon));
            assert_eq!(line.width(), interior, "interior {interior}: {line:?}");
            if interior > 1 + 4 {
                assert!(line.ends_with("..."), "interior {interior}: {line:?}");
            } else {
                assert!(!line.ends_with("..."), "interior {interior}: {line:?}");
            }
        }
    }
}

#[test]
fn test_frame_of_scenario_dir() -> Result<(), Box<dyn error::Error>> {
    let tmp = tempdir()?;
    let d = tmp.path().join("d");
    fs::create_dir(&d)?;
    fs::write(d.join("a.txt"), b"0123456789")?;
    fs::create_dir(d.join("B"))?;
    fs::create_dir(d.join(".hidden"))?;

    let config = no_icons()?;
    let mut app = AppState::from_dir(&config, &d);
    let rows = frame(&mut app, 120, 24)?;
    assert_eq!(rows.len(), 24);

    let widths = pane_widths(120);
    let current_x = (widths.parent + 2) as usize;
    let current_col = |row: &str| -> String {
        row.chars()
            .skip(current_x + 1)
            .take(widths.current as usize - 2)
            .collect::<String>()
            .trim_end()
            .to_string()
    };

    assert!(rows[0].contains("d (2 items)"));
    assert_eq!(current_col(&rows[1]), "B");
    assert_eq!(current_col(&rows[2]), "a.txt");

    // the parent pane lists the directory containing `d`, with `d` in it
    assert!(rows[1].chars().take(widths.parent as usize).collect::<String>().contains('d'));

    // B is an empty directory
    assert!(rows.iter().any(|r| r.contains("No Items")));
    assert!(rows[22].contains("Sort: name↑"));
    assert!(rows[22].ends_with("1/2"));

    app.handle_keypress(KeyEvent::new(KeyCode::Char('.'), KeyModifiers::NONE));
    let rows = frame(&mut app, 120, 24)?;
    assert!(rows[0].contains("d (3 items)"));
    assert_eq!(current_col(&rows[1]), ".hidden");
    assert!(rows[22].contains("Hidden: ON"));
    Ok(())
}

#[test]
fn test_status_and_help_in_search_mode() -> Result<(), Box<dyn error::Error>> {
    let tmp = tempdir()?;
    fs::write(tmp.path().join("readme.md"), b"# title\n")?;

    let config = no_icons()?;
    let mut app = AppState::from_dir(&config, tmp.path());
    for c in ['/', 'x', 'y'] {
        app.handle_keypress(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }
    let rows = frame(&mut app, 100, 20)?;

    assert!(rows[18].contains("Search: xy"));
    assert!(rows[19].contains("Type to search | Enter:confirm | Esc:cancel"));

    app.handle_keypress(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    let rows = frame(&mut app, 100, 20)?;
    // nothing matches, so no position
    assert!(rows[18].ends_with("0/0"));
    assert!(rows[19].contains("q:quit | h/l:nav"));
    Ok(())
}

#[test]
fn test_hex_preview_frame() -> Result<(), Box<dyn error::Error>> {
    let tmp = tempdir()?;
    let bytes: Vec<u8> = (0..300u32).map(|i| (i % 256) as u8).collect();
    fs::write(tmp.path().join("blob.bin"), &bytes)?;

    let config = no_icons()?;
    let mut app = AppState::from_dir(&config, tmp.path());
    app.handle_resize(160, 40);

    let PreviewContent::Hex { lines, omitted, .. } = app.preview().content() else {
        panic!("expected a hex preview");
    };
    assert_eq!(lines.len(), 16);
    assert_eq!(*omitted, 44);

    let text = render_to_text(&app, 160, 40)?;
    assert!(text.contains("Binary file - hex preview:"));
    assert!(text.contains("00000000: 00 01 02 03"));
    assert!(text.contains("... (44 more bytes)"));
    Ok(())
}

#[test]
fn test_image_preview_fits_pane() -> Result<(), Box<dyn error::Error>> {
    let tmp = tempdir()?;
    let img = image::RgbImage::from_fn(800, 400, |x, _| image::Rgb([(x % 256) as u8, 0, 0]));
    img.save(tmp.path().join("wide.png"))?;

    let config = no_icons()?;
    let mut app = AppState::from_dir(&config, tmp.path());
    app.handle_resize(120, 30);

    let PreviewContent::Image(rows) = app.preview().content() else {
        panic!("expected an image preview");
    };
    let (avail_w, avail_h) = bullseye::ui::layout::preview_content_size(120, 30);
    assert!(rows.len() <= avail_h);
    assert!(rows.iter().all(|r| r.width() <= avail_w));
    assert_eq!(rows[0].width(), avail_w);
    Ok(())
}

#[test]
fn test_tiny_terminal_renders() -> Result<(), Box<dyn error::Error>> {
    let tmp = tempdir()?;
    fs::write(tmp.path().join("a_file_with_a_long_name.txt"), b"x")?;

    let config = Config::default();
    let mut app = AppState::from_dir(&config, tmp.path());
    for (w, h) in [(1, 1), (10, 3), (30, 5)] {
        let rows = frame(&mut app, w, h)?;
        assert_eq!(rows.len(), h as usize);
    }
    Ok(())
}
