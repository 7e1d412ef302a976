//! Sorting, filtering, and display formatting for file entries in bullseye.
//!
//! The [Formatter] struct holds the view rules (hidden files, sort key, direction) and
//! turns a raw listing into a snapshot: the filtered, ordered entries one pane shows.
//!
//! Also holds the small formatting helpers used by the panes and the status bar.

use crate::core::error::LoadError;
use crate::core::fm::{FileEntry, browse_dir};

use chrono::{DateTime, Local};
use serde::Deserialize;
use unicode_width::UnicodeWidthChar;

use std::cmp::Ordering;
use std::fs::Metadata;
use std::path::Path;
use std::time::SystemTime;

/// The comparator applied inside the directory and file partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Name,
    Size,
    #[serde(alias = "time")]
    Modified,
}

impl SortKey {
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Size => "size",
            SortKey::Modified => "modified",
        }
    }
}

/// Formatter struct to handle sorting and filtering of file entries
/// based on the active view settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Formatter {
    show_hidden: bool,
    sort_key: SortKey,
    reversed: bool,
}

impl Formatter {
    pub fn new(show_hidden: bool, sort_key: SortKey, reversed: bool) -> Self {
        Self {
            show_hidden,
            sort_key,
            reversed,
        }
    }

    #[inline]
    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    #[inline]
    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    #[inline]
    pub fn reversed(&self) -> bool {
        self.reversed
    }

    pub fn toggle_hidden(&mut self) {
        self.show_hidden = !self.show_hidden;
    }

    /// Selects a sort key. Selecting the active key again flips the direction,
    /// selecting a different key resets it to ascending.
    pub fn select_sort(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.reversed = !self.reversed;
        } else {
            self.sort_key = key;
            self.reversed = false;
        }
    }

    /// Sorts the given file entries in place.
    ///
    /// Directories always come first. The direction only flips the comparison inside each
    /// partition, never the partition itself.
    pub fn sort_entries(&self, entries: &mut [FileEntry]) {
        entries.sort_by(|a, b| match (a.is_dir(), b.is_dir()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => {
                let ord = match self.sort_key {
                    SortKey::Name => a.lowercase_name().cmp(b.lowercase_name()),
                    SortKey::Size => a.size().cmp(&b.size()),
                    SortKey::Modified => a.modified().cmp(&b.modified()),
                };
                if self.reversed { ord.reverse() } else { ord }
            }
        });
    }

    /// Filters the given file entries by the hidden rule and a case-insensitive substring,
    /// then sorts them.
    pub fn filter_entries(&self, mut entries: Vec<FileEntry>, query: &str) -> Vec<FileEntry> {
        // Nothing to drop: keep the listing as is
        if !(self.show_hidden && query.is_empty()) {
            let query = query.to_lowercase();
            entries.retain(|e| {
                let hidden_ok = self.show_hidden || !e.is_hidden();
                hidden_ok && (query.is_empty() || e.lowercase_name().contains(&query))
            });
        }
        self.sort_entries(&mut entries);
        entries
    }

    /// Lists `path` and returns its snapshot under this formatter and the search query.
    pub fn snapshot(&self, path: &Path, query: &str) -> Result<Vec<FileEntry>, LoadError> {
        let entries = browse_dir(path)?;
        Ok(self.filter_entries(entries, query))
    }
}

/// Formats a size the way the status and preview panes show it:
/// plain bytes below 1024, otherwise one decimal in binary units.
///
/// `format_size(1536) == "1.5 KB"`
pub fn format_size(size: u64) -> String {
    const UNIT: u64 = 1024;
    const PREFIXES: &[u8] = b"KMGTPE";

    if size < UNIT {
        return format!("{size} B");
    }
    let mut div = UNIT;
    let mut exp = 0;
    let mut n = size / UNIT;
    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }
    format!(
        "{:.1} {}B",
        size as f64 / div as f64,
        PREFIXES[exp] as char
    )
}

/// Formats the file attributes like Directory, Symlink, and permissions in a unix-like format
///
/// On Unix: Returns a string like 'drwxr-xr-x' etc. for directories and files.
/// On Windows: Returns a short string showing file type and attributes like:
/// (`d`, `l`, `h` for hidden, `s` for system, `a` for archive, `r` for read-only).
pub fn format_attributes(meta: &Metadata) -> String {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let file_type = meta.file_type();
        let first = if file_type.is_dir() {
            'd'
        } else if file_type.is_symlink() {
            'l'
        } else {
            '-'
        };
        let mode = meta.permissions().mode();
        let mut chars = [first, '-', '-', '-', '-', '-', '-', '-', '-', '-'];
        let shifts = [6, 3, 0];
        for (i, &shift) in shifts.iter().enumerate() {
            let base = 1 + i * 3;
            if (mode >> (shift + 2)) & 1u32 != 0 {
                chars[base] = 'r';
            }
            if (mode >> (shift + 1)) & 1u32 != 0 {
                chars[base + 1] = 'w';
            }
            if (mode >> shift) & 1u32 != 0 {
                chars[base + 2] = 'x';
            }
        }
        chars.iter().collect()
    }
    #[cfg(windows)]
    {
        use std::os::windows::fs::MetadataExt;
        let attr = meta.file_attributes();
        let mut out = String::with_capacity(7);
        out.push(if attr & 0x10 != 0 {
            'd'
        } else if attr & 0x400 != 0 {
            'l'
        } else {
            '-'
        });
        out.push(if attr & 0x02 != 0 { 'h' } else { '-' });
        out.push(if attr & 0x04 != 0 { 's' } else { '-' });
        out.push(if attr & 0x20 != 0 { 'a' } else { '-' });
        out.push(if attr & 0x01 != 0 { 'r' } else { '-' });
        out
    }
}

/// Formats the file modification time into a human-readable string.
/// # Returns
/// A string representing the formatted modification time or "-" if unknown.
pub fn format_file_time(modified: Option<SystemTime>) -> String {
    modified
        .map(|mtime| {
            let dt: DateTime<Local> = DateTime::from(mtime);
            dt.format("%Y-%m-%d %H:%M:%S").to_string()
        })
        .unwrap_or_else(|| "-".to_string())
}

/// Clean a line to the width of a pane by removing control characters,
/// expanding tabs to 4 spaces, and truncating or padding the string to fit exactly.
/// Wide glyphs that would straddle the edge are dropped, never split.
pub fn sanitize_to_exact_width(line: &str, pane_width: usize) -> String {
    let mut out = String::with_capacity(pane_width);
    let mut current_w = 0;

    for char in line.chars() {
        if char == '\t' {
            let space_count = 4 - (current_w % 4);
            if current_w + space_count > pane_width {
                break;
            }
            out.push_str(&" ".repeat(space_count));
            current_w += space_count;
            continue;
        }

        if char.is_control() {
            continue;
        }

        let w = char.width().unwrap_or(0);
        if current_w + w > pane_width {
            break;
        }

        out.push(char);
        current_w += w;
    }

    if current_w < pane_width {
        out.push_str(&" ".repeat(pane_width - current_w));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::time::{Duration, UNIX_EPOCH};

    fn file(name: &str, size: u64, secs: u64) -> FileEntry {
        FileEntry::new(OsString::from(name), 0).with_meta(
            size,
            Some(UNIX_EPOCH + Duration::from_secs(secs)),
            "-rw-r--r--",
        )
    }

    fn dir(name: &str) -> FileEntry {
        FileEntry::new(OsString::from(name), FileEntry::IS_DIR)
    }

    fn names(entries: &[FileEntry]) -> Vec<String> {
        entries.iter().map(|e| e.name_str().into_owned()).collect()
    }

    #[test]
    fn format_size_boundaries() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1024 * 1024), "1.0 MB");
        assert_eq!(format_size(5 * 1024 * 1024 * 1024), "5.0 GB");
    }

    #[test]
    fn dirs_first_for_every_key_and_direction() {
        let entries = vec![
            file("b.txt", 30, 3),
            dir("zeta"),
            file("A.txt", 10, 1),
            dir("Alpha"),
            file("c.txt", 20, 2),
        ];
        for key in [SortKey::Name, SortKey::Size, SortKey::Modified] {
            for reversed in [false, true] {
                let fmt = Formatter::new(true, key, reversed);
                let sorted = fmt.filter_entries(entries.clone(), "");
                assert!(sorted[0].is_dir() && sorted[1].is_dir(), "{key:?} {reversed}");
                assert!(sorted[2..].iter().all(|e| !e.is_dir()), "{key:?} {reversed}");
            }
        }
    }

    #[test]
    fn sort_keys_and_reverse() {
        let entries = vec![file("b.txt", 30, 1), file("A.txt", 10, 3), file("c.txt", 20, 2)];

        let by_name = Formatter::new(true, SortKey::Name, false).filter_entries(entries.clone(), "");
        assert_eq!(names(&by_name), ["A.txt", "b.txt", "c.txt"]);

        let by_size = Formatter::new(true, SortKey::Size, false).filter_entries(entries.clone(), "");
        assert_eq!(names(&by_size), ["A.txt", "c.txt", "b.txt"]);

        let by_time =
            Formatter::new(true, SortKey::Modified, true).filter_entries(entries.clone(), "");
        assert_eq!(names(&by_time), ["A.txt", "c.txt", "b.txt"]);

        let by_name_rev = Formatter::new(true, SortKey::Name, true).filter_entries(entries, "");
        assert_eq!(names(&by_name_rev), ["c.txt", "b.txt", "A.txt"]);
    }

    #[test]
    fn hidden_and_query_filtering() {
        let entries = vec![
            file("a.txt", 10, 1),
            dir("B"),
            dir(".hidden"),
            file(".env", 1, 1),
        ];

        let hidden_off = Formatter::new(false, SortKey::Name, false);
        assert_eq!(names(&hidden_off.filter_entries(entries.clone(), "")), ["B", "a.txt"]);

        let hidden_on = Formatter::new(true, SortKey::Name, false);
        assert_eq!(
            names(&hidden_on.filter_entries(entries.clone(), "")),
            [".hidden", "B", ".env", "a.txt"]
        );

        assert_eq!(
            names(&hidden_on.filter_entries(entries.clone(), "EN")),
            [".hidden", ".env"]
        );
        assert_eq!(names(&hidden_on.filter_entries(entries.clone(), "txt")), ["a.txt"]);
        assert_eq!(names(&hidden_off.filter_entries(entries.clone(), "EN")), Vec::<String>::new());
        assert!(hidden_on.filter_entries(entries, "nothing-like-this").is_empty());
    }

    #[test]
    fn select_sort_flips_only_same_key() {
        let mut fmt = Formatter::default();
        fmt.select_sort(SortKey::Name);
        assert!(fmt.reversed());
        fmt.select_sort(SortKey::Size);
        assert_eq!(fmt.sort_key(), SortKey::Size);
        assert!(!fmt.reversed());
        fmt.select_sort(SortKey::Size);
        assert!(fmt.reversed());
    }

    #[test]
    fn sanitization_and_exact_width() {
        let pane_width = 10;

        let cases = vec![
            ("short.txt", 10),
            ("very_long_filename.txt", 10),
            ("🦀_crab.rs", 10),
            ("\t_tab", 10),
            ("ab🦀🦀🦀🦀", 10),
        ];

        for (input, expected_width) in cases {
            let result = sanitize_to_exact_width(input, pane_width);
            let actual_width = unicode_width::UnicodeWidthStr::width(result.as_str());

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
}
