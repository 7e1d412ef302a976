//! The preview pipeline for bullseye.
//!
//! [build_preview] classifies the selected entry once and returns a [PreviewContent]:
//! a bounded sub-listing for directories, a text dump, a hex dump for binary content,
//! or a character-art rendering of an image. Every read here is bounded except the
//! directory listing and the image decode.

use crate::core::error::{LoadError, PreviewError};
use crate::core::fm::{FileEntry, read_head};
use crate::core::formatter::{Formatter, format_file_time, format_size};

use image::imageops::FilterType;
use image::{DynamicImage, ImageReader};
use phf::phf_set;

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Maximum entries listed in a directory preview
pub const DIR_PREVIEW_CAP: usize = 100;
/// Maximum bytes read from a file for the text and hex previews
pub const TEXT_READ_LIMIT: u64 = 64 * 1024;
/// Maximum lines kept in a text preview
pub const TEXT_LINE_LIMIT: usize = 500;
/// Bytes shown by the hex dump
pub const HEX_DUMP_LIMIT: usize = 256;
pub const HEX_BYTES_PER_LINE: usize = 16;
/// Bytes sampled by the text heuristic
const SNIFF_BYTES: usize = 512;
/// Width over height of one terminal cell
const CHAR_ASPECT: f64 = 0.55;
/// Dark to bright
const LUMA_RAMP: &[u8] = b" .:-=+*#%@";

pub const TRUNCATED_MARKER: &str = "... (file truncated for preview)";

static IMAGE_EXTENSIONS: phf::Set<&'static str> = phf_set! {
    "jpg", "jpeg", "png", "bmp", "gif", "tif", "tiff", "webp",
};

static TEXT_EXTENSIONS: phf::Set<&'static str> = phf_set! {
    // Programming languages
    "txt", "go", "py", "js", "ts", "jsx", "tsx", "html", "htm", "css", "scss", "sass", "less",
    "php", "rb", "java", "c", "cpp", "cc", "cxx", "h", "hpp", "cs", "rs", "swift", "kt",
    "scala", "clj", "cljs", "hs", "elm", "lua", "r", "sql", "sh", "bash", "zsh", "fish",
    "ps1", "bat", "cmd", "vim", "pl", "pm", "awk", "sed",
    // Markup and configuration
    "md", "markdown", "json", "yaml", "yml", "toml", "xml", "csv", "ini", "cfg", "conf",
    "env", "gitignore", "gitconfig", "gitattributes", "gitmodules", "editorconfig",
    "prettierrc", "eslintrc", "babelrc", "npmrc", "yarnrc",
    // Documentation
    "rst", "org", "tex", "bib", "man", "1", "2", "3", "4", "5", "6", "7", "8", "9",
    "readme", "changelog", "authors", "contributors", "copying", "license", "licence",
    "todo", "fixme", "bugs", "news", "thanks", "install",
    // Web
    "vue", "svelte", "astro", "styl", "stylus", "postcss",
    // Data
    "tsv", "psv", "dsv", "ndjson", "jsonl", "geojson", "topojson",
    // Logs and scratch files
    "log", "out", "err", "tmp", "temp", "bak", "backup", "orig", "swp", "swo",
    // Keys and certificates
    "pub", "pem", "key", "crt", "cer", "p12", "pfx", "jks",
};

static TEXT_NAMES: phf::Set<&'static str> = phf_set! {
    "dockerfile", "makefile", "cmakelists.txt", "vagrantfile", "gemfile", "rakefile",
    "package.json", "composer.json", "cargo.toml", "pyproject.toml", "poetry.lock",
    "requirements.txt", "pipfile", "pipfile.lock", "go.mod", "go.sum",
};

/// Renderable content of the preview pane.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PreviewContent {
    /// Sub-listing of a directory. `remaining` counts the entries past the cap.
    Directory {
        entries: Vec<FileEntry>,
        remaining: usize,
    },
    Text {
        file: FileEntry,
        lines: Vec<String>,
        truncated: bool,
    },
    Hex {
        file: FileEntry,
        lines: Vec<String>,
        omitted: u64,
    },
    Image(Vec<String>),
    Error(String),
    /// Nothing selected, or an empty directory.
    #[default]
    Empty,
}

impl PreviewContent {
    /// The marker closing the content, if it was bounded.
    pub fn footer(&self) -> Option<String> {
        match self {
            PreviewContent::Directory { remaining, .. } if *remaining > 0 => {
                Some(format!("... and {remaining} more"))
            }
            PreviewContent::Text {
                truncated: true, ..
            } => Some(TRUNCATED_MARKER.to_string()),
            PreviewContent::Hex { omitted, .. } if *omitted > 0 => {
                Some(format!("... ({omitted} more bytes)"))
            }
            _ => None,
        }
    }

    /// Flattens the content into display lines.
    ///
    /// `icon_of` supplies the glyph shown before entry names, so the core stays
    /// independent of the icon tables.
    pub fn to_lines(&self, icon_of: &dyn Fn(&FileEntry) -> &'static str) -> Vec<String> {
        let with_icon = |e: &FileEntry| {
            let icon = icon_of(e);
            if icon.is_empty() {
                e.name_str().into_owned()
            } else {
                format!("{icon} {}", e.name_str())
            }
        };

        let mut out = match self {
            PreviewContent::Directory { entries, .. } => entries.iter().map(with_icon).collect(),
            PreviewContent::Text { file, lines, .. } => {
                let mut out = summary_lines(&with_icon(file), file);
                if lines.is_empty() {
                    out.push("(empty file)".to_string());
                } else {
                    out.extend(lines.iter().cloned());
                }
                out
            }
            PreviewContent::Hex { file, lines, .. } => {
                let mut out = summary_lines(&with_icon(file), file);
                out.push("Binary file - hex preview:".to_string());
                out.push(String::new());
                out.extend(lines.iter().cloned());
                out
            }
            PreviewContent::Image(rows) => rows.clone(),
            PreviewContent::Error(msg) => vec![format!("Error: {msg}")],
            PreviewContent::Empty => vec!["No Items".to_string()],
        };

        if let Some(footer) = self.footer() {
            if !matches!(self, PreviewContent::Directory { .. }) {
                out.push(String::new());
            }
            out.push(footer);
        }
        out
    }

    /// Number of display lines, used to clamp the preview scroll offset.
    pub fn line_count(&self) -> usize {
        self.to_lines(&|_| "").len()
    }
}

fn summary_lines(title: &str, file: &FileEntry) -> Vec<String> {
    vec![
        title.to_string(),
        format!("Size: {}", format_size(file.size())),
        format!("Modified: {}", format_file_time(file.modified())),
        format!("Mode: {}", file.permissions()),
        String::new(),
    ]
}

/// Builds the preview for `entry`, listed inside `dir`, for a content area of
/// `width` x `height` cells.
///
/// Never fails: read errors become [PreviewContent::Error] and image decode errors fall
/// back to the hex dump.
pub fn build_preview(
    dir: &Path,
    entry: Option<&FileEntry>,
    formatter: &Formatter,
    width: usize,
    height: usize,
) -> PreviewContent {
    let Some(entry) = entry else {
        return PreviewContent::Empty;
    };
    let path = dir.join(entry.name());

    if entry.is_dir() {
        return preview_directory(&path, formatter);
    }

    match fs::metadata(&path) {
        Ok(md) if !md.is_file() => return PreviewContent::Error("Not a regular file".into()),
        Ok(_) => {}
        Err(e) => return PreviewContent::Error(LoadError::io(&path, e).short_message()),
    }

    if is_image_name(entry.lowercase_name()) {
        match load_image(&path) {
            Ok(img) => {
                let (w, h) = fit_image_cells(img.width(), img.height(), width, height);
                tracing::debug!(path = %path.display(), w, h, "image preview");
                return PreviewContent::Image(image_to_ascii(&img, w, h));
            }
            Err(PreviewError::Decode(e)) => {
                tracing::debug!(path = %path.display(), error = %e, "image decode failed, using hex dump");
            }
            Err(PreviewError::Load(e)) => {
                tracing::warn!(error = %e, "image open failed");
                return PreviewContent::Error(e.short_message());
            }
        }
    }

    preview_file(&path, entry)
}

fn preview_directory(path: &Path, formatter: &Formatter) -> PreviewContent {
    match formatter.snapshot(path, "") {
        Ok(entries) if entries.is_empty() => PreviewContent::Empty,
        Ok(mut entries) => {
            let remaining = entries.len().saturating_sub(DIR_PREVIEW_CAP);
            entries.truncate(DIR_PREVIEW_CAP);
            PreviewContent::Directory { entries, remaining }
        }
        Err(e) => {
            tracing::warn!(error = %e, "directory preview failed");
            PreviewContent::Error(e.short_message())
        }
    }
}

fn preview_file(path: &Path, entry: &FileEntry) -> PreviewContent {
    let (bytes, total) = match read_head(path, TEXT_READ_LIMIT) {
        Ok(head) => head,
        Err(e) => {
            tracing::warn!(error = %e, "file preview failed");
            return PreviewContent::Error(e.short_message());
        }
    };

    if is_known_text_name(entry.lowercase_name()) || looks_like_text(&bytes) {
        let text = String::from_utf8_lossy(&bytes);
        let mut lines: Vec<String> = text.lines().map(str::to_owned).collect();
        let mut truncated = total > bytes.len() as u64;
        if lines.len() > TEXT_LINE_LIMIT {
            lines.truncate(TEXT_LINE_LIMIT);
            truncated = true;
        }
        return PreviewContent::Text {
            file: entry.clone(),
            lines,
            truncated,
        };
    }

    let shown = bytes.len().min(HEX_DUMP_LIMIT);
    PreviewContent::Hex {
        file: entry.clone(),
        lines: hex_dump(&bytes[..shown]),
        omitted: total.saturating_sub(shown as u64),
    }
}

fn load_image(path: &Path) -> Result<DynamicImage, PreviewError> {
    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| LoadError::io(path, e))?;
    Ok(reader.decode()?)
}

/// Whether a lowercased name has one of the decodable image extensions.
pub fn is_image_name(lowercase_name: &str) -> bool {
    Path::new(lowercase_name)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(ext))
}

/// Whether a lowercased name is known to be text by its extension or full name.
pub fn is_known_text_name(lowercase_name: &str) -> bool {
    if TEXT_NAMES.contains(lowercase_name) {
        return true;
    }
    // Dotfiles like `.gitignore` have no extension, only a name
    if let Some(bare) = lowercase_name.strip_prefix('.')
        && TEXT_EXTENSIONS.contains(bare)
    {
        return true;
    }
    Path::new(lowercase_name)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| TEXT_EXTENSIONS.contains(ext))
}

/// Content heuristic over the first 512 bytes.
///
/// Binary when more than 1% are null bytes, text when more than 95% are printable ASCII
/// or tab, CR, LF. Empty content counts as text.
pub fn looks_like_text(content: &[u8]) -> bool {
    if content.is_empty() {
        return true;
    }
    let sample = &content[..content.len().min(SNIFF_BYTES)];
    let len = sample.len() as f64;

    let nulls = sample.iter().filter(|&&b| b == 0).count();
    if nulls as f64 / len > 0.01 {
        return false;
    }

    let printable = sample
        .iter()
        .filter(|&&b| (32..=126).contains(&b) || matches!(b, b'\t' | b'\n' | b'\r'))
        .count();
    printable as f64 / len > 0.95
}

/// Formats bytes as `00000000: xx xx ..  |ascii|` lines, 16 bytes per line.
pub fn hex_dump(bytes: &[u8]) -> Vec<String> {
    bytes
        .chunks(HEX_BYTES_PER_LINE)
        .enumerate()
        .map(|(i, chunk)| {
            let mut line = String::with_capacity(80);
            let _ = write!(line, "{:08x}: ", i * HEX_BYTES_PER_LINE);
            for b in chunk {
                let _ = write!(line, "{b:02x} ");
            }
            line.push_str(&"   ".repeat(HEX_BYTES_PER_LINE - chunk.len()));
            line.push_str(" |");
            line.extend(chunk.iter().map(|&b| {
                if (32..=126).contains(&b) {
                    b as char
                } else {
                    '.'
                }
            }));
            line.push('|');
            line
        })
        .collect()
}

/// Picks the character grid an image is drawn into.
///
/// The image aspect is corrected for cells being taller than wide, then compared to the
/// area's aspect: a visually wider image is bound by width, otherwise by height.
/// Both results are at least 1.
pub fn fit_image_cells(img_w: u32, img_h: u32, avail_w: usize, avail_h: usize) -> (u32, u32) {
    let avail_w = avail_w.max(1) as f64;
    let avail_h = avail_h.max(1) as f64;
    let image_aspect = (img_w.max(1) as f64 / img_h.max(1) as f64) / CHAR_ASPECT;
    let area_aspect = avail_w / avail_h;

    let (w, h) = if image_aspect > area_aspect {
        (avail_w, (avail_w / image_aspect).floor())
    } else {
        ((avail_h * image_aspect).floor(), avail_h)
    };
    ((w as u32).max(1), (h as u32).max(1))
}

/// Rescales an image to `width` x `height` cells and maps luminance onto a character ramp.
pub fn image_to_ascii(img: &DynamicImage, width: u32, height: u32) -> Vec<String> {
    let gray = img
        .resize_exact(width.max(1), height.max(1), FilterType::Triangle)
        .to_luma8();
    let top = LUMA_RAMP.len() - 1;

    gray.rows()
        .map(|row| {
            row.map(|px| LUMA_RAMP[px.0[0] as usize * top / 255] as char)
                .collect()
        })
        .collect()
}
