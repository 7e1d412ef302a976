//! Nerd Font icons for listing rows and preview headers.
//!
//! Lookups go from the most specific to the least: symlinks, then well known directory
//! names, then well known file names, then the extension. All keys are lowercase.

use crate::core::FileEntry;

use phf::phf_map;

const DIR_ICON: &str = "\u{f07b}";
const FILE_ICON: &str = "\u{f15b}";
const EXEC_ICON: &str = "\u{f489}";
const LINK_FILE_ICON: &str = "\u{f481}";
const LINK_DIR_ICON: &str = "\u{f482}";

/// File extension to icon mapping
static EXT_ICON_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "go" => "\u{e626}",
    "rs" => "\u{e7a8}",
    "py" => "\u{e606}",
    "js" => "\u{e74e}",
    "mjs" => "\u{e74e}",
    "ts" => "\u{e628}",
    "tsx" => "\u{e7ba}",
    "jsx" => "\u{e7ba}",
    "c" => "\u{e61e}",
    "h" => "\u{f0fd}",
    "cpp" => "\u{e61d}",
    "hpp" => "\u{f0fd}",
    "java" => "\u{e738}",
    "rb" => "\u{e791}",
    "php" => "\u{e73d}",
    "lua" => "\u{e620}",
    "swift" => "\u{e755}",
    "kt" => "\u{e634}",
    "sh" => "\u{e795}",
    "bash" => "\u{e795}",
    "zsh" => "\u{e795}",
    "fish" => "\u{e795}",
    "html" => "\u{e736}",
    "htm" => "\u{e736}",
    "css" => "\u{e749}",
    "scss" => "\u{e749}",
    "vue" => "\u{e6a0}",
    "md" => "\u{f48a}",
    "txt" => "\u{f15c}",
    "log" => "\u{f15c}",
    "json" => "\u{e60b}",
    "toml" => "\u{e615}",
    "yaml" => "\u{e615}",
    "yml" => "\u{e615}",
    "ini" => "\u{e615}",
    "cfg" => "\u{e615}",
    "conf" => "\u{e615}",
    "xml" => "\u{f121}",
    "sql" => "\u{e706}",
    "lock" => "\u{f023}",
    "png" => "\u{f1c5}",
    "jpg" => "\u{f1c5}",
    "jpeg" => "\u{f1c5}",
    "gif" => "\u{f1c5}",
    "bmp" => "\u{f1c5}",
    "webp" => "\u{f1c5}",
    "tif" => "\u{f1c5}",
    "tiff" => "\u{f1c5}",
    "svg" => "\u{f1c5}",
    "ico" => "\u{f1c5}",
    "mp3" => "\u{f1c7}",
    "flac" => "\u{f1c7}",
    "wav" => "\u{f1c7}",
    "ogg" => "\u{f1c7}",
    "mp4" => "\u{f1c8}",
    "mkv" => "\u{f1c8}",
    "avi" => "\u{f1c8}",
    "mov" => "\u{f1c8}",
    "webm" => "\u{f1c8}",
    "zip" => "\u{f1c6}",
    "tar" => "\u{f1c6}",
    "gz" => "\u{f1c6}",
    "xz" => "\u{f1c6}",
    "bz2" => "\u{f1c6}",
    "7z" => "\u{f1c6}",
    "rar" => "\u{f1c6}",
    "pdf" => "\u{f1c1}",
    "doc" => "\u{f1c2}",
    "docx" => "\u{f1c2}",
    "xls" => "\u{f1c3}",
    "xlsx" => "\u{f1c3}",
    "csv" => "\u{f1c3}",
    "ppt" => "\u{f1c4}",
    "pptx" => "\u{f1c4}",
    "exe" => "\u{e70f}",
    "dll" => "\u{e70f}",
    "diff" => "\u{e728}",
    "patch" => "\u{e728}",
};

/// Special file names
static SPECIAL_FILE_ICON_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "dockerfile" => "\u{f308}",
    "docker-compose.yml" => "\u{f308}",
    "docker-compose.yaml" => "\u{f308}",
    "makefile" => "\u{f120}",
    "cmakelists.txt" => "\u{f0ad}",
    "readme" => "\u{f02d}",
    "readme.md" => "\u{f02d}",
    "readme.txt" => "\u{f02d}",
    "license" => "\u{f0e3}",
    "licence" => "\u{f0e3}",
    ".gitignore" => "\u{e702}",
    ".gitconfig" => "\u{e702}",
    "package.json" => "\u{e71e}",
    "cargo.toml" => "\u{e7a8}",
    "cargo.lock" => "\u{f023}",
    "go.mod" => "\u{e626}",
    "go.sum" => "\u{e626}",
    "requirements.txt" => "\u{e606}",
    ".env" => "\u{f462}",
};

/// Special directory names
static SPECIAL_DIR_ICON_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    ".git" => "\u{e5fb}",
    ".github" => "\u{e5fd}",
    ".config" => "\u{e5fc}",
    "node_modules" => "\u{e5fa}",
    "downloads" => "\u{f019}",
    "documents" => "\u{f07c}",
    "pictures" => "\u{f03e}",
    "images" => "\u{f03e}",
    "music" => "\u{f001}",
    "audio" => "\u{f001}",
    "videos" => "\u{f03d}",
    "movies" => "\u{f03d}",
    "desktop" => "\u{f108}",
    "home" => "\u{f015}",
};

/// Icon for `entry`. Every icon is a single column wide.
pub fn nerd_font_icon(entry: &FileEntry) -> &'static str {
    if entry.is_symlink() {
        return if entry.is_dir() {
            LINK_DIR_ICON
        } else {
            LINK_FILE_ICON
        };
    }

    let name = entry.lowercase_name();
    if entry.is_dir() {
        return SPECIAL_DIR_ICON_MAP.get(name).copied().unwrap_or(DIR_ICON);
    }

    if let Some(icon) = SPECIAL_FILE_ICON_MAP.get(name) {
        return icon;
    }

    if let Some(dot_idx) = name.rfind('.')
        && dot_idx > 0
        && dot_idx < name.len() - 1
        && let Some(icon) = EXT_ICON_MAP.get(&name[dot_idx + 1..])
    {
        return icon;
    }

    if entry.is_executable() {
        EXEC_ICON
    } else {
        FILE_ICON
    }
}

/// Icon lookup honoring the `icons` switch of the configuration.
pub fn icon_for(entry: &FileEntry, enabled: bool) -> &'static str {
    if enabled { nerd_font_icon(entry) } else { "" }
}
