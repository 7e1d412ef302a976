//! File and directory reading for bullseye.
//!
//! Provides the [FileEntry] struct which is used throughout bullseye, the
//! [browse_dir] listing function and the bounded [read_head] file reader.
//! Nothing in here writes to the filesystem.

use crate::core::error::LoadError;
use crate::core::formatter::format_attributes;

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;
use std::time::SystemTime;

/// Represents a single entry in a directory listing.
///
/// Entries are built wholesale on every directory load and never mutated afterwards.
/// The name never contains a path separator, the entry is always resolved against the
/// directory it was listed from.
#[derive(Debug, Clone, PartialEq)]
pub struct FileEntry {
    name: Box<OsStr>,
    lowercase_name: Box<str>,
    flags: u8,
    size: u64,
    modified: Option<SystemTime>,
    permissions: Box<str>,
}

impl FileEntry {
    // Flag bit definitions
    pub const IS_DIR: u8 = 1 << 0;
    pub const IS_HIDDEN: u8 = 1 << 1;
    pub const IS_SYMLINK: u8 = 1 << 2;
    pub const IS_EXECUTABLE: u8 = 1 << 3;

    #[cfg(unix)]
    const EXEC_FLAG: u32 = 0o111;

    /// Creates an entry. The hidden flag is derived from the name.
    pub fn new(name: OsString, flags: u8) -> Self {
        let lowercase_name = name.to_string_lossy().to_lowercase().into_boxed_str();
        let mut flags = flags & !Self::IS_HIDDEN;
        if name.as_encoded_bytes().first() == Some(&b'.') {
            flags |= Self::IS_HIDDEN;
        }
        FileEntry {
            name: name.into_boxed_os_str(),
            lowercase_name,
            flags,
            size: 0,
            modified: None,
            permissions: "".into(),
        }
    }

    /// Attaches size, modification time and the permission string.
    pub fn with_meta(
        mut self,
        size: u64,
        modified: Option<SystemTime>,
        permissions: impl Into<Box<str>>,
    ) -> Self {
        self.size = size;
        self.modified = modified;
        self.permissions = permissions.into();
        self
    }

    // Accessors

    #[inline]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    #[inline]
    pub fn name_str(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }

    #[inline]
    pub fn lowercase_name(&self) -> &str {
        &self.lowercase_name
    }

    #[inline]
    pub fn size(&self) -> u64 {
        self.size
    }

    #[inline]
    pub fn modified(&self) -> Option<SystemTime> {
        self.modified
    }

    #[inline]
    pub fn permissions(&self) -> &str {
        &self.permissions
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.flags & Self::IS_DIR != 0
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.flags & Self::IS_HIDDEN != 0
    }

    #[inline]
    pub fn is_symlink(&self) -> bool {
        self.flags & Self::IS_SYMLINK != 0
    }

    #[inline]
    pub fn is_executable(&self) -> bool {
        self.flags & Self::IS_EXECUTABLE != 0
    }

    /// Lowercased extension without the dot, if any.
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.name)
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
    }
}

/// Reads the contents of the provided directory and returns them in listing order.
///
/// Entries whose type cannot be determined are skipped. Symlinks are followed for the
/// directory flag, size and time so a link to a directory can be descended into.
pub fn browse_dir(path: &Path) -> Result<Vec<FileEntry>, LoadError> {
    let read = fs::read_dir(path).map_err(|e| LoadError::io(path, e))?;
    let mut entries = Vec::with_capacity(256);

    for entry in read {
        let Ok(entry) = entry else {
            continue;
        };
        let Ok(ft) = entry.file_type() else {
            continue;
        };

        let mut flags = 0u8;
        if ft.is_dir() {
            flags |= FileEntry::IS_DIR;
        }
        if ft.is_symlink() {
            flags |= FileEntry::IS_SYMLINK;
        }

        let md = if ft.is_symlink() {
            fs::metadata(entry.path()).or_else(|_| entry.metadata())
        } else {
            entry.metadata()
        };

        let (size, modified, permissions) = match md {
            Ok(md) => {
                if md.is_dir() {
                    flags |= FileEntry::IS_DIR;
                }
                #[cfg(unix)]
                {
                    use std::os::unix::fs::PermissionsExt;
                    if !md.is_dir() && md.permissions().mode() & FileEntry::EXEC_FLAG != 0 {
                        flags |= FileEntry::IS_EXECUTABLE;
                    }
                }
                (md.len(), md.modified().ok(), format_attributes(&md))
            }
            Err(_) => (0, None, "??????????".to_string()),
        };

        entries.push(FileEntry::new(entry.file_name(), flags).with_meta(size, modified, permissions));
    }

    tracing::debug!(path = %path.display(), count = entries.len(), "listed directory");
    Ok(entries)
}

/// Reads at most `limit` bytes from the start of a file.
///
/// # Returns
/// The bytes read and the total file length reported by the filesystem.
pub fn read_head(path: &Path, limit: u64) -> Result<(Vec<u8>, u64), LoadError> {
    let file = File::open(path).map_err(|e| LoadError::io(path, e))?;
    let total = file.metadata().map_err(|e| LoadError::io(path, e))?.len();

    let mut buf = Vec::with_capacity(total.min(limit) as usize);
    file.take(limit)
        .read_to_end(&mut buf)
        .map_err(|e| LoadError::io(path, e))?;

    // Some special files report a zero length but still yield data
    let total = total.max(buf.len() as u64);
    Ok((buf, total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn file_entry_flags() -> Result<(), Box<dyn std::error::Error>> {
        let fe_file = FileEntry::new(OsString::from("file.txt"), 0);
        assert!(!fe_file.is_dir());
        assert!(!fe_file.is_hidden());
        assert_eq!(fe_file.name_str(), "file.txt");
        assert_eq!(fe_file.extension().as_deref(), Some("txt"));

        let fe_dir = FileEntry::new(OsString::from(".Hidden_Folder"), FileEntry::IS_DIR);
        assert!(fe_dir.is_dir());
        assert!(fe_dir.is_hidden());
        assert!(!fe_dir.is_symlink());
        assert_eq!(fe_dir.lowercase_name(), ".hidden_folder");
        Ok(())
    }

    #[test]
    fn hidden_flag_follows_name() {
        let fe = FileEntry::new(OsString::from("visible"), FileEntry::IS_HIDDEN);
        assert!(!fe.is_hidden());
    }

    #[test]
    fn browse_reads_metadata() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        let mut file = File::create(tmp.path().join("hello.txt"))?;
        file.write_all(b"0123456789")?;
        fs::create_dir(tmp.path().join("sub"))?;

        let entries = browse_dir(tmp.path())?;
        assert_eq!(entries.len(), 2);

        let hello = entries
            .iter()
            .find(|e| e.name() == "hello.txt")
            .ok_or("hello.txt missing")?;
        assert_eq!(hello.size(), 10);
        assert!(hello.modified().is_some());
        assert_eq!(hello.permissions().len(), 10);

        let sub = entries
            .iter()
            .find(|e| e.name() == "sub")
            .ok_or("sub missing")?;
        assert!(sub.is_dir());
        #[cfg(unix)]
        assert!(sub.permissions().starts_with('d'));
        Ok(())
    }

    #[test]
    fn browse_nonexistent() {
        let path = PathBuf::from("/path/does/not/exist");
        let result = browse_dir(&path);
        assert!(result.is_err());
    }

    #[test]
    fn read_head_is_bounded() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        let path = tmp.path().join("data.bin");
        fs::write(&path, vec![7u8; 1000])?;

        let (bytes, total) = read_head(&path, 100)?;
        assert_eq!(bytes.len(), 100);
        assert_eq!(total, 1000);

        let (bytes, total) = read_head(&path, 4096)?;
        assert_eq!(bytes.len(), 1000);
        assert_eq!(total, 1000);
        Ok(())
    }
}
