//! Directory entry representation

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// A single file or directory entry.
/// Transient: re-derived from disk on every listing, never cached.
#[derive(Clone, Debug)]
pub struct FileEntry {
    /// Entry name (not the full path)
    pub name: String,
    /// Full path to the entry
    pub path: PathBuf,
    /// Whether this is a directory (through symlinks)
    pub is_dir: bool,
    /// Size in bytes (0 for directories)
    pub size: u64,
    /// Last modification time
    pub modified: Option<SystemTime>,
    /// Hidden per platform convention (dot-prefixed on Unix)
    pub is_hidden: bool,
    /// Unix permission bits (0 where unavailable)
    pub permissions: u32,
    /// Whether this is a symbolic link
    pub is_symlink: bool,
    /// Owner user name (Unix only, empty elsewhere)
    pub owner: String,
    /// Owner group name (Unix only, empty elsewhere)
    pub group: String,
}

impl FileEntry {
    /// Build an entry from a path. The entry itself is stat-ed without
    /// following a final symlink; directory classification follows the link
    /// so navigating into a linked directory works.
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let metadata = fs::symlink_metadata(path)?;
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());

        let is_symlink = metadata.is_symlink();
        let target_metadata = if is_symlink {
            fs::metadata(path).ok()
        } else {
            Some(metadata.clone())
        };

        let is_dir = target_metadata.as_ref().map(|m| m.is_dir()).unwrap_or(false);
        let size = if is_dir {
            0
        } else {
            target_metadata.as_ref().map(|m| m.len()).unwrap_or(0)
        };

        let is_hidden = name.starts_with('.');

        #[cfg(unix)]
        let permissions = {
            use std::os::unix::fs::PermissionsExt;
            metadata.permissions().mode()
        };
        #[cfg(not(unix))]
        let permissions = 0u32;

        #[cfg(unix)]
        let (owner, group) = {
            use std::os::unix::fs::MetadataExt;
            (username(metadata.uid()), groupname(metadata.gid()))
        };
        #[cfg(not(unix))]
        let (owner, group) = (String::new(), String::new());

        Ok(Self {
            name,
            path: path.to_path_buf(),
            is_dir,
            size,
            modified: metadata.modified().ok(),
            is_hidden,
            permissions,
            is_symlink,
            owner,
            group,
        })
    }
}

/// Resolve a uid to a user name, falling back to the numeric id.
#[cfg(unix)]
fn username(uid: u32) -> String {
    use std::ffi::CStr;

    // SAFETY: getpwuid is safe to call with any uid value
    unsafe {
        let pw = libc::getpwuid(uid);
        if pw.is_null() || (*pw).pw_name.is_null() {
            return uid.to_string();
        }
        CStr::from_ptr((*pw).pw_name)
            .to_str()
            .map(|s| s.to_string())
            .unwrap_or_else(|_| uid.to_string())
    }
}

/// Resolve a gid to a group name, falling back to the numeric id.
#[cfg(unix)]
fn groupname(gid: u32) -> String {
    use std::ffi::CStr;

    // SAFETY: getgrgid is safe to call with any gid value
    unsafe {
        let gr = libc::getgrgid(gid);
        if gr.is_null() || (*gr).gr_name.is_null() {
            return gid.to_string();
        }
        CStr::from_ptr((*gr).gr_name)
            .to_str()
            .map(|s| s.to_string())
            .unwrap_or_else(|_| gid.to_string())
    }
}
