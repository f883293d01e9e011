//! Filesystem operations behind the command handlers.
//!
//! Every operation here is a single stateless call into the platform
//! filesystem; policy (path resolution, error wording) lives in the session.

use std::fs;
use std::io;
use std::path::Path;

use super::entry::FileEntry;

/// Read the immediate children of a directory, in enumeration order.
/// Entries that cannot be stat-ed (e.g. permission denied) are skipped.
pub fn read_directory(path: &Path) -> io::Result<Vec<FileEntry>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        if let Ok(file_entry) = FileEntry::from_path(&entry.path()) {
            entries.push(file_entry);
        }
    }
    Ok(entries)
}

/// Create an empty file. Fails with `AlreadyExists` on name collision
/// rather than truncating what is there.
pub fn create_file(path: &Path) -> io::Result<()> {
    fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map(|_| ())
}

/// Create an empty directory (non-recursive).
pub fn create_dir(path: &Path) -> io::Result<()> {
    fs::create_dir(path)
}

/// Preserve modification time and (Unix) permission bits from src to dest.
/// Best-effort: errors are silently ignored since the file data is
/// already written.
fn preserve_attributes(src: &Path, dest: &Path) {
    if let Ok(meta) = fs::metadata(src) {
        if let Ok(mtime) = meta.modified() {
            let _ = filetime::set_file_mtime(dest, filetime::FileTime::from_system_time(mtime));
        }
        #[cfg(unix)]
        {
            let _ = fs::set_permissions(dest, meta.permissions());
        }
    }
}

/// Copy a single file byte-for-byte, overwriting dest if present.
/// Directories are not copied; the caller gets an error instead.
pub fn copy_file(src: &Path, dest: &Path) -> io::Result<()> {
    if src.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} is a directory", src.display()),
        ));
    }
    fs::copy(src, dest)?;
    preserve_attributes(src, dest);
    Ok(())
}

/// Rename/relocate a file or directory. Atomic on one filesystem; across
/// filesystems this fails however the platform rename call fails.
pub fn move_path(src: &Path, dest: &Path) -> io::Result<()> {
    fs::rename(src, dest)
}

/// Remove a file or a directory tree. Partial deletion of a tree is
/// possible and is not rolled back.
pub fn delete_path(path: &Path) -> io::Result<()> {
    if path.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}

/// Read the mode bits of a path.
#[cfg(unix)]
pub fn mode_of(path: &Path) -> io::Result<u32> {
    use std::os::unix::fs::PermissionsExt;
    Ok(fs::metadata(path)?.permissions().mode())
}

/// Replace the mode bits of a path (full replace, not additive).
#[cfg(unix)]
pub fn set_mode(path: &Path, mode: u32) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_create_file_collision() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.txt");
        create_file(&path).unwrap();
        let err = create_file(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
    }

    #[test]
    fn test_create_file_does_not_truncate_on_collision() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, b"contents").unwrap();
        assert!(create_file(&path).is_err());
        assert_eq!(fs::read(&path).unwrap(), b"contents");
    }

    #[test]
    fn test_copy_file_overwrites_dest() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src.bin");
        let dest = dir.path().join("dest.bin");
        fs::write(&src, b"new data").unwrap();
        fs::write(&dest, b"old").unwrap();

        copy_file(&src, &dest).unwrap();
        assert_eq!(fs::read(&dest).unwrap(), b"new data");
    }

    #[test]
    fn test_copy_rejects_directory_source() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("subdir");
        fs::create_dir(&src).unwrap();
        assert!(copy_file(&src, &dir.path().join("out")).is_err());
    }

    #[test]
    fn test_copy_missing_source() {
        let dir = tempdir().unwrap();
        assert!(copy_file(&dir.path().join("ghost"), &dir.path().join("out")).is_err());
    }

    #[test]
    fn test_move_renames() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("old");
        let dest = dir.path().join("new");
        fs::write(&src, b"x").unwrap();

        move_path(&src, &dest).unwrap();
        assert!(!src.exists());
        assert_eq!(fs::read(&dest).unwrap(), b"x");
    }

    #[test]
    fn test_delete_removes_nonempty_tree() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("tree");
        fs::create_dir_all(root.join("a/b")).unwrap();
        fs::write(root.join("a/b/deep.txt"), b"x").unwrap();
        fs::write(root.join("top.txt"), b"y").unwrap();

        delete_path(&root).unwrap();
        assert!(!root.exists());
    }

    #[test]
    fn test_delete_missing_errors() {
        let dir = tempdir().unwrap();
        assert!(delete_path(&dir.path().join("ghost")).is_err());
    }

    #[test]
    fn test_read_directory_lists_children() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("f1"), b"").unwrap();
        fs::create_dir(dir.path().join("d1")).unwrap();

        let entries = read_directory(dir.path()).unwrap();
        let mut names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        names.sort_unstable();
        assert_eq!(names, ["d1", "f1"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_mode_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("m.txt");
        fs::write(&path, b"").unwrap();

        set_mode(&path, 0o640).unwrap();
        assert_eq!(mode_of(&path).unwrap() & 0o777, 0o640);
    }
}
