//! Recursive filename search

use std::fs;
use std::path::{Path, PathBuf};

/// One search hit: the full path and whether it is a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Lazy depth-first walker over a directory tree, yielding every entry
/// whose filename contains the query as a case-sensitive literal
/// substring. Directories that cannot be read are skipped silently.
/// Memory use is bounded by the stack of open directory handles, one per
/// level of the tree, never by the tree size.
pub struct SearchWalker {
    query: String,
    pending: Vec<fs::ReadDir>,
}

impl SearchWalker {
    /// Start a walk over the subtree rooted at `root`. The root itself is
    /// not a candidate, only its descendants.
    pub fn new(root: &Path, query: &str) -> Self {
        let mut pending = Vec::new();
        if let Ok(rd) = fs::read_dir(root) {
            pending.push(rd);
        }
        Self {
            query: query.to_string(),
            pending,
        }
    }
}

impl Iterator for SearchWalker {
    type Item = Match;

    fn next(&mut self) -> Option<Match> {
        while let Some(dir) = self.pending.last_mut() {
            let Some(entry) = dir.next() else {
                self.pending.pop();
                continue;
            };
            let Ok(entry) = entry else { continue };

            let path = entry.path();
            let is_dir = path.is_dir();
            if is_dir && let Ok(rd) = fs::read_dir(&path) {
                self.pending.push(rd);
            }

            if entry.file_name().to_string_lossy().contains(&self.query) {
                return Some(Match { path, is_dir });
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn names(root: &Path, query: &str) -> Vec<String> {
        let mut found: Vec<String> = SearchWalker::new(root, query)
            .map(|m| m.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        found.sort_unstable();
        found
    }

    #[test]
    fn test_substring_match() {
        let dir = tempdir().unwrap();
        for name in ["foo.txt", "food.txt", "bar.txt"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }

        assert_eq!(names(dir.path(), "foo"), ["foo.txt", "food.txt"]);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("Readme"), b"").unwrap();
        fs::write(dir.path().join("readme"), b"").unwrap();

        assert_eq!(names(dir.path(), "Read"), ["Readme"]);
    }

    #[test]
    fn test_walks_subdirectories() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a/b/c")).unwrap();
        fs::write(dir.path().join("a/b/c/target.log"), b"").unwrap();
        fs::write(dir.path().join("target.txt"), b"").unwrap();

        assert_eq!(names(dir.path(), "target"), ["target.log", "target.txt"]);
    }

    #[test]
    fn test_directories_match_too() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("reports")).unwrap();
        fs::write(dir.path().join("reports/report-1"), b"").unwrap();

        let hits: Vec<Match> = SearchWalker::new(dir.path(), "report").collect();
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().any(|m| m.is_dir));
        assert!(hits.iter().any(|m| !m.is_dir));
    }

    #[test]
    fn test_no_matches_yields_empty() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("alpha"), b"").unwrap();

        assert!(names(dir.path(), "zeta").is_empty());
    }

    #[test]
    fn test_missing_root_yields_empty() {
        let dir = tempdir().unwrap();
        assert!(names(&dir.path().join("nope"), "x").is_empty());
    }
}
