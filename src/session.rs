//! Session state and command handlers.
//!
//! The session owns the shell's only mutable state, the current
//! directory, and turns parsed commands into filesystem calls.
//! Every handler reports through `AppResult`; nothing here terminates the
//! process.

use std::cmp::Ordering;
use std::io;
use std::path::PathBuf;

use crate::command::{self, Command};
use crate::config::{Config, SortingConfig};
use crate::errors::{AppError, AppResult};
use crate::fs::ops;
use crate::fs::perms::{format_mode, parse_mode};
use crate::fs::search::SearchWalker;
use crate::fs::FileEntry;
use crate::ui;

/// Shell session: the current directory plus loaded configuration.
/// The current directory always refers to an existing directory,
/// validated before every change, never after.
pub struct Session {
    pub cwd: PathBuf,
    pub config: Config,
}

impl Session {
    pub fn new(cwd: PathBuf, config: Config) -> Self {
        Self { cwd, config }
    }

    /// Resolve a command argument against the current directory.
    /// Absolute arguments stand on their own.
    fn resolve(&self, arg: &str) -> PathBuf {
        self.cwd.join(arg)
    }

    /// Entries of the current directory, filtered and ordered for display.
    pub fn listing(&self) -> AppResult<Vec<FileEntry>> {
        if !self.cwd.is_dir() {
            return Err(AppError::NotADirectory(self.cwd.display().to_string()));
        }
        let mut entries = ops::read_directory(&self.cwd)?;
        if !self.config.general.show_hidden {
            entries.retain(|e| !e.is_hidden);
        }
        sort_entries(&mut entries, &self.config.sorting);
        Ok(entries)
    }

    /// Execute one parsed command, returning the message to print on
    /// success. An empty message means the redrawn listing says it all.
    pub fn execute(&mut self, cmd: Command) -> AppResult<String> {
        match cmd {
            Command::Cd(dir) => self.cmd_cd(&dir),
            Command::Create(file) => self.cmd_create(&file),
            Command::Mkdir(dir) => self.cmd_mkdir(&dir),
            Command::Copy(src, dst) => self.cmd_copy(&src, &dst),
            Command::Move(src, dst) => self.cmd_move(&src, &dst),
            Command::Delete(name) => self.cmd_delete(&name),
            Command::Search(query) => self.cmd_search(&query),
            Command::Perm(file) => self.cmd_perm(&file),
            Command::Chmod(file, mode) => self.cmd_chmod(&file, &mode),
            Command::Help => Ok(command::HELP.to_string()),
            // Exit is handled by the loop; a blank line just redraws.
            Command::Exit | Command::Empty => Ok(String::new()),
        }
    }

    fn cmd_cd(&mut self, target: &str) -> AppResult<String> {
        if target == ".." {
            // At the filesystem root there is no parent: silently ignored.
            if let Some(parent) = self.cwd.parent() {
                self.cwd = parent.to_path_buf();
            }
            return Ok(String::new());
        }

        let dest = self.resolve(target);
        if !dest.exists() {
            return Err(AppError::NotFound(target.to_string()));
        }
        if !dest.is_dir() {
            return Err(AppError::NotADirectory(target.to_string()));
        }
        self.cwd = dest;
        Ok(String::new())
    }

    fn cmd_create(&mut self, name: &str) -> AppResult<String> {
        match ops::create_file(&self.resolve(name)) {
            Ok(()) => Ok(format!("Created file: {}", name)),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                Err(AppError::AlreadyExists(name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn cmd_mkdir(&mut self, name: &str) -> AppResult<String> {
        match ops::create_dir(&self.resolve(name)) {
            Ok(()) => Ok(format!("Created directory: {}", name)),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                Err(AppError::AlreadyExists(name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn cmd_copy(&self, src: &str, dst: &str) -> AppResult<String> {
        ops::copy_file(&self.resolve(src), &self.resolve(dst))
            .map_err(|e| AppError::Copy(e.to_string()))?;
        Ok(format!("Copied {} to {}", src, dst))
    }

    fn cmd_move(&self, src: &str, dst: &str) -> AppResult<String> {
        ops::move_path(&self.resolve(src), &self.resolve(dst))
            .map_err(|e| AppError::Move(e.to_string()))?;
        Ok(format!("Moved {} to {}", src, dst))
    }

    fn cmd_delete(&self, name: &str) -> AppResult<String> {
        ops::delete_path(&self.resolve(name)).map_err(|e| AppError::Delete(e.to_string()))?;
        Ok(format!("Deleted: {}", name))
    }

    /// Stream matches to stdout as the walk produces them; a long search
    /// prints as it goes instead of collecting the whole tree first.
    fn cmd_search(&self, query: &str) -> AppResult<String> {
        let mut count = 0usize;
        for hit in SearchWalker::new(&self.cwd, query) {
            println!(
                "{}{}",
                ui::marker_cell(hit.is_dir, &self.config.display),
                hit.path.display()
            );
            count += 1;
        }
        Ok(format!("{} match(es) for '{}'", count, query))
    }

    fn cmd_perm(&self, name: &str) -> AppResult<String> {
        #[cfg(unix)]
        {
            let mode = ops::mode_of(&self.resolve(name)).map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => AppError::NotFound(name.to_string()),
                _ => AppError::Access {
                    path: name.to_string(),
                    source: e,
                },
            })?;
            Ok(format!("Permissions for {}: {}", name, format_mode(mode)))
        }
        #[cfg(not(unix))]
        {
            let _ = name;
            Err(AppError::Permission(
                "permission bits are not supported on this platform".to_string(),
            ))
        }
    }

    fn cmd_chmod(&self, name: &str, mode_arg: &str) -> AppResult<String> {
        let mode =
            parse_mode(mode_arg).ok_or_else(|| AppError::InvalidMode(mode_arg.to_string()))?;
        #[cfg(unix)]
        {
            ops::set_mode(&self.resolve(name), mode)
                .map_err(|e| AppError::Permission(format!("{}: {}", name, e)))?;
            Ok(format!("Permissions for {} set to {}", name, format_mode(mode)))
        }
        #[cfg(not(unix))]
        {
            let _ = (name, mode);
            Err(AppError::Permission(
                "permission bits are not supported on this platform".to_string(),
            ))
        }
    }
}

/// Order entries for display per the sorting config. `sort_by` is stable,
/// so `field = "unsorted"` keeps enumeration order (within the dirs-first
/// partition when that is on).
fn sort_entries(entries: &mut [FileEntry], config: &SortingConfig) {
    let descending = config.direction == "descending";
    entries.sort_by(|a, b| {
        if config.dirs_first && a.is_dir != b.is_dir {
            return if a.is_dir { Ordering::Less } else { Ordering::Greater };
        }
        let cmp = match config.field.as_str() {
            "size" => a.size.cmp(&b.size),
            "modified" => a.modified.cmp(&b.modified),
            "unsorted" => Ordering::Equal,
            _ => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        };
        if descending { cmp.reverse() } else { cmp }
    });
}
