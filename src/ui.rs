//! Listing and prompt rendering

use std::io::{self, Write, stdout};
use std::path::Path;

use crossterm::style::Stylize;
use crossterm::tty::IsTty;

use crate::config::{Config, DisplayConfig};
use crate::fs::FileEntry;
use crate::fs::perms::format_mode;

/// The marker column: the configured directory marker for directories,
/// matching blanks for files so names line up.
pub fn marker_cell(is_dir: bool, display: &DisplayConfig) -> String {
    if is_dir {
        format!("{}  ", display.dir_marker)
    } else {
        " ".repeat(display.dir_marker.chars().count() + 2)
    }
}

/// Print the header and entry lines for the current directory.
pub fn print_listing(cwd: &Path, entries: &[FileEntry], config: &Config) {
    println!();
    println!("Current directory: {}", cwd.display());
    println!("Contents:");

    let colorize = config.display.color && stdout().is_tty();
    for entry in entries {
        let cell = marker_cell(entry.is_dir, &config.display);
        let name = if colorize && entry.is_dir {
            entry.name.as_str().bold().blue().to_string()
        } else {
            entry.name.clone()
        };

        if config.display.view_mode == "full" {
            println!(
                "{}{} {:<8} {:<8} {:>10}  {}",
                cell,
                format_mode(entry.permissions),
                entry.owner,
                entry.group,
                entry.size,
                name
            );
        } else {
            println!("{}{}", cell, name);
        }
    }
}

/// Print the prompt and flush so it appears before the blocking read.
pub fn prompt(cwd: &Path) -> io::Result<()> {
    print!("{}> ", cwd.display());
    stdout().flush()
}
