//! Command line parsing

use crate::errors::{AppError, AppResult};

/// Command summary, printed at startup and by `help`.
pub const HELP: &str = "\
Commands:
  cd <dir>             change directory (.. goes up)
  create <file>        create an empty file
  mkdir <dir>          create a directory
  copy <src> <dst>     copy a file, overwriting <dst>
  move <src> <dst>     rename or relocate
  delete <name>        remove a file or directory tree
  search <name>        find entries whose name contains <name>
  perm <file>          show permission bits
  chmod <file> <mode>  set permission bits (octal, e.g. 755)
  help                 show this list
  exit                 leave the shell";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Cd(String),
    Create(String),
    Mkdir(String),
    Copy(String, String),
    Move(String, String),
    Delete(String),
    Search(String),
    Perm(String),
    Chmod(String, String),
    Help,
    Exit,
    /// Blank line: just redraw the listing
    Empty,
}

impl Command {
    /// Parse one input line. Tokens are whitespace-separated; command names
    /// are case-sensitive. A known command with the wrong number of
    /// arguments yields a usage error rather than `UnknownCommand`.
    pub fn parse(line: &str) -> AppResult<Command> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [] => Ok(Command::Empty),

            ["cd", dir] => Ok(Command::Cd((*dir).to_string())),
            ["cd", ..] => Err(AppError::Usage("cd <dir>")),

            ["create", file] => Ok(Command::Create((*file).to_string())),
            ["create", ..] => Err(AppError::Usage("create <file>")),

            ["mkdir", dir] => Ok(Command::Mkdir((*dir).to_string())),
            ["mkdir", ..] => Err(AppError::Usage("mkdir <dir>")),

            ["copy", src, dst] => Ok(Command::Copy((*src).to_string(), (*dst).to_string())),
            ["copy", ..] => Err(AppError::Usage("copy <src> <dst>")),

            ["move", src, dst] => Ok(Command::Move((*src).to_string(), (*dst).to_string())),
            ["move", ..] => Err(AppError::Usage("move <src> <dst>")),

            ["delete", name] => Ok(Command::Delete((*name).to_string())),
            ["delete", ..] => Err(AppError::Usage("delete <name>")),

            ["search", name] => Ok(Command::Search((*name).to_string())),
            ["search", ..] => Err(AppError::Usage("search <name>")),

            ["perm", file] => Ok(Command::Perm((*file).to_string())),
            ["perm", ..] => Err(AppError::Usage("perm <file>")),

            ["chmod", file, mode] => Ok(Command::Chmod((*file).to_string(), (*mode).to_string())),
            ["chmod", ..] => Err(AppError::Usage("chmod <file> <mode>")),

            ["help"] => Ok(Command::Help),
            ["help", ..] => Err(AppError::Usage("help")),

            ["exit"] => Ok(Command::Exit),
            ["exit", ..] => Err(AppError::Usage("exit")),

            [other, ..] => Err(AppError::UnknownCommand((*other).to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        assert_eq!(Command::parse("cd docs").unwrap(), Command::Cd("docs".into()));
        assert_eq!(Command::parse("exit").unwrap(), Command::Exit);
        assert_eq!(Command::parse("help").unwrap(), Command::Help);
    }

    #[test]
    fn test_parse_two_args() {
        assert_eq!(
            Command::parse("copy a.txt b.txt").unwrap(),
            Command::Copy("a.txt".into(), "b.txt".into())
        );
        assert_eq!(
            Command::parse("chmod a.txt 755").unwrap(),
            Command::Chmod("a.txt".into(), "755".into())
        );
    }

    #[test]
    fn test_parse_blank_line() {
        assert_eq!(Command::parse("").unwrap(), Command::Empty);
        assert_eq!(Command::parse("   \t ").unwrap(), Command::Empty);
    }

    #[test]
    fn test_parse_missing_args_is_usage() {
        assert!(matches!(Command::parse("cd"), Err(AppError::Usage(_))));
        assert!(matches!(Command::parse("copy only-one"), Err(AppError::Usage(_))));
        assert!(matches!(Command::parse("chmod file"), Err(AppError::Usage(_))));
    }

    #[test]
    fn test_parse_extra_args_is_usage() {
        assert!(matches!(Command::parse("delete a b"), Err(AppError::Usage(_))));
    }

    #[test]
    fn test_parse_unknown() {
        assert!(matches!(
            Command::parse("frobnicate x"),
            Err(AppError::UnknownCommand(name)) if name == "frobnicate"
        ));
    }

    #[test]
    fn test_commands_are_case_sensitive() {
        assert!(matches!(Command::parse("CD docs"), Err(AppError::UnknownCommand(_))));
    }
}
