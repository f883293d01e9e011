use thiserror::Error;

/// Application-level errors.
/// Each command handler converts its failures into one of these; the
/// command loop prints the message and keeps running.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("not a directory: {0}")]
    NotADirectory(String),

    #[error("already exists: {0}")]
    AlreadyExists(String),

    #[error("copy failed: {0}")]
    Copy(String),

    #[error("move failed: {0}")]
    Move(String),

    #[error("delete failed: {0}")]
    Delete(String),

    #[error("cannot access {path}: {source}")]
    Access {
        path: String,
        source: std::io::Error,
    },

    #[error("chmod failed: {0}")]
    Permission(String),

    #[error("invalid mode '{0}': expected octal digits, at most 7777")]
    InvalidMode(String),

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("usage: {0}")]
    Usage(&'static str),
}

pub type AppResult<T> = Result<T, AppError>;
