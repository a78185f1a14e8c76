// error.rs

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("{0}: command not found")]
    CommandNotFound(String),

    #[error("{0}: argument contains a NUL byte")]
    NulInArgument(String),

    #[error("{program}: cannot start process: {source}")]
    Spawn {
        program: String,
        #[source]
        source: nix::Error,
    },

    #[error("{program}: wait failed: {source}")]
    Wait {
        program: String,
        #[source]
        source: nix::Error,
    },

    #[error("{cmd}: {message}")]
    Usage { cmd: &'static str, message: String },

    #[error("\\e: {0}: not set")]
    UnsetVariable(String),

    #[error("{}: too small to hold a boot sector", .0.display())]
    ShortDevice(PathBuf),

    #[error("\\mem: no such process: {0}")]
    NoSuchProcess(i32),

    #[error("{program} exited with status {code}")]
    ToolFailed { program: String, code: i32 },

    #[error("{}: {source}", .path.display())]
    Path {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("history: {0}")]
    History(#[source] std::io::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Sys(#[from] nix::Error),
}

impl ShellError {
    pub fn path(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ShellError::Path { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, ShellError>;
