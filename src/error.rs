use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HookLoggerError {
    #[error("Could not determine the home directory")]
    NoHomeDir,

    #[error("Failed to create log directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to append to {}: {source}", .path.display())]
    Append {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to encode summary: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Unknown hook: {input}")]
    UnknownHook { input: String },

    #[error("Failed to parse {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Filesystem operations performed by the logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsOp {
    /// Creating the log directory before a write
    EnsureDir,
    /// Listing the log directory during pruning
    ListDir,
    /// Reading a log file's modification time
    Stat,
    /// Deleting an expired log file
    Remove,
    /// Appending an entry to today's file
    Append,
}

/// What happens to an error raised by an [`FsOp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Ignore and carry on with the next step
    Swallow,
    /// Return to the caller (and from there to the host)
    Propagate,
}

impl FsOp {
    /// Pruning is best-effort; the write path is not.
    pub const fn policy(self) -> ErrorPolicy {
        match self {
            FsOp::ListDir | FsOp::Stat | FsOp::Remove => ErrorPolicy::Swallow,
            FsOp::EnsureDir | FsOp::Append => ErrorPolicy::Propagate,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            FsOp::EnsureDir => "ensure_dir",
            FsOp::ListDir => "list_dir",
            FsOp::Stat => "stat",
            FsOp::Remove => "remove",
            FsOp::Append => "append",
        }
    }
}
