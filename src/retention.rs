//! Log directory upkeep
//!
//! Creates the log directory on demand and deletes day files whose last
//! write is older than the retention window. Pruning never fails: every
//! listing, stat and delete error is dropped per file. With `verbose` set
//! the dropped errors and removed files are reported on stderr.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use crate::consts::{DIAG_PREFIX, LOG_EXTENSION};
use crate::error::{ErrorPolicy, FsOp, HookLoggerError};

/// Create `dir` (and parents) if it does not exist yet.
pub fn ensure_log_directory(dir: &Path) -> Result<(), HookLoggerError> {
    if dir.is_dir() {
        return Ok(());
    }
    match fs::create_dir_all(dir) {
        Ok(()) => Ok(()),
        // Lost a race with another writer
        Err(_) if dir.is_dir() => Ok(()),
        Err(source) => Err(HookLoggerError::CreateDir {
            path: dir.to_path_buf(),
            source,
        }),
    }
}

/// Delete `*.log` files in `dir` last modified before `now - retention`.
///
/// Returns the paths that were removed.
pub fn prune_old_logs(
    dir: &Path,
    retention: Duration,
    now: SystemTime,
    verbose: bool,
) -> Vec<PathBuf> {
    let mut removed = Vec::new();
    if !dir.is_dir() {
        return removed;
    }
    let Some(cutoff) = now.checked_sub(retention) else {
        return removed;
    };

    let pattern = format!(
        "{}/*.{}",
        glob::Pattern::escape(&dir.to_string_lossy()),
        LOG_EXTENSION
    );
    let Some(entries) = best_effort(verbose, FsOp::ListDir, dir, glob::glob(&pattern)) else {
        return removed;
    };

    for entry in entries {
        let entry = entry.map_err(|e| e.into_error());
        let Some(path) = best_effort(verbose, FsOp::ListDir, dir, entry) else {
            continue;
        };
        let Some(meta) = best_effort(verbose, FsOp::Stat, &path, fs::metadata(&path)) else {
            continue;
        };
        if !meta.is_file() {
            continue;
        }
        let Some(modified) = best_effort(verbose, FsOp::Stat, &path, meta.modified()) else {
            continue;
        };
        if modified >= cutoff {
            continue;
        }
        if best_effort(verbose, FsOp::Remove, &path, fs::remove_file(&path)).is_some() {
            if verbose {
                eprintln!("{DIAG_PREFIX} Pruned {}", path.display());
            }
            removed.push(path);
        }
    }

    removed
}

/// Turn a swallowed failure into `None`, reporting it when `verbose`.
fn best_effort<T, E: std::fmt::Display>(
    verbose: bool,
    op: FsOp,
    path: &Path,
    result: Result<T, E>,
) -> Option<T> {
    debug_assert_eq!(op.policy(), ErrorPolicy::Swallow);
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            if verbose {
                eprintln!(
                    "{DIAG_PREFIX} Ignoring {} error on {}: {e}",
                    op.as_str(),
                    path.display()
                );
            }
            None
        }
    }
}
