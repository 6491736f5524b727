//! Diagnostic plugin that records every lifecycle hook of an agent/gateway
//! host into `~/.openclaw/workspace/logs/hook-logger/<YYYY-MM-DD>.log`.
//!
//! The host calls [`Plugin::register`] once; every handler writes a single
//! summarized line and hands the context back untouched. Day files older
//! than the retention window are pruned on each write.

mod config;
mod consts;
mod error;
mod hooks;
mod plugin;
mod retention;
mod summary;
mod writer;

pub use config::LogConfig;
pub use consts::{MAX_DAYS, PLUGIN_DESCRIPTION, PLUGIN_ID, PLUGIN_NAME};
pub use error::{ErrorPolicy, FsOp, HookLoggerError};
pub use hooks::HookName;
pub use plugin::{HookContext, HookEvent, HookHandler, HookLoggerPlugin, Plugin, PluginApi};
pub use retention::{ensure_log_directory, prune_old_logs};
pub use summary::{Summary, summarize};
pub use writer::{EventLogger, format_entry};
