use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::consts::{MAX_DAYS, PLUGIN_ID};
use crate::error::HookLoggerError;

const SECS_PER_DAY: u64 = 24 * 60 * 60;

/// Where and how long hook logs are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub log_dir: PathBuf,
    pub retention_days: u32,
    pub debug: bool,
}

/// Optional overrides read from a TOML file
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    log_dir: Option<PathBuf>,
    #[serde(default)]
    retention_days: Option<u32>,
    #[serde(default)]
    debug: bool,
}

impl LogConfig {
    pub fn new(log_dir: impl Into<PathBuf>) -> Self {
        Self {
            log_dir: log_dir.into(),
            retention_days: MAX_DAYS,
            debug: false,
        }
    }

    pub fn with_retention_days(mut self, days: u32) -> Self {
        self.retention_days = days;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// `~/.openclaw/workspace/logs/hook-logger`
    pub fn default_log_dir() -> Option<PathBuf> {
        let home = dirs::home_dir()?;
        Some(
            home.join(".openclaw")
                .join("workspace")
                .join("logs")
                .join(PLUGIN_ID),
        )
    }

    /// Retention window as a duration.
    pub fn retention(&self) -> Duration {
        Duration::from_secs(u64::from(self.retention_days) * SECS_PER_DAY)
    }

    /// Home-directory defaults, overlaid with the first override file that parses.
    pub fn load() -> Result<Self, HookLoggerError> {
        let log_dir = Self::default_log_dir().ok_or(HookLoggerError::NoHomeDir)?;
        Ok(Self::load_from(Self::new(log_dir), &Self::get_config_paths()))
    }

    /// Apply the first file in `paths` that exists and parses; report and skip bad ones.
    fn load_from(mut config: Self, paths: &[PathBuf]) -> Self {
        for path in paths {
            if !path.exists() {
                continue;
            }
            match Self::read_overrides(path) {
                Ok(Some(file)) => {
                    config.apply(file);
                    return config;
                }
                Ok(None) => {}
                Err(e) => eprintln!("Warning: {e}"),
            }
        }

        config
    }

    /// Parse an override file and apply it on top of `self`.
    pub fn merge_file(mut self, path: &Path) -> Result<Self, HookLoggerError> {
        if let Some(file) = Self::read_overrides(path)? {
            self.apply(file);
        }
        Ok(self)
    }

    fn read_overrides(path: &Path) -> Result<Option<ConfigFile>, HookLoggerError> {
        let Ok(content) = fs::read_to_string(path) else {
            return Ok(None);
        };
        toml::from_str::<ConfigFile>(&content)
            .map(Some)
            .map_err(|source| HookLoggerError::Config {
                path: path.to_path_buf(),
                source,
            })
    }

    fn apply(&mut self, file: ConfigFile) {
        if let Some(dir) = file.log_dir {
            self.log_dir = dir;
        }
        if let Some(days) = file.retention_days {
            self.retention_days = days;
        }
        self.debug = file.debug;
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/hook-logger/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join(PLUGIN_ID).join("config.toml"));
        }

        // 2. Platform config dir (Application Support on macOS)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join(PLUGIN_ID).join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.hook-logger.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(format!(".{PLUGIN_ID}.toml")));
        }

        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_three_day_retention() {
        let config = LogConfig::new("/tmp/hooks");
        assert_eq!(config.retention_days, 3);
        assert!(!config.debug);
        assert_eq!(config.retention(), Duration::from_secs(3 * 24 * 3600));
    }

    #[test]
    fn default_log_dir_is_under_openclaw_workspace() {
        let Some(dir) = LogConfig::default_log_dir() else {
            return;
        };
        assert!(dir.ends_with(".openclaw/workspace/logs/hook-logger"));
    }

    #[test]
    fn config_paths_are_not_empty() {
        let paths = LogConfig::get_config_paths();
        for p in &paths {
            println!("Path: {:?}, exists: {}", p, p.exists());
        }
        assert!(!paths.is_empty());
    }

    #[test]
    fn load_from_first_parsable_file_wins() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let broken = dir.path().join("broken.toml");
        let first = dir.path().join("first.toml");
        let second = dir.path().join("second.toml");
        fs::write(&broken, "retention_days = [").unwrap();
        fs::write(&first, "retention_days = 5\n").unwrap();
        fs::write(&second, "retention_days = 9\ndebug = true\n").unwrap();

        let config = LogConfig::load_from(
            LogConfig::new("/tmp/hooks"),
            &[missing, broken, first, second],
        );
        assert_eq!(config.log_dir, PathBuf::from("/tmp/hooks"));
        assert_eq!(config.retention_days, 5);
        assert!(!config.debug);
    }

    #[test]
    fn load_from_without_files_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = LogConfig::load_from(
            LogConfig::new("/tmp/hooks"),
            &[dir.path().join("absent.toml")],
        );
        assert_eq!(config, LogConfig::new("/tmp/hooks"));
    }

    #[test]
    fn merge_file_overrides_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "log_dir = \"/var/log/hooks\"\nretention_days = 7\ndebug = true\n",
        )
        .unwrap();

        let config = LogConfig::new("/tmp/hooks").merge_file(&path).unwrap();
        assert_eq!(config.log_dir, PathBuf::from("/var/log/hooks"));
        assert_eq!(config.retention_days, 7);
        assert!(config.debug);
    }

    #[test]
    fn merge_file_keeps_unset_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "retention_days = 1\n").unwrap();

        let config = LogConfig::new("/tmp/hooks").merge_file(&path).unwrap();
        assert_eq!(config.log_dir, PathBuf::from("/tmp/hooks"));
        assert_eq!(config.retention_days, 1);
    }

    #[test]
    fn merge_file_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "retention_days = \"soon\"\n").unwrap();

        let err = LogConfig::new("/tmp/hooks").merge_file(&path).unwrap_err();
        assert!(matches!(err, HookLoggerError::Config { .. }));
    }

    #[test]
    fn merge_file_missing_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let config = LogConfig::new("/tmp/hooks")
            .merge_file(&dir.path().join("absent.toml"))
            .unwrap();
        assert_eq!(config, LogConfig::new("/tmp/hooks"));
    }
}
