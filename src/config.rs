use std::fs;
use std::io::Write;
use std::path::PathBuf;

use dirs_next as dirs;
use globset::{Glob, GlobSet};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::size::{DEFAULT_ROLLOVER, SizeFormatter, validate_decimal_places};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Decimal places used when a command is not given `--decimals`.
    #[serde(default)]
    pub decimals: i32,
    #[serde(default = "default_rollover")]
    pub rollover_at: u32,
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Edits requested from the command line, applied in one load/save cycle.
#[derive(Debug, Clone, Default)]
pub struct ConfigChanges {
    pub decimals: Option<i32>,
    pub add_exclude: Option<String>,
}

impl ConfigChanges {
    pub fn is_empty(&self) -> bool {
        self.decimals.is_none() && self.add_exclude.is_none()
    }
}

fn default_rollover() -> u32 {
    DEFAULT_ROLLOVER
}

impl Default for Config {
    fn default() -> Self {
        Config { decimals: 0, rollover_at: DEFAULT_ROLLOVER, exclude: Vec::new() }
    }
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        let path = config_file_path()?;
        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&contents)?;
            log::debug!("Loaded configuration from {}", path.display());
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<(), AppError> {
        let path = config_file_path()?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let mut file = fs::File::create(path)?;
        let contents = toml::to_string_pretty(self)?;
        file.write_all(contents.as_bytes())?;
        Ok(())
    }

    pub fn append_exclude(&mut self, value: String) {
        if !self.exclude.iter().any(|existing| existing == &value) {
            self.exclude.push(value);
        }
    }

    pub fn set_decimals(&mut self, decimals: i32) -> Result<(), AppError> {
        validate_decimal_places(decimals)?;
        self.decimals = decimals;
        Ok(())
    }

    /// Apply `changes`, returning one line per change for the user. Nothing
    /// is modified when any change is invalid.
    pub fn apply(&mut self, changes: &ConfigChanges) -> Result<Vec<String>, AppError> {
        let mut applied = Vec::new();
        if let Some(decimals) = changes.decimals {
            self.set_decimals(decimals)?;
            applied.push(format!("Default decimal places set to {decimals}."));
        }
        if let Some(pattern) = &changes.add_exclude {
            self.append_exclude(pattern.clone());
            applied.push(format!("Added exclude pattern '{pattern}'."));
        }
        Ok(applied)
    }

    /// Explicit decimal places win over the configured default.
    pub fn resolve_decimals(&self, explicit: Option<i32>) -> i32 {
        explicit.unwrap_or(self.decimals)
    }

    pub fn formatter(&self) -> Result<SizeFormatter, AppError> {
        SizeFormatter::with_rollover_at(self.rollover_at)
    }

    pub fn compile_excludes(&self) -> Result<Option<GlobSet>, AppError> {
        if self.exclude.is_empty() {
            return Ok(None);
        }

        let mut builder = globset::GlobSetBuilder::new();
        for pattern in &self.exclude {
            let expanded = expand_home(pattern)?;
            builder.add(Glob::new(&expanded)?);
        }

        Ok(Some(builder.build()?))
    }
}

pub fn config_file_path() -> Result<PathBuf, AppError> {
    let config_root = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .ok_or_else(|| {
            AppError::config("Unable to determine configuration directory for this platform")
        })?;
    Ok(config_root.join("fileinfo").join("config.toml"))
}

pub fn ensure_config_file() -> Result<PathBuf, AppError> {
    let path = config_file_path()?;
    if !path.exists() {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let default = Config::default();
        let contents = toml::to_string_pretty(&default)?;
        fs::write(&path, contents)?;
    }
    Ok(path)
}

fn expand_home(value: &str) -> Result<String, AppError> {
    if !value.starts_with('~') {
        return Ok(value.to_string());
    }
    let home_dir = dirs::home_dir().ok_or_else(|| {
        AppError::config("Unable to expand '~' because the home directory is unknown")
    })?;
    if value == "~" {
        Ok(home_dir.display().to_string())
    } else if let Some(stripped) = value.strip_prefix("~/") {
        Ok(home_dir.join(stripped).display().to_string())
    } else {
        Ok(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = toml::from_str("exclude = [\"*.tmp\"]").unwrap();
        assert_eq!(config.decimals, 0);
        assert_eq!(config.rollover_at, DEFAULT_ROLLOVER);
        assert_eq!(config.exclude, vec!["*.tmp".to_string()]);
    }

    #[test]
    fn formatter_uses_configured_rollover() {
        let config: Config = toml::from_str("rollover_at = 1000").unwrap();
        let formatter = config.formatter().unwrap();
        assert_eq!(formatter.rollover_at(), 1000);
        assert_eq!(formatter.format(1000, 0).unwrap(), "1 KB");

        let bad = Config { rollover_at: 10, ..Config::default() };
        assert!(matches!(bad.formatter(), Err(AppError::InvalidArgument(_))));
    }

    #[test]
    fn explicit_decimals_override_config() {
        let mut config = Config::default();
        config.set_decimals(2).unwrap();
        assert_eq!(config.resolve_decimals(None), 2);
        assert_eq!(config.resolve_decimals(Some(0)), 0);
        assert!(config.set_decimals(-1).is_err());
        assert_eq!(config.decimals, 2);
    }

    #[test]
    fn apply_reports_each_change() {
        let mut config = Config::default();
        let changes =
            ConfigChanges { decimals: Some(3), add_exclude: Some("*.tmp".to_string()) };

        let applied = config.apply(&changes).unwrap();
        assert_eq!(applied.len(), 2);
        assert_eq!(config.decimals, 3);
        assert_eq!(config.exclude, vec!["*.tmp".to_string()]);
        assert!(ConfigChanges::default().is_empty());
    }

    #[test]
    fn apply_rejects_invalid_changes_atomically() {
        let mut config = Config::default();
        let changes =
            ConfigChanges { decimals: Some(-1), add_exclude: Some("*.tmp".to_string()) };

        assert!(matches!(config.apply(&changes), Err(AppError::InvalidArgument(_))));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn append_exclude_ignores_duplicates() {
        let mut config = Config::default();
        config.append_exclude("*.log".to_string());
        config.append_exclude("*.log".to_string());
        assert_eq!(config.exclude.len(), 1);
        assert!(config.compile_excludes().unwrap().unwrap().is_match("server.log"));
        assert!(Config::default().compile_excludes().unwrap().is_none());
    }
}
