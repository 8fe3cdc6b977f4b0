//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Promise list size and day-rollover behavior
//! - Streak grid length
//! - Default calorie target for a fresh document
//! - Which calendar decides "today"
//!
//! Configuration is stored at `~/.config/keepchain/config.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::clock::CalendarZone;
use crate::day::{DEFAULT_GRID_DAYS, MAX_GRID_DAYS};
use crate::error::{ConfigError, Result};
use crate::state::{DEFAULT_CALORIE_TARGET, MAX_PROMISES};

const CONFIG_FILE: &str = "config.toml";

/// Promise list configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromisesConfig {
    #[serde(default = "default_max_promises")]
    pub max: usize,
    /// Clear done flags on the first command of a new day.
    #[serde(default)]
    pub reset_on_new_day: bool,
}

/// Streak display configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakConfig {
    #[serde(default = "default_grid_days")]
    pub grid_days: u32,
}

/// Body log configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyConfig {
    #[serde(default = "default_calorie_target")]
    pub default_target: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfig {
    #[serde(default)]
    pub timezone: CalendarZone,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/keepchain/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub promises: PromisesConfig,
    #[serde(default)]
    pub streak: StreakConfig,
    #[serde(default)]
    pub body: BodyConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
}

fn default_max_promises() -> usize {
    3
}
fn default_grid_days() -> u32 {
    DEFAULT_GRID_DAYS
}
fn default_calorie_target() -> u32 {
    DEFAULT_CALORIE_TARGET
}

impl Default for PromisesConfig {
    fn default() -> Self {
        Self {
            max: default_max_promises(),
            reset_on_new_day: false,
        }
    }
}

impl Default for StreakConfig {
    fn default() -> Self {
        Self {
            grid_days: default_grid_days(),
        }
    }
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            default_target: default_calorie_target(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value.parse::<bool>().map_err(|e| invalid(e.to_string()))?,
                    ),
                    serde_json::Value::Number(_) => {
                        let n = value
                            .parse::<u64>()
                            .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?;
                        serde_json::Value::Number(n.into())
                    }
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        return Err(invalid("cannot set a whole section".to_string()));
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join(CONFIG_FILE))
    }

    /// Load from the data directory, writing defaults on first run.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path, writing defaults if the file is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Self =
                    toml::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
                cfg.validate()?;
                Ok(cfg)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Persist to the data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key. Does not write to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value does not fit
    /// the key's type.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json =
            serde_json::to_value(&*self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Self = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Check numeric settings against their allowed ranges.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` naming the first out-of-range key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let out_of_range = |key: &str, low: u64, high: u64| ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("must be between {low} and {high}"),
        };
        if !(1..=MAX_PROMISES).contains(&self.promises.max) {
            return Err(out_of_range("promises.max", 1, MAX_PROMISES as u64));
        }
        if !(1..=MAX_GRID_DAYS).contains(&self.streak.grid_days) {
            return Err(out_of_range("streak.grid_days", 1, u64::from(MAX_GRID_DAYS)));
        }
        Ok(())
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to default configuration");
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_default_values() {
        let cfg = Config::default();
        assert_eq!(cfg.promises.max, 3);
        assert!(!cfg.promises.reset_on_new_day);
        assert_eq!(cfg.streak.grid_days, 60);
        assert_eq!(cfg.body.default_target, 1800);
        assert_eq!(cfg.calendar.timezone, CalendarZone::Utc);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let cfg: Config = toml::from_str("[streak]\ngrid_days = 30\n").unwrap();
        assert_eq!(cfg.streak.grid_days, 30);
        assert_eq!(cfg.promises.max, 3);
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("promises.max").as_deref(), Some("3"));
        assert_eq!(cfg.get("promises.reset_on_new_day").as_deref(), Some("false"));
        assert_eq!(cfg.get("calendar.timezone").as_deref(), Some("utc"));
        assert!(cfg.get("promises.missing_key").is_none());
        assert!(cfg.get("").is_none());
    }

    #[test]
    fn set_updates_bool_number_and_enum() {
        let mut cfg = Config::default();
        cfg.set("promises.reset_on_new_day", "true").unwrap();
        cfg.set("streak.grid_days", "90").unwrap();
        cfg.set("calendar.timezone", "local").unwrap();
        assert!(cfg.promises.reset_on_new_day);
        assert_eq!(cfg.streak.grid_days, 90);
        assert_eq!(cfg.calendar.timezone, CalendarZone::Local);
    }

    #[test]
    fn set_rejects_unknown_key() {
        let mut cfg = Config::default();
        assert!(matches!(
            cfg.set("promises.nonexistent", "1"),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(matches!(cfg.set("promises", "1"), Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn set_rejects_invalid_values() {
        let mut cfg = Config::default();
        assert!(cfg.set("promises.reset_on_new_day", "maybe").is_err());
        assert!(cfg.set("streak.grid_days", "-4").is_err());
        assert!(cfg.set("calendar.timezone", "mars").is_err());
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn set_rejects_out_of_range_limits() {
        let mut cfg = Config::default();
        assert!(matches!(
            cfg.set("promises.max", "10"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(cfg.set("promises.max", "0").is_err());
        assert!(cfg.set("streak.grid_days", "4294967295").is_err());
        assert!(cfg.set("streak.grid_days", "367").is_err());
        assert!(cfg.set("streak.grid_days", "0").is_err());
        assert_eq!(cfg, Config::default());

        cfg.set("promises.max", "2").unwrap();
        cfg.set("streak.grid_days", "366").unwrap();
        assert_eq!(cfg.promises.max, 2);
        assert_eq!(cfg.streak.grid_days, 366);
    }

    #[test]
    fn load_from_rejects_out_of_range_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[promises]\nmax = 10\n").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(crate::CoreError::Config(ConfigError::InvalidValue { .. }))
        ));
    }

    #[test]
    fn load_from_writes_defaults_on_first_run() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn load_from_reports_parse_errors() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "promises = 7").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn save_then_load_preserves_changes() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let mut cfg = Config::default();
        cfg.set("body.default_target", "2200").unwrap();
        cfg.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap().body.default_target, 2200);
    }
}
