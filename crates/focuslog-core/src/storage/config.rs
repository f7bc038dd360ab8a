//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Default countdown duration and category
//! - Notification and haptic preferences
//! - The category catalog and its fallback label
//!
//! Configuration is stored at `<data dir>/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::category::{Category, CategoryCatalog, DEFAULT_FALLBACK_LABEL};
use crate::error::ConfigError;
use crate::timer::TimerInput;

pub const CONFIG_FILE: &str = "config.toml";

/// Default timer inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerConfig {
    #[serde(default = "default_minutes")]
    pub minutes: u32,
    #[serde(default)]
    pub seconds: u32,
    /// Preselected category key.
    #[serde(default)]
    pub category: Option<String>,
}

/// Notification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_true")]
    pub haptics: bool,
}

/// Category catalog configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesConfig {
    #[serde(default = "default_fallback_label")]
    pub fallback_label: String,
    #[serde(default = "default_categories")]
    pub entries: Vec<Category>,
}

/// Application configuration.
///
/// Serialized to/from TOML at `<data dir>/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub timer: TimerConfig,
    #[serde(default)]
    pub notifications: NotificationsConfig,
    #[serde(default)]
    pub categories: CategoriesConfig,
}

// Default functions
fn default_minutes() -> u32 {
    25
}
fn default_true() -> bool {
    true
}
fn default_fallback_label() -> String {
    DEFAULT_FALLBACK_LABEL.into()
}
fn default_categories() -> Vec<Category> {
    CategoryCatalog::default().entries().to_vec()
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            minutes: default_minutes(),
            seconds: 0,
            category: None,
        }
    }
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            haptics: true,
        }
    }
}

impl Default for CategoriesConfig {
    fn default() -> Self {
        Self {
            fallback_label: default_fallback_label(),
            entries: default_categories(),
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
                        value
                            .parse::<bool>()
                            .map_err(|e| invalid(e.to_string()))?,
                    ),
                    serde_json::Value::Number(_) => {
                        let n = value
                            .parse::<u64>()
                            .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?;
                        serde_json::Value::Number(n.into())
                    }
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
                    }
                    // Optional keys are null until first set.
                    serde_json::Value::Null if value.is_empty() => serde_json::Value::Null,
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    pub fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from(CONFIG_FILE),
            message: e.to_string(),
        })?;
        Ok(dir.join(CONFIG_FILE))
    }

    /// Load from disk or write and return the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))
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

    /// Update a value by dot-separated key without saving.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value does not fit
    /// the key's type.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json = serde_json::to_value(&*self).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Set a value by key and save.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        self.apply(key, value)?;
        self.save()
    }

    pub fn catalog(&self) -> CategoryCatalog {
        CategoryCatalog::new(
            self.categories.entries.clone(),
            self.categories.fallback_label.clone(),
        )
    }

    /// Initial timer inputs derived from the configured defaults.
    pub fn timer_input(&self) -> TimerInput {
        TimerInput::new(
            self.timer.minutes.to_string(),
            self.timer.seconds.to_string(),
            self.timer.category.clone(),
        )
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
        assert_eq!(parsed.timer.minutes, 25);
        assert_eq!(parsed.categories.entries.len(), 4);
        assert!(parsed.timer.category.is_none());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let parsed: Config = toml::from_str("[timer]\nminutes = 50\n").unwrap();
        assert_eq!(parsed.timer.minutes, 50);
        assert_eq!(parsed.timer.seconds, 0);
        assert!(parsed.notifications.enabled);
        assert_eq!(parsed.categories.fallback_label, DEFAULT_FALLBACK_LABEL);
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("timer.minutes").as_deref(), Some("25"));
        assert_eq!(cfg.get("notifications.haptics").as_deref(), Some("true"));
        assert_eq!(
            cfg.get("categories.fallback_label").as_deref(),
            Some(DEFAULT_FALLBACK_LABEL)
        );
        assert!(cfg.get("timer.missing_key").is_none());
    }

    #[test]
    fn apply_updates_typed_values() {
        let mut cfg = Config::default();
        cfg.apply("timer.minutes", "50").unwrap();
        cfg.apply("notifications.enabled", "false").unwrap();
        cfg.apply("timer.category", "kodlama").unwrap();
        assert_eq!(cfg.timer.minutes, 50);
        assert!(!cfg.notifications.enabled);
        assert_eq!(cfg.timer.category.as_deref(), Some("kodlama"));
    }

    #[test]
    fn apply_rejects_unknown_key_and_bad_type() {
        let mut cfg = Config::default();
        assert!(matches!(
            cfg.apply("timer.nonexistent", "1"),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(matches!(
            cfg.apply("notifications.enabled", "not_a_bool"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(cfg.apply("timer.minutes", "-3").is_err());
        assert_eq!(cfg.timer.minutes, 25);
    }

    #[test]
    fn catalog_entries_can_be_replaced() {
        let mut cfg = Config::default();
        cfg.apply(
            "categories.entries",
            r#"[{"key":"gym","label":"Spor"}]"#,
        )
        .unwrap();
        let catalog = cfg.catalog();
        assert_eq!(catalog.label_for("gym"), "Spor");
        assert_eq!(catalog.label_for("ders"), DEFAULT_FALLBACK_LABEL);
    }

    #[test]
    fn load_from_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.timer.minutes, 25);
        assert!(path.exists());

        let mut cfg = cfg;
        cfg.apply("timer.seconds", "30").unwrap();
        cfg.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap().timer.seconds, 30);
    }

    #[test]
    fn load_from_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "timer = [").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::LoadFailed { .. })
        ));
    }

    #[test]
    fn timer_input_uses_defaults() {
        let mut cfg = Config::default();
        cfg.apply("timer.category", "ders").unwrap();
        let input = cfg.timer_input();
        assert_eq!(input.total_seconds(), 1500);
        assert_eq!(input.selected_category(), Some("ders"));
    }
}
