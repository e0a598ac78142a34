//! User settings persistence.
//!
//! Stores CLI preferences in ~/.rapida/metadata.toml.
//! Settings are resolved with env var > metadata.toml > default priority
//! (see [`crate::config::Config`]).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::providers::ProviderKind;

/// User settings persisted to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub output: OutputSettings,

    #[serde(default)]
    pub logging: LoggingSettings,

    #[serde(default)]
    pub defaults: DefaultsSettings,
}

/// How records are printed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Pretty-print JSON records.
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self { pretty: true }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,

    /// Emit JSON log lines instead of the human formatter.
    #[serde(default)]
    pub json: bool,
}

fn default_log_filter() -> String {
    "rapida_metadata=warn".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DefaultsSettings {
    /// Provider category used when a command omits `--kind`.
    #[serde(default)]
    pub kind: Option<String>,
}

impl Settings {
    /// Default TOML settings path (~/.rapida/metadata.toml).
    pub fn default_toml_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rapida")
            .join("metadata.toml")
    }

    /// Load settings from a TOML file.
    ///
    /// Returns `None` if the file doesn't exist. Returns an error only
    /// if the file exists but can't be read or parsed.
    pub fn load_toml(path: &Path) -> Result<Option<Self>, ConfigError> {
        let data = match std::fs::read_to_string(path) {
            Ok(d) => d,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ConfigError::Io(e)),
        };

        let settings: Self = toml::from_str(&data).map_err(|e| {
            ConfigError::ParseError(format!("invalid TOML in {}: {}", path.display(), e))
        })?;
        settings.check_default_kind()?;
        Ok(Some(settings))
    }

    /// Write the settings file, creating parent directories as needed.
    pub fn save_toml(&self, path: &Path) -> Result<(), ConfigError> {
        let raw = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::ParseError(format!("failed to serialize settings: {e}")))?;

        let content = format!(
            "# rapida-metadata settings.\n\
             #\n\
             # Priority: env var > this file > defaults.\n\
             \n\
             {raw}"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get a setting value by dotted path (e.g. "logging.filter").
    pub fn get(&self, path: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let mut current = &json;

        for part in path.split('.') {
            current = current.get(part)?;
        }

        match current {
            serde_json::Value::Object(_) => None,
            other => Some(display_value(other)),
        }
    }

    /// Set a setting value by dotted path.
    ///
    /// The value is parsed according to the type of the existing field.
    pub fn set(&mut self, path: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            key: path.to_string(),
            message,
        };

        let mut json = serde_json::to_value(&*self)
            .map_err(|e| ConfigError::ParseError(format!("failed to serialize settings: {e}")))?;

        let mut current = &mut json;
        for part in path.split('.') {
            current = current
                .get_mut(part)
                .ok_or_else(|| invalid("unknown setting".to_string()))?;
        }

        *current = match &*current {
            serde_json::Value::Bool(_) => serde_json::Value::Bool(
                parse_bool(value)
                    .ok_or_else(|| invalid(format!("expected a boolean, got '{value}'")))?,
            ),
            serde_json::Value::Object(_) => {
                return Err(invalid("cannot assign a whole section".to_string()));
            }
            _ if value.is_empty() || value == "null" => serde_json::Value::Null,
            _ => serde_json::Value::String(value.to_string()),
        };

        let updated: Self = serde_json::from_value(json)
            .map_err(|e| invalid(format!("failed to apply setting: {e}")))?;
        updated.check_default_kind()?;
        *self = updated;
        Ok(())
    }

    /// List all settings as (path, value) pairs, sorted by path.
    pub fn list(&self) -> Vec<(String, String)> {
        let json = match serde_json::to_value(self) {
            Ok(v) => v,
            Err(_) => return Vec::new(),
        };

        let mut results = Vec::new();
        collect_settings(&json, String::new(), &mut results);
        results.sort_by(|a, b| a.0.cmp(&b.0));
        results
    }

    fn check_default_kind(&self) -> Result<(), ConfigError> {
        match self.defaults.kind.as_deref() {
            Some(kind) if ProviderKind::parse(kind).is_none() => Err(ConfigError::InvalidValue {
                key: "defaults.kind".to_string(),
                message: format!("unknown provider kind '{kind}'"),
            }),
            _ => Ok(()),
        }
    }
}

pub(crate) fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

/// Recursively collect settings paths and values.
fn collect_settings(
    value: &serde_json::Value,
    prefix: String,
    results: &mut Vec<(String, String)>,
) {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                collect_settings(val, path, results);
            }
        }
        other => results.push((prefix, display_value(other))),
    }
}
