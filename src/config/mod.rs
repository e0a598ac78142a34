//! Runtime configuration for the CLI.
//!
//! Settings are resolved with priority: env var > metadata.toml > default.
//! `.env` in the working directory is loaded via dotenvy before env vars
//! are read; it never overrides variables already set.

pub(crate) mod helpers;

use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::providers::ProviderKind;
use crate::settings::Settings;

pub const ENV_LOG: &str = "RAPIDA_METADATA_LOG";
pub const ENV_LOG_JSON: &str = "RAPIDA_METADATA_LOG_JSON";
pub const ENV_PRETTY: &str = "RAPIDA_METADATA_PRETTY";
pub const ENV_KIND: &str = "RAPIDA_METADATA_KIND";

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub output: OutputConfig,
    pub logging: LoggingConfig,
    /// Category used when a command omits `--kind`.
    pub default_kind: Option<ProviderKind>,
    /// Settings file the values were read from, if any.
    pub source: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutputConfig {
    pub pretty: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    pub filter: String,
    pub json: bool,
}

impl Config {
    /// Load `.env`, read the settings file and apply env overrides.
    ///
    /// An explicit `toml_path` must exist; the default path is optional.
    pub fn load(toml_path: Option<&Path>) -> crate::Result<Self> {
        let _ = dotenvy::dotenv();
        let (settings, source) = Self::load_settings(toml_path)?;
        let mut config = Self::resolve(&settings)?;
        config.source = source;
        Ok(config)
    }

    /// Read the settings file, falling back to defaults when the default
    /// path is missing.
    pub fn load_settings(
        explicit_path: Option<&Path>,
    ) -> Result<(Settings, Option<PathBuf>), ConfigError> {
        let path = explicit_path
            .map(PathBuf::from)
            .unwrap_or_else(Settings::default_toml_path);

        match Settings::load_toml(&path)? {
            Some(settings) => Ok((settings, Some(path))),
            None if explicit_path.is_some() => Err(ConfigError::ParseError(format!(
                "Config file not found: {}",
                path.display()
            ))),
            None => Ok((Settings::default(), None)),
        }
    }

    /// Apply env overrides on top of `settings`.
    pub fn resolve(settings: &Settings) -> Result<Self, ConfigError> {
        let filter =
            helpers::optional_env(ENV_LOG)?.unwrap_or_else(|| settings.logging.filter.clone());
        let json = helpers::optional_bool_env(ENV_LOG_JSON)?.unwrap_or(settings.logging.json);
        let pretty = helpers::optional_bool_env(ENV_PRETTY)?.unwrap_or(settings.output.pretty);

        let default_kind = match helpers::optional_env(ENV_KIND)? {
            Some(raw) => Some(parse_kind(&raw, ENV_KIND)?),
            None => settings
                .defaults
                .kind
                .as_deref()
                .map(|raw| parse_kind(raw, "defaults.kind"))
                .transpose()?,
        };

        Ok(Self {
            output: OutputConfig { pretty },
            logging: LoggingConfig { filter, json },
            default_kind,
            source: None,
        })
    }
}

fn parse_kind(value: &str, key: &str) -> Result<ProviderKind, ConfigError> {
    ProviderKind::parse(value).ok_or_else(|| ConfigError::InvalidValue {
        key: key.to_string(),
        message: format!(
            "expected one of text, stt, tts, embedding, reranker, storage, telephony, tool; got '{value}'"
        ),
    })
}
