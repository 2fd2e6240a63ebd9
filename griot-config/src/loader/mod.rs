pub mod error;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, anyhow};
use tracing::{debug, info, warn};

use crate::models::{AppConfig, ConfigSource};
use crate::validation::{self, ConfigWarnings};
use error::ConfigLoadError;

const DEFAULT_CONFIG_LOCATIONS: &[&str] = &[
    "griot.toml",
    "griot.json",
    "config/griot.toml",
    "config/griot.json",
];

/// The `GRIOT_*` variables the loader reads, captured once.
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    pub config_path: Option<String>,
    pub config_json: Option<String>,
    pub locale: Option<String>,
    pub data_dir: Option<String>,
    pub auto_advance: Option<String>,
    pub transition: Option<String>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        fn read(key: &str) -> Option<String> {
            env::var(key).ok().filter(|value| !value.trim().is_empty())
        }

        Self {
            config_path: read("GRIOT_CONFIG_PATH"),
            config_json: read("GRIOT_CONFIG_JSON"),
            locale: read("GRIOT_LOCALE"),
            data_dir: read("GRIOT_DATA_DIR"),
            auto_advance: read("GRIOT_AUTO_ADVANCE"),
            transition: read("GRIOT_TRANSITION"),
        }
    }
}

#[derive(Debug, Default, Clone)]
struct ConfigLoaderOptions {
    config_path: Option<PathBuf>,
    env_file: Option<PathBuf>,
    /// Directory the default config files are looked up in. Defaults to the
    /// working directory.
    base_dir: Option<PathBuf>,
}

/// Result of a successful load.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: AppConfig,
    pub source: ConfigSource,
    pub env_file_loaded: bool,
    pub warnings: ConfigWarnings,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    pub fn with_base_dir<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.base_dir = Some(path.into());
        self
    }

    /// Load configuration from the process environment.
    ///
    /// Evaluation order:
    /// 1) `.env` (or the configured env file), if present,
    /// 2) the explicit config path, if one was given,
    /// 3) `$GRIOT_CONFIG_PATH` (TOML or JSON file),
    /// 4) `$GRIOT_CONFIG_JSON` (inline JSON),
    /// 5) the first existing default file,
    /// 6) built-in defaults;
    ///
    /// then `GRIOT_LOCALE`, `GRIOT_DATA_DIR`, `GRIOT_AUTO_ADVANCE` and
    /// `GRIOT_TRANSITION` override individual fields.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = self.load_env_file()?;
        let mut load = self.load_with_env(&EnvConfig::gather())?;
        load.env_file_loaded = env_file_loaded;
        Ok(load)
    }

    /// Same as [`load`](Self::load) but with the variables supplied by the
    /// caller and no `.env` handling.
    pub fn load_with_env(
        &self,
        env: &EnvConfig,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let (mut config, source) = self.load_document(env)?;
        apply_env_overrides(&mut config, env)?;

        let warnings = validation::apply_guard_rails(&config)?;
        for warning in &warnings.items {
            warn!(hint = ?warning.hint, "{}", warning.message);
        }
        info!(%source, locale = %config.locale, "configuration loaded");

        Ok(ConfigLoad {
            config,
            source,
            env_file_loaded: false,
            warnings,
        })
    }

    fn load_env_file(&self) -> Result<bool, ConfigLoadError> {
        let loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true),
            None => dotenvy::dotenv().map(|_| true),
        };
        let loaded = loaded.or_else(|err| match err {
            dotenvy::Error::Io(_) => Ok(false),
            _ => Err(err),
        })?;
        if loaded {
            debug!("environment file loaded");
        }
        Ok(loaded)
    }

    fn load_document(
        &self,
        env: &EnvConfig,
    ) -> Result<(AppConfig, ConfigSource), ConfigLoadError> {
        if let Some(path) = &self.options.config_path {
            if !path.exists() {
                return Err(ConfigLoadError::MissingConfig { path: path.clone() });
            }
            let config = load_from_file(path)?;
            return Ok((config, ConfigSource::Explicit(path.clone())));
        }

        if let Some(raw) = &env.config_path {
            let path = PathBuf::from(raw);
            if !path.exists() {
                return Err(ConfigLoadError::MissingConfig { path });
            }
            let config = load_from_file(&path)?;
            return Ok((config, ConfigSource::EnvPath(path)));
        }

        if let Some(raw) = &env.config_json {
            let config = parse_json(raw)
                .context("failed to parse GRIOT_CONFIG_JSON")
                .map_err(|source| ConfigLoadError::Document {
                    origin: "GRIOT_CONFIG_JSON".into(),
                    source,
                })?;
            return Ok((config, ConfigSource::EnvInline));
        }

        if let Some(path) = self.find_default_file() {
            let config = load_from_file(&path)?;
            return Ok((config, ConfigSource::File(path)));
        }

        Ok((AppConfig::default(), ConfigSource::Default))
    }

    fn find_default_file(&self) -> Option<PathBuf> {
        let base = self
            .options
            .base_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        DEFAULT_CONFIG_LOCATIONS
            .iter()
            .map(|candidate| base.join(candidate))
            .find(|path| path.is_file())
    }
}

pub fn load_from_file(path: &Path) -> Result<AppConfig, ConfigLoadError> {
    let contents =
        fs::read_to_string(path).map_err(|source| ConfigLoadError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;

    let origin = path.display().to_string();
    let parsed = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => parse_json(&contents),
        Some("toml") => toml::from_str(&contents)
            .map_err(|err| anyhow!("invalid toml: {err}")),
        _ => parse_from_str(&contents, &origin),
    };
    parsed.map_err(|source| ConfigLoadError::Document { origin, source })
}

/// Try TOML first, then JSON.
pub fn parse_from_str(contents: &str, origin: &str) -> anyhow::Result<AppConfig> {
    toml::from_str(contents).or_else(|toml_err| {
        serde_json::from_str(contents).map_err(|json_err| {
            anyhow!(
                "failed to parse config {origin}: toml error: {toml_err}; json error: {json_err}"
            )
        })
    })
}

pub fn parse_json(raw: &str) -> anyhow::Result<AppConfig> {
    serde_json::from_str(raw).map_err(|err| anyhow!("invalid config json: {err}"))
}

fn apply_env_overrides(
    config: &mut AppConfig,
    env: &EnvConfig,
) -> Result<(), ConfigLoadError> {
    if let Some(raw) = &env.locale {
        config.locale = raw.parse().map_err(|err| ConfigLoadError::InvalidEnv {
            var: "GRIOT_LOCALE",
            reason: format!("{err}"),
        })?;
    }

    if let Some(raw) = &env.data_dir {
        config.data_dir = PathBuf::from(raw);
    }

    if let Some(raw) = &env.auto_advance {
        config.carousel.auto_advance_period_ms =
            parse_millis("GRIOT_AUTO_ADVANCE", raw)?;
    }

    if let Some(raw) = &env.transition {
        config.carousel.transition_duration_ms =
            parse_millis("GRIOT_TRANSITION", raw)?;
    }

    Ok(())
}

fn parse_millis(var: &'static str, raw: &str) -> Result<u64, ConfigLoadError> {
    let duration: Duration =
        humantime::parse_duration(raw.trim()).map_err(|err| {
            ConfigLoadError::InvalidEnv {
                var,
                reason: err.to_string(),
            }
        })?;
    u64::try_from(duration.as_millis()).map_err(|_| ConfigLoadError::InvalidEnv {
        var,
        reason: "duration is too large".into(),
    })
}
