pub mod carousel;

use std::path::PathBuf;

use griot_model::Locale;
use serde::{Deserialize, Serialize};

use carousel::CarouselConfig;

/// Where the config document came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    /// Path passed to the loader directly (e.g. `--config`).
    Explicit(PathBuf),
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Default => f.write_str("built-in defaults"),
            ConfigSource::Explicit(path) => write!(f, "{}", path.display()),
            ConfigSource::EnvPath(path) => {
                write!(f, "$GRIOT_CONFIG_PATH ({})", path.display())
            }
            ConfigSource::EnvInline => f.write_str("$GRIOT_CONFIG_JSON"),
            ConfigSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

/// Everything the guide needs at startup.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Initial UI language.
    pub locale: Locale,
    /// Directory holding persisted state such as favourites.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    pub carousel: CarouselConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            data_dir: default_data_dir(),
            carousel: CarouselConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load using the process environment and the working directory.
    /// See [`ConfigLoader::load`](crate::ConfigLoader::load) for the order.
    pub fn load_from_env()
    -> Result<(Self, ConfigSource), crate::ConfigLoadError> {
        let load = crate::ConfigLoader::new().load()?;
        Ok((load.config, load.source))
    }
}
