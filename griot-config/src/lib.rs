//! Configuration library for the Griot guide.
//!
//! Settings come from an optional `.env`, then one config document (TOML or
//! JSON, from an explicit path, `$GRIOT_CONFIG_PATH`, `$GRIOT_CONFIG_JSON` or
//! a default file), then per-field `GRIOT_*` overrides. The loaded
//! [`AppConfig`] is checked by [`validation::apply_guard_rails`] before it is
//! handed out.
#![allow(missing_docs)]

pub mod loader;
pub mod models;
pub mod validation;

pub use loader::{
    ConfigLoad, ConfigLoader, EnvConfig,
    error::ConfigLoadError,
};
pub use models::carousel::CarouselConfig;
pub use models::{AppConfig, ConfigSource};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
