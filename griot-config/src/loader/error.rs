use std::path::PathBuf;

use thiserror::Error;

use crate::validation::ConfigGuardRailError;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("config file {path} does not exist")]
    MissingConfig { path: PathBuf },
    #[error("failed to read config file {path}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config from {origin}")]
    Document {
        origin: String,
        #[source]
        source: anyhow::Error,
    },
    #[error("invalid value for {var}: {reason}")]
    InvalidEnv { var: &'static str, reason: String },
    #[error(transparent)]
    GuardRail(#[from] ConfigGuardRailError),
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}
