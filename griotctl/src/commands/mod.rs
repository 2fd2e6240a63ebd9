pub mod carousel;
pub mod catalog;
pub mod favorites;
pub mod translate;

use anyhow::{Context, Result};
use griot_config::{AppConfig, ConfigSource};

pub fn show_config(config: &AppConfig, source: &ConfigSource) -> Result<()> {
    let rendered =
        toml::to_string(config).context("failed to render configuration")?;
    println!("# source: {source}");
    print!("{rendered}");
    Ok(())
}
