//! `griotctl`: drive the Griot guide's core from a terminal.
#![allow(missing_docs)]

mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use griot_config::ConfigLoader;
use griot_core::catalog::CategoryFilter;
use griot_model::Locale;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "griotctl", version, about = "Griot museum guide toolbox")]
struct Cli {
    /// Config file (TOML or JSON). Overrides $GRIOT_CONFIG_PATH.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Env file to load before reading GRIOT_* variables (default: .env)
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the home carousel and print the visible cards after each settle
    Carousel {
        /// Number of settles before the carousel is disposed
        #[arg(long, default_value_t = 5)]
        cycles: u64,
        /// Auto-advance period in milliseconds
        #[arg(long)]
        period_ms: Option<u64>,
        /// Transition duration in milliseconds
        #[arg(long)]
        transition_ms: Option<u64>,
    },
    /// Browse the artifact catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// List or toggle favourite artifacts
    Favorites {
        /// Directory holding the favourites file (defaults to the configured data_dir)
        #[arg(long, global = true)]
        data_dir: Option<PathBuf>,
        #[command(subcommand)]
        action: FavoritesAction,
    },
    /// Translate a UI string key
    Translate {
        key: String,
        /// fr, en or wolof (defaults to the configured locale)
        #[arg(long)]
        locale: Option<Locale>,
    },
    /// Print the effective configuration and where it came from
    Config,
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List artifacts, optionally for one category
    List {
        /// all, paintings, tapestries, sculptures or photos
        #[arg(long, default_value = "all")]
        category: CategoryFilter,
    },
    /// Search names, origins and descriptions
    Search { query: String },
}

#[derive(Subcommand)]
enum FavoritesAction {
    /// Show favourite artifacts in catalog order
    List,
    /// Add or remove an artifact by id
    Toggle { id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    if let Some(path) = &cli.env_file {
        loader = loader.with_env_file(path);
    }
    let load = loader.load().context("failed to load configuration")?;
    let config = load.config;

    match cli.command {
        Command::Carousel {
            cycles,
            period_ms,
            transition_ms,
        } => {
            commands::carousel::run(&config, cycles, period_ms, transition_ms)
                .await
        }
        Command::Catalog { action } => match action {
            CatalogAction::List { category } => {
                commands::catalog::list(category);
                Ok(())
            }
            CatalogAction::Search { query } => {
                commands::catalog::search(&query);
                Ok(())
            }
        },
        Command::Favorites { data_dir, action } => {
            let data_dir = data_dir.unwrap_or_else(|| config.data_dir.clone());
            match action {
                FavoritesAction::List => commands::favorites::list(&data_dir).await,
                FavoritesAction::Toggle { id } => {
                    commands::favorites::toggle(&data_dir, &id).await
                }
            }
        }
        Command::Translate { key, locale } => {
            commands::translate::run(&key, locale.unwrap_or(config.locale));
            Ok(())
        }
        Command::Config => commands::show_config(&config, &load.source),
    }
}
