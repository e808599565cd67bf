//! # Vitrine Showcase
//!
//! Command line front end for the Vitrine component showcase. It loads the
//! showcase configuration, assembles the demo pages against the bundled
//! TechStore catalog and prints them, and exposes the pagination window and
//! carousel autoplay for poking at from a terminal.

mod commands;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vitrine_config::{ConfigLoad, ConfigLoader};

#[derive(Parser, Debug)]
#[command(name = "vitrine-showcase")]
#[command(about = "Render the Vitrine storefront and component gallery")]
struct Cli {
    /// Configuration file (TOML or JSON). Falls back to $VITRINE_CONFIG_PATH,
    /// $VITRINE_CONFIG_JSON and ./vitrine.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Assemble and print demo pages
    Pages {
        /// Page to print (`home` or `components`); all pages when omitted
        page: Option<String>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print the page window and the pagination bar for a position
    Paginate {
        #[arg(long)]
        current: usize,

        #[arg(long)]
        total: usize,

        /// Window size; defaults to pagination.max_visible_pages
        #[arg(long)]
        max: Option<usize>,
    },
    /// Run carousel autoplay and print every slide change
    Carousel {
        #[arg(long, default_value_t = 3)]
        slides: usize,

        /// Autoplay period; defaults to carousel.autoplay_interval_ms
        #[arg(long, value_parser = clap::value_parser!(u64).range(100..))]
        interval_ms: Option<u64>,

        /// Number of slide changes to wait for
        #[arg(long, default_value_t = 5)]
        ticks: usize,

        /// Wrap past the last slide
        #[arg(long, default_value_t = false)]
        infinite: bool,
    },
    /// Show where the configuration came from
    Config {
        /// Also print the effective configuration
        #[arg(long, default_value_t = false)]
        print: bool,

        #[arg(long, value_enum, default_value_t = ConfigFormat::Toml)]
        format: ConfigFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ConfigFormat {
    Toml,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so page output stays pipeable. Override via RUST_LOG.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let load = load_config(cli.config.as_ref())?;

    match cli.command {
        Command::Pages { page, format } => {
            commands::pages(&load.config, page.as_deref(), format)
        }
        Command::Paginate {
            current,
            total,
            max,
        } => commands::paginate(&load.config, current, total, max),
        Command::Carousel {
            slides,
            interval_ms,
            ticks,
            infinite,
        } => {
            commands::carousel(
                &load.config,
                commands::CarouselRun {
                    slides,
                    interval_ms,
                    ticks,
                    infinite,
                },
            )
            .await
        }
        Command::Config { print, format } => {
            commands::config(&load, print, format)
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<ConfigLoad> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = path {
        loader = loader.with_config_path(path.clone());
    }

    let load = loader.load().context("failed to load configuration")?;
    info!(source = %load.source.describe(), "configuration loaded");

    for warning in &load.warnings.items {
        match &warning.hint {
            Some(hint) => {
                warn!(message = %warning.message, hint = %hint, "configuration warning")
            }
            None => {
                warn!(message = %warning.message, "configuration warning")
            }
        }
    }

    Ok(load)
}
