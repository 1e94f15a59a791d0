//! `notifprefs-admin` -- management commands for notification preferences.
//!
//! Reads JSON documents, runs them through the preference engine and prints
//! the result as JSON on stdout. Logs go to stderr.
//!
//! # Environment variables
//!
//! | Variable                | Required | Default | Description                          |
//! |-------------------------|----------|---------|--------------------------------------|
//! | `NOTIFPREFS_BATCH_SIZE` | no       | `100`   | Bundles processed per `filter` batch |
//! | `NOTIFPREFS_PRETTY`     | no       | `true`  | Pretty-print JSON output             |
//! | `RUST_LOG`              | no       | `notifprefs_admin=info,notifprefs_core=info` | Log filter |

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use notifprefs_admin::cli::Cli;
use notifprefs_admin::commands;
use notifprefs_admin::config::AdminConfig;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "notifprefs_admin=info,notifprefs_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = AdminConfig::from_env().context("Invalid configuration")?;
    tracing::debug!(
        batch_size = config.batch_size,
        pretty = config.pretty,
        "Loaded admin configuration"
    );

    let output = commands::run(&cli.command, &config)?;

    let rendered = if config.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{rendered}");

    Ok(())
}
