//! eventctl - CLI for the Keptn event type registry
//!
//! Lists the registered event types, resolves symbols to wire values and
//! back, and checks the `type` field of event payloads.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

mod commands;
mod config;
mod error;
mod output;

use commands::Cli;
use config::{Config, LogFormat};

fn init_tracing(config: &Config) {
    // Prefer RUST_LOG, fall back to KEPTN_LOG_LEVEL
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_level.clone().into());

    let fmt_layer = match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Text => tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn main() -> Result<()> {
    // Flags are parsed before the environment config is read
    let cli = Cli::parse();

    let result = Config::from_env().and_then(|config| {
        init_tracing(&config);
        cli.run()
    });

    if let Err(e) = result {
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
