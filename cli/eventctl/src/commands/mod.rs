//! CLI commands.

mod inspect;
mod list;
mod lookup;

use anyhow::Result;
use clap::{Parser, Subcommand};
use keptn_events::EventType;
use serde::Serialize;
use tabled::Tabled;

use crate::output::OutputFormat;

/// eventctl - Inspect the Keptn event type registry.
#[derive(Debug, Parser)]
#[command(name = "eventctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true, env = "KEPTN_OUTPUT", default_value = "table")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List registered event types.
    List(list::ListCommand),

    /// Resolve a symbol (e.g. DEPLOYMENT_FINISHED) to its wire value.
    Resolve(lookup::ResolveCommand),

    /// Parse a wire value (e.g. sh.keptn.events.done) to its symbol.
    Parse(lookup::ParseCommand),

    /// Check the `type` field of JSON event payloads.
    Inspect(inspect::InspectCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let ctx = CommandContext {
            format: self.format,
        };

        match self.command {
            Commands::List(cmd) => cmd.run(&ctx),
            Commands::Resolve(cmd) => cmd.run(&ctx),
            Commands::Parse(cmd) => cmd.run(&ctx),
            Commands::Inspect(cmd) => cmd.run(&ctx),
            Commands::Version => {
                println!("eventctl {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub format: OutputFormat,
}

/// One registry entry as printed by `list`, `resolve`, and `parse`.
#[derive(Debug, Clone, Serialize, Tabled)]
struct EventRow {
    #[tabled(rename = "Symbol")]
    symbol: &'static str,

    #[tabled(rename = "Wire Value")]
    wire_value: &'static str,

    #[tabled(rename = "Category")]
    category: &'static str,
}

impl From<EventType> for EventRow {
    fn from(event_type: EventType) -> Self {
        Self {
            symbol: event_type.symbol(),
            wire_value: event_type.as_str(),
            category: event_type.category().as_str(),
        }
    }
}
