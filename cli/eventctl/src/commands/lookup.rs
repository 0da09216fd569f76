//! Resolve and parse commands.

use anyhow::Result;
use clap::Args;
use keptn_events::EventType;
use tracing::debug;

use crate::error::CliError;
use crate::output::print_value;

use super::{CommandContext, EventRow};

/// Resolve command.
#[derive(Debug, Args)]
pub struct ResolveCommand {
    /// Event type symbol, e.g. DEPLOYMENT_FINISHED.
    symbol: String,
}

impl ResolveCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let row = resolve_symbol(&self.symbol)?;
        debug!(symbol = %self.symbol, wire_value = row.wire_value, "resolved event type");
        print_value(row.wire_value, &row, ctx.format);
        Ok(())
    }
}

/// Parse command.
#[derive(Debug, Args)]
pub struct ParseCommand {
    /// Wire value, e.g. sh.keptn.events.done.
    wire_value: String,
}

impl ParseCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let row = parse_wire_value(&self.wire_value)?;
        debug!(wire_value = %self.wire_value, symbol = row.symbol, "parsed event type");
        print_value(row.symbol, &row, ctx.format);
        Ok(())
    }
}

fn resolve_symbol(symbol: &str) -> Result<EventRow, CliError> {
    Ok(EventType::from_symbol(symbol)?.into())
}

fn parse_wire_value(wire_value: &str) -> Result<EventRow, CliError> {
    Ok(EventType::parse(wire_value)?.into())
}
