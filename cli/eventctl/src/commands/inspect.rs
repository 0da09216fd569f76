//! Inspect command (checks the `type` field of event payloads).

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use keptn_events::EventType;
use serde::Serialize;
use serde_json::Value;
use tabled::Tabled;
use tracing::{debug, warn};

use crate::error::CliError;
use crate::output::{print_output, print_warning, OutputFormat};

use super::CommandContext;

/// Inspect command.
#[derive(Debug, Args)]
pub struct InspectCommand {
    /// JSON file with one payload, an array of payloads, or one payload per
    /// line. Use `-` to read stdin.
    path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Tabled)]
struct InspectRow {
    #[tabled(rename = "#")]
    index: usize,

    #[tabled(rename = "Type")]
    event_type: String,

    #[tabled(rename = "Symbol")]
    #[tabled(display = "display_option")]
    symbol: Option<&'static str>,

    #[tabled(rename = "Status")]
    status: Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum Status {
    Known,
    Unknown,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Known => write!(f, "known"),
            Status::Unknown => write!(f, "unknown"),
        }
    }
}

fn display_option(opt: &Option<&'static str>) -> String {
    opt.unwrap_or("-").to_string()
}

impl InspectCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let (source, input) = if self.path.as_os_str() == "-" {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read payloads from stdin")?;
            ("<stdin>".to_string(), input)
        } else {
            let input = std::fs::read_to_string(&self.path)
                .with_context(|| format!("Failed to read payloads from {:?}", self.path))?;
            (self.path.display().to_string(), input)
        };

        let rows = inspect_payloads(&source, &input)?;
        let unknown = rows.iter().filter(|r| r.status == Status::Unknown).count();
        print_output(&rows, ctx.format);

        if unknown > 0 && ctx.format == OutputFormat::Table {
            print_warning(&format!(
                "{} of {} payloads have an unrecognized event type",
                unknown,
                rows.len()
            ));
        }
        Ok(())
    }
}

/// Classifies every payload in `input`.
///
/// `input` may hold one JSON value, a JSON array, or a stream of
/// whitespace-separated JSON values. Unknown event types are reported, not
/// rejected.
fn inspect_payloads(source: &str, input: &str) -> Result<Vec<InspectRow>, CliError> {
    let mut payloads = Vec::new();
    for value in serde_json::Deserializer::from_str(input).into_iter::<Value>() {
        match value.map_err(|source_err| CliError::InvalidJson {
            path: source.to_string(),
            source: source_err,
        })? {
            Value::Array(items) => payloads.extend(items),
            other => payloads.push(other),
        }
    }

    payloads
        .iter()
        .enumerate()
        .map(|(index, payload)| -> Result<InspectRow, CliError> {
            let raw = payload
                .get("type")
                .and_then(Value::as_str)
                .ok_or_else(|| CliError::MissingType {
                    path: format!("{}[{}]", source, index),
                })?;

            let row = match EventType::parse(raw) {
                Ok(event_type) => {
                    debug!(index, symbol = event_type.symbol(), "recognized event type");
                    InspectRow {
                        index,
                        event_type: raw.to_string(),
                        symbol: Some(event_type.symbol()),
                        status: Status::Known,
                    }
                }
                Err(e) => {
                    warn!(index, error = %e, "unrecognized event type");
                    InspectRow {
                        index,
                        event_type: raw.to_string(),
                        symbol: None,
                        status: Status::Unknown,
                    }
                }
            };
            Ok(row)
        })
        .collect()
}
