//! Error handling and display for the CLI.

use colored::Colorize;
use keptn_events::EventError;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Event(#[from] EventError),

    #[error("{path}: payload has no string `type` field")]
    MissingType { path: String },

    #[error("{path}: invalid JSON: {source}")]
    InvalidJson {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Returns the hint shown under a lookup error.
fn hint(err: &EventError) -> &'static str {
    match err {
        EventError::UnknownEventType(_) => {
            "Hint: Wire values are exact and case-sensitive. Run `eventctl list` to see them."
        }
        EventError::UnknownSymbol(_) => {
            "Hint: Symbols are upper snake case, e.g. DEPLOYMENT_FINISHED. Run `eventctl list`."
        }
        EventError::UnknownCategory(_) => {
            "Hint: Categories are listed in the Category column of `eventctl list`."
        }
    }
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(CliError::Event(event_err)) = err.downcast_ref::<CliError>() {
        // Debug formatting keeps stray whitespace and case visible
        eprintln!("Input: {:?}", event_err.input());
        eprintln!("\n{}", hint(event_err).yellow());
    }
}
