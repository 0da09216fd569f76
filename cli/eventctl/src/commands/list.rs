//! List command.

use anyhow::Result;
use clap::Args;
use keptn_events::{EventCategory, EventType};
use tracing::debug;

use crate::error::CliError;
use crate::output::print_output;

use super::{CommandContext, EventRow};

/// List command.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Only list event types in this category (e.g. problem, remediation).
    #[arg(long)]
    category: Option<String>,
}

impl ListCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let rows = rows(self.category.as_deref())?;
        debug!(count = rows.len(), category = ?self.category, "listing event types");
        print_output(&rows, ctx.format);
        Ok(())
    }
}

fn rows(category: Option<&str>) -> Result<Vec<EventRow>, CliError> {
    let rows = match category {
        Some(name) => {
            let category: EventCategory = name.parse()?;
            category.event_types().map(EventRow::from).collect()
        }
        None => EventType::ALL.iter().copied().map(EventRow::from).collect(),
    };
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use keptn_events::EventError;

    use super::*;

    #[test]
    fn test_rows_all_in_declaration_order() {
        let rows = rows(None).unwrap();
        assert_eq!(rows.len(), 23);
        assert_eq!(rows[0].symbol, "SERVICE_CREATE");
        assert_eq!(rows[22].symbol, "ACTION_FINISHED");
    }

    #[test]
    fn test_rows_filtered_by_category() {
        let rows = rows(Some("action")).unwrap();
        let symbols: Vec<_> = rows.iter().map(|r| r.symbol).collect();
        assert_eq!(
            symbols,
            vec!["ACTION_TRIGGERED", "ACTION_STARTED", "ACTION_FINISHED"]
        );
    }

    #[test]
    fn test_rows_unknown_category() {
        let err = rows(Some("incident")).unwrap_err();
        assert!(matches!(
            err,
            CliError::Event(EventError::UnknownCategory(_))
        ));
    }
}
