//! Event categories.
//!
//! Categories group event types for display. They are assigned per event type
//! in the table, never derived from the wire value.

use serde::{Deserialize, Serialize};

use crate::{EventError, EventType};

/// The workflow area an event type belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    Service,
    Configuration,
    Monitoring,
    Deployment,
    Test,
    Evaluation,
    Sli,
    Lifecycle,
    Problem,
    Approval,
    Remediation,
    Action,
}

impl EventCategory {
    /// Every category, in the order its first event type is declared.
    pub const ALL: &'static [EventCategory] = &[
        EventCategory::Service,
        EventCategory::Configuration,
        EventCategory::Monitoring,
        EventCategory::Deployment,
        EventCategory::Test,
        EventCategory::Evaluation,
        EventCategory::Sli,
        EventCategory::Lifecycle,
        EventCategory::Problem,
        EventCategory::Approval,
        EventCategory::Remediation,
        EventCategory::Action,
    ];

    /// Returns the lowercase category name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            EventCategory::Service => "service",
            EventCategory::Configuration => "configuration",
            EventCategory::Monitoring => "monitoring",
            EventCategory::Deployment => "deployment",
            EventCategory::Test => "test",
            EventCategory::Evaluation => "evaluation",
            EventCategory::Sli => "sli",
            EventCategory::Lifecycle => "lifecycle",
            EventCategory::Problem => "problem",
            EventCategory::Approval => "approval",
            EventCategory::Remediation => "remediation",
            EventCategory::Action => "action",
        }
    }

    /// Returns the event types in this category, in declaration order.
    pub fn event_types(self) -> impl Iterator<Item = EventType> {
        EventType::ALL
            .iter()
            .copied()
            .filter(move |t| t.category() == self)
    }
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EventCategory {
    type Err = EventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| EventError::UnknownCategory(s.to_string()))
    }
}
