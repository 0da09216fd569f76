//! # keptn-events
//!
//! The closed registry of Keptn event types.
//!
//! ## Design Principles
//!
//! - The set of event types is fixed at build time; there is no registration
//! - Every event type maps to exactly one wire value and vice versa
//! - Wire values are an external contract and never change once published
//! - Wire values are opaque: they are matched by exact, case-sensitive equality
//!
//! ## Wire Format
//!
//! Wire values follow a reverse-DNS convention,
//! `sh.keptn.<category>.<subject>[.<qualifier>]`:
//! - `sh.keptn.events.deployment-finished`
//! - `sh.keptn.event.approval.triggered`
//! - `sh.keptn.internal.event.get-sli.done`
//!
//! ## Lookup
//!
//! ```
//! use keptn_events::{event_types, EventType};
//!
//! assert_eq!(EventType::DeploymentFinished.as_str(), event_types::DEPLOYMENT_FINISHED);
//! assert_eq!(EventType::parse("sh.keptn.events.done"), Ok(EventType::Done));
//! assert!(EventType::parse("sh.keptn.nonexistent").is_err());
//! ```

#[macro_use]
mod macros;

mod category;
mod error;
mod types;

pub use category::EventCategory;
pub use error::EventError;
pub use types::*;
