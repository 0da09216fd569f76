//! The event type table and its lookups.
//!
//! Forward lookup (`EventType` to wire value) is a `const fn` match. Reverse
//! lookup goes through an index built once on first use.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::EventError;

// =============================================================================
// Event Type Table
// =============================================================================

define_event_types! {
    // Service
    ServiceCreate => SERVICE_CREATE = "sh.keptn.internal.event.service.create", Service;

    // Configuration
    ConfigurationChange => CONFIGURATION_CHANGE = "sh.keptn.event.configuration.change", Configuration;

    // Monitoring
    ConfigureMonitoring => CONFIGURE_MONITORING = "sh.keptn.event.monitoring.configure", Monitoring;

    // Deployment
    DeploymentFinished => DEPLOYMENT_FINISHED = "sh.keptn.events.deployment-finished", Deployment;

    // Test
    TestsFinished => TESTS_FINISHED = "sh.keptn.events.tests-finished", Test;

    // Evaluation
    StartEvaluation => START_EVALUATION = "sh.keptn.event.start-evaluation", Evaluation;
    EvaluationDone => EVALUATION_DONE = "sh.keptn.events.evaluation-done", Evaluation;
    EvaluationInvalidated => EVALUATION_INVALIDATED = "sh.keptn.events.evaluation.invalidated", Evaluation;

    // SLI retrieval
    StartSliRetrieval => START_SLI_RETRIEVAL = "sh.keptn.internal.event.get-sli", Sli;
    SliRetrievalDone => SLI_RETRIEVAL_DONE = "sh.keptn.internal.event.get-sli.done", Sli;

    // Lifecycle
    Done => DONE = "sh.keptn.events.done", Lifecycle;

    // Problem
    ProblemOpen => PROBLEM_OPEN = "sh.keptn.event.problem.open", Problem;
    ProblemDetected => PROBLEM_DETECTED = "sh.keptn.events.problem", Problem;
    ProblemResolved => PROBLEM_RESOLVED = "sh.keptn.events.problem.resolved", Problem;
    ProblemClosed => PROBLEM_CLOSED = "sh.keptn.event.problem.close", Problem;

    // Approval
    ApprovalTriggered => APPROVAL_TRIGGERED = "sh.keptn.event.approval.triggered", Approval;
    ApprovalFinished => APPROVAL_FINISHED = "sh.keptn.event.approval.finished", Approval;

    // Remediation
    RemediationTriggered => REMEDIATION_TRIGGERED = "sh.keptn.event.remediation.triggered", Remediation;
    RemediationStatusChanged => REMEDIATION_STATUS_CHANGED = "sh.keptn.event.remediation.status.changed", Remediation;
    RemediationFinished => REMEDIATION_FINISHED = "sh.keptn.event.remediation.finished", Remediation;

    // Action
    ActionTriggered => ACTION_TRIGGERED = "sh.keptn.event.action.triggered", Action;
    ActionStarted => ACTION_STARTED = "sh.keptn.event.action.started", Action;
    ActionFinished => ACTION_FINISHED = "sh.keptn.event.action.finished", Action;
}

// =============================================================================
// Lookups
// =============================================================================

fn wire_index() -> &'static HashMap<&'static str, EventType> {
    static INDEX: OnceLock<HashMap<&'static str, EventType>> = OnceLock::new();
    INDEX.get_or_init(|| EventType::ALL.iter().map(|t| (t.as_str(), *t)).collect())
}

impl EventType {
    /// Parses an event type from its wire value.
    ///
    /// Matching is exact and case-sensitive.
    pub fn parse(s: &str) -> Result<Self, EventError> {
        wire_index()
            .get(s)
            .copied()
            .ok_or_else(|| EventError::UnknownEventType(s.to_string()))
    }

    /// Looks up an event type by its symbol name, e.g. `ACTION_STARTED`.
    pub fn from_symbol(symbol: &str) -> Result<Self, EventError> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.symbol() == symbol)
            .ok_or_else(|| EventError::UnknownSymbol(symbol.to_string()))
    }
}

/// Returns the wire value for an event type.
#[must_use]
pub const fn resolve(event_type: EventType) -> &'static str {
    event_type.as_str()
}

/// Parses a wire value into an event type.
pub fn parse(wire_value: &str) -> Result<EventType, EventError> {
    EventType::parse(wire_value)
}

/// Returns every registered wire value in declaration order.
///
/// Each call starts a fresh iteration.
pub fn values() -> impl ExactSizeIterator<Item = &'static str> + Clone {
    EventType::ALL.iter().map(|t| t.as_str())
}

// =============================================================================
// Trait Impls
// =============================================================================

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EventType {
    type Err = EventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for EventType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl serde::Serialize for EventType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for EventType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;
    use rstest::rstest;

    use super::*;

    const EXPECTED: [(&str, &str); 23] = [
        ("SERVICE_CREATE", "sh.keptn.internal.event.service.create"),
        ("CONFIGURATION_CHANGE", "sh.keptn.event.configuration.change"),
        ("CONFIGURE_MONITORING", "sh.keptn.event.monitoring.configure"),
        ("DEPLOYMENT_FINISHED", "sh.keptn.events.deployment-finished"),
        ("TESTS_FINISHED", "sh.keptn.events.tests-finished"),
        ("START_EVALUATION", "sh.keptn.event.start-evaluation"),
        ("EVALUATION_DONE", "sh.keptn.events.evaluation-done"),
        ("EVALUATION_INVALIDATED", "sh.keptn.events.evaluation.invalidated"),
        ("START_SLI_RETRIEVAL", "sh.keptn.internal.event.get-sli"),
        ("SLI_RETRIEVAL_DONE", "sh.keptn.internal.event.get-sli.done"),
        ("DONE", "sh.keptn.events.done"),
        ("PROBLEM_OPEN", "sh.keptn.event.problem.open"),
        ("PROBLEM_DETECTED", "sh.keptn.events.problem"),
        ("PROBLEM_RESOLVED", "sh.keptn.events.problem.resolved"),
        ("PROBLEM_CLOSED", "sh.keptn.event.problem.close"),
        ("APPROVAL_TRIGGERED", "sh.keptn.event.approval.triggered"),
        ("APPROVAL_FINISHED", "sh.keptn.event.approval.finished"),
        ("REMEDIATION_TRIGGERED", "sh.keptn.event.remediation.triggered"),
        (
            "REMEDIATION_STATUS_CHANGED",
            "sh.keptn.event.remediation.status.changed",
        ),
        ("REMEDIATION_FINISHED", "sh.keptn.event.remediation.finished"),
        ("ACTION_TRIGGERED", "sh.keptn.event.action.triggered"),
        ("ACTION_STARTED", "sh.keptn.event.action.started"),
        ("ACTION_FINISHED", "sh.keptn.event.action.finished"),
    ];

    #[test]
    fn test_table_matches_wire_contract() {
        assert_eq!(EventType::ALL.len(), EXPECTED.len());
        for (event_type, (symbol, wire)) in EventType::ALL.iter().zip(EXPECTED) {
            assert_eq!(event_type.symbol(), symbol);
            assert_eq!(event_type.as_str(), wire);
        }
    }

    #[test]
    fn test_values_in_declaration_order() {
        let wire: Vec<_> = values().collect();
        let expected: Vec<_> = EXPECTED.iter().map(|(_, w)| *w).collect();
        assert_eq!(values().len(), 23);
        assert_eq!(wire, expected);
        // restartable
        assert_eq!(values().collect::<Vec<_>>(), wire);
    }

    #[test]
    fn test_parse_resolve_roundtrip() {
        for event_type in EventType::ALL {
            assert_eq!(parse(resolve(*event_type)), Ok(*event_type));
            assert_eq!(EventType::from_symbol(event_type.symbol()), Ok(*event_type));
        }
    }

    #[test]
    fn test_wire_values_unique() {
        let unique: HashSet<_> = values().collect();
        assert_eq!(unique.len(), EventType::ALL.len(), "Duplicate wire values found!");
    }

    #[test]
    fn test_symbols_unique() {
        let unique: HashSet<_> = EventType::ALL.iter().map(|t| t.symbol()).collect();
        assert_eq!(unique.len(), EventType::ALL.len(), "Duplicate symbols found!");
    }

    #[test]
    fn test_constants_match_variants() {
        assert_eq!(
            EventType::DeploymentFinished.as_str(),
            event_types::DEPLOYMENT_FINISHED
        );
        assert_eq!(
            EventType::RemediationStatusChanged.as_str(),
            event_types::REMEDIATION_STATUS_CHANGED
        );
    }

    #[rstest]
    #[case(EventType::DeploymentFinished, "sh.keptn.events.deployment-finished")]
    #[case(EventType::ActionFinished, "sh.keptn.event.action.finished")]
    #[case(EventType::ProblemDetected, "sh.keptn.events.problem")]
    #[case(EventType::SliRetrievalDone, "sh.keptn.internal.event.get-sli.done")]
    fn test_resolve(#[case] event_type: EventType, #[case] wire: &str) {
        assert_eq!(resolve(event_type), wire);
        assert_eq!(event_type.to_string(), wire);
    }

    #[test]
    fn test_parse_done() {
        assert_eq!(parse("sh.keptn.events.done"), Ok(EventType::Done));
        let parsed: EventType = "sh.keptn.events.done".parse().unwrap();
        assert_eq!(parsed, EventType::Done);
    }

    #[test]
    fn test_action_started_and_finished_differ() {
        assert_ne!(
            resolve(EventType::ActionStarted),
            resolve(EventType::ActionFinished)
        );
    }

    #[rstest]
    #[case("sh.keptn.nonexistent")]
    #[case("")]
    #[case("SH.KEPTN.EVENTS.DONE")]
    #[case(" sh.keptn.events.done")]
    #[case("sh.keptn.events.done ")]
    #[case("sh.keptn.events")]
    #[case("sh.keptn.event.get-action.triggered")]
    fn test_parse_unknown(#[case] input: &str) {
        let err = parse(input).unwrap_err();
        assert!(err.is_unknown_event_type());
        assert_eq!(err, EventError::UnknownEventType(input.to_string()));
        assert_eq!(err.input(), input);
    }

    #[rstest]
    #[case("action_started")]
    #[case("ActionStarted")]
    #[case("sh.keptn.event.action.started")]
    fn test_from_symbol_unknown(#[case] input: &str) {
        assert!(matches!(
            EventType::from_symbol(input),
            Err(EventError::UnknownSymbol(_))
        ));
    }

    #[test]
    fn test_json_roundtrip() {
        let json = serde_json::to_string(&EventType::ApprovalTriggered).unwrap();
        assert_eq!(json, "\"sh.keptn.event.approval.triggered\"");
        let parsed: EventType = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, EventType::ApprovalTriggered);
    }

    #[test]
    fn test_json_unknown_type_rejected() {
        let result: Result<EventType, _> = serde_json::from_str("\"sh.keptn.nonexistent\"");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("unknown event type"));
    }

    #[test]
    fn test_as_payload_discriminant() {
        #[derive(serde::Deserialize)]
        struct Payload {
            #[serde(rename = "type")]
            event_type: EventType,
        }

        let payload: Payload =
            serde_json::from_str(r#"{"type": "sh.keptn.event.problem.open", "data": {}}"#)
                .unwrap();
        assert_eq!(payload.event_type, EventType::ProblemOpen);
    }

    proptest! {
        #[test]
        fn prop_parse_rejects_unregistered(s in "\\PC*") {
            prop_assume!(!values().any(|v| v == s));
            prop_assert_eq!(parse(&s), Err(EventError::UnknownEventType(s.clone())));
        }

        #[test]
        fn prop_parse_rejects_suffixed_values(
            idx in 0..EventType::ALL.len(),
            suffix in "[a-z.-]{1,8}",
        ) {
            let candidate = format!("{}{}", EventType::ALL[idx].as_str(), suffix);
            prop_assume!(!values().any(|v| v == candidate));
            prop_assert!(parse(&candidate).unwrap_err().is_unknown_event_type());
        }
    }
}
