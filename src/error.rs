use crate::steps::StageKind;

/// Errors that end a single scenario
///
/// Domain failures from the greeting function are not in here: the action
/// stage captures them in the context instead of returning them.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("No quoted literal in title: {title}")]
    MalformedTitle { title: String },

    #[error("Assertion failed: expected {expected:?}, actual {actual}")]
    AssertionMismatch { expected: String, actual: String },

    #[error("Context field '{field}' was not set by a precondition")]
    MissingContext { field: &'static str },

    #[error("Unknown step: {step}")]
    UnknownStep { step: String },

    #[error("Step '{step}' is a {found} stage, expected {expected}")]
    StageOrder {
        step: String,
        expected: StageKind,
        found: StageKind,
    },
}

impl ScenarioError {
    /// Whether the failure came from the fixture wiring rather than an assertion
    pub fn is_harness_error(&self) -> bool {
        !matches!(self, ScenarioError::AssertionMismatch { .. })
    }
}
