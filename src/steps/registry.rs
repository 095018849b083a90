use super::{given, then, when, StageKind, StepFn};
use crate::error::ScenarioError;
use std::collections::HashMap;

/// A stage function together with the role it plays
#[derive(Debug, Clone, Copy)]
pub struct RegisteredStep {
    pub kind: StageKind,
    pub run: StepFn,
}

/// Name → stage lookup used when wiring feature documents
#[derive(Debug, Clone)]
pub struct StepRegistry {
    steps: HashMap<String, RegisteredStep>,
}

impl StepRegistry {
    /// Create a registry with no steps
    pub fn empty() -> Self {
        Self {
            steps: HashMap::new(),
        }
    }

    /// Register a step, replacing any previous step with the same name
    pub fn register(&mut self, name: impl Into<String>, kind: StageKind, run: StepFn) -> &mut Self {
        self.steps.insert(name.into(), RegisteredStep { kind, run });
        self
    }

    /// Look up a step by name
    pub fn get(&self, name: &str) -> Result<RegisteredStep, ScenarioError> {
        self.steps
            .get(name)
            .copied()
            .ok_or_else(|| ScenarioError::UnknownStep {
                step: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.steps.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.steps.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for StepRegistry {
    /// The birthday greeting stages
    fn default() -> Self {
        let mut registry = Self::empty();
        registry
            .register("a_name", StageKind::Precondition, given::a_name)
            .register("a_language", StageKind::Precondition, given::a_language)
            .register(
                "wish_happy_birthday_is_called_with_the_name_and_the_language",
                StageKind::Action,
                when::wish_happy_birthday_is_called_with_the_name_and_the_language,
            )
            .register("it_should_return", StageKind::Outcome, then::it_should_return)
            .register(
                "it_should_throw_an_error",
                StageKind::Outcome,
                then::it_should_throw_an_error,
            );
        registry
    }
}
