use super::ScenarioContext;
use crate::error::ScenarioError;
use crate::steps::{RegisteredStep, StageKind, StepRegistry, StepTitles};
use std::fmt;

/// A named step bound to the title it reads its literal from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hook {
    /// Description of the declaring group, or the case title for the outcome
    pub title: String,

    /// Step name, resolved through a [`StepRegistry`]
    pub step: String,
}

impl Hook {
    pub fn new(title: impl Into<String>, step: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            step: step.into(),
        }
    }
}

/// One leaf case with every hook that runs before it
///
/// Hooks run in order (outermost group first), then the case's outcome step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    /// Descriptions of the enclosing groups, outermost first
    pub path: Vec<String>,

    /// Precondition and action steps
    pub hooks: Vec<Hook>,

    /// Outcome step; its title is the case title
    pub case: Hook,
}

impl Scenario {
    pub fn new(case_title: impl Into<String>, outcome_step: impl Into<String>) -> Self {
        Self {
            path: Vec::new(),
            hooks: Vec::new(),
            case: Hook::new(case_title, outcome_step),
        }
    }

    /// Add a group description without a hook
    pub fn within(mut self, describe: impl Into<String>) -> Self {
        self.path.push(describe.into());
        self
    }

    /// Add a group description that runs `step` before the case
    pub fn with_hook(mut self, describe: impl Into<String>, step: impl Into<String>) -> Self {
        let describe = describe.into();
        self.path.push(describe.clone());
        self.hooks.push(Hook::new(describe, step));
        self
    }

    /// Full title: group descriptions and the case title
    pub fn full_title(&self) -> String {
        self.path
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.case.title.as_str()))
            .collect::<Vec<_>>()
            .join(" > ")
    }

    /// Check that every step exists and the stages come in order
    ///
    /// Hooks are any number of preconditions followed by at most one action;
    /// the case step must be an outcome.
    pub fn validate(&self, registry: &StepRegistry) -> Result<(), ScenarioError> {
        self.resolve(registry).map(|_| ())
    }

    fn resolve<'s>(&'s self, registry: &StepRegistry) -> Result<Plan<'s>, ScenarioError> {
        let mut hooks = Vec::with_capacity(self.hooks.len());
        let mut action_seen = false;

        for hook in &self.hooks {
            let step = registry.get(&hook.step)?;
            let expected = match (action_seen, step.kind) {
                (false, StageKind::Precondition) => None,
                (false, StageKind::Action) => {
                    action_seen = true;
                    None
                }
                (false, StageKind::Outcome) => Some(StageKind::Action),
                (true, _) => Some(StageKind::Outcome),
            };
            if let Some(expected) = expected {
                return Err(ScenarioError::StageOrder {
                    step: hook.step.clone(),
                    expected,
                    found: step.kind,
                });
            }
            hooks.push((hook, step));
        }

        let outcome = registry.get(&self.case.step)?;
        if outcome.kind != StageKind::Outcome {
            return Err(ScenarioError::StageOrder {
                step: self.case.step.clone(),
                expected: StageKind::Outcome,
                found: outcome.kind,
            });
        }

        Ok(Plan { hooks, outcome })
    }

    /// Run the scenario against a fresh context
    ///
    /// # Returns
    /// The context as the outcome stage left it
    ///
    /// # Errors
    /// The first harness error or assertion mismatch; nothing runs if the
    /// steps fail validation.
    #[tracing::instrument(skip_all, fields(case = %self.case.title))]
    pub fn run(&self, registry: &StepRegistry) -> Result<ScenarioContext, ScenarioError> {
        let plan = self.resolve(registry)?;
        let mut ctx = ScenarioContext::new();

        for (hook, step) in plan.hooks {
            tracing::debug!(step = hook.step.as_str(), kind = %step.kind, "running hook");
            (step.run)(&mut ctx, &StepTitles::new(&self.case.title, &hook.title))?;
        }

        // The outcome's parent is the innermost group.
        let innermost = self.path.last().map(String::as_str).unwrap_or("");
        tracing::debug!(step = self.case.step.as_str(), "running outcome");
        (plan.outcome.run)(&mut ctx, &StepTitles::new(&self.case.title, innermost))?;

        Ok(ctx)
    }
}

struct Plan<'s> {
    hooks: Vec<(&'s Hook, RegisteredStep)>,
    outcome: RegisteredStep,
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_title())
    }
}
