//! Scenario stages and the registry that binds them to names
//!
//! Every stage is a plain function over an explicit [`ScenarioContext`]. The
//! titles a stage reads its literal from are passed alongside it.

pub mod given;
pub mod registry;
pub mod then;
pub mod when;

use crate::error::ScenarioError;
use crate::models::ScenarioContext;
use std::fmt;

pub use registry::{RegisteredStep, StepRegistry};

/// Titles visible to a stage while it runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepTitles<'a> {
    /// Title of the case being run
    pub current: &'a str,
    /// Description of the group the stage is declared on
    pub parent: &'a str,
}

impl<'a> StepTitles<'a> {
    pub fn new(current: &'a str, parent: &'a str) -> Self {
        Self { current, parent }
    }
}

/// Signature shared by every stage
pub type StepFn = fn(&mut ScenarioContext, &StepTitles<'_>) -> Result<(), ScenarioError>;

/// Role a stage plays in a scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageKind {
    /// Populates the context (Given)
    Precondition,
    /// Calls the function under test (When)
    Action,
    /// Asserts on the captured result (Then)
    Outcome,
}

impl StageKind {
    pub fn name(&self) -> &'static str {
        match self {
            StageKind::Precondition => "precondition",
            StageKind::Action => "action",
            StageKind::Outcome => "outcome",
        }
    }
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
