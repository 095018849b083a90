// happy-birthday - Birthday greetings with a Given/When/Then scenario harness
// Scenarios are wired from quoted literals in their own titles

pub mod error;
pub mod greeting;
pub mod models;
pub mod parser;
pub mod steps;

pub use anyhow::{Context, Result};

// Re-export commonly used types
pub use error::ScenarioError;
pub use greeting::{wish_happy_birthday, GreetingError, Language};
pub use models::{Feature, Scenario, ScenarioContext};
pub use steps::{StageKind, StepRegistry, StepTitles};
