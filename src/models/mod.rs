pub mod context;
pub mod feature;
pub mod scenario;

pub use context::ScenarioContext;
pub use feature::{Case, Feature, Group};
pub use scenario::{Hook, Scenario};
