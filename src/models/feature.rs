use super::{Hook, Scenario};
use serde::Deserialize;

/// A described tree of groups, hooks and cases
///
/// ```yaml
/// describe: wishHappyBirthday
/// groups:
///   - describe: 'Given a name "Lisky"'
///     before_each: a_name
///     groups:
///       - describe: 'Given a language "English"'
///         before_each: a_language
///         groups:
///           - describe: When wishHappyBirthday is called with the name and the language
///             before_each: wish_happy_birthday_is_called_with_the_name_and_the_language
///             cases:
///               - it: 'Then it should return "Happy birthday, Lisky!"'
///                 then: it_should_return
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Feature {
    /// Top-level description, usually the function under test
    pub describe: String,

    #[serde(default)]
    pub groups: Vec<Group>,
}

/// A described group, optionally running a step before each case under it
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Group {
    /// Description; precondition steps read their literal from it
    pub describe: String,

    #[serde(default)]
    pub before_each: Option<String>,

    #[serde(default)]
    pub groups: Vec<Group>,

    #[serde(default)]
    pub cases: Vec<Case>,
}

/// A leaf case: its title carries the expected value
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Case {
    pub it: String,
    pub then: String,
}

impl Feature {
    /// Flatten the tree into one scenario per case
    ///
    /// Depth-first in declaration order; a group's own cases come before
    /// its nested groups.
    pub fn scenarios(&self) -> Vec<Scenario> {
        let mut scenarios = Vec::new();
        let mut path = vec![self.describe.clone()];
        let mut hooks = Vec::new();
        for group in &self.groups {
            collect(group, &mut path, &mut hooks, &mut scenarios);
        }
        scenarios
    }
}

fn collect(group: &Group, path: &mut Vec<String>, hooks: &mut Vec<Hook>, out: &mut Vec<Scenario>) {
    path.push(group.describe.clone());
    if let Some(step) = &group.before_each {
        hooks.push(Hook::new(group.describe.clone(), step.clone()));
    }

    for case in &group.cases {
        out.push(Scenario {
            path: path.clone(),
            hooks: hooks.clone(),
            case: Hook::new(case.it.clone(), case.then.clone()),
        });
    }
    for child in &group.groups {
        collect(child, path, hooks, out);
    }

    if group.before_each.is_some() {
        hooks.pop();
    }
    path.pop();
}
