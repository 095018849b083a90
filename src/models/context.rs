use crate::greeting::GreetingError;

/// Per-scenario state shared by the precondition, action and outcome stages
///
/// A fresh context is created for every scenario and dropped when it ends.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScenarioContext {
    /// Set by the `a_name` precondition
    pub name: Option<String>,

    /// Set by the `a_language` precondition
    pub language: Option<String>,

    /// Set by the action stage; `None` until the action has run
    pub outcome: Option<Result<String, GreetingError>>,
}

impl ScenarioContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value returned by the greeting function, if the action succeeded
    pub fn return_value(&self) -> Option<&str> {
        match &self.outcome {
            Some(Ok(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Error captured from the greeting function, if the action failed
    pub fn error(&self) -> Option<&GreetingError> {
        match &self.outcome {
            Some(Err(error)) => Some(error),
            _ => None,
        }
    }

    /// Whether the action stage has run
    pub fn has_outcome(&self) -> bool {
        self.outcome.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_context_is_empty() {
        let ctx = ScenarioContext::new();
        assert!(ctx.name.is_none());
        assert!(ctx.language.is_none());
        assert!(!ctx.has_outcome());
        assert!(ctx.return_value().is_none());
        assert!(ctx.error().is_none());
    }

    #[test]
    fn test_return_value_excludes_error() {
        let ctx = ScenarioContext {
            outcome: Some(Ok("Happy birthday, Lisky!".to_string())),
            ..Default::default()
        };
        assert_eq!(ctx.return_value(), Some("Happy birthday, Lisky!"));
        assert!(ctx.error().is_none());
    }

    #[test]
    fn test_error_excludes_return_value() {
        let ctx = ScenarioContext {
            outcome: Some(Err(GreetingError::UnsupportedLanguage {
                language: "French".to_string(),
            })),
            ..Default::default()
        };
        assert!(ctx.return_value().is_none());
        assert_eq!(ctx.error().unwrap().to_string(), "Unsupported language");
    }
}
