//! Outcome stages
//!
//! The expected value is the literal quoted in the case's own title, e.g.
//! `Then it should return "Happy birthday, Lisky!"`.

use super::StepTitles;
use crate::error::ScenarioError;
use crate::models::ScenarioContext;
use crate::parser::first_quoted_string;

pub fn it_should_return(ctx: &mut ScenarioContext, titles: &StepTitles<'_>) -> Result<(), ScenarioError> {
    let expected = first_quoted_string(titles.current)?;
    match ctx.return_value() {
        Some(actual) if actual == expected => Ok(()),
        _ => Err(mismatch(expected, ctx)),
    }
}

pub fn it_should_throw_an_error(
    ctx: &mut ScenarioContext,
    titles: &StepTitles<'_>,
) -> Result<(), ScenarioError> {
    let expected = first_quoted_string(titles.current)?;
    match ctx.error() {
        Some(error) if error.to_string() == expected => Ok(()),
        _ => Err(mismatch(expected, ctx)),
    }
}

fn mismatch(expected: &str, ctx: &ScenarioContext) -> ScenarioError {
    let actual = match &ctx.outcome {
        Some(Ok(value)) => format!("{:?}", value),
        Some(Err(error)) => format!("error {:?}", error.to_string()),
        None => "nothing (the action did not run)".to_string(),
    };
    tracing::debug!(expected, actual = actual.as_str(), "assertion failed");
    ScenarioError::AssertionMismatch {
        expected: expected.to_string(),
        actual,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::greeting::GreetingError;

    fn returned(value: &str) -> ScenarioContext {
        ScenarioContext {
            outcome: Some(Ok(value.to_string())),
            ..Default::default()
        }
    }

    fn failed() -> ScenarioContext {
        ScenarioContext {
            outcome: Some(Err(GreetingError::UnsupportedLanguage {
                language: "French".to_string(),
            })),
            ..Default::default()
        }
    }

    fn titles(current: &str) -> StepTitles<'_> {
        StepTitles::new(current, "When wishHappyBirthday is called with the name and the language")
    }

    #[test]
    fn test_it_should_return_passes_on_equal_value() {
        let mut ctx = returned("Happy birthday, Lisky!");
        it_should_return(&mut ctx, &titles(r#"Then it should return "Happy birthday, Lisky!""#)).unwrap();
    }

    #[test]
    fn test_it_should_return_reports_mismatch() {
        let mut ctx = returned("Happy birthday, Satoshi!");
        let err = it_should_return(&mut ctx, &titles(r#"Then it should return "Happy birthday, Lisky!""#))
            .unwrap_err();
        match err {
            ScenarioError::AssertionMismatch { expected, actual } => {
                assert_eq!(expected, "Happy birthday, Lisky!");
                assert_eq!(actual, "\"Happy birthday, Satoshi!\"");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_it_should_return_fails_on_captured_error() {
        let mut ctx = failed();
        let err = it_should_return(&mut ctx, &titles(r#"Then it should return "Happy birthday, Satoshi!""#))
            .unwrap_err();
        assert!(err.to_string().contains("Unsupported language"));
    }

    #[test]
    fn test_it_should_throw_an_error_matches_message() {
        let mut ctx = failed();
        it_should_throw_an_error(
            &mut ctx,
            &titles(r#"Then it should throw an error "Unsupported language""#),
        )
        .unwrap();
    }

    #[test]
    fn test_it_should_throw_an_error_fails_on_value() {
        let mut ctx = returned("Happy birthday, Satoshi!");
        let err = it_should_throw_an_error(
            &mut ctx,
            &titles(r#"Then it should throw an error "Unsupported language""#),
        )
        .unwrap_err();
        assert!(matches!(err, ScenarioError::AssertionMismatch { .. }));
    }

    #[test]
    fn test_it_should_throw_an_error_fails_on_other_message() {
        let mut ctx = failed();
        let err = it_should_throw_an_error(&mut ctx, &titles(r#"Then it should throw an error "Bad language""#))
            .unwrap_err();
        assert!(matches!(
            err,
            ScenarioError::AssertionMismatch { ref expected, .. } if expected == "Bad language"
        ));
    }

    #[test]
    fn test_outcome_without_action_fails() {
        let mut ctx = ScenarioContext::new();
        let err = it_should_return(&mut ctx, &titles(r#"Then it should return "x""#)).unwrap_err();
        assert!(err.to_string().contains("action did not run"));
    }

    #[test]
    fn test_unquoted_case_title_fails() {
        let mut ctx = returned("Happy birthday, Lisky!");
        let err = it_should_return(&mut ctx, &titles("Then it should return")).unwrap_err();
        assert!(matches!(err, ScenarioError::MalformedTitle { .. }));
    }
}
