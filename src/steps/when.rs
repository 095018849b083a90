//! Action stage

use super::StepTitles;
use crate::error::ScenarioError;
use crate::greeting::wish_happy_birthday;
use crate::models::ScenarioContext;

/// Call the greeting function with the name and language from the context.
///
/// The greeting's own error is stored in the context, never returned.
pub fn wish_happy_birthday_is_called_with_the_name_and_the_language(
    ctx: &mut ScenarioContext,
    _titles: &StepTitles<'_>,
) -> Result<(), ScenarioError> {
    let name = ctx
        .name
        .as_deref()
        .ok_or(ScenarioError::MissingContext { field: "name" })?;
    let language = ctx
        .language
        .as_deref()
        .ok_or(ScenarioError::MissingContext { field: "language" })?;

    let outcome = wish_happy_birthday(name, language);
    match &outcome {
        Ok(value) => tracing::debug!(person = name, language, value = value.as_str(), "greeting returned"),
        Err(e) => tracing::debug!(person = name, language, error = %e, "greeting failed"),
    }
    ctx.outcome = Some(outcome);
    Ok(())
}
