//! Precondition stages
//!
//! Both read the literal from the enclosing group's description, e.g.
//! `Given a name "Lisky"`.

use super::StepTitles;
use crate::error::ScenarioError;
use crate::models::ScenarioContext;
use crate::parser::first_quoted_string;

pub fn a_name(ctx: &mut ScenarioContext, titles: &StepTitles<'_>) -> Result<(), ScenarioError> {
    let name = first_quoted_string(titles.parent)?;
    tracing::debug!(person = name, "given a name");
    ctx.name = Some(name.to_string());
    Ok(())
}

pub fn a_language(ctx: &mut ScenarioContext, titles: &StepTitles<'_>) -> Result<(), ScenarioError> {
    let language = first_quoted_string(titles.parent)?;
    tracing::debug!(language, "given a language");
    ctx.language = Some(language.to_string());
    Ok(())
}
