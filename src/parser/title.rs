//! Quoted literal extraction from scenario titles
//!
//! Titles such as `Given a name "Lisky"` carry exactly one value between
//! double quotes. Only the left-most literal is used; anything after it is
//! prose.

use crate::error::ScenarioError;
use regex::Regex;
use std::sync::OnceLock;

/// Left-most, non-greedy, at least one character between the quotes.
/// A literal never crosses a line terminator (`\n`, `\r`, U+2028, U+2029).
const QUOTED_LITERAL_PATTERN: &str = r#""([^\n\r\u{2028}\u{2029}]+?)""#;

static QUOTED_LITERAL: OnceLock<Regex> = OnceLock::new();

fn quoted_literal() -> &'static Regex {
    QUOTED_LITERAL.get_or_init(|| Regex::new(QUOTED_LITERAL_PATTERN).expect("Invalid regex pattern"))
}

/// Extract the first double-quoted literal from a title
///
/// # Returns
/// The text between the quotes, borrowed from `title`
///
/// # Errors
/// * `MalformedTitle` if the title has no quoted literal
///
/// # Example
/// ```
/// use happy_birthday::parser::first_quoted_string;
/// let literal = first_quoted_string(r#"Given a name "Lisky" and extra "noise""#).unwrap();
/// assert_eq!(literal, "Lisky");
/// ```
pub fn first_quoted_string(title: &str) -> Result<&str, ScenarioError> {
    quoted_literal()
        .captures(title)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| ScenarioError::MalformedTitle {
            title: title.to_string(),
        })
}
