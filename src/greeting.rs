//! Birthday greetings.

use std::fmt;
use std::str::FromStr;

/// Error returned for a language outside the supported set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GreetingError {
    /// The message is fixed; the rejected language is kept for diagnostics only.
    #[error("Unsupported language")]
    UnsupportedLanguage { language: String },
}

/// Languages a greeting can be produced in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Deutsch,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Deutsch];

    /// Get the exact name accepted by [`Language::from_str`]
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Deutsch => "Deutsch",
        }
    }

    /// Get the text preceding the name in a greeting
    pub fn greeting_prefix(&self) -> &'static str {
        match self {
            Language::English => "Happy birthday, ",
            Language::Deutsch => "Herzlichen Glückwunsch zum Geburtstag, ",
        }
    }

    /// Greet `name` in this language
    pub fn greet(&self, name: &str) -> String {
        format!("{}{name}!", self.greeting_prefix())
    }
}

impl FromStr for Language {
    type Err = GreetingError;

    /// Case-sensitive, no trimming.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "English" => Ok(Language::English),
            "Deutsch" => Ok(Language::Deutsch),
            other => Err(GreetingError::UnsupportedLanguage {
                language: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wish `name` a happy birthday in `language`.
///
/// # Arguments
/// * `name` - Inserted verbatim into the greeting
/// * `language` - `"English"` or `"Deutsch"`, matched exactly
///
/// # Errors
/// [`GreetingError::UnsupportedLanguage`] for any other language.
///
/// # Examples
/// ```
/// use happy_birthday::greeting::wish_happy_birthday;
/// assert_eq!(wish_happy_birthday("Lisky", "English").unwrap(), "Happy birthday, Lisky!");
/// assert!(wish_happy_birthday("Lisky", "French").is_err());
/// ```
pub fn wish_happy_birthday(name: &str, language: &str) -> Result<String, GreetingError> {
    let language: Language = language.parse()?;
    Ok(language.greet(name))
}
