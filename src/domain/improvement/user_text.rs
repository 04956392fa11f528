//! User-submitted text value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::error::EmptyTextError;

/// Text submitted for improvement. Always at least one character long.
///
/// Deserialization enforces the length constraint, so a request body with an
/// empty `text` is rejected before any handler code runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserText(String);

impl UserText {
    /// Create from a string, rejecting empty input
    pub fn new(text: impl Into<String>) -> Result<Self, EmptyTextError> {
        let text = text.into();
        if text.is_empty() {
            return Err(EmptyTextError);
        }
        Ok(Self(text))
    }

    /// Get the text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserText {
    type Error = EmptyTextError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserText> for String {
    fn from(value: UserText) -> Self {
        value.0
    }
}

impl fmt::Display for UserText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty() {
        assert_eq!(UserText::new(""), Err(EmptyTextError));
    }

    #[test]
    fn whitespace_counts_as_content() {
        let text = UserText::new(" ").unwrap();
        assert_eq!(text.as_str(), " ");
    }

    #[test]
    fn deserialize_enforces_length() {
        let err = serde_json::from_str::<UserText>(r#""""#).unwrap_err();
        assert!(err.to_string().contains("at least 1 character"));

        let text: UserText = serde_json::from_str(r#""hello""#).unwrap();
        assert_eq!(String::from(text), "hello");
    }

    #[test]
    fn deserialize_rejects_non_string() {
        assert!(serde_json::from_str::<UserText>("123").is_err());
    }
}
