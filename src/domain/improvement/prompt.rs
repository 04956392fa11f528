//! Improvement prompt value object

use super::user_text::UserText;

/// Instruction placed before the user's text
const INSTRUCTION: &str = "You are an AI assistant specialized in professional communication.
Rewrite the following sentence to correct its grammar and make it sound more natural and smooth, as if written by a native speaker.
Do not include any additional explanations or text, just the final, polished sentence: ";

/// Value object representing the prompt sent to the language model.
/// The user's text is embedded verbatim after a fixed instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImprovePrompt {
    content: String,
}

impl ImprovePrompt {
    /// Build the prompt for the given text
    pub fn build(text: &UserText) -> Self {
        Self {
            content: format!("{}{}", INSTRUCTION, text.as_str()),
        }
    }

    /// Get the prompt content
    pub fn content(&self) -> &str {
        &self.content
    }
}
