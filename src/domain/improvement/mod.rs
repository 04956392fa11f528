//! Text improvement domain module

mod prompt;
mod user_text;

pub use prompt::ImprovePrompt;
pub use user_text::UserText;
