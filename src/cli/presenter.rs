//! CLI presenter for output formatting

use colored::*;

/// Presenter for CLI output formatting
#[derive(Debug, Default)]
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print a key-value pair (for config check)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }

    /// Show whether an optional setting is present without revealing it
    pub fn presence(value: bool) -> &'static str {
        if value {
            "set"
        } else {
            "not set"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presence_labels() {
        assert_eq!(Presenter::presence(true), "set");
        assert_eq!(Presenter::presence(false), "not set");
    }
}
