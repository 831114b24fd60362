//! Error handling for userforge

use thiserror::Error;

/// Main error type for userforge
#[derive(Error, Debug, Clone)]
pub enum UserforgeError {
    #[error("Malformed name line '{line}': {reason}")]
    MalformedLine { line: String, reason: String },

    #[error("Input error: {message}")]
    Input {
        message: String,
        path: Option<String>,
    },

    #[error("Output error: {message}")]
    Output {
        message: String,
        path: Option<String>,
    },

    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl UserforgeError {
    /// Create a malformed line error
    pub fn malformed_line(line: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedLine {
            line: line.into(),
            reason: reason.into(),
        }
    }

    /// Create an input error
    pub fn input(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Input {
            message: message.into(),
            path,
        }
    }

    /// Create an output error
    pub fn output(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Output {
            message: message.into(),
            path,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Check if this error aborts the whole run (malformed lines are
    /// skipped and counted, everything else is fatal)
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::MalformedLine { .. })
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::MalformedLine { line, reason } => {
                format!("⚠️  Skipped malformed line '{}': {}", line, reason)
            }
            Self::Input { message, path } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                format!(
                    "❌ Input error{}: {}\n💡 Check the input file path and permissions",
                    path_info, message
                )
            }
            Self::Output { message, path } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                format!(
                    "❌ Output error{}: {}\n💡 Check the destination path and permissions",
                    path_info, message
                )
            }
            Self::Validation { message } => {
                format!("❌ Validation error: {}\n💡 Check your input format", message)
            }
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, UserforgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_line_is_not_fatal() {
        let err = UserforgeError::malformed_line("Jane", "expected exactly two name tokens");
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_io_errors_are_fatal() {
        let err = UserforgeError::input("no such file", Some("names.txt".into()));
        assert!(err.is_fatal());
        let err = UserforgeError::output("permission denied", Some("usernames.lst".into()));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_user_message_includes_path() {
        let err = UserforgeError::input("no such file", Some("names.txt".into()));
        let msg = err.user_message();
        assert!(msg.contains("names.txt"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_display_format() {
        let err = UserforgeError::malformed_line("Jane", "expected exactly two name tokens, got 1");
        assert_eq!(
            err.to_string(),
            "Malformed name line 'Jane': expected exactly two name tokens, got 1"
        );
    }
}
