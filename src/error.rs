//! Error type for precondition violations.

/// Error returned when a constructor or setter receives an argument that
/// violates its precondition.
///
/// This is the only error the crate produces. A value that fails validation
/// is not an error: `validate` returns `false` instead.
///
/// # Examples
///
/// ```rust
/// use fieldcheck::ErrorMessage;
///
/// let err = ErrorMessage::new("").unwrap_err();
/// assert_eq!(err.message(), "The error message may not be empty");
/// assert_eq!(err.to_string(), "invalid argument: The error message may not be empty");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidArgument {
    message: String,
}

impl InvalidArgument {
    /// Create a new error with the given description.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The description of the violated precondition.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid argument: {}", self.message)
    }
}

impl std::error::Error for InvalidArgument {}

/// Result alias used by every fallible constructor and setter.
pub type Result<T> = std::result::Result<T, InvalidArgument>;
