//! Precondition guards
//!
//! Pure helpers used by constructors and setters to reject bad arguments
//! with [`InvalidArgument`] at the point of the call.

use crate::error::{InvalidArgument, Result};

/// Unwrap an optional argument, failing if it is absent.
///
/// # Example
///
/// ```rust
/// use fieldcheck::condition::ensure_not_null;
///
/// assert_eq!(ensure_not_null(Some(3), "missing").unwrap(), 3);
/// assert!(ensure_not_null(None::<i32>, "missing").is_err());
/// ```
pub fn ensure_not_null<T>(value: Option<T>, message: &str) -> Result<T> {
    value.ok_or_else(|| InvalidArgument::new(message))
}

/// Fail if `value` is less than `min`.
///
/// # Example
///
/// ```rust
/// use fieldcheck::condition::ensure_at_least;
///
/// assert!(ensure_at_least(1, 1, "too few").is_ok());
/// assert!(ensure_at_least(0, 1, "too few").is_err());
/// ```
pub fn ensure_at_least<T: PartialOrd>(value: T, min: T, message: &str) -> Result<()> {
    if value < min {
        Err(InvalidArgument::new(message))
    } else {
        Ok(())
    }
}

/// Fail if `text` is the empty string.
///
/// Whitespace counts as content.
pub fn ensure_not_empty(text: &str, message: &str) -> Result<()> {
    if text.is_empty() {
        Err(InvalidArgument::new(message))
    } else {
        Ok(())
    }
}
