//! Testing utilities and helpers for fieldcheck
//!
//! Test doubles for validators and listeners, plus assertion macros for
//! [`Validateable`](crate::Validateable) hosts.
//!
//! # Examples
//!
//! ## Recording listener
//!
//! ```rust
//! use std::rc::Rc;
//! use fieldcheck::testing::RecordingListener;
//! use fieldcheck::{validators, ValidatedField, Validateable, ValidatorExt};
//!
//! let listener = Rc::new(RecordingListener::new());
//! let mut field = ValidatedField::new("abc".to_string());
//! field.add_validator(validators::numeric("Digits only").unwrap().shared());
//! field.add_validation_listener(listener.clone());
//!
//! field.validate();
//! assert_eq!(listener.failures(), 1);
//! assert_eq!(listener.last_failure().as_deref(), Some("Digits only"));
//! ```
//!
//! ## Assertion macros
//!
//! ```rust
//! use fieldcheck::{assert_invalid, assert_valid, validators, ValidatedField, Validateable, ValidatorExt};
//!
//! let mut field = ValidatedField::new(String::new());
//! field.add_validator(validators::not_empty("Required").unwrap().shared());
//! assert_invalid!(field, "Required");
//!
//! field.set_value("filled".to_string());
//! assert_valid!(field);
//! ```

use std::cell::{Cell, RefCell};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::listener::ValidationListener;
use crate::message::ErrorMessage;
use crate::validator::Validator;

/// A validator with a fixed outcome that counts how often it runs.
#[derive(Debug)]
pub struct CountingValidator {
    message: ErrorMessage,
    result: bool,
    calls: AtomicUsize,
}

impl CountingValidator {
    fn new(message: &str, result: bool) -> Self {
        let message = ErrorMessage::new(message)
            .unwrap_or_else(|_| panic!("CountingValidator needs a non-empty message"));
        Self {
            message,
            result,
            calls: AtomicUsize::new(0),
        }
    }

    /// A validator that accepts every value.
    ///
    /// # Panics
    ///
    /// Panics if `message` is empty.
    pub fn passing(message: &str) -> Self {
        Self::new(message, true)
    }

    /// A validator that rejects every value.
    ///
    /// # Panics
    ///
    /// Panics if `message` is empty.
    pub fn failing(message: &str) -> Self {
        Self::new(message, false)
    }

    /// How many times `validate` has been called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<T: ?Sized> Validator<T> for CountingValidator {
    fn validate(&self, _value: &T) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result
    }

    fn error_message(&self) -> &str {
        self.message.as_str()
    }
}

/// A listener that records every notification it receives.
#[derive(Debug, Default)]
pub struct RecordingListener {
    successes: Cell<usize>,
    failures: RefCell<Vec<String>>,
}

impl RecordingListener {
    /// Create a listener with no recorded notifications.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of success notifications.
    pub fn successes(&self) -> usize {
        self.successes.get()
    }

    /// Number of failure notifications.
    pub fn failures(&self) -> usize {
        self.failures.borrow().len()
    }

    /// Error messages of the failed validators, oldest first.
    pub fn failure_messages(&self) -> Vec<String> {
        self.failures.borrow().clone()
    }

    /// Error message of the most recent failure notification.
    pub fn last_failure(&self) -> Option<String> {
        self.failures.borrow().last().cloned()
    }
}

impl<T: ?Sized> ValidationListener<T> for RecordingListener {
    fn on_validation_success(&self, _value: &T) {
        self.successes.set(self.successes.get() + 1);
    }

    fn on_validation_failure(&self, _value: &T, validator: &dyn Validator<T>) {
        self.failures
            .borrow_mut()
            .push(validator.error_message().to_string());
    }
}

/// Assert that validating a host succeeds.
///
/// Runs [`Validateable::validate`](crate::Validateable::validate) and panics
/// with the reported error message if it fails.
#[macro_export]
macro_rules! assert_valid {
    ($host:expr) => {{
        let host = &mut $host;
        if !$crate::Validateable::validate(&mut *host) {
            panic!(
                "Expected valid, got error: {:?}",
                $crate::Validateable::error_message(&*host)
            );
        }
    }};
}

/// Assert that validating a host fails with a specific error message.
#[macro_export]
macro_rules! assert_invalid {
    ($host:expr, $message:expr) => {{
        let host = &mut $host;
        if $crate::Validateable::validate(&mut *host) {
            panic!("Expected invalid with {:?}, got valid", $message);
        }
        assert_eq!($crate::Validateable::error_message(&*host), Some($message));
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{validators, ValidatedField, Validateable, ValidatorExt};
    use std::sync::Arc;

    #[test]
    fn counting_validator_counts() {
        let v = CountingValidator::failing("no");
        assert!(!Validator::<i32>::validate(&v, &1));
        assert!(!Validator::<str>::validate(&v, "x"));
        assert_eq!(v.calls(), 2);
    }

    #[test]
    #[should_panic(expected = "non-empty message")]
    fn counting_validator_needs_message() {
        CountingValidator::passing("");
    }

    #[test]
    fn recording_listener_records() {
        let listener = RecordingListener::new();
        let v = CountingValidator::failing("first");

        ValidationListener::<i32>::on_validation_success(&listener, &1);
        ValidationListener::<i32>::on_validation_failure(&listener, &2, &v);

        assert_eq!(listener.successes(), 1);
        assert_eq!(listener.failure_messages(), vec!["first".to_string()]);
    }

    #[test]
    fn assert_valid_macro() {
        let mut field = ValidatedField::new(5);
        field.add_validator(Arc::new(CountingValidator::passing("ok")));
        assert_valid!(field);
    }

    #[test]
    fn assert_invalid_macro() {
        let mut field = ValidatedField::new(String::from("x"));
        field.add_validator(validators::numeric("digits").unwrap().shared());
        assert_invalid!(field, "digits");
    }

    #[test]
    #[should_panic(expected = "Expected valid, got error")]
    fn assert_valid_panics_on_invalid() {
        let mut field = ValidatedField::new(0);
        field.add_validator(Arc::new(CountingValidator::failing("nope")));
        assert_valid!(field);
    }

    #[test]
    #[should_panic(expected = "got valid")]
    fn assert_invalid_panics_on_valid() {
        let mut field = ValidatedField::new(0);
        assert_invalid!(field, "anything");
    }
}
