//! Core validator trait and the predicate-backed base validator
//!
//! A [`Validator`] is a pure check over a value plus the message to show when
//! the check fails. Most validators are a [`PredicateValidator`]: an
//! [`ErrorMessage`] paired with a [`Predicate`], which may be any closure.
//!
//! # Example
//!
//! ```rust
//! use fieldcheck::{PredicateValidator, Validator};
//!
//! let even = PredicateValidator::<i32, _>::new("Must be even", |n: &i32| n % 2 == 0).unwrap();
//!
//! assert!(even.validate(&4));
//! assert!(!even.validate(&3));
//! assert_eq!(even.error_message(), "Must be even");
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::error::Result;
use crate::message::{ErrorMessage, ResourceId, Resources};

/// A check over values of type `T` with an associated error message.
///
/// `validate` borrows both the validator and the value immutably, so
/// validators hold no per-call state and can be shared across threads.
pub trait Validator<T: ?Sized>: Send + Sync {
    /// Check `value`, returning `true` if it is valid.
    fn validate(&self, value: &T) -> bool;

    /// The message to present when validation fails.
    fn error_message(&self) -> &str;
}

/// A validator shared between hosts and composite validators.
pub type SharedValidator<T> = Arc<dyn Validator<T>>;

impl<T: ?Sized, V: Validator<T> + ?Sized> Validator<T> for Arc<V> {
    #[inline]
    fn validate(&self, value: &T) -> bool {
        (**self).validate(value)
    }

    fn error_message(&self) -> &str {
        (**self).error_message()
    }
}

impl<T: ?Sized, V: Validator<T> + ?Sized> Validator<T> for Box<V> {
    #[inline]
    fn validate(&self, value: &T) -> bool {
        (**self).validate(value)
    }

    fn error_message(&self) -> &str {
        (**self).error_message()
    }
}

/// Extension methods for validators.
pub trait ValidatorExt<T: ?Sized>: Validator<T> + Sized + 'static {
    /// Move this validator behind an `Arc` so it can be registered with a
    /// host or used as a child of a composite.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fieldcheck::{validators, SharedValidator, ValidatorExt};
    ///
    /// let required: SharedValidator<str> = validators::not_empty("Required").unwrap().shared();
    /// assert!(!required.validate(""));
    /// ```
    fn shared(self) -> SharedValidator<T> {
        Arc::new(self)
    }
}

impl<T: ?Sized, V: Validator<T> + 'static> ValidatorExt<T> for V {}

/// A boolean check over values of type `T`.
///
/// Closures `Fn(&T) -> bool` are predicates.
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// A validator made of an error message and a predicate.
///
/// The message may be replaced after construction through
/// [`set_error_message`](Self::set_error_message), which enforces the same
/// non-empty precondition as the constructors.
pub struct PredicateValidator<T: ?Sized, P> {
    message: ErrorMessage,
    predicate: P,
    _value: PhantomData<fn(&T)>,
}

impl<T: ?Sized, P: Predicate<T>> PredicateValidator<T, P> {
    /// Create a validator with a direct error message.
    ///
    /// Fails with `InvalidArgument` if the message is empty.
    pub fn new(message: impl Into<String>, predicate: P) -> Result<Self> {
        Ok(Self::with_message(ErrorMessage::new(message)?, predicate))
    }

    /// Create a validator whose error message is looked up in `resources`.
    ///
    /// Fails with `InvalidArgument` if `id` does not resolve.
    pub fn from_resource<R>(resources: &R, id: ResourceId, predicate: P) -> Result<Self>
    where
        R: Resources + ?Sized,
    {
        Ok(Self::with_message(
            ErrorMessage::from_resource(resources, id)?,
            predicate,
        ))
    }

    /// Create a validator from an already checked message.
    pub fn with_message(message: ErrorMessage, predicate: P) -> Self {
        Self {
            message,
            predicate,
            _value: PhantomData,
        }
    }

    /// Replace the error message. On failure the old message is kept.
    pub fn set_error_message(&mut self, message: impl Into<String>) -> Result<()> {
        self.message = ErrorMessage::new(message)?;
        Ok(())
    }

    /// The predicate this validator applies.
    pub fn predicate(&self) -> &P {
        &self.predicate
    }
}

impl<T: ?Sized, P: Predicate<T>> Validator<T> for PredicateValidator<T, P> {
    #[inline]
    fn validate(&self, value: &T) -> bool {
        self.predicate.check(value)
    }

    fn error_message(&self) -> &str {
        self.message.as_str()
    }
}

impl<T: ?Sized, P: Clone> Clone for PredicateValidator<T, P> {
    fn clone(&self) -> Self {
        Self {
            message: self.message.clone(),
            predicate: self.predicate.clone(),
            _value: PhantomData,
        }
    }
}

impl<T: ?Sized, P> fmt::Debug for PredicateValidator<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateValidator")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn positive() -> PredicateValidator<i32, fn(&i32) -> bool> {
        PredicateValidator::new("Must be positive", (|n: &i32| *n > 0) as fn(&i32) -> bool)
            .unwrap()
    }

    #[test]
    fn validate_applies_predicate() {
        let v = positive();
        assert!(v.validate(&1));
        assert!(!v.validate(&0));
        assert!(!v.validate(&-1));
    }

    #[test]
    fn predicate_is_reusable_on_its_own() {
        let v = positive();
        let check = *v.predicate();
        assert!(check(&3));
        assert!(v.predicate().check(&3));
        assert!(!v.predicate().check(&-3));
    }

    #[test]
    fn empty_message_is_rejected() {
        let err = PredicateValidator::<i32, _>::new("", |_: &i32| true).unwrap_err();
        assert_eq!(err.message(), "The error message may not be empty");
    }

    #[test]
    fn message_from_resource() {
        let mut strings = HashMap::new();
        strings.insert(3, "Too small".to_string());

        let v = PredicateValidator::from_resource(&strings, 3, |n: &u8| *n > 10).unwrap();
        assert_eq!(v.error_message(), "Too small");

        assert!(PredicateValidator::from_resource(&strings, 4, |n: &u8| *n > 10).is_err());
    }

    #[test]
    fn set_error_message_keeps_old_on_failure() {
        let mut v = positive();

        v.set_error_message("Need a positive number").unwrap();
        assert_eq!(v.error_message(), "Need a positive number");

        assert!(v.set_error_message("").is_err());
        assert_eq!(v.error_message(), "Need a positive number");
    }

    #[test]
    fn validating_is_repeatable() {
        let v = positive();
        let first: Vec<bool> = (-3..3).map(|n| v.validate(&n)).collect();
        let second: Vec<bool> = (-3..3).map(|n| v.validate(&n)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn shared_validator_delegates() {
        let shared: SharedValidator<i32> = positive().shared();
        let again = Arc::clone(&shared);

        assert!(again.validate(&5));
        assert_eq!(again.error_message(), "Must be positive");
    }

    #[test]
    fn shared_across_threads() {
        let shared: SharedValidator<i32> = positive().shared();

        let handles: Vec<_> = (0..4)
            .map(|n| {
                let v = Arc::clone(&shared);
                std::thread::spawn(move || v.validate(&n))
            })
            .collect();
        let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(results, vec![false, true, true, true]);
    }

    #[test]
    fn unsized_values() {
        let v = PredicateValidator::<str, _>::new("Needs an x", |s: &str| s.contains('x')).unwrap();
        assert!(v.validate("box"));
        assert!(!v.validate("bag"));
    }
}
