//! Validation support for value-holding components
//!
//! A host component (a text field, a spinner, a date picker) embeds a
//! [`ValidationSupport`] and implements [`Validateable`] by handing out
//! references to it. The support object owns the registered validators and
//! listeners, runs the validators against the value the host supplies, and
//! notifies listeners of the outcome.
//!
//! # Example
//!
//! ```rust
//! use fieldcheck::{validators, Validateable, ValidationSupport, ValidatorExt};
//!
//! struct AgeSpinner {
//!     age: u32,
//!     validation: ValidationSupport<u32>,
//! }
//!
//! impl Validateable<u32> for AgeSpinner {
//!     fn validation(&self) -> &ValidationSupport<u32> {
//!         &self.validation
//!     }
//!
//!     fn validation_mut(&mut self) -> &mut ValidationSupport<u32> {
//!         &mut self.validation
//!     }
//!
//!     fn validate(&mut self) -> bool {
//!         self.validation.validate(&self.age)
//!     }
//! }
//!
//! let mut spinner = AgeSpinner { age: 12, validation: ValidationSupport::new() };
//! spinner.add_validator(validators::in_range("Must be an adult", 18, 130).unwrap().shared());
//!
//! assert!(!spinner.validate());
//! assert_eq!(spinner.error_message(), Some("Must be an adult"));
//! ```

use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use crate::listener::SharedListener;
use crate::validator::{SharedValidator, Validator};

/// Outcome of the most recent validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValidationState {
    /// No validation has run yet.
    #[default]
    Unvalidated,
    /// Every validator accepted the value.
    Valid,
    /// A validator rejected the value.
    Invalid {
        /// Error message of the first validator that failed.
        message: String,
    },
}

impl ValidationState {
    /// Whether the last run succeeded.
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationState::Valid)
    }

    /// Error message of the last failed run, if it failed.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            ValidationState::Invalid { message } => Some(message),
            _ => None,
        }
    }
}

/// Validators, listeners and the validate-on-value-change flag of one host.
///
/// `ValidationSupport` performs no locking. Hosts shared between threads
/// must serialize access themselves.
pub struct ValidationSupport<T: ?Sized> {
    validators: Vec<SharedValidator<T>>,
    listeners: Vec<SharedListener<T>>,
    validate_on_value_change: bool,
    state: ValidationState,
}

impl<T: ?Sized> ValidationSupport<T> {
    /// Create an empty registry that does not validate on value change.
    pub fn new() -> Self {
        Self {
            validators: Vec::new(),
            listeners: Vec::new(),
            validate_on_value_change: false,
            state: ValidationState::Unvalidated,
        }
    }

    /// Append a validator. Validators run in the order they were added.
    pub fn add_validator(&mut self, validator: SharedValidator<T>) {
        #[cfg(feature = "tracing")]
        tracing::trace!(error = validator.error_message(), "adding validator");

        self.validators.push(validator);
    }

    /// Append every validator yielded by `validators`, in order.
    pub fn add_all_validators<I>(&mut self, validators: I)
    where
        I: IntoIterator<Item = SharedValidator<T>>,
    {
        for validator in validators {
            self.add_validator(validator);
        }
    }

    /// Remove the first occurrence of `validator`.
    ///
    /// Validators are compared by allocation. Removing a validator that is
    /// not registered does nothing.
    pub fn remove_validator(&mut self, validator: &SharedValidator<T>) {
        if let Some(index) = self
            .validators
            .iter()
            .position(|v| Arc::ptr_eq(v, validator))
        {
            #[cfg(feature = "tracing")]
            tracing::trace!(index, "removing validator");

            self.validators.remove(index);
        }
    }

    /// Remove every validator.
    pub fn remove_all_validators(&mut self) {
        self.validators.clear();
    }

    /// Registered validators in evaluation order.
    pub fn validators(&self) -> &[SharedValidator<T>] {
        &self.validators
    }

    /// Run the validators against `value` and notify listeners.
    ///
    /// Validators run in insertion order and the first failure ends the run.
    /// With no validators registered the value is valid. Every listener is
    /// then notified exactly once, in registration order.
    pub fn validate(&mut self, value: &T) -> bool {
        let failed = self
            .validators
            .iter()
            .enumerate()
            .find(|(_, v)| !v.validate(value));

        match failed {
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!(validators = self.validators.len(), "validation passed");

                self.state = ValidationState::Valid;
                for listener in &self.listeners {
                    listener.on_validation_success(value);
                }
                true
            }
            Some((_index, validator)) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    index = _index,
                    error = validator.error_message(),
                    "validation failed"
                );

                self.state = ValidationState::Invalid {
                    message: validator.error_message().to_string(),
                };
                for listener in &self.listeners {
                    listener.on_validation_failure(value, &**validator);
                }
                false
            }
        }
    }

    /// Enable or disable validation whenever the host's value changes.
    pub fn validate_on_value_change(&mut self, validate_on_value_change: bool) {
        self.validate_on_value_change = validate_on_value_change;
    }

    /// Whether the host should validate whenever its value changes.
    pub fn is_validated_on_value_change(&self) -> bool {
        self.validate_on_value_change
    }

    /// Register a listener.
    pub fn add_validation_listener(&mut self, listener: SharedListener<T>) {
        self.listeners.push(listener);
    }

    /// Unregister the first occurrence of `listener`, compared by allocation.
    pub fn remove_validation_listener(&mut self, listener: &SharedListener<T>) {
        if let Some(index) = self.listeners.iter().position(|l| Rc::ptr_eq(l, listener)) {
            self.listeners.remove(index);
        }
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Outcome of the most recent validation run.
    pub fn state(&self) -> &ValidationState {
        &self.state
    }

    /// Error message of the first failing validator in the last run.
    pub fn error_message(&self) -> Option<&str> {
        self.state.error_message()
    }

    /// Whether the last run succeeded. `false` before the first run.
    pub fn is_valid(&self) -> bool {
        self.state.is_valid()
    }
}

impl<T: ?Sized> Default for ValidationSupport<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for ValidationSupport<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationSupport")
            .field("validators", &self.validators.len())
            .field("listeners", &self.listeners.len())
            .field("validate_on_value_change", &self.validate_on_value_change)
            .field("state", &self.state)
            .finish()
    }
}

/// Contract of a component whose value can be validated.
///
/// Implementors supply access to their [`ValidationSupport`] and run
/// [`validate`](Validateable::validate) against their current value. Hosts
/// that have [`is_validated_on_value_change`](Validateable::is_validated_on_value_change)
/// set must call `validate` whenever their value changes.
pub trait Validateable<T: ?Sized + 'static> {
    /// The embedded validation support.
    fn validation(&self) -> &ValidationSupport<T>;

    /// The embedded validation support, mutably.
    fn validation_mut(&mut self) -> &mut ValidationSupport<T>;

    /// Validate the current value. Returns `true` if it is valid.
    fn validate(&mut self) -> bool;

    /// Add a validator to run after the ones already registered.
    fn add_validator(&mut self, validator: SharedValidator<T>) {
        self.validation_mut().add_validator(validator);
    }

    /// Add several validators at once.
    fn add_all_validators<I>(&mut self, validators: I)
    where
        I: IntoIterator<Item = SharedValidator<T>>,
        Self: Sized,
    {
        self.validation_mut().add_all_validators(validators);
    }

    /// Remove a validator. Unknown validators are ignored.
    fn remove_validator(&mut self, validator: &SharedValidator<T>) {
        self.validation_mut().remove_validator(validator);
    }

    /// Remove every validator.
    fn remove_all_validators(&mut self) {
        self.validation_mut().remove_all_validators();
    }

    /// Set whether the value is validated whenever it changes.
    fn validate_on_value_change(&mut self, validate_on_value_change: bool) {
        self.validation_mut()
            .validate_on_value_change(validate_on_value_change);
    }

    /// Whether the value is validated whenever it changes.
    fn is_validated_on_value_change(&self) -> bool {
        self.validation().is_validated_on_value_change()
    }

    /// Register a listener to be notified after each validation.
    fn add_validation_listener(&mut self, listener: SharedListener<T>) {
        self.validation_mut().add_validation_listener(listener);
    }

    /// Unregister a listener.
    fn remove_validation_listener(&mut self, listener: &SharedListener<T>) {
        self.validation_mut().remove_validation_listener(listener);
    }

    /// Error message of the first failing validator in the last run.
    fn error_message(&self) -> Option<&str> {
        self.validation().error_message()
    }
}
