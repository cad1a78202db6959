//! A ready-made validateable value holder
//!
//! [`ValidatedField`] is the simplest possible host: it owns a value and a
//! [`ValidationSupport`], and re-validates on [`set_value`](ValidatedField::set_value)
//! when validate-on-value-change is enabled. UI bindings can wrap it or use
//! it as a model for their own widgets.

use crate::validateable::{Validateable, ValidationState, ValidationSupport};

/// A value together with the validators that check it.
///
/// # Example
///
/// ```rust
/// use fieldcheck::{validators, ValidatedField, Validateable, ValidatorExt};
///
/// let mut email = ValidatedField::new(String::new());
/// email.add_validator(validators::email("Enter a valid email address").unwrap().shared());
/// email.validate_on_value_change(true);
///
/// assert_eq!(email.set_value("not-an-email".to_string()), Some(false));
/// assert_eq!(email.error_message(), Some("Enter a valid email address"));
///
/// assert_eq!(email.set_value("ada@example.com".to_string()), Some(true));
/// ```
#[derive(Debug)]
pub struct ValidatedField<T> {
    value: T,
    validation: ValidationSupport<T>,
}

impl<T: 'static> ValidatedField<T> {
    /// Create a field holding `value`, with no validators or listeners.
    pub fn new(value: T) -> Self {
        Self {
            value,
            validation: ValidationSupport::new(),
        }
    }

    /// The current value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Replace the value.
    ///
    /// If validate-on-value-change is enabled the new value is validated and
    /// the result is returned; otherwise returns `None`.
    pub fn set_value(&mut self, value: T) -> Option<bool> {
        self.value = value;
        if self.validation.is_validated_on_value_change() {
            Some(self.validate())
        } else {
            None
        }
    }

    /// Outcome of the most recent validation.
    pub fn state(&self) -> &ValidationState {
        self.validation.state()
    }

    /// Consume the field and return its value.
    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T: Default + 'static> Default for ValidatedField<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: 'static> Validateable<T> for ValidatedField<T> {
    fn validation(&self) -> &ValidationSupport<T> {
        &self.validation
    }

    fn validation_mut(&mut self) -> &mut ValidationSupport<T> {
        &mut self.validation
    }

    fn validate(&mut self) -> bool {
        self.validation.validate(&self.value)
    }
}
