//! Validation listeners
//!
//! A [`ValidationListener`] is told, once per validation run, whether the
//! value passed and, if not, which validator rejected it.

use std::fmt;
use std::rc::Rc;

use crate::validator::Validator;

/// Observer of validation outcomes.
///
/// Listeners are invoked synchronously on the thread that runs the
/// validation, in the order they were registered.
pub trait ValidationListener<T: ?Sized> {
    /// Called when every validator accepted `value`.
    fn on_validation_success(&self, value: &T);

    /// Called when `validator` was the first validator to reject `value`.
    fn on_validation_failure(&self, value: &T, validator: &dyn Validator<T>);
}

/// A listener registered with a host.
///
/// Listeners are identified by allocation when removed.
pub type SharedListener<T> = Rc<dyn ValidationListener<T>>;

/// A listener built from two closures.
///
/// # Example
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use fieldcheck::{validators, FnListener, ValidatedField, Validateable, ValidatorExt};
///
/// let shown = Rc::new(RefCell::new(None::<String>));
/// let sink = Rc::clone(&shown);
///
/// let mut field = ValidatedField::new(String::new());
/// field.add_validator(validators::not_empty("Required").unwrap().shared());
/// field.add_validation_listener(Rc::new(FnListener::new(
///     |_: &String| {},
///     move |_: &String, validator| *sink.borrow_mut() = Some(validator.error_message().to_string()),
/// )));
///
/// assert!(!field.validate());
/// assert_eq!(shown.borrow().as_deref(), Some("Required"));
/// ```
pub struct FnListener<S, F> {
    on_success: S,
    on_failure: F,
}

impl<S, F> FnListener<S, F> {
    /// Create a listener from a success callback and a failure callback.
    pub fn new<T>(on_success: S, on_failure: F) -> Self
    where
        T: ?Sized,
        S: Fn(&T),
        F: Fn(&T, &dyn Validator<T>),
    {
        Self {
            on_success,
            on_failure,
        }
    }
}

impl<T, S, F> ValidationListener<T> for FnListener<S, F>
where
    T: ?Sized,
    S: Fn(&T),
    F: Fn(&T, &dyn Validator<T>),
{
    fn on_validation_success(&self, value: &T) {
        (self.on_success)(value)
    }

    fn on_validation_failure(&self, value: &T, validator: &dyn Validator<T>) {
        (self.on_failure)(value, validator)
    }
}

impl<S, F> fmt::Debug for FnListener<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnListener").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::PredicateValidator;
    use std::cell::Cell;

    #[test]
    fn fn_listener_routes_callbacks() {
        let successes = Cell::new(0);
        let failures = Cell::new(0);
        let listener = FnListener::new(
            |_: &i32| successes.set(successes.get() + 1),
            |_: &i32, _: &dyn Validator<i32>| failures.set(failures.get() + 1),
        );
        let validator = PredicateValidator::new("odd", |n: &i32| n % 2 == 1).unwrap();

        listener.on_validation_success(&1);
        listener.on_validation_failure(&2, &validator);
        listener.on_validation_failure(&4, &validator);

        assert_eq!((successes.get(), failures.get()), (1, 2));
    }
}
