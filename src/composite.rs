//! Composite validators
//!
//! [`ConjunctiveValidator`] and [`DisjunctiveValidator`] combine an ordered,
//! non-empty sequence of child validators with AND and OR semantics. Children
//! are evaluated in sequence order and evaluation stops as soon as the
//! outcome is known.
//!
//! A composite reports its own error message on failure. The messages of the
//! children are never surfaced through the composite.
//!
//! # Example
//!
//! ```rust
//! use fieldcheck::{validators, ConjunctiveValidator, DisjunctiveValidator, Validator, ValidatorExt};
//!
//! let pin = ConjunctiveValidator::<str>::new(
//!     "PIN must be 4 digits",
//!     [
//!         validators::numeric("digits").unwrap().shared(),
//!         validators::max_length("length", 4).unwrap().shared(),
//!         validators::min_length("length", 4).unwrap().shared(),
//!     ],
//! )
//! .unwrap();
//!
//! assert!(pin.validate("1234"));
//! assert!(!pin.validate("12a4"));
//!
//! let contact = DisjunctiveValidator::<str>::new(
//!     "Enter an email address or a phone number",
//!     [
//!         validators::email("email").unwrap().shared(),
//!         validators::numeric("phone").unwrap().shared(),
//!     ],
//! )
//! .unwrap();
//!
//! assert!(contact.validate("jane@example.com"));
//! assert!(contact.validate("5551234"));
//! assert!(!contact.validate("jane"));
//! ```

use std::fmt;

use crate::condition::ensure_at_least;
use crate::error::Result;
use crate::message::{ErrorMessage, ResourceId, Resources};
use crate::validator::{SharedValidator, Validator};

/// Ordered, non-empty child validators of a composite.
struct Children<T: ?Sized>(Vec<SharedValidator<T>>);

impl<T: ?Sized> Children<T> {
    fn new<I>(validators: I) -> Result<Self>
    where
        I: IntoIterator<Item = SharedValidator<T>>,
    {
        let validators: Vec<_> = validators.into_iter().collect();
        ensure_at_least(validators.len(), 1, "The validators may not be empty")?;
        Ok(Self(validators))
    }
}

impl<T: ?Sized> Clone for Children<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

macro_rules! composite_validator {
    ($(#[$attr:meta])* $name:ident, |$children:ident, $value:ident| $validate:expr) => {
        $(#[$attr])*
        pub struct $name<T: ?Sized> {
            message: ErrorMessage,
            children: Children<T>,
        }

        impl<T: ?Sized> $name<T> {
            /// Create a composite with a direct error message.
            ///
            /// Fails with `InvalidArgument` if the message or the sequence of
            /// validators is empty.
            pub fn new<I>(message: impl Into<String>, validators: I) -> Result<Self>
            where
                I: IntoIterator<Item = SharedValidator<T>>,
            {
                Ok(Self {
                    message: ErrorMessage::new(message)?,
                    children: Children::new(validators)?,
                })
            }

            /// Create a composite whose error message is looked up in `resources`.
            ///
            /// Fails with `InvalidArgument` if `id` does not resolve or the
            /// sequence of validators is empty.
            pub fn from_resource<R, I>(resources: &R, id: ResourceId, validators: I) -> Result<Self>
            where
                R: Resources + ?Sized,
                I: IntoIterator<Item = SharedValidator<T>>,
            {
                Ok(Self {
                    message: ErrorMessage::from_resource(resources, id)?,
                    children: Children::new(validators)?,
                })
            }

            /// The child validators, in evaluation order.
            pub fn validators(&self) -> &[SharedValidator<T>] {
                &self.children.0
            }

            /// Replace all child validators.
            ///
            /// Fails with `InvalidArgument` if `validators` is empty, leaving
            /// the current children in place.
            pub fn set_validators<I>(&mut self, validators: I) -> Result<()>
            where
                I: IntoIterator<Item = SharedValidator<T>>,
            {
                self.children = Children::new(validators)?;
                Ok(())
            }

            /// Replace the error message. On failure the old message is kept.
            pub fn set_error_message(&mut self, message: impl Into<String>) -> Result<()> {
                self.message = ErrorMessage::new(message)?;
                Ok(())
            }
        }

        impl<T: ?Sized> Validator<T> for $name<T> {
            fn validate(&self, $value: &T) -> bool {
                let $children = &self.children.0;
                $validate
            }

            fn error_message(&self) -> &str {
                self.message.as_str()
            }
        }

        impl<T: ?Sized> Clone for $name<T> {
            fn clone(&self) -> Self {
                Self {
                    message: self.message.clone(),
                    children: self.children.clone(),
                }
            }
        }

        impl<T: ?Sized> fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("message", &self.message)
                    .field("validators", &self.children.0.len())
                    .finish()
            }
        }
    };
}

composite_validator!(
    /// Succeeds only if every child validator succeeds.
    ///
    /// Children are checked in order and the first failing child ends the
    /// evaluation.
    ConjunctiveValidator,
    |children, value| children.iter().all(|v| v.validate(value))
);

composite_validator!(
    /// Succeeds if at least one child validator succeeds.
    ///
    /// Children are checked in order and the first succeeding child ends the
    /// evaluation.
    DisjunctiveValidator,
    |children, value| children.iter().any(|v| v.validate(value))
);
