//! # fieldcheck
//!
//! Composable validators for values held by UI components.
//!
//! A [`Validator`] is a pure check plus the message to show when it fails.
//! Validators compose with [`ConjunctiveValidator`] (all must pass) and
//! [`DisjunctiveValidator`] (one must pass). A component that holds a value
//! implements [`Validateable`] by embedding a [`ValidationSupport`], which runs
//! its validators in order, records the first failure and notifies every
//! [`ValidationListener`].
//!
//! ## Quick Example
//!
//! ```rust
//! use std::rc::Rc;
//! use fieldcheck::testing::RecordingListener;
//! use fieldcheck::{validators, ValidatedField, Validateable, ValidatorExt};
//!
//! let listener = Rc::new(RecordingListener::new());
//!
//! let mut quantity = ValidatedField::new(String::new());
//! quantity.add_validator(validators::not_empty("Enter a quantity").unwrap().shared());
//! quantity.add_validator(validators::numeric("Digits only").unwrap().shared());
//! quantity.add_validation_listener(listener.clone());
//!
//! assert!(!quantity.validate());
//! assert_eq!(quantity.error_message(), Some("Enter a quantity"));
//!
//! quantity.set_value("12".to_string());
//! assert!(quantity.validate());
//! assert_eq!(listener.successes(), 1);
//! ```
//!
//! ## Errors
//!
//! Constructors and setters reject bad arguments (empty messages, empty
//! validator lists, unknown string resources) with [`InvalidArgument`]. A
//! value that fails validation is not an error.
//!
//! ## Logging
//!
//! With the `tracing` feature enabled, validation runs emit `tracing` events.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod composite;
pub mod condition;
pub mod error;
pub mod field;
pub mod listener;
pub mod message;
pub mod testing;
pub mod validateable;
pub mod validator;
pub mod validators;

// Re-exports
pub use composite::{ConjunctiveValidator, DisjunctiveValidator};
pub use error::{InvalidArgument, Result};
pub use field::ValidatedField;
pub use listener::{FnListener, SharedListener, ValidationListener};
pub use message::{ErrorMessage, ResourceId, Resources};
pub use validateable::{Validateable, ValidationState, ValidationSupport};
pub use validator::{Predicate, PredicateValidator, SharedValidator, Validator, ValidatorExt};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::composite::{ConjunctiveValidator, DisjunctiveValidator};
    pub use crate::error::InvalidArgument;
    pub use crate::field::ValidatedField;
    pub use crate::listener::{FnListener, ValidationListener};
    pub use crate::validateable::{Validateable, ValidationSupport};
    pub use crate::validator::{SharedValidator, Validator, ValidatorExt};
    pub use crate::validators;
}
