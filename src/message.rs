//! Error messages and string resources
//!
//! Every validator carries an [`ErrorMessage`]: a string that is guaranteed to
//! be non-empty. Messages are given directly or looked up through a
//! [`Resources`] provider, which stands in for the host toolkit's localized
//! string table.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use fieldcheck::{ErrorMessage, ResourceId};
//!
//! const REQUIRED: ResourceId = 1;
//!
//! let mut strings = HashMap::new();
//! strings.insert(REQUIRED, "This field is required".to_string());
//!
//! let message = ErrorMessage::from_resource(&strings, REQUIRED).unwrap();
//! assert_eq!(message.as_str(), "This field is required");
//!
//! assert!(ErrorMessage::from_resource(&strings, 2).is_err());
//! ```

use std::collections::HashMap;
use std::fmt;
use std::hash::BuildHasher;

use crate::condition::{ensure_not_empty, ensure_not_null};
use crate::error::Result;

/// Identifier of a string resource.
pub type ResourceId = u32;

/// A source of human-readable strings keyed by [`ResourceId`].
///
/// Implemented for closures and for `HashMap<ResourceId, String>`.
pub trait Resources {
    /// Look up a string, returning `None` if the id does not resolve.
    fn string(&self, id: ResourceId) -> Option<String>;
}

impl<F> Resources for F
where
    F: Fn(ResourceId) -> Option<String>,
{
    fn string(&self, id: ResourceId) -> Option<String> {
        self(id)
    }
}

impl<S: BuildHasher> Resources for HashMap<ResourceId, String, S> {
    fn string(&self, id: ResourceId) -> Option<String> {
        self.get(&id).cloned()
    }
}

/// A non-empty, human-readable error message.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorMessage(String);

impl ErrorMessage {
    /// Create a message, failing if it is empty.
    pub fn new(message: impl Into<String>) -> Result<Self> {
        let message = message.into();
        ensure_not_empty(&message, "The error message may not be empty")?;
        Ok(Self(message))
    }

    /// Resolve a message through `resources`.
    ///
    /// Fails if the id is unknown or the resolved string is empty.
    pub fn from_resource<R>(resources: &R, id: ResourceId) -> Result<Self>
    where
        R: Resources + ?Sized,
    {
        let message = ensure_not_null(
            resources.string(id),
            &format!("There is no string resource with id {id}"),
        )?;
        Self::new(message)
    }

    /// Borrow the message text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the message text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for ErrorMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ErrorMessage {
    type Error = crate::InvalidArgument;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ErrorMessage {
    type Error = crate::InvalidArgument;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}
