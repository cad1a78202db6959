//! Built-in validators
//!
//! Constructors for the validators form fields need most often. Text
//! validators work on any `T: AsRef<str>`, so the same constructor serves
//! `str` and `String` hosts.
//!
//! Every constructor takes the error message first and fails with
//! `InvalidArgument` if it is empty.
//!
//! # Example
//!
//! ```rust
//! use fieldcheck::{validators, Validator};
//!
//! let name = validators::letters::<str>("Letters only").unwrap();
//! assert!(name.validate("Ada"));
//! assert!(!name.validate("Ada1"));
//!
//! let age = validators::in_range("Enter an age between 18 and 130", 18, 130).unwrap();
//! assert!(age.validate(&42));
//! assert!(!age.validate(&7));
//! ```

use regex::Regex;

use crate::condition::ensure_at_least;
use crate::error::{InvalidArgument, Result};
use crate::validator::{Predicate, PredicateValidator};

const EMAIL_PATTERN: &str = r"[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}";

/// Text with at least one non-whitespace character.
#[derive(Clone, Copy, Default, Debug)]
pub struct NotEmpty;

impl<T: AsRef<str> + ?Sized> Predicate<T> for NotEmpty {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !value.as_ref().trim().is_empty()
    }
}

/// Text whose length in characters lies in `min..=max`.
#[derive(Clone, Copy, Debug)]
pub struct Length {
    min: usize,
    max: usize,
}

impl<T: AsRef<str> + ?Sized> Predicate<T> for Length {
    #[inline]
    fn check(&self, value: &T) -> bool {
        let len = value.as_ref().chars().count();
        len >= self.min && len <= self.max
    }
}

/// Text made of characters that all satisfy a character class.
#[derive(Clone, Copy, Debug)]
pub struct CharClass {
    class: fn(char) -> bool,
    allow_empty: bool,
}

impl<T: AsRef<str> + ?Sized> Predicate<T> for CharClass {
    #[inline]
    fn check(&self, value: &T) -> bool {
        let value = value.as_ref();
        (self.allow_empty || !value.is_empty()) && value.chars().all(self.class)
    }
}

/// Text fully matched by a regular expression.
#[derive(Clone, Debug)]
pub struct Pattern(Regex);

impl Pattern {
    fn new(pattern: &str) -> Result<Self> {
        let invalid =
            |e: regex::Error| InvalidArgument::new(format!("Invalid regular expression: {e}"));
        // The raw pattern must compile on its own, or an unbalanced `)` could
        // close the anchoring group.
        Regex::new(pattern).map_err(invalid)?;
        Regex::new(&format!("^(?:{pattern})$"))
            .map(Self)
            .map_err(invalid)
    }
}

impl<T: AsRef<str> + ?Sized> Predicate<T> for Pattern {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.is_match(value.as_ref())
    }
}

/// Text equal to an expected string.
#[derive(Clone, Debug)]
pub struct Equal(String);

impl<T: AsRef<str> + ?Sized> Predicate<T> for Equal {
    #[inline]
    fn check(&self, value: &T) -> bool {
        value.as_ref() == self.0
    }
}

/// A value in the inclusive range `min..=max`.
#[derive(Clone, Copy, Debug)]
pub struct InRange<N> {
    min: N,
    max: N,
}

impl<N: PartialOrd + Send + Sync> Predicate<N> for InRange<N> {
    #[inline]
    fn check(&self, value: &N) -> bool {
        *value >= self.min && *value <= self.max
    }
}

/// Reject blank text.
pub fn not_empty<T>(message: impl Into<String>) -> Result<PredicateValidator<T, NotEmpty>>
where
    T: AsRef<str> + ?Sized,
{
    PredicateValidator::new(message, NotEmpty)
}

/// Require at least `min` characters.
pub fn min_length<T>(
    message: impl Into<String>,
    min: usize,
) -> Result<PredicateValidator<T, Length>>
where
    T: AsRef<str> + ?Sized,
{
    PredicateValidator::new(
        message,
        Length {
            min,
            max: usize::MAX,
        },
    )
}

/// Allow at most `max` characters.
///
/// Fails with `InvalidArgument` if `max` is 0.
pub fn max_length<T>(
    message: impl Into<String>,
    max: usize,
) -> Result<PredicateValidator<T, Length>>
where
    T: AsRef<str> + ?Sized,
{
    ensure_at_least(max, 1, "The maximum length must be at least 1")?;
    PredicateValidator::new(message, Length { min: 0, max })
}

/// Require a non-empty run of ASCII digits.
pub fn numeric<T>(message: impl Into<String>) -> Result<PredicateValidator<T, CharClass>>
where
    T: AsRef<str> + ?Sized,
{
    PredicateValidator::new(
        message,
        CharClass {
            class: |c| c.is_ascii_digit(),
            allow_empty: false,
        },
    )
}

/// Require a non-empty run of alphabetic characters.
pub fn letters<T>(message: impl Into<String>) -> Result<PredicateValidator<T, CharClass>>
where
    T: AsRef<str> + ?Sized,
{
    PredicateValidator::new(
        message,
        CharClass {
            class: char::is_alphabetic,
            allow_empty: false,
        },
    )
}

/// Require a non-empty run of alphanumeric characters.
pub fn alphanumeric<T>(message: impl Into<String>) -> Result<PredicateValidator<T, CharClass>>
where
    T: AsRef<str> + ?Sized,
{
    PredicateValidator::new(
        message,
        CharClass {
            class: char::is_alphanumeric,
            allow_empty: false,
        },
    )
}

/// Reject text containing whitespace. Empty text passes.
pub fn no_whitespace<T>(message: impl Into<String>) -> Result<PredicateValidator<T, CharClass>>
where
    T: AsRef<str> + ?Sized,
{
    PredicateValidator::new(
        message,
        CharClass {
            class: |c| !c.is_whitespace(),
            allow_empty: true,
        },
    )
}

/// Require the whole text to match `pattern`.
///
/// Fails with `InvalidArgument` if `pattern` is not a valid regular expression.
///
/// # Example
///
/// ```rust
/// use fieldcheck::{validators, Validator};
///
/// let zip = validators::pattern::<str>("Enter a 5-digit ZIP code", r"\d{5}").unwrap();
/// assert!(zip.validate("90210"));
/// assert!(!zip.validate("90210-1234"));
///
/// assert!(validators::pattern::<str>("broken", "(").is_err());
/// ```
pub fn pattern<T>(
    message: impl Into<String>,
    pattern: &str,
) -> Result<PredicateValidator<T, Pattern>>
where
    T: AsRef<str> + ?Sized,
{
    let pattern = Pattern::new(pattern)?;
    PredicateValidator::new(message, pattern)
}

/// Require something shaped like an email address.
pub fn email<T>(message: impl Into<String>) -> Result<PredicateValidator<T, Pattern>>
where
    T: AsRef<str> + ?Sized,
{
    pattern(message, EMAIL_PATTERN)
}

/// Require the text to equal `expected`, e.g. a password confirmation.
pub fn equal<T>(
    message: impl Into<String>,
    expected: impl Into<String>,
) -> Result<PredicateValidator<T, Equal>>
where
    T: AsRef<str> + ?Sized,
{
    PredicateValidator::new(message, Equal(expected.into()))
}

/// Require a value in `min..=max`.
///
/// Fails with `InvalidArgument` if `min > max` or the bounds are not
/// comparable (a NaN bound).
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn in_range<N>(
    message: impl Into<String>,
    min: N,
    max: N,
) -> Result<PredicateValidator<N, InRange<N>>>
where
    N: PartialOrd + Send + Sync,
{
    if !(min <= max) {
        return Err(InvalidArgument::new("The minimum may not exceed the maximum"));
    }
    PredicateValidator::new(message, InRange { min, max })
}
