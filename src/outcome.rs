//! The verdict returned by a rule
//!
//! An [`Outcome`] is a `(valid, errors)` pair. It is not a `Result`: being
//! invalid is an expected answer, not a failure of the rule. The list shape
//! lets outcomes from several fields be accumulated with [`Outcome::and`]; a
//! single `Required` check never yields more than one error.
//!
//! # Examples
//!
//! ```
//! use required_rule::{Outcome, Required, Value};
//!
//! let outcome = Required::new().is_valid(&Value::from("  "));
//! assert!(!outcome.is_valid());
//! assert_eq!(outcome.errors().len(), 1);
//!
//! let (valid, errors) = Outcome::valid().into_parts();
//! assert!(valid && errors.is_empty());
//! ```

use crate::error::RequiredError;
use crate::semigroup::Semigroup;

/// Verdict of one or more rule checks.
///
/// Invariant: valid if and only if `errors` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Outcome {
    errors: Vec<RequiredError>,
}

impl Outcome {
    /// A passing outcome.
    #[inline]
    pub fn valid() -> Self {
        Outcome { errors: Vec::new() }
    }

    /// A failing outcome carrying a single error.
    #[inline]
    pub fn invalid(error: RequiredError) -> Self {
        Outcome {
            errors: vec![error],
        }
    }

    /// Whether the checked value(s) passed.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors in the order they were produced. Empty when valid.
    pub fn errors(&self) -> &[RequiredError] {
        &self.errors
    }

    /// Split into the `(valid, errors)` pair.
    pub fn into_parts(self) -> (bool, Vec<RequiredError>) {
        (self.errors.is_empty(), self.errors)
    }

    /// Accumulate another outcome, keeping every error.
    ///
    /// # Examples
    ///
    /// ```
    /// use required_rule::{Outcome, RequiredError, Shape, Value};
    ///
    /// let nil = RequiredError::new(Shape::Nil, &Value::Nil);
    /// let combined = Outcome::valid().and(Outcome::invalid(nil.clone()));
    /// assert_eq!(combined.errors(), &[nil]);
    /// ```
    pub fn and(self, other: Outcome) -> Outcome {
        Outcome {
            errors: self.errors.combine(other.errors),
        }
    }

    /// Convert into a `Result` for use with `?`.
    ///
    /// Yields the first error when invalid.
    pub fn into_result(self) -> Result<(), RequiredError> {
        match self.errors.into_iter().next() {
            None => Ok(()),
            Some(err) => Err(err),
        }
    }
}

impl Semigroup for Outcome {
    #[inline]
    fn combine(self, other: Self) -> Self {
        self.and(other)
    }
}

impl From<Result<(), RequiredError>> for Outcome {
    fn from(result: Result<(), RequiredError>) -> Self {
        match result {
            Ok(()) => Outcome::valid(),
            Err(err) => Outcome::invalid(err),
        }
    }
}

impl FromIterator<Outcome> for Outcome {
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        iter.into_iter().fold(Outcome::valid(), Outcome::and)
    }
}
