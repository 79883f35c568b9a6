//! Associative combination of validation results
//!
//! A rule validates one field at a time; the framework calling it usually
//! wants one verdict for a whole record. `Semigroup` is the operation that
//! folds per-field results together without losing any errors.
//!
//! # Examples
//!
//! ```
//! use required_rule::{Required, Semigroup, Value};
//!
//! let rule = Required::new();
//! let outcome = rule
//!     .is_valid(&Value::from("alice"))
//!     .combine(rule.is_valid(&Value::from("")))
//!     .combine(rule.is_valid(&Value::Nil));
//!
//! assert!(!outcome.is_valid());
//! assert_eq!(outcome.errors().len(), 2);
//! ```

/// A type with an associative binary operation.
///
/// Implementations must satisfy
/// `a.combine(b).combine(c) == a.combine(b.combine(c))`.
pub trait Semigroup: Sized {
    /// Combine `self` with `other`.
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}
