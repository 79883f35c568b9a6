//! The `Required` rule
//!
//! [`Rule`] is the seam a validation framework programs against: it hands a
//! rule its options once, then asks it about values. [`Required`] is the one
//! rule this crate provides.
//!
//! # Semantics
//!
//! | Shape                          | Valid when                                   |
//! |--------------------------------|----------------------------------------------|
//! | `Nil`                          | never                                        |
//! | `Struct`, `Bool`, `Int`, `Float` | always, including `0`, `false`, `{}`       |
//! | `String`                       | non-blank after trimming, or `AllowEmptyString` |
//! | `Map` / `Array` / `Slice`      | at least one element, or the matching option |
//! | `Unknown`                      | never                                        |
//!
//! # Concurrency
//!
//! [`Required::set_options`] takes `&mut self` while [`Required::is_valid`]
//! takes `&self`, so a configured rule can be shared across threads for
//! reading and reconfiguration needs exclusive access.

use crate::error::RequiredError;
use crate::options::OptionSet;
use crate::outcome::Outcome;
use crate::value::{Shape, Value};

/// A validation rule that can be plugged into a framework.
///
/// # Example
///
/// ```rust
/// use required_rule::{OptionSet, Required, Rule, Value};
///
/// fn run_all(rules: &[Box<dyn Rule>], value: &Value) -> bool {
///     rules.iter().all(|rule| rule.is_valid(value).is_valid())
/// }
///
/// let rules: Vec<Box<dyn Rule>> = vec![Box::new(Required::new())];
/// assert!(run_all(&rules, &Value::from(0)));
/// assert!(!run_all(&rules, &Value::Nil));
/// ```
pub trait Rule: Send + Sync {
    /// Replace the active options.
    fn set_options(&mut self, opts: OptionSet);

    /// Check `value`.
    fn is_valid(&self, value: &Value) -> Outcome;

    /// Name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Check `value`, returning the first error.
    ///
    /// The error type is [`RequiredError`] because `Required` is the only
    /// rule this crate ships; a second rule would need its own error here.
    fn validate(&self, value: &Value) -> Result<(), RequiredError> {
        self.is_valid(value).into_result()
    }
}

/// Presence check with configurable emptiness allowances.
///
/// # Example
///
/// ```rust
/// use required_rule::{OptionSet, Required, Value};
///
/// let mut rule = Required::new();
/// assert!(!rule.is_valid(&Value::from("   ")).is_valid());
///
/// rule.set_options(OptionSet::new().allow_empty_string(true));
/// assert!(rule.is_valid(&Value::from("   ")).is_valid());
///
/// // Zero values are present
/// assert!(rule.is_valid(&Value::from(0)).is_valid());
/// assert!(rule.is_valid(&Value::from(false)).is_valid());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Required {
    opts: OptionSet,
}

impl Required {
    /// A rule with every allowance disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// A rule with the given allowances.
    pub fn with_options(opts: OptionSet) -> Self {
        Required { opts }
    }

    /// The active options.
    pub fn options(&self) -> &OptionSet {
        &self.opts
    }

    /// Replace the active options.
    ///
    /// Options are not validated; anything not set is disabled.
    pub fn set_options(&mut self, opts: OptionSet) {
        #[cfg(feature = "tracing")]
        {
            let enabled: Vec<_> = opts.enabled().collect();
            tracing::debug!(?enabled, "Required options replaced");
        }
        self.opts = opts;
    }

    /// Decide whether `value` is present.
    ///
    /// Never panics. An invalid outcome carries exactly one error.
    pub fn is_valid(&self, value: &Value) -> Outcome {
        let outcome = match value {
            Value::Nil => Outcome::invalid(RequiredError::new(Shape::Nil, value)),
            Value::Struct(_) | Value::Bool(_) | Value::Int(_) | Value::Float(_) => {
                Outcome::valid()
            }
            Value::String(s) => self.check_string(s, value),
            Value::Map(_) | Value::Array(_) | Value::Slice(_) => self.check_collection(value),
            Value::Unknown(_) => Outcome::invalid(RequiredError::new(Shape::Unknown, value)),
        };

        #[cfg(feature = "tracing")]
        if let Some(err) = outcome.errors().first() {
            tracing::debug!(shape = %err.shape(), error = %err, "Required rejected value");
        } else {
            tracing::trace!(shape = %value.shape(), "Required accepted value");
        }

        outcome
    }

    /// Verdict only.
    #[inline]
    pub fn check(&self, value: &Value) -> bool {
        self.is_valid(value).is_valid()
    }

    /// Check `value`, returning the error when invalid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use required_rule::{Required, RequiredError, Shape, Value};
    ///
    /// fn load(name: &Value) -> Result<(), RequiredError> {
    ///     Required::new().validate(name)?;
    ///     Ok(())
    /// }
    ///
    /// assert_eq!(load(&Value::Nil).unwrap_err().shape(), Shape::Nil);
    /// ```
    pub fn validate(&self, value: &Value) -> Result<(), RequiredError> {
        self.is_valid(value).into_result()
    }

    fn check_string(&self, s: &str, value: &Value) -> Outcome {
        if !s.trim().is_empty() || self.opts.allows_empty(Shape::String) {
            Outcome::valid()
        } else {
            Outcome::invalid(RequiredError::new(Shape::String, value))
        }
    }

    fn check_collection(&self, value: &Value) -> Outcome {
        let shape = value.shape();
        let populated = value.len().is_some_and(|len| len > 0);
        if populated || self.opts.allows_empty(shape) {
            Outcome::valid()
        } else {
            Outcome::invalid(RequiredError::new(shape, value))
        }
    }
}

impl Rule for Required {
    fn set_options(&mut self, opts: OptionSet) {
        Required::set_options(self, opts);
    }

    fn is_valid(&self, value: &Value) -> Outcome {
        Required::is_valid(self, value)
    }

    fn name(&self) -> &'static str {
        "Required"
    }
}

/// Check `value` with every allowance disabled.
///
/// # Example
///
/// ```rust
/// use required_rule::{required, Value};
///
/// assert!(required(&Value::from(vec![1])).is_valid());
/// assert!(!required(&Value::from(Vec::<i32>::new())).is_valid());
/// ```
pub fn required(value: &Value) -> Outcome {
    Required::new().is_valid(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Opt;

    fn tag_of(outcome: &Outcome) -> Option<Shape> {
        outcome.errors().first().map(RequiredError::shape)
    }

    #[test]
    fn test_nil_invalid_even_when_permissive() {
        let rule = Required::with_options(OptionSet::permissive());
        let outcome = rule.is_valid(&Value::Nil);
        assert!(!outcome.is_valid());
        assert_eq!(tag_of(&outcome), Some(Shape::Nil));
        assert_eq!(
            outcome.errors()[0].to_string(),
            "nil value(<nil>) is not a valid value for Required"
        );
    }

    #[test]
    fn test_zero_values_are_present() {
        let rule = Required::new();
        assert!(rule.check(&Value::from(0)));
        assert!(rule.check(&Value::from(0.0)));
        assert!(rule.check(&Value::from(false)));
        assert!(rule.check(&Value::Struct(vec![])));
    }

    #[test]
    fn test_blank_strings() {
        let rule = Required::new();
        for s in ["", " ", "\t\n", "\u{3000}"] {
            let outcome = rule.is_valid(&Value::from(s));
            assert_eq!(tag_of(&outcome), Some(Shape::String), "{:?}", s);
        }
        assert!(rule.check(&Value::from("  x  ")));
    }

    #[test]
    fn test_allow_empty_string() {
        let rule = Required::with_options(Opt::AllowEmptyString.into());
        assert!(rule.check(&Value::from("  ")));
        assert!(rule.check(&Value::from("")));
    }

    #[test]
    fn test_empty_collections_tagged_by_shape() {
        let rule = Required::new();
        let cases = [
            (Value::Map(vec![]), Shape::Map),
            (Value::Array(vec![]), Shape::Array),
            (Value::Slice(vec![]), Shape::Slice),
        ];
        for (value, shape) in cases {
            assert_eq!(tag_of(&rule.is_valid(&value)), Some(shape));
        }
    }

    #[test]
    fn test_collection_with_empty_elements_is_present() {
        // Elements are not inspected
        let rule = Required::new();
        assert!(rule.check(&Value::from(vec![Value::Nil])));
        assert!(rule.check(&Value::map([("", "")])));
    }

    #[test]
    fn test_each_option_relaxes_only_its_shape() {
        let empties = [
            (Opt::AllowEmptyMap, Value::Map(vec![])),
            (Opt::AllowEmptyArray, Value::Array(vec![])),
            (Opt::AllowEmptySlice, Value::Slice(vec![])),
            (Opt::AllowEmptyString, Value::from("")),
        ];

        for (opt, _) in &empties {
            let rule = Required::with_options(OptionSet::from(*opt));
            for (other, value) in &empties {
                assert_eq!(rule.check(value), opt == other, "{:?} on {}", opt, value.shape());
            }
        }
    }

    #[test]
    fn test_unknown_always_invalid() {
        let rule = Required::with_options(OptionSet::permissive());
        let outcome = rule.is_valid(&Value::unknown("chan"));
        assert_eq!(
            outcome.errors()[0].to_string(),
            "Unknown value(chan) is not a valid value for Required"
        );
    }

    #[test]
    fn test_set_options_replaces() {
        let mut rule = Required::with_options(OptionSet::new().allow_empty_slice(true));
        rule.set_options(OptionSet::new().allow_empty_map(true));
        assert!(!rule.options().is_enabled(Opt::AllowEmptySlice));
        assert!(!rule.check(&Value::Slice(vec![])));
        assert!(rule.check(&Value::Map(vec![])));
    }

    #[test]
    fn test_through_trait_object() {
        let mut rule: Box<dyn Rule> = Box::new(Required::new());
        assert_eq!(rule.name(), "Required");
        assert!(rule.validate(&Value::from("")).is_err());

        rule.set_options(OptionSet::permissive());
        assert!(rule.validate(&Value::from("")).is_ok());
    }

    #[test]
    fn test_trait_validate_reports_required_error() {
        let rule: &dyn Rule = &Required::new();
        let err = rule.validate(&Value::Array(vec![])).unwrap_err();
        assert_eq!(err.shape(), Shape::Array);
        assert_eq!(err.to_string(), "Array value([]) is not a valid value for Required");
    }

    #[test]
    fn test_repeatable() {
        let rule = Required::new();
        let value = Value::from(Vec::<String>::new());
        assert_eq!(rule.is_valid(&value), rule.is_valid(&value));
    }

    #[cfg(feature = "tracing")]
    mod tracing_tests {
        use super::*;
        use tracing_test::traced_test;

        #[traced_test]
        #[test]
        fn test_logs_rejection() {
            Required::new().is_valid(&Value::Slice(vec![]));
            assert!(logs_contain("Required rejected value"));
            assert!(logs_contain("shape=Slice"));
        }

        #[traced_test]
        #[test]
        fn test_logs_option_change() {
            let mut rule = Required::new();
            rule.set_options(OptionSet::new().allow_empty_map(true));
            assert!(logs_contain("Required options replaced"));
            assert!(logs_contain("AllowEmptyMap"));
        }
    }
}
