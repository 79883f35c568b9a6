//! Testing utilities for code that uses rules
//!
//! Assertion macros for [`Outcome`](crate::Outcome)s and, with the `proptest`
//! feature, `Arbitrary` implementations for [`Value`], [`Opt`] and
//! [`OptionSet`].
//!
//! # Examples
//!
//! ```rust
//! use required_rule::{assert_invalid, assert_rejected_as, assert_valid};
//! use required_rule::{Required, Shape, Value};
//!
//! let rule = Required::new();
//! assert_valid!(rule.is_valid(&Value::from("x")));
//! assert_invalid!(rule.is_valid(&Value::Nil));
//! assert_rejected_as!(rule.is_valid(&Value::Map(vec![])), Shape::Map);
//! ```

#[cfg(feature = "proptest")]
use crate::options::{Opt, OptionSet};
#[cfg(feature = "proptest")]
use crate::value::Value;

/// Assert that an outcome is valid.
///
/// Panics with the outcome's errors otherwise.
#[macro_export]
macro_rules! assert_valid {
    ($outcome:expr) => {{
        let outcome: $crate::Outcome = $outcome;
        if !outcome.is_valid() {
            panic!("Expected valid outcome, got errors: {:?}", outcome.errors());
        }
    }};
}

/// Assert that an outcome is invalid.
#[macro_export]
macro_rules! assert_invalid {
    ($outcome:expr) => {{
        let outcome: $crate::Outcome = $outcome;
        if outcome.is_valid() {
            panic!("Expected invalid outcome, got valid");
        }
    }};
}

/// Assert that an outcome is invalid with exactly one error of `shape`.
#[macro_export]
macro_rules! assert_rejected_as {
    ($outcome:expr, $shape:expr) => {{
        let outcome: $crate::Outcome = $outcome;
        match outcome.errors() {
            [err] => assert_eq!(err.shape(), $shape),
            errors => panic!(
                "Expected one {:?} error, got {} error(s): {:?}",
                $shape,
                errors.len(),
                errors
            ),
        }
    }};
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
fn arb_scalar() -> BoxedStrategy<Value> {
    prop_oneof![
        Just(Value::Nil),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        any::<f64>().prop_map(Value::Float),
        "[ a-z\t]{0,6}".prop_map(Value::String),
        "[a-z]{1,6}".prop_map(Value::Unknown),
    ]
    .boxed()
}

#[cfg(feature = "proptest")]
impl Arbitrary for Value {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        arb_scalar()
            .prop_recursive(2, 16, 4, |inner| {
                prop_oneof![
                    prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Slice),
                    prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                    prop::collection::vec(("[a-z]{1,4}", inner.clone()), 0..4)
                        .prop_map(Value::Struct),
                    prop::collection::vec((inner.clone(), inner), 0..4).prop_map(Value::Map),
                ]
            })
            .boxed()
    }
}

#[cfg(feature = "proptest")]
impl Arbitrary for Opt {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop::sample::select(Opt::ALL.to_vec()).boxed()
    }
}

#[cfg(feature = "proptest")]
impl Arbitrary for OptionSet {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        any::<[bool; 4]>()
            .prop_map(|flags| Opt::ALL.into_iter().zip(flags).collect::<OptionSet>())
            .boxed()
    }
}
