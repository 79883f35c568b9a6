//! Integration tests for the Required rule as a framework would drive it

use std::collections::{BTreeMap, HashMap};

use required_rule::prelude::*;
use required_rule::{assert_invalid, assert_rejected_as, assert_valid};

// A record as a framework might receive it: field name to runtime value
fn signup_form(name: &str, tags: Vec<&str>, age: Option<u32>) -> Vec<(&'static str, Value)> {
    vec![
        ("name", Value::from(name)),
        ("tags", Value::from(tags)),
        ("age", Value::from(age)),
        ("newsletter", Value::from(false)),
    ]
}

fn validate_form(rule: &dyn Rule, form: &[(&'static str, Value)]) -> Outcome {
    form.iter().map(|(_, value)| rule.is_valid(value)).collect()
}

#[test]
fn test_complete_form_passes() {
    let rule = Required::new();
    let form = signup_form("alice", vec!["rust"], Some(0));
    assert_valid!(validate_form(&rule, &form));
}

#[test]
fn test_all_missing_fields_reported() {
    let rule = Required::new();
    let form = signup_form("   ", vec![], None);

    let (valid, errors) = validate_form(&rule, &form).into_parts();
    assert!(!valid);

    let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
    assert_eq!(
        messages,
        vec![
            "String value(   ) is not a valid value for Required",
            "Slice value([]) is not a valid value for Required",
            "nil value(<nil>) is not a valid value for Required",
        ]
    );
}

#[test]
fn test_options_change_verdict_for_configured_shapes_only() {
    let mut rule = Required::new();
    rule.set_options(
        [(Opt::AllowEmptySlice, true), (Opt::AllowEmptyString, true)]
            .into_iter()
            .collect(),
    );

    let form = signup_form("", vec![], None);
    let outcome = validate_form(&rule, &form);
    assert_rejected_as!(outcome, Shape::Nil);
}

#[test]
fn test_maps_from_std_collections() {
    let rule = Required::new();

    let empty: HashMap<String, i32> = HashMap::new();
    assert_rejected_as!(rule.is_valid(&Value::from(empty)), Shape::Map);

    let mut filled = BTreeMap::new();
    filled.insert("a", 1);
    assert_valid!(rule.is_valid(&Value::from(filled)));

    let rule = Required::with_options(OptionSet::new().allow_empty_map(true));
    assert_valid!(rule.is_valid(&Value::from(HashMap::<String, i32>::new())));
}

#[test]
fn test_arrays_and_slices_are_distinct() {
    let rule = Required::with_options(OptionSet::new().allow_empty_array(true));
    let empty_array: [u8; 0] = [];

    assert_valid!(rule.is_valid(&Value::from(empty_array)));
    assert_rejected_as!(rule.is_valid(&Value::from(Vec::<u8>::new())), Shape::Slice);
}

#[test]
fn test_unknown_shapes() {
    let rule = Required::with_options(OptionSet::permissive());
    for kind in ["func", "chan", "unsafe pointer"] {
        let outcome = rule.is_valid(&Value::unknown(kind));
        assert_rejected_as!(outcome.clone(), Shape::Unknown);
        assert_eq!(outcome.errors()[0].value(), kind);
    }
}

#[test]
fn test_nested_empties_do_not_fail_parent() {
    let rule = Required::new();
    let value = Value::from(vec![Value::Slice(vec![]), Value::from("")]);
    assert_valid!(rule.is_valid(&value));
}

#[test]
fn test_question_mark_propagation() {
    fn require_all(values: &[Value]) -> Result<usize, RequiredError> {
        let rule = Required::new();
        for value in values {
            rule.validate(value)?;
        }
        Ok(values.len())
    }

    assert_eq!(require_all(&[Value::from(1), Value::from("x")]), Ok(2));

    let err = require_all(&[Value::from(1), Value::Map(vec![])]).unwrap_err();
    assert_eq!(err.shape(), Shape::Map);
}

#[test]
fn test_shared_across_threads() {
    let rule = Required::new();
    std::thread::scope(|s| {
        for i in 0..4 {
            let rule = &rule;
            s.spawn(move || {
                assert_valid!(rule.is_valid(&Value::from(i)));
                assert_invalid!(rule.is_valid(&Value::from("")));
            });
        }
    });
}

#[test]
fn test_free_function_uses_defaults() {
    assert_rejected_as!(required(&Value::from("")), Shape::String);
    assert_valid!(required(&Value::record([("id", 0)])));
}
