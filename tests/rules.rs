use std::any::Any;
use std::sync::Arc;

use fluent_rules::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("fluent_rules=trace")
        .with_test_writer()
        .try_init();
}

// ---------------------------------------------------------------------------
// Rule / sink plumbing
// ---------------------------------------------------------------------------

#[test]
fn apply_records_identifier_and_code() {
    init_tracing();
    let rule = number::min(10);
    let mut result = ValidationResult::new();
    let id = Identifier::field("order").child("quantity");

    rule.apply(Some(&3), &mut result, &id);

    assert_eq!(result.failures.len(), 1);
    let failure = &result.failures[0];
    assert_eq!(failure.identifier(), &id);
    assert_eq!(failure.code().key(), "number.min");
    assert_eq!(failure.metadata.get_param("min"), Some("10"));
    assert_eq!(failure.to_string(), "order.quantity: Number must be at least 10");
}

#[test]
fn rules_accumulate_into_a_vec_sink() {
    let rule = string::min_length(5).and(string::is_upper_case());
    let mut sink: Vec<Failure> = Vec::new();

    rule.apply(Some("abc"), &mut sink, &Identifier::field("code"));

    let keys: Vec<_> = sink.iter().map(|f| f.code().key()).collect();
    assert_eq!(keys, ["string.min_length", "string.upper_case"]);
}

#[test]
fn and_runs_both_rules_on_absent_values() {
    let rule = object::not_null::<i32>().and(number::positive());
    let result = {
        let mut r = ValidationResult::new();
        rule.apply(None, &mut r, &Identifier::root());
        r
    };
    assert_eq!(result.failures.len(), 1);
    assert_eq!(result.failures[0].code().key(), "object.not_null");
}

#[test]
fn same_rule_gives_same_outcome_on_fresh_sinks() {
    let rule = collection::size_range::<Vec<i32>>(2, 3).unwrap();
    for value in [vec![], vec![1], vec![1, 2], vec![1, 2, 3, 4]] {
        let first = rule.check(&value);
        let second = rule.check(&value);
        assert_eq!(first, second);
    }
}

#[test]
fn rules_are_shareable_across_threads() {
    let rule = Arc::new(string::not_blank());
    let handles: Vec<_> = ["a", " ", "b"]
        .into_iter()
        .map(|s| {
            let rule = Arc::clone(&rule);
            std::thread::spawn(move || rule.is_satisfied_by(s))
        })
        .collect();
    let outcomes: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(outcomes, [true, false, true]);
}

#[test]
fn create_rule_sees_absent_values() {
    let rule = create_rule(
        |v: Option<&i32>| v.is_some_and(|n| *n != 0),
        |id| Metadata::new(id, fluent_rules::error::NumberCode::NonZero, "required and non-zero"),
    );
    let mut result = ValidationResult::new();
    rule.apply(None, &mut result, &Identifier::root());
    rule.apply(Some(&0), &mut result, &Identifier::root());
    rule.apply(Some(&1), &mut result, &Identifier::root());
    assert_eq!(result.failures.len(), 2);
}

#[test]
fn create_skip_null_rule_skips_absent_values() {
    let rule = create_skip_null_rule(
        |v: &i32| *v % 2 == 0,
        |id| Metadata::new(id, fluent_rules::error::ObjectCode::Satisfies, "Value must be even"),
    );
    let mut result = ValidationResult::new();
    rule.apply(None, &mut result, &Identifier::root());
    rule.apply(Some(&3), &mut result, &Identifier::root());
    assert_eq!(result.failures.len(), 1);
    assert_eq!(result.failures[0].message(), "Value must be even");
}

// ---------------------------------------------------------------------------
// ValidationResult
// ---------------------------------------------------------------------------

#[test]
fn result_helpers() {
    let mut result = ValidationResult::new();
    assert!(result.is_valid());
    assert!(result.clone().into_result().is_ok());

    string::not_blank().apply(None, &mut result, &Identifier::field("name"));
    number::max(5).apply(Some(&9), &mut result, &Identifier::field("age"));

    assert!(result.has_failures());
    assert_eq!(result.failures_for(&Identifier::field("age")).len(), 1);
    assert!(result.failures_for(&Identifier::field("email")).is_empty());

    let merged = result.clone().merge(number::negative().check(&1));
    assert_eq!(merged.failures.len(), 3);

    let err = result.into_result().unwrap_err();
    assert_eq!(
        err.to_string(),
        "name: String must not be blank\nage: Number must be at most 5"
    );
}

#[test]
fn identifier_rendering() {
    assert_eq!(Identifier::root().to_string(), "");
    assert_eq!(Identifier::from("user").to_string(), "user");
    assert_eq!(
        Identifier::field("items").index(0).child("sku").to_string(),
        "items[0].sku"
    );
}

#[cfg(feature = "serialize")]
#[test]
fn result_to_json() {
    let result = number::positive().check(&-1);
    let json = result.to_json().unwrap();
    assert_eq!(json["failures"][0]["metadata"]["message"], "Number must be positive");
}

// ---------------------------------------------------------------------------
// Object rules
// ---------------------------------------------------------------------------

#[test]
fn not_null_and_must_be_null() {
    let mut result = ValidationResult::new();
    object::not_null::<str>().apply(Some("x"), &mut result, &Identifier::root());
    object::must_be_null::<str>().apply(None, &mut result, &Identifier::root());
    assert!(result.is_valid());

    object::must_be_null::<str>().apply(Some("x"), &mut result, &Identifier::root());
    assert_eq!(result.failures[0].code().key(), "object.must_be_null");
}

#[test]
fn equality_rules() {
    let eq = object::equal_to(String::from("admin"));
    assert!(eq.is_satisfied_by(&"admin".to_string()));
    let result = eq.check(&"guest".to_string());
    assert_eq!(result.failures[0].metadata.get_param("reference"), Some("\"admin\""));

    let ne = object::not_equal_to(0u8);
    assert!(ne.is_satisfied_by(&1));
    assert!(!ne.is_satisfied_by(&0));
}

#[test]
fn instance_identity() {
    let shared = Arc::new(vec![1, 2, 3]);
    let copy = Arc::new(vec![1, 2, 3]);

    let same = object::same_instance(Arc::clone(&shared));
    assert!(same.is_satisfied_by(&Arc::clone(&shared)));
    assert!(!same.is_satisfied_by(&copy));

    let different = object::not_same_instance(Arc::clone(&shared));
    assert!(different.is_satisfied_by(&copy));
    assert!(!different.is_satisfied_by(&shared));
}

#[test]
fn satisfies_requires_description() {
    assert_eq!(
        object::satisfies(|_: &i32| true, "").unwrap_err(),
        ConfigError::BlankDescription
    );
    let rule = object::satisfies(|s: &str| s.contains('@'), "contain an @").unwrap();
    let result = rule.check("nobody");
    assert_eq!(result.failures[0].message(), "Value must contain an @");
}

#[test]
fn type_membership() {
    let value: Box<dyn Any + Send + Sync> = Box::new(42i64);
    assert!(object::is_instance_of::<i64>().is_satisfied_by(value.as_ref()));
    assert!(!object::is_instance_of::<String>().is_satisfied_by(value.as_ref()));
    assert!(object::is_not_instance_of::<String>().is_satisfied_by(value.as_ref()));

    let mut result = ValidationResult::new();
    object::is_instance_of::<i64>().apply(None, &mut result, &Identifier::root());
    assert!(result.is_valid());
}
