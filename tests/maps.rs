use std::collections::{BTreeMap, HashMap};

use fluent_rules::prelude::*;

fn headers() -> HashMap<String, String> {
    HashMap::from([
        ("content-type".to_string(), "application/json".to_string()),
        ("x-request-id".to_string(), "42".to_string()),
    ])
}

#[test]
fn size_range_scenario() {
    let rule = map::size_range::<HashMap<&str, i32>>(1, 3).unwrap();
    let four = HashMap::from([("a", 1), ("b", 2), ("c", 3), ("d", 4)]);

    let result = rule.check(&four);
    assert_eq!(result.failures.len(), 1);
    let meta = &result.failures[0].metadata;
    assert_eq!(meta.code.key(), "map.size_range");
    assert_eq!(meta.get_param("actual"), Some("4"));
    assert_eq!(meta.get_param("min"), Some("1"));
    assert_eq!(meta.get_param("max"), Some("3"));
}

#[test]
fn size_rules() {
    let two = headers();
    assert!(map::not_empty::<HashMap<String, String>>().is_satisfied_by(&two));
    assert!(!map::is_empty::<HashMap<String, String>>().is_satisfied_by(&two));
    assert!(map::min_size::<HashMap<String, String>>(2).is_satisfied_by(&two));
    assert!(!map::min_size::<HashMap<String, String>>(3).is_satisfied_by(&two));
    assert!(map::max_size::<HashMap<String, String>>(2).is_satisfied_by(&two));
    assert!(!map::max_size::<HashMap<String, String>>(1).is_satisfied_by(&two));
    assert!(map::exact_size::<HashMap<String, String>>(2).is_satisfied_by(&two));
    assert!(map::size_range::<HashMap<String, String>>(3, 2).is_err());
}

#[test]
fn key_and_value_membership() {
    type H = HashMap<String, String>;
    let h = headers();
    assert!(map::contains_key::<H>("content-type".into()).is_satisfied_by(&h));
    assert!(!map::contains_key::<H>("accept".into()).is_satisfied_by(&h));
    assert!(map::does_not_contain_key::<H>("cookie".into()).is_satisfied_by(&h));
    assert!(map::contains_value::<H>("42".into()).is_satisfied_by(&h));
    assert!(!map::does_not_contain_value::<H>("42".into()).is_satisfied_by(&h));

    let result = map::contains_key::<H>("accept".into()).check(&h);
    assert_eq!(result.failures[0].message(), "Map must contain key \"accept\"");
}

#[test]
fn contains_all_keys() {
    let rule =
        map::contains_all_keys::<BTreeMap<&str, u8>>(["id", "name"]).unwrap();
    assert!(rule.is_satisfied_by(&BTreeMap::from([("id", 1), ("name", 2), ("extra", 3)])));
    assert!(!rule.is_satisfied_by(&BTreeMap::from([("id", 1)])));
    assert!(map::contains_all_keys::<BTreeMap<&str, u8>>([]).is_err());
}

#[test]
fn key_predicates() {
    let m = BTreeMap::from([("alpha", 1), ("beta", 2)]);
    type M = BTreeMap<&'static str, i32>;

    assert!(map::all_keys_match::<M, _>(|k| k.is_ascii(), "be ASCII").unwrap().is_satisfied_by(&m));
    assert!(map::any_key_matches::<M, _>(|k| k.starts_with('b'), "start with b")
        .unwrap()
        .is_satisfied_by(&m));
    assert!(!map::no_key_matches::<M, _>(|k| k.len() == 4, "have four letters")
        .unwrap()
        .is_satisfied_by(&m));
}

#[test]
fn value_predicates() {
    let m = BTreeMap::from([("alpha", 1), ("beta", -2)]);
    type M = BTreeMap<&'static str, i32>;

    let all = map::all_values_match::<M, _>(|v| *v > 0, "be positive").unwrap();
    let result = all.check(&m);
    assert_eq!(result.failures[0].code().key(), "map.all_values_match");
    assert_eq!(result.failures[0].message(), "Every value must be positive");

    assert!(map::any_value_matches::<M, _>(|v| *v < 0, "be negative").unwrap().is_satisfied_by(&m));
    assert!(map::no_value_matches::<M, _>(|v| *v == 0, "be zero").unwrap().is_satisfied_by(&m));
}

#[test]
fn entry_predicates() {
    let m = BTreeMap::from([("a", 1), ("bb", 2)]);
    type M = BTreeMap<&'static str, usize>;

    let lengths =
        map::all_entries_match::<M, _>(|k, v| k.len() == *v, "map keys to their length").unwrap();
    assert!(lengths.is_satisfied_by(&m));
    assert!(!lengths.is_satisfied_by(&BTreeMap::from([("a", 2)])));

    assert!(map::any_entry_matches::<M, _>(|k, _| *k == "a", "be a").unwrap().is_satisfied_by(&m));
    let none_above_one = map::no_entry_matches::<M, _>(|_, v| *v > 1, "exceed one").unwrap();
    assert!(!none_above_one.is_satisfied_by(&m));
}

#[test]
fn quantifiers_on_empty_maps() {
    type M = HashMap<String, i32>;
    let empty = M::new();

    assert!(map::all_values_match::<M, _>(|_| false, "never").unwrap().is_satisfied_by(&empty));
    assert!(map::no_key_matches::<M, _>(|_| true, "always").unwrap().is_satisfied_by(&empty));
    assert!(!map::any_key_matches::<M, _>(|_| true, "always").unwrap().is_satisfied_by(&empty));
    assert!(!map::any_value_matches::<M, _>(|_| true, "always").unwrap().is_satisfied_by(&empty));
    let any_entry = map::any_entry_matches::<M, _>(|_, _| true, "always").unwrap();
    assert!(!any_entry.is_satisfied_by(&empty));
}

#[test]
fn absent_maps_are_skipped() {
    type M = HashMap<String, i32>;
    let rules: Vec<Rule<M>> = vec![
        map::not_empty(),
        map::min_size(1),
        map::contains_key("id".into()),
        map::contains_value(1),
        map::any_value_matches(|v: &i32| *v > 0, "be positive").unwrap(),
        map::contains_all_keys(["id".to_string()]).unwrap(),
    ];
    let mut result = ValidationResult::new();
    for rule in &rules {
        rule.apply(None, &mut result, &Identifier::field("attributes"));
    }
    assert!(result.is_valid());
}
