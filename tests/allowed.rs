use std::collections::HashSet;

use fluent_rules::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

fluent_rules::enum_constants! {
    Suit {
        Hearts => "HEARTS",
        Diamonds => "DIAMONDS",
        Clubs => "CLUBS",
        Spades => "SPADES",
    }
}

#[test]
fn enum_constants_macro() {
    assert_eq!(Suit::names(), ["HEARTS", "DIAMONDS", "CLUBS", "SPADES"]);
    assert_eq!(Suit::Clubs.name(), "CLUBS");
    assert_eq!(Suit::constants().len(), 4);
}

#[test]
fn is_in_enum_scenario() {
    let rule = allowed::is_in_enum::<Suit, str>();
    assert!(rule.is_satisfied_by("HEARTS"));

    let result = rule.check("hearts");
    assert_eq!(result.failures.len(), 1);
    let meta = &result.failures[0].metadata;
    assert_eq!(meta.code.key(), "allowed.in_enum");
    assert_eq!(meta.get_param("enum"), Some("Suit"));
    assert_eq!(meta.get_param("constants"), Some("HEARTS, DIAMONDS, CLUBS, SPADES"));
}

#[test]
fn is_in_enum_accepts_owned_strings_and_variants() {
    assert!(allowed::is_in_enum::<Suit, String>().is_satisfied_by(&"SPADES".to_string()));
    assert!(!allowed::is_in_enum::<Suit, String>().is_satisfied_by(&"JOKER".to_string()));
    assert!(allowed::is_in_enum::<Suit, Suit>().is_satisfied_by(&Suit::Diamonds));
}

#[test]
fn sets() {
    let regions = allowed::is_in_set(HashSet::from(["eu", "us"])).unwrap();
    assert!(regions.is_satisfied_by(&"eu"));
    let result = regions.check(&"apac");
    assert_eq!(result.failures[0].message(), "Value must be one of: \"eu\", \"us\"");

    let blocked = allowed::not_in_set(HashSet::from([13])).unwrap();
    assert!(blocked.is_satisfied_by(&12));
    assert!(!blocked.is_satisfied_by(&13));

    assert!(allowed::is_in_set(HashSet::<u8>::new()).is_err());
    assert!(allowed::not_in_set(HashSet::<u8>::new()).is_err());
}

#[test]
fn lists() {
    let rule = allowed::is_one_of([0.5, 1.0, 2.0]).unwrap();
    assert!(rule.is_satisfied_by(&1.0));
    assert!(!rule.is_satisfied_by(&1.5));

    let rule = allowed::none_of(vec!["root".to_string(), "admin".to_string()]).unwrap();
    assert!(rule.is_satisfied_by(&"alice".to_string()));
    assert_eq!(rule.check(&"root".to_string()).failures[0].code().key(), "allowed.none_of");

    assert_eq!(
        allowed::none_of(Vec::<i32>::new()).unwrap_err(),
        ConfigError::EmptyReference {
            name: "disallowed values"
        }
    );
}

#[test]
fn absent_values_are_skipped() {
    let mut result = ValidationResult::new();
    allowed::is_in_enum::<Suit, str>().apply(None, &mut result, &Identifier::field("suit"));
    allowed::is_one_of([1]).unwrap().apply(None, &mut result, &Identifier::field("n"));
    assert!(result.is_valid());
}
