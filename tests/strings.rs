use fluent_rules::prelude::*;

fn failures(rule: &Rule<str>, value: &str) -> Vec<&'static str> {
    rule.check(value)
        .failures
        .iter()
        .map(|f| f.code().key())
        .collect()
}

#[test]
fn not_blank_is_the_only_rule_that_rejects_absent_or_blank() {
    let mut result = ValidationResult::new();
    let id = Identifier::field("name");

    string::not_blank().apply(None, &mut result, &id);
    string::not_blank().apply(Some(""), &mut result, &id);
    string::not_blank().apply(Some(" \t\n"), &mut result, &id);
    assert_eq!(result.failures.len(), 3);

    let others = [
        string::min_length(3),
        string::exact_length(2),
        string::is_numeric(),
        string::no_whitespace(),
        string::is_trimmed(),
        string::starts_with("x"),
    ];
    let mut result = ValidationResult::new();
    for rule in &others {
        rule.apply(None, &mut result, &id);
        rule.apply(Some("   "), &mut result, &id);
    }
    assert!(result.is_valid());
}

#[test]
fn lengths_use_trimmed_value() {
    let padded = "     abc";
    assert!(string::exact_length(3).is_satisfied_by(padded));
    assert!(string::max_length(3).is_satisfied_by(padded));
    assert!(!string::min_length(4).is_satisfied_by(padded));

    let result = string::min_length(4).check(padded);
    let meta = &result.failures[0].metadata;
    assert_eq!(meta.get_param("min"), Some("4"));
    assert_eq!(meta.get_param("actual"), Some("3"));
}

#[test]
fn lengths_count_characters() {
    assert!(string::exact_length(4).is_satisfied_by("žluť"));
}

#[test]
fn length_between_bounds() {
    let rule = string::length_between(2, 4).unwrap();
    assert_eq!(failures(&rule, "a"), ["string.length_between"]);
    assert!(rule.is_satisfied_by("ab"));
    assert!(rule.is_satisfied_by("abcd"));
    assert_eq!(failures(&rule, "abcde"), ["string.length_between"]);

    assert_eq!(
        string::length_between(5, 1).unwrap_err(),
        ConfigError::InvalidRange {
            min: "5".into(),
            max: "1".into()
        }
    );
}

#[cfg(feature = "regex")]
#[test]
fn pattern_matches_whole_string() {
    let rule = string::matches(r"\d{3}-\d{4}").unwrap();
    assert!(rule.is_satisfied_by("555-1234"));
    assert!(!rule.is_satisfied_by("555-12345"));
    assert!(!rule.is_satisfied_by("x555-1234"));

    let result = rule.check("nope");
    assert_eq!(result.failures[0].metadata.get_param("pattern"), Some(r"\d{3}-\d{4}"));

    assert!(matches!(
        string::matches("[unclosed"),
        Err(ConfigError::InvalidPattern { .. })
    ));
}

#[test]
fn membership() {
    let rule = string::is_in(["draft", "published"]).unwrap();
    assert!(rule.is_satisfied_by("draft"));
    assert!(!rule.is_satisfied_by("Draft"));

    let relaxed = string::is_in_ignore_case(vec!["draft".to_string()]).unwrap();
    assert!(relaxed.is_satisfied_by("DRAFT"));
    assert_eq!(failures(&relaxed, "archived"), ["string.in_ignore_case"]);

    assert!(string::is_in(Vec::<&str>::new()).is_err());
    assert!(string::is_in_ignore_case(Vec::<String>::new()).is_err());
}

#[test]
fn affixes() {
    assert!(string::starts_with("https://").is_satisfied_by("https://example.com"));
    assert!(!string::starts_with("https://").is_satisfied_by("http://example.com"));
    assert!(string::ends_with(".rs").is_satisfied_by("main.rs"));
    assert!(!string::ends_with(".rs").is_satisfied_by("main.py"));
    assert!(string::contains("@").is_satisfied_by("a@b"));

    let result = string::contains("@").check("ab");
    assert_eq!(result.failures[0].message(), "String must contain \"@\"");
}

#[test]
fn character_classes() {
    assert!(string::is_numeric().is_satisfied_by("0123"));
    assert!(!string::is_numeric().is_satisfied_by("12.5"));
    assert!(!string::is_numeric().is_satisfied_by("-1"));

    assert!(string::is_alphanumeric().is_satisfied_by("abc123"));
    assert!(!string::is_alphanumeric().is_satisfied_by("abc 123"));
    assert!(!string::is_alphanumeric().is_satisfied_by("café"));
    assert!(!string::is_numeric().is_satisfied_by("١٢٣"));

    assert!(string::is_upper_case().is_satisfied_by("ABC-1"));
    assert!(!string::is_upper_case().is_satisfied_by("AbC"));
    assert!(string::is_lower_case().is_satisfied_by("abc-1"));
    assert!(!string::is_lower_case().is_satisfied_by("abC"));
}

#[test]
fn whitespace_rules() {
    assert_eq!(failures(&string::no_whitespace(), "a b"), ["string.no_whitespace"]);
    assert!(string::no_whitespace().is_satisfied_by("ab"));

    assert!(!string::no_leading_whitespace().is_satisfied_by(" ab"));
    assert!(string::no_leading_whitespace().is_satisfied_by("ab "));
    assert!(!string::no_trailing_whitespace().is_satisfied_by("ab\t"));
    assert!(string::no_trailing_whitespace().is_satisfied_by(" ab"));

    assert!(string::no_consecutive_whitespace().is_satisfied_by("a b c"));
    assert!(!string::no_consecutive_whitespace().is_satisfied_by("a  b"));
    assert!(!string::no_consecutive_whitespace().is_satisfied_by("a \tb"));

    assert!(string::is_trimmed().is_satisfied_by("a  b"));
    assert!(!string::is_trimmed().is_satisfied_by(" a"));

    assert!(string::proper_spacing().is_satisfied_by("Jane Doe"));
    assert!(!string::proper_spacing().is_satisfied_by("Jane  Doe"));
    assert!(!string::proper_spacing().is_satisfied_by(" Jane Doe"));
}
