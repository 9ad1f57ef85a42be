use fluent_rules::prelude::*;

#[test]
fn min_and_max_include_the_bound() {
    assert!(number::min(5).is_satisfied_by(&5));
    assert!(!number::min(5).is_satisfied_by(&4));
    assert!(number::max(2.5).is_satisfied_by(&2.5));
    assert!(!number::max(2.5).is_satisfied_by(&2.51));
}

#[test]
fn range() {
    let rule = number::range(1u32, 10).unwrap();
    assert!(rule.is_satisfied_by(&1));
    assert!(rule.is_satisfied_by(&10));
    assert!(!rule.is_satisfied_by(&0));
    assert!(!rule.is_satisfied_by(&11));

    let result = rule.check(&11);
    let meta = &result.failures[0].metadata;
    assert_eq!(meta.get_param("min"), Some("1"));
    assert_eq!(meta.get_param("max"), Some("10"));

    assert!(number::range(3, 1).is_err());
}

#[test]
fn sign_rules() {
    assert!(number::positive().is_satisfied_by(&1i8));
    assert!(!number::positive().is_satisfied_by(&0i8));
    assert!(number::negative().is_satisfied_by(&-0.1f32));
    assert!(!number::negative().is_satisfied_by(&0.0f32));

    assert!(number::non_zero().is_satisfied_by(&-3i64));
    assert!(!number::non_zero().is_satisfied_by(&0i64));
    assert!(number::non_negative().is_satisfied_by(&0u64));
    assert!(!number::non_negative().is_satisfied_by(&-1i128));
    assert!(number::non_positive().is_satisfied_by(&0isize));
    assert!(!number::non_positive().is_satisfied_by(&1isize));
}

#[test]
fn absent_numbers_are_skipped() {
    let rules: Vec<Rule<f64>> = vec![
        number::min(0.0),
        number::max(0.0),
        number::range(0.0, 1.0).unwrap(),
        number::positive(),
        number::negative(),
        number::non_zero(),
        number::non_negative(),
        number::non_positive(),
    ];
    let mut result = ValidationResult::new();
    for rule in &rules {
        rule.apply(None, &mut result, &Identifier::field("score"));
    }
    assert!(result.is_valid());
}

#[test]
fn nan_is_never_positive_or_negative() {
    assert!(!number::positive().is_satisfied_by(&f64::NAN));
    assert!(!number::negative().is_satisfied_by(&f64::NAN));
}

#[test]
fn range_rejects_nan_bounds() {
    assert_eq!(
        number::range(f64::NAN, 1.0).unwrap_err(),
        ConfigError::InvalidRange { min: "NaN".into(), max: "1".into() }
    );
    assert!(number::range(0.0, f64::NAN).is_err());
    assert!(number::range(f64::NAN, f64::NAN).is_err());
    assert!(number::range(1.5, 1.5).unwrap().is_satisfied_by(&1.5));
}

#[cfg(feature = "decimal")]
#[test]
fn decimal_values() {
    use rust_decimal::Decimal;

    let price = number::range(Decimal::new(1, 2), Decimal::new(99999, 2)).unwrap();
    assert!(price.is_satisfied_by(&Decimal::new(1999, 2)));
    assert!(!price.is_satisfied_by(&Decimal::ZERO));
    assert!(number::non_negative().is_satisfied_by(&Decimal::ZERO));
}
