//! Rules over arbitrary values: presence, equality, identity, custom
//! predicates and type membership.

use std::any::{type_name, Any};
use std::fmt::Debug;
use std::sync::Arc;

use crate::error::{require_description, ConfigError};
use crate::metadata::object as meta;
use crate::rule::{create_rule, create_skip_null_rule, Rule};

/// Fails when the value is absent.
///
/// # Example
/// ```
/// use fluent_rules::prelude::*;
///
/// let rule = object::not_null::<i32>();
/// let mut result = ValidationResult::new();
/// rule.apply(None, &mut result, &Identifier::field("age"));
/// assert_eq!(result.failures[0].message(), "Value must not be null");
/// ```
pub fn not_null<T: ?Sized + 'static>() -> Rule<T> {
    create_rule(|value: Option<&T>| value.is_some(), meta::not_null)
}

/// Fails when the value is present.
pub fn must_be_null<T: ?Sized + 'static>() -> Rule<T> {
    create_rule(|value: Option<&T>| value.is_none(), meta::must_be_null)
}

/// Value must equal `reference`.
pub fn equal_to<T>(reference: T) -> Rule<T>
where
    T: PartialEq + Debug + Send + Sync + 'static,
{
    let reference = Arc::new(reference);
    let shown = Arc::clone(&reference);
    create_skip_null_rule(
        move |value: &T| *value == *reference,
        move |id| meta::equal_to(id, &*shown),
    )
}

/// Value must differ from `reference`.
pub fn not_equal_to<T>(reference: T) -> Rule<T>
where
    T: PartialEq + Debug + Send + Sync + 'static,
{
    let reference = Arc::new(reference);
    let shown = Arc::clone(&reference);
    create_skip_null_rule(
        move |value: &T| *value != *reference,
        move |id| meta::not_equal_to(id, &*shown),
    )
}

/// Value must be the very allocation `reference` points to. Equal but
/// distinct values fail.
pub fn same_instance<T>(reference: Arc<T>) -> Rule<Arc<T>>
where
    T: ?Sized + Send + Sync + 'static,
{
    create_skip_null_rule(
        move |value: &Arc<T>| Arc::ptr_eq(value, &reference),
        |id| meta::same_instance(id, type_name::<T>()),
    )
}

/// Value must not be the allocation `reference` points to.
pub fn not_same_instance<T>(reference: Arc<T>) -> Rule<Arc<T>>
where
    T: ?Sized + Send + Sync + 'static,
{
    create_skip_null_rule(
        move |value: &Arc<T>| !Arc::ptr_eq(value, &reference),
        |id| meta::not_same_instance(id, type_name::<T>()),
    )
}

/// Value must satisfy `predicate`. The description completes the sentence
/// "Value must ..." in the failure message and must not be blank.
///
/// # Example
/// ```
/// use fluent_rules::prelude::*;
///
/// let even = object::satisfies(|n: &i64| n % 2 == 0, "be even").unwrap();
/// assert!(even.is_satisfied_by(&4));
/// assert!(!even.is_satisfied_by(&3));
/// assert!(object::satisfies(|_: &i64| true, "  ").is_err());
/// ```
pub fn satisfies<T, P>(predicate: P, description: &str) -> Result<Rule<T>, ConfigError>
where
    T: ?Sized + 'static,
    P: Fn(&T) -> bool + Send + Sync + 'static,
{
    let description = require_description(description)?;
    Ok(create_skip_null_rule(predicate, move |id| {
        meta::satisfies(id, &description)
    }))
}

/// Value must be a `U`.
pub fn is_instance_of<U: Any>() -> Rule<dyn Any + Send + Sync> {
    create_skip_null_rule::<dyn Any + Send + Sync, _, _>(
        |value| value.is::<U>(),
        |id| meta::instance_of(id, type_name::<U>()),
    )
}

/// Value must not be a `U`.
pub fn is_not_instance_of<U: Any>() -> Rule<dyn Any + Send + Sync> {
    create_skip_null_rule::<dyn Any + Send + Sync, _, _>(
        |value| !value.is::<U>(),
        |id| meta::not_instance_of(id, type_name::<U>()),
    )
}
