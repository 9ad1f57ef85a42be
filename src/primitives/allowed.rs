//! Allowed-value rules: membership in explicit sets and lists, and in the
//! constants of an enumerated type.

use std::any::type_name;
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::ConfigError;
use crate::metadata::allowed as meta;
use crate::rule::{create_skip_null_rule, Rule};

/// An enumerated type whose constants have stable names.
///
/// Usually implemented with [`enum_constants!`](crate::enum_constants).
pub trait EnumConstants: Sized + 'static {
    /// Every constant, in declaration order.
    fn constants() -> &'static [Self];

    /// The name of this constant.
    fn name(&self) -> &'static str;

    fn names() -> Vec<&'static str> {
        Self::constants().iter().map(|c| c.name()).collect()
    }
}

/// Input accepted by [`is_in_enum`]: either the enum itself or a string
/// naming one of its constants.
pub trait EnumCandidate<E: EnumConstants> {
    fn is_constant_of(&self) -> bool;
}

impl<E: EnumConstants> EnumCandidate<E> for str {
    fn is_constant_of(&self) -> bool {
        E::constants().iter().any(|c| c.name() == self)
    }
}

impl<E: EnumConstants> EnumCandidate<E> for String {
    fn is_constant_of(&self) -> bool {
        <str as EnumCandidate<E>>::is_constant_of(self.as_str())
    }
}

/// Render reference values in a stable order.
fn render<'a, T: Debug + 'a>(values: impl IntoIterator<Item = &'a T>) -> String {
    let mut shown: Vec<String> = values.into_iter().map(|v| format!("{:?}", v)).collect();
    shown.sort();
    shown.join(", ")
}

fn collect_non_empty<T>(
    values: impl IntoIterator<Item = T>,
    name: &'static str,
) -> Result<Vec<T>, ConfigError> {
    let values: Vec<T> = values.into_iter().collect();
    if values.is_empty() {
        return Err(ConfigError::empty_reference(name));
    }
    Ok(values)
}

/// Value must be a member of `allowed`.
///
/// # Example
/// ```
/// use std::collections::HashSet;
/// use fluent_rules::prelude::*;
///
/// let rule = allowed::is_in_set(HashSet::from([1, 2, 3])).unwrap();
/// assert!(rule.is_satisfied_by(&2));
/// assert!(!rule.is_satisfied_by(&4));
/// assert!(allowed::is_in_set(HashSet::<i32>::new()).is_err());
/// ```
pub fn is_in_set<T>(allowed: HashSet<T>) -> Result<Rule<T>, ConfigError>
where
    T: Eq + Hash + Debug + Send + Sync + 'static,
{
    if allowed.is_empty() {
        return Err(ConfigError::empty_reference("allowed set"));
    }
    let shown = render(&allowed);
    Ok(create_skip_null_rule(
        move |v: &T| allowed.contains(v),
        move |id| meta::in_set(id, &shown),
    ))
}

/// Value must equal one of `allowed`.
pub fn is_one_of<T>(allowed: impl IntoIterator<Item = T>) -> Result<Rule<T>, ConfigError>
where
    T: PartialEq + Debug + Send + Sync + 'static,
{
    let allowed = collect_non_empty(allowed, "allowed values")?;
    let shown = render(&allowed);
    Ok(create_skip_null_rule(
        move |v: &T| allowed.contains(v),
        move |id| meta::one_of(id, &shown),
    ))
}

/// Value must not be a member of `disallowed`.
pub fn not_in_set<T>(disallowed: HashSet<T>) -> Result<Rule<T>, ConfigError>
where
    T: Eq + Hash + Debug + Send + Sync + 'static,
{
    if disallowed.is_empty() {
        return Err(ConfigError::empty_reference("disallowed set"));
    }
    let shown = render(&disallowed);
    Ok(create_skip_null_rule(
        move |v: &T| !disallowed.contains(v),
        move |id| meta::not_in_set(id, &shown),
    ))
}

/// Value must equal none of `disallowed`.
pub fn none_of<T>(disallowed: impl IntoIterator<Item = T>) -> Result<Rule<T>, ConfigError>
where
    T: PartialEq + Debug + Send + Sync + 'static,
{
    let disallowed = collect_non_empty(disallowed, "disallowed values")?;
    let shown = render(&disallowed);
    Ok(create_skip_null_rule(
        move |v: &T| !disallowed.contains(v),
        move |id| meta::none_of(id, &shown),
    ))
}

/// Value must be a constant of `E`: either an `E` or a string equal to one
/// constant's name (case-sensitive).
///
/// # Example
/// ```
/// use fluent_rules::prelude::*;
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum Suit { Hearts, Spades }
///
/// fluent_rules::enum_constants! {
///     Suit { Hearts => "HEARTS", Spades => "SPADES" }
/// }
///
/// let rule = allowed::is_in_enum::<Suit, str>();
/// assert!(rule.is_satisfied_by("HEARTS"));
/// assert!(!rule.is_satisfied_by("hearts"));
/// ```
pub fn is_in_enum<E, V>() -> Rule<V>
where
    E: EnumConstants,
    V: ?Sized + EnumCandidate<E> + 'static,
{
    let full = type_name::<E>();
    let enum_name = full.rsplit("::").next().unwrap_or(full);
    create_skip_null_rule(
        |v: &V| v.is_constant_of(),
        move |id| meta::in_enum(id, enum_name, &E::names()),
    )
}
