//! Rules over maps: size, key/value membership and key, value or entry
//! predicates. Generic over [`MapLike`] (`HashMap`, `BTreeMap`).
//!
//! The `any_*` rules fail on an empty map; the `all_*` and `no_*` rules
//! pass on it.

use std::fmt::Debug;
use std::sync::Arc;

use super::{MapLike, SizeMetadata};
use crate::error::{require_description, ConfigError, MapCode};
use crate::metadata::map as meta;
use crate::rule::{create_skip_null_rule, create_skip_null_rule_with_value, Rule};

const SIZES: SizeMetadata = SizeMetadata {
    min: meta::min_size,
    max: meta::max_size,
    exact: meta::exact_size,
    range: meta::size_range,
};

pub fn not_empty<M: MapLike + 'static>() -> Rule<M> {
    create_skip_null_rule(|m: &M| m.size() > 0, meta::not_empty)
}

pub fn is_empty<M: MapLike + 'static>() -> Rule<M> {
    create_skip_null_rule_with_value(|m: &M| m.size() == 0, |id, m: &M| meta::empty(id, m.size()))
}

pub fn min_size<M: MapLike + 'static>(min: usize) -> Rule<M> {
    super::min_size(min, |m: &M| m.size(), &SIZES)
}

pub fn max_size<M: MapLike + 'static>(max: usize) -> Rule<M> {
    super::max_size(max, |m: &M| m.size(), &SIZES)
}

pub fn exact_size<M: MapLike + 'static>(size: usize) -> Rule<M> {
    super::exact_size(size, |m: &M| m.size(), &SIZES)
}

/// Between `min` and `max` entries, inclusive. The failure metadata
/// carries `min`, `max` and the `actual` size.
///
/// # Example
/// ```
/// use std::collections::HashMap;
/// use fluent_rules::prelude::*;
///
/// let rule = map::size_range::<HashMap<&str, i32>>(1, 3).unwrap();
/// let big = HashMap::from([("a", 1), ("b", 2), ("c", 3), ("d", 4)]);
/// let result = rule.check(&big);
/// assert_eq!(result.failures[0].metadata.get_param("actual"), Some("4"));
/// ```
pub fn size_range<M: MapLike + 'static>(min: usize, max: usize) -> Result<Rule<M>, ConfigError> {
    super::size_range(min, max, |m: &M| m.size(), &SIZES)
}

pub fn contains_key<M>(key: M::Key) -> Rule<M>
where
    M: MapLike + 'static,
    M::Key: Debug + Send + Sync,
{
    let key = Arc::new(key);
    let shown = Arc::clone(&key);
    create_skip_null_rule(
        move |m: &M| m.has_key(&key),
        move |id| meta::contains_key(id, &*shown),
    )
}

pub fn does_not_contain_key<M>(key: M::Key) -> Rule<M>
where
    M: MapLike + 'static,
    M::Key: Debug + Send + Sync,
{
    let key = Arc::new(key);
    let shown = Arc::clone(&key);
    create_skip_null_rule(
        move |m: &M| !m.has_key(&key),
        move |id| meta::does_not_contain_key(id, &*shown),
    )
}

pub fn contains_value<M>(value: M::Value) -> Rule<M>
where
    M: MapLike + 'static,
    M::Value: PartialEq + Debug + Send + Sync,
{
    let value = Arc::new(value);
    let shown = Arc::clone(&value);
    create_skip_null_rule(
        move |m: &M| m.entries().any(|(_, v)| *v == *value),
        move |id| meta::contains_value(id, &*shown),
    )
}

pub fn does_not_contain_value<M>(value: M::Value) -> Rule<M>
where
    M: MapLike + 'static,
    M::Value: PartialEq + Debug + Send + Sync,
{
    let value = Arc::new(value);
    let shown = Arc::clone(&value);
    create_skip_null_rule(
        move |m: &M| !m.entries().any(|(_, v)| *v == *value),
        move |id| meta::does_not_contain_value(id, &*shown),
    )
}

#[derive(Clone, Copy)]
enum Quantifier {
    All,
    Any,
    No,
}

impl Quantifier {
    fn holds<I: Iterator, P: FnMut(I::Item) -> bool>(self, mut iter: I, predicate: P) -> bool {
        match self {
            Quantifier::All => iter.all(predicate),
            Quantifier::Any => iter.any(predicate),
            Quantifier::No => !iter.any(predicate),
        }
    }
}

fn entry_rule<M, P>(
    quantifier: Quantifier,
    code: MapCode,
    subject: &'static str,
    predicate: P,
    description: &str,
) -> Result<Rule<M>, ConfigError>
where
    M: MapLike + 'static,
    P: Fn(&M::Key, &M::Value) -> bool + Send + Sync + 'static,
{
    let description = require_description(description)?;
    Ok(create_skip_null_rule(
        move |m: &M| quantifier.holds(m.entries(), |(k, v)| predicate(k, v)),
        move |id| meta::matching(id, code, subject, &description),
    ))
}

pub fn all_keys_match<M, P>(predicate: P, description: &str) -> Result<Rule<M>, ConfigError>
where
    M: MapLike + 'static,
    P: Fn(&M::Key) -> bool + Send + Sync + 'static,
{
    entry_rule::<M, _>(
        Quantifier::All,
        MapCode::AllKeysMatch,
        "key",
        move |k, _| predicate(k),
        description,
    )
}

pub fn any_key_matches<M, P>(predicate: P, description: &str) -> Result<Rule<M>, ConfigError>
where
    M: MapLike + 'static,
    P: Fn(&M::Key) -> bool + Send + Sync + 'static,
{
    entry_rule::<M, _>(
        Quantifier::Any,
        MapCode::AnyKeyMatches,
        "key",
        move |k, _| predicate(k),
        description,
    )
}

pub fn no_key_matches<M, P>(predicate: P, description: &str) -> Result<Rule<M>, ConfigError>
where
    M: MapLike + 'static,
    P: Fn(&M::Key) -> bool + Send + Sync + 'static,
{
    entry_rule::<M, _>(
        Quantifier::No,
        MapCode::NoKeyMatches,
        "key",
        move |k, _| predicate(k),
        description,
    )
}

pub fn all_values_match<M, P>(predicate: P, description: &str) -> Result<Rule<M>, ConfigError>
where
    M: MapLike + 'static,
    P: Fn(&M::Value) -> bool + Send + Sync + 'static,
{
    entry_rule::<M, _>(
        Quantifier::All,
        MapCode::AllValuesMatch,
        "value",
        move |_, v| predicate(v),
        description,
    )
}

/// At least one value satisfies `predicate`. An empty map fails.
///
/// # Example
/// ```
/// use std::collections::BTreeMap;
/// use fluent_rules::prelude::*;
///
/// let rule = map::any_value_matches::<BTreeMap<&str, i32>, _>(|v| *v > 10, "exceed 10").unwrap();
/// assert!(rule.is_satisfied_by(&BTreeMap::from([("a", 1), ("b", 11)])));
/// assert!(!rule.is_satisfied_by(&BTreeMap::new()));
/// ```
pub fn any_value_matches<M, P>(predicate: P, description: &str) -> Result<Rule<M>, ConfigError>
where
    M: MapLike + 'static,
    P: Fn(&M::Value) -> bool + Send + Sync + 'static,
{
    entry_rule::<M, _>(
        Quantifier::Any,
        MapCode::AnyValueMatches,
        "value",
        move |_, v| predicate(v),
        description,
    )
}

pub fn no_value_matches<M, P>(predicate: P, description: &str) -> Result<Rule<M>, ConfigError>
where
    M: MapLike + 'static,
    P: Fn(&M::Value) -> bool + Send + Sync + 'static,
{
    entry_rule::<M, _>(
        Quantifier::No,
        MapCode::NoValueMatches,
        "value",
        move |_, v| predicate(v),
        description,
    )
}

pub fn all_entries_match<M, P>(predicate: P, description: &str) -> Result<Rule<M>, ConfigError>
where
    M: MapLike + 'static,
    P: Fn(&M::Key, &M::Value) -> bool + Send + Sync + 'static,
{
    entry_rule::<M, _>(Quantifier::All, MapCode::AllEntriesMatch, "entry", predicate, description)
}

pub fn any_entry_matches<M, P>(predicate: P, description: &str) -> Result<Rule<M>, ConfigError>
where
    M: MapLike + 'static,
    P: Fn(&M::Key, &M::Value) -> bool + Send + Sync + 'static,
{
    entry_rule::<M, _>(Quantifier::Any, MapCode::AnyEntryMatches, "entry", predicate, description)
}

pub fn no_entry_matches<M, P>(predicate: P, description: &str) -> Result<Rule<M>, ConfigError>
where
    M: MapLike + 'static,
    P: Fn(&M::Key, &M::Value) -> bool + Send + Sync + 'static,
{
    entry_rule::<M, _>(Quantifier::No, MapCode::NoEntryMatches, "entry", predicate, description)
}

/// Every key of `keys` is present. `keys` must not be empty.
pub fn contains_all_keys<M>(keys: impl IntoIterator<Item = M::Key>) -> Result<Rule<M>, ConfigError>
where
    M: MapLike + 'static,
    M::Key: Debug + Send + Sync,
{
    let keys: Vec<M::Key> = keys.into_iter().collect();
    if keys.is_empty() {
        return Err(ConfigError::empty_reference("reference keys"));
    }
    let keys = Arc::new(keys);
    let shown = Arc::clone(&keys);
    Ok(create_skip_null_rule(
        move |m: &M| keys.iter().all(|k| m.has_key(k)),
        move |id| meta::contains_all_keys(id, shown.as_slice()),
    ))
}
