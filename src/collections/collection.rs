//! Rules over collections: size, element predicates, duplicates and
//! membership.
//!
//! Rules are generic over [`Collection`], so the same factory serves
//! slices, `Vec`, `VecDeque`, `HashSet` and `BTreeSet`:
//!
//! ```
//! use fluent_rules::prelude::*;
//!
//! let rule = collection::min_size::<Vec<&str>>(2);
//! assert!(!rule.is_satisfied_by(&vec!["a"]));
//! assert!(rule.is_satisfied_by(&vec!["a", "b"]));
//! ```

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

use super::{Collection, SizeMetadata};
use crate::error::{require_description, ConfigError};
use crate::metadata::collection as meta;
use crate::rule::{create_skip_null_rule, create_skip_null_rule_with_value, Rule};

const SIZES: SizeMetadata = SizeMetadata {
    min: meta::min_size,
    max: meta::max_size,
    exact: meta::exact_size,
    range: meta::size_range,
};

pub fn not_empty<C: ?Sized + Collection + 'static>() -> Rule<C> {
    create_skip_null_rule(|c: &C| c.size() > 0, meta::not_empty)
}

pub fn is_empty<C: ?Sized + Collection + 'static>() -> Rule<C> {
    create_skip_null_rule_with_value(|c: &C| c.size() == 0, |id, c: &C| meta::empty(id, c.size()))
}

/// At least `min` elements.
pub fn min_size<C: ?Sized + Collection + 'static>(min: usize) -> Rule<C> {
    super::min_size(min, |c: &C| c.size(), &SIZES)
}

/// At most `max` elements.
pub fn max_size<C: ?Sized + Collection + 'static>(max: usize) -> Rule<C> {
    super::max_size(max, |c: &C| c.size(), &SIZES)
}

/// Exactly `size` elements.
pub fn exact_size<C: ?Sized + Collection + 'static>(size: usize) -> Rule<C> {
    super::exact_size(size, |c: &C| c.size(), &SIZES)
}

/// Between `min` and `max` elements, inclusive.
pub fn size_range<C: ?Sized + Collection + 'static>(
    min: usize,
    max: usize,
) -> Result<Rule<C>, ConfigError> {
    super::size_range(min, max, |c: &C| c.size(), &SIZES)
}

/// Every element satisfies `predicate`. An empty collection passes.
///
/// # Example
/// ```
/// use fluent_rules::prelude::*;
///
/// let rule = collection::all_match::<Vec<i32>, _>(|x| *x > 0, "be positive").unwrap();
/// assert!(!rule.is_satisfied_by(&vec![1, 2, -3]));
/// assert!(rule.is_satisfied_by(&vec![]));
/// ```
pub fn all_match<C, P>(predicate: P, description: &str) -> Result<Rule<C>, ConfigError>
where
    C: ?Sized + Collection + 'static,
    P: Fn(&C::Item) -> bool + Send + Sync + 'static,
{
    let description = require_description(description)?;
    Ok(create_skip_null_rule(
        move |c: &C| c.items().all(|item| predicate(item)),
        move |id| meta::all_match(id, &description),
    ))
}

/// At least one element satisfies `predicate`. An empty collection fails.
pub fn any_match<C, P>(predicate: P, description: &str) -> Result<Rule<C>, ConfigError>
where
    C: ?Sized + Collection + 'static,
    P: Fn(&C::Item) -> bool + Send + Sync + 'static,
{
    let description = require_description(description)?;
    Ok(create_skip_null_rule(
        move |c: &C| c.items().any(|item| predicate(item)),
        move |id| meta::any_match(id, &description),
    ))
}

/// No element satisfies `predicate`. An empty collection passes.
pub fn none_match<C, P>(predicate: P, description: &str) -> Result<Rule<C>, ConfigError>
where
    C: ?Sized + Collection + 'static,
    P: Fn(&C::Item) -> bool + Send + Sync + 'static,
{
    let description = require_description(description)?;
    Ok(create_skip_null_rule(
        move |c: &C| !c.items().any(|item| predicate(item)),
        move |id| meta::none_match(id, &description),
    ))
}

/// Every element is distinct.
pub fn no_duplicates<C>() -> Rule<C>
where
    C: ?Sized + Collection + 'static,
    C::Item: Eq + Hash,
{
    create_skip_null_rule(
        |c: &C| {
            let mut seen = HashSet::with_capacity(c.size());
            c.items().all(|item| seen.insert(item))
        },
        meta::no_duplicates,
    )
}

pub fn contains<C>(element: C::Item) -> Rule<C>
where
    C: ?Sized + Collection + 'static,
    C::Item: PartialEq + Debug + Send + Sync,
{
    let element = Arc::new(element);
    let shown = Arc::clone(&element);
    create_skip_null_rule(
        move |c: &C| c.items().any(|item| *item == *element),
        move |id| meta::contains(id, &*shown),
    )
}

pub fn does_not_contain<C>(element: C::Item) -> Rule<C>
where
    C: ?Sized + Collection + 'static,
    C::Item: PartialEq + Debug + Send + Sync,
{
    let element = Arc::new(element);
    let shown = Arc::clone(&element);
    create_skip_null_rule(
        move |c: &C| !c.items().any(|item| *item == *element),
        move |id| meta::does_not_contain(id, &*shown),
    )
}

fn reference<T>(elements: impl IntoIterator<Item = T>) -> Result<Vec<T>, ConfigError> {
    let elements: Vec<T> = elements.into_iter().collect();
    if elements.is_empty() {
        return Err(ConfigError::empty_reference("reference elements"));
    }
    Ok(elements)
}

/// Every element of `elements` is present. `elements` must not be empty.
///
/// # Example
/// ```
/// use fluent_rules::prelude::*;
///
/// let rule = collection::contains_all::<Vec<i32>>([1, 2]).unwrap();
/// assert!(rule.is_satisfied_by(&vec![3, 2, 1]));
/// assert!(!rule.is_satisfied_by(&vec![1, 3]));
/// assert!(collection::contains_all::<Vec<i32>>([]).is_err());
/// ```
pub fn contains_all<C>(elements: impl IntoIterator<Item = C::Item>) -> Result<Rule<C>, ConfigError>
where
    C: ?Sized + Collection + 'static,
    C::Item: PartialEq + Debug + Send + Sync,
{
    let elements = Arc::new(reference(elements)?);
    let shown = Arc::clone(&elements);
    Ok(create_skip_null_rule(
        move |c: &C| elements.iter().all(|e| c.items().any(|item| item == e)),
        move |id| meta::contains_all(id, shown.as_slice()),
    ))
}

/// No element of `elements` is present. `elements` must not be empty.
pub fn contains_none<C>(elements: impl IntoIterator<Item = C::Item>) -> Result<Rule<C>, ConfigError>
where
    C: ?Sized + Collection + 'static,
    C::Item: PartialEq + Debug + Send + Sync,
{
    let elements = Arc::new(reference(elements)?);
    let shown = Arc::clone(&elements);
    Ok(create_skip_null_rule(
        move |c: &C| !elements.iter().any(|e| c.items().any(|item| item == e)),
        move |id| meta::contains_none(id, shown.as_slice()),
    ))
}
