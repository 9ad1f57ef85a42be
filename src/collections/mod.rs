//! Collection and map catalogs, plus the capability traits they are
//! generic over.

pub mod collection;
pub mod map;

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};

use crate::error::{ConfigError, Identifier, Metadata};
use crate::rule::{create_skip_null_rule_with_value, Rule};

/// A sized, iterable container of elements.
pub trait Collection {
    type Item;

    fn size(&self) -> usize;

    fn items(&self) -> impl Iterator<Item = &Self::Item>;
}

impl<T> Collection for [T] {
    type Item = T;

    fn size(&self) -> usize {
        self.len()
    }

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T> Collection for Vec<T> {
    type Item = T;

    fn size(&self) -> usize {
        self.len()
    }

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T> Collection for VecDeque<T> {
    type Item = T;

    fn size(&self) -> usize {
        self.len()
    }

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T, S: BuildHasher> Collection for HashSet<T, S> {
    type Item = T;

    fn size(&self) -> usize {
        self.len()
    }

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T> Collection for BTreeSet<T> {
    type Item = T;

    fn size(&self) -> usize {
        self.len()
    }

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

/// A sized key/value container.
pub trait MapLike {
    type Key;
    type Value;

    fn size(&self) -> usize;

    fn has_key(&self, key: &Self::Key) -> bool;

    fn entries(&self) -> impl Iterator<Item = (&Self::Key, &Self::Value)>;
}

impl<K: Eq + Hash, V, S: BuildHasher> MapLike for HashMap<K, V, S> {
    type Key = K;
    type Value = V;

    fn size(&self) -> usize {
        self.len()
    }

    fn has_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }
}

impl<K: Ord, V> MapLike for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn size(&self) -> usize {
        self.len()
    }

    fn has_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }
}

// ---------------------------------------------------------------------------
// Size bounds shared by both catalogs
// ---------------------------------------------------------------------------

/// Metadata constructors for the four size rules of one domain.
pub(crate) struct SizeMetadata {
    pub min: fn(&Identifier, usize, usize) -> Metadata,
    pub max: fn(&Identifier, usize, usize) -> Metadata,
    pub exact: fn(&Identifier, usize, usize) -> Metadata,
    pub range: fn(&Identifier, usize, usize, usize) -> Metadata,
}

pub(crate) fn min_size<C, F>(min: usize, size: F, meta: &SizeMetadata) -> Rule<C>
where
    C: ?Sized + 'static,
    F: Fn(&C) -> usize + Copy + Send + Sync + 'static,
{
    let build = meta.min;
    create_skip_null_rule_with_value(
        move |c: &C| size(c) >= min,
        move |id, c: &C| build(id, min, size(c)),
    )
}

pub(crate) fn max_size<C, F>(max: usize, size: F, meta: &SizeMetadata) -> Rule<C>
where
    C: ?Sized + 'static,
    F: Fn(&C) -> usize + Copy + Send + Sync + 'static,
{
    let build = meta.max;
    create_skip_null_rule_with_value(
        move |c: &C| size(c) <= max,
        move |id, c: &C| build(id, max, size(c)),
    )
}

pub(crate) fn exact_size<C, F>(expected: usize, size: F, meta: &SizeMetadata) -> Rule<C>
where
    C: ?Sized + 'static,
    F: Fn(&C) -> usize + Copy + Send + Sync + 'static,
{
    let build = meta.exact;
    create_skip_null_rule_with_value(
        move |c: &C| size(c) == expected,
        move |id, c: &C| build(id, expected, size(c)),
    )
}

pub(crate) fn size_range<C, F>(
    min: usize,
    max: usize,
    size: F,
    meta: &SizeMetadata,
) -> Result<Rule<C>, ConfigError>
where
    C: ?Sized + 'static,
    F: Fn(&C) -> usize + Copy + Send + Sync + 'static,
{
    if min > max {
        return Err(ConfigError::invalid_range(min, max));
    }
    let build = meta.range;
    Ok(create_skip_null_rule_with_value(
        move |c: &C| (min..=max).contains(&size(c)),
        move |id, c: &C| build(id, min, max, size(c)),
    ))
}
