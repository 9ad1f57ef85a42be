use std::fmt::Debug;

use crate::error::{Identifier, MapCode, Metadata};

pub fn not_empty(identifier: &Identifier) -> Metadata {
    Metadata::new(identifier, MapCode::NotEmpty, "Map must not be empty")
}

pub fn empty(identifier: &Identifier, actual: usize) -> Metadata {
    Metadata::new(identifier, MapCode::Empty, "Map must be empty").param("actual", actual)
}

pub fn min_size(identifier: &Identifier, min: usize, actual: usize) -> Metadata {
    Metadata::new(
        identifier,
        MapCode::MinSize,
        format!("Map must have at least {} entries", min),
    )
    .param("min", min)
    .param("actual", actual)
}

pub fn max_size(identifier: &Identifier, max: usize, actual: usize) -> Metadata {
    Metadata::new(
        identifier,
        MapCode::MaxSize,
        format!("Map must have at most {} entries", max),
    )
    .param("max", max)
    .param("actual", actual)
}

pub fn exact_size(identifier: &Identifier, size: usize, actual: usize) -> Metadata {
    Metadata::new(
        identifier,
        MapCode::ExactSize,
        format!("Map must have exactly {} entries", size),
    )
    .param("size", size)
    .param("actual", actual)
}

pub fn size_range(identifier: &Identifier, min: usize, max: usize, actual: usize) -> Metadata {
    Metadata::new(
        identifier,
        MapCode::SizeRange,
        format!("Map must have between {} and {} entries", min, max),
    )
    .param("min", min)
    .param("max", max)
    .param("actual", actual)
}

pub fn contains_key(identifier: &Identifier, key: &dyn Debug) -> Metadata {
    Metadata::new(
        identifier,
        MapCode::ContainsKey,
        format!("Map must contain key {:?}", key),
    )
    .param("key", format!("{:?}", key))
}

pub fn does_not_contain_key(identifier: &Identifier, key: &dyn Debug) -> Metadata {
    Metadata::new(
        identifier,
        MapCode::DoesNotContainKey,
        format!("Map must not contain key {:?}", key),
    )
    .param("key", format!("{:?}", key))
}

pub fn contains_value(identifier: &Identifier, value: &dyn Debug) -> Metadata {
    Metadata::new(
        identifier,
        MapCode::ContainsValue,
        format!("Map must contain value {:?}", value),
    )
    .param("value", format!("{:?}", value))
}

pub fn does_not_contain_value(identifier: &Identifier, value: &dyn Debug) -> Metadata {
    Metadata::new(
        identifier,
        MapCode::DoesNotContainValue,
        format!("Map must not contain value {:?}", value),
    )
    .param("value", format!("{:?}", value))
}

/// Metadata for the key/value/entry match rules. `subject` is `"key"`,
/// `"value"` or `"entry"`.
pub fn matching(
    identifier: &Identifier,
    code: MapCode,
    subject: &str,
    description: &str,
) -> Metadata {
    let message = match code {
        MapCode::AnyKeyMatches | MapCode::AnyValueMatches | MapCode::AnyEntryMatches => {
            format!("At least one {} must {}", subject, description)
        }
        MapCode::NoKeyMatches | MapCode::NoValueMatches | MapCode::NoEntryMatches => {
            format!("No {} may {}", subject, description)
        }
        _ => format!("Every {} must {}", subject, description),
    };
    Metadata::new(identifier, code, message).param("description", description)
}

pub fn contains_all_keys<K: Debug>(identifier: &Identifier, keys: &[K]) -> Metadata {
    let list = super::join_debug(keys);
    Metadata::new(
        identifier,
        MapCode::ContainsAllKeys,
        format!("Map must contain all keys: {}", list),
    )
    .param("keys", list)
}
