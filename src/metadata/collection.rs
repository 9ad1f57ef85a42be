use std::fmt::Debug;

use crate::error::{CollectionCode, Identifier, Metadata};

pub fn not_empty(identifier: &Identifier) -> Metadata {
    Metadata::new(
        identifier,
        CollectionCode::NotEmpty,
        "Collection must not be empty",
    )
}

pub fn empty(identifier: &Identifier, actual: usize) -> Metadata {
    Metadata::new(identifier, CollectionCode::Empty, "Collection must be empty")
        .param("actual", actual)
}

pub fn min_size(identifier: &Identifier, min: usize, actual: usize) -> Metadata {
    Metadata::new(
        identifier,
        CollectionCode::MinSize,
        format!("Collection must have at least {} elements", min),
    )
    .param("min", min)
    .param("actual", actual)
}

pub fn max_size(identifier: &Identifier, max: usize, actual: usize) -> Metadata {
    Metadata::new(
        identifier,
        CollectionCode::MaxSize,
        format!("Collection must have at most {} elements", max),
    )
    .param("max", max)
    .param("actual", actual)
}

pub fn exact_size(identifier: &Identifier, size: usize, actual: usize) -> Metadata {
    Metadata::new(
        identifier,
        CollectionCode::ExactSize,
        format!("Collection must have exactly {} elements", size),
    )
    .param("size", size)
    .param("actual", actual)
}

pub fn size_range(identifier: &Identifier, min: usize, max: usize, actual: usize) -> Metadata {
    Metadata::new(
        identifier,
        CollectionCode::SizeRange,
        format!("Collection must have between {} and {} elements", min, max),
    )
    .param("min", min)
    .param("max", max)
    .param("actual", actual)
}

pub fn all_match(identifier: &Identifier, description: &str) -> Metadata {
    Metadata::new(
        identifier,
        CollectionCode::AllMatch,
        format!("All elements must {}", description),
    )
    .param("description", description)
}

pub fn any_match(identifier: &Identifier, description: &str) -> Metadata {
    Metadata::new(
        identifier,
        CollectionCode::AnyMatch,
        format!("At least one element must {}", description),
    )
    .param("description", description)
}

pub fn none_match(identifier: &Identifier, description: &str) -> Metadata {
    Metadata::new(
        identifier,
        CollectionCode::NoneMatch,
        format!("No element may {}", description),
    )
    .param("description", description)
}

pub fn no_duplicates(identifier: &Identifier) -> Metadata {
    Metadata::new(
        identifier,
        CollectionCode::NoDuplicates,
        "Collection must not contain duplicate elements",
    )
}

pub fn contains(identifier: &Identifier, element: &dyn Debug) -> Metadata {
    Metadata::new(
        identifier,
        CollectionCode::Contains,
        format!("Collection must contain {:?}", element),
    )
    .param("element", format!("{:?}", element))
}

pub fn does_not_contain(identifier: &Identifier, element: &dyn Debug) -> Metadata {
    Metadata::new(
        identifier,
        CollectionCode::DoesNotContain,
        format!("Collection must not contain {:?}", element),
    )
    .param("element", format!("{:?}", element))
}

pub fn contains_all<T: Debug>(identifier: &Identifier, elements: &[T]) -> Metadata {
    let list = super::join_debug(elements);
    Metadata::new(
        identifier,
        CollectionCode::ContainsAll,
        format!("Collection must contain all of: {}", list),
    )
    .param("elements", list)
}

pub fn contains_none<T: Debug>(identifier: &Identifier, elements: &[T]) -> Metadata {
    let list = super::join_debug(elements);
    Metadata::new(
        identifier,
        CollectionCode::ContainsNone,
        format!("Collection must contain none of: {}", list),
    )
    .param("elements", list)
}
