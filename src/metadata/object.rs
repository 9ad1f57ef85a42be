use std::fmt::Debug;

use crate::error::{Identifier, Metadata, ObjectCode};

pub fn not_null(identifier: &Identifier) -> Metadata {
    Metadata::new(identifier, ObjectCode::NotNull, "Value must not be null")
}

pub fn must_be_null(identifier: &Identifier) -> Metadata {
    Metadata::new(identifier, ObjectCode::MustBeNull, "Value must be null")
}

pub fn equal_to(identifier: &Identifier, reference: &dyn Debug) -> Metadata {
    Metadata::new(
        identifier,
        ObjectCode::EqualTo,
        format!("Value must be equal to {:?}", reference),
    )
    .param("reference", format!("{:?}", reference))
}

pub fn not_equal_to(identifier: &Identifier, reference: &dyn Debug) -> Metadata {
    Metadata::new(
        identifier,
        ObjectCode::NotEqualTo,
        format!("Value must not be equal to {:?}", reference),
    )
    .param("reference", format!("{:?}", reference))
}

pub fn same_instance(identifier: &Identifier, type_name: &str) -> Metadata {
    Metadata::new(
        identifier,
        ObjectCode::SameInstance,
        "Value must be the same instance as the reference",
    )
    .param("type", type_name)
}

pub fn not_same_instance(identifier: &Identifier, type_name: &str) -> Metadata {
    Metadata::new(
        identifier,
        ObjectCode::NotSameInstance,
        "Value must not be the same instance as the reference",
    )
    .param("type", type_name)
}

pub fn satisfies(identifier: &Identifier, description: &str) -> Metadata {
    Metadata::new(
        identifier,
        ObjectCode::Satisfies,
        format!("Value must {}", description),
    )
    .param("description", description)
}

pub fn instance_of(identifier: &Identifier, type_name: &str) -> Metadata {
    Metadata::new(
        identifier,
        ObjectCode::InstanceOf,
        format!("Value must be of type {}", type_name),
    )
    .param("type", type_name)
}

pub fn not_instance_of(identifier: &Identifier, type_name: &str) -> Metadata {
    Metadata::new(
        identifier,
        ObjectCode::NotInstanceOf,
        format!("Value must not be of type {}", type_name),
    )
    .param("type", type_name)
}
