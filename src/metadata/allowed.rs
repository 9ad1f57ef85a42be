use crate::error::{AllowedCode, Identifier, Metadata};

pub fn in_set(identifier: &Identifier, allowed: &str) -> Metadata {
    Metadata::new(
        identifier,
        AllowedCode::InSet,
        format!("Value must be one of: {}", allowed),
    )
    .param("allowed", allowed)
}

pub fn one_of(identifier: &Identifier, allowed: &str) -> Metadata {
    Metadata::new(
        identifier,
        AllowedCode::OneOf,
        format!("Value must be one of: {}", allowed),
    )
    .param("allowed", allowed)
}

pub fn not_in_set(identifier: &Identifier, disallowed: &str) -> Metadata {
    Metadata::new(
        identifier,
        AllowedCode::NotInSet,
        format!("Value must not be one of: {}", disallowed),
    )
    .param("disallowed", disallowed)
}

pub fn none_of(identifier: &Identifier, disallowed: &str) -> Metadata {
    Metadata::new(
        identifier,
        AllowedCode::NoneOf,
        format!("Value must not be one of: {}", disallowed),
    )
    .param("disallowed", disallowed)
}

pub fn in_enum(identifier: &Identifier, enum_name: &str, constants: &[&str]) -> Metadata {
    let list = constants.join(", ");
    Metadata::new(
        identifier,
        AllowedCode::InEnum,
        format!("Value must be a constant of {}: {}", enum_name, list),
    )
    .param("enum", enum_name)
    .param("constants", list)
}
