use std::fmt::Display;

use crate::error::{Identifier, Metadata, NumberCode};

pub fn min(identifier: &Identifier, min: &dyn Display) -> Metadata {
    Metadata::new(
        identifier,
        NumberCode::Min,
        format!("Number must be at least {}", min),
    )
    .param("min", min)
}

pub fn max(identifier: &Identifier, max: &dyn Display) -> Metadata {
    Metadata::new(
        identifier,
        NumberCode::Max,
        format!("Number must be at most {}", max),
    )
    .param("max", max)
}

pub fn range(identifier: &Identifier, min: &dyn Display, max: &dyn Display) -> Metadata {
    Metadata::new(
        identifier,
        NumberCode::Range,
        format!("Number must be between {} and {}", min, max),
    )
    .param("min", min)
    .param("max", max)
}

pub fn positive(identifier: &Identifier) -> Metadata {
    Metadata::new(identifier, NumberCode::Positive, "Number must be positive")
}

pub fn negative(identifier: &Identifier) -> Metadata {
    Metadata::new(identifier, NumberCode::Negative, "Number must be negative")
}

pub fn non_zero(identifier: &Identifier) -> Metadata {
    Metadata::new(identifier, NumberCode::NonZero, "Number must not be zero")
}

pub fn non_negative(identifier: &Identifier) -> Metadata {
    Metadata::new(
        identifier,
        NumberCode::NonNegative,
        "Number must be non-negative",
    )
}

pub fn non_positive(identifier: &Identifier) -> Metadata {
    Metadata::new(
        identifier,
        NumberCode::NonPositive,
        "Number must be non-positive",
    )
}
