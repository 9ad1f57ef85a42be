use std::fmt::Display;

use crate::error::{Identifier, Metadata, TimeCode};

pub fn between(identifier: &Identifier, min: &dyn Display, max: &dyn Display) -> Metadata {
    Metadata::new(
        identifier,
        TimeCode::Between,
        format!("Time must be between {} and {}", min, max),
    )
    .param("min", min)
    .param("max", max)
}

pub fn before(identifier: &Identifier, reference: &dyn Display) -> Metadata {
    Metadata::new(
        identifier,
        TimeCode::Before,
        format!("Time must be before {}", reference),
    )
    .param("reference", reference)
}

pub fn after(identifier: &Identifier, reference: &dyn Display) -> Metadata {
    Metadata::new(
        identifier,
        TimeCode::After,
        format!("Time must be after {}", reference),
    )
    .param("reference", reference)
}

pub fn before_or_equal(identifier: &Identifier, reference: &dyn Display) -> Metadata {
    Metadata::new(
        identifier,
        TimeCode::BeforeOrEqual,
        format!("Time must be at or before {}", reference),
    )
    .param("reference", reference)
}

pub fn after_or_equal(identifier: &Identifier, reference: &dyn Display) -> Metadata {
    Metadata::new(
        identifier,
        TimeCode::AfterOrEqual,
        format!("Time must be at or after {}", reference),
    )
    .param("reference", reference)
}

pub fn equal_to(identifier: &Identifier, reference: &dyn Display) -> Metadata {
    Metadata::new(
        identifier,
        TimeCode::EqualTo,
        format!("Time must be {}", reference),
    )
    .param("reference", reference)
}

/// Metadata for the fixed day periods (morning, business hours, ...).
pub fn period(
    identifier: &Identifier,
    code: TimeCode,
    name: &str,
    start: &dyn Display,
    end: &dyn Display,
) -> Metadata {
    Metadata::new(
        identifier,
        code,
        format!("Time must be in the {} ({} - {})", name, start, end),
    )
    .param("start", start)
    .param("end", end)
}

/// Metadata for hour/minute/second sub-range rules. `unit` is `"hour"`,
/// `"minute"` or `"second"`.
pub fn component_between(
    identifier: &Identifier,
    code: TimeCode,
    unit: &str,
    min: u32,
    max: u32,
) -> Metadata {
    Metadata::new(
        identifier,
        code,
        format!("Time {} must be between {} and {}", unit, min, max),
    )
    .param("min", min)
    .param("max", max)
}

pub fn in_timezone(identifier: &Identifier, zone: &dyn Display) -> Metadata {
    Metadata::new(
        identifier,
        TimeCode::InTimezone,
        format!("Time must be in timezone {}", zone),
    )
    .param("zone", zone)
}
