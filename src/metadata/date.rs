use std::fmt::{Debug, Display};

use crate::error::{DateCode, Identifier, Metadata};

pub fn between(identifier: &Identifier, min: &dyn Display, max: &dyn Display) -> Metadata {
    Metadata::new(
        identifier,
        DateCode::Between,
        format!("Date must be between {} and {}", min, max),
    )
    .param("min", min)
    .param("max", max)
}

pub fn before(identifier: &Identifier, reference: &dyn Display) -> Metadata {
    Metadata::new(
        identifier,
        DateCode::Before,
        format!("Date must be before {}", reference),
    )
    .param("reference", reference)
}

pub fn after(identifier: &Identifier, reference: &dyn Display) -> Metadata {
    Metadata::new(
        identifier,
        DateCode::After,
        format!("Date must be after {}", reference),
    )
    .param("reference", reference)
}

pub fn before_or_equal(identifier: &Identifier, reference: &dyn Display) -> Metadata {
    Metadata::new(
        identifier,
        DateCode::BeforeOrEqual,
        format!("Date must be on or before {}", reference),
    )
    .param("reference", reference)
}

pub fn after_or_equal(identifier: &Identifier, reference: &dyn Display) -> Metadata {
    Metadata::new(
        identifier,
        DateCode::AfterOrEqual,
        format!("Date must be on or after {}", reference),
    )
    .param("reference", reference)
}

pub fn equal_to(identifier: &Identifier, reference: &dyn Display) -> Metadata {
    Metadata::new(
        identifier,
        DateCode::EqualTo,
        format!("Date must be {}", reference),
    )
    .param("reference", reference)
}

pub fn future(identifier: &Identifier) -> Metadata {
    Metadata::new(identifier, DateCode::Future, "Date must be in the future")
}

pub fn past(identifier: &Identifier) -> Metadata {
    Metadata::new(identifier, DateCode::Past, "Date must be in the past")
}

pub fn present_or_future(identifier: &Identifier) -> Metadata {
    Metadata::new(
        identifier,
        DateCode::PresentOrFuture,
        "Date must be in the present or the future",
    )
}

pub fn present_or_past(identifier: &Identifier) -> Metadata {
    Metadata::new(
        identifier,
        DateCode::PresentOrPast,
        "Date must be in the present or the past",
    )
}

pub fn weekday(identifier: &Identifier) -> Metadata {
    Metadata::new(identifier, DateCode::Weekday, "Date must fall on a weekday")
}

pub fn weekend(identifier: &Identifier) -> Metadata {
    Metadata::new(identifier, DateCode::Weekend, "Date must fall on a weekend")
}

pub fn in_month(identifier: &Identifier, month: &dyn Debug) -> Metadata {
    Metadata::new(
        identifier,
        DateCode::InMonth,
        format!("Date must be in {:?}", month),
    )
    .param("month", format!("{:?}", month))
}

pub fn in_year(identifier: &Identifier, year: i32) -> Metadata {
    Metadata::new(
        identifier,
        DateCode::InYear,
        format!("Date must be in the year {}", year),
    )
    .param("year", year)
}
