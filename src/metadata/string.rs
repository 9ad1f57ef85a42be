use crate::error::{Identifier, Metadata, StringCode};

pub fn not_blank(identifier: &Identifier) -> Metadata {
    Metadata::new(identifier, StringCode::NotBlank, "String must not be blank")
}

pub fn min_length(identifier: &Identifier, min: usize, actual: usize) -> Metadata {
    Metadata::new(
        identifier,
        StringCode::MinLength,
        format!("String must be at least {} characters", min),
    )
    .param("min", min)
    .param("actual", actual)
}

pub fn max_length(identifier: &Identifier, max: usize, actual: usize) -> Metadata {
    Metadata::new(
        identifier,
        StringCode::MaxLength,
        format!("String must be at most {} characters", max),
    )
    .param("max", max)
    .param("actual", actual)
}

pub fn exact_length(identifier: &Identifier, length: usize, actual: usize) -> Metadata {
    Metadata::new(
        identifier,
        StringCode::ExactLength,
        format!("String must be exactly {} characters", length),
    )
    .param("length", length)
    .param("actual", actual)
}

pub fn length_between(identifier: &Identifier, min: usize, max: usize, actual: usize) -> Metadata {
    Metadata::new(
        identifier,
        StringCode::LengthBetween,
        format!("String must be between {} and {} characters", min, max),
    )
    .param("min", min)
    .param("max", max)
    .param("actual", actual)
}

pub fn pattern(identifier: &Identifier, pattern: &str) -> Metadata {
    Metadata::new(
        identifier,
        StringCode::Pattern,
        format!("String must match pattern {}", pattern),
    )
    .param("pattern", pattern)
}

pub fn is_in(identifier: &Identifier, allowed: &[String], ignore_case: bool) -> Metadata {
    let code = if ignore_case {
        StringCode::InIgnoreCase
    } else {
        StringCode::In
    };
    let list = super::join_debug(allowed);
    Metadata::new(identifier, code, format!("String must be one of: {}", list))
        .param("allowed", list)
}

pub fn starts_with(identifier: &Identifier, prefix: &str) -> Metadata {
    Metadata::new(
        identifier,
        StringCode::StartsWith,
        format!("String must start with \"{}\"", prefix),
    )
    .param("prefix", prefix)
}

pub fn ends_with(identifier: &Identifier, suffix: &str) -> Metadata {
    Metadata::new(
        identifier,
        StringCode::EndsWith,
        format!("String must end with \"{}\"", suffix),
    )
    .param("suffix", suffix)
}

pub fn contains(identifier: &Identifier, substring: &str) -> Metadata {
    Metadata::new(
        identifier,
        StringCode::Contains,
        format!("String must contain \"{}\"", substring),
    )
    .param("substring", substring)
}

pub fn numeric(identifier: &Identifier) -> Metadata {
    Metadata::new(identifier, StringCode::Numeric, "String must contain only digits")
}

pub fn alphanumeric(identifier: &Identifier) -> Metadata {
    Metadata::new(
        identifier,
        StringCode::Alphanumeric,
        "String must contain only letters and digits",
    )
}

pub fn upper_case(identifier: &Identifier) -> Metadata {
    Metadata::new(identifier, StringCode::UpperCase, "String must be upper case")
}

pub fn lower_case(identifier: &Identifier) -> Metadata {
    Metadata::new(identifier, StringCode::LowerCase, "String must be lower case")
}

pub fn no_whitespace(identifier: &Identifier) -> Metadata {
    Metadata::new(
        identifier,
        StringCode::NoWhitespace,
        "String must not contain whitespace",
    )
}

pub fn no_leading_whitespace(identifier: &Identifier) -> Metadata {
    Metadata::new(
        identifier,
        StringCode::NoLeadingWhitespace,
        "String must not start with whitespace",
    )
}

pub fn no_trailing_whitespace(identifier: &Identifier) -> Metadata {
    Metadata::new(
        identifier,
        StringCode::NoTrailingWhitespace,
        "String must not end with whitespace",
    )
}

pub fn no_consecutive_whitespace(identifier: &Identifier) -> Metadata {
    Metadata::new(
        identifier,
        StringCode::NoConsecutiveWhitespace,
        "String must not contain consecutive whitespace",
    )
}

pub fn trimmed(identifier: &Identifier) -> Metadata {
    Metadata::new(
        identifier,
        StringCode::Trimmed,
        "String must not have leading or trailing whitespace",
    )
}

pub fn proper_spacing(identifier: &Identifier) -> Metadata {
    Metadata::new(
        identifier,
        StringCode::ProperSpacing,
        "String must be trimmed and separated by single spaces",
    )
}
