//! Internationalization (i18n) support for failure messages.
//!
//! Provides the [`MessageResolver`] trait and built-in resolvers that
//! re-render a [`Failure`] message from its [`FailureCode::key()`] and the
//! parameters carried by its [`Metadata`](crate::error::Metadata).
//!
//! # Example
//!
//! ```
//! use fluent_rules::prelude::*;
//! use fluent_rules::i18n::{MapResolver, translate_result};
//! use std::collections::HashMap;
//!
//! let mut translations = HashMap::new();
//! translations.insert("string.min_length".to_string(),
//!     "Debe tener al menos {min} caracteres".to_string());
//! let resolver = MapResolver::new(translations);
//!
//! let result = string::min_length(5).check("ab");
//! let translated = translate_result(&result, &resolver);
//! assert_eq!(translated.failures[0].message(), "Debe tener al menos 5 caracteres");
//! ```
//!
//! [`FailureCode::key()`]: crate::error::FailureCode::key

use std::collections::HashMap;

use crate::error::{Failure, ValidationResult};

/// Resolves a failure code key to a message template.
///
/// Templates can use `{param}` placeholders that are filled from the
/// failure's metadata parameters. Returning `None` keeps the original
/// message.
pub trait MessageResolver {
    fn resolve(&self, key: &str) -> Option<String>;
}

/// [`MessageResolver`] backed by a `HashMap<String, String>`.
pub struct MapResolver {
    map: HashMap<String, String>,
}

impl MapResolver {
    pub fn new(map: HashMap<String, String>) -> Self {
        Self { map }
    }

    fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    /// Add or replace a single template.
    pub fn with(mut self, key: impl Into<String>, template: impl Into<String>) -> Self {
        self.map.insert(key.into(), template.into());
        self
    }
}

impl MessageResolver for MapResolver {
    fn resolve(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }
}

/// A [`MessageResolver`] that delegates to a closure.
///
/// # Example
/// ```
/// use fluent_rules::i18n::FnResolver;
///
/// let resolver = FnResolver::new(|key| match key {
///     "object.not_null" => Some("Required".into()),
///     _ => None,
/// });
/// ```
pub struct FnResolver<F: Fn(&str) -> Option<String>> {
    f: F,
}

impl<F: Fn(&str) -> Option<String>> FnResolver<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F: Fn(&str) -> Option<String>> MessageResolver for FnResolver<F> {
    fn resolve(&self, key: &str) -> Option<String> {
        (self.f)(key)
    }
}

fn apply_params(template: &str, params: &[(&'static str, String)]) -> String {
    params.iter().fold(template.to_string(), |message, (key, value)| {
        message.replace(&format!("{{{}}}", key), value)
    })
}

/// Translate a single failure. Identifier, code and parameters are kept.
pub fn translate_failure(failure: &Failure, resolver: &dyn MessageResolver) -> Failure {
    let mut translated = failure.clone();
    if let Some(template) = resolver.resolve(failure.code().key()) {
        translated.metadata.message = apply_params(&template, &failure.metadata.params);
    }
    translated
}

/// Translate every failure of a result.
pub fn translate_result(
    result: &ValidationResult,
    resolver: &dyn MessageResolver,
) -> ValidationResult {
    ValidationResult {
        failures: result
            .failures
            .iter()
            .map(|f| translate_failure(f, resolver))
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Built-in translation sets
// ---------------------------------------------------------------------------

/// English templates for every failure code.
///
/// These render the same text the rules produce by default, which makes
/// this set a convenient base for overriding single keys with
/// [`MapResolver::with`].
pub fn english() -> MapResolver {
    MapResolver::from_pairs(&[
        ("object.not_null", "Value must not be null"),
        ("object.must_be_null", "Value must be null"),
        ("object.equal_to", "Value must be equal to {reference}"),
        ("object.not_equal_to", "Value must not be equal to {reference}"),
        ("object.same_instance", "Value must be the same instance as the reference"),
        ("object.not_same_instance", "Value must not be the same instance as the reference"),
        ("object.satisfies", "Value must {description}"),
        ("object.instance_of", "Value must be of type {type}"),
        ("object.not_instance_of", "Value must not be of type {type}"),
        ("string.not_blank", "String must not be blank"),
        ("string.min_length", "String must be at least {min} characters"),
        ("string.max_length", "String must be at most {max} characters"),
        ("string.exact_length", "String must be exactly {length} characters"),
        ("string.length_between", "String must be between {min} and {max} characters"),
        ("string.pattern", "String must match pattern {pattern}"),
        ("string.in", "String must be one of: {allowed}"),
        ("string.in_ignore_case", "String must be one of: {allowed}"),
        ("string.starts_with", "String must start with \"{prefix}\""),
        ("string.ends_with", "String must end with \"{suffix}\""),
        ("string.contains", "String must contain \"{substring}\""),
        ("string.numeric", "String must contain only digits"),
        ("string.alphanumeric", "String must contain only letters and digits"),
        ("string.upper_case", "String must be upper case"),
        ("string.lower_case", "String must be lower case"),
        ("string.no_whitespace", "String must not contain whitespace"),
        ("string.no_leading_whitespace", "String must not start with whitespace"),
        ("string.no_trailing_whitespace", "String must not end with whitespace"),
        ("string.no_consecutive_whitespace", "String must not contain consecutive whitespace"),
        ("string.trimmed", "String must not have leading or trailing whitespace"),
        ("string.proper_spacing", "String must be trimmed and separated by single spaces"),
        ("number.min", "Number must be at least {min}"),
        ("number.max", "Number must be at most {max}"),
        ("number.range", "Number must be between {min} and {max}"),
        ("number.positive", "Number must be positive"),
        ("number.negative", "Number must be negative"),
        ("number.non_zero", "Number must not be zero"),
        ("number.non_negative", "Number must be non-negative"),
        ("number.non_positive", "Number must be non-positive"),
        ("collection.not_empty", "Collection must not be empty"),
        ("collection.empty", "Collection must be empty"),
        ("collection.min_size", "Collection must have at least {min} elements"),
        ("collection.max_size", "Collection must have at most {max} elements"),
        ("collection.exact_size", "Collection must have exactly {size} elements"),
        ("collection.size_range", "Collection must have between {min} and {max} elements"),
        ("collection.all_match", "All elements must {description}"),
        ("collection.any_match", "At least one element must {description}"),
        ("collection.none_match", "No element may {description}"),
        ("collection.no_duplicates", "Collection must not contain duplicate elements"),
        ("collection.contains", "Collection must contain {element}"),
        ("collection.does_not_contain", "Collection must not contain {element}"),
        ("collection.contains_all", "Collection must contain all of: {elements}"),
        ("collection.contains_none", "Collection must contain none of: {elements}"),
        ("map.not_empty", "Map must not be empty"),
        ("map.empty", "Map must be empty"),
        ("map.min_size", "Map must have at least {min} entries"),
        ("map.max_size", "Map must have at most {max} entries"),
        ("map.exact_size", "Map must have exactly {size} entries"),
        ("map.size_range", "Map must have between {min} and {max} entries"),
        ("map.contains_key", "Map must contain key {key}"),
        ("map.does_not_contain_key", "Map must not contain key {key}"),
        ("map.contains_value", "Map must contain value {value}"),
        ("map.does_not_contain_value", "Map must not contain value {value}"),
        ("map.all_keys_match", "Every key must {description}"),
        ("map.any_key_matches", "At least one key must {description}"),
        ("map.no_key_matches", "No key may {description}"),
        ("map.all_values_match", "Every value must {description}"),
        ("map.any_value_matches", "At least one value must {description}"),
        ("map.no_value_matches", "No value may {description}"),
        ("map.all_entries_match", "Every entry must {description}"),
        ("map.any_entry_matches", "At least one entry must {description}"),
        ("map.no_entry_matches", "No entry may {description}"),
        ("map.contains_all_keys", "Map must contain all keys: {keys}"),
        ("date.between", "Date must be between {min} and {max}"),
        ("date.before", "Date must be before {reference}"),
        ("date.after", "Date must be after {reference}"),
        ("date.before_or_equal", "Date must be on or before {reference}"),
        ("date.after_or_equal", "Date must be on or after {reference}"),
        ("date.equal_to", "Date must be {reference}"),
        ("date.future", "Date must be in the future"),
        ("date.past", "Date must be in the past"),
        ("date.present_or_future", "Date must be in the present or the future"),
        ("date.present_or_past", "Date must be in the present or the past"),
        ("date.weekday", "Date must fall on a weekday"),
        ("date.weekend", "Date must fall on a weekend"),
        ("date.in_month", "Date must be in {month}"),
        ("date.in_year", "Date must be in the year {year}"),
        ("time.between", "Time must be between {min} and {max}"),
        ("time.before", "Time must be before {reference}"),
        ("time.after", "Time must be after {reference}"),
        ("time.before_or_equal", "Time must be at or before {reference}"),
        ("time.after_or_equal", "Time must be at or after {reference}"),
        ("time.equal_to", "Time must be {reference}"),
        ("time.morning", "Time must be in the morning ({start} - {end})"),
        ("time.afternoon", "Time must be in the afternoon ({start} - {end})"),
        ("time.evening", "Time must be in the evening ({start} - {end})"),
        ("time.business_hours", "Time must be in the business hours ({start} - {end})"),
        ("time.lunch_hour", "Time must be in the lunch hour ({start} - {end})"),
        ("time.hours_between", "Time hour must be between {min} and {max}"),
        ("time.minutes_between", "Time minute must be between {min} and {max}"),
        ("time.seconds_between", "Time second must be between {min} and {max}"),
        ("time.in_timezone", "Time must be in timezone {zone}"),
        ("allowed.in_set", "Value must be one of: {allowed}"),
        ("allowed.one_of", "Value must be one of: {allowed}"),
        ("allowed.not_in_set", "Value must not be one of: {disallowed}"),
        ("allowed.none_of", "Value must not be one of: {disallowed}"),
        ("allowed.in_enum", "Value must be a constant of {enum}: {constants}"),
    ])
}

/// German templates for the common failure codes.
pub fn german() -> MapResolver {
    MapResolver::from_pairs(&[
        ("object.not_null", "Wert darf nicht leer sein"),
        ("object.must_be_null", "Wert muss leer sein"),
        ("object.equal_to", "Wert muss gleich {reference} sein"),
        ("object.not_equal_to", "Wert darf nicht gleich {reference} sein"),
        ("object.satisfies", "Wert muss folgende Bedingung erfüllen: {description}"),
        ("string.not_blank", "Text darf nicht leer sein"),
        ("string.min_length", "Text muss mindestens {min} Zeichen lang sein"),
        ("string.max_length", "Text darf höchstens {max} Zeichen lang sein"),
        ("string.exact_length", "Text muss genau {length} Zeichen lang sein"),
        ("string.length_between", "Textlänge muss zwischen {min} und {max} liegen"),
        ("string.pattern", "Text muss dem Muster {pattern} entsprechen"),
        ("string.in", "Text muss einer von {allowed} sein"),
        ("string.numeric", "Text darf nur Ziffern enthalten"),
        ("string.no_whitespace", "Text darf keine Leerzeichen enthalten"),
        ("number.min", "Zahl muss mindestens {min} sein"),
        ("number.max", "Zahl darf höchstens {max} sein"),
        ("number.range", "Zahl muss zwischen {min} und {max} liegen"),
        ("number.positive", "Zahl muss positiv sein"),
        ("number.negative", "Zahl muss negativ sein"),
        ("collection.not_empty", "Sammlung darf nicht leer sein"),
        ("collection.min_size", "Sammlung muss mindestens {min} Elemente enthalten"),
        ("collection.max_size", "Sammlung darf höchstens {max} Elemente enthalten"),
        ("collection.size_range", "Größe der Sammlung muss zwischen {min} und {max} liegen"),
        ("collection.no_duplicates", "Sammlung darf keine Duplikate enthalten"),
        ("map.not_empty", "Zuordnung darf nicht leer sein"),
        ("map.contains_key", "Zuordnung muss den Schlüssel {key} enthalten"),
        ("date.before", "Datum muss vor {reference} liegen"),
        ("date.after", "Datum muss nach {reference} liegen"),
        ("date.future", "Datum muss in der Zukunft liegen"),
        ("date.past", "Datum muss in der Vergangenheit liegen"),
        ("date.weekday", "Datum muss auf einen Werktag fallen"),
        ("date.weekend", "Datum muss auf ein Wochenende fallen"),
        (
            "time.business_hours",
            "Uhrzeit muss innerhalb der Geschäftszeiten liegen ({start} - {end})",
        ),
        ("time.in_timezone", "Uhrzeit muss in der Zeitzone {zone} liegen"),
        ("allowed.one_of", "Wert muss einer von {allowed} sein"),
        ("allowed.none_of", "Wert darf keiner von {disallowed} sein"),
    ])
}

/// Spanish templates for the common failure codes.
pub fn spanish() -> MapResolver {
    MapResolver::from_pairs(&[
        ("object.not_null", "El valor no debe ser nulo"),
        ("object.must_be_null", "El valor debe ser nulo"),
        ("object.equal_to", "El valor debe ser igual a {reference}"),
        ("object.not_equal_to", "El valor no debe ser igual a {reference}"),
        ("object.satisfies", "El valor debe cumplir: {description}"),
        ("string.not_blank", "El texto no debe estar vacío"),
        ("string.min_length", "El texto debe tener al menos {min} caracteres"),
        ("string.max_length", "El texto debe tener como máximo {max} caracteres"),
        ("string.exact_length", "El texto debe tener exactamente {length} caracteres"),
        ("string.length_between", "La longitud del texto debe estar entre {min} y {max}"),
        ("string.pattern", "El texto debe coincidir con el patrón {pattern}"),
        ("string.in", "El texto debe ser uno de {allowed}"),
        ("string.numeric", "El texto solo debe contener dígitos"),
        ("string.no_whitespace", "El texto no debe contener espacios"),
        ("number.min", "El número debe ser al menos {min}"),
        ("number.max", "El número debe ser como máximo {max}"),
        ("number.range", "El número debe estar entre {min} y {max}"),
        ("number.positive", "El número debe ser positivo"),
        ("number.negative", "El número debe ser negativo"),
        ("collection.not_empty", "La colección no debe estar vacía"),
        ("collection.min_size", "La colección debe contener al menos {min} elementos"),
        ("collection.max_size", "La colección debe contener como máximo {max} elementos"),
        ("collection.size_range", "El tamaño de la colección debe estar entre {min} y {max}"),
        ("collection.no_duplicates", "La colección no debe contener duplicados"),
        ("map.not_empty", "El mapa no debe estar vacío"),
        ("map.contains_key", "El mapa debe contener la clave {key}"),
        ("date.before", "La fecha debe ser anterior a {reference}"),
        ("date.after", "La fecha debe ser posterior a {reference}"),
        ("date.future", "La fecha debe estar en el futuro"),
        ("date.past", "La fecha debe estar en el pasado"),
        ("date.weekday", "La fecha debe caer en un día laborable"),
        ("date.weekend", "La fecha debe caer en fin de semana"),
        ("time.business_hours", "La hora debe estar dentro del horario laboral ({start} - {end})"),
        ("time.in_timezone", "La hora debe estar en la zona horaria {zone}"),
        ("allowed.one_of", "El valor debe ser uno de {allowed}"),
        ("allowed.none_of", "El valor no debe ser ninguno de {disallowed}"),
    ])
}
