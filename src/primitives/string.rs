//! String rules. Values are `str`; lengths are counted in characters of
//! the trimmed string.
//!
//! Every rule except [`not_blank`] skips blank input as well as absent
//! input: presence is [`not_blank`]'s job.

use crate::error::{ConfigError, Identifier, Metadata};
use crate::metadata::string as meta;
use crate::rule::{create_rule, create_skip_null_rule, create_skip_null_rule_with_value, Rule};

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

fn trimmed_len(s: &str) -> usize {
    s.trim().chars().count()
}

/// Skip absent or blank strings, check the rest.
fn text_rule<P, M>(predicate: P, metadata: M) -> Rule<str>
where
    P: Fn(&str) -> bool + Send + Sync + 'static,
    M: Fn(&Identifier) -> Metadata + Send + Sync + 'static,
{
    create_skip_null_rule(move |s: &str| is_blank(s) || predicate(s), metadata)
}

/// Like [`text_rule`], with the trimmed length handed to the metadata.
fn length_rule<P, M>(predicate: P, metadata: M) -> Rule<str>
where
    P: Fn(usize) -> bool + Send + Sync + 'static,
    M: Fn(&Identifier, usize) -> Metadata + Send + Sync + 'static,
{
    create_skip_null_rule_with_value(
        move |s: &str| is_blank(s) || predicate(trimmed_len(s)),
        move |id, s: &str| metadata(id, trimmed_len(s)),
    )
}

/// Fails on absent, empty or all-whitespace strings.
///
/// # Example
/// ```
/// use fluent_rules::prelude::*;
///
/// let rule = string::not_blank();
/// assert!(!rule.is_satisfied_by("   "));
/// assert!(rule.is_satisfied_by(" x "));
/// ```
pub fn not_blank() -> Rule<str> {
    create_rule(
        |value: Option<&str>| value.is_some_and(|s| !is_blank(s)),
        meta::not_blank,
    )
}

/// Trimmed length must be at least `min`.
///
/// # Example
/// ```
/// use fluent_rules::prelude::*;
///
/// let rule = string::min_length(3);
/// assert!(rule.is_satisfied_by("abc"));
/// assert!(!rule.is_satisfied_by("  ab  "));
/// ```
pub fn min_length(min: usize) -> Rule<str> {
    length_rule(move |len| len >= min, move |id, actual| meta::min_length(id, min, actual))
}

/// Trimmed length must be at most `max`.
pub fn max_length(max: usize) -> Rule<str> {
    length_rule(move |len| len <= max, move |id, actual| meta::max_length(id, max, actual))
}

/// Trimmed length must be exactly `length`.
pub fn exact_length(length: usize) -> Rule<str> {
    length_rule(
        move |len| len == length,
        move |id, actual| meta::exact_length(id, length, actual),
    )
}

/// Trimmed length must lie in `min..=max`.
pub fn length_between(min: usize, max: usize) -> Result<Rule<str>, ConfigError> {
    if min > max {
        return Err(ConfigError::invalid_range(min, max));
    }
    Ok(length_rule(
        move |len| (min..=max).contains(&len),
        move |id, actual| meta::length_between(id, min, max, actual),
    ))
}

/// The whole string must match `pattern`.
///
/// Requires the `regex` feature.
///
/// # Example
/// ```
/// use fluent_rules::prelude::*;
///
/// let rule = string::matches(r"[a-z]+\d").unwrap();
/// assert!(rule.is_satisfied_by("abc1"));
/// assert!(!rule.is_satisfied_by("abc1x"));
/// assert!(string::matches("(").is_err());
/// ```
#[cfg(feature = "regex")]
pub fn matches(pattern: &str) -> Result<Rule<str>, ConfigError> {
    let re = regex_lite::Regex::new(&format!("^(?:{})$", pattern)).map_err(|e| {
        let err = ConfigError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        };
        tracing::debug!(error = %err, "rejected rule configuration");
        err
    })?;
    let pattern = pattern.to_string();
    Ok(text_rule(
        move |s| re.is_match(s),
        move |id| meta::pattern(id, &pattern),
    ))
}

fn collect_allowed<I, S>(allowed: I) -> Result<Vec<String>, ConfigError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let allowed: Vec<String> = allowed.into_iter().map(Into::into).collect();
    if allowed.is_empty() {
        return Err(ConfigError::empty_reference("allowed values"));
    }
    Ok(allowed)
}

/// String must be one of `allowed` (case-sensitive).
pub fn is_in<I, S>(allowed: I) -> Result<Rule<str>, ConfigError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let allowed = collect_allowed(allowed)?;
    let shown = allowed.clone();
    Ok(text_rule(
        move |s| allowed.iter().any(|a| a == s),
        move |id| meta::is_in(id, &shown, false),
    ))
}

/// String must be one of `allowed`, ignoring case.
///
/// # Example
/// ```
/// use fluent_rules::prelude::*;
///
/// let rule = string::is_in_ignore_case(["Red", "Green"]).unwrap();
/// assert!(rule.is_satisfied_by("GREEN"));
/// assert!(!rule.is_satisfied_by("blue"));
/// ```
pub fn is_in_ignore_case<I, S>(allowed: I) -> Result<Rule<str>, ConfigError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let shown = collect_allowed(allowed)?;
    let folded: Vec<String> = shown.iter().map(|a| a.to_lowercase()).collect();
    Ok(text_rule(
        move |s| {
            let s = s.to_lowercase();
            folded.iter().any(|a| *a == s)
        },
        move |id| meta::is_in(id, &shown, true),
    ))
}

pub fn starts_with(prefix: impl Into<String>) -> Rule<str> {
    let prefix = prefix.into();
    let shown = prefix.clone();
    text_rule(
        move |s| s.starts_with(prefix.as_str()),
        move |id| meta::starts_with(id, &shown),
    )
}

pub fn ends_with(suffix: impl Into<String>) -> Rule<str> {
    let suffix = suffix.into();
    let shown = suffix.clone();
    text_rule(
        move |s| s.ends_with(suffix.as_str()),
        move |id| meta::ends_with(id, &shown),
    )
}

pub fn contains(substring: impl Into<String>) -> Rule<str> {
    let substring = substring.into();
    let shown = substring.clone();
    text_rule(
        move |s| s.contains(substring.as_str()),
        move |id| meta::contains(id, &shown),
    )
}

/// ASCII digits only.
pub fn is_numeric() -> Rule<str> {
    text_rule(|s| s.chars().all(|c| c.is_ascii_digit()), meta::numeric)
}

/// ASCII letters and digits only.
pub fn is_alphanumeric() -> Rule<str> {
    text_rule(|s| s.chars().all(|c| c.is_ascii_alphanumeric()), meta::alphanumeric)
}

pub fn is_upper_case() -> Rule<str> {
    text_rule(|s| s == s.to_uppercase(), meta::upper_case)
}

pub fn is_lower_case() -> Rule<str> {
    text_rule(|s| s == s.to_lowercase(), meta::lower_case)
}

pub fn no_whitespace() -> Rule<str> {
    text_rule(|s| !s.chars().any(char::is_whitespace), meta::no_whitespace)
}

pub fn no_leading_whitespace() -> Rule<str> {
    text_rule(
        |s| !s.starts_with(char::is_whitespace),
        meta::no_leading_whitespace,
    )
}

pub fn no_trailing_whitespace() -> Rule<str> {
    text_rule(
        |s| !s.ends_with(char::is_whitespace),
        meta::no_trailing_whitespace,
    )
}

fn has_whitespace_run(s: &str) -> bool {
    let mut previous = false;
    for c in s.chars() {
        let current = c.is_whitespace();
        if previous && current {
            return true;
        }
        previous = current;
    }
    false
}

/// No two whitespace characters in a row anywhere in the string.
pub fn no_consecutive_whitespace() -> Rule<str> {
    text_rule(|s| !has_whitespace_run(s), meta::no_consecutive_whitespace)
}

/// No leading or trailing whitespace.
pub fn is_trimmed() -> Rule<str> {
    text_rule(|s| s == s.trim(), meta::trimmed)
}

/// Trimmed, with words separated by exactly one space.
///
/// # Example
/// ```
/// use fluent_rules::prelude::*;
///
/// let rule = string::proper_spacing();
/// assert!(rule.is_satisfied_by("John Smith"));
/// assert!(!rule.is_satisfied_by("John  Smith"));
/// assert!(!rule.is_satisfied_by("John\tSmith"));
/// ```
pub fn proper_spacing() -> Rule<str> {
    text_rule(
        |s| s.split_whitespace().collect::<Vec<_>>().join(" ") == s,
        meta::proper_spacing,
    )
}
