//! Time-of-day rules.
//!
//! Every rule compares the local time of day reported by [`HasLocalTime`],
//! except [`in_timezone`] which looks at the offset itself.

use chrono::{FixedOffset, NaiveTime, Timelike};

use super::HasLocalTime;
use crate::error::{ConfigError, TimeCode};
use crate::metadata::time as meta;
use crate::rule::{create_skip_null_rule, Rule};

fn hms(hour: u32, minute: u32, second: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, second).unwrap_or_default()
}

fn local_rule<T, P, M>(predicate: P, metadata: M) -> Rule<T>
where
    T: HasLocalTime + ?Sized + 'static,
    P: Fn(NaiveTime) -> bool + Send + Sync + 'static,
    M: Fn(&crate::error::Identifier) -> crate::error::Metadata + Send + Sync + 'static,
{
    create_skip_null_rule(move |v: &T| predicate(v.local_time()), metadata)
}

/// Time of day must lie in `min..=max`.
pub fn between<T>(min: NaiveTime, max: NaiveTime) -> Result<Rule<T>, ConfigError>
where
    T: HasLocalTime + ?Sized + 'static,
{
    if min > max {
        return Err(ConfigError::invalid_range(min, max));
    }
    Ok(local_rule(
        move |t| t >= min && t <= max,
        move |id| meta::between(id, &min, &max),
    ))
}

pub fn before<T: HasLocalTime + ?Sized + 'static>(reference: NaiveTime) -> Rule<T> {
    local_rule(move |t| t < reference, move |id| meta::before(id, &reference))
}

pub fn after<T: HasLocalTime + ?Sized + 'static>(reference: NaiveTime) -> Rule<T> {
    local_rule(move |t| t > reference, move |id| meta::after(id, &reference))
}

pub fn before_or_equal<T: HasLocalTime + ?Sized + 'static>(reference: NaiveTime) -> Rule<T> {
    local_rule(
        move |t| t <= reference,
        move |id| meta::before_or_equal(id, &reference),
    )
}

pub fn after_or_equal<T: HasLocalTime + ?Sized + 'static>(reference: NaiveTime) -> Rule<T> {
    local_rule(
        move |t| t >= reference,
        move |id| meta::after_or_equal(id, &reference),
    )
}

pub fn equal_to<T: HasLocalTime + ?Sized + 'static>(reference: NaiveTime) -> Rule<T> {
    local_rule(move |t| t == reference, move |id| meta::equal_to(id, &reference))
}

fn hour_period<T>(code: TimeCode, name: &'static str, first: u32, last: u32) -> Rule<T>
where
    T: HasLocalTime + ?Sized + 'static,
{
    let (start, end) = (hms(first, 0, 0), hms(last, 59, 59));
    local_rule(
        move |t| (first..=last).contains(&t.hour()),
        move |id| meta::period(id, code, name, &start, &end),
    )
}

fn inclusive_period<T>(
    code: TimeCode,
    name: &'static str,
    start: NaiveTime,
    end: NaiveTime,
) -> Rule<T>
where
    T: HasLocalTime + ?Sized + 'static,
{
    local_rule(
        move |t| t >= start && t <= end,
        move |id| meta::period(id, code, name, &start, &end),
    )
}

/// 00:00:00 to 11:59:59.
pub fn is_morning<T: HasLocalTime + ?Sized + 'static>() -> Rule<T> {
    hour_period(TimeCode::Morning, "morning", 0, 11)
}

/// 12:00:00 to 17:59:59.
pub fn is_afternoon<T: HasLocalTime + ?Sized + 'static>() -> Rule<T> {
    hour_period(TimeCode::Afternoon, "afternoon", 12, 17)
}

/// 18:00:00 to 23:59:59.
pub fn is_evening<T: HasLocalTime + ?Sized + 'static>() -> Rule<T> {
    hour_period(TimeCode::Evening, "evening", 18, 23)
}

/// 08:00:00 to 16:00:00, both ends included.
///
/// # Example
/// ```
/// use chrono::NaiveTime;
/// use fluent_rules::prelude::*;
///
/// let rule = time::is_business_hours::<NaiveTime>();
/// assert!(rule.is_satisfied_by(&NaiveTime::from_hms_opt(16, 0, 0).unwrap()));
/// assert!(!rule.is_satisfied_by(&NaiveTime::from_hms_opt(16, 0, 1).unwrap()));
/// ```
pub fn is_business_hours<T: HasLocalTime + ?Sized + 'static>() -> Rule<T> {
    inclusive_period(TimeCode::BusinessHours, "business hours", hms(8, 0, 0), hms(16, 0, 0))
}

/// 12:00:00 to 13:00:00, both ends included.
pub fn is_lunch_hour<T: HasLocalTime + ?Sized + 'static>() -> Rule<T> {
    inclusive_period(TimeCode::LunchHour, "lunch hour", hms(12, 0, 0), hms(13, 0, 0))
}

fn component_rule<T>(
    code: TimeCode,
    unit: &'static str,
    limit: u32,
    min: u32,
    max: u32,
    component: fn(&NaiveTime) -> u32,
) -> Result<Rule<T>, ConfigError>
where
    T: HasLocalTime + ?Sized + 'static,
{
    ConfigError::check_domain("min", min, 0, limit)?;
    ConfigError::check_domain("max", max, 0, limit)?;
    if min > max {
        return Err(ConfigError::invalid_range(min, max));
    }
    Ok(local_rule(
        move |t| (min..=max).contains(&component(&t)),
        move |id| meta::component_between(id, code, unit, min, max),
    ))
}

/// Hour of day must lie in `min..=max`, both within 0–23.
pub fn hours_between<T>(min: u32, max: u32) -> Result<Rule<T>, ConfigError>
where
    T: HasLocalTime + ?Sized + 'static,
{
    component_rule(TimeCode::HoursBetween, "hour", 23, min, max, NaiveTime::hour)
}

/// Minute of hour must lie in `min..=max`, both within 0–59.
pub fn minutes_between<T>(min: u32, max: u32) -> Result<Rule<T>, ConfigError>
where
    T: HasLocalTime + ?Sized + 'static,
{
    component_rule(TimeCode::MinutesBetween, "minute", 59, min, max, NaiveTime::minute)
}

/// Second of minute must lie in `min..=max`, both within 0–59.
pub fn seconds_between<T>(min: u32, max: u32) -> Result<Rule<T>, ConfigError>
where
    T: HasLocalTime + ?Sized + 'static,
{
    component_rule(TimeCode::SecondsBetween, "second", 59, min, max, NaiveTime::second)
}

/// The value must carry exactly `offset`. Values without an offset, such as
/// a bare [`NaiveTime`], always fail.
pub fn in_timezone<T: HasLocalTime + ?Sized + 'static>(offset: FixedOffset) -> Rule<T> {
    create_skip_null_rule(
        move |v: &T| v.offset() == Some(offset),
        move |id| meta::in_timezone(id, &offset),
    )
}
