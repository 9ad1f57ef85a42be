//! Calendar-aware rules over any [`DateBearing`] value.

use std::sync::Arc;

use chrono::{Datelike, Month, Weekday};

use super::{Clock, DateBearing, SystemClock};
use crate::error::ConfigError;
use crate::metadata::date as meta;
use crate::rule::{create_skip_null_rule, Rule};

/// Value must lie in `min..=max`.
pub fn between<T: DateBearing>(min: T, max: T) -> Result<Rule<T>, ConfigError> {
    if min > max {
        return Err(ConfigError::invalid_range(&min, &max));
    }
    let (lo, hi) = (min.clone(), max.clone());
    Ok(create_skip_null_rule(
        move |v: &T| *v >= lo && *v <= hi,
        move |id| meta::between(id, &min, &max),
    ))
}

/// Strictly before `reference`.
pub fn before<T: DateBearing>(reference: T) -> Rule<T> {
    let shown = reference.clone();
    create_skip_null_rule(
        move |v: &T| *v < reference,
        move |id| meta::before(id, &shown),
    )
}

/// Strictly after `reference`.
pub fn after<T: DateBearing>(reference: T) -> Rule<T> {
    let shown = reference.clone();
    create_skip_null_rule(
        move |v: &T| *v > reference,
        move |id| meta::after(id, &shown),
    )
}

pub fn before_or_equal<T: DateBearing>(reference: T) -> Rule<T> {
    let shown = reference.clone();
    create_skip_null_rule(
        move |v: &T| *v <= reference,
        move |id| meta::before_or_equal(id, &shown),
    )
}

pub fn after_or_equal<T: DateBearing>(reference: T) -> Rule<T> {
    let shown = reference.clone();
    create_skip_null_rule(
        move |v: &T| *v >= reference,
        move |id| meta::after_or_equal(id, &shown),
    )
}

pub fn equal_to<T: DateBearing>(reference: T) -> Rule<T> {
    let shown = reference.clone();
    create_skip_null_rule(
        move |v: &T| *v == reference,
        move |id| meta::equal_to(id, &shown),
    )
}

/// Strictly after the current instant, read from the system clock at every
/// invocation.
pub fn future<T: DateBearing>() -> Rule<T> {
    future_with_clock(Arc::new(SystemClock))
}

/// [`future`] against the given clock.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use chrono::{NaiveDate, TimeZone, Utc};
/// use fluent_rules::prelude::*;
/// use fluent_rules::temporal::FixedClock;
///
/// let clock = Arc::new(FixedClock::utc(Utc.with_ymd_and_hms(2024, 6, 15, 9, 0, 0).unwrap()));
/// let rule = date::future_with_clock::<NaiveDate>(clock);
/// assert!(rule.is_satisfied_by(&NaiveDate::from_ymd_opt(2024, 6, 16).unwrap()));
/// assert!(!rule.is_satisfied_by(&NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()));
/// ```
pub fn future_with_clock<T: DateBearing>(clock: Arc<dyn Clock>) -> Rule<T> {
    create_skip_null_rule(move |v: &T| *v > T::now(clock.as_ref()), meta::future)
}

/// Strictly before the current instant.
pub fn past<T: DateBearing>() -> Rule<T> {
    past_with_clock(Arc::new(SystemClock))
}

pub fn past_with_clock<T: DateBearing>(clock: Arc<dyn Clock>) -> Rule<T> {
    create_skip_null_rule(move |v: &T| *v < T::now(clock.as_ref()), meta::past)
}

/// Now or later.
pub fn present_or_future<T: DateBearing>() -> Rule<T> {
    present_or_future_with_clock(Arc::new(SystemClock))
}

pub fn present_or_future_with_clock<T: DateBearing>(clock: Arc<dyn Clock>) -> Rule<T> {
    create_skip_null_rule(
        move |v: &T| *v >= T::now(clock.as_ref()),
        meta::present_or_future,
    )
}

/// Now or earlier.
pub fn present_or_past<T: DateBearing>() -> Rule<T> {
    present_or_past_with_clock(Arc::new(SystemClock))
}

pub fn present_or_past_with_clock<T: DateBearing>(clock: Arc<dyn Clock>) -> Rule<T> {
    create_skip_null_rule(
        move |v: &T| *v <= T::now(clock.as_ref()),
        meta::present_or_past,
    )
}

fn is_weekend_day(day: Weekday) -> bool {
    matches!(day, Weekday::Sat | Weekday::Sun)
}

/// Monday to Friday.
pub fn is_weekday<T: DateBearing>() -> Rule<T> {
    create_skip_null_rule(
        |v: &T| !is_weekend_day(v.calendar_date().weekday()),
        meta::weekday,
    )
}

/// Saturday or Sunday.
pub fn is_weekend<T: DateBearing>() -> Rule<T> {
    create_skip_null_rule(
        |v: &T| is_weekend_day(v.calendar_date().weekday()),
        meta::weekend,
    )
}

pub fn in_month<T: DateBearing>(month: Month) -> Rule<T> {
    create_skip_null_rule(
        move |v: &T| v.calendar_date().month() == month.number_from_month(),
        move |id| meta::in_month(id, &month),
    )
}

pub fn in_year<T: DateBearing>(year: i32) -> Rule<T> {
    create_skip_null_rule(
        move |v: &T| v.calendar_date().year() == year,
        move |id| meta::in_year(id, year),
    )
}
