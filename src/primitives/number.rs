//! Numeric rules, generic over any [`Number`].

use std::cmp::Ordering;
use std::fmt::{Debug, Display};

use crate::error::ConfigError;
use crate::metadata::number as meta;
use crate::rule::{create_skip_null_rule, Rule};

/// Ordered numeric type with an additive identity.
///
/// Implemented for every primitive integer and float type, and for
/// `rust_decimal::Decimal` with the `decimal` feature.
pub trait Number: PartialOrd + Copy + Display + Debug + Send + Sync + 'static {
    /// The additive identity of this representation.
    fn zero() -> Self;
}

macro_rules! impl_number {
    ($zero:expr => $($t:ty),+) => {
        $(
            impl Number for $t {
                fn zero() -> Self {
                    $zero
                }
            }
        )+
    };
}

impl_number!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_number!(0.0 => f32, f64);

#[cfg(feature = "decimal")]
impl Number for rust_decimal::Decimal {
    fn zero() -> Self {
        rust_decimal::Decimal::ZERO
    }
}

/// Value must be at least `min`.
///
/// # Example
/// ```
/// use fluent_rules::prelude::*;
///
/// let rule = number::min(18u8);
/// assert!(rule.is_satisfied_by(&18));
/// assert!(!rule.is_satisfied_by(&17));
/// ```
pub fn min<T: Number>(min: T) -> Rule<T> {
    create_skip_null_rule(move |v: &T| *v >= min, move |id| meta::min(id, &min))
}

/// Value must be at most `max`.
pub fn max<T: Number>(max: T) -> Rule<T> {
    create_skip_null_rule(move |v: &T| *v <= max, move |id| meta::max(id, &max))
}

/// Value must lie in `min..=max`. Bounds that do not compare, such as
/// NaN, are rejected like an inverted range.
pub fn range<T: Number>(min: T, max: T) -> Result<Rule<T>, ConfigError> {
    if !matches!(min.partial_cmp(&max), Some(Ordering::Less | Ordering::Equal)) {
        return Err(ConfigError::invalid_range(min, max));
    }
    Ok(create_skip_null_rule(
        move |v: &T| *v >= min && *v <= max,
        move |id| meta::range(id, &min, &max),
    ))
}

/// Strictly greater than zero.
pub fn positive<T: Number>() -> Rule<T> {
    create_skip_null_rule(|v: &T| *v > T::zero(), meta::positive)
}

/// Strictly less than zero.
pub fn negative<T: Number>() -> Rule<T> {
    create_skip_null_rule(|v: &T| *v < T::zero(), meta::negative)
}

pub fn non_zero<T: Number>() -> Rule<T> {
    create_skip_null_rule(|v: &T| *v != T::zero(), meta::non_zero)
}

pub fn non_negative<T: Number>() -> Rule<T> {
    create_skip_null_rule(|v: &T| *v >= T::zero(), meta::non_negative)
}

pub fn non_positive<T: Number>() -> Rule<T> {
    create_skip_null_rule(|v: &T| *v <= T::zero(), meta::non_positive)
}
