//! # fluent-rules — Composable, null-tolerant validation rules
//!
//! `fluent-rules` is a catalog of small, reusable validation rules for
//! strings, numbers, collections, maps, allowed-value sets, dates and times
//! of day. A rule is configured once, then applied any number of times to
//! a possibly-absent value; when its condition does not hold it records a
//! structured [`Failure`](error::Failure) into a result sink.
//!
//! Except for `object::not_null`, `object::must_be_null` and
//! `string::not_blank`, every rule treats an absent value as valid.
//! Presence is a separate concern.
//!
//! ## Quick Start
//!
//! ```rust
//! use fluent_rules::prelude::*;
//!
//! let username = object::not_null::<str>()
//!     .and(string::min_length(3))
//!     .and(string::no_whitespace());
//!
//! let mut result = ValidationResult::new();
//! username.apply(Some("al ex"), &mut result, &Identifier::field("username"));
//! username.apply(None, &mut result, &Identifier::field("nickname"));
//!
//! assert_eq!(result.failures.len(), 2);
//! assert_eq!(result.failures[0].code().key(), "string.no_whitespace");
//! assert_eq!(result.failures[1].code().key(), "object.not_null");
//! ```
//!
//! Rules with configuration that can be wrong return a [`ConfigError`](error::ConfigError)
//! at construction time instead:
//!
//! ```rust
//! use fluent_rules::prelude::*;
//!
//! assert!(string::length_between(5, 2).is_err());
//! assert!(allowed::is_one_of(Vec::<String>::new()).is_err());
//! ```

pub mod collections;
pub mod error;
pub mod format;
pub mod i18n;
mod macros;
pub mod metadata;
pub mod primitives;
pub mod rule;
#[cfg(feature = "chrono")]
pub mod temporal;

// Re-export regex_lite when the `regex` feature is enabled
#[cfg(feature = "regex")]
pub use regex_lite;

#[cfg(feature = "chrono")]
pub use chrono;

/// Everything needed to build and apply rules.
///
/// The rule catalogs are exported as modules, so call sites read
/// `string::min_length(3)` or `map::contains_key("id")`.
pub mod prelude {
    pub use crate::collections::{collection, map, Collection, MapLike};
    pub use crate::error::{
        ConfigError, Failure, FailureCode, Identifier, Metadata, PathSegment, ResultSink,
        ValidationResult,
    };
    pub use crate::format::{flatten_result, prettify_result, treeify_result};
    pub use crate::primitives::{allowed, number, object, string};
    pub use crate::primitives::{EnumCandidate, EnumConstants, Number};
    pub use crate::rule::{create_rule, create_skip_null_rule, Rule};
    #[cfg(feature = "chrono")]
    pub use crate::temporal::{
        date, time, Clock, DateBearing, FixedClock, HasLocalTime, OffsetTime, SystemClock,
    };
}
