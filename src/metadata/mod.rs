//! Metadata constructors, one per rule kind.
//!
//! Every rule pairs its predicate with one of these functions. The rule only
//! builds the descriptor; rendering and translation belong to
//! [`crate::format`] and [`crate::i18n`].

pub mod allowed;
pub mod collection;
pub mod date;
pub mod map;
pub mod number;
pub mod object;
pub mod string;
pub mod time;

/// Render a list of reference values as `a, b, c`.
pub(crate) fn join_debug<T: std::fmt::Debug>(values: &[T]) -> String {
    values
        .iter()
        .map(|v| format!("{:?}", v))
        .collect::<Vec<_>>()
        .join(", ")
}
