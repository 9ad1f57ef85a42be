use crate::error::{Failure, Identifier, Metadata, ResultSink, ValidationResult};

/// A configured, reusable check over a value.
///
/// A rule never returns a verdict directly: when its condition is not met it
/// records exactly one [`Failure`] into the sink it is given. Rules are
/// immutable once built and can be shared across threads.
///
/// # Example
/// ```
/// use fluent_rules::prelude::*;
///
/// let rule = collection::min_size::<Vec<&str>>(2);
/// let mut result = ValidationResult::new();
///
/// rule.apply(Some(&vec!["a"]), &mut result, &Identifier::field("tags"));
/// rule.apply(None, &mut result, &Identifier::field("tags"));
/// assert_eq!(result.failures.len(), 1);
/// ```
pub struct Rule<T: ?Sized> {
    check: Box<dyn Fn(Option<&T>, &mut dyn ResultSink, &Identifier) + Send + Sync>,
}

impl<T: ?Sized> Rule<T> {
    fn from_fn<F>(check: F) -> Self
    where
        F: Fn(Option<&T>, &mut dyn ResultSink, &Identifier) + Send + Sync + 'static,
    {
        Self {
            check: Box::new(check),
        }
    }

    /// Run the rule against `value`, recording at most one failure per
    /// underlying check into `result`.
    pub fn apply(&self, value: Option<&T>, result: &mut dyn ResultSink, identifier: &Identifier) {
        (self.check)(value, result, identifier)
    }

    /// Run the rule against a present value with the root identifier and
    /// return the collected failures.
    pub fn check(&self, value: &T) -> ValidationResult {
        let mut result = ValidationResult::new();
        self.apply(Some(value), &mut result, &Identifier::root());
        result
    }

    /// Whether a present value passes the rule.
    pub fn is_satisfied_by(&self, value: &T) -> bool {
        self.check(value).is_valid()
    }

    /// Compose two rules over the same value. Both always run, so failures
    /// from each are reported.
    pub fn and(self, other: Rule<T>) -> Rule<T>
    where
        T: 'static,
    {
        Rule::from_fn(move |value, result, identifier| {
            self.apply(value, result, identifier);
            other.apply(value, result, identifier);
        })
    }
}

impl<T: ?Sized> std::fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("value", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

fn record(metadata: Metadata, result: &mut dyn ResultSink) {
    tracing::trace!(
        identifier = %metadata.identifier,
        code = metadata.code.key(),
        "rule failed"
    );
    result.add_failure(Failure::new(metadata));
}

/// Build a rule that evaluates `predicate` for every input, including an
/// absent one.
///
/// Only used where absence itself is the property under test, such as
/// [`object::not_null`](crate::primitives::object::not_null).
pub fn create_rule<T, P, M>(predicate: P, metadata: M) -> Rule<T>
where
    T: ?Sized + 'static,
    P: Fn(Option<&T>) -> bool + Send + Sync + 'static,
    M: Fn(&Identifier) -> Metadata + Send + Sync + 'static,
{
    Rule::from_fn(move |value, result, identifier| {
        if !predicate(value) {
            record(metadata(identifier), result);
        }
    })
}

/// Build a rule that treats an absent value as valid and evaluates
/// `predicate` otherwise.
///
/// Presence is checked separately (see `not_null`), so `min_size(5)` on its
/// own tolerates a missing field.
pub fn create_skip_null_rule<T, P, M>(predicate: P, metadata: M) -> Rule<T>
where
    T: ?Sized + 'static,
    P: Fn(&T) -> bool + Send + Sync + 'static,
    M: Fn(&Identifier) -> Metadata + Send + Sync + 'static,
{
    Rule::from_fn(move |value, result, identifier| {
        if let Some(value) = value {
            if !predicate(value) {
                record(metadata(identifier), result);
            }
        }
    })
}

/// Like [`create_skip_null_rule`], but the metadata factory also sees the
/// offending value (used to report actual sizes and lengths).
pub(crate) fn create_skip_null_rule_with_value<T, P, M>(predicate: P, metadata: M) -> Rule<T>
where
    T: ?Sized + 'static,
    P: Fn(&T) -> bool + Send + Sync + 'static,
    M: Fn(&Identifier, &T) -> Metadata + Send + Sync + 'static,
{
    Rule::from_fn(move |value, result, identifier| {
        if let Some(value) = value {
            if !predicate(value) {
                record(metadata(identifier, value), result);
            }
        }
    })
}
